use std::sync::Mutex;

/// Side channel for human-readable progress and diagnostics.
///
/// Sinks are decoupled from control flow: parsing never changes behavior
/// based on what a sink does with its messages.
pub trait MessageSink {
    fn add_message(&self, text: &str);
}

/// Default sink that discards every message.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl MessageSink for NoopSink {
    fn add_message(&self, _text: &str) {}
}

/// Prints messages to stdout; wired up by the CLI in verbose mode.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl MessageSink for ConsoleSink {
    fn add_message(&self, text: &str) {
        println!("{text}");
    }
}

/// Collects messages in memory, safe for sequential reuse across parses.
#[derive(Debug, Default)]
pub struct MemorySink {
    messages: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|messages| messages.clone())
            .unwrap_or_default()
    }
}

impl MessageSink for MemorySink {
    fn add_message(&self, text: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(text.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_records_in_order() {
        let sink = MemorySink::new();
        sink.add_message("first");
        sink.add_message("second");
        assert_eq!(sink.messages(), vec!["first", "second"]);
    }

    #[test]
    fn test_noop_sink_accepts_messages() {
        NoopSink.add_message("dropped");
    }
}
