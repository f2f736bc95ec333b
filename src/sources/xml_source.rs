use std::sync::Arc;

use crate::domain::Feed;
use crate::errors::ParseResult;
use crate::messages::{MessageSink, NoopSink};
use crate::parser::parse_feed;
use crate::sources::traits::FeedSource;

/// Feed source over literal RSS XML text.
pub struct XmlSource {
    xml: String,
    sink: Arc<dyn MessageSink>,
}

impl XmlSource {
    pub fn new(xml: impl Into<String>) -> Self {
        Self {
            xml: xml.into(),
            sink: Arc::new(NoopSink),
        }
    }

    pub fn with_sink(mut self, sink: Arc<dyn MessageSink>) -> Self {
        self.sink = sink;
        self
    }
}

impl FeedSource for XmlSource {
    fn parse(&self) -> ParseResult<Feed> {
        parse_feed(&self.xml, self.sink.as_ref())
    }
}
