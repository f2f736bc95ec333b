use std::fs;
use std::path::PathBuf;

use crate::domain::Feed;
use crate::errors::ParseResult;
use crate::sources::traits::FeedSource;

/// Feed source over a previously-serialized JSON snapshot.
///
/// The snapshot was written from already-validated items, so this path
/// deserializes straight into the feed shape without re-running extraction
/// or validation.
pub struct JsonSnapshotSource {
    path: PathBuf,
}

impl JsonSnapshotSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FeedSource for JsonSnapshotSource {
    fn parse(&self) -> ParseResult<Feed> {
        // Nothing stashed yet is not an error
        if !self.path.exists() {
            return Ok(Feed::default());
        }

        let raw = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ParseError;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_empty_feed() {
        let dir = TempDir::new().unwrap();
        let source = JsonSnapshotSource::new(dir.path().join("absent.json"));

        let feed = source.parse().unwrap();
        assert!(feed.is_empty());
    }

    #[test]
    fn test_reads_serialized_feed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("stash.json");
        std::fs::write(
            &path,
            r#"{"items":[{"title":"T","description":null,"published":"2024-01-01T00:00:00Z","link":"L","image_url":null,"source":"https://example.com/feed"}]}"#,
        )
        .unwrap();

        let feed = JsonSnapshotSource::new(path).parse().unwrap();
        assert_eq!(feed.len(), 1);
        assert_eq!(feed.items[0].title, "T");
        assert_eq!(feed.items[0].source.as_deref(), Some("https://example.com/feed"));
    }

    #[test]
    fn test_malformed_snapshot_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = JsonSnapshotSource::new(path).parse().unwrap_err();
        assert!(matches!(err, ParseError::Snapshot(_)));
    }
}
