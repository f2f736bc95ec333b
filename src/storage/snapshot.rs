use std::fs;
use std::path::PathBuf;

use crate::domain::Feed;
use crate::errors::ParseResult;
use crate::sources::{FeedSource, JsonSnapshotSource};

/// Load/save pair for the JSON snapshot of the last fetched feed.
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loads the stashed feed; an absent snapshot is an empty feed.
    pub fn load(&self) -> ParseResult<Feed> {
        JsonSnapshotSource::new(self.path.clone()).parse()
    }

    pub fn save(&self, feed: &Feed) -> ParseResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(feed)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
