use crate::domain::Feed;
use crate::errors::ParseResult;

/// One way of obtaining raw feed data (text, URL, snapshot file) and turning
/// it into a [`Feed`]. The variant set is closed and picked by the caller at
/// construction time.
pub trait FeedSource {
    /// Reads and returns a feed from this adapter's source.
    fn parse(&self) -> ParseResult<Feed>;
}
