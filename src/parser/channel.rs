use crate::domain::Feed;
use crate::errors::{ParseError, ParseResult};
use crate::messages::MessageSink;
use crate::parser::item::extract_item;
use crate::xml;

/// Parses a raw RSS document into a [`Feed`].
///
/// Structural problems (undecodable XML, missing root/channel/items) abort
/// the parse; an invalid item only drops that item, reported through the
/// sink, and parsing continues.
pub fn parse_feed(raw: &str, sink: &dyn MessageSink) -> ParseResult<Feed> {
    sink.add_message("Parsing feed by elements");

    let tree = xml::decode(raw).map_err(|_| invalid_feed())?;
    let channel = tree
        .get("rss")
        .and_then(|rss| rss.get("channel"))
        .ok_or_else(invalid_feed)?;
    let raw_items = channel.get("item").ok_or_else(invalid_feed)?;

    sink.add_message("Parsing item details");
    let mut items = Vec::new();
    for node in raw_items.as_items() {
        match extract_item(node).validate() {
            Some(item) => items.push(item),
            None => sink.add_message("Item skipped: required fields are absent"),
        }
    }

    sink.add_message("Parsing finished");
    Ok(Feed::new(items))
}

fn invalid_feed() -> ParseError {
    ParseError::InvalidFeed("source doesn't contain a valid RSS feed".to_string())
}
