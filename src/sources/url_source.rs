use std::sync::Arc;

use url::Url;

use crate::domain::Feed;
use crate::errors::{ParseError, ParseResult};
use crate::messages::{MessageSink, NoopSink};
use crate::sources::http::{HttpClient, HttpFetch};
use crate::sources::traits::FeedSource;
use crate::sources::xml_source::XmlSource;

/// Feed source that fetches RSS XML from a URL with one blocking GET, then
/// stamps every resulting item with the originating source string.
pub struct UrlSource {
    source: String,
    fetcher: Box<dyn HttpFetch>,
    sink: Arc<dyn MessageSink>,
}

impl UrlSource {
    pub fn new(source: impl Into<String>) -> Self {
        Self::with_fetcher(source, Box::new(HttpClient::new()))
    }

    pub fn with_fetcher(source: impl Into<String>, fetcher: Box<dyn HttpFetch>) -> Self {
        Self {
            source: source.into(),
            fetcher,
            sink: Arc::new(NoopSink),
        }
    }

    pub fn with_sink(mut self, sink: Arc<dyn MessageSink>) -> Self {
        self.sink = sink;
        self
    }

    fn fetch_body(&self) -> ParseResult<String> {
        let parsed = Url::parse(&self.source)
            .map_err(|_| ParseError::InvalidSource(self.source.clone()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ParseError::InvalidSource(self.source.clone()));
        }

        self.sink
            .add_message(&format!("Reaching out to {}", self.source));
        let response = self.fetcher.get(&self.source).map_err(|_| {
            self.sink.add_message("Unable to connect");
            ParseError::Unreachable(self.source.clone())
        })?;

        if !(200..300).contains(&response.status) {
            self.sink
                .add_message("Encountered an error while reading the feed");
            return Err(ParseError::Unreachable(self.source.clone()));
        }

        Ok(response.body)
    }
}

impl FeedSource for UrlSource {
    fn parse(&self) -> ParseResult<Feed> {
        let body = self.fetch_body()?;

        let mut feed = XmlSource::new(body)
            .with_sink(Arc::clone(&self.sink))
            .parse()?;
        for item in &mut feed.items {
            item.source = Some(self.source.clone());
        }

        Ok(feed)
    }
}
