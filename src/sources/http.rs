use std::time::Duration;

use reqwest::blocking::Client;

use crate::errors::ParseResult;

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Blocking HTTP collaborator; the only shape the URL adapter needs.
#[cfg_attr(test, mockall::automock)]
pub trait HttpFetch {
    fn get(&self, url: &str) -> ParseResult<HttpResponse>;
}

pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpFetch for HttpClient {
    fn get(&self, url: &str) -> ParseResult<HttpResponse> {
        let response = self.client.get(url).send()?;
        let status = response.status().as_u16();
        let body = response.text()?;

        Ok(HttpResponse { status, body })
    }
}
