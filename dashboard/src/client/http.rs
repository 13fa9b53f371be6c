use std::time::Duration;

use tracing::debug;

use super::{Backend, Reply, Request};
use crate::error::Result;

/// reqwest-backed client for the hostel REST API.
pub struct HttpBackend {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpBackend {
    pub fn new(base_url: &str) -> Result<Self> {
        // No timeout and no retry: a hung backend keeps the call pending.
        let client = reqwest::blocking::Client::builder().timeout(None::<Duration>).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Backend for HttpBackend {
    fn send(&self, request: &Request) -> Result<Reply> {
        let url = self.url(request.path());
        let response = match request {
            Request::Get { .. } => {
                debug!(%url, "GET");
                self.client.get(&url).send()?
            }
            Request::Post { body, .. } => {
                debug!(%url, "POST");
                self.client.post(&url).json(body).send()?
            }
        };

        let status = response.status().as_u16();
        let body = response.text()?;
        Ok(Reply { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_base_and_path() {
        let backend = HttpBackend::new("http://localhost:8000").unwrap();
        assert_eq!(backend.url("/api/rooms"), "http://localhost:8000/api/rooms");
    }

    #[test]
    fn trailing_slash_on_base_is_dropped() {
        let backend = HttpBackend::new("http://hostel.internal:9000/").unwrap();
        assert_eq!(backend.base_url(), "http://hostel.internal:9000");
        assert_eq!(
            backend.url("/api/complaints/analyze"),
            "http://hostel.internal:9000/api/complaints/analyze"
        );
    }
}
