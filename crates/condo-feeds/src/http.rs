//! HTTP source — `GET` a JSON endpoint (typically a published spreadsheet
//! script).

use crate::{FetchError, Source};
use async_trait::async_trait;

pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(url, reqwest::Client::new())
    }

    pub fn with_client(url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            url: url.into(),
            client,
        }
    }
}

#[async_trait]
impl Source for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<serde_json::Value, FetchError> {
        tracing::debug!(url = %self.url, "http: fetching payload");
        let resp = self.client.get(&self.url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("").to_string(),
            });
        }

        let body = resp.bytes().await?;
        tracing::debug!(bytes = body.len(), "http: payload received");
        Ok(serde_json::from_slice(&body)?)
    }
}
