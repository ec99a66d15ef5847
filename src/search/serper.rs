use crate::error::{FetchError, Result};
use crate::search::{ImageApi, SearchRequest, SearchResponse};
use crate::utils::http::build_client;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_ENDPOINT: &str = "https://google.serper.dev/images";

/// Serper.dev image search
pub struct SerperClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl SerperClient {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout)?,
            endpoint: endpoint.into(),
            api_key,
        })
    }
}

#[async_trait]
impl ImageApi for SerperClient {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse> {
        let mut builder = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json");

        // Without a key the request goes out unauthenticated and the API rejects it
        if let Some(key) = &self.api_key {
            builder = builder.header("X-API-KEY", key);
        }

        let response = builder.json(request).send().await?;
        let status = response.status();
        debug!("Search response status: {}", status);

        if status != reqwest::StatusCode::OK {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| FetchError::Parse(e.to_string()))
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            debug!("Image {} answered {}, keeping body", url, response.status());
        }

        Ok(response.bytes().await?.to_vec())
    }
}
