use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};

/// Number of results requested from the search API
pub const RESULT_COUNT: u32 = 10;

/// Body of the search POST
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    pub q: String,
    pub num: u32,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            q: query.into(),
            num: RESULT_COUNT,
        }
    }
}

/// One entry of the `images` array
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchItem {
    #[serde(default, deserialize_with = "string_or_none")]
    pub thumbnail_url: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub url: Option<String>,
}

impl SearchItem {
    /// The thumbnail when present, otherwise the full-size URL. Empty strings
    /// count as missing.
    pub fn chosen_url(&self) -> Option<&str> {
        [&self.thumbnail_url, &self.url]
            .into_iter()
            .filter_map(|url| url.as_deref())
            .find(|url| !url.is_empty())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default, deserialize_with = "lenient_items")]
    images: Option<Vec<SearchItem>>,
}

/// Non-string URL values count as missing
fn string_or_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_str().map(str::to_string))
}

/// A malformed entry becomes an item without URLs, so only that entry is skipped
fn lenient_items<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<Vec<SearchItem>>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?;
    Ok(values.map(|values| {
        values
            .into_iter()
            .map(|value| serde_json::from_value(value).unwrap_or_default())
            .collect()
    }))
}

impl SearchResponse {
    pub fn into_images(self) -> Vec<SearchItem> {
        self.images.unwrap_or_default()
    }
}

/// Transport used by the fetch procedure
#[async_trait]
pub trait ImageApi: Send + Sync {
    /// Run one image search. A non-success status is `FetchError::Status`.
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse>;

    /// Plain GET of an image URL, returning the raw body
    async fn download(&self, url: &str) -> Result<Vec<u8>>;
}

pub mod serper;

#[cfg(test)]
pub mod testing;
