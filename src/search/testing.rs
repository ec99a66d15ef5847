use crate::error::{FetchError, Result};
use crate::search::{ImageApi, SearchItem, SearchRequest, SearchResponse};
use async_trait::async_trait;
use std::collections::HashMap;
use std::io;
use std::sync::Mutex;

pub enum ScriptedSearch {
    Images(Vec<SearchItem>),
    Status(u16),
    Invalid,
}

/// In-memory `ImageApi` answering from a fixed script
pub struct ScriptedApi {
    search: ScriptedSearch,
    bodies: HashMap<String, Vec<u8>>,
    pub queries: Mutex<Vec<SearchRequest>>,
    pub downloads: Mutex<Vec<String>>,
}

impl ScriptedApi {
    pub fn new(search: ScriptedSearch) -> Self {
        Self {
            search,
            bodies: HashMap::new(),
            queries: Mutex::new(Vec::new()),
            downloads: Mutex::new(Vec::new()),
        }
    }

    /// Serve `body` for `url`; any URL without a body fails to download
    pub fn with_body(mut self, url: &str, body: &[u8]) -> Self {
        self.bodies.insert(url.to_string(), body.to_vec());
        self
    }
}

pub fn item(thumbnail: Option<&str>, url: Option<&str>) -> SearchItem {
    SearchItem {
        thumbnail_url: thumbnail.map(str::to_string),
        url: url.map(str::to_string),
    }
}

#[async_trait]
impl ImageApi for ScriptedApi {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse> {
        self.queries.lock().unwrap().push(request.clone());
        match &self.search {
            ScriptedSearch::Images(items) => Ok(SearchResponse {
                images: Some(items.clone()),
            }),
            ScriptedSearch::Status(code) => Err(FetchError::Status(*code)),
            ScriptedSearch::Invalid => Err(FetchError::Parse("expected value at line 1".into())),
        }
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>> {
        self.downloads.lock().unwrap().push(url.to_string());
        self.bodies.get(url).cloned().ok_or_else(|| {
            FetchError::Io(io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused"))
        })
    }
}
