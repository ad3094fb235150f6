//! HTTP plumbing shared by the network-backed sources

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::de::DeserializeOwned;
use sha2::{Digest, Sha256};
use tokio::fs;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("response parse error: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => ApiError::Status(status.as_u16()),
            None => ApiError::Request(err.to_string()),
        }
    }
}

pub fn http_client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(reqwest::Client::new)
}

/// GET a URL, rejecting non-2xx statuses
pub async fn fetch_bytes(url: &str) -> Result<Vec<u8>, ApiError> {
    tracing::debug!(url, "GET");
    let response = http_client().get(url).send().await?;
    let response = response.error_for_status()?;
    Ok(response.bytes().await?.to_vec())
}

/// On-disk response cache keyed by the SHA-256 of the request URL
#[derive(Clone, Debug)]
pub struct DiskCache {
    root: PathBuf,
}

impl DiskCache {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// `$XDG_CACHE_HOME/pokedex` or a local `.cache/pokedex`
    pub fn user_default() -> Self {
        let base = dirs_next::cache_dir().unwrap_or_else(|| PathBuf::from(".cache"));
        Self::new(base.join("pokedex"))
    }

    pub fn path_for(&self, url: &str) -> PathBuf {
        let mut hasher = Sha256::new();
        hasher.update(url.as_bytes());
        let digest = hex::encode(hasher.finalize());
        self.root.join("http").join(digest)
    }

    pub async fn read(&self, url: &str) -> Option<Vec<u8>> {
        fs::read(self.path_for(url)).await.ok()
    }

    pub async fn write(&self, url: &str, bytes: &[u8]) {
        let path = self.path_for(url);
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent).await;
        }
        if let Err(err) = fs::write(&path, bytes).await {
            tracing::warn!(path = %path.display(), %err, "cache write failed");
        }
    }

    pub async fn evict(&self, url: &str) {
        let _ = fs::remove_file(self.path_for(url)).await;
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// GET through an optional disk cache; a successful body is cached
pub async fn fetch_bytes_cached(url: &str, cache: Option<&DiskCache>) -> Result<Vec<u8>, ApiError> {
    if let Some(cache) = cache {
        if let Some(bytes) = cache.read(url).await {
            tracing::debug!(url, "cache hit");
            return Ok(bytes);
        }
    }
    let bytes = fetch_bytes(url).await?;
    if let Some(cache) = cache {
        cache.write(url, &bytes).await;
    }
    Ok(bytes)
}

/// Cached GET decoded as JSON; undecodable cache entries are evicted
pub async fn fetch_json_cached<T: DeserializeOwned>(
    url: &str,
    cache: Option<&DiskCache>,
) -> Result<T, ApiError> {
    let bytes = fetch_bytes_cached(url, cache).await?;
    match serde_json::from_slice(&bytes) {
        Ok(value) => Ok(value),
        Err(err) => {
            if let Some(cache) = cache {
                tracing::warn!(url, %err, "evicting undecodable cache entry");
                cache.evict(url).await;
            }
            Err(ApiError::Decode(err.to_string()))
        }
    }
}
