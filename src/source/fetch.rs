//! Hand-written fetch per query; the HTTP outcome is mapped here

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::PokeSource;
use crate::api::{http_client, ApiError};
use crate::state::{DetailRecord, Listing};

pub struct FetchSource {
    base_url: String,
}

impl FetchSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{path}", self.base_url);
        tracing::debug!(%url, "fetch");
        let response = http_client()
            .get(&url)
            .send()
            .await
            .map_err(|err| ApiError::Request(err.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        response
            .json::<T>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }
}

#[async_trait]
impl PokeSource for FetchSource {
    async fn listing(&self, limit: u32) -> Result<Listing, ApiError> {
        self.get(&listing_path(limit)).await
    }

    async fn detail(&self, name: &str) -> Result<DetailRecord, ApiError> {
        self.get(&detail_path(name)).await
    }
}

fn listing_path(limit: u32) -> String {
    format!("pokemon?limit={limit}")
}

/// Path for the requested name, never a fixed record
fn detail_path(name: &str) -> String {
    format!("pokemon/{name}")
}
