//! Declared endpoints executed by one shared request builder

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::PokeSource;
use crate::api::{fetch_json_cached, ApiError, DiskCache};
use crate::state::{DetailRecord, Listing};

/// A named query: argument in, path relative to the base URL out
pub struct Endpoint<A: ?Sized> {
    pub name: &'static str,
    pub path: fn(&A) -> String,
}

pub const LISTING_ENDPOINT: Endpoint<u32> = Endpoint {
    name: "getPokemonList",
    path: listing_path,
};

pub const DETAIL_ENDPOINT: Endpoint<str> = Endpoint {
    name: "getPokemonByName",
    path: detail_path,
};

fn listing_path(limit: &u32) -> String {
    format!("pokemon?limit={limit}")
}

fn detail_path(name: &str) -> String {
    format!("pokemon/{name}")
}

/// Resolves endpoint paths against a base URL and performs the GET
#[derive(Clone, Debug)]
pub struct BaseQuery {
    base_url: String,
    cache: Option<DiskCache>,
}

impl BaseQuery {
    pub fn new(base_url: impl Into<String>, cache: Option<DiskCache>) -> Self {
        Self {
            base_url: base_url.into(),
            cache,
        }
    }

    pub fn cache(&self) -> Option<&DiskCache> {
        self.cache.as_ref()
    }

    pub fn url_for<A: ?Sized>(&self, endpoint: &Endpoint<A>, arg: &A) -> String {
        format!("{}{}", self.base_url, (endpoint.path)(arg))
    }

    pub async fn run<A: ?Sized, T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint<A>,
        arg: &A,
    ) -> Result<T, ApiError> {
        let url = self.url_for(endpoint, arg);
        tracing::debug!(endpoint = endpoint.name, %url, "running query");
        fetch_json_cached(&url, self.cache.as_ref()).await
    }
}

pub struct QuerySource {
    base: BaseQuery,
}

impl QuerySource {
    pub fn new(base: BaseQuery) -> Self {
        Self { base }
    }
}

#[async_trait]
impl PokeSource for QuerySource {
    async fn listing(&self, limit: u32) -> Result<Listing, ApiError> {
        self.base.run(&LISTING_ENDPOINT, &limit).await
    }

    async fn detail(&self, name: &str) -> Result<DetailRecord, ApiError> {
        self.base.run(&DETAIL_ENDPOINT, name).await
    }

    fn cache(&self) -> Option<&DiskCache> {
        self.base.cache()
    }
}
