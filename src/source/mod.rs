//! Data sources behind the two queries

mod fetch;
mod fixtures;
mod query;

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::{ApiError, DiskCache};
use crate::config::{Config, SourceKind};
use crate::state::{DetailRecord, Listing};

pub use fetch::FetchSource;
pub use fixtures::{sample_detail, sample_listing, StaticSource};
pub use query::{BaseQuery, Endpoint, QuerySource, DETAIL_ENDPOINT, LISTING_ENDPOINT};

#[async_trait]
pub trait PokeSource: Send + Sync {
    /// First `limit` entries of the collection
    async fn listing(&self, limit: u32) -> Result<Listing, ApiError>;

    /// Detail record by name or numeric id
    async fn detail(&self, name: &str) -> Result<DetailRecord, ApiError>;

    /// Disk cache shared with sprite downloads, if this source keeps one
    fn cache(&self) -> Option<&DiskCache> {
        None
    }
}

pub fn source_for(config: &Config) -> Arc<dyn PokeSource> {
    match config.source {
        SourceKind::Static => Arc::new(StaticSource),
        SourceKind::Query => {
            let cache = config.use_disk_cache.then(DiskCache::user_default);
            Arc::new(QuerySource::new(BaseQuery::new(
                config.normalized_base_url(),
                cache,
            )))
        }
        SourceKind::Fetch => Arc::new(FetchSource::new(config.normalized_base_url())),
    }
}
