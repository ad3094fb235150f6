//! Runtime configuration resolved from the command line

use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::DEFAULT_PAGE_SIZE;

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2/";

/// Which data source backs the queries
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// Embedded sample data, no network for listing or details
    Static,
    /// Declared endpoints executed by a shared, cached request builder
    #[default]
    Query,
    /// Hand-written fetch per query
    Fetch,
}

impl SourceKind {
    pub fn label(&self) -> &'static str {
        match self {
            SourceKind::Static => "static",
            SourceKind::Query => "query",
            SourceKind::Fetch => "fetch",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub source: SourceKind,
    pub base_url: String,
    pub page_size: u32,
    pub use_disk_cache: bool,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: SourceKind::default(),
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            use_disk_cache: true,
            log_file: None,
        }
    }
}

impl Config {
    /// Base URL with exactly one trailing slash, so endpoint paths join cleanly
    pub fn normalized_base_url(&self) -> String {
        format!("{}/", self.base_url.trim_end_matches('/'))
    }
}
