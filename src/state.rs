//! Application state - single source of truth

use std::collections::HashMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tui_dispatch::DataResource;
use tui_dispatch_debug::debug::{ron_string, DebugSection, DebugState};

use crate::config::SourceKind;
use crate::envelope::Envelope;
use crate::sprite::SpriteData;

pub const DEFAULT_PAGE_SIZE: u32 = 9;

/// `{name, url}` pair used all over the remote API
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// One row of the collection endpoint
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ListingEntry {
    pub name: String,
    pub url: String,
}

/// Paginated collection response
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Listing {
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<ListingEntry>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TypeSlot {
    pub slot: u32,
    #[serde(rename = "type")]
    pub type_info: NamedResource,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Sprites {
    pub front_default: Option<String>,
}

/// Attribute bundle for a single creature
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DetailRecord {
    pub id: u32,
    pub name: String,
    pub height: u32,
    pub weight: u32,
    pub types: Vec<TypeSlot>,
    pub sprites: Sprites,
}

impl DetailRecord {
    /// Type names in the order the record lists them
    pub fn type_names(&self) -> Vec<&str> {
        self.types
            .iter()
            .map(|slot| slot.type_info.name.as_str())
            .collect()
    }
}

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    pub source: SourceKind,
    pub page_size: u32,

    /// Selected creature name; `None` shows the list
    pub selected: Option<String>,
    pub list_cursor: usize,

    /// Listing query for `page_size`
    pub listing: DataResource<Listing>,
    /// Detail queries keyed by name
    pub details: HashMap<String, DataResource<DetailRecord>>,
    /// Sprite images keyed by URL
    pub sprites: HashMap<String, DataResource<SpriteData>>,

    pub terminal_size: (u16, u16),
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(SourceKind::default(), DEFAULT_PAGE_SIZE)
    }
}

impl AppState {
    pub fn new(source: SourceKind, page_size: u32) -> Self {
        Self {
            source,
            page_size,
            selected: None,
            list_cursor: 0,
            listing: DataResource::Empty,
            details: HashMap::new(),
            sprites: HashMap::new(),
            terminal_size: (80, 24),
        }
    }

    pub fn listing_envelope(&self) -> Envelope<'_, Listing> {
        Envelope::from_resource(&self.listing)
    }

    pub fn detail_envelope(&self, name: &str) -> Envelope<'_, DetailRecord> {
        Envelope::from_optional(self.details.get(name))
    }

    /// Envelope of the currently selected creature, if any
    pub fn selected_detail(&self) -> Option<Envelope<'_, DetailRecord>> {
        let name = self.selected.as_deref()?;
        Some(self.detail_envelope(name))
    }

    pub fn sprite(&self, url: &str) -> Option<&SpriteData> {
        self.sprites.get(url).and_then(|sprite| sprite.data())
    }

    pub fn entries(&self) -> &[ListingEntry] {
        self.listing
            .data()
            .map(|listing| listing.results.as_slice())
            .unwrap_or_default()
    }

    pub fn cursor_entry(&self) -> Option<&ListingEntry> {
        self.entries().get(self.list_cursor)
    }
}

impl DebugState for AppState {
    fn debug_sections(&self) -> Vec<DebugSection> {
        vec![
            DebugSection::new("Pokedex")
                .entry("source", ron_string(&self.source))
                .entry("page_size", ron_string(&self.page_size))
                .entry("selected", ron_string(&self.selected))
                .entry("cursor", ron_string(&self.list_cursor)),
            DebugSection::new("Queries")
                .entry("listing", phase_label(&self.listing).to_string())
                .entry("entries", ron_string(&self.entries().len()))
                .entry("details", ron_string(&self.details.len()))
                .entry("sprites", ron_string(&self.sprites.len())),
        ]
    }
}

fn phase_label<T>(resource: &DataResource<T>) -> &'static str {
    if resource.is_loaded() {
        "loaded"
    } else if resource.is_failed() {
        "failed"
    } else if resource.is_loading() {
        "loading"
    } else {
        "empty"
    }
}
