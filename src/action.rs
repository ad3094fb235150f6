//! Actions - user intents and async results

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::sprite::SpriteData;
use crate::state::{DetailRecord, Listing};

#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    /// Mount the list view and issue its query
    Init,

    // ===== Listing category =====
    ListingDidLoad(Listing),
    ListingDidError(String),

    // ===== Selection =====
    /// Move the list cursor (by index)
    ListCursor(usize),
    /// Show the detail view for a name
    PokemonSelect(String),
    /// Back to the list view
    PokemonDeselect,

    // ===== Detail category =====
    /// Result for the requested `name`, whatever name the record carries
    DetailDidLoad { name: String, detail: DetailRecord },
    DetailDidError { name: String, error: String },

    // ===== Sprite category =====
    SpriteDidLoad { url: String, sprite: SpriteData },
    SpriteDidError { url: String, error: String },

    // ===== UI category =====
    UiTerminalResize(u16, u16),

    Quit,
}
