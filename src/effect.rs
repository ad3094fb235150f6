//! Effects - side effects declared by the reducer

use tui_dispatch::TaskKey;

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Fetch the first `limit` entries of the collection
    FetchListing { limit: u32 },
    /// Fetch one detail record by name
    FetchDetail { name: String },
    /// Fetch and decode a sprite image
    FetchSprite { url: String },
}

impl Effect {
    /// Task key; one in-flight task per query key
    pub fn task_key(&self) -> TaskKey {
        TaskKey::new(self.key_label())
    }

    pub fn key_label(&self) -> String {
        match self {
            Effect::FetchListing { limit } => format!("listing_{limit}"),
            Effect::FetchDetail { name } => format!("detail_{name}"),
            Effect::FetchSprite { url } => format!("sprite_{url}"),
        }
    }
}
