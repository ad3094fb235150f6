//! Reducer - pure function: (state, action) -> DispatchResult
//!
//! The reducer doubles as the query cache front: `query_listing`,
//! `query_detail` and `query_sprite` only emit a fetch when the key has no
//! result yet or its last attempt failed. Loading and loaded keys are shared.

use tui_dispatch::{DataResource, DispatchResult};

use crate::action::Action;
use crate::effect::Effect;
use crate::state::AppState;

pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        Action::Init => match query_listing(state) {
            Some(effect) => DispatchResult::changed_with(effect),
            None => DispatchResult::unchanged(),
        },

        Action::ListingDidLoad(listing) => {
            state.listing = DataResource::Loaded(listing);
            let len = state.entries().len();
            if state.list_cursor >= len {
                state.list_cursor = len.saturating_sub(1);
            }
            DispatchResult::changed()
        }

        Action::ListingDidError(error) => {
            state.listing = DataResource::Failed(error);
            DispatchResult::changed()
        }

        Action::ListCursor(index) => {
            if index < state.entries().len() && index != state.list_cursor {
                state.list_cursor = index;
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::PokemonSelect(name) => {
            if state.selected.as_deref() == Some(name.as_str()) {
                return DispatchResult::unchanged();
            }
            state.selected = Some(name.clone());
            let mut effects = Vec::new();
            effects.extend(query_detail(state, &name));
            // A cached record may still lack its sprite.
            let sprite_url = state
                .details
                .get(&name)
                .and_then(|detail| detail.data())
                .and_then(|detail| detail.sprites.front_default.clone());
            if let Some(url) = sprite_url {
                effects.extend(query_sprite(state, &url));
            }
            DispatchResult::changed_with_many(effects)
        }

        Action::PokemonDeselect => {
            if state.selected.take().is_some() {
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::DetailDidLoad { name, detail } => {
            let sprite_url = detail.sprites.front_default.clone();
            state.details.insert(name, DataResource::Loaded(detail));
            match sprite_url.and_then(|url| query_sprite(state, &url)) {
                Some(effect) => DispatchResult::changed_with(effect),
                None => DispatchResult::changed(),
            }
        }

        Action::DetailDidError { name, error } => {
            state.details.insert(name, DataResource::Failed(error));
            DispatchResult::changed()
        }

        Action::SpriteDidLoad { url, sprite } => {
            state.sprites.insert(url, DataResource::Loaded(sprite));
            DispatchResult::changed()
        }

        Action::SpriteDidError { url, error } => {
            state.sprites.insert(url, DataResource::Failed(error));
            DispatchResult::changed()
        }

        Action::UiTerminalResize(width, height) => {
            if state.terminal_size == (width, height) {
                return DispatchResult::unchanged();
            }
            state.terminal_size = (width, height);
            DispatchResult::changed()
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}

/// Issue the listing query unless it is in flight or loaded
pub fn query_listing(state: &mut AppState) -> Option<Effect> {
    if !needs_fetch(Some(&state.listing)) {
        return None;
    }
    state.listing = DataResource::Loading;
    Some(Effect::FetchListing {
        limit: state.page_size,
    })
}

/// Issue the detail query for `name` unless it is in flight or loaded
pub fn query_detail(state: &mut AppState, name: &str) -> Option<Effect> {
    if !needs_fetch(state.details.get(name)) {
        return None;
    }
    state
        .details
        .insert(name.to_string(), DataResource::Loading);
    Some(Effect::FetchDetail {
        name: name.to_string(),
    })
}

pub fn query_sprite(state: &mut AppState, url: &str) -> Option<Effect> {
    if !needs_fetch(state.sprites.get(url)) {
        return None;
    }
    state.sprites.insert(url.to_string(), DataResource::Loading);
    Some(Effect::FetchSprite {
        url: url.to_string(),
    })
}

fn needs_fetch<T>(resource: Option<&DataResource<T>>) -> bool {
    match resource {
        None => true,
        Some(resource) => resource.is_empty() || resource.is_failed(),
    }
}
