//! End-to-end flows through EffectStoreTestHarness
//!
//! Async completions are simulated with `complete_action`, so these run
//! without a network.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pokedex::{
    action::Action,
    components::{Component, PokedexApp, PokedexAppProps, ERROR_TEXT, LOADING_TEXT},
    effect::Effect,
    reducer::reducer,
    source::{sample_detail, sample_listing},
    sprite::SpriteData,
    state::AppState,
};
use tui_dispatch::testing::*;
use tui_dispatch::{DataResource, EventKind, NumericComponentId};

const SPRITE_URL: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/1.png";

fn state_with_listing() -> AppState {
    AppState {
        listing: DataResource::Loaded(sample_listing()),
        ..Default::default()
    }
}

fn tiny_sprite() -> SpriteData {
    SpriteData {
        width: 2,
        height: 2,
        pixels: vec![200; 16],
    }
}

// ============================================================================
// Query flows
// ============================================================================

#[test]
fn test_listing_flow_with_harness() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::Init);
    harness.assert_state(|s| s.listing.is_loading());
    harness.assert_state(|s| s.listing_envelope().is_loading);

    let effects = harness.drain_effects();
    effects.effects_count(1);
    effects.effects_first_matches(|e| matches!(e, Effect::FetchListing { limit: 9 }));

    harness.complete_action(Action::ListingDidLoad(sample_listing()));
    let (changed, total) = harness.process_emitted();
    assert_eq!((changed, total), (1, 1));

    harness.assert_state(|s| s.listing_envelope().is_success);
    harness.assert_state(|s| s.entries().len() == 9);
    harness.assert_state(|s| s.entries()[8].name == "blastoise");
}

#[test]
fn test_listing_error_flow() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::Init);
    harness.complete_action(Action::ListingDidError("connection refused".into()));
    harness.process_emitted();

    harness.assert_state(|s| s.listing.is_failed());
    harness.assert_state(|s| s.listing_envelope().is_error);
    harness.assert_state(|s| s.entries().is_empty());
}

#[test]
fn test_detail_flow_requests_sprite() {
    let mut harness = EffectStoreTestHarness::new(state_with_listing(), reducer);

    harness.dispatch_collect(Action::PokemonSelect("bulbasaur".into()));
    let effects = harness.drain_effects();
    effects.effects_count(1);
    effects.effects_first_matches(
        |e| matches!(e, Effect::FetchDetail { name } if name == "bulbasaur"),
    );

    harness.dispatch_collect(Action::DetailDidLoad {
        name: "bulbasaur".into(),
        detail: sample_detail(),
    });
    let effects = harness.drain_effects();
    effects.effects_count(1);
    effects.effects_first_matches(|e| matches!(e, Effect::FetchSprite { url } if url == SPRITE_URL));

    harness.complete_action(Action::SpriteDidLoad {
        url: SPRITE_URL.into(),
        sprite: tiny_sprite(),
    });
    harness.process_emitted();
    harness.assert_state(|s| s.sprite(SPRITE_URL).is_some());
}

#[test]
fn test_reselect_uses_cached_detail() {
    let mut harness = EffectStoreTestHarness::new(state_with_listing(), reducer);

    harness.dispatch_collect(Action::PokemonSelect("bulbasaur".into()));
    harness.dispatch_collect(Action::DetailDidLoad {
        name: "bulbasaur".into(),
        detail: sample_detail(),
    });
    harness.complete_action(Action::SpriteDidLoad {
        url: SPRITE_URL.into(),
        sprite: tiny_sprite(),
    });
    harness.process_emitted();
    harness.dispatch_collect(Action::PokemonDeselect);
    harness.drain_effects();

    harness.dispatch_collect(Action::PokemonSelect("bulbasaur".into()));
    harness.drain_effects().effects_empty();
    harness.assert_state(|s| s.detail_envelope("bulbasaur").is_success);
}

#[test]
fn test_failed_detail_refetched_on_remount() {
    let mut harness = EffectStoreTestHarness::new(state_with_listing(), reducer);

    harness.dispatch_collect(Action::PokemonSelect("ivysaur".into()));
    harness.complete_action(Action::DetailDidError {
        name: "ivysaur".into(),
        error: "unexpected status 503".into(),
    });
    harness.process_emitted();
    harness.assert_state(|s| s.detail_envelope("ivysaur").is_error);

    harness.dispatch_collect(Action::PokemonDeselect);
    harness.drain_effects();
    harness.dispatch_collect(Action::PokemonSelect("ivysaur".into()));

    let effects = harness.drain_effects();
    effects.effects_count(1);
    effects.effects_all_match(|e| matches!(e, Effect::FetchDetail { name } if name == "ivysaur"));
    harness.assert_state(|s| s.detail_envelope("ivysaur").is_loading);
}

#[test]
fn test_overlapping_selections_resolve_each_key() {
    let mut harness = EffectStoreTestHarness::new(state_with_listing(), reducer);

    harness.dispatch_collect(Action::PokemonSelect("charizard".into()));
    harness.dispatch_collect(Action::PokemonDeselect);
    harness.dispatch_collect(Action::PokemonSelect("ivysaur".into()));
    harness.drain_effects().effects_count(2);

    // Both tasks finish with the static record, newest first.
    for name in ["ivysaur", "charizard"] {
        harness.complete_action(Action::DetailDidLoad {
            name: name.into(),
            detail: sample_detail(),
        });
    }
    harness.process_emitted();

    harness.assert_state(|s| s.detail_envelope("ivysaur").is_success);
    harness.assert_state(|s| s.detail_envelope("charizard").is_success);
    harness.assert_state(|s| !s.details.contains_key("bulbasaur"));

    harness.dispatch_collect(Action::PokemonDeselect);
    harness.dispatch_collect(Action::PokemonSelect("charizard".into()));
    harness
        .drain_effects()
        .effects_none_match(|e| matches!(e, Effect::FetchDetail { .. }));
    harness.assert_state(|s| s.detail_envelope("charizard").is_success);
}

// ============================================================================
// Keyboard + store
// ============================================================================

#[test]
fn test_keyboard_navigation_and_select() {
    let mut harness = EffectStoreTestHarness::new(state_with_listing(), reducer);
    let mut component = PokedexApp::new();

    let mut view = state_with_listing();
    reducer(&mut view, Action::ListCursor(3));
    harness.dispatch_collect(Action::ListCursor(3));
    harness.assert_state(|s| s.list_cursor == view.list_cursor);

    let enter = EventKind::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
    let actions: Vec<Action> = component
        .handle_event(
            &enter,
            PokedexAppProps {
                state: &view,
                is_focused: true,
            },
        )
        .into_iter()
        .collect();
    actions.assert_first(Action::PokemonSelect("charmander".into()));

    for action in actions {
        harness.dispatch_collect(action);
    }
    harness.assert_state(|s| s.selected.as_deref() == Some("charmander"));
    harness
        .drain_effects()
        .effects_first_matches(|e| matches!(e, Effect::FetchDetail { name } if name == "charmander"));
}

#[test]
fn test_back_key_returns_to_list() {
    let mut harness = EffectStoreTestHarness::new(state_with_listing(), reducer);
    let mut component = PokedexApp::new();

    harness.dispatch_collect(Action::PokemonSelect("squirtle".into()));
    let actions = harness.send_keys::<NumericComponentId, _, _>("b", |state, event| {
        let props = PokedexAppProps {
            state,
            is_focused: true,
        };
        component
            .handle_event(&event.kind, props)
            .into_iter()
            .collect::<Vec<_>>()
    });

    for action in actions {
        harness.dispatch_collect(action);
    }
    harness.assert_state(|s| s.selected.is_none());
    harness.assert_state(|s| s.list_cursor == 0);
}

// ============================================================================
// Rendering through the harness
// ============================================================================

#[test]
fn test_render_detail_progression() {
    let mut harness = EffectStoreTestHarness::new(state_with_listing(), reducer);
    let mut component = PokedexApp::new();

    harness.dispatch_collect(Action::PokemonSelect("bulbasaur".into()));
    let loading = harness.render_plain(60, 24, |frame, area, state| {
        let props = PokedexAppProps {
            state,
            is_focused: true,
        };
        component.render(frame, area, props);
    });
    assert!(loading.contains(LOADING_TEXT), "loading output:\n{loading}");
    assert!(!loading.contains("id:"));

    harness.dispatch_collect(Action::DetailDidLoad {
        name: "bulbasaur".into(),
        detail: sample_detail(),
    });
    let loaded = harness.render_plain(60, 24, |frame, area, state| {
        let props = PokedexAppProps {
            state,
            is_focused: true,
        };
        component.render(frame, area, props);
    });
    assert!(loaded.contains("types: grass and poison"), "loaded output:\n{loaded}");
    assert!(loaded.contains("[bulbasaur]"), "alt text before sprite:\n{loaded}");
    assert!(!loaded.contains(ERROR_TEXT));
}
