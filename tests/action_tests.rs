//! Store and component tests for selection and query flow

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pokedex::{
    action::Action,
    components::{Component, PokedexApp, PokedexAppProps},
    effect::Effect,
    reducer::reducer,
    source::{sample_detail, sample_listing},
    state::AppState,
};
use tui_dispatch::testing::*;
use tui_dispatch::{assert_emitted, assert_not_emitted, EffectStore, NumericComponentId};

/// State after the first page has loaded
fn listed_state() -> AppState {
    let mut state = AppState::default();
    reducer(&mut state, Action::Init);
    reducer(&mut state, Action::ListingDidLoad(sample_listing()));
    state
}

#[test]
fn test_init_fetches_first_page() {
    let mut store = EffectStore::new(AppState::default(), reducer);

    let result = store.dispatch(Action::Init);

    assert!(result.changed);
    assert!(store.state().listing.is_loading());
    assert_eq!(result.effects, vec![Effect::FetchListing { limit: 9 }]);
}

#[test]
fn test_select_then_deselect_restores_list() {
    let mut store = EffectStore::new(listed_state(), reducer);
    let before = (store.state().selected.clone(), store.state().entries().to_vec());

    store.dispatch(Action::PokemonSelect("bulbasaur".into()));
    assert_eq!(store.state().selected.as_deref(), Some("bulbasaur"));

    store.dispatch(Action::PokemonDeselect);
    let after = (store.state().selected.clone(), store.state().entries().to_vec());
    assert_eq!(before, after);
}

#[test]
fn test_detail_failure_is_kept_per_key() {
    let mut store = EffectStore::new(listed_state(), reducer);

    store.dispatch(Action::PokemonSelect("ivysaur".into()));
    store.dispatch(Action::DetailDidError {
        name: "ivysaur".into(),
        error: "unexpected status 404".into(),
    });

    let envelope = store.state().detail_envelope("ivysaur");
    assert!(envelope.is_error);
    assert!(envelope.data.is_none());
    assert!(store.state().detail_envelope("bulbasaur").is_loading);
}

#[test]
fn test_concurrent_selects_share_one_request() {
    let mut store = EffectStore::new(listed_state(), reducer);

    let first = store.dispatch(Action::PokemonSelect("squirtle".into()));
    store.dispatch(Action::PokemonDeselect);
    let second = store.dispatch(Action::PokemonSelect("squirtle".into()));

    assert_eq!(first.effects.len(), 1);
    assert!(second.effects.is_empty());
    assert!(store.state().details["squirtle"].is_loading());
}

#[test]
fn test_enter_on_list_selects_cursor_entry() {
    let mut component = PokedexApp::new();
    let mut state = listed_state();
    reducer(&mut state, Action::ListCursor(2));

    let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
    let actions: Vec<Action> = component
        .handle_event(
            &tui_dispatch::EventKind::Key(enter),
            PokedexAppProps {
                state: &state,
                is_focused: true,
            },
        )
        .into_iter()
        .collect();

    actions.assert_count(1);
    actions.assert_first(Action::PokemonSelect("venusaur".into()));
}

#[test]
fn test_back_key_in_detail_view() {
    let mut harness = TestHarness::<AppState, Action>::new(AppState {
        selected: Some("bulbasaur".into()),
        ..Default::default()
    });
    let mut component = PokedexApp::new();

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

    actions.assert_count(1);
    actions.assert_first(Action::PokemonDeselect);
}

#[test]
fn test_static_record_answers_any_selection() {
    let mut store = EffectStore::new(listed_state(), reducer);

    store.dispatch(Action::PokemonSelect("charizard".into()));
    store.dispatch(Action::DetailDidLoad {
        name: "charizard".into(),
        detail: sample_detail(),
    });

    let envelope = store.state().detail_envelope("charizard");
    assert!(envelope.is_success);
    assert_eq!(envelope.data.map(|d| d.name.as_str()), Some("bulbasaur"));
}

#[test]
fn test_assert_emitted_macro() {
    let actions = vec![
        Action::Init,
        Action::ListingDidLoad(sample_listing()),
        Action::PokemonSelect("bulbasaur".into()),
    ];

    assert_emitted!(actions, Action::ListingDidLoad(_));
    assert_emitted!(actions, Action::PokemonSelect(_));
    assert_not_emitted!(actions, Action::ListingDidError(_));
    assert_not_emitted!(actions, Action::Quit);
}
