use crossterm::event::KeyCode;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::{Component, PokemonDetails, PokemonDetailsProps, PokemonList, PokemonListProps};
use crate::action::Action;
use crate::state::AppState;

pub const TITLE: &str = "My Pokedex";

/// Props for PokedexApp - read-only view of state
pub struct PokedexAppProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// Root view: the list when nothing is selected, otherwise the details
#[derive(Default)]
pub struct PokedexApp {
    list: PokemonList,
    details: PokemonDetails,
}

impl PokedexApp {
    pub fn new() -> Self {
        Self::default()
    }

    fn list_props<'a>(state: &'a AppState, is_focused: bool) -> PokemonListProps<'a> {
        PokemonListProps {
            listing: state.listing_envelope(),
            cursor: state.list_cursor,
            is_focused,
            on_select: Action::PokemonSelect,
            on_cursor: Action::ListCursor,
        }
    }
}

impl Component<Action> for PokedexApp {
    type Props<'a> = PokedexAppProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }
        let key_code = match event {
            EventKind::Key(key) => Some(key.code),
            _ => None,
        };
        if key_code == Some(KeyCode::Char('q')) {
            return vec![Action::Quit];
        }

        if props.state.selected.is_some() {
            return match key_code {
                Some(KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b')) => {
                    vec![Action::PokemonDeselect]
                }
                _ => Vec::new(),
            };
        }

        self.list
            .handle_event(event, Self::list_props(props.state, true))
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: PokedexAppProps<'_>) {
        let chunks = Layout::vertical([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Main content
            Constraint::Length(1), // Help bar
        ])
        .split(area);

        let header = Paragraph::new(TITLE)
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(header, chunks[0]);

        let state = props.state;
        let hints = match state.selected.as_deref() {
            Some(name) => {
                let detail = state.detail_envelope(name);
                let sprite = detail
                    .data
                    .and_then(|detail| detail.sprites.front_default.as_deref())
                    .and_then(|url| state.sprite(url));
                self.details.render(
                    frame,
                    chunks[1],
                    PokemonDetailsProps {
                        name,
                        detail,
                        sprite,
                    },
                );
                vec![
                    StatusBarHint::new("esc", "back"),
                    StatusBarHint::new("q", "quit"),
                ]
            }
            None => {
                self.list.render(
                    frame,
                    chunks[1],
                    Self::list_props(state, props.is_focused),
                );
                vec![
                    StatusBarHint::new("\u{2191}\u{2193}", "move"),
                    StatusBarHint::new("enter", "select"),
                    StatusBarHint::new("q", "quit"),
                ]
            }
        };

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            chunks[2],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&hints),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}
