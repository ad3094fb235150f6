use crossterm::event::{KeyCode, MouseButton, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    BaseStyle, Padding, ScrollbarStyle, SelectList, SelectListBehavior, SelectListProps,
    SelectListStyle, SelectionStyle,
};

use super::{Component, ERROR_TEXT, LOADING_TEXT};
use crate::action::Action;
use crate::envelope::Envelope;
use crate::format::list_label;
use crate::state::Listing;

pub struct PokemonListProps<'a> {
    pub listing: Envelope<'a, Listing>,
    pub cursor: usize,
    pub is_focused: bool,
    /// Called with the entry name when a row is chosen
    pub on_select: fn(String) -> Action,
    /// Called with the row index when the cursor moves
    pub on_cursor: fn(usize) -> Action,
}

/// Numbered, selectable list of entries
pub struct PokemonList {
    list: SelectList,
    /// Rows area from the last render, for mapping clicks
    rows: Rect,
}

impl Default for PokemonList {
    fn default() -> Self {
        Self {
            list: SelectList::new(),
            rows: Rect::default(),
        }
    }
}

impl PokemonList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(listing: &Listing) -> Vec<Line<'static>> {
        listing
            .results
            .iter()
            .enumerate()
            .map(|(index, entry)| Line::from(list_label(index, &entry.name)))
            .collect()
    }

    /// Entry index under a screen cell, if any
    fn row_at(&self, column: u16, row: u16, cursor: usize, len: usize) -> Option<usize> {
        let rows = self.rows;
        if rows.height == 0 || !rows.contains((column, row).into()) {
            return None;
        }
        // The list scrolls just enough to keep the cursor on screen.
        let visible = usize::from(rows.height);
        let offset = cursor.saturating_sub(visible - 1);
        let index = offset + usize::from(row - rows.y);
        (index < len).then_some(index)
    }
}

/// Horizontal padding of the list rows, matching `list_style`
const ROW_PADDING_X: u16 = 1;

fn list_style() -> SelectListStyle {
    SelectListStyle {
        base: BaseStyle {
            border: None,
            padding: Padding::xy(ROW_PADDING_X, 0),
            bg: None,
            fg: None,
        },
        selection: SelectionStyle::default(),
        scrollbar: ScrollbarStyle::default(),
    }
}

fn list_behavior() -> SelectListBehavior {
    SelectListBehavior {
        show_scrollbar: true,
        wrap_navigation: false,
    }
}

impl Component<Action> for PokemonList {
    type Props<'a> = PokemonListProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }
        let Some(listing) = props.listing.data else {
            return Vec::new();
        };

        let chosen = match event {
            EventKind::Key(key) if key.code == KeyCode::Enter => Some(props.cursor),
            EventKind::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                match self.row_at(mouse.column, mouse.row, props.cursor, listing.results.len()) {
                    Some(index) => Some(index),
                    None => return Vec::new(),
                }
            }
            _ => None,
        };
        if let Some(index) = chosen {
            return listing
                .results
                .get(index)
                .map(|entry| (props.on_select)(entry.name.clone()))
                .into_iter()
                .collect();
        }

        let items = Self::items(listing);
        let list_props = SelectListProps {
            items: &items,
            count: items.len(),
            selected: props.cursor.min(items.len().saturating_sub(1)),
            is_focused: true,
            style: list_style(),
            behavior: list_behavior(),
            on_select: props.on_cursor,
            render_item: &|item| item.clone(),
        };
        self.list
            .handle_event(event, list_props)
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(Line::from(" Overview ").style(Style::default().add_modifier(Modifier::BOLD)));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        self.rows = Rect::default();
        let Some(listing) = props.listing.data else {
            let text = if props.listing.is_error {
                Paragraph::new(ERROR_TEXT).style(Style::default().fg(Color::Red))
            } else {
                Paragraph::new(LOADING_TEXT).style(Style::default().fg(Color::DarkGray))
            };
            frame.render_widget(text, inner);
            return;
        };

        let items = Self::items(listing);
        let list_props = SelectListProps {
            items: &items,
            count: items.len(),
            selected: props.cursor.min(items.len().saturating_sub(1)),
            is_focused: props.is_focused,
            style: list_style(),
            behavior: list_behavior(),
            on_select: props.on_cursor,
            render_item: &|item| item.clone(),
        };
        self.rows = Rect {
            x: inner.x + ROW_PADDING_X,
            width: inner.width.saturating_sub(ROW_PADDING_X * 2),
            ..inner
        };
        self.list.render(frame, inner, list_props);
    }
}
