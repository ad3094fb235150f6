use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tui_dispatch::EventKind;

use super::{Component, ERROR_TEXT, LOADING_TEXT};
use crate::action::Action;
use crate::envelope::Envelope;
use crate::format::conjunction;
use crate::sprite::SpriteData;
use crate::state::DetailRecord;

pub struct PokemonDetailsProps<'a> {
    /// Selected name, used as title and alt text before data arrives
    pub name: &'a str,
    pub detail: Envelope<'a, DetailRecord>,
    pub sprite: Option<&'a SpriteData>,
}

/// Name, sprite and attribute list of one creature
#[derive(Default)]
pub struct PokemonDetails;

impl PokemonDetails {
    pub fn attribute_lines(detail: &DetailRecord) -> Vec<String> {
        vec![
            format!("id: {}", detail.id),
            format!("height: {}", detail.height),
            format!("weight: {}", detail.weight),
            format!("types: {}", conjunction(&detail.type_names())),
        ]
    }
}

impl Component<Action> for PokemonDetails {
    type Props<'a> = PokemonDetailsProps<'a>;

    fn handle_event(
        &mut self,
        _event: &EventKind,
        _props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        None
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: PokemonDetailsProps<'_>) {
        let title = props
            .detail
            .data
            .map(|detail| detail.name.as_str())
            .unwrap_or(props.name);
        let block = Block::default().borders(Borders::ALL).title(
            Line::from(format!(" {title} ")).style(Style::default().add_modifier(Modifier::BOLD)),
        );
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(detail) = props.detail.data else {
            let text = if props.detail.is_error {
                Paragraph::new(ERROR_TEXT).style(Style::default().fg(Color::Red))
            } else {
                Paragraph::new(LOADING_TEXT).style(Style::default().fg(Color::DarkGray))
            };
            frame.render_widget(text, inner);
            return;
        };

        let attributes: Vec<Line> = Self::attribute_lines(detail)
            .into_iter()
            .map(|line| Line::from(format!("\u{2022} {line}")))
            .collect();
        let chunks = Layout::vertical([
            Constraint::Length(attributes.len() as u16 + 1),
            Constraint::Min(0),
        ])
        .split(inner);

        frame.render_widget(Paragraph::new(attributes), chunks[0]);
        render_sprite(frame, chunks[1], &detail.name, props.sprite);
    }
}

fn render_sprite(frame: &mut Frame, area: Rect, alt: &str, sprite: Option<&SpriteData>) {
    if area.height == 0 {
        return;
    }
    let fitted = sprite.and_then(|sprite| {
        sprite
            .fit_scale(area.width, area.height)
            .map(|scale| sprite.to_text(scale))
    });
    let widget = match fitted {
        Some(text) => Paragraph::new(text),
        None => Paragraph::new(format!("[{alt}]")).style(Style::default().fg(Color::DarkGray)),
    };
    frame.render_widget(widget.alignment(Alignment::Center), area);
}
