use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::Paragraph,
    prelude::Alignment,
};

use crate::app::{App, CopyOutcome};
use crate::contrast::{self, Contrast};
use crate::layout::swatch_text_rows;

use super::helpers::{clamp_name, hex_to_color};

const NAME_PLACEHOLDER: &str = "Unnamed";

/// What the renderer knows about one swatch. Rebuilt from the store
/// on every draw, in store order.
pub struct SwatchView {
    pub id: String,
    pub hex: String,
    pub contrast: Contrast,
    pub name: Option<String>,
}

pub fn build_swatch_views(app: &App) -> Vec<SwatchView> {
    app.store
        .records()
        .iter()
        .map(|record| SwatchView {
            id: record.id.clone(),
            hex: record.hex.clone(),
            contrast: contrast::classify(&record.hex),
            name: record.name.clone(),
        })
        .collect()
}

pub fn render_swatch(frame: &mut Frame, rect: Rect, view: &SwatchView, selected: bool, app: &App) {
    let background = hex_to_color(&view.hex).unwrap_or(Color::Black);
    let foreground = match view.contrast {
        Contrast::Bright => Color::Black,
        Contrast::Dark => Color::White,
    };

    let (name_row, _, _) = swatch_text_rows(rect);
    let pad = usize::from(name_row.saturating_sub(rect.y));
    let mut lines: Vec<Line> = vec![Line::default(); pad];

    if selected && pad > 0 {
        lines[0] = Line::from(Span::styled(
            "▾",
            Style::default()
                .fg(foreground)
                .add_modifier(Modifier::BOLD),
        ));
    }

    lines.push(name_line(view, foreground, rect.width, app));
    lines.push(Line::from(Span::styled(
        view.hex.clone(),
        Style::default().fg(foreground).add_modifier(Modifier::BOLD),
    )));
    lines.push(copy_hint_line(view, foreground, app));

    let swatch = Paragraph::new(Text::from(lines))
        .alignment(Alignment::Center)
        .style(Style::default().bg(background).fg(foreground));
    frame.render_widget(swatch, rect);
}

fn name_line(view: &SwatchView, foreground: Color, width: u16, app: &App) -> Line<'static> {
    let max_width = usize::from(width.saturating_sub(2)).max(1);

    if let Some(edit) = app.name_edit.as_ref().filter(|edit| edit.color_id == view.id) {
        return Line::from(Span::styled(
            format!("{}_", clamp_name(&edit.buffer, max_width.saturating_sub(1))),
            Style::default()
                .fg(foreground)
                .add_modifier(Modifier::UNDERLINED),
        ));
    }

    match view.name.as_deref() {
        Some(name) if !name.is_empty() => Line::from(Span::styled(
            clamp_name(name, max_width),
            Style::default().fg(foreground),
        )),
        // Never named or cleared back to empty: show the placeholder.
        _ => Line::from(Span::styled(
            NAME_PLACEHOLDER,
            Style::default()
                .fg(foreground)
                .add_modifier(Modifier::ITALIC | Modifier::DIM),
        )),
    }
}

fn copy_hint_line(view: &SwatchView, foreground: Color, app: &App) -> Line<'static> {
    let feedback = app
        .copy_feedback
        .as_ref()
        .filter(|feedback| feedback.color_id == view.id);
    let hint = match feedback.map(|feedback| feedback.outcome) {
        Some(CopyOutcome::Copied) => "(copied!)",
        Some(CopyOutcome::Failed) => "(failed to copy)",
        None => "(copy?)",
    };
    Line::from(Span::styled(
        hint,
        Style::default().fg(foreground).add_modifier(Modifier::DIM),
    ))
}
