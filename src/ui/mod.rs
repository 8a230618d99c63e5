mod helpers;
mod swatches;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::app::{App, MenuItem, MenuState};
use crate::layout::{self, FOOTER_HEIGHT, HEADER_HEIGHT};
use theme::Theme;

/// Renders the entire UI for a single frame.
///
/// Everything is rebuilt from the store each call; the swatch row uses
/// the same geometry the event handler hit-tests against.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let chrome = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    let header_lines = vec![Line::from(vec![
        Span::styled(
            "  Swatchr  ",
            Style::default().fg(Color::Black).bg(Theme::primary()),
        ),
        Span::raw(" "),
        Span::styled(
            "color palette editor",
            Style::default()
                .fg(Theme::secondary())
                .add_modifier(Modifier::BOLD),
        ),
    ])];
    let header = Paragraph::new(Text::from(header_lines))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::secondary())),
        );
    frame.render_widget(header, chrome[0]);

    let palette = layout::palette_area(area);
    let views = swatches::build_swatch_views(app);
    let rects = layout::swatch_rects(palette, views.len());
    if rects.is_empty() {
        let hint = Paragraph::new(Text::from(Line::from(Span::styled(
            "No colors to show. Seed the palette with --seed.",
            Style::default().fg(Theme::dim()),
        ))))
        .alignment(Alignment::Center);
        frame.render_widget(hint, chrome[1]);
    } else {
        for (index, (view, rect)) in views.iter().zip(rects).enumerate() {
            swatches::render_swatch(frame, rect, view, index == app.selected_index, app);
        }
    }

    let footer = Paragraph::new(Text::from(footer_line(app)))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::secondary())),
        );
    frame.render_widget(footer, chrome[2]);

    if let MenuState::Open { anchor, highlighted, .. } = &app.menu {
        render_context_menu(frame, *anchor, *highlighted, app);
    }
}

fn footer_line(app: &App) -> Line<'_> {
    if app.name_edit.is_some() {
        return Line::from(Span::styled(
            " Type to rename. Enter/Esc: done.",
            Style::default().fg(Theme::accent()),
        ));
    }
    if let Some(status) = &app.status {
        return Line::from(Span::styled(
            format!(" {status}"),
            Style::default().fg(Theme::warn()),
        ));
    }
    Line::from(vec![
        Span::styled(" ←/→", key_style()),
        Span::styled(" select  ", text_style()),
        Span::styled("enter", key_style()),
        Span::styled(" rename  ", text_style()),
        Span::styled("c", key_style()),
        Span::styled(" copy hex  ", text_style()),
        Span::styled("m/right-click", key_style()),
        Span::styled(" menu  ", text_style()),
        Span::styled("q", key_style()),
        Span::styled(" quit", text_style()),
    ])
}

fn key_style() -> Style {
    Style::default()
        .fg(Theme::selection_marker())
        .add_modifier(Modifier::BOLD)
}

fn text_style() -> Style {
    Style::default().fg(Theme::text())
}

fn render_context_menu(frame: &mut Frame, anchor: (u16, u16), highlighted: usize, app: &App) {
    let area = layout::menu_rect(anchor, MenuItem::ALL.len(), app.viewport);
    frame.render_widget(Clear, area);

    let mut lines = Vec::new();
    for (index, item) in MenuItem::ALL.iter().enumerate() {
        let selected = index == highlighted;
        let marker_style = if selected {
            Style::default()
                .fg(Theme::selection_marker())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Theme::dim())
        };
        let mut label_style = Style::default().fg(Theme::text());
        if selected {
            label_style = label_style.add_modifier(Modifier::BOLD);
        }
        lines.push(Line::from(vec![
            Span::styled(if selected { "> " } else { "  " }, marker_style),
            Span::styled(item.label(), label_style),
        ]));
    }

    let menu = Paragraph::new(Text::from(lines))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::secondary())),
        );
    frame.render_widget(menu, area);
}
