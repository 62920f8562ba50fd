//! Key help overlay.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use super::theme::{COLOR_ACCENT, COLOR_DIALOG_BG, COLOR_DIM, COLOR_HEADER};
use crate::input::KeybindingConfig;

const KEY_COLUMN: usize = 20;

/// Render the help dialog centered over everything else.
pub fn render(frame: &mut Frame) {
    let entries = KeybindingConfig::help_entries();
    let area = frame.area();

    let width = 64u16.min(area.width.saturating_sub(4));
    // borders + blank + entries + blank + hint
    let height = (entries.len() as u16 + 5).min(area.height.saturating_sub(2));
    let dialog = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    };

    frame.render_widget(Clear, dialog);
    let block = Block::default()
        .title(Span::styled(
            " Keys ",
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_ACCENT))
        .style(Style::default().bg(COLOR_DIALOG_BG));

    let mut lines = vec![Line::default()];
    lines.extend(entries.iter().map(|(keys, what)| {
        Line::from(vec![
            Span::styled(
                format!("  {:<width$}", keys, width = KEY_COLUMN),
                Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::raw(*what),
        ])
    }));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "  any key to close",
        Style::default().fg(COLOR_DIM),
    )));
    frame.render_widget(Paragraph::new(lines).block(block), dialog);
}
