//! Footer: previous/next buttons, the step dial and key hints.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::hit_area::{ClickAction, HitAreaRegistry};
use super::layout::LayoutContext;
use super::theme::{COLOR_ACCENT, COLOR_ACTIVE, COLOR_BORDER, COLOR_DIM, COLOR_VISITED};
use crate::app::App;

pub const FOOTER_HEIGHT: u16 = 3;

const PREV_LABEL: &str = " ← Prev ";

/// Text of the forward button, or `None` when it's disabled.
pub fn next_button_text(app: &App) -> Option<String> {
    app.nav.next_label().map(|label| format!(" {label} "))
}

fn button_style(enabled: bool, hovered: bool) -> Style {
    match (enabled, hovered) {
        (false, _) => Style::default().fg(COLOR_DIM),
        (true, true) => Style::default()
            .fg(COLOR_ACCENT)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        (true, false) => Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
    }
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    ctx: &LayoutContext,
    hits: &mut HitAreaRegistry,
) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [buttons_row, hints_row] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(inner);

    // Previous
    let prev_width = (PREV_LABEL.width() as u16).min(buttons_row.width);
    let prev_rect = Rect::new(buttons_row.x, buttons_row.y, prev_width, 1);
    let can_back = app.nav.can_go_back();
    if can_back {
        hits.register(prev_rect, ClickAction::Prev);
    }
    let hovered = hits.is_hovered(ClickAction::Prev);
    frame.render_widget(
        Paragraph::new(Span::styled(PREV_LABEL, button_style(can_back, hovered))),
        prev_rect,
    );

    // Next (disabled on the final step)
    let next = next_button_text(app);
    let next_text = next.clone().unwrap_or_else(|| " Next → ".to_string());
    let next_width = (next_text.width() as u16).min(buttons_row.width);
    let next_rect = Rect::new(
        buttons_row.right().saturating_sub(next_width),
        buttons_row.y,
        next_width,
        1,
    );
    if next.is_some() {
        hits.register(next_rect, ClickAction::Next);
    }
    let hovered = hits.is_hovered(ClickAction::Next);
    frame.render_widget(
        Paragraph::new(Span::styled(next_text, button_style(next.is_some(), hovered))),
        next_rect,
    );

    // Dial: one dot per step, when there's room between the buttons
    let total = app.nav.len() as u16;
    let dial_width = total * 2 - 1;
    let free = buttons_row.width.saturating_sub(prev_width + next_width);
    if !ctx.is_extra_small() && dial_width + 2 <= free {
        let start = buttons_row.x + prev_width + (free - dial_width) / 2;
        let current = app.nav.current_index();
        let mut spans = Vec::with_capacity(usize::from(dial_width));
        for i in 0..usize::from(total) {
            let (glyph, style) = if i == current {
                ("◉", Style::default().fg(COLOR_ACTIVE).add_modifier(Modifier::BOLD))
            } else if app.nav.is_visited(i) {
                ("●", Style::default().fg(COLOR_VISITED))
            } else {
                ("○", Style::default().fg(COLOR_DIM))
            };
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(glyph, style));
            hits.register(
                Rect::new(start + 2 * i as u16, buttons_row.y, 1, 1),
                ClickAction::GoTo(i),
            );
        }
        frame.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect::new(start, buttons_row.y, dial_width, 1),
        );
    }

    let hints = if ctx.is_compact() {
        " ←/→ step · ? help · q quit"
    } else {
        " ←/→ step · Tab outline · [ ] track · ↑/↓ sub-step · ? help · q quit"
    };
    frame.render_widget(
        Paragraph::new(Span::styled(hints, Style::default().fg(COLOR_DIM))),
        hints_row,
    );
}
