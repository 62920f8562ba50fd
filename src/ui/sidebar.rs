//! Chapter sidebar.
//!
//! Lists every chapter and its steps with a status marker: `▶` current,
//! `✓` visited, `·` not yet seen. Each step row is a click target. The
//! visited markers read the same set as the header pills.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::hit_area::{ClickAction, HitAreaRegistry};
use super::theme::{COLOR_ACCENT, COLOR_ACTIVE, COLOR_BORDER, COLOR_DIM, COLOR_VISITED};
use crate::app::{App, Focus};

/// A sidebar row: a chapter heading or a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Row {
    Chapter(usize),
    Step(usize),
}

fn rows(app: &App) -> Vec<Row> {
    let outline = app.nav.outline();
    let mut rows = Vec::with_capacity(outline.len() + outline.chapters().len());
    let mut grouped = vec![false; outline.len()];
    for (c, chapter) in outline.chapters().iter().enumerate() {
        rows.push(Row::Chapter(c));
        for &i in &chapter.steps {
            grouped[i] = true;
            rows.push(Row::Step(i));
        }
    }
    // Ungrouped steps lead the outline.
    let loose: Vec<Row> = (0..outline.len())
        .filter(|&i| !grouped[i])
        .map(Row::Step)
        .collect();
    [loose, rows].concat()
}

/// Status marker for a step.
pub fn marker(app: &App, index: usize) -> &'static str {
    if index == app.nav.current_index() {
        "▶"
    } else if app.nav.is_visited(index) {
        "✓"
    } else {
        "·"
    }
}

pub fn render(frame: &mut Frame, area: Rect, app: &App, hits: &mut HitAreaRegistry) {
    let focused = app.focus == Focus::Outline;
    let border = if focused { COLOR_ACCENT } else { COLOR_BORDER };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(" Outline ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = rows(app);
    let highlighted = if focused {
        app.outline_cursor
    } else {
        app.nav.current_index()
    };
    let focus_row = rows
        .iter()
        .position(|r| *r == Row::Step(highlighted))
        .unwrap_or(0);
    let visible = usize::from(inner.height);
    let scroll = (focus_row + 1).saturating_sub(visible);

    let outline = app.nav.outline();
    let mut lines = Vec::with_capacity(visible);
    for (offset, row) in rows.iter().skip(scroll).take(visible).enumerate() {
        match *row {
            Row::Chapter(c) => {
                let title = &outline.chapters()[c].title;
                lines.push(Line::from(Span::styled(
                    title.to_uppercase(),
                    Style::default().fg(COLOR_DIM).add_modifier(Modifier::BOLD),
                )));
            }
            Row::Step(i) => {
                let Some(step) = outline.step(i) else {
                    continue;
                };
                let mark = marker(app, i);
                let mark_style = match mark {
                    "▶" => Style::default().fg(COLOR_ACTIVE).add_modifier(Modifier::BOLD),
                    "✓" => Style::default().fg(COLOR_VISITED),
                    _ => Style::default().fg(COLOR_DIM),
                };
                let mut label_style = if i == app.nav.current_index() {
                    Style::default().add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                if focused && i == app.outline_cursor {
                    label_style = label_style.add_modifier(Modifier::REVERSED);
                }
                lines.push(Line::from(vec![
                    Span::styled(format!(" {mark} "), mark_style),
                    Span::styled(format!("{} {}", step.icon, step.label), label_style),
                ]));

                let y = inner.y + offset as u16;
                hits.register(Rect::new(inner.x, y, inner.width, 1), ClickAction::GoTo(i));
            }
        }
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
