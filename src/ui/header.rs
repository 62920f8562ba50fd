//! Header: title, step counter, progress pills and the progress gauge.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::hit_area::{ClickAction, HitAreaRegistry};
use super::theme::{COLOR_ACTIVE, COLOR_DIM, COLOR_HEADER, COLOR_PROGRESS, COLOR_VISITED};
use crate::app::App;

pub const HEADER_HEIGHT: u16 = 3;

/// "Step X of N", one-based.
pub fn step_counter(app: &App) -> String {
    format!("Step {} of {}", app.nav.current_index() + 1, app.nav.len())
}

/// Cells per pill: the glyph and a gap.
const PILL_STRIDE: u16 = 2;

/// One pill per step: current, visited or not yet seen.
pub fn progress_pills(app: &App) -> Line<'static> {
    let current = app.nav.current_index();
    let spans: Vec<Span<'static>> = (0..app.nav.len())
        .flat_map(|i| {
            let (glyph, style) = if i == current {
                ("●", Style::default().fg(COLOR_ACTIVE).add_modifier(Modifier::BOLD))
            } else if app.nav.is_visited(i) {
                ("●", Style::default().fg(COLOR_VISITED))
            } else {
                ("○", Style::default().fg(COLOR_DIM))
            };
            [Span::styled(glyph, style), Span::raw(" ")]
        })
        .collect();
    Line::from(spans)
}

/// Draw the pills centered in `row`; each visible pill jumps to its step.
fn render_pills(frame: &mut Frame, row: Rect, app: &App, hits: &mut HitAreaRegistry) {
    let pills = progress_pills(app);
    let width = (pills.width() as u16).min(row.width);
    let x = row.x + (row.width - width) / 2;
    let pills_area = Rect { x, width, ..row };
    frame.render_widget(Paragraph::new(pills), pills_area);

    for i in 0..app.nav.len() {
        let offset = (i as u16).saturating_mul(PILL_STRIDE);
        if offset >= width {
            break;
        }
        hits.register(Rect::new(x + offset, row.y, 1, row.height.min(1)), ClickAction::GoTo(i));
    }
}

pub fn render(frame: &mut Frame, area: Rect, app: &App, hits: &mut HitAreaRegistry) {
    let [title_row, pills_row, gauge_row] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    let step = app.nav.current_step();
    let chapter = app
        .nav
        .outline()
        .chapter_of(app.nav.current_index())
        .map(|c| c.title.as_str())
        .unwrap_or("");

    let mut title = vec![Span::styled(
        " tensorwalk",
        Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
    )];
    if !chapter.is_empty() {
        title.push(Span::styled(format!("  ·  {chapter}"), Style::default().fg(COLOR_DIM)));
    }
    title.push(Span::raw(format!("  ·  {} {}", step.icon, step.label)));

    let counter = format!("{} ", step_counter(app));
    let [title_area, counter_area] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(counter.width() as u16),
    ])
    .areas(title_row);
    frame.render_widget(Paragraph::new(Line::from(title)), title_area);
    frame.render_widget(
        Paragraph::new(counter).alignment(Alignment::Right),
        counter_area,
    );

    render_pills(frame, pills_row, app, hits);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(COLOR_PROGRESS))
        .ratio(app.nav.progress().clamp(0.0, 1.0))
        .label(format!("{}%", app.nav.progress_percent()));
    frame.render_widget(gauge, gauge_row);
}
