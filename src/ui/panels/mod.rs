//! Per-step content panels.
//!
//! Each step kind has a renderer. Panels with tracks share the same frame:
//! a tab row (click to switch track), an optional sub-step marker row, then
//! the body.

mod basics;
mod playground;
mod tracks;
mod vision;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::components::render_tab_selector;
use super::hit_area::{ClickAction, HitAreaRegistry};
use super::layout::LayoutContext;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM};
use crate::app::{App, Focus};
use crate::content::StepKind;
use crate::nav::{SubNavigation, Track, TrackPanel};

/// Everything a panel renderer needs.
pub(crate) struct PanelCtx<'a> {
    pub app: &'a App,
    pub layout: &'a LayoutContext,
    pub focused: bool,
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    layout: &LayoutContext,
    hits: &mut HitAreaRegistry,
) {
    let step = app.nav.current_step();
    let focused = app.focus == Focus::Lesson;
    let border = if focused { COLOR_ACCENT } else { COLOR_BORDER };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(format!(" {} {} ", step.icon, step.label));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let ctx = PanelCtx {
        app,
        layout,
        focused,
    };
    let panels = &app.panels;
    match step.content {
        StepKind::Welcome => basics::welcome(frame, inner),
        StepKind::Scalars => basics::scalars(frame, inner, &ctx, hits),
        StepKind::Vectors => basics::vectors(frame, inner, &ctx, hits),
        StepKind::Matrices => basics::matrices(frame, inner, &ctx, hits),
        StepKind::Tensors => basics::tensors(frame, inner, &ctx, hits),
        StepKind::RankExplorer => tracks::ranks(frame, inner, &ctx, hits),
        StepKind::Conversion => tracks::conversion(frame, inner, &ctx, hits),
        StepKind::RealWorld => tracks::realworld(frame, inner, &ctx, hits),
        StepKind::Comparison => basics::comparison(frame, inner, &ctx, hits),
        StepKind::CvImages => vision::images(frame, inner, &ctx, hits),
        StepKind::CvConvolution => vision::convolution(frame, inner, &ctx, hits),
        StepKind::CvBoundingBox => vision::bounding_box(frame, inner, &panels.bbox),
        StepKind::CvYoloGrid => vision::yolo(frame, inner, &ctx, hits),
        StepKind::CvTracking => vision::tracking(frame, inner, &panels.tracking, hits),
        StepKind::Playground => playground::render(frame, inner, &panels.playground, hits),
    }
}

/// Split `area` into the tab row, the sub-step row (only for multi-step
/// tracks) and the body, rendering the first two.
pub(crate) fn track_frame<T: Track>(
    frame: &mut Frame,
    area: Rect,
    panel: &TrackPanel<T>,
    ctx: &PanelCtx,
    hits: &mut HitAreaRegistry,
) -> Rect {
    let nav = panel.nav();
    let has_sub_steps = nav.sub_step_count(nav.outer()) > 1;
    let [tabs_row, sub_row, body] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(if has_sub_steps { 2 } else { 0 }),
        Constraint::Min(0),
    ])
    .areas(area);

    let titles: Vec<&str> = panel.tracks().iter().map(|t| t.title()).collect();
    let (line, tabs) = render_tab_selector(&titles, nav.outer(), ctx.focused, ctx.layout);
    frame.render_widget(Paragraph::new(line), tabs_row);
    for (i, tab) in tabs.iter().enumerate() {
        let x = tabs_row.x.saturating_add(tab.offset);
        if x < tabs_row.right() {
            let width = tab.width.min(tabs_row.right() - x);
            hits.register(Rect::new(x, tabs_row.y, width, 1), ClickAction::SelectTrack(i));
        }
    }

    if has_sub_steps {
        render_sub_steps(frame, sub_row, nav, hits);
    }
    body
}

/// `● ○ ○  1/4` with each dot clickable.
fn render_sub_steps(frame: &mut Frame, area: Rect, nav: &SubNavigation, hits: &mut HitAreaRegistry) {
    let count = nav.sub_step_count(nav.outer());
    let mut spans = vec![Span::raw("  ")];
    for i in 0..count {
        let style = if i == nav.inner() {
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        spans.push(Span::styled(if i == nav.inner() { "●" } else { "○" }, style));
        spans.push(Span::raw(" "));
        let x = area.x + 2 + 2 * i as u16;
        if x < area.right() {
            hits.register(Rect::new(x, area.y, 1, 1), ClickAction::SelectSubStep(i));
        }
    }
    spans.push(Span::styled(
        format!(" {}/{}", nav.inner() + 1, count),
        Style::default().fg(COLOR_DIM),
    ));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

pub(crate) fn dim(text: impl Into<String>) -> Span<'static> {
    Span::styled(text.into(), Style::default().fg(COLOR_DIM))
}

pub(crate) fn bold(text: impl Into<String>) -> Span<'static> {
    Span::styled(text.into(), Style::default().add_modifier(Modifier::BOLD))
}
