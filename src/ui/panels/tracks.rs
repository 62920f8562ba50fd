//! Catalog steps: the rank explorer, conversion techniques and real-world
//! domains.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::{bold, dim, track_frame, PanelCtx};
use crate::content::format_shape;
use crate::ui::hit_area::HitAreaRegistry;
use crate::ui::theme::{rank_color, COLOR_CODE, COLOR_SHAPE};

fn shape_span(text: impl Into<String>) -> Span<'static> {
    Span::styled(text.into(), Style::default().fg(COLOR_SHAPE))
}

pub(super) fn ranks(frame: &mut Frame, area: Rect, ctx: &PanelCtx, hits: &mut HitAreaRegistry) {
    let panel = &ctx.app.panels.ranks;
    let body = track_frame(frame, area, panel, ctx, hits);
    let info = panel.current_track();
    let color = rank_color(info.rank);

    let mut lines = vec![
        Line::from(vec![
            Span::raw(format!("{} ", info.icon)),
            Span::styled(
                format!("Rank {} · {}", info.rank, info.name),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![dim("shape "), shape_span(info.shape)]),
        Line::from(vec![dim("e.g.  "), Span::raw(info.example)]),
        Line::default(),
        Line::from(info.desc),
        Line::default(),
        Line::from(bold("Used for")),
    ];
    let selected = panel.nav().inner();
    for (i, use_case) in info.use_cases.iter().enumerate() {
        let line = if i == selected {
            Line::from(Span::styled(
                format!(" ▸ {use_case}"),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
        } else {
            Line::from(dim(format!("   {use_case}")))
        };
        lines.push(line);
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), body);
}

pub(super) fn conversion(
    frame: &mut Frame,
    area: Rect,
    ctx: &PanelCtx,
    hits: &mut HitAreaRegistry,
) {
    let panel = &ctx.app.panels.conversion;
    let body = track_frame(frame, area, panel, ctx, hits);
    let technique = panel.current_track();
    let step = panel.current_sub_step();

    let mut lines = vec![
        Line::from(vec![
            Span::raw(format!("{} ", technique.icon)),
            bold(technique.title),
            dim(format!("  step {} of {}", panel.nav().inner() + 1, technique.steps.len())),
        ]),
        Line::default(),
        Line::from(bold(step.label)),
        Line::from(step.desc),
        Line::default(),
    ];
    lines.extend(step.code.lines().map(|code| {
        Line::from(Span::styled(
            format!("    {code}"),
            Style::default().fg(COLOR_CODE),
        ))
    }));
    lines.push(Line::default());
    lines.push(Line::from(vec![
        dim("result shape "),
        shape_span(format_shape(step.shape)),
        dim(format!("   rank {}", step.shape.len())),
    ]));
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), body);
}

pub(super) fn realworld(
    frame: &mut Frame,
    area: Rect,
    ctx: &PanelCtx,
    hits: &mut HitAreaRegistry,
) {
    let panel = &ctx.app.panels.realworld;
    let body = track_frame(frame, area, panel, ctx, hits);
    let domain = panel.current_track();
    let selected = panel.nav().inner();

    let mut lines = vec![
        Line::from(vec![Span::raw(format!("{} ", domain.icon)), bold(domain.title)]),
        Line::default(),
    ];
    for (i, section) in domain.sections.iter().enumerate() {
        let marker = if i == selected { "▸" } else { " " };
        let label_style = if i == selected {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::raw(format!(" {marker} ")),
            Span::styled(section.label, label_style),
            Span::raw("  "),
            shape_span(section.shape),
        ]));
        if i == selected {
            lines.push(Line::from(dim(format!("     {}", section.desc))));
        }
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), body);
}
