//! Introductory steps: welcome, scalars, vectors, matrices, tensors and the
//! comparison table.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, Wrap},
    Frame,
};

use super::{bold, dim, track_frame, PanelCtx};
use crate::content::basics::{
    Fact, COMPARISON_ROWS, COMPARISON_TAKEAWAYS, MATRIX_FACTS, SCALAR_FACTS, TENSOR_FACTS,
    VECTOR_FACTS, WELCOME_BODY, WELCOME_HIGHLIGHTS, WELCOME_TITLE,
};
use crate::content::format_shape;
use crate::ui::components::{cell_text, grid_lines, max_width};
use crate::ui::hit_area::HitAreaRegistry;
use crate::ui::theme::{rank_color, COLOR_SHAPE};

fn shape_line(shape: &[usize]) -> Line<'static> {
    Line::from(vec![
        dim("shape "),
        Span::styled(format_shape(shape), Style::default().fg(COLOR_SHAPE)),
        dim(format!("   rank {}", shape.len())),
    ])
}

fn fact_lines(facts: &[Fact]) -> Vec<Line<'static>> {
    facts
        .iter()
        .flat_map(|fact| {
            [
                Line::from(vec![Span::raw(format!("{} ", fact.icon)), bold(fact.title)]),
                Line::from(dim(format!("   {}", fact.body))),
            ]
        })
        .collect()
}

/// Visual on top, facts below.
fn split_body(area: Rect, visual_height: u16) -> [Rect; 2] {
    Layout::vertical([Constraint::Length(visual_height), Constraint::Min(0)]).areas(area)
}

pub(super) fn welcome(frame: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::default(),
        Line::from(Span::styled(
            WELCOME_TITLE,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(WELCOME_BODY),
        Line::default(),
    ];
    let highlights: Vec<Span<'static>> = WELCOME_HIGHLIGHTS
        .iter()
        .flat_map(|(icon, text)| [Span::raw(format!("{icon} ")), bold(*text), Span::raw("    ")])
        .collect();
    lines.push(Line::from(highlights));
    lines.push(Line::default());
    lines.push(Line::from(dim("Press → to begin.")));
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .centered(),
        area,
    );
}

pub(super) fn scalars(
    frame: &mut Frame,
    area: Rect,
    ctx: &PanelCtx,
    hits: &mut HitAreaRegistry,
) {
    let panel = &ctx.app.panels.scalars;
    let body = track_frame(frame, area, panel, ctx, hits);
    let example = panel.current_sub_step();
    let [visual, facts] = split_body(body, 6);

    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            format!("  {}  ", example.value),
            Style::default().fg(rank_color(0)).add_modifier(Modifier::BOLD),
        )),
        Line::from(dim(example.label)),
        Line::default(),
        shape_line(&[]),
    ];
    frame.render_widget(Paragraph::new(lines).centered(), visual);
    frame.render_widget(
        Paragraph::new(fact_lines(SCALAR_FACTS)).wrap(Wrap { trim: false }),
        facts,
    );
}

pub(super) fn vectors(
    frame: &mut Frame,
    area: Rect,
    ctx: &PanelCtx,
    hits: &mut HitAreaRegistry,
) {
    let panel = &ctx.app.panels.vectors;
    let body = track_frame(frame, area, panel, ctx, hits);
    let example = panel.current_sub_step();
    let [visual, facts] = split_body(body, 7);

    let values: Vec<String> = example.data.iter().map(|v| v.to_string()).collect();
    let width = values.iter().map(String::len).max().unwrap_or(1) + 1;
    let color = Style::default().fg(rank_color(1)).add_modifier(Modifier::BOLD);

    let mut cells = vec![Span::raw("[")];
    let mut indices = vec![Span::raw(" ")];
    for (i, value) in values.iter().enumerate() {
        cells.push(Span::styled(cell_text(value, width), color));
        indices.push(dim(cell_text(i, width)));
    }
    cells.push(Span::raw(" ]"));

    let lines = vec![
        Line::default(),
        Line::from(cells),
        Line::from(indices),
        Line::default(),
        shape_line(&[example.data.len()]),
        Line::from(dim(example.note)),
    ];
    frame.render_widget(Paragraph::new(lines).centered(), visual);
    frame.render_widget(
        Paragraph::new(fact_lines(VECTOR_FACTS)).wrap(Wrap { trim: false }),
        facts,
    );
}

pub(super) fn matrices(
    frame: &mut Frame,
    area: Rect,
    ctx: &PanelCtx,
    hits: &mut HitAreaRegistry,
) {
    let panel = &ctx.app.panels.matrices;
    let body = track_frame(frame, area, panel, ctx, hits);
    let example = panel.current_sub_step();

    let rows: Vec<Vec<i32>> = example.data.iter().map(|r| r.to_vec()).collect();
    let width = max_width(&rows) + 2;
    let color = Style::default().fg(rank_color(2)).add_modifier(Modifier::BOLD);
    let [visual, facts] = split_body(body, example.rows() as u16 + 5);

    let mut lines = vec![Line::default()];
    lines.extend(grid_lines(&rows, width, |_, _| color));
    lines.push(Line::default());
    lines.push(shape_line(&[example.rows(), example.cols()]));
    lines.push(Line::from(dim(example.note)));
    frame.render_widget(
        Paragraph::new(lines).centered().wrap(Wrap { trim: true }),
        visual,
    );
    frame.render_widget(
        Paragraph::new(fact_lines(MATRIX_FACTS)).wrap(Wrap { trim: false }),
        facts,
    );
}

pub(super) fn tensors(
    frame: &mut Frame,
    area: Rect,
    ctx: &PanelCtx,
    hits: &mut HitAreaRegistry,
) {
    let panel = &ctx.app.panels.tensors;
    let body = track_frame(frame, area, panel, ctx, hits);
    let example = panel.current_sub_step();
    let [depth, rows, cols] = example.shape;

    // Slices side by side: "[k]" over a rows × cols block of cells.
    let mut lines = vec![Line::default()];
    let mut header = Vec::with_capacity(depth);
    for k in 0..depth {
        header.push(dim(format!("{:<width$}", format!("[{k}]"), width = cols * 2 + 3)));
    }
    lines.push(Line::from(header));
    for _ in 0..rows {
        let mut spans = Vec::with_capacity(depth);
        for k in 0..depth {
            let style = Style::default().fg(rank_color(k.min(4)));
            spans.push(Span::styled(format!("{}   ", "■ ".repeat(cols).trim_end()), style));
        }
        lines.push(Line::from(spans));
    }
    lines.push(Line::default());
    lines.push(shape_line(&example.shape));
    lines.push(Line::from(dim(format!(
        "{} elements · {}",
        example.element_count(),
        example.desc
    ))));

    let [visual, facts] = split_body(body, rows as u16 + 6);
    frame.render_widget(Paragraph::new(lines).centered(), visual);
    frame.render_widget(
        Paragraph::new(fact_lines(TENSOR_FACTS)).wrap(Wrap { trim: false }),
        facts,
    );
}

pub(super) fn comparison(
    frame: &mut Frame,
    area: Rect,
    ctx: &PanelCtx,
    hits: &mut HitAreaRegistry,
) {
    let panel = &ctx.app.panels.comparison;
    let body = track_frame(frame, area, panel, ctx, hits);
    let selected = panel.nav().outer();

    let rows = COMPARISON_ROWS.iter().enumerate().map(|(i, row)| {
        let style = if i == selected {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        Row::new(vec![
            Cell::from(bold(row.attr)),
            Cell::from(row.matrix),
            Cell::from(row.tensor),
        ])
        .style(style)
    });
    let table = Table::new(
        rows,
        [
            Constraint::Length(16),
            Constraint::Percentage(42),
            Constraint::Percentage(42),
        ],
    )
    .header(
        Row::new(vec!["", "Matrix", "Tensor"])
            .style(Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED)),
    )
    .column_spacing(2);

    let [table_area, takeaway_area] = Layout::vertical([
        Constraint::Length(COMPARISON_ROWS.len() as u16 + 2),
        Constraint::Min(0),
    ])
    .areas(body);
    frame.render_widget(table, table_area);

    let current = panel.current_sub_step();
    let mut lines = vec![
        Line::from(vec![bold(current.attr), dim(":")]),
        Line::from(vec![dim("  matrix  "), Span::raw(current.matrix)]),
        Line::from(vec![dim("  tensor  "), Span::raw(current.tensor)]),
        Line::default(),
    ];
    lines.extend(
        COMPARISON_TAKEAWAYS
            .iter()
            .map(|(icon, text)| Line::from(format!("{icon} {text}"))),
    );
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), takeaway_area);
}
