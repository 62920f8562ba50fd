//! Playground: controls on the left, the matrix and resulting shape on the
//! right.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::{bold, dim};
use crate::content::format_shape;
use crate::content::playground::{FillType, Operation, Playground};
use crate::ui::components::{grid_lines, max_width};
use crate::ui::hit_area::{ClickAction, HitAreaRegistry};
use crate::ui::theme::{rank_color, COLOR_ACCENT, COLOR_SHAPE};

/// Option list with the active entry marked.
fn choices<T: Copy + PartialEq>(all: &[T], current: T, label: fn(T) -> &'static str) -> Line<'static> {
    let spans: Vec<Span<'static>> = all
        .iter()
        .flat_map(|&item| {
            let span = if item == current {
                Span::styled(
                    format!("[{}]", label(item)),
                    Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
                )
            } else {
                dim(format!(" {} ", label(item)))
            };
            [span, Span::raw(" ")]
        })
        .collect();
    Line::from(spans)
}

/// One click target per matrix cell. The grid starts one row below `area.y`.
fn register_cells(area: Rect, data: &[Vec<u32>], width: u16, hits: &mut HitAreaRegistry) {
    for (r, row) in data.iter().enumerate() {
        let y = area.y.saturating_add(1 + r as u16);
        if y >= area.bottom() {
            break;
        }
        for c in 0..row.len() {
            let x = area.x.saturating_add(c as u16 * width);
            if x.saturating_add(width) > area.right() {
                break;
            }
            hits.register(
                Rect::new(x, y, width, 1),
                ClickAction::InspectCell { row: r, col: c },
            );
        }
    }
}

pub(super) fn render(
    frame: &mut Frame,
    area: Rect,
    playground: &Playground,
    hits: &mut HitAreaRegistry,
) {
    let [controls, result] =
        Layout::vertical([Constraint::Length(8), Constraint::Min(0)]).areas(area);

    let lines = vec![
        Line::from(vec![
            dim("rows "),
            bold(playground.rows().to_string()),
            dim("  (+/-)    cols "),
            bold(playground.cols().to_string()),
            dim("  (>/<)"),
        ]),
        Line::default(),
        Line::from(vec![dim("fill (f)      "), dim(format!("seed {}", playground.seed()))]),
        choices(&FillType::ALL, playground.fill(), FillType::label),
        Line::default(),
        Line::from(dim("operation (o)")),
        choices(&Operation::ALL, playground.operation(), Operation::label),
        Line::from(dim("r  reseed random fill")),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), controls);

    let data = playground.make_data();
    let info = playground.shape_info();
    let color = rank_color(info.rank);
    let width = max_width(&data) + 2;
    let inspected = playground.inspected_cell();

    let mut lines = vec![Line::default()];
    lines.extend(grid_lines(&data, width, |r, c| {
        let style = Style::default().fg(color);
        match inspected {
            Some((ir, ic, _)) if (ir, ic) == (r, c) => style.add_modifier(Modifier::REVERSED),
            _ => style,
        }
    }));
    register_cells(result, &data, width as u16, hits);
    lines.push(Line::default());
    if info.depth > 1 {
        lines.push(Line::from(dim(format!(
            "× {} copies stacked along axis 0",
            info.depth
        ))));
    }
    lines.push(Line::from(dim(playground.operation().note())));
    lines.push(Line::from(vec![
        dim("shape "),
        Span::styled(
            format_shape(&info.shape),
            Style::default().fg(COLOR_SHAPE).add_modifier(Modifier::BOLD),
        ),
        dim(format!("   rank {}   {} elements", info.rank, info.total)),
    ]));
    lines.push(match inspected {
        Some((r, c, value)) => Line::from(Span::styled(
            format!("[{r},{c}] = {value}"),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        None => Line::from(dim("click a cell to read its value")),
    });
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), result);
}
