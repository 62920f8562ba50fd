//! Computer vision steps.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::{bold, dim, track_frame, PanelCtx};
use crate::content::bbox::BoundingBox;
use crate::content::format_shape;
use crate::content::tracking::{TrackingState, FRAMES, TRACK_ID};
use crate::content::vision::{
    in_window, yolo_cell, CONV_FILTER, CONV_INPUT, CONV_INPUT_SIZE, IMAGE_SIZE, YOLO_DEPTH,
    YOLO_GRID, YOLO_TARGET,
};
use crate::ui::components::{grid_lines, max_width};
use crate::ui::hit_area::{ClickAction, HitAreaRegistry};
use crate::ui::theme::{
    CHANNEL_COLORS, COLOR_ACCENT, COLOR_ACTIVE, COLOR_DIM, COLOR_HIGHLIGHT, COLOR_SHAPE,
};

fn shape_line(label: &str, shape: &[usize]) -> Line<'static> {
    Line::from(vec![
        dim(format!("{label} ")),
        Span::styled(format_shape(shape), Style::default().fg(COLOR_SHAPE)),
    ])
}

pub(super) fn images(frame: &mut Frame, area: Rect, ctx: &PanelCtx, hits: &mut HitAreaRegistry) {
    let panel = &ctx.app.panels.channels;
    let body = track_frame(frame, area, panel, ctx, hits);
    let channel = panel.current_track();
    let color = CHANNEL_COLORS[panel.nav().outer() % CHANNEL_COLORS.len()];

    let rows: Vec<Vec<u8>> = channel.matrix().iter().map(|r| r.to_vec()).collect();
    let mut lines = vec![
        Line::from(vec![
            bold(format!("{} channel", channel.name)),
            dim(format!(
                "  sprite {} · background {}",
                channel.sprite, channel.background
            )),
        ]),
        Line::default(),
    ];
    lines.extend(grid_lines(&rows, 4, |r, c| {
        if rows[r][c] == channel.sprite {
            Style::default().fg(color).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_DIM)
        }
    }));
    lines.push(Line::default());
    lines.push(shape_line("channel", &[IMAGE_SIZE, IMAGE_SIZE]));
    lines.push(shape_line("image  ", &[IMAGE_SIZE, IMAGE_SIZE, CHANNEL_COLORS.len()]));
    frame.render_widget(Paragraph::new(lines), body);
}

pub(super) fn convolution(
    frame: &mut Frame,
    area: Rect,
    ctx: &PanelCtx,
    hits: &mut HitAreaRegistry,
) {
    let panel = &ctx.app.panels.conv_window;
    let body = track_frame(frame, area, panel, ctx, hits);
    let top = panel.current_track().row;
    let left = *panel.current_sub_step();

    let input: Vec<Vec<i32>> = CONV_INPUT.iter().map(|r| r.to_vec()).collect();
    let filter: Vec<Vec<i32>> = CONV_FILTER.iter().map(|r| r.to_vec()).collect();
    let width = max_width(&filter) + 2;

    let [controls, grids] =
        Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(body);
    play_button(frame, controls, ctx.app.panels.conv_clock.is_playing(), hits);

    let [input_area, filter_area] =
        Layout::horizontal([Constraint::Length(30), Constraint::Min(0)]).areas(grids);

    let mut lines = vec![Line::from(bold("Input 6×6")), Line::default()];
    lines.extend(grid_lines(&input, width, |r, c| {
        if in_window(top, left, r, c) {
            Style::default()
                .fg(COLOR_HIGHLIGHT)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default()
        }
    }));
    lines.push(Line::default());
    let out_size = CONV_INPUT_SIZE - CONV_FILTER.len() + 1;
    lines.push(Line::from(dim(format!(
        "window at ({top}, {left}) → output ({top}, {left}) of {out_size}×{out_size}"
    ))));
    frame.render_widget(Paragraph::new(lines), input_area);

    let mut lines = vec![Line::from(bold("Filter 3×3")), Line::default()];
    lines.extend(grid_lines(&filter, width, |_, _| {
        Style::default().fg(COLOR_ACCENT)
    }));
    lines.push(Line::default());
    lines.push(Line::from(dim("Vertical edge detector")));
    lines.push(Line::default());
    lines.push(Line::from(dim("space slides the window on its own · ↑/↓ by hand")));
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), filter_area);
}

/// Canvas size for the bounding box editor, in cells.
const CANVAS_WIDTH: u16 = 40;
const CANVAS_HEIGHT: u16 = 14;

/// Draw `bbox` on a character canvas of `width × height` cells.
pub(crate) fn bbox_canvas(bbox: &BoundingBox, width: u16, height: u16) -> Vec<String> {
    let (w, h) = (usize::from(width.max(2)), usize::from(height.max(2)));
    let to_col = |x: f64| ((x * (w - 1) as f64).round() as usize).min(w - 1);
    let to_row = |y: f64| ((y * (h - 1) as f64).round() as usize).min(h - 1);

    let (x0, y0, x1, y1) = bbox.corners();
    let (left, right, top, bottom) = (to_col(x0), to_col(x1), to_row(y0), to_row(y1));
    let mut cells = vec![vec!['·'; w]; h];
    for c in left..=right {
        cells[top][c] = '─';
        cells[bottom][c] = '─';
    }
    for row in cells.iter_mut().take(bottom + 1).skip(top) {
        row[left] = '│';
        row[right] = '│';
    }
    cells[top][left] = '┌';
    cells[top][right] = '┐';
    cells[bottom][left] = '└';
    cells[bottom][right] = '┘';
    cells[to_row(bbox.yc())][to_col(bbox.xc())] = '+';
    cells.into_iter().map(|row| row.into_iter().collect()).collect()
}

pub(super) fn bounding_box(frame: &mut Frame, area: Rect, bbox: &BoundingBox) {
    let [canvas_area, info_area] = Layout::horizontal([
        Constraint::Length(CANVAS_WIDTH + 2),
        Constraint::Min(0),
    ])
    .areas(area);
    let height = CANVAS_HEIGHT.min(canvas_area.height.saturating_sub(1));
    let canvas: Vec<Line<'static>> = bbox_canvas(bbox, CANVAS_WIDTH, height)
        .into_iter()
        .map(|row| Line::from(Span::styled(row, Style::default().fg(COLOR_HIGHLIGHT))))
        .collect();
    frame.render_widget(Paragraph::new(canvas), canvas_area);

    let (x0, y0, x1, y1) = bbox.corners();
    let lines = vec![
        Line::from(bold("YOLO label")),
        Line::from(Span::styled(
            bbox.yolo_label(),
            Style::default().fg(COLOR_SHAPE),
        )),
        Line::from(dim("[x_center, y_center, width, height]")),
        Line::default(),
        Line::from(format!("corners ({x0:.2}, {y0:.2}) → ({x1:.2}, {y1:.2})")),
        Line::default(),
        Line::from(dim("h/j/k/l  move")),
        Line::from(dim("w / W    width −/+")),
        Line::from(dim("t / T    height −/+")),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), info_area);
}

pub(super) fn yolo(frame: &mut Frame, area: Rect, ctx: &PanelCtx, hits: &mut HitAreaRegistry) {
    let panel = &ctx.app.panels.yolo;
    let body = track_frame(frame, area, panel, ctx, hits);
    let selected = (panel.current_track().row, *panel.current_sub_step());

    let [grid_area, detail_area] =
        Layout::horizontal([Constraint::Length(YOLO_GRID as u16 * 5 + 2), Constraint::Min(0)])
            .areas(body);

    let confidences: Vec<Vec<String>> = (0..YOLO_GRID)
        .map(|r| {
            (0..YOLO_GRID)
                .map(|c| format!("{:.2}", yolo_cell(r, c).confidence))
                .collect()
        })
        .collect();
    let mut lines = vec![Line::from(bold("7×7 grid · confidence")), Line::default()];
    lines.extend(grid_lines(&confidences, 5, |r, c| {
        let mut style = if (r, c) == YOLO_TARGET {
            Style::default().fg(COLOR_HIGHLIGHT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        if (r, c) == selected {
            style = style.add_modifier(Modifier::REVERSED);
        }
        style
    }));
    lines.push(Line::default());
    lines.push(shape_line("output", &[YOLO_GRID, YOLO_GRID, YOLO_DEPTH]));
    frame.render_widget(Paragraph::new(lines), grid_area);

    let cell = yolo_cell(selected.0, selected.1);
    let class_style = if cell.is_object() {
        Style::default().fg(COLOR_ACTIVE).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_DIM)
    };
    let depth = cell.depth_vector();
    let preview: Vec<String> = depth.iter().take(5).map(|v| format!("{v:.2}")).collect();
    let lines = vec![
        Line::from(bold(format!("Cell ({}, {})", selected.0, selected.1))),
        Line::default(),
        Line::from(vec![dim("class      "), Span::styled(cell.class, class_style)]),
        Line::from(vec![dim("confidence "), Span::raw(format!("{:.2}", cell.confidence))]),
        Line::from(vec![
            dim("box        "),
            Span::raw(format!(
                "x {:.1} y {:.1} w {:.1} h {:.1}",
                cell.bx, cell.by, cell.bw, cell.bh
            )),
        ]),
        Line::default(),
        Line::from(dim(format!("depth vector ({YOLO_DEPTH},)"))),
        Line::from(format!("[{}, …]", preview.join(", "))),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), detail_area);
}

const PLAY_LABEL: &str = " ▶ Play ";
const PAUSE_LABEL: &str = " ⏸ Pause ";

/// Clickable play/pause label at the top-left of `area`. Returns its width.
fn play_button(
    frame: &mut Frame,
    area: Rect,
    playing: bool,
    hits: &mut HitAreaRegistry,
) -> u16 {
    if area.height == 0 || area.width == 0 {
        return 0;
    }
    let label = if playing { PAUSE_LABEL } else { PLAY_LABEL };
    let width = (label.chars().count() as u16).min(area.width);
    let rect = Rect::new(area.x, area.y, width, 1);
    hits.register(rect, ClickAction::TogglePlayback);
    frame.render_widget(
        Paragraph::new(Span::styled(
            label,
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        )),
        rect,
    );
    width
}

pub(super) fn tracking(
    frame: &mut Frame,
    area: Rect,
    state: &TrackingState,
    hits: &mut HitAreaRegistry,
) {
    let [controls, stage, caption] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(5),
        Constraint::Min(0),
    ])
    .areas(area);

    // Play/pause, then one clickable chip per frame.
    let label_width = play_button(frame, controls, state.is_playing(), hits);
    let chips = Rect {
        x: controls.x.saturating_add(label_width + 2),
        width: controls.width.saturating_sub(label_width + 2),
        ..controls
    };

    let mut spans = Vec::new();
    let mut x = chips.x;
    for (i, f) in FRAMES.iter().enumerate() {
        let chip = format!(" t={} ", f.t);
        let width = chip.len() as u16;
        let style = if i == state.frame_index() {
            Style::default().fg(COLOR_ACTIVE).add_modifier(Modifier::REVERSED)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        if x < chips.right() && chips.height > 0 {
            let w = width.min(chips.right() - x);
            hits.register(Rect::new(x, chips.y, w, 1), ClickAction::SelectSubStep(i));
        }
        spans.push(Span::styled(chip, style));
        spans.push(Span::raw(" "));
        x = x.saturating_add(width + 1);
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), chips);

    // The tracked box, placed by its percent position.
    let current = state.frame();
    let tag = format!("[ID: {TRACK_ID}]");
    let tag_width = tag.chars().count() as u16;
    let travel = stage.width.saturating_sub(tag_width);
    let offset = (u32::from(travel) * u32::from(current.x.min(100)) / 100) as u16;
    let row = stage.y + stage.height.saturating_sub(1) / 2;
    if stage.height > 0 {
        frame.render_widget(
            Paragraph::new(Span::styled(
                tag,
                Style::default().fg(COLOR_HIGHLIGHT).add_modifier(Modifier::BOLD),
            )),
            Rect::new(stage.x + offset, row, tag_width.min(stage.width), 1),
        );
    }

    let lines = vec![
        Line::from(vec![
            bold(format!("frame {} of {}", current.t + 1, FRAMES.len())),
            dim(format!("   center ({}%, {}%)", current.x, current.y)),
        ]),
        Line::from(dim(
            "The same ID follows the object from frame to frame. space play/pause · ↑/↓ step",
        )),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), caption);
}
