//! Fixed-width cell grids for matrices, images and detection grids.

use std::fmt::Display;

use ratatui::{
    style::Style,
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

/// Right-align `value` in `width` columns.
pub fn cell_text(value: impl Display, width: usize) -> String {
    let text = value.to_string();
    let pad = width.saturating_sub(text.width());
    format!("{}{}", " ".repeat(pad), text)
}

/// One line per row. `style_of(r, c)` picks each cell's style.
pub fn grid_lines<T, F>(rows: &[Vec<T>], width: usize, style_of: F) -> Vec<Line<'static>>
where
    T: Display,
    F: Fn(usize, usize) -> Style,
{
    rows.iter()
        .enumerate()
        .map(|(r, row)| {
            let spans: Vec<Span<'static>> = row
                .iter()
                .enumerate()
                .map(|(c, value)| Span::styled(cell_text(value, width), style_of(r, c)))
                .collect();
            Line::from(spans)
        })
        .collect()
}

/// Widest rendered value, for sizing cells.
pub fn max_width<T: Display>(rows: &[Vec<T>]) -> usize {
    rows.iter()
        .flatten()
        .map(|v| v.to_string().width())
        .max()
        .unwrap_or(1)
}
