//! Tab Selector Component
//!
//! A horizontal row of track titles. The selected tab carries a `▶` marker.
//! Besides the rendered line it reports each tab's column span so callers
//! can register click targets.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM};

const LEAD: &str = "  ";

/// Column span of one tab, relative to the start of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSpan {
    pub offset: u16,
    pub width: u16,
}

/// Render a horizontal tab selector.
///
/// Compact terminals get numbered tabs (`1`, `2`, ...) instead of titles.
pub fn render_tab_selector(
    titles: &[&str],
    selected: usize,
    focused: bool,
    ctx: &LayoutContext,
) -> (Line<'static>, Vec<TabSpan>) {
    let mut spans: Vec<Span<'static>> = vec![Span::raw(LEAD)];
    let mut tabs = Vec::with_capacity(titles.len());
    let mut column = LEAD.width();
    let spacing = if ctx.is_extra_small() { " " } else { "   " };

    for (idx, title) in titles.iter().enumerate() {
        let label = if ctx.is_compact() {
            (idx + 1).to_string()
        } else {
            (*title).to_string()
        };

        let (marker, marker_style, text_style) = if idx == selected {
            let marker_style = if focused {
                Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(COLOR_DIM)
            };
            let text_style = if focused {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ("▶ ", marker_style, text_style)
        } else {
            ("  ", Style::default().fg(COLOR_DIM), Style::default().fg(COLOR_DIM))
        };

        let width = marker.width() + label.width();
        tabs.push(TabSpan {
            offset: column as u16,
            width: width as u16,
        });
        column += width;

        spans.push(Span::styled(marker, marker_style));
        spans.push(Span::styled(label, text_style));

        if idx + 1 < titles.len() {
            spans.push(Span::raw(spacing));
            column += spacing.width();
        }
    }

    (Line::from(spans), tabs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_marker_precedes_selected() {
        let ctx = LayoutContext::new(120, 40);
        let (line, _) = render_tab_selector(&["Scalar", "Vector"], 1, true, &ctx);
        let text = text(&line);
        let marker = text.find('▶').unwrap();
        assert!(marker > text.find("Scalar").unwrap());
        assert!(marker < text.find("Vector").unwrap());
    }

    #[test]
    fn test_spans_cover_each_tab() {
        let ctx = LayoutContext::new(120, 40);
        let (_, tabs) = render_tab_selector(&["ab", "cde"], 0, true, &ctx);
        assert_eq!(tabs[0], TabSpan { offset: 2, width: 4 });
        assert_eq!(tabs[1], TabSpan { offset: 9, width: 5 });
    }

    #[test]
    fn test_compact_uses_numbers() {
        let ctx = LayoutContext::new(50, 14);
        let (line, _) = render_tab_selector(&["Scalar", "Vector"], 0, true, &ctx);
        let text = text(&line);
        assert!(text.contains('1') && text.contains('2'));
        assert!(!text.contains("Scalar"));
    }
}
