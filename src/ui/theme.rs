//! Color theme constants.
//!
//! A minimal dark palette; the per-rank colours follow the rank explorer.

use ratatui::style::Color;

// ============================================================================
// Chrome
// ============================================================================

pub const COLOR_BORDER: Color = Color::DarkGray;

/// Focused borders and the selection marker
pub const COLOR_ACCENT: Color = Color::White;

pub const COLOR_HEADER: Color = Color::White;

/// Less important text, unvisited steps, disabled buttons
pub const COLOR_DIM: Color = Color::DarkGray;

/// Current step
pub const COLOR_ACTIVE: Color = Color::LightGreen;

/// Visited steps
pub const COLOR_VISITED: Color = Color::Rgb(4, 181, 117);

pub const COLOR_PROGRESS: Color = Color::Rgb(108, 99, 255);

pub const COLOR_DIALOG_BG: Color = Color::Rgb(10, 15, 35);

// ============================================================================
// Content
// ============================================================================

/// Code snippets
pub const COLOR_CODE: Color = Color::Rgb(0, 212, 255);

/// Shape tuples
pub const COLOR_SHAPE: Color = Color::Rgb(255, 209, 102);

/// Highlighted cells: convolution window, YOLO target, tracked box
pub const COLOR_HIGHLIGHT: Color = Color::Rgb(255, 107, 157);

/// Rank 0 through 4
pub const RANK_COLORS: [Color; 5] = [
    Color::Rgb(6, 214, 160),
    Color::Rgb(0, 212, 255),
    Color::Rgb(108, 99, 255),
    Color::Rgb(255, 107, 157),
    Color::Rgb(255, 209, 102),
];

/// Colour for a rank, saturating at the highest.
pub fn rank_color(rank: usize) -> Color {
    RANK_COLORS[rank.min(RANK_COLORS.len() - 1)]
}

/// The R, G and B channel tints.
pub const CHANNEL_COLORS: [Color; 3] = [Color::Red, Color::Green, Color::Blue];
