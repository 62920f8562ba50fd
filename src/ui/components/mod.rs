//! Reusable UI building blocks.

pub mod grid;
pub mod tab_selector;

pub use grid::{cell_text, grid_lines, max_width};
pub use tab_selector::{render_tab_selector, TabSpan};
