//! Responsive layout helpers.
//!
//! [`LayoutContext`] wraps the terminal size and answers the layout
//! questions renderers ask: is there room for the sidebar, should labels be
//! shortened, how wide is the outline.

/// Terminal size breakpoints.
pub mod breakpoints {
    /// Extra small terminal (< 60 columns)
    pub const XS_WIDTH: u16 = 60;
    /// Small terminal (< 80 columns)
    pub const SM_WIDTH: u16 = 80;
    /// Medium terminal (< 120 columns)
    pub const MD_WIDTH: u16 = 120;

    /// Extra small terminal height (< 16 rows)
    pub const XS_HEIGHT: u16 = 16;
    /// Small terminal height (< 24 rows)
    pub const SM_HEIGHT: u16 = 24;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeCategory {
    ExtraSmall,
    Small,
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    pub width: u16,
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn size_category(&self) -> SizeCategory {
        use breakpoints::*;
        if self.width < XS_WIDTH || self.height < XS_HEIGHT {
            SizeCategory::ExtraSmall
        } else if self.width < SM_WIDTH || self.height < SM_HEIGHT {
            SizeCategory::Small
        } else if self.width < MD_WIDTH {
            SizeCategory::Medium
        } else {
            SizeCategory::Large
        }
    }

    pub fn is_extra_small(&self) -> bool {
        self.size_category() == SizeCategory::ExtraSmall
    }

    /// Small or extra small: use short labels.
    pub fn is_compact(&self) -> bool {
        matches!(
            self.size_category(),
            SizeCategory::ExtraSmall | SizeCategory::Small
        )
    }

    /// Width of the chapter sidebar, or `None` when it doesn't fit.
    pub fn sidebar_width(&self) -> Option<u16> {
        match self.size_category() {
            SizeCategory::ExtraSmall => None,
            SizeCategory::Small => Some(22),
            SizeCategory::Medium => Some(26),
            SizeCategory::Large => Some(30),
        }
    }
}
