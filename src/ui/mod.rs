//! Terminal rendering.
//!
//! ```text
//! ┌ header: title, counter, pills, gauge ──────────┐
//! │ outline  │ current step panel                  │
//! │ (toggle) │                                     │
//! └ footer: prev / dial / next, key hints ─────────┘
//! ```
//!
//! Rendering is a pure function of [`App`] except for the click targets,
//! which every frame re-registers from scratch in [`App::hit_areas`]. The
//! sidebar is hidden on terminals narrower than the small breakpoint.

pub mod components;
pub mod footer;
pub mod header;
mod help;
pub mod hit_area;
pub mod layout;
mod panels;
pub mod sidebar;
pub mod theme;

pub use layout::{breakpoints, LayoutContext, SizeCategory};

use ratatui::{
    layout::{Constraint, Layout},
    Frame,
};

use crate::app::App;

/// Draw one frame and refresh the click targets.
pub fn render(frame: &mut Frame, app: &mut App) {
    let mut hits = std::mem::take(&mut app.hit_areas);
    hits.clear();

    let area = frame.area();
    let ctx = LayoutContext::new(area.width, area.height);
    app.fit_layout(ctx.sidebar_width().is_some());
    let [header_area, main_area, footer_area] = Layout::vertical([
        Constraint::Length(header::HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(footer::FOOTER_HEIGHT),
    ])
    .areas(area);

    header::render(frame, header_area, app, &mut hits);

    let sidebar_width = ctx.sidebar_width().filter(|_| app.show_sidebar);
    let panel_area = match sidebar_width {
        Some(width) => {
            let [sidebar_area, panel_area] =
                Layout::horizontal([Constraint::Length(width), Constraint::Min(0)])
                    .areas(main_area);
            sidebar::render(frame, sidebar_area, app, &mut hits);
            panel_area
        }
        None => main_area,
    };
    panels::render(frame, panel_area, app, &ctx, &mut hits);
    footer::render(frame, footer_area, app, &ctx, &mut hits);

    if app.show_help {
        // The overlay swallows clicks.
        hits.clear();
        help::render(frame);
    }

    app.hit_areas = hits;
}
