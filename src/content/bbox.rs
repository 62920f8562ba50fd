//! Bounding box editor state in normalized image coordinates.

use serde::Serialize;

pub const MIN_EXTENT: f64 = 0.1;
pub const MAX_EXTENT: f64 = 0.9;
pub const EXTENT_STEP: f64 = 0.05;
/// Distance a single keyboard move travels.
pub const MOVE_STEP: f64 = 0.05;

/// A box described by its center and size, all in `[0, 1]`.
///
/// The center is always kept far enough from the edges that the whole box
/// stays inside the unit square.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    xc: f64,
    yc: f64,
    w: f64,
    h: f64,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self {
            xc: 0.5,
            yc: 0.5,
            w: 0.3,
            h: 0.4,
        }
    }
}

impl BoundingBox {
    pub fn xc(&self) -> f64 {
        self.xc
    }

    pub fn yc(&self) -> f64 {
        self.yc
    }

    pub fn width(&self) -> f64 {
        self.w
    }

    pub fn height(&self) -> f64 {
        self.h
    }

    /// Move the center to `(xc, yc)`, clamped so the box stays inside.
    pub fn move_to(&mut self, xc: f64, yc: f64) {
        self.xc = clamp_center(xc, self.w);
        self.yc = clamp_center(yc, self.h);
    }

    /// Move by `(dx, dy)` steps of [`MOVE_STEP`].
    pub fn nudge(&mut self, dx: i8, dy: i8) {
        self.move_to(
            self.xc + f64::from(dx) * MOVE_STEP,
            self.yc + f64::from(dy) * MOVE_STEP,
        );
    }

    /// Grow (`+1`) or shrink (`-1`) the width by one step.
    pub fn resize_width(&mut self, delta: i8) {
        self.w = step_extent(self.w, delta);
        self.xc = clamp_center(self.xc, self.w);
    }

    /// Grow (`+1`) or shrink (`-1`) the height by one step.
    pub fn resize_height(&mut self, delta: i8) {
        self.h = step_extent(self.h, delta);
        self.yc = clamp_center(self.yc, self.h);
    }

    /// `(x_min, y_min, x_max, y_max)`.
    pub fn corners(&self) -> (f64, f64, f64, f64) {
        let (hw, hh) = (self.w / 2.0, self.h / 2.0);
        (self.xc - hw, self.yc - hh, self.xc + hw, self.yc + hh)
    }

    /// Label in YOLO order `[xc, yc, w, h]`.
    pub fn yolo_label(&self) -> String {
        format!(
            "[{:.2}, {:.2}, {:.2}, {:.2}]",
            self.xc, self.yc, self.w, self.h
        )
    }
}

fn clamp_center(center: f64, extent: f64) -> f64 {
    let half = extent / 2.0;
    center.clamp(half, 1.0 - half)
}

/// Snap to the 0.05 grid so repeated steps never drift.
fn step_extent(extent: f64, delta: i8) -> f64 {
    let steps = (extent / EXTENT_STEP).round() + f64::from(delta);
    (steps * EXTENT_STEP).clamp(MIN_EXTENT, MAX_EXTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_default_box() {
        let b = BoundingBox::default();
        assert_eq!(b.yolo_label(), "[0.50, 0.50, 0.30, 0.40]");
    }

    #[test]
    fn test_move_clamps_inside_unit_square() {
        let mut b = BoundingBox::default();
        b.move_to(0.0, 1.0);
        assert!(approx(b.xc(), 0.15));
        assert!(approx(b.yc(), 0.8));
        let (x0, _, _, y1) = b.corners();
        assert!(approx(x0, 0.0));
        assert!(approx(y1, 1.0));
    }

    #[test]
    fn test_nudge_stops_at_edge() {
        let mut b = BoundingBox::default();
        for _ in 0..20 {
            b.nudge(1, 0);
        }
        assert!(approx(b.xc(), 0.85));
    }

    #[test]
    fn test_resize_is_bounded() {
        let mut b = BoundingBox::default();
        for _ in 0..30 {
            b.resize_width(1);
        }
        assert!(approx(b.width(), MAX_EXTENT));
        for _ in 0..30 {
            b.resize_height(-1);
        }
        assert!(approx(b.height(), MIN_EXTENT));
    }

    #[test]
    fn test_resize_reclamps_center() {
        let mut b = BoundingBox::default();
        b.move_to(1.0, 0.5);
        assert!(approx(b.xc(), 0.85));
        b.resize_width(1);
        assert!(approx(b.width(), 0.35));
        assert!(approx(b.xc(), 0.825));
    }
}
