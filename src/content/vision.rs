//! Computer vision literals: a pixel-art image and its channels, the
//! convolution input and filter, and the YOLO output grid.

use crate::nav::Track;

// ============================================================================
// Images as tensors
// ============================================================================

pub const IMAGE_SIZE: usize = 8;

/// 8×8 pixel-art mask; 1 is the sprite, 0 is background.
pub const IMAGE_MASK: [[u8; IMAGE_SIZE]; IMAGE_SIZE] = [
    [0, 0, 1, 0, 0, 1, 0, 0],
    [0, 0, 0, 1, 1, 0, 0, 0],
    [0, 0, 1, 1, 1, 1, 0, 0],
    [0, 1, 1, 0, 0, 1, 1, 0],
    [1, 1, 1, 1, 1, 1, 1, 1],
    [1, 0, 1, 1, 1, 1, 0, 1],
    [1, 0, 1, 0, 0, 1, 0, 1],
    [0, 0, 0, 1, 1, 0, 0, 0],
];

/// One colour channel of the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageChannel {
    pub name: &'static str,
    /// Channel value on sprite pixels
    pub sprite: u8,
    /// Channel value on background pixels
    pub background: u8,
}

impl ImageChannel {
    /// The channel as an 8×8 matrix.
    pub fn matrix(&self) -> [[u8; IMAGE_SIZE]; IMAGE_SIZE] {
        IMAGE_MASK.map(|row| row.map(|on| if on == 1 { self.sprite } else { self.background }))
    }
}

impl Track for ImageChannel {
    type SubStep = ImageChannel;

    fn title(&self) -> &str {
        self.name
    }

    fn sub_steps(&self) -> &[ImageChannel] {
        std::slice::from_ref(self)
    }
}

/// Teal sprite (6, 214, 160) on a dark blue background (5, 8, 21).
pub static CHANNELS: [ImageChannel; 3] = [
    ImageChannel { name: "Red", sprite: 6, background: 5 },
    ImageChannel { name: "Green", sprite: 214, background: 8 },
    ImageChannel { name: "Blue", sprite: 160, background: 21 },
];

// ============================================================================
// Grid positions (shared by the convolution window and the YOLO inspector)
// ============================================================================

/// One row of a grid; its sub-steps are the column positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridRow {
    pub title: &'static str,
    pub row: usize,
    pub columns: &'static [usize],
}

impl Track for GridRow {
    type SubStep = usize;

    fn title(&self) -> &str {
        self.title
    }

    fn sub_steps(&self) -> &[usize] {
        self.columns
    }
}

// ============================================================================
// Convolution
// ============================================================================

pub const CONV_INPUT_SIZE: usize = 6;
pub const CONV_FILTER_SIZE: usize = 3;

pub const CONV_INPUT: [[i32; CONV_INPUT_SIZE]; CONV_INPUT_SIZE] = [
    [1, 1, 1, 0, 0, 0],
    [1, 1, 1, 0, 0, 0],
    [1, 1, 1, 0, 0, 0],
    [0, 0, 0, 1, 1, 1],
    [0, 0, 0, 1, 1, 1],
    [0, 0, 0, 1, 1, 1],
];

/// Vertical edge detector.
pub const CONV_FILTER: [[i32; CONV_FILTER_SIZE]; CONV_FILTER_SIZE] =
    [[1, 0, -1], [1, 0, -1], [1, 0, -1]];

const WINDOW_COLUMNS: &[usize] = &[0, 1, 2, 3];

/// Valid top-left positions of the 3×3 window over the 6×6 input.
pub static CONV_WINDOW_ROWS: [GridRow; 4] = [
    GridRow { title: "Row 0", row: 0, columns: WINDOW_COLUMNS },
    GridRow { title: "Row 1", row: 1, columns: WINDOW_COLUMNS },
    GridRow { title: "Row 2", row: 2, columns: WINDOW_COLUMNS },
    GridRow { title: "Row 3", row: 3, columns: WINDOW_COLUMNS },
];

/// Whether input cell `(r, c)` lies under the window at `(top, left)`.
pub fn in_window(top: usize, left: usize, r: usize, c: usize) -> bool {
    (top..top + CONV_FILTER_SIZE).contains(&r) && (left..left + CONV_FILTER_SIZE).contains(&c)
}

// ============================================================================
// YOLO grid
// ============================================================================

pub const YOLO_GRID: usize = 7;
/// B*5 + C with 2 boxes and 20 classes.
pub const YOLO_DEPTH: usize = 30;
pub const YOLO_TARGET: (usize, usize) = (3, 4);
const YOLO_CLASS_OFFSET: usize = 10;
const DOG_CLASS: usize = 2;

const GRID_COLUMNS: &[usize] = &[0, 1, 2, 3, 4, 5, 6];

pub static YOLO_ROWS: [GridRow; YOLO_GRID] = [
    GridRow { title: "Row 0", row: 0, columns: GRID_COLUMNS },
    GridRow { title: "Row 1", row: 1, columns: GRID_COLUMNS },
    GridRow { title: "Row 2", row: 2, columns: GRID_COLUMNS },
    GridRow { title: "Row 3", row: 3, columns: GRID_COLUMNS },
    GridRow { title: "Row 4", row: 4, columns: GRID_COLUMNS },
    GridRow { title: "Row 5", row: 5, columns: GRID_COLUMNS },
    GridRow { title: "Row 6", row: 6, columns: GRID_COLUMNS },
];

/// What one grid cell predicts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellPrediction {
    pub confidence: f64,
    pub class: &'static str,
    pub bx: f64,
    pub by: f64,
    pub bw: f64,
    pub bh: f64,
}

impl CellPrediction {
    pub fn is_object(&self) -> bool {
        self.class != "Background"
    }

    /// The cell's depth vector: box 1 (x, y, w, h, conf), box 2, then one
    /// slot per class.
    pub fn depth_vector(&self) -> [f64; YOLO_DEPTH] {
        let mut v = [0.0; YOLO_DEPTH];
        v[0] = self.bx;
        v[1] = self.by;
        v[2] = self.bw;
        v[3] = self.bh;
        v[4] = self.confidence;
        if self.is_object() {
            v[YOLO_CLASS_OFFSET + DOG_CLASS] = 1.0;
        }
        v
    }
}

/// Prediction for cell `(r, c)`. Only the target cell holds an object;
/// every other cell is low-confidence background.
pub fn yolo_cell(r: usize, c: usize) -> CellPrediction {
    if (r, c) == YOLO_TARGET {
        return CellPrediction {
            confidence: 0.89,
            class: "Dog",
            bx: 0.4,
            by: 0.6,
            bw: 0.8,
            bh: 0.9,
        };
    }
    CellPrediction {
        confidence: ((r * YOLO_GRID + c) % 10) as f64 / 100.0,
        class: "Background",
        bx: 0.0,
        by: 0.0,
        bw: 0.0,
        bh: 0.0,
    }
}
