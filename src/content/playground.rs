//! Playground: build a matrix, apply a tensor operation, read off the shape.

use serde::Serialize;
use tracing::trace;

pub const ROWS_RANGE: (usize, usize) = (1, 6);
pub const COLS_RANGE: (usize, usize) = (1, 8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FillType {
    #[default]
    Range,
    Zeros,
    Ones,
    Random,
    Identity,
}

impl FillType {
    pub const ALL: [FillType; 5] = [
        FillType::Range,
        FillType::Zeros,
        FillType::Ones,
        FillType::Random,
        FillType::Identity,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FillType::Range => "Range",
            FillType::Zeros => "Zeros",
            FillType::Ones => "Ones",
            FillType::Random => "Random",
            FillType::Identity => "Identity",
        }
    }

    fn value(self, r: usize, c: usize, cols: usize, seed: u32) -> u32 {
        let linear = r * cols + c + 1;
        match self {
            FillType::Range => linear as u32,
            FillType::Zeros => 0,
            FillType::Ones => 1,
            FillType::Random => {
                let x = (linear as f64 * f64::from(seed) * 123.456).sin().abs();
                (x * 99.0).floor() as u32 + 1
            }
            FillType::Identity => u32::from(r == c),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    #[default]
    None,
    ExpandFront,
    ExpandBack,
    Stack3,
    Batch8,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::None,
        Operation::ExpandFront,
        Operation::ExpandBack,
        Operation::Stack3,
        Operation::Batch8,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Operation::None => "Raw Matrix",
            Operation::ExpandFront => "expand_dims(0)",
            Operation::ExpandBack => "expand_dims(-1)",
            Operation::Stack3 => "Stack ×3",
            Operation::Batch8 => "Batch of 8",
        }
    }

    pub fn note(self) -> &'static str {
        match self {
            Operation::None => "The matrix as-is: (m, n)",
            Operation::ExpandFront => "Add axis at position 0 → (1, m, n)",
            Operation::ExpandBack => "Add axis at end → (m, n, 1)",
            Operation::Stack3 => "Stack 3 copies → (3, m, n)",
            Operation::Batch8 => "(8, m, n), a standard training batch",
        }
    }
}

/// Shape produced by an operation, plus how many slices to draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShapeInfo {
    pub shape: Vec<usize>,
    pub rank: usize,
    pub total: usize,
    pub depth: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Playground {
    rows: usize,
    cols: usize,
    fill: FillType,
    seed: u32,
    op: Operation,
    /// Cell picked for inspection, as (row, col)
    inspected: Option<(usize, usize)>,
}

impl Default for Playground {
    fn default() -> Self {
        Self {
            rows: 3,
            cols: 4,
            fill: FillType::Range,
            seed: 1,
            op: Operation::None,
            inspected: None,
        }
    }
}

impl Playground {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn fill(&self) -> FillType {
        self.fill
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn operation(&self) -> Operation {
        self.op
    }

    pub fn set_rows(&mut self, rows: usize) {
        self.rows = rows.clamp(ROWS_RANGE.0, ROWS_RANGE.1);
    }

    pub fn set_cols(&mut self, cols: usize) {
        self.cols = cols.clamp(COLS_RANGE.0, COLS_RANGE.1);
    }

    pub fn adjust_rows(&mut self, delta: isize) {
        self.set_rows(self.rows.saturating_add_signed(delta));
    }

    pub fn adjust_cols(&mut self, delta: isize) {
        self.set_cols(self.cols.saturating_add_signed(delta));
    }

    /// Choose a fill. Every choice also bumps the seed so "Random" reshuffles.
    pub fn set_fill(&mut self, fill: FillType) {
        self.fill = fill;
        self.reseed();
    }

    pub fn cycle_fill(&mut self) {
        self.set_fill(cycle(&FillType::ALL, self.fill));
    }

    pub fn set_operation(&mut self, op: Operation) {
        self.op = op;
    }

    pub fn cycle_operation(&mut self) {
        self.op = cycle(&Operation::ALL, self.op);
        trace!(op = ?self.op, "playground operation changed");
    }

    pub fn reseed(&mut self) {
        self.seed = self.seed.wrapping_add(1).max(1);
    }

    /// Pick a cell to inspect. Cells outside the matrix are ignored.
    pub fn inspect(&mut self, row: usize, col: usize) {
        if row < self.rows && col < self.cols {
            self.inspected = Some((row, col));
        }
    }

    /// The inspected cell as `(row, col, value)`. A cell cut off by shrinking
    /// the matrix is no longer inspected.
    pub fn inspected_cell(&self) -> Option<(usize, usize, u32)> {
        let (r, c) = self.inspected?;
        (r < self.rows && c < self.cols)
            .then(|| (r, c, self.fill.value(r, c, self.cols, self.seed)))
    }

    /// The `rows × cols` matrix under the current fill.
    pub fn make_data(&self) -> Vec<Vec<u32>> {
        (0..self.rows)
            .map(|r| {
                (0..self.cols)
                    .map(|c| self.fill.value(r, c, self.cols, self.seed))
                    .collect()
            })
            .collect()
    }

    pub fn shape_info(&self) -> ShapeInfo {
        let (m, n) = (self.rows, self.cols);
        let (shape, depth) = match self.op {
            Operation::None => (vec![m, n], 1),
            Operation::ExpandFront => (vec![1, m, n], 1),
            Operation::ExpandBack => (vec![m, n, 1], 1),
            Operation::Stack3 => (vec![3, m, n], 3),
            Operation::Batch8 => (vec![8, m, n], 8),
        };
        ShapeInfo {
            rank: shape.len(),
            total: shape.iter().product(),
            shape,
            depth,
        }
    }
}

fn cycle<T: Copy + PartialEq>(all: &[T], current: T) -> T {
    let pos = all.iter().position(|&v| v == current).unwrap_or(0);
    all[(pos + 1) % all.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let p = Playground::default();
        assert_eq!((p.rows(), p.cols()), (3, 4));
        assert_eq!(p.make_data()[2], vec![9, 10, 11, 12]);
        assert_eq!(p.shape_info().shape, vec![3, 4]);
    }

    #[test]
    fn test_dimensions_clamped() {
        let mut p = Playground::default();
        p.set_rows(0);
        p.set_cols(20);
        assert_eq!((p.rows(), p.cols()), (1, 8));
        p.adjust_rows(-3);
        assert_eq!(p.rows(), 1);
        p.adjust_rows(10);
        assert_eq!(p.rows(), 6);
    }

    #[test]
    fn test_operation_shapes() {
        let mut p = Playground::default();
        let expected = [
            (vec![3, 4], 2, 12),
            (vec![1, 3, 4], 3, 12),
            (vec![3, 4, 1], 3, 12),
            (vec![3, 3, 4], 3, 36),
            (vec![8, 3, 4], 3, 96),
        ];
        for (op, (shape, rank, total)) in Operation::ALL.into_iter().zip(expected) {
            p.set_operation(op);
            let info = p.shape_info();
            assert_eq!(info.shape, shape);
            assert_eq!(info.rank, rank);
            assert_eq!(info.total, total);
        }
    }

    #[test]
    fn test_identity_fill() {
        let mut p = Playground::default();
        p.set_fill(FillType::Identity);
        assert_eq!(p.make_data()[1], vec![0, 1, 0, 0]);
    }

    #[test]
    fn test_random_fill_is_deterministic_and_in_range() {
        let mut p = Playground::default();
        p.set_fill(FillType::Random);
        let first = p.make_data();
        assert_eq!(first, p.make_data());
        assert!(first.iter().flatten().all(|&v| (1..=99).contains(&v)));
        p.reseed();
        assert_ne!(first, p.make_data());
    }

    #[test]
    fn test_inspected_cell_tracks_data() {
        let mut p = Playground::default();
        assert_eq!(p.inspected_cell(), None);
        p.inspect(1, 2);
        assert_eq!(p.inspected_cell(), Some((1, 2, 7)));
        p.set_fill(FillType::Identity);
        assert_eq!(p.inspected_cell(), Some((1, 2, 0)));
        p.inspect(3, 0);
        assert_eq!(p.inspected_cell(), Some((1, 2, 0)));
    }

    #[test]
    fn test_shrinking_drops_inspected_cell() {
        let mut p = Playground::default();
        p.inspect(2, 3);
        p.set_cols(2);
        assert_eq!(p.inspected_cell(), None);
    }

    #[test]
    fn test_cycles_wrap() {
        let mut p = Playground::default();
        for _ in 0..5 {
            p.cycle_fill();
            p.cycle_operation();
        }
        assert_eq!(p.fill(), FillType::Range);
        assert_eq!(p.operation(), Operation::None);
    }
}
