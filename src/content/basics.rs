//! Literal examples for the introductory steps: scalars, vectors, matrices,
//! the tensor shape gallery and the matrix-vs-tensor comparison table.

use crate::nav::Track;

/// An explanatory card shown beside a visual.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fact {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

/// Tracks that have a single sub-step: the example itself.
macro_rules! single_step_track {
    ($ty:ty, $title:ident) => {
        impl Track for $ty {
            type SubStep = $ty;

            fn title(&self) -> &str {
                self.$title
            }

            fn sub_steps(&self) -> &[$ty] {
                std::slice::from_ref(self)
            }
        }
    };
}

// ============================================================================
// Welcome
// ============================================================================

pub const WELCOME_TITLE: &str = "From Matrices to Tensors";

pub const WELCOME_BODY: &str = "Scalars, vectors and matrices are all special cases of one idea: \
the tensor. This walkthrough builds that idea one axis at a time, then shows \
how computer vision models read images, boxes and video as tensors.";

pub const WELCOME_HIGHLIGHTS: &[(&str, &str)] = &[
    ("📚", "15 Lessons"),
    ("✨", "Visual Demos"),
    ("🎮", "Interactive"),
    ("🚀", "Beginner → Pro"),
];

// ============================================================================
// Scalars
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalarExample {
    pub value: &'static str,
    pub label: &'static str,
}

single_step_track!(ScalarExample, label);

pub static SCALARS: [ScalarExample; 4] = [
    ScalarExample { value: "42", label: "Count of items" },
    ScalarExample { value: "-3.14", label: "Temperature offset" },
    ScalarExample { value: "0", label: "Zero (additive id.)" },
    ScalarExample { value: "100000", label: "100 000 (distance)" },
];

pub const SCALAR_FACTS: &[Fact] = &[
    Fact {
        icon: "🔢",
        title: "Single value",
        body: "A scalar holds exactly one number. No rows, no columns, just a value.",
    },
    Fact {
        icon: "📐",
        title: "Zero dimensions",
        body: "Shape: () is the empty tuple. No axes at all.",
    },
    Fact {
        icon: "💡",
        title: "Everyday examples",
        body: "Speed: 60 km/h · Pressure: 101.3 kPa · Loss value: 0.042",
    },
];

// ============================================================================
// Vectors
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VectorExample {
    pub data: &'static [f64],
    pub label: &'static str,
    pub note: &'static str,
}

single_step_track!(VectorExample, label);

impl VectorExample {
    /// NumPy-style shape, e.g. `(5,)`.
    pub fn shape(&self) -> String {
        format!("({},)", self.data.len())
    }
}

pub static VECTORS: [VectorExample; 4] = [
    VectorExample {
        data: &[3.0, 1.0, 4.0, 1.0, 5.0],
        label: "Row Vector (1D)",
        note: "Shape: (5,)",
    },
    VectorExample {
        data: &[2.0, -1.0, 3.0],
        label: "3D Position",
        note: "Shape: (3,)",
    },
    VectorExample {
        data: &[0.1, 0.7, 0.2],
        label: "Probability Distribution",
        note: "Shape: (3,), must sum to 1",
    },
    VectorExample {
        data: &[255.0, 128.0, 64.0, 200.0],
        label: "RGBA Pixel",
        note: "Shape: (4,)",
    },
];

pub const VECTOR_FACTS: &[Fact] = &[
    Fact {
        icon: "📏",
        title: "One axis",
        body: "Shape is always (n,): a single number n gives the length.",
    },
    Fact {
        icon: "🔢",
        title: "Indexing",
        body: "v[i] accesses the i-th element. Indices start at 0.",
    },
    Fact {
        icon: "➕",
        title: "Operations",
        body: "Addition, dot product and scaling all work element-wise along the single axis.",
    },
];

// ============================================================================
// Matrices
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixExample {
    pub name: &'static str,
    pub data: &'static [&'static [i32]],
    pub note: &'static str,
}

single_step_track!(MatrixExample, name);

impl MatrixExample {
    pub fn rows(&self) -> usize {
        self.data.len()
    }

    pub fn cols(&self) -> usize {
        self.data.first().map_or(0, |r| r.len())
    }
}

pub static MATRICES: [MatrixExample; 4] = [
    MatrixExample {
        name: "Identity Matrix I₃",
        data: &[&[1, 0, 0], &[0, 1, 0], &[0, 0, 1]],
        note: "Ones on the diagonal, zeros elsewhere. Multiplying by I leaves any matrix unchanged.",
    },
    MatrixExample {
        name: "Magic Square (3×3)",
        data: &[&[2, 7, 6], &[9, 5, 1], &[4, 3, 8]],
        note: "Every row, column and diagonal sums to 15.",
    },
    MatrixExample {
        name: "Rotation 90°",
        data: &[&[0, -1], &[1, 0]],
        note: "As a linear map this rotates 2D vectors by 90° counter-clockwise.",
    },
    MatrixExample {
        name: "Grayscale Pixel Channel",
        data: &[&[50, 200, 50], &[200, 255, 200], &[50, 200, 50]],
        note: "A tiny 3×3 grayscale image: each number is a pixel intensity 0-255.",
    },
];

pub const MATRIX_FACTS: &[Fact] = &[
    Fact {
        icon: "📐",
        title: "Shape (m × n)",
        body: "m rows × n columns, e.g. (3, 3) or (2, 2).",
    },
    Fact {
        icon: "🔢",
        title: "Indexing M[i, j]",
        body: "i selects the row (axis 0), j the column (axis 1).",
    },
    Fact {
        icon: "🔄",
        title: "Transpose Mᵀ",
        body: "Swap rows and columns: shape (m, n) becomes (n, m).",
    },
    Fact {
        icon: "✖",
        title: "Matrix multiply",
        body: "(m, k) × (k, n) → (m, n). Inner dims must match; not commutative.",
    },
];

// ============================================================================
// Tensors
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TensorShapeExample {
    pub label: &'static str,
    pub shape: [usize; 3],
    pub desc: &'static str,
}

single_step_track!(TensorShapeExample, label);

impl TensorShapeExample {
    pub fn element_count(&self) -> usize {
        self.shape.iter().product()
    }
}

pub static TENSOR_SHAPES: [TensorShapeExample; 4] = [
    TensorShapeExample {
        label: "3×3×3 Tensor",
        shape: [3, 3, 3],
        desc: "Rank 3: depth × rows × cols",
    },
    TensorShapeExample {
        label: "4×3×3 Tensor",
        shape: [4, 3, 3],
        desc: "4 depth slices, like 4 stacked matrices",
    },
    TensorShapeExample {
        label: "3×4×4 Tensor",
        shape: [3, 4, 4],
        desc: "Like 3 colour channels in a small image",
    },
    TensorShapeExample {
        label: "2×3×4 Tensor",
        shape: [2, 3, 4],
        desc: "Batch of 2, 3 rows, 4 cols",
    },
];

pub const TENSOR_FACTS: &[Fact] = &[
    Fact {
        icon: "🧊",
        title: "Stacked matrices",
        body: "A rank-3 tensor is a stack of matrices, like pages of a book.",
    },
    Fact {
        icon: "📷",
        title: "Colour images",
        body: "An RGB image is a rank-3 tensor of shape (H, W, 3).",
    },
    Fact {
        icon: "🎬",
        title: "Video",
        body: "Adding a time axis promotes rank 3 to rank 4: (frames, H, W, channels).",
    },
    Fact {
        icon: "🤖",
        title: "Neural networks",
        body: "Training batches are rank-4 tensors: (batch_size, H, W, channels).",
    },
];

// ============================================================================
// Comparison
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonRow {
    pub attr: &'static str,
    pub matrix: &'static str,
    pub tensor: &'static str,
}

single_step_track!(ComparisonRow, attr);

pub static COMPARISON_ROWS: [ComparisonRow; 9] = [
    ComparisonRow {
        attr: "Definition",
        matrix: "Rectangular 2D array of numbers; m rows × n columns.",
        tensor: "N-dimensional generalisation of scalars, vectors & matrices.",
    },
    ComparisonRow {
        attr: "Rank / ndim",
        matrix: "Always rank 2 (exactly 2 axes).",
        tensor: "Can be rank 0, 1, 2, 3, 4 … N: any number of axes.",
    },
    ComparisonRow {
        attr: "Shape notation",
        matrix: "(m, n): always exactly two numbers.",
        tensor: "(d₁, d₂, …, dₙ): any number of dimensions.",
    },
    ComparisonRow {
        attr: "Special cases",
        matrix: "1×n = row vector; m×1 = column vector; n×n = square matrix.",
        tensor: "Rank-0 = scalar; Rank-1 = vector; Rank-2 = matrix.",
    },
    ComparisonRow {
        attr: "Indexing",
        matrix: "M[i, j]: always exactly two indices.",
        tensor: "T[i₁, i₂, …, iₙ]: one index per axis.",
    },
    ComparisonRow {
        attr: "Multiplication",
        matrix: "Matrix multiply (m,k)×(k,n)→(m,n). Inner dims must match.",
        tensor: "Tensor contraction generalises mat-mul to any pair of axes.",
    },
    ComparisonRow {
        attr: "Transpose",
        matrix: "Mᵀ swaps rows and cols. Shape (m,n)→(n,m).",
        tensor: "np.transpose(T, axes) permutes any subset of axes.",
    },
    ComparisonRow {
        attr: "Storage",
        matrix: "Stored as contiguous 2D block of numbers in memory.",
        tensor: "Stored as contiguous N-D block; strides describe each axis.",
    },
    ComparisonRow {
        attr: "Real world",
        matrix: "Linear transforms, spreadsheets, systems of equations, 1-channel images.",
        tensor: "RGB images, video, NLP batches, network weights, MRI scans.",
    },
];

pub const COMPARISON_TAKEAWAYS: &[(&str, &str)] = &[
    ("🔑", "Tensors generalise: same math, more dimensions."),
    ("📦", "In code, both are just N-D arrays (ndarray, Tensor)."),
];
