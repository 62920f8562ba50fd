//! Conversion walkthrough: four ways a 2D matrix becomes a higher-rank tensor.

use crate::nav::Track;

/// One step of a technique walkthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechniqueStep {
    pub label: &'static str,
    pub desc: &'static str,
    pub code: &'static str,
    /// Shape after this step
    pub shape: &'static [usize],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Technique {
    pub id: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub steps: &'static [TechniqueStep],
}

impl Track for Technique {
    type SubStep = TechniqueStep;

    fn title(&self) -> &str {
        self.title
    }

    fn sub_steps(&self) -> &[TechniqueStep] {
        self.steps
    }
}

pub static TECHNIQUES: [Technique; 4] = [
    Technique {
        id: "expand",
        icon: "📦",
        title: "np.expand_dims: Add an Axis",
        steps: &[
            TechniqueStep {
                label: "Start: 2D Matrix",
                desc: "We begin with a simple 3×4 matrix of shape (3, 4). It has 2 axes (rank 2).",
                code: "M = np.array([[1,2,3,4],[5,6,7,8],[9,10,11,12]])\nM.shape  # (3, 4)",
                shape: &[3, 4],
            },
            TechniqueStep {
                label: "expand_dims(M, axis=0)",
                desc: "Insert a new axis at position 0. Shape goes from (3,4) to (1,3,4). We now have rank 3.",
                code: "T = np.expand_dims(M, axis=0)\nT.shape  # (1, 3, 4)",
                shape: &[1, 3, 4],
            },
            TechniqueStep {
                label: "expand_dims(M, axis=2)",
                desc: "Or insert at the end. Shape (3,4) becomes (3,4,1). Still rank 3, a \"column\" tensor.",
                code: "T2 = np.expand_dims(M, axis=2)\nT2.shape  # (3, 4, 1)",
                shape: &[3, 4, 1],
            },
            TechniqueStep {
                label: "Stack multiple copies",
                desc: "Stack 3 copies along axis 0 to get a proper (3,3,4) tensor, like 3 colour channels.",
                code: "T3 = np.stack([M, M, M], axis=0)\nT3.shape  # (3, 3, 4)",
                shape: &[3, 3, 4],
            },
        ],
    },
    Technique {
        id: "reshape",
        icon: "🔄",
        title: "np.reshape: Reshape into Tensor",
        steps: &[
            TechniqueStep {
                label: "Start: 2D Matrix (4×6)",
                desc: "A 4×6 matrix has 24 elements. Reshape can reinterpret the same 24 values in any shape.",
                code: "M = np.arange(24).reshape(4, 6)\nM.shape  # (4, 6)",
                shape: &[4, 6],
            },
            TechniqueStep {
                label: "Reshape to (2, 3, 4)",
                desc: "Same 24 values as a rank-3 tensor: 2 slices × 3 rows × 4 cols. 2×3×4 = 24.",
                code: "T = M.reshape(2, 3, 4)\nT.shape  # (2, 3, 4)",
                shape: &[2, 3, 4],
            },
            TechniqueStep {
                label: "Reshape to (2, 2, 2, 3)",
                desc: "Same data, rank 4. 2×2×2×3 = 24. The total element count must stay the same.",
                code: "T2 = M.reshape(2, 2, 2, 3)\nT2.shape  # (2, 2, 2, 3)\nT2.ndim   # 4",
                shape: &[2, 2, 2, 3],
            },
        ],
    },
    Technique {
        id: "stack",
        icon: "📚",
        title: "np.stack: Stack Matrices into Tensor",
        steps: &[
            TechniqueStep {
                label: "Three Separate Matrices",
                desc: "Three individual 3×3 matrices: the R, G, B colour channels of a tiny image.",
                code: "R = np.array([[...]])  # shape (3,3)\nG = np.array([[...]])  # shape (3,3)\nB = np.array([[...]])  # shape (3,3)",
                shape: &[3, 3],
            },
            TechniqueStep {
                label: "np.stack([R, G, B], axis=0)",
                desc: "Stack along axis 0 for shape (3, 3, 3). Three 3×3 matrices become a single tensor.",
                code: "img = np.stack([R, G, B], axis=0)\nimg.shape  # (3, 3, 3)\n# axis 0 = channel, 1 = row, 2 = col",
                shape: &[3, 3, 3],
            },
            TechniqueStep {
                label: "np.stack([R, G, B], axis=2): HWC",
                desc: "Stack along axis 2: shape (3, 3, 3) but channels-last (H, W, C), standard in TensorFlow.",
                code: "img_hwc = np.stack([R, G, B], axis=2)\nimg_hwc.shape  # (3, 3, 3)\n# axis 2 = channel (channels-last)",
                shape: &[3, 3, 3],
            },
        ],
    },
    Technique {
        id: "batch",
        icon: "🎯",
        title: "Batching: Matrix to Rank-4 Tensor",
        steps: &[
            TechniqueStep {
                label: "Single Image Matrix",
                desc: "A single greyscale image is a 28×28 matrix: shape (28, 28).",
                code: "img = np.zeros((28, 28))\nimg.shape  # (28, 28)  <- rank 2",
                shape: &[28, 28],
            },
            TechniqueStep {
                label: "Add channel dimension",
                desc: "For neural networks we add a channel axis: (28,28) becomes (28,28,1).",
                code: "img_c = img[..., np.newaxis]\nimg_c.shape  # (28, 28, 1)  <- rank 3",
                shape: &[28, 28, 1],
            },
            TechniqueStep {
                label: "Add batch dimension",
                desc: "Wrap in a batch: (28,28,1) becomes (1,28,28,1), one image in a batch of size 1.",
                code: "batch1 = img_c[np.newaxis, ...]\nbatch1.shape  # (1, 28, 28, 1)  <- rank 4",
                shape: &[1, 28, 28, 1],
            },
            TechniqueStep {
                label: "Real training batch",
                desc: "Load 32 images and stack them: shape (32,28,28,1). This is what a GPU processes at once.",
                code: "batch = np.stack(images, axis=0)\nbatch.shape  # (32, 28, 28, 1)\n# batch_size × H × W × C",
                shape: &[32, 28, 28, 1],
            },
        ],
    },
];
