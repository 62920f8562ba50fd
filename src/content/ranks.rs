//! Rank explorer catalog: ranks 0 through 4, each with its use cases.

use crate::nav::Track;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankInfo {
    pub rank: usize,
    pub name: &'static str,
    pub shape: &'static str,
    pub icon: &'static str,
    pub example: &'static str,
    pub desc: &'static str,
    pub use_cases: &'static [&'static str],
}

impl Track for RankInfo {
    type SubStep = &'static str;

    fn title(&self) -> &str {
        self.name
    }

    fn sub_steps(&self) -> &[&'static str] {
        self.use_cases
    }
}

pub static RANKS: [RankInfo; 5] = [
    RankInfo {
        rank: 0,
        name: "Scalar",
        shape: "()",
        icon: "⚡",
        example: "42",
        desc: "A single number. No axes. The most basic mathematical object.",
        use_cases: &["Loss value", "Learning rate", "Temperature", "Probability"],
    },
    RankInfo {
        rank: 1,
        name: "Vector",
        shape: "(n,)",
        icon: "➡",
        example: "[1, 2, 3, 4]",
        desc: "An ordered list of numbers along ONE axis. Has length n.",
        use_cases: &["Feature vector", "Word embedding", "Velocity", "1D signal"],
    },
    RankInfo {
        rank: 2,
        name: "Matrix",
        shape: "(m, n)",
        icon: "🔲",
        example: "[[1,2],[3,4]]",
        desc: "Numbers arranged in ROWS × COLS: the classic 2D grid.",
        use_cases: &["Image channel", "Transformation", "DataFrame", "Correlation"],
    },
    RankInfo {
        rank: 3,
        name: "Rank-3 Tensor",
        shape: "(d, m, n)",
        icon: "🧊",
        example: "image.shape = (224, 224, 3)",
        desc: "Three axes: depth × rows × cols. Like stacked matrices.",
        use_cases: &["RGB image", "Time series batch", "3D volumetric data", "Conv layer"],
    },
    RankInfo {
        rank: 4,
        name: "Rank-4 Tensor",
        shape: "(b, d, m, n)",
        icon: "🎬",
        example: "batch.shape = (32, 224, 224, 3)",
        desc: "Four axes: batch × depth × rows × cols, standard in deep learning.",
        use_cases: &["Training batch", "Video clip", "4D MRI scan", "Conv4D features"],
    },
];
