//! Tutorial content: the step outline and the literal data behind each panel.
//!
//! Everything in here is fixed at compile time. The catalogs are plain
//! `static` tables; panels that let the reader flip between alternatives wrap
//! them in a [`TrackPanel`](crate::nav::TrackPanel).

pub mod basics;
pub mod bbox;
pub mod domains;
pub mod playback;
pub mod playground;
pub mod ranks;
pub mod techniques;
pub mod tracking;
pub mod vision;

use serde::Serialize;

use crate::error::TutorResult;
use crate::nav::Outline;

/// Which panel renders a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    Welcome,
    Scalars,
    Vectors,
    Matrices,
    Tensors,
    RankExplorer,
    Conversion,
    RealWorld,
    Comparison,
    CvImages,
    CvConvolution,
    CvBoundingBox,
    CvYoloGrid,
    CvTracking,
    Playground,
}

/// The full tutorial outline: four chapters, fifteen steps.
pub fn tutorial_outline() -> TutorResult<Outline<StepKind>> {
    Outline::builder()
        .chapter("Foundations")
        .step("welcome", "Welcome", "🚀", StepKind::Welcome)
        .step("scalars", "Scalars", "⚡", StepKind::Scalars)
        .step("vectors", "Vectors", "➡", StepKind::Vectors)
        .step("matrices", "Matrices", "🔲", StepKind::Matrices)
        .chapter("Tensors Core")
        .step("tensors", "Tensors", "🧊", StepKind::Tensors)
        .step("rank", "Rank & Shape", "📐", StepKind::RankExplorer)
        .step("conversion", "Conversion", "🔄", StepKind::Conversion)
        .step("realworld", "Real World", "🌍", StepKind::RealWorld)
        .step("comparison", "Comparison", "⚖", StepKind::Comparison)
        .chapter("Computer Vision")
        .step("cv_images", "Images as Tensors", "🖼", StepKind::CvImages)
        .step("cv_conv", "Convolutions", "🔍", StepKind::CvConvolution)
        .step("cv_bbox", "Bounding Boxes", "🎯", StepKind::CvBoundingBox)
        .step("cv_yolo", "YOLO Grid", "🧩", StepKind::CvYoloGrid)
        .step("cv_tracking", "Tracking", "🎬", StepKind::CvTracking)
        .chapter("Practice")
        .step("playground", "Playground", "🎮", StepKind::Playground)
        .build()
}

/// NumPy-style shape tuple: `()`, `(5,)`, `(3, 4)`.
pub fn format_shape(shape: &[usize]) -> String {
    match shape {
        [] => "()".to_string(),
        [n] => format!("({n},)"),
        dims => {
            let parts: Vec<String> = dims.iter().map(ToString::to_string).collect();
            format!("({})", parts.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline_shape() {
        let outline = tutorial_outline().unwrap();
        assert_eq!(outline.len(), 15);
        let titles: Vec<&str> = outline.chapters().iter().map(|c| c.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Foundations", "Tensors Core", "Computer Vision", "Practice"]
        );
    }

    #[test]
    fn test_playground_is_last() {
        let outline = tutorial_outline().unwrap();
        assert_eq!(outline.last().content, StepKind::Playground);
        assert_eq!(outline.position_of("playground"), Some(14));
    }

    #[test]
    fn test_format_shape() {
        assert_eq!(format_shape(&[]), "()");
        assert_eq!(format_shape(&[5]), "(5,)");
        assert_eq!(format_shape(&[8, 3, 4]), "(8, 3, 4)");
    }

    #[test]
    fn test_every_kind_appears_once() {
        let outline = tutorial_outline().unwrap();
        let kinds: std::collections::HashSet<StepKind> =
            outline.steps().iter().map(|s| s.content).collect();
        assert_eq!(kinds.len(), outline.len());
    }
}
