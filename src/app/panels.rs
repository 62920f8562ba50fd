//! Per-step panel state.
//!
//! Panel state lives for the whole session, so returning to a step shows it
//! as it was left.

use crate::content::basics::{
    ComparisonRow, MatrixExample, ScalarExample, TensorShapeExample, VectorExample,
    COMPARISON_ROWS, MATRICES, SCALARS, TENSOR_SHAPES, VECTORS,
};
use crate::content::bbox::BoundingBox;
use crate::content::domains::{Domain, DOMAINS};
use crate::content::playback::PlaybackClock;
use crate::content::playground::Playground;
use crate::content::ranks::{RankInfo, RANKS};
use crate::content::techniques::{Technique, TECHNIQUES};
use crate::content::tracking::TrackingState;
use crate::content::vision::{GridRow, ImageChannel, CHANNELS, CONV_WINDOW_ROWS, YOLO_ROWS};
use crate::content::StepKind;
use crate::error::TutorResult;
use crate::nav::{SubNavigation, Track, TrackPanel};

type Catalog<T> = TrackPanel<&'static T>;

fn catalog<T: Track>(items: &'static [T]) -> TutorResult<Catalog<T>> {
    TrackPanel::new(items.iter().collect())
}

#[derive(Debug, Clone)]
pub struct Panels {
    pub scalars: Catalog<ScalarExample>,
    pub vectors: Catalog<VectorExample>,
    pub matrices: Catalog<MatrixExample>,
    pub tensors: Catalog<TensorShapeExample>,
    pub ranks: Catalog<RankInfo>,
    pub conversion: Catalog<Technique>,
    pub realworld: Catalog<Domain>,
    pub comparison: Catalog<ComparisonRow>,
    pub channels: Catalog<ImageChannel>,
    pub conv_window: Catalog<GridRow>,
    /// Auto-slide of the convolution window
    pub conv_clock: PlaybackClock,
    pub yolo: Catalog<GridRow>,
    pub bbox: BoundingBox,
    pub tracking: TrackingState,
    pub playground: Playground,
}

impl Panels {
    pub fn new() -> TutorResult<Self> {
        Ok(Self {
            scalars: catalog(&SCALARS)?,
            vectors: catalog(&VECTORS)?,
            matrices: catalog(&MATRICES)?,
            tensors: catalog(&TENSOR_SHAPES)?,
            ranks: catalog(&RANKS)?,
            conversion: catalog(&TECHNIQUES)?,
            realworld: catalog(&DOMAINS)?,
            comparison: catalog(&COMPARISON_ROWS)?,
            channels: catalog(&CHANNELS)?,
            conv_window: catalog(&CONV_WINDOW_ROWS)?,
            conv_clock: PlaybackClock::default(),
            yolo: catalog(&YOLO_ROWS)?,
            bbox: BoundingBox::default(),
            tracking: TrackingState::default(),
            playground: Playground::default(),
        })
    }

    /// Move the convolution window one position in reading order. Past the
    /// last position the window returns to the top-left and the clock stops.
    pub fn slide_conv_window(&mut self) {
        let nav = self.conv_window.nav_mut();
        let (row, col) = nav.position();
        if col + 1 < nav.sub_step_count(row) {
            nav.select_sub_step(col + 1);
        } else if row + 1 < nav.track_count() {
            nav.select_track(row + 1);
        } else {
            nav.select_track(0);
            self.conv_clock.stop();
        }
    }

    /// The sub-navigation behind a step, if the step has tracks.
    pub fn sub_nav(&self, kind: StepKind) -> Option<&SubNavigation> {
        Some(match kind {
            StepKind::Scalars => self.scalars.nav(),
            StepKind::Vectors => self.vectors.nav(),
            StepKind::Matrices => self.matrices.nav(),
            StepKind::Tensors => self.tensors.nav(),
            StepKind::RankExplorer => self.ranks.nav(),
            StepKind::Conversion => self.conversion.nav(),
            StepKind::RealWorld => self.realworld.nav(),
            StepKind::Comparison => self.comparison.nav(),
            StepKind::CvImages => self.channels.nav(),
            StepKind::CvConvolution => self.conv_window.nav(),
            StepKind::CvYoloGrid => self.yolo.nav(),
            StepKind::Welcome
            | StepKind::CvBoundingBox
            | StepKind::CvTracking
            | StepKind::Playground => return None,
        })
    }

    pub fn sub_nav_mut(&mut self, kind: StepKind) -> Option<&mut SubNavigation> {
        Some(match kind {
            StepKind::Scalars => self.scalars.nav_mut(),
            StepKind::Vectors => self.vectors.nav_mut(),
            StepKind::Matrices => self.matrices.nav_mut(),
            StepKind::Tensors => self.tensors.nav_mut(),
            StepKind::RankExplorer => self.ranks.nav_mut(),
            StepKind::Conversion => self.conversion.nav_mut(),
            StepKind::RealWorld => self.realworld.nav_mut(),
            StepKind::Comparison => self.comparison.nav_mut(),
            StepKind::CvImages => self.channels.nav_mut(),
            StepKind::CvConvolution => self.conv_window.nav_mut(),
            StepKind::CvYoloGrid => self.yolo.nav_mut(),
            StepKind::Welcome
            | StepKind::CvBoundingBox
            | StepKind::CvTracking
            | StepKind::Playground => return None,
        })
    }
}
