//! Two-level navigation inside a single panel.
//!
//! A panel offers a small catalog of alternative tracks (techniques, domains,
//! ranks, grid rows, ...) and each track is an ordered list of sub-steps.
//! [`SubNavigation`] holds the `(track, sub_step)` pair; [`TrackPanel`] pairs
//! it with the catalog so renderers can ask for the current items directly.
//!
//! Switching tracks always lands on sub-step 0 of the new track. There is no
//! operation that changes the track while keeping a non-zero sub-step.

use serde::Serialize;

use crate::error::{TutorError, TutorResult};

/// `(outer, inner)` position within a catalog of tracks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubNavigation {
    sub_step_counts: Vec<usize>,
    outer: usize,
    inner: usize,
}

impl SubNavigation {
    /// Create a sub-navigation over tracks with the given sub-step counts.
    /// Starts at `(0, 0)`.
    ///
    /// # Errors
    ///
    /// [`TutorError::NoTracks`] for an empty catalog,
    /// [`TutorError::EmptyTrack`] if any track has zero sub-steps.
    pub fn new(sub_step_counts: Vec<usize>) -> TutorResult<Self> {
        if sub_step_counts.is_empty() {
            return Err(TutorError::NoTracks);
        }
        if let Some(track) = sub_step_counts.iter().position(|&n| n == 0) {
            return Err(TutorError::EmptyTrack { track });
        }
        Ok(Self {
            sub_step_counts,
            outer: 0,
            inner: 0,
        })
    }

    /// Select a track and reset to its first sub-step. Reselecting the
    /// current track also resets. Out-of-range tracks are ignored.
    pub fn select_track(&mut self, track: usize) {
        if track >= self.sub_step_counts.len() {
            return;
        }
        self.outer = track;
        self.inner = 0;
    }

    /// Select a sub-step within the current track. Out-of-range sub-steps are
    /// ignored.
    pub fn select_sub_step(&mut self, sub_step: usize) {
        if sub_step < self.sub_step_count(self.outer) {
            self.inner = sub_step;
        }
    }

    pub fn advance_sub_step(&mut self) {
        self.select_sub_step(self.inner + 1);
    }

    pub fn retreat_sub_step(&mut self) {
        if let Some(prev) = self.inner.checked_sub(1) {
            self.select_sub_step(prev);
        }
    }

    /// Select the following track. No wraparound.
    pub fn next_track(&mut self) {
        self.select_track(self.outer + 1);
    }

    /// Select the preceding track. No wraparound.
    pub fn prev_track(&mut self) {
        if let Some(prev) = self.outer.checked_sub(1) {
            self.select_track(prev);
        }
    }

    pub fn track_count(&self) -> usize {
        self.sub_step_counts.len()
    }

    /// Number of sub-steps in `track`, or 0 for an unknown track.
    pub fn sub_step_count(&self, track: usize) -> usize {
        self.sub_step_counts.get(track).copied().unwrap_or(0)
    }

    pub fn outer(&self) -> usize {
        self.outer
    }

    pub fn inner(&self) -> usize {
        self.inner
    }

    /// `(outer, inner)`.
    pub fn position(&self) -> (usize, usize) {
        (self.outer, self.inner)
    }
}

/// A selectable alternative within a panel.
pub trait Track {
    type SubStep;

    fn title(&self) -> &str;

    fn sub_steps(&self) -> &[Self::SubStep];
}

impl<T: Track + ?Sized> Track for &T {
    type SubStep = T::SubStep;

    fn title(&self) -> &str {
        (**self).title()
    }

    fn sub_steps(&self) -> &[Self::SubStep] {
        (**self).sub_steps()
    }
}

/// A catalog of tracks together with the panel's [`SubNavigation`].
#[derive(Debug, Clone)]
pub struct TrackPanel<T> {
    tracks: Vec<T>,
    nav: SubNavigation,
}

impl<T: Track> TrackPanel<T> {
    /// Build a panel over `tracks`, positioned at `(0, 0)`.
    pub fn new(tracks: Vec<T>) -> TutorResult<Self> {
        let counts = tracks.iter().map(|t| t.sub_steps().len()).collect();
        let nav = SubNavigation::new(counts)?;
        Ok(Self { tracks, nav })
    }

    pub fn tracks(&self) -> &[T] {
        &self.tracks
    }

    pub fn nav(&self) -> &SubNavigation {
        &self.nav
    }

    /// Mutable access for callers that drive panels without knowing `T`.
    pub fn nav_mut(&mut self) -> &mut SubNavigation {
        &mut self.nav
    }

    pub fn current_track(&self) -> &T {
        &self.tracks[self.nav.outer()]
    }

    pub fn current_sub_step(&self) -> &T::SubStep {
        &self.current_track().sub_steps()[self.nav.inner()]
    }

    pub fn select_track(&mut self, track: usize) {
        self.nav.select_track(track);
    }

    pub fn select_sub_step(&mut self, sub_step: usize) {
        self.nav.select_sub_step(sub_step);
    }

    pub fn advance_sub_step(&mut self) {
        self.nav.advance_sub_step();
    }

    pub fn retreat_sub_step(&mut self) {
        self.nav.retreat_sub_step();
    }

    pub fn next_track(&mut self) {
        self.nav.next_track();
    }

    pub fn prev_track(&mut self) {
        self.nav.prev_track();
    }
}
