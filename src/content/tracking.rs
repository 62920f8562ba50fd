//! Object tracking playback: one object followed across five frames.

use std::time::Duration;

use serde::Serialize;
use tracing::trace;

use super::playback::{PlaybackClock, STEP_INTERVAL};

/// Time each frame stays on screen while playing.
pub const FRAME_INTERVAL: Duration = STEP_INTERVAL;
pub const TRACK_ID: u32 = 42;

/// Box center for one frame, in percent of the frame size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Frame {
    pub t: usize,
    pub x: u16,
    pub y: u16,
}

pub static FRAMES: [Frame; 5] = [
    Frame { t: 0, x: 20, y: 50 },
    Frame { t: 1, x: 40, y: 51 },
    Frame { t: 2, x: 60, y: 52 },
    Frame { t: 3, x: 80, y: 53 },
    Frame { t: 4, x: 100, y: 54 },
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackingState {
    frame: usize,
    clock: PlaybackClock,
}

impl TrackingState {
    pub fn frame_index(&self) -> usize {
        self.frame
    }

    pub fn frame(&self) -> &'static Frame {
        &FRAMES[self.frame]
    }

    pub fn is_playing(&self) -> bool {
        self.clock.is_playing()
    }

    pub fn toggle_playback(&mut self) {
        self.clock.toggle();
        trace!(playing = self.clock.is_playing(), "tracking playback toggled");
    }

    /// Advance the playback clock. Returns true when the frame changed.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let steps = self.clock.tick(dt) as usize;
        self.frame = (self.frame + steps) % FRAMES.len();
        steps > 0
    }

    /// Jump to a frame. Stops playback; out-of-range frames are ignored.
    pub fn scrub(&mut self, frame: usize) {
        if frame >= FRAMES.len() {
            return;
        }
        self.clock.stop();
        self.frame = frame;
    }

    pub fn step_forward(&mut self) {
        self.scrub(self.frame + 1);
    }

    pub fn step_back(&mut self) {
        if let Some(prev) = self.frame.checked_sub(1) {
            self.scrub(prev);
        }
    }
}
