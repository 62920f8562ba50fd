//! Fixed-rate clock for the animated steps.

use std::time::Duration;

/// How long each animation step stays on screen.
pub const STEP_INTERVAL: Duration = Duration::from_millis(800);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaybackClock {
    playing: bool,
    elapsed: Duration,
}

impl PlaybackClock {
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn toggle(&mut self) {
        self.playing = !self.playing;
        self.elapsed = Duration::ZERO;
    }

    pub fn stop(&mut self) {
        self.playing = false;
        self.elapsed = Duration::ZERO;
    }

    /// Advance by `dt` and return how many whole steps elapsed. A stopped
    /// clock never fires.
    pub fn tick(&mut self, dt: Duration) -> u32 {
        if !self.playing {
            return 0;
        }
        self.elapsed += dt;
        let mut fired = 0;
        while self.elapsed >= STEP_INTERVAL {
            self.elapsed -= STEP_INTERVAL;
            fired += 1;
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopped_clock_never_fires() {
        let mut clock = PlaybackClock::default();
        assert_eq!(clock.tick(Duration::from_secs(10)), 0);
    }

    #[test]
    fn test_fires_once_per_interval() {
        let mut clock = PlaybackClock::default();
        clock.toggle();
        assert_eq!(clock.tick(Duration::from_millis(500)), 0);
        assert_eq!(clock.tick(Duration::from_millis(300)), 1);
        assert_eq!(clock.tick(STEP_INTERVAL * 3), 3);
    }

    #[test]
    fn test_toggle_resets_partial_interval() {
        let mut clock = PlaybackClock::default();
        clock.toggle();
        clock.tick(Duration::from_millis(700));
        clock.toggle();
        clock.toggle();
        assert_eq!(clock.tick(Duration::from_millis(700)), 0);
    }
}
