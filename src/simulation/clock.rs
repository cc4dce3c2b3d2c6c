//! Frame delta computation for the render-loop driver.

/// Turns absolute frame timestamps into simulation deltas.
///
/// Pausing drops the reference timestamp, so the first frame after resuming
/// yields a zero delta instead of the paused duration.
#[derive(Debug, Clone)]
pub struct SimulationClock {
    last: Option<f64>,
    paused: bool,
    max_delta: f64,
}

impl SimulationClock {
    /// Creates a clock that never hands out more than `max_delta` seconds.
    pub fn new(max_delta: f64) -> Self {
        Self {
            last: None,
            paused: false,
            max_delta,
        }
    }

    /// Delta since the previous call, given the current time in seconds.
    ///
    /// Returns `None` when no simulation time has passed: on the first call,
    /// while paused, on the first call after resuming, and when `now` does
    /// not move forward.
    pub fn advance(&mut self, now: f64) -> Option<f64> {
        if self.paused {
            return None;
        }
        let last = self.last.replace(now)?;
        let delta = (now - last).min(self.max_delta);
        (delta > 0.0).then_some(delta)
    }

    /// Pauses or resumes the clock.
    pub fn set_paused(&mut self, paused: bool) {
        if paused != self.paused {
            self.paused = paused;
            self.last = None;
        }
    }

    /// Whether the clock is paused.
    pub fn is_paused(&self) -> bool {
        self.paused
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new(0.25)
    }
}
