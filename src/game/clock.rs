//! Fixed-rate update clock
//!
//! Scene speeds are in pixels per frame, so the scene must be stepped at a
//! fixed rate regardless of the display's refresh rate. Real frame time is
//! accumulated and converted into whole update steps.

/// Upper bound on catch-up steps per rendered frame; time beyond that is dropped
pub const MAX_STEPS_PER_FRAME: u32 = 5;

#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Seconds per update step
    step: f64,
    accumulator: f64,
}

impl FrameClock {
    pub fn new(step_seconds: f64) -> Self {
        Self { step: step_seconds, accumulator: 0.0 }
    }

    /// Add a frame's elapsed time; returns how many updates to run now
    pub fn advance(&mut self, dt_seconds: f64) -> u32 {
        self.accumulator += dt_seconds.max(0.0);

        let mut steps = 0;
        while self.accumulator >= self.step && steps < MAX_STEPS_PER_FRAME {
            self.accumulator -= self.step;
            steps += 1;
        }
        if steps == MAX_STEPS_PER_FRAME {
            // Stalled (window drag, breakpoint): don't try to catch up
            self.accumulator = self.accumulator.min(self.step);
        }
        steps
    }

    /// Forget accumulated time (e.g. while a blocking message is shown)
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
