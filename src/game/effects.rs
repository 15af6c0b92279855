//! Camera effects
//!
//! Shake and fade-to-black, each driven by elapsed time. When an effect runs
//! out it queues one completion event. A finished fade leaves the camera
//! black until `reset`, so the frame between fade-out and restart never
//! flashes the old scene.

use macroquad::math::Vec2;
use super::event::{EffectEvent, EventQueue};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Timer {
    duration_ms: f32,
    elapsed_ms: f32,
}

impl Timer {
    fn new(duration_ms: f32) -> Self {
        Self { duration_ms: duration_ms.max(0.0), elapsed_ms: 0.0 }
    }

    /// Advance; returns true on the tick the timer runs out
    fn tick(&mut self, dt_ms: f32) -> bool {
        self.elapsed_ms += dt_ms;
        self.elapsed_ms >= self.duration_ms
    }

    fn progress(&self) -> f32 {
        if self.duration_ms <= 0.0 {
            1.0
        } else {
            (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Shake {
    timer: Timer,
    /// Amplitude as a fraction of the viewport size
    intensity: f32,
}

/// Camera effect state for one scene
#[derive(Debug, Default)]
pub struct CameraEffects {
    shake: Option<Shake>,
    fade: Option<Timer>,
    /// Set once a fade has completed; stays black until reset
    faded_out: bool,
    events: EventQueue<EffectEvent>,
}

impl CameraEffects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) a shake
    pub fn shake(&mut self, duration_ms: f32, intensity: f32) {
        self.shake = Some(Shake { timer: Timer::new(duration_ms), intensity });
    }

    /// Start (or restart) a fade to black
    pub fn fade(&mut self, duration_ms: f32) {
        self.faded_out = false;
        self.fade = Some(Timer::new(duration_ms));
    }

    pub fn is_shaking(&self) -> bool {
        self.shake.is_some()
    }

    /// Advance running effects by `dt_ms`, queueing completion events
    pub fn tick(&mut self, dt_ms: f32) {
        if let Some(shake) = &mut self.shake {
            if shake.timer.tick(dt_ms) {
                self.shake = None;
                self.events.send(EffectEvent::ShakeComplete);
            }
        }
        if let Some(fade) = &mut self.fade {
            if fade.tick(dt_ms) {
                self.fade = None;
                self.faded_out = true;
                self.events.send(EffectEvent::FadeComplete);
            }
        }
    }

    /// Camera offset for this frame. `jitter` is a random pair in [-1, 1].
    pub fn shake_offset(&self, viewport: Vec2, jitter: Vec2) -> Vec2 {
        match &self.shake {
            Some(shake) => jitter.clamp(Vec2::splat(-1.0), Vec2::ONE) * viewport * shake.intensity,
            None => Vec2::ZERO,
        }
    }

    /// Opacity of the black overlay (0 = clear, 1 = black)
    pub fn fade_alpha(&self) -> f32 {
        if self.faded_out {
            return 1.0;
        }
        self.fade.as_ref().map_or(0.0, Timer::progress)
    }

    /// Take all completion events queued since the last call
    pub fn drain_events(&mut self) -> Vec<EffectEvent> {
        self.events.drain().collect()
    }

    /// Back to a clear, still camera (used on scene restart)
    pub fn reset(&mut self) {
        self.shake = None;
        self.fade = None;
        self.faded_out = false;
        self.events.clear();
    }
}
