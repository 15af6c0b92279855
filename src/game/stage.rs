//! The stage: the scene's host
//!
//! Holds everything the scene asks for or hands off: viewport, image sizes,
//! this frame's pointer state, the camera effects and the pending
//! end-of-round message. No macroquad calls happen here; the app feeds
//! input in and the renderer reads effects out.

use macroquad::math::Vec2;
use super::assets::AssetKey;
use super::config::GameConfig;
use super::effects::CameraEffects;
use super::event::EffectEvent;
use super::host::SceneHost;

pub struct Stage {
    viewport: Vec2,
    /// Frame sizes in `AssetKey::ALL` order
    frame_sizes: [Vec2; 4],
    shake_intensity: f32,
    pointer_down: bool,
    pub effects: CameraEffects,
    message: Option<String>,
}

impl Stage {
    pub fn new(config: &GameConfig, frame_sizes: [Vec2; 4]) -> Self {
        Self {
            viewport: Vec2::new(config.viewport.width, config.viewport.height),
            frame_sizes,
            shake_intensity: config.effects.shake_intensity,
            pointer_down: false,
            effects: CameraEffects::new(),
            message: None,
        }
    }

    /// Pointer state for the coming update steps
    pub fn set_pointer_down(&mut self, down: bool) {
        self.pointer_down = down;
    }

    /// Advance effects by real elapsed time; returns completions in order
    pub fn tick_effects(&mut self, dt_ms: f32) -> Vec<EffectEvent> {
        self.effects.tick(dt_ms);
        self.effects.drain_events()
    }

    /// Take the end-of-round message, if the scene presented one
    pub fn take_message(&mut self) -> Option<String> {
        self.message.take()
    }
}

impl SceneHost for Stage {
    fn viewport(&self) -> Vec2 {
        self.viewport
    }

    fn frame_size(&self, key: AssetKey) -> Vec2 {
        self.frame_sizes[key as usize]
    }

    fn pointer_down(&self) -> bool {
        self.pointer_down
    }

    fn shake(&mut self, duration_ms: f32) {
        self.effects.shake(duration_ms, self.shake_intensity);
    }

    fn fade(&mut self, duration_ms: f32) {
        self.effects.fade(duration_ms);
    }

    fn present_message(&mut self, message: &str) {
        // The restart that precedes a message also gets a clean camera
        self.effects.reset();
        self.message = Some(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::assets::SpriteAssets;
    use crate::game::scene::{GameScene, Phase};

    fn stage() -> Stage {
        let config = GameConfig::default();
        let sizes = SpriteAssets::fallback(&config).frame_sizes();
        Stage::new(&config, sizes)
    }

    #[test]
    fn test_frame_sizes_by_key() {
        let stage = stage();
        assert_eq!(stage.frame_size(AssetKey::Goal), Vec2::new(64.0, 64.0));
        assert_eq!(stage.frame_size(AssetKey::Background), Vec2::new(640.0, 360.0));
    }

    /// Drive a round end to end through real effect timers
    #[test]
    fn test_round_end_through_effects() {
        let mut stage = stage();
        let mut scene = GameScene::new(GameConfig::default(), 42);
        scene.init();
        scene.create(&stage);

        // Walk right until the round ends, by dragon or by treasure
        stage.set_pointer_down(true);
        let mut outcome = None;
        for _ in 0..2000 {
            outcome = scene.update(&mut stage);
            if outcome.is_some() {
                break;
            }
        }
        assert!(outcome.is_some());
        assert!(stage.effects.is_shaking());

        let mut events = Vec::new();
        for _ in 0..60 {
            for event in stage.tick_effects(1000.0 / 60.0) {
                events.push(event);
                match event {
                    EffectEvent::ShakeComplete => scene.on_shake_complete(&mut stage),
                    EffectEvent::FadeComplete => scene.on_fade_complete(&mut stage),
                }
            }
        }

        assert_eq!(events, vec![EffectEvent::ShakeComplete, EffectEvent::FadeComplete]);
        assert_eq!(scene.state().phase, Phase::Playing);
        assert_eq!(stage.effects.fade_alpha(), 0.0);

        let expected = outcome.map(|o| o.message().to_string());
        assert_eq!(stage.take_message(), expected);
        assert!(stage.take_message().is_none());
    }
}
