//! Application state
//!
//! Owns the scene and its host and runs one rendered frame at a time:
//! input in, fixed-rate scene updates, effect completions back to the
//! scene, and the blocking end-of-round message.

use macroquad::prelude::{screen_height, screen_width};
use crate::game::{draw_scene, EffectEvent, FrameClock, GameConfig, GameScene, SpriteAssets, Stage};
use crate::input::{Action, InputState};
use crate::ui::{MessageBox, Rect};

pub struct App {
    pub scene: GameScene,
    pub stage: Stage,
    pub input: InputState,
    pub assets: SpriteAssets,
    clock: FrameClock,
    /// While set, gameplay is paused until the player confirms
    message: Option<MessageBox>,
}

impl App {
    /// Build the scene and run its first `init` + `create`
    pub fn new(config: GameConfig, assets: SpriteAssets, seed: u64) -> Self {
        let stage = Stage::new(&config, assets.frame_sizes());
        let clock = FrameClock::new(config.step_seconds());
        let mut scene = GameScene::new(config, seed);
        scene.init();
        scene.create(&stage);

        Self {
            scene,
            stage,
            input: InputState::new(),
            assets,
            clock,
            message: None,
        }
    }

    pub fn message(&self) -> Option<&MessageBox> {
        self.message.as_ref()
    }

    /// Advance game logic by one rendered frame. Input must be polled first.
    pub fn frame(&mut self, dt_seconds: f64) {
        if self.message.is_some() {
            if self.input.action_pressed(Action::Confirm) {
                self.message = None;
                // Time spent reading the message is not game time
                self.clock.reset();
            }
            return;
        }

        self.stage.set_pointer_down(self.input.action_down(Action::Advance));
        for _ in 0..self.clock.advance(dt_seconds) {
            self.scene.update(&mut self.stage);
        }

        for event in self.stage.tick_effects((dt_seconds * 1000.0) as f32) {
            match event {
                EffectEvent::ShakeComplete => self.scene.on_shake_complete(&mut self.stage),
                EffectEvent::FadeComplete => self.scene.on_fade_complete(&mut self.stage),
            }
        }

        if let Some(text) = self.stage.take_message() {
            log::info!("{} (round {} ready)", text, self.scene.round());
            self.message = Some(MessageBox::new(text));
        }
    }

    pub fn draw(&self) {
        draw_scene(&self.scene, &self.stage, &self.assets);
        if let Some(message) = self.message() {
            message.draw(Rect::screen(screen_width(), screen_height()));
        }
    }
}
