//! Scene drawing
//!
//! The scene lives in a fixed logical viewport. The viewport is scaled to
//! fit the window (letterboxed), shifted by the camera shake, and covered
//! by the fade overlay.

use macroquad::prelude::*;
use crate::ui::{self, Rect as UiRect};
use super::assets::SpriteAssets;
use super::entity::Sprite;
use super::scene::GameScene;
use super::stage::Stage;
use super::host::SceneHost;

/// Maps logical viewport coordinates to window pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    /// Window-space rect the viewport is drawn into
    pub target: UiRect,
    /// Window pixels per logical pixel
    pub scale: f32,
    /// Camera offset in logical pixels
    pub camera_offset: Vec2,
}

impl ViewTransform {
    pub fn fit(screen: Vec2, viewport: Vec2, camera_offset: Vec2) -> Self {
        let target = UiRect::screen(screen.x, screen.y).fit_aspect(viewport.x / viewport.y);
        let scale = if viewport.x > 0.0 { target.w / viewport.x } else { 1.0 };
        Self { target, scale, camera_offset }
    }

    /// Logical rect to window rect
    pub fn to_screen(&self, r: UiRect) -> UiRect {
        UiRect::new(
            self.target.x + (r.x + self.camera_offset.x) * self.scale,
            self.target.y + (r.y + self.camera_offset.y) * self.scale,
            r.w * self.scale,
            r.h * self.scale,
        )
    }
}

fn draw_sprite(sprite: &Sprite, assets: &SpriteAssets, view: &ViewTransform) {
    let r = view.to_screen(sprite.bounds());
    match assets.texture(sprite.key) {
        Some(tex) => draw_texture_ex(
            tex,
            r.x,
            r.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(r.w, r.h)),
                flip_x: sprite.flip_x,
                ..Default::default()
            },
        ),
        None => draw_rectangle(r.x, r.y, r.w, r.h, sprite.key.fallback_color()),
    }
}

/// Draw one frame: sprites, camera effects, letterbox bars
pub fn draw_scene(scene: &GameScene, stage: &Stage, assets: &SpriteAssets) {
    clear_background(ui::LETTERBOX_COLOR);

    let viewport = stage.viewport();
    let jitter = if stage.effects.is_shaking() {
        vec2(macroquad::rand::gen_range(-1.0, 1.0), macroquad::rand::gen_range(-1.0, 1.0))
    } else {
        Vec2::ZERO
    };
    let offset = stage.effects.shake_offset(viewport, jitter);
    let view = ViewTransform::fit(vec2(screen_width(), screen_height()), viewport, offset);

    if let Some(entities) = scene.entities() {
        draw_sprite(&entities.background, assets, &view);
        draw_sprite(&entities.goal, assets, &view);
        for enemy in &entities.enemies {
            draw_sprite(&enemy.sprite, assets, &view);
        }
        draw_sprite(&entities.player, assets, &view);
    }

    let t = view.target;
    let alpha = stage.effects.fade_alpha();
    if alpha > 0.0 {
        draw_rectangle(t.x, t.y, t.w, t.h, Color::new(0.0, 0.0, 0.0, alpha));
    }

    // Shaken sprites may spill past the viewport; cover the bars again
    let (sw, sh) = (screen_width(), screen_height());
    draw_rectangle(0.0, 0.0, t.x, sh, ui::LETTERBOX_COLOR);
    draw_rectangle(t.right(), 0.0, sw - t.right(), sh, ui::LETTERBOX_COLOR);
    draw_rectangle(0.0, 0.0, sw, t.y, ui::LETTERBOX_COLOR);
    draw_rectangle(0.0, t.bottom(), sw, sh - t.bottom(), ui::LETTERBOX_COLOR);
}
