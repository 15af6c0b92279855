//! Scene entities
//!
//! A sprite is a positioned, scaled image. Position refers to the sprite's
//! origin, which is a normalized point inside the frame (0.5, 0.5 = center).
//! Bounds are derived from frame size and scale, so they follow any movement.

use macroquad::math::Vec2;
use crate::ui::Rect;
use super::assets::AssetKey;

/// A positioned, scalable image in the scene
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    /// Which image this sprite shows
    pub key: AssetKey,
    pub position: Vec2,
    /// Per-axis scale (1.0 = native frame size)
    pub scale: Vec2,
    /// Normalized anchor point inside the frame
    pub origin: Vec2,
    /// Mirror horizontally when drawn
    pub flip_x: bool,
    /// Unscaled frame size in pixels
    pub frame_size: Vec2,
}

impl Sprite {
    /// New sprite at (x, y), centered origin, unit scale
    pub fn new(key: AssetKey, x: f32, y: f32, frame_size: Vec2) -> Self {
        Self {
            key,
            position: Vec2::new(x, y),
            scale: Vec2::ONE,
            origin: Vec2::splat(0.5),
            flip_x: false,
            frame_size,
        }
    }

    pub fn with_origin(mut self, x: f32, y: f32) -> Self {
        self.origin = Vec2::new(x, y);
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = Vec2::splat(scale);
        self
    }

    /// Add to the current scale on each axis
    pub fn scale_by(&mut self, dx: f32, dy: f32) {
        self.scale += Vec2::new(dx, dy);
    }

    /// Size on screen after scaling
    pub fn display_size(&self) -> Vec2 {
        self.frame_size * self.scale.abs()
    }

    /// Axis-aligned bounding box in scene coordinates
    pub fn bounds(&self) -> Rect {
        let size = self.display_size();
        Rect::new(
            self.position.x - self.origin.x * size.x,
            self.position.y - self.origin.y * size.y,
            size.x,
            size.y,
        )
    }
}

/// A vertically patrolling enemy
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub sprite: Sprite,
    /// Signed vertical speed (px/frame); the sign is the travel direction
    pub speed: f32,
}

impl Enemy {
    pub fn new(sprite: Sprite, speed: f32) -> Self {
        Self { sprite, speed }
    }

    /// Move one frame, then reverse if the new position reached a patrol bound.
    /// Position is not clamped, so the enemy may end slightly past the bound.
    /// Returns true if the direction was reversed.
    pub fn patrol(&mut self, min_y: f32, max_y: f32) -> bool {
        self.sprite.position.y += self.speed;
        let y = self.sprite.position.y;

        let past_top = self.speed < 0.0 && y <= min_y;
        let past_bottom = self.speed > 0.0 && y >= max_y;
        if past_top || past_bottom {
            self.speed = -self.speed;
            return true;
        }
        false
    }

    pub fn bounds(&self) -> Rect {
        self.sprite.bounds()
    }
}
