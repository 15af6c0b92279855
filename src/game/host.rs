//! What the scene needs from the layer that runs it
//!
//! The scene never draws, times or polls anything itself. It asks its host
//! for the viewport, image sizes and pointer state, and hands camera effects
//! and the end-of-round message back to it. Effect completion comes back
//! through `GameScene::on_shake_complete` / `on_fade_complete`.

use macroquad::math::Vec2;
use super::assets::AssetKey;

pub trait SceneHost {
    /// Logical viewport size
    fn viewport(&self) -> Vec2;

    /// Unscaled frame size of an image
    fn frame_size(&self, key: AssetKey) -> Vec2;

    /// Is the primary pointer (mouse button / touch) held this frame?
    fn pointer_down(&self) -> bool;

    /// Start a camera shake; the host reports completion later
    fn shake(&mut self, duration_ms: f32);

    /// Start a fade to black; the host reports completion later
    fn fade(&mut self, duration_ms: f32);

    /// Show a blocking end-of-round message
    fn present_message(&mut self, message: &str);
}
