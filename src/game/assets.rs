//! Sprite images
//!
//! Four images, looked up by logical key. Loading never fails the game:
//! a missing image is drawn as a flat colored rectangle of the configured
//! frame size instead.

use macroquad::prelude::*;
use super::config::GameConfig;

/// Logical name of each image the scene uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKey {
    Background,
    Player,
    Enemy,
    Goal,
}

impl AssetKey {
    pub const ALL: [AssetKey; 4] = [
        AssetKey::Background,
        AssetKey::Player,
        AssetKey::Enemy,
        AssetKey::Goal,
    ];

    /// File name inside the asset directory
    pub fn file_name(&self) -> &'static str {
        match self {
            AssetKey::Background => "background.png",
            AssetKey::Player => "player.png",
            AssetKey::Enemy => "dragon.png",
            AssetKey::Goal => "treasure.png",
        }
    }

    /// Color used when the image could not be loaded
    pub fn fallback_color(&self) -> Color {
        match self {
            AssetKey::Background => Color::new(0.36, 0.62, 0.36, 1.0),
            AssetKey::Player => Color::new(0.25, 0.45, 0.85, 1.0),
            AssetKey::Enemy => Color::new(0.80, 0.22, 0.18, 1.0),
            AssetKey::Goal => Color::new(0.95, 0.78, 0.20, 1.0),
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

/// Frame size used when no texture is available for `key`
pub fn fallback_frame_size(config: &GameConfig, key: AssetKey) -> Vec2 {
    let (w, h) = match key {
        AssetKey::Background => (config.viewport.width, config.viewport.height),
        AssetKey::Player => config.sprites.player,
        AssetKey::Enemy => config.sprites.enemy,
        AssetKey::Goal => config.sprites.goal,
    };
    vec2(w, h)
}

/// Loaded sprite images and their frame sizes
pub struct SpriteAssets {
    textures: [Option<Texture2D>; 4],
    sizes: [Vec2; 4],
}

impl SpriteAssets {
    /// No textures; every sprite uses its fallback size and color
    pub fn fallback(config: &GameConfig) -> Self {
        Self {
            textures: [None, None, None, None],
            sizes: AssetKey::ALL.map(|key| fallback_frame_size(config, key)),
        }
    }

    /// Load all four images from the configured asset directory
    pub async fn load(config: &GameConfig) -> Self {
        let mut assets = Self::fallback(config);

        for key in AssetKey::ALL {
            let path = format!("{}/{}", config.assets.dir.trim_end_matches('/'), key.file_name());
            match load_texture(&path).await {
                Ok(tex) => {
                    tex.set_filter(FilterMode::Linear);
                    assets.sizes[key.index()] = tex.size();
                    assets.textures[key.index()] = Some(tex);
                    log::info!("Loaded {:?} texture from {}", key, path);
                }
                Err(e) => {
                    log::warn!("Failed to load {}: {}, drawing {:?} as a flat rectangle", path, e, key);
                }
            }
        }

        assets
    }

    pub fn texture(&self, key: AssetKey) -> Option<&Texture2D> {
        self.textures[key.index()].as_ref()
    }

    /// Frame sizes for every key, in `AssetKey::ALL` order
    pub fn frame_sizes(&self) -> [Vec2; 4] {
        self.sizes
    }
}
