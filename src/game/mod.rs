//! Game Module
//!
//! A single scene and the small host layer that runs it.
//!
//! Key concepts:
//! - GameScene: all gameplay state and rules (init / create / update)
//! - SceneHost: what the scene needs from outside (viewport, input, effects)
//! - Stage: the concrete host, owning camera effects and the end-of-round message
//! - Renderer: draws a scene through macroquad
//!
//! The scene never touches macroquad's window, clock or input directly,
//! so every rule can be exercised from plain unit tests.

pub mod assets;
pub mod clock;
pub mod config;
pub mod effects;
pub mod entity;
pub mod event;
pub mod host;
pub mod renderer;
pub mod scene;
pub mod stage;

// Re-export main types
pub use assets::SpriteAssets;
pub use clock::FrameClock;
pub use config::{GameConfig, CONFIG_PATH};
pub use event::EffectEvent;
pub use renderer::draw_scene;
pub use scene::GameScene;
pub use stage::Stage;
