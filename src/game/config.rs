//! Game configuration
//!
//! Uses RON (Rusty Object Notation) for a human-editable tuning file.
//! Every field has a default, so a config file only needs to list
//! the values it wants to change.

use std::fs;
use std::path::Path;
use serde::{Serialize, Deserialize};

/// Default location of the tuning file, relative to the working directory
pub const CONFIG_PATH: &str = "assets/config.ron";

/// Logical viewport the window is created with
pub const DEFAULT_VIEWPORT: (f32, f32) = (640.0, 360.0);

/// Validation limits
pub mod limits {
    /// Maximum number of enemies in the row
    pub const MAX_ENEMIES: usize = 64;
    /// Maximum coordinate / size value
    pub const MAX_COORD: f32 = 100_000.0;
    /// Supported update rates
    pub const MIN_FRAME_RATE: u32 = 1;
    pub const MAX_FRAME_RATE: u32 = 240;
}

/// Error type for config loading
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(ron::error::SpannedError),
    Serialize(ron::Error),
    Validation(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::Parse(e)
    }
}

impl From<ron::Error> for ConfigError {
    fn from(e: ron::Error) -> Self {
        ConfigError::Serialize(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Serialize(e) => write!(f, "Serialize error: {}", e),
            ConfigError::Validation(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Logical screen size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width: DEFAULT_VIEWPORT.0, height: DEFAULT_VIEWPORT.1 }
    }
}

/// Speeds and patrol bounds, reset by the scene on every `init`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Player speed (px/frame)
    pub player_speed: f32,
    /// Enemy speed range (px/frame), upper bound exclusive
    pub enemy_min_speed: f32,
    pub enemy_max_speed: f32,
    /// Enemy vertical patrol bounds
    pub enemy_min_y: f32,
    pub enemy_max_y: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_speed: 3.2,
            enemy_min_speed: 3.0,
            enemy_max_speed: 4.0,
            enemy_min_y: 80.0,
            enemy_max_y: 280.0,
        }
    }
}

/// Where things are placed by `create`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    pub player_x: f32,
    pub player_scale: f32,
    /// Goal sits this far left of the right edge
    pub goal_inset: f32,
    pub goal_scale: f32,
    pub enemy_count: usize,
    /// First enemy position
    pub enemy_origin: (f32, f32),
    /// Offset between successive enemies
    pub enemy_step: (f32, f32),
    /// Added to the default scale of 1.0 on both axes
    pub enemy_scale_delta: f32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            player_x: 20.0,
            player_scale: 0.5,
            goal_inset: 80.0,
            goal_scale: 0.6,
            enemy_count: 4,
            enemy_origin: (110.0, 100.0),
            enemy_step: (120.0, 40.0),
            enemy_scale_delta: -0.4,
        }
    }
}

/// Camera effect timings for the end-of-round sequence
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectTimings {
    pub shake_ms: f32,
    /// Shake amplitude as a fraction of the viewport size
    pub shake_intensity: f32,
    pub fade_ms: f32,
}

impl Default for EffectTimings {
    fn default() -> Self {
        Self { shake_ms: 150.0, shake_intensity: 0.05, fade_ms: 300.0 }
    }
}

/// Frame sizes used when a texture is missing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpriteSizes {
    pub player: (f32, f32),
    pub enemy: (f32, f32),
    pub goal: (f32, f32),
}

impl Default for SpriteSizes {
    fn default() -> Self {
        Self {
            player: (64.0, 96.0),
            enemy: (128.0, 96.0),
            goal: (64.0, 64.0),
        }
    }
}

/// Asset locations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    pub dir: String,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self { dir: "assets".to_string() }
    }
}

/// Complete game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub viewport: Viewport,
    pub tuning: Tuning,
    pub layout: Layout,
    pub effects: EffectTimings,
    pub sprites: SpriteSizes,
    pub assets: AssetPaths,
    /// Scene updates per second
    pub frame_rate: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            tuning: Tuning::default(),
            layout: Layout::default(),
            effects: EffectTimings::default(),
            sprites: SpriteSizes::default(),
            assets: AssetPaths::default(),
            frame_rate: 60,
        }
    }
}

fn is_valid_float(f: f32) -> bool {
    f.is_finite() && f.abs() <= limits::MAX_COORD
}

fn check(ok: bool, msg: impl FnOnce() -> String) -> Result<(), ConfigError> {
    if ok { Ok(()) } else { Err(ConfigError::Validation(msg())) }
}

fn check_float(value: f32, name: &str) -> Result<(), ConfigError> {
    check(is_valid_float(value), || format!("{} is not a usable number ({})", name, value))
}

fn check_size(size: (f32, f32), name: &str) -> Result<(), ConfigError> {
    check(
        is_valid_float(size.0) && is_valid_float(size.1) && size.0 > 0.0 && size.1 > 0.0,
        || format!("{} must be positive, got {:?}", name, size),
    )
}

impl GameConfig {
    /// Parse a config from a RON string and validate it
    pub fn from_ron_str(s: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = ron::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file (native only; WASM goes through macroquad's loader)
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_ron_str(&contents)
    }

    /// Serialize to pretty RON (used to write a template config)
    pub fn to_ron_string(&self) -> Result<String, ConfigError> {
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .indentor("  ".to_string());
        Ok(ron::ser::to_string_pretty(self, pretty)?)
    }

    /// Time of one fixed update step, in seconds
    pub fn step_seconds(&self) -> f64 {
        1.0 / self.frame_rate as f64
    }

    /// Reject values the scene cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_size((self.viewport.width, self.viewport.height), "viewport")?;

        let t = &self.tuning;
        for (value, name) in [
            (t.player_speed, "tuning.player_speed"),
            (t.enemy_min_speed, "tuning.enemy_min_speed"),
            (t.enemy_max_speed, "tuning.enemy_max_speed"),
            (t.enemy_min_y, "tuning.enemy_min_y"),
            (t.enemy_max_y, "tuning.enemy_max_y"),
        ] {
            check_float(value, name)?;
        }
        check(t.enemy_min_speed >= 0.0, || {
            format!("enemy speeds must not be negative ({})", t.enemy_min_speed)
        })?;
        check(t.enemy_min_speed <= t.enemy_max_speed, || {
            format!("enemy speed range is inverted ({} > {})", t.enemy_min_speed, t.enemy_max_speed)
        })?;
        check(t.enemy_min_y < t.enemy_max_y, || {
            format!("enemy patrol bounds are inverted ({} >= {})", t.enemy_min_y, t.enemy_max_y)
        })?;

        let l = &self.layout;
        for (value, name) in [
            (l.player_x, "layout.player_x"),
            (l.player_scale, "layout.player_scale"),
            (l.goal_inset, "layout.goal_inset"),
            (l.goal_scale, "layout.goal_scale"),
            (l.enemy_origin.0, "layout.enemy_origin.x"),
            (l.enemy_origin.1, "layout.enemy_origin.y"),
            (l.enemy_step.0, "layout.enemy_step.x"),
            (l.enemy_step.1, "layout.enemy_step.y"),
            (l.enemy_scale_delta, "layout.enemy_scale_delta"),
        ] {
            check_float(value, name)?;
        }
        check(l.enemy_count <= limits::MAX_ENEMIES, || {
            format!("too many enemies ({} > {})", l.enemy_count, limits::MAX_ENEMIES)
        })?;

        let e = &self.effects;
        check(is_valid_float(e.shake_ms) && e.shake_ms > 0.0, || {
            format!("effects.shake_ms must be positive ({})", e.shake_ms)
        })?;
        check(is_valid_float(e.fade_ms) && e.fade_ms > 0.0, || {
            format!("effects.fade_ms must be positive ({})", e.fade_ms)
        })?;
        check_float(e.shake_intensity, "effects.shake_intensity")?;

        check_size(self.sprites.player, "sprites.player")?;
        check_size(self.sprites.enemy, "sprites.enemy")?;
        check_size(self.sprites.goal, "sprites.goal")?;

        check(
            (limits::MIN_FRAME_RATE..=limits::MAX_FRAME_RATE).contains(&self.frame_rate),
            || format!("frame_rate must be within {}..={} ({})",
                limits::MIN_FRAME_RATE, limits::MAX_FRAME_RATE, self.frame_rate),
        )?;

        Ok(())
    }
}
