//! Treasure Dash
//!
//! Hold the mouse button (or touch the screen) to walk toward the treasure.
//! Dragons patrol up and down in between; touching one ends the round.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod game;
mod input;
mod ui;

use macroquad::prelude::*;
use app::App;
use game::config::DEFAULT_VIEWPORT;
use game::{GameConfig, SpriteAssets, CONFIG_PATH};

fn window_conf() -> Conf {
    Conf {
        window_title: format!("Treasure Dash v{}", VERSION),
        window_width: DEFAULT_VIEWPORT.0 as i32,
        window_height: DEFAULT_VIEWPORT.1 as i32,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

/// Read the tuning file; anything wrong with it falls back to defaults
#[cfg(not(target_arch = "wasm32"))]
async fn load_config() -> GameConfig {
    use game::config::ConfigError;

    match GameConfig::load_from_path(CONFIG_PATH) {
        Ok(config) => {
            log::info!("Loaded config from {}", CONFIG_PATH);
            config
        }
        Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            log::info!("No config at {}, using defaults", CONFIG_PATH);
            GameConfig::default()
        }
        Err(e) => {
            log::warn!("Ignoring {}: {}", CONFIG_PATH, e);
            GameConfig::default()
        }
    }
}

/// WASM can't touch the filesystem; fetch the file through macroquad instead
#[cfg(target_arch = "wasm32")]
async fn load_config() -> GameConfig {
    match load_string(CONFIG_PATH).await {
        Ok(text) => match GameConfig::from_ron_str(&text) {
            Ok(config) => {
                log::info!("Loaded config from {}", CONFIG_PATH);
                config
            }
            Err(e) => {
                log::warn!("Ignoring {}: {}", CONFIG_PATH, e);
                GameConfig::default()
            }
        },
        Err(e) => {
            log::info!("No config at {} ({}), using defaults", CONFIG_PATH, e);
            GameConfig::default()
        }
    }
}

/// `--write-config`: dump the default tuning file and exit
#[cfg(not(target_arch = "wasm32"))]
fn write_default_config() -> Result<(), game::config::ConfigError> {
    let text = GameConfig::default().to_ron_string()?;
    std::fs::write(CONFIG_PATH, text)?;
    Ok(())
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    #[cfg(not(target_arch = "wasm32"))]
    {
        if std::env::args().any(|arg| arg == "--write-config") {
            match write_default_config() {
                Ok(()) => log::info!("Wrote default config to {}", CONFIG_PATH),
                Err(e) => log::error!("Failed to write {}: {}", CONFIG_PATH, e),
            }
            return;
        }
    }

    let config = load_config().await;
    let assets = SpriteAssets::load(&config).await;

    let seed = (macroquad::miniquad::date::now() * 1000.0) as u64;
    macroquad::rand::srand(seed);

    let mut app = App::new(config, assets, seed);

    log::info!("=== Treasure Dash v{} ===", VERSION);

    loop {
        app.input.poll();
        app.frame(get_frame_time() as f64);
        app.draw();
        next_frame().await;
    }
}
