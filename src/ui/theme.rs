//! UI Theme - Shared colors and styling constants

use macroquad::prelude::Color;

/// Letterbox bars around the game viewport
pub const LETTERBOX_COLOR: Color = Color::new(0.0, 0.0, 0.0, 1.0);

/// Dims the game behind a modal message
pub const SCRIM_COLOR: Color = Color::new(0.0, 0.0, 0.0, 0.55);

/// Message panel background and border
pub const PANEL_COLOR: Color = Color::new(0.11, 0.11, 0.13, 0.95);
pub const PANEL_BORDER: Color = Color::new(0.35, 0.35, 0.4, 1.0);

/// Primary text color
pub const TEXT_COLOR: Color = Color::new(0.92, 0.92, 0.95, 1.0);

/// Dimmed/secondary text
pub const TEXT_DIM: Color = Color::new(0.55, 0.55, 0.6, 1.0);

/// Message title text size
pub const FONT_SIZE_TITLE: f32 = 32.0;

/// Hint text size
pub const FONT_SIZE_HINT: f32 = 16.0;
