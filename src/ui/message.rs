//! Modal end-of-round message
//!
//! Blocks gameplay until dismissed, like a browser alert.

use macroquad::prelude::*;
use super::rect::Rect;
use super::theme::*;

const PANEL_WIDTH: f32 = 320.0;
const PANEL_HEIGHT: f32 = 140.0;
const HINT: &str = "Click, tap or press Enter";

#[derive(Debug, Clone, PartialEq)]
pub struct MessageBox {
    text: String,
}

impl MessageBox {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Panel rect centered in `area`, shrunk to fit small screens
    pub fn panel_rect(area: Rect) -> Rect {
        let inner = area.pad(8.0);
        Rect::centered(
            area.center_x(),
            area.center_y(),
            PANEL_WIDTH.min(inner.w),
            PANEL_HEIGHT.min(inner.h),
        )
    }

    pub fn draw(&self, area: Rect) {
        draw_rectangle(area.x, area.y, area.w, area.h, SCRIM_COLOR);

        let panel = Self::panel_rect(area);
        draw_rectangle(panel.x, panel.y, panel.w, panel.h, PANEL_COLOR);
        draw_rectangle_lines(panel.x, panel.y, panel.w, panel.h, 2.0, PANEL_BORDER);

        let text = self.text();
        let title = measure_text(text, None, FONT_SIZE_TITLE as u16, 1.0);
        draw_text(
            text,
            (panel.center_x() - title.width * 0.5).round(),
            (panel.y + panel.h * 0.45).round(),
            FONT_SIZE_TITLE,
            TEXT_COLOR,
        );

        let hint = measure_text(HINT, None, FONT_SIZE_HINT as u16, 1.0);
        draw_text(
            HINT,
            (panel.center_x() - hint.width * 0.5).round(),
            (panel.bottom() - 20.0).round(),
            FONT_SIZE_HINT,
            TEXT_DIM,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_centered() {
        let panel = MessageBox::panel_rect(Rect::screen(640.0, 360.0));
        assert_eq!(panel, Rect::new(160.0, 110.0, 320.0, 140.0));
    }

    #[test]
    fn test_panel_shrinks_on_small_screen() {
        let panel = MessageBox::panel_rect(Rect::screen(200.0, 100.0));
        assert_eq!(panel.w, 184.0);
        assert_eq!(panel.h, 84.0);
        assert_eq!(panel.center_x(), 100.0);
    }
}
