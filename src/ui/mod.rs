//! Screen-space helpers: rectangles, colors and the modal message

mod rect;
mod theme;
mod message;

pub use rect::*;
pub use theme::*;
pub use message::*;
