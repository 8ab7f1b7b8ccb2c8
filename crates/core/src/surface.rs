//! Drawing surface the board and overlays paint on.
//!
//! Coordinates are in board cells. Implementations decide how a cell maps to
//! pixels or terminal columns.

use crate::types::{Font, Rgb};

pub trait Surface {
    /// Width in cells
    fn width(&self) -> u16;

    /// Height in cells
    fn height(&self) -> u16;

    /// Reset a rectangle to the background.
    fn clear_rect(&mut self, x: u16, y: u16, w: u16, h: u16);

    /// Fill a rectangle with the current fill style.
    fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16);

    fn set_fill_style(&mut self, color: Rgb);

    fn set_font(&mut self, font: Font);

    /// Draw text in the current fill style and font, starting at cell (x, y).
    fn fill_text(&mut self, text: &str, x: u16, y: u16);

    /// Clear the whole surface.
    fn clear(&mut self) {
        let (w, h) = (self.width(), self.height());
        self.clear_rect(0, 0, w, h);
    }
}
