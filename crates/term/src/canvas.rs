//! Canvas: a [`Surface`] backed by a terminal framebuffer.
//!
//! One board cell maps to `cell_w` terminal columns and one row. Filled cells
//! are drawn as solid blocks, cleared cells as a dim grid dot. Text is laid out
//! one character per column starting at the left column of its cell.

use crate::core::Surface;
use crate::fb::{Cell, CellStyle, FrameBuffer};
use crate::types::{Font, Rgb, BOARD_HEIGHT, BOARD_WIDTH};

/// Play area background
pub const BACKGROUND: Rgb = Rgb::new(30, 30, 40);

const GRID_DOT: Rgb = Rgb::new(90, 90, 100);

#[derive(Debug, Clone)]
pub struct Canvas {
    fb: FrameBuffer,
    width: u16,
    height: u16,
    cell_w: u16,
    fill_style: Rgb,
    font: Font,
}

impl Canvas {
    /// A canvas of `width` x `height` cells.
    pub fn new(width: u16, height: u16, cell_w: u16) -> Self {
        let cell_w = cell_w.max(1);
        let mut canvas = Self {
            fb: FrameBuffer::new(width * cell_w, height),
            width,
            height,
            cell_w,
            fill_style: Rgb::BLACK,
            font: Font::Regular,
        };
        canvas.clear();
        canvas
    }

    /// Board-sized canvas, 2 columns per cell
    pub fn board() -> Self {
        Self::new(BOARD_WIDTH as u16, BOARD_HEIGHT as u16, 2)
    }

    /// The painted pixels, `width * cell_w` columns wide
    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.fb
    }

    /// Color of a filled cell, `None` when the cell shows the background
    pub fn cell_color(&self, x: u16, y: u16) -> Option<Rgb> {
        let cell = self.fb.get(x * self.cell_w, y)?;
        (cell.ch == '█').then_some(cell.style.fg)
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::board()
    }
}

impl Surface for Canvas {
    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }

    fn clear_rect(&mut self, x: u16, y: u16, w: u16, h: u16) {
        let dot = CellStyle::on(BACKGROUND).with_fg(GRID_DOT).dim();
        for cy in y..y.saturating_add(h).min(self.height) {
            for cx in x..x.saturating_add(w).min(self.width) {
                let px = cx * self.cell_w;
                self.fb.put_char(px, cy, '·', dot);
                for dx in 1..self.cell_w {
                    self.fb.set(px + dx, cy, Cell::blank(BACKGROUND));
                }
            }
        }
    }

    fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16) {
        let style = CellStyle::on(self.fill_style).with_fg(self.fill_style);
        let (x1, y1) = (x.saturating_add(w).min(self.width), y.saturating_add(h).min(self.height));
        if x >= x1 || y >= y1 {
            return;
        }
        self.fb.fill_rect(
            x * self.cell_w,
            y,
            (x1 - x) * self.cell_w,
            y1 - y,
            '█',
            style,
        );
    }

    fn set_fill_style(&mut self, color: Rgb) {
        self.fill_style = color;
    }

    fn set_font(&mut self, font: Font) {
        self.font = font;
    }

    fn fill_text(&mut self, text: &str, x: u16, y: u16) {
        let mut px = x * self.cell_w;
        for ch in text.chars() {
            // Text keeps the background it is drawn on.
            let Some(under) = self.fb.get(px, y) else {
                break;
            };
            let mut style = CellStyle::on(under.style.bg).with_fg(self.fill_style);
            if self.font == Font::Bold {
                style = style.bold();
            }
            self.fb.put_char(px, y, ch, style);
            px += 1;
        }
    }
}
