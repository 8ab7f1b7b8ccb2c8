//! Framebuffer and style types for terminal rendering.

use crate::types::Rgb;

/// Default foreground of text cells
pub const TEXT_FG: Rgb = Rgb::new(220, 220, 220);

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    /// Plain text on `bg`
    pub const fn on(bg: Rgb) -> Self {
        Self {
            fg: TEXT_FG,
            bg,
            bold: false,
            dim: false,
        }
    }

    pub const fn with_fg(self, fg: Rgb) -> Self {
        Self { fg, ..self }
    }

    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    pub const fn dim(self) -> Self {
        Self { dim: true, ..self }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::on(Rgb::BLACK)
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Cell {
    pub const fn blank(bg: Rgb) -> Self {
        Self {
            ch: ' ',
            style: CellStyle::on(bg),
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank(Rgb::BLACK)
    }
}

/// 2D framebuffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer, keeping the allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.clear();
        self.cells.resize(len, Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    /// Out-of-bounds writes are dropped.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    /// Write `s` from (x, y), clipped at the right edge. Returns the column after the text.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) -> u16 {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, ch, style);
            cx += 1;
        }
        cx
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        for dy in 0..h {
            for dx in 0..w {
                self.put_char(x.saturating_add(dx), y.saturating_add(dy), ch, style);
            }
        }
    }

    /// Copy `src` with its top-left corner at (x, y), clipped to this buffer.
    pub fn blit(&mut self, src: &FrameBuffer, x: u16, y: u16) {
        for sy in 0..src.height {
            let ty = y.saturating_add(sy);
            if ty >= self.height {
                break;
            }
            for sx in 0..src.width {
                let tx = x.saturating_add(sx);
                if tx >= self.width {
                    break;
                }
                if let Some(cell) = src.get(sx, sy) {
                    self.set(tx, ty, cell);
                }
            }
        }
    }

    /// Characters of row `y`, for tests and debugging
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|c| c.ch)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_str_clips_at_right_edge() {
        let mut fb = FrameBuffer::new(5, 1);
        let end = fb.put_str(2, 0, "SCORE", CellStyle::default());
        assert_eq!(end, 5);
        assert_eq!(fb.row_text(0), "  SCO");
    }

    #[test]
    fn blit_copies_and_clips() {
        let mut src = FrameBuffer::new(3, 2);
        src.fill_rect(0, 0, 3, 2, '#', CellStyle::default());
        let mut dst = FrameBuffer::new(4, 4);
        dst.blit(&src, 2, 3);

        assert_eq!(dst.row_text(3), "  ##");
        assert_eq!(dst.row_text(2), "    ");
    }

    #[test]
    fn resize_resets_cells() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.put_char(0, 0, 'x', CellStyle::default());
        fb.resize(3, 1);
        assert_eq!(fb.cells().len(), 3);
        assert_eq!(fb.row_text(0), "   ");
    }
}
