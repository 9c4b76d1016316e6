//! Framebuffer and style types for terminal rendering.

/// Placeholder stored in the column covered by the right half of a wide glyph.
pub const WIDE_CONTINUATION: char = '\0';

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear blend towards `other`; `t` is clamped to `0..=1`.
    pub fn mix(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb::new(lerp(self.r, other.r), lerp(self.g, other.g), lerp(self.b, other.b))
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    pub const fn dim(self) -> Self {
        Self { dim: true, ..self }
    }

    pub fn into_cell(self, ch: char) -> Cell {
        Cell { ch, style: self }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0))
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Cell {
    /// True for the placeholder half of a wide glyph.
    pub fn is_continuation(&self) -> bool {
        self.ch == WIDE_CONTINUATION
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// Terminal columns occupied by `ch` (CJK and fullwidth forms take two).
pub fn char_width(ch: char) -> u16 {
    let c = ch as u32;
    let wide = matches!(
        c,
        0x1100..=0x115F
            | 0x2E80..=0x303E
            | 0x3041..=0x33FF
            | 0x3400..=0x4DBF
            | 0x4E00..=0x9FFF
            | 0xA000..=0xA4CF
            | 0xAC00..=0xD7A3
            | 0xF900..=0xFAFF
            | 0xFE30..=0xFE4F
            | 0xFF00..=0xFF60
            | 0xFFE0..=0xFFE6
            | 0x20000..=0x3FFFD
    );
    if wide {
        2
    } else {
        1
    }
}

/// Terminal columns occupied by `s`.
pub fn str_width(s: &str) -> u16 {
    s.chars().map(char_width).fold(0u16, u16::saturating_add)
}

/// Number of decimal digits in `v`.
pub fn digit_count(mut v: u64) -> u16 {
    let mut n = 1;
    while v >= 10 {
        v /= 10;
        n += 1;
    }
    n
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

    /// Resize the framebuffer.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
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

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Put one glyph; returns the columns it used (0 when clipped).
    ///
    /// A wide glyph that does not fit before the right edge is replaced by a
    /// blank.
    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) -> u16 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        if char_width(ch) == 2 {
            if x + 1 >= self.width {
                self.set(x, y, style.into_cell(' '));
                return 1;
            }
            self.set(x, y, style.into_cell(ch));
            self.set(x + 1, y, style.into_cell(WIDE_CONTINUATION));
            return 2;
        }
        self.set(x, y, style.into_cell(ch));
        1
    }

    /// Put a string; returns the columns it used.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) -> u16 {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            cx += self.put_char(cx, y, ch, style);
        }
        cx - x
    }

    /// Put a decimal number without allocating; returns the columns used.
    pub fn put_u64(&mut self, x: u16, y: u16, v: u64, style: CellStyle) -> u16 {
        let n = digit_count(v);
        let mut rest = v;
        for i in (0..n).rev() {
            let digit = (rest % 10) as u8;
            rest /= 10;
            self.put_char(x.saturating_add(i), y, (b'0' + digit) as char, style);
        }
        n
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        for dy in 0..h {
            for dx in 0..w {
                self.put_char(x.saturating_add(dx), y.saturating_add(dy), ch, style);
            }
        }
    }

    /// Restyle a rectangle, keeping its glyphs.
    pub fn restyle_rect(&mut self, x: u16, y: u16, w: u16, h: u16, f: impl Fn(CellStyle) -> CellStyle) {
        for dy in 0..h {
            for dx in 0..w {
                if let Some(i) = self.idx(x.saturating_add(dx), y.saturating_add(dy)) {
                    self.cells[i].style = f(self.cells[i].style);
                }
            }
        }
    }

    /// The row as plain text, continuation cells skipped.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .filter(|c| !c.is_continuation())
            .map(|c| c.ch)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_glyph_takes_two_columns() {
        let mut fb = FrameBuffer::new(6, 1);
        let used = fb.put_str(0, 0, "小a鳄", CellStyle::default());
        assert_eq!(used, 5);
        assert_eq!(fb.get(0, 0).unwrap().ch, '小');
        assert!(fb.get(1, 0).unwrap().is_continuation());
        assert_eq!(fb.get(2, 0).unwrap().ch, 'a');
        assert_eq!(fb.row_text(0), "小a鳄 ");
    }

    #[test]
    fn wide_glyph_at_edge_is_blanked() {
        let mut fb = FrameBuffer::new(3, 1);
        fb.put_str(0, 0, "ab小", CellStyle::default());
        assert_eq!(fb.row_text(0), "ab ");
    }

    #[test]
    fn put_u64_writes_digits() {
        let mut fb = FrameBuffer::new(8, 1);
        assert_eq!(fb.put_u64(1, 0, 2048, CellStyle::default()), 4);
        assert_eq!(fb.put_u64(6, 0, 0, CellStyle::default()), 1);
        assert_eq!(fb.row_text(0), " 2048 0 ");
    }

    #[test]
    fn widths() {
        assert_eq!(str_width("2048"), 4);
        assert_eq!(str_width("麦芽糖"), 6);
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(131072), 6);
    }
}
