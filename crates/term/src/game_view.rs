//! GameView: maps a [`SessionSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::SessionSnapshot;
use crate::effects::{HighlightKind, TileEffects};
use crate::fb::{str_width, CellStyle, FrameBuffer, Rgb};
use crate::theme::{TileLabel, TileTheme, EMPTY_CELL};
use crate::types::{Pos, Tile, GRID_SIZE, MAX_HISTORY};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Everything on screen that is not part of the session snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hud<'a> {
    pub effects: Option<&'a TileEffects>,
    pub status: Option<&'a str>,
    /// Yes/no question drawn over the board.
    pub prompt: Option<&'a str>,
    /// Play-clock time the effects are evaluated at.
    pub now_ms: u64,
}

impl Hud<'_> {
    /// FNV-1a over the texts; pair with [`SessionSnapshot::fingerprint`].
    pub fn fingerprint(&self) -> u64 {
        let mut h: u64 = 0xcbf29ce484222325;
        for (tag, text) in [(1u8, self.status), (2u8, self.prompt)] {
            let Some(text) = text else { continue };
            for b in std::iter::once(tag).chain(text.bytes()) {
                h ^= b as u64;
                h = h.wrapping_mul(0x00000100000001B3);
            }
        }
        h
    }
}

const HELP: &str = "←↑→↓/WASD move  Z undo  Space shuffle  N new  Q quit";
/// Rows drawn under the board frame: milestone strip, status, help.
const ROWS_BELOW: u16 = 3;

const BOARD_BG: Rgb = Rgb::new(187, 173, 160);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);
const WHITE: Rgb = Rgb::new(255, 255, 255);

/// A terminal renderer for the 2048 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    theme: TileTheme,
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
    gap_x: u16,
    gap_y: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self::new(TileTheme::default())
    }
}

impl GameView {
    pub fn new(theme: TileTheme) -> Self {
        Self {
            theme,
            cell_w: 8,
            cell_h: 3,
            gap_x: 1,
            gap_y: 1,
            anchor_y: AnchorY::Center,
        }
    }

    /// One-row tiles for small terminals.
    pub fn compact(self) -> Self {
        Self {
            cell_w: 6,
            cell_h: 1,
            gap_x: 1,
            gap_y: 0,
            ..self
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn theme(&self) -> TileTheme {
        self.theme
    }

    /// Width and height of the bordered board.
    pub fn frame_size(&self) -> (u16, u16) {
        let n = GRID_SIZE as u16;
        let board_w = n * self.cell_w + (n + 1) * self.gap_x;
        let board_h = n * self.cell_h + (n + 1) * self.gap_y;
        (board_w + 2, board_h + 2)
    }

    fn fitted(&self, viewport: Viewport) -> Self {
        let (w, h) = self.frame_size();
        if w <= viewport.width && h + ROWS_BELOW <= viewport.height {
            *self
        } else {
            self.compact()
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &SessionSnapshot, hud: &Hud<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        self.fitted(viewport).draw(snap, hud, viewport, fb);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &SessionSnapshot, hud: &Hud<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, viewport, &mut fb);
        fb
    }

    fn draw(&self, snap: &SessionSnapshot, hud: &Hud<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h + ROWS_BELOW) / 2,
            AnchorY::Top => 0,
        };

        let board = CellStyle::new(BOARD_BG, BOARD_BG);
        fb.fill_rect(start_x + 1, start_y + 1, frame_w - 2, frame_h - 2, ' ', board);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, CellStyle::new(Rgb::new(150, 140, 130), SCREEN_BG));

        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let pos = Pos::new(row as u8, col as u8);
                self.draw_tile(fb, start_x, start_y, pos, snap.board[row][col], hud);
            }
        }
        if let Some(effects) = hud.effects {
            for trail in effects.trails(hud.now_ms) {
                let (r, c) = (trail.from.row as usize, trail.from.col as usize);
                if r < GRID_SIZE && c < GRID_SIZE && snap.board[r][c] == 0 {
                    let (_, tile_bg) = self.theme.colors(trail.value);
                    let (x, y) = self.tile_origin(start_x, start_y, trail.from);
                    let style = CellStyle::new(tile_bg, EMPTY_CELL).dim();
                    fb.put_char(x + self.cell_w / 2, y + self.cell_h / 2, '·', style);
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        let below = start_y.saturating_add(frame_h);
        self.draw_milestones(fb, snap, start_x, below, frame_w);
        if let Some(status) = hud.status {
            let style = CellStyle::new(Rgb::new(255, 182, 193), SCREEN_BG).bold();
            centered(fb, start_x, frame_w, below + 1, status, style);
        }
        let help_x = viewport.width.saturating_sub(str_width(HELP)) / 2;
        fb.put_str(help_x, below + 2, HELP, CellStyle::default().dim());

        if let Some(prompt) = hud.prompt {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, &[prompt, "y / n"]);
        } else if snap.game_over {
            self.draw_overlay_text(
                fb,
                start_x,
                start_y,
                frame_w,
                frame_h,
                &["GAME OVER", "N new game  Z undo"],
            );
        }
    }

    fn tile_origin(&self, start_x: u16, start_y: u16, pos: Pos) -> (u16, u16) {
        let x = start_x + 1 + self.gap_x + pos.col as u16 * (self.cell_w + self.gap_x);
        let y = start_y + 1 + self.gap_y + pos.row as u16 * (self.cell_h + self.gap_y);
        (x, y)
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, pos: Pos, value: Tile, hud: &Hud<'_>) {
        let (x, y) = self.tile_origin(start_x, start_y, pos);
        if value == 0 {
            fb.fill_rect(x, y, self.cell_w, self.cell_h, ' ', CellStyle::new(EMPTY_CELL, EMPTY_CELL));
            return;
        }

        let (fg, mut bg) = self.theme.colors(value);
        let mut style = CellStyle::new(fg, bg).bold();
        if let Some(h) = hud.effects.and_then(|fx| fx.highlight_at(pos, hud.now_ms)) {
            match h.kind {
                HighlightKind::Spawn => bg = EMPTY_CELL.mix(bg, 0.35 + 0.65 * h.progress),
                HighlightKind::Merge => bg = bg.mix(WHITE, 0.45 * (1.0 - h.progress)),
            }
            style.bg = bg;
        }
        fb.fill_rect(x, y, self.cell_w, self.cell_h, ' ', style);

        let label = self.theme.label(value);
        let lx = x + self.cell_w.saturating_sub(label.width()) / 2;
        let ly = y + self.cell_h / 2;
        match label {
            TileLabel::Number(v) => {
                fb.put_u64(lx, ly, v as u64, style);
            }
            TileLabel::Glyph(c) => {
                fb.put_char(lx, ly, c, style);
            }
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '╭', style);
        fb.put_char(x + w - 1, y, '╮', style);
        fb.put_char(x, y + h - 1, '╰', style);
        fb.put_char(x + w - 1, y + h - 1, '╯', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &SessionSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
        let dim = value.dim();

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        fb.put_u64(panel_x, y + 1, snap.score, value);
        y += 3;

        fb.put_str(panel_x, y, "MOVES", label);
        fb.put_u64(panel_x, y + 1, snap.moves, value);
        y += 3;

        fb.put_str(panel_x, y, "TIME", label);
        put_clock(fb, panel_x, y + 1, snap.playtime_secs, value);
        y += 3;

        fb.put_str(panel_x, y, "BEST", label);
        match self.theme.label(snap.max_tile) {
            _ if snap.max_tile == 0 => {
                fb.put_char(panel_x, y + 1, '-', value);
            }
            TileLabel::Glyph(c) => {
                let w = fb.put_char(panel_x, y + 1, c, value);
                fb.put_u64(panel_x + w + 1, y + 1, snap.max_tile as u64, dim);
            }
            TileLabel::Number(v) => {
                fb.put_u64(panel_x, y + 1, v as u64, value);
            }
        }
        y += 3;

        fb.put_str(panel_x, y, "UNDO", label);
        let used = fb.put_u64(panel_x, y + 1, snap.history_len.saturating_sub(1) as u64, value);
        fb.put_char(panel_x + used, y + 1, '/', dim);
        fb.put_u64(panel_x + used + 1, y + 1, (MAX_HISTORY - 1) as u64, dim);
    }

    fn draw_milestones(&self, fb: &mut FrameBuffer, snap: &SessionSnapshot, start_x: u16, y: u16, frame_w: u16) {
        let reached = |v: Tile| snap.board.iter().flatten().any(|&t| t == v);
        let count = self.theme.milestones().count() as u16;
        let width: u16 = self.theme.milestones().map(|(_, l)| l.width()).sum::<u16>() + count.saturating_sub(1);

        let unlocked = CellStyle::new(WHITE, SCREEN_BG).bold();
        let locked = CellStyle::new(Rgb::new(110, 110, 110), SCREEN_BG).dim();
        let mut x = start_x + frame_w.saturating_sub(width) / 2;
        for (v, label) in self.theme.milestones() {
            let style = if reached(v) { unlocked } else { locked };
            x += match label {
                TileLabel::Number(n) => fb.put_u64(x, y, n as u64, style),
                TileLabel::Glyph(c) => fb.put_char(x, y, c, style),
            };
            x += 1;
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        lines: &[&str],
    ) {
        let box_w = lines.iter().map(|l| str_width(l)).max().unwrap_or(0) + 4;
        let box_h = lines.len() as u16 + 2;
        let x = start_x + frame_w.saturating_sub(box_w) / 2;
        let y = start_y + frame_h.saturating_sub(box_h) / 2;

        let panel = CellStyle::new(WHITE, Rgb::new(50, 50, 50));
        fb.fill_rect(x, y, box_w, box_h, ' ', panel);
        for (i, line) in lines.iter().enumerate() {
            let style = if i == 0 { panel.bold() } else { panel };
            centered(fb, x, box_w, y + 1 + i as u16, line, style);
        }
    }
}

fn centered(fb: &mut FrameBuffer, x: u16, w: u16, y: u16, text: &str, style: CellStyle) {
    let tx = x + w.saturating_sub(str_width(text)) / 2;
    fb.put_str(tx, y, text, style);
}

/// `M:SS`, or `H:MM:SS` past an hour.
fn put_clock(fb: &mut FrameBuffer, x: u16, y: u16, secs: u64, style: CellStyle) {
    let (h, m, s) = (secs / 3600, (secs / 60) % 60, secs % 60);
    let mut cx = x;
    if h > 0 {
        cx += fb.put_u64(cx, y, h, style);
        cx += fb.put_char(cx, y, ':', style);
        cx += put_two_digits(fb, cx, y, m, style);
    } else {
        cx += fb.put_u64(cx, y, m, style);
    }
    cx += fb.put_char(cx, y, ':', style);
    put_two_digits(fb, cx, y, s, style);
}

fn put_two_digits(fb: &mut FrameBuffer, x: u16, y: u16, v: u64, style: CellStyle) -> u16 {
    if v < 10 {
        fb.put_char(x, y, '0', style);
        fb.put_u64(x + 1, y, v, style) + 1
    } else {
        fb.put_u64(x, y, v, style)
    }
}
