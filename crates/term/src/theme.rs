//! Tile themes: what each tile value displays and in which colours.

use crate::fb::{digit_count, Rgb};
use crate::types::{Tile, WIN_TILE};

/// Text colour shared by light tiles.
pub const TILE_TEXT: Rgb = Rgb::new(119, 110, 101);
/// Text colour for dark numeric tiles.
pub const TILE_TEXT_LIGHT: Rgb = Rgb::new(249, 246, 242);
/// Background of an empty cell.
pub const EMPTY_CELL: Rgb = Rgb::new(204, 192, 179);
/// Background of tiles the theme has no colour for.
pub const FALLBACK_TILE: Rgb = Rgb::new(126, 170, 196);

/// Glyph and background for each tile value, lowest first.
const MILESTONE_TABLE: [(Tile, char, Rgb); 17] = [
    (2, '小', Rgb::new(238, 228, 218)),
    (4, '鳄', Rgb::new(237, 224, 200)),
    (8, '鱼', Rgb::new(242, 177, 121)),
    (16, '就', Rgb::new(245, 149, 99)),
    (32, '是', Rgb::new(246, 124, 95)),
    (64, '喜', Rgb::new(246, 94, 59)),
    (128, '欢', Rgb::new(237, 207, 114)),
    (256, '麦', Rgb::new(237, 204, 97)),
    (512, '芽', Rgb::new(237, 200, 80)),
    (1024, '糖', Rgb::new(237, 197, 63)),
    (2048, '呀', Rgb::new(237, 194, 46)),
    (4096, '而', Rgb::new(200, 180, 100)),
    (8192, '且', Rgb::new(180, 160, 80)),
    (16384, '会', Rgb::new(180, 160, 80)),
    (32768, '爱', Rgb::new(180, 160, 80)),
    (65536, '很', Rgb::new(180, 160, 80)),
    (131072, '久', Rgb::new(180, 160, 80)),
];

const NUMERIC_TABLE: [(Tile, Rgb); 11] = [
    (2, Rgb::new(238, 228, 218)),
    (4, Rgb::new(237, 224, 200)),
    (8, Rgb::new(242, 177, 121)),
    (16, Rgb::new(245, 149, 99)),
    (32, Rgb::new(246, 124, 95)),
    (64, Rgb::new(246, 94, 59)),
    (128, Rgb::new(237, 207, 114)),
    (256, Rgb::new(237, 204, 97)),
    (512, Rgb::new(237, 200, 80)),
    (1024, Rgb::new(237, 197, 63)),
    (2048, Rgb::new(237, 194, 46)),
];

/// What to print inside a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileLabel {
    Number(Tile),
    Glyph(char),
}

impl TileLabel {
    /// Terminal columns the label occupies.
    pub fn width(&self) -> u16 {
        match self {
            TileLabel::Number(v) => digit_count(*v as u64),
            TileLabel::Glyph(c) => crate::fb::char_width(*c),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TileTheme {
    #[default]
    Numeric,
    Milestone,
}

impl TileTheme {
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "numeric" => Some(TileTheme::Numeric),
            "milestone" => Some(TileTheme::Milestone),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TileTheme::Numeric => "numeric",
            TileTheme::Milestone => "milestone",
        }
    }

    /// Label for a non-empty tile. Values without a glyph show their number.
    pub fn label(&self, value: Tile) -> TileLabel {
        match self {
            TileTheme::Numeric => TileLabel::Number(value),
            TileTheme::Milestone => milestone_glyph(value).map_or(TileLabel::Number(value), TileLabel::Glyph),
        }
    }

    /// `(foreground, background)` for a non-empty tile.
    pub fn colors(&self, value: Tile) -> (Rgb, Rgb) {
        match self {
            TileTheme::Numeric => {
                let bg = NUMERIC_TABLE
                    .iter()
                    .find(|(v, _)| *v == value)
                    .map_or(Rgb::new(60, 58, 50), |(_, bg)| *bg);
                let fg = if value <= 4 { TILE_TEXT } else { TILE_TEXT_LIGHT };
                (fg, bg)
            }
            TileTheme::Milestone => {
                let bg = MILESTONE_TABLE
                    .iter()
                    .find(|(v, _, _)| *v == value)
                    .map_or(FALLBACK_TILE, |(_, _, bg)| *bg);
                (TILE_TEXT, bg)
            }
        }
    }

    /// Tiles shown on the milestone strip (2 through the winning tile).
    pub fn milestones(&self) -> impl Iterator<Item = (Tile, TileLabel)> + '_ {
        let mut value: Tile = 2;
        std::iter::from_fn(move || {
            if value > WIN_TILE {
                return None;
            }
            let item = (value, self.label(value));
            value *= 2;
            Some(item)
        })
    }
}

fn milestone_glyph(value: Tile) -> Option<char> {
    MILESTONE_TABLE
        .iter()
        .find(|(v, _, _)| *v == value)
        .map(|(_, c, _)| *c)
}
