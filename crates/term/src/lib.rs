//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the view renders a
//! [`core::SessionSnapshot`] into a framebuffer, and the renderer flushes
//! only the cells that changed since the previous frame.
//!
//! - [`fb`]: styled character cells, wide (CJK) glyph aware
//! - [`theme`]: tile labels and colours (`numeric`, `milestone`)
//! - [`effects`]: spawn/merge highlights, shift trails, status line
//! - [`game_view`]: board, side panel, milestone strip and overlays
//! - [`render_throttle`]: when to draw a frame
//! - [`renderer`]: crossterm output

pub mod effects;
pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;
pub mod theme;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use effects::{Highlight, HighlightKind, StatusLine, TileEffects};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Hud, Viewport};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use theme::{TileLabel, TileTheme};
