//! Bitmap-glyph text: glyph tables, single-line runs and paragraph wrapping

pub mod font;
pub mod layout;

pub use font::{CHARSET, FALLBACK_CHAR, FontError, GlyphTable, TILE_COUNT};
pub use layout::{draw_string, glyph_run, wrap_lines};
