//! Bitmap glyph table for the closed character set
//!
//! Glyphs are square `fontsize` x `fontsize` tiles. A table is built either by
//! slicing a tile sheet (one row of tiles, in [`CHARSET`] order) or by
//! rasterizing one of the embedded-graphics mono fonts into tiles.

extern crate alloc;

use alloc::vec::Vec;
use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Baseline, Text};
use log::debug;
use thiserror_no_std::Error;

use crate::surface::Surface;

/// Supported characters, in the order their tiles appear in a tile sheet.
///
/// `'_'` is not part of the sheet: it shares the blank tile of `' '`.
pub const CHARSET: &str = "abcdefghijklmnopqrstuvwxyz1234567890+-/[]:.,# '?!";

/// Character drawn for anything outside [`CHARSET`].
pub const FALLBACK_CHAR: char = '?';

/// Number of tiles a sheet must provide.
pub const TILE_COUNT: usize = 49;

/// Errors raised while building a glyph table
#[derive(Debug, Error, PartialEq)]
pub enum FontError {
    /// Glyph edge length of zero
    #[error("Glyph size must be at least one pixel")]
    ZeroSize,

    /// The sheet is too small to hold every glyph
    #[error("Tile sheet holds {available} tiles of size {size}, {required} required")]
    SheetTooSmall {
        /// Tiles that fit in the first row of the sheet
        available: usize,
        /// Tiles needed for the full character set
        required: usize,
        /// Requested tile edge length
        size: u32,
    },
}

/// Mapping from supported characters to square glyph bitmaps plus metrics
#[derive(Debug, Clone)]
pub struct GlyphTable {
    glyphs: Vec<Surface>,
    fontsize: u32,
    fontspacing: u32,
}

impl GlyphTable {
    /// Slice the first row of `sheet` into `size` x `size` tiles.
    ///
    /// The sheet's transparent key carries over to every glyph.
    pub fn from_tile_sheet(sheet: &Surface, size: u32) -> Result<Self, FontError> {
        if size == 0 {
            return Err(FontError::ZeroSize);
        }

        let available = if sheet.height() < size {
            0
        } else {
            (sheet.width() / size) as usize
        };
        if available < TILE_COUNT {
            return Err(FontError::SheetTooSmall {
                available,
                required: TILE_COUNT,
                size,
            });
        }

        let glyphs = (0..TILE_COUNT)
            .map(|i| {
                let origin = Point::new((i as u32 * size) as i32, 0);
                sheet.sub_surface(Rectangle::new(origin, Size::new(size, size)))
            })
            .collect();

        debug!("Loaded {} glyphs of size {}", TILE_COUNT, size);
        Ok(Self::with_glyphs(glyphs, size))
    }

    /// Rasterize an embedded-graphics mono font into `size` x `size` tiles.
    ///
    /// Each character is drawn at the tile's top-left corner in `color`;
    /// characters larger than the tile are cropped.
    pub fn from_mono_font(font: &MonoFont<'_>, size: u32, color: Rgb565) -> Result<Self, FontError> {
        if size == 0 {
            return Err(FontError::ZeroSize);
        }

        let style = MonoTextStyle::new(font, color);
        let mut buf = [0u8; 4];
        let glyphs = CHARSET
            .chars()
            .map(|c| {
                let mut tile = Surface::new(size, size);
                // Surface drawing is infallible
                let _ = Text::with_baseline(c.encode_utf8(&mut buf), Point::zero(), style, Baseline::Top)
                    .draw(&mut tile);
                tile
            })
            .collect();

        Ok(Self::with_glyphs(glyphs, size))
    }

    fn with_glyphs(glyphs: Vec<Surface>, fontsize: u32) -> Self {
        Self {
            glyphs,
            fontsize,
            fontspacing: (fontsize / 10).clamp(1, 10),
        }
    }

    /// Glyph for `c`, case-insensitive, falling back to [`FALLBACK_CHAR`].
    pub fn glyph(&self, c: char) -> &Surface {
        let index = Self::index_of(c)
            .or_else(|| Self::index_of(FALLBACK_CHAR))
            .unwrap_or(0);
        &self.glyphs[index]
    }

    /// Whether `c` has a glyph of its own (instead of the fallback).
    pub fn supports(c: char) -> bool {
        Self::index_of(c).is_some()
    }

    fn index_of(c: char) -> Option<usize> {
        let c = match c.to_ascii_lowercase() {
            '_' => ' ',
            other => other,
        };
        CHARSET.chars().position(|candidate| candidate == c)
    }

    /// Glyph edge length in pixels.
    pub fn fontsize(&self) -> u32 {
        self.fontsize
    }

    /// Gap between neighbouring glyphs, `clamp(fontsize / 10, 1, 10)`.
    pub fn fontspacing(&self) -> u32 {
        self.fontspacing
    }

    /// Horizontal distance between the origins of neighbouring glyphs.
    pub fn advance(&self) -> u32 {
        self.fontsize + self.fontspacing
    }

    /// Pixel width of `chars` glyphs laid out on one line.
    pub fn text_width(&self, chars: usize) -> u32 {
        (chars as u32 * self.advance()).saturating_sub(self.fontspacing)
    }
}
