//! Glyph placement and paragraph wrapping
//!
//! Single-line runs are truncated at a maximum width; wrapping into several
//! lines is done by [`wrap_lines`], one layer up.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use super::font::GlyphTable;

/// Positions of the glyphs of `text` drawn from `origin`.
///
/// The i-th character lands at `origin.x + i * advance`. When `max_width` is
/// given, placement stops at the first glyph whose right edge would extend
/// past `origin.x + max_width`.
pub fn glyph_run<'a>(
    font: &GlyphTable,
    origin: Point,
    text: &'a str,
    max_width: Option<u32>,
) -> impl Iterator<Item = (Point, char)> + use<'a> {
    let advance = font.advance() as i64;
    let size = font.fontsize() as i64;

    text.chars()
        .enumerate()
        .map_while(move |(i, c)| {
            let offset = i as i64 * advance;
            match max_width {
                Some(max) if offset + size > max as i64 => None,
                _ => Some((Point::new(origin.x + offset as i32, origin.y), c)),
            }
        })
}

/// Draw `text` on a single line starting at `origin`, truncated at
/// `max_width` pixels.
pub fn draw_string<D>(
    target: &mut D,
    font: &GlyphTable,
    origin: Point,
    text: &str,
    max_width: Option<u32>,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    for (position, c) in glyph_run(font, origin, text, max_width) {
        font.glyph(c).blit(target, position, None)?;
    }
    Ok(())
}

/// Split `text` into lines of at most `maxchars` characters.
///
/// A `'\n'` ends the current line. A line that already holds `maxchars`
/// characters is flushed and the overflowing character starts the next one,
/// so words are split wherever the limit falls. The result always holds at
/// least one (possibly empty) line. A `maxchars` of zero is treated as one.
pub fn wrap_lines(text: &str, maxchars: usize) -> Vec<String> {
    let maxchars = maxchars.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for c in text.chars() {
        if c == '\n' {
            lines.push(core::mem::take(&mut line));
            line_len = 0;
        } else if line_len >= maxchars {
            lines.push(core::mem::take(&mut line));
            line.push(c);
            line_len = 1;
        } else {
            line.push(c);
            line_len += 1;
        }
    }
    lines.push(line);
    lines
}
