//! Multi-line, wrapped, immutable text
//!
//! Lines are wrapped once at construction and rendered into an off-screen
//! surface; painting only blits that surface. Wrapping happens mid-word, so
//! callers should pick `max_width` with the text in mind.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::surface::Surface;
use crate::ui::core::{Interact, Paint, PaintCx};
use crate::ui::styling::GraphicsContext;
use crate::ui::text::{draw_string, wrap_lines};

/// Left-aligned block of wrapped lines
#[derive(Debug, Clone)]
pub struct Paragraph {
    value: String,
    lines: Vec<String>,
    buffer: Surface,
}

impl Paragraph {
    /// Wrap `value` to lines no wider than `max_width` pixels and render them.
    pub fn new(gc: &GraphicsContext, value: impl Into<String>, max_width: u32) -> Self {
        let value = value.into();
        let font = gc.font();
        let advance = font.advance();
        let maxchars = (max_width / advance) as usize;
        let lines = wrap_lines(&value, maxchars);

        let longest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let width = font.text_width(longest);
        let height = (lines.len() as u32 * advance).saturating_sub(font.fontspacing());

        let mut buffer = Surface::new(width, height);
        for (i, line) in lines.iter().enumerate() {
            let origin = Point::new(0, (i as u32 * advance) as i32);
            // Surface drawing is infallible
            let _ = draw_string(&mut buffer, font, origin, line, None);
        }

        Self {
            value,
            lines,
            buffer,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// The wrapped lines, top to bottom.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn size(&self) -> Size {
        self.buffer.size()
    }
}

impl Paint for Paragraph {
    fn paint<D: DrawTarget<Color = Rgb565>>(
        &self,
        bounds: Rectangle,
        _cx: &PaintCx,
        target: &mut D,
    ) -> Result<(), D::Error> {
        self.buffer.blit(target, bounds.top_left, None)
    }
}

impl Interact for Paragraph {}
