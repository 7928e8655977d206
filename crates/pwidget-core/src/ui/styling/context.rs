//! Graphics context shared by widget constructors
//!
//! Bundles the glyph table with the four colors widgets paint with. Cloning
//! a context is cheap: the glyph table sits behind an `Rc`.

extern crate alloc;

use alloc::rc::Rc;
use embedded_graphics::pixelcolor::Rgb565;

use super::colors::{DEFAULT_BACKGROUND, DEFAULT_BORDER, DEFAULT_CURSOR, DEFAULT_FOREGROUND};
use crate::ui::text::GlyphTable;

/// Font and colors used to size and paint widgets
///
/// # Examples
///
/// ```ignore
/// let font = GlyphTable::from_mono_font(&FONT_6X10, 10, BLACK);
/// let gc = GraphicsContext::new(font)
///     .with_background(LIGHT_BLUE)
///     .with_border(BLACK);
///
/// let label = Label::new(&gc, "hello world!");
/// ```
#[derive(Debug, Clone)]
pub struct GraphicsContext {
    font: Rc<GlyphTable>,
    border_color: Rgb565,
    background_color: Rgb565,
    cursor_color: Rgb565,
    foreground_color: Rgb565,
}

impl GraphicsContext {
    /// Create a context with the default palette: black border, gray
    /// background, light gray cursor and white foreground.
    pub fn new(font: GlyphTable) -> Self {
        Self::with_shared_font(Rc::new(font))
    }

    /// Create a context reusing an already shared glyph table.
    pub fn with_shared_font(font: Rc<GlyphTable>) -> Self {
        Self {
            font,
            border_color: DEFAULT_BORDER,
            background_color: DEFAULT_BACKGROUND,
            cursor_color: DEFAULT_CURSOR,
            foreground_color: DEFAULT_FOREGROUND,
        }
    }

    pub fn with_font(mut self, font: GlyphTable) -> Self {
        self.font = Rc::new(font);
        self
    }

    pub fn with_border(mut self, color: Rgb565) -> Self {
        self.border_color = color;
        self
    }

    pub fn with_background(mut self, color: Rgb565) -> Self {
        self.background_color = color;
        self
    }

    pub fn with_cursor(mut self, color: Rgb565) -> Self {
        self.cursor_color = color;
        self
    }

    pub fn with_foreground(mut self, color: Rgb565) -> Self {
        self.foreground_color = color;
        self
    }

    pub fn set_font(&mut self, font: GlyphTable) {
        self.font = Rc::new(font);
    }

    pub fn set_border_color(&mut self, color: Rgb565) {
        self.border_color = color;
    }

    pub fn set_background_color(&mut self, color: Rgb565) {
        self.background_color = color;
    }

    pub fn set_cursor_color(&mut self, color: Rgb565) {
        self.cursor_color = color;
    }

    pub fn set_foreground_color(&mut self, color: Rgb565) {
        self.foreground_color = color;
    }

    pub fn font(&self) -> &GlyphTable {
        &self.font
    }

    pub fn shared_font(&self) -> Rc<GlyphTable> {
        Rc::clone(&self.font)
    }

    pub fn border_color(&self) -> Rgb565 {
        self.border_color
    }

    pub fn background_color(&self) -> Rgb565 {
        self.background_color
    }

    pub fn cursor_color(&self) -> Rgb565 {
        self.cursor_color
    }

    pub fn foreground_color(&self) -> Rgb565 {
        self.foreground_color
    }
}
