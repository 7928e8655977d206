//! Single-line editable text field

extern crate alloc;

use alloc::string::String;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::ui::core::{Interact, Key, Paint, PaintCx, PointerResult, fill_rect, rect, stroke_rect};
use crate::ui::styling::GraphicsContext;
use crate::ui::text::draw_string;

/// Default cap on the number of characters a text box accepts
pub const DEFAULT_MAX_LENGTH: usize = 10_000;

const BORDER_WIDTH: u32 = 2;

/// Text field edited through key events while it holds focus
///
/// The value only ever holds ASCII letters (stored lowercase), digits and
/// spaces, so character and byte indices coincide. `offset` is the index of
/// the first visible character and always satisfies
/// `offset <= cursor <= offset + maxchars`.
#[derive(Debug, Clone)]
pub struct TextBox {
    gc: GraphicsContext,
    value: String,
    cursor: usize,
    offset: usize,
    maxlength: usize,
    maxchars: usize,
    size: Size,
}

impl TextBox {
    /// Text box at most `max_width` pixels wide, holding up to `maxlength`
    /// characters.
    pub fn new(gc: &GraphicsContext, max_width: u32, maxlength: usize) -> Self {
        let font = gc.font();
        let advance = font.advance();
        let width = max_width - max_width % advance;
        Self {
            gc: gc.clone(),
            value: String::new(),
            cursor: 0,
            offset: 0,
            maxlength,
            maxchars: (width.saturating_sub(4) / advance) as usize,
            size: Size::new(width + 2, font.fontsize() + 4 + 2 * font.fontspacing()),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn maxchars(&self) -> usize {
        self.maxchars
    }

    pub fn maxlength(&self) -> usize {
        self.maxlength
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Insert `c` at the cursor. Returns whether the value changed.
    pub fn insert(&mut self, c: char) -> bool {
        let c = match c {
            ' ' | '_' => ' ',
            c if c.is_ascii_alphanumeric() => c.to_ascii_lowercase(),
            _ => return false,
        };
        if self.value.len() >= self.maxlength {
            return false;
        }

        self.value.insert(self.cursor, c);
        self.cursor += 1;
        if self.value.len() > self.maxchars {
            self.offset += 1;
        }
        self.keep_cursor_visible();
        true
    }

    /// Remove the character before the cursor. Returns whether the value
    /// changed.
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.value.remove(self.cursor);
        self.offset = self.offset.saturating_sub(1);
        self.keep_cursor_visible();
        true
    }

    fn keep_cursor_visible(&mut self) {
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor > self.offset + self.maxchars {
            self.offset = self.cursor - self.maxchars;
        }
    }

    /// Cursor index for a click at horizontal position `x`.
    fn cursor_at(&self, bounds: Rectangle, x: i32) -> usize {
        let advance = self.gc.font().advance() as i32;
        // Clicks on the border land on the first or last visible column
        let column = (x - bounds.top_left.x - 2)
            .div_euclid(advance)
            .clamp(0, self.maxchars as i32);
        (column + self.offset as i32).clamp(0, self.value.len() as i32) as usize
    }
}

impl Paint for TextBox {
    fn paint<D: DrawTarget<Color = Rgb565>>(
        &self,
        bounds: Rectangle,
        cx: &PaintCx,
        target: &mut D,
    ) -> Result<(), D::Error> {
        let font = self.gc.font();
        let Point { x, y } = bounds.top_left;

        fill_rect(target, self.gc.background_color(), bounds)?;
        stroke_rect(target, self.gc.border_color(), bounds, BORDER_WIDTH)?;

        if cx.focused {
            let column = self.cursor.saturating_sub(self.offset) as i32;
            let caret = rect(
                x + column * font.advance() as i32 + 2,
                y + 2,
                font.fontsize() as i32,
                bounds.size.height as i32 - 4,
            );
            fill_rect(target, self.gc.cursor_color(), caret)?;
        }

        let inset = font.fontspacing() + BORDER_WIDTH;
        let visible = self.value.get(self.offset..).unwrap_or("");
        draw_string(
            target,
            font,
            Point::new(x + inset as i32, y + inset as i32),
            visible,
            Some(bounds.size.width.saturating_sub(inset + BORDER_WIDTH)),
        )
    }
}

impl Interact for TextBox {
    fn mouse_down(&mut self, bounds: Rectangle, point: Point) -> PointerResult {
        self.cursor = self.cursor_at(bounds, point.x);
        PointerResult::Focus
    }

    fn key_down(&mut self, key: Key) {
        match key {
            Key::Char(c) => {
                self.insert(c);
            }
            Key::Backspace => {
                self.backspace();
            }
            Key::Other(_) => {}
        }
    }
}
