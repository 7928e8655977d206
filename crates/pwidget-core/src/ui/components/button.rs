//! Push button firing callbacks on a completed click

extern crate alloc;

use alloc::string::String;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::ui::core::{Interact, Paint, PaintCx, PointerResult, fill_rect, stroke_rect};
use crate::ui::styling::GraphicsContext;
use crate::ui::text::draw_string;

/// Border thickness in pixels
const BORDER_WIDTH: u32 = 2;

/// Button component with a text value
///
/// A click is a pointer-down on the button (claiming focus) followed by a
/// pointer-up anywhere while the button still holds focus. The click runs
/// the button's callbacks in registration order and releases focus.
///
/// # Visual Features
/// - Background fill with a 2px border
/// - Text inset by the glyph spacing plus the border
#[derive(Debug, Clone)]
pub struct Button {
    gc: GraphicsContext,
    value: String,
}

impl Button {
    pub fn new(gc: &GraphicsContext, value: impl Into<String>) -> Self {
        Self {
            gc: gc.clone(),
            value: value.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub(crate) fn set_value(&mut self, value: String) {
        self.value = value;
    }

    pub fn size(&self) -> Size {
        let font = self.gc.font();
        let chars = self.value.chars().count() as u32;
        Size::new(
            chars * font.advance() + font.fontspacing() + 4,
            font.fontsize() + 4 + 2 * font.fontspacing(),
        )
    }
}

impl Paint for Button {
    fn paint<D: DrawTarget<Color = Rgb565>>(
        &self,
        bounds: Rectangle,
        _cx: &PaintCx,
        target: &mut D,
    ) -> Result<(), D::Error> {
        fill_rect(target, self.gc.background_color(), bounds)?;
        stroke_rect(target, self.gc.border_color(), bounds, BORDER_WIDTH)?;

        let inset = (self.gc.font().fontspacing() + BORDER_WIDTH) as i32;
        draw_string(
            target,
            self.gc.font(),
            bounds.top_left + Point::new(inset, inset),
            &self.value,
            None,
        )
    }
}

impl Interact for Button {
    fn mouse_down(&mut self, _bounds: Rectangle, _point: Point) -> PointerResult {
        PointerResult::Focus
    }

    fn mouse_up(&mut self, _bounds: Rectangle, _point: Point, focused: bool) -> PointerResult {
        if focused {
            PointerResult::Commit
        } else {
            PointerResult::Ignored
        }
    }
}
