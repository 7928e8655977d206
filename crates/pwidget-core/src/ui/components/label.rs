//! Single-line text display

extern crate alloc;

use alloc::string::String;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::ui::core::{Interact, Paint, PaintCx};
use crate::ui::styling::GraphicsContext;
use crate::ui::text::draw_string;

/// Text drawn with the context's glyph table, sized to fit its value
///
/// Changing the value through [`Ui::set_text`](crate::ui::Ui::set_text)
/// resizes the label and re-runs layout.
#[derive(Debug, Clone)]
pub struct Label {
    gc: GraphicsContext,
    value: String,
}

impl Label {
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
        Size::new(font.text_width(self.value.chars().count()), font.fontsize())
    }
}

impl Paint for Label {
    fn paint<D: DrawTarget<Color = Rgb565>>(
        &self,
        bounds: Rectangle,
        _cx: &PaintCx,
        target: &mut D,
    ) -> Result<(), D::Error> {
        draw_string(target, self.gc.font(), bounds.top_left, &self.value, None)
    }
}

impl Interact for Label {}
