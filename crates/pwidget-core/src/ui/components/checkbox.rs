//! Two-state toggle with an optional text label

extern crate alloc;

use alloc::string::String;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::ui::core::{Interact, Paint, PaintCx, PointerResult, fill_rect, rect};
use crate::ui::styling::GraphicsContext;
use crate::ui::text::draw_string;

/// Edge length of a checkbox without a label
const BARE_SIZE: u32 = 20;

/// Checkbox toggling between `true` and `false` on a completed click
#[derive(Debug, Clone)]
pub struct CheckBox {
    gc: GraphicsContext,
    label: String,
    value: bool,
}

impl CheckBox {
    /// Create an unchecked box. An empty `label` gives a bare 20x20 box.
    pub fn new(gc: &GraphicsContext, label: impl Into<String>) -> Self {
        Self {
            gc: gc.clone(),
            label: label.into(),
            value: false,
        }
    }

    pub fn value(&self) -> bool {
        self.value
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Flip the value, or force it when `value` is given.
    pub fn toggle(&mut self, value: Option<bool>) {
        self.value = value.unwrap_or(!self.value);
    }

    pub fn size(&self) -> Size {
        if self.label.is_empty() {
            return Size::new(BARE_SIZE, BARE_SIZE);
        }
        let font = self.gc.font();
        let chars = self.label.chars().count() as u32;
        Size::new(font.fontsize() + chars * font.advance(), font.fontsize())
    }

    /// Width of the box part, excluding the label.
    fn box_width(&self, bounds: Rectangle) -> u32 {
        if self.label.is_empty() {
            bounds.size.width
        } else {
            self.gc.font().fontsize()
        }
    }
}

impl Paint for CheckBox {
    fn paint<D: DrawTarget<Color = Rgb565>>(
        &self,
        bounds: Rectangle,
        _cx: &PaintCx,
        target: &mut D,
    ) -> Result<(), D::Error> {
        let box_width = self.box_width(bounds);
        let area = Rectangle::new(bounds.top_left, Size::new(box_width, bounds.size.height));
        fill_rect(target, self.gc.border_color(), area)?;

        if !self.label.is_empty() {
            let font = self.gc.font();
            let origin = bounds.top_left + Point::new((font.fontsize() + font.fontspacing()) as i32, 0);
            draw_string(target, font, origin, &self.label, None)?;
        }

        if self.value {
            let mark = rect(
                bounds.top_left.x + 2,
                bounds.top_left.y + 2,
                box_width as i32 - 4,
                bounds.size.height as i32 - 4,
            );
            fill_rect(target, self.gc.foreground_color(), mark)?;
        }
        Ok(())
    }
}

impl Interact for CheckBox {
    fn mouse_down(&mut self, _bounds: Rectangle, _point: Point) -> PointerResult {
        PointerResult::Focus
    }

    fn mouse_up(&mut self, _bounds: Rectangle, _point: Point, focused: bool) -> PointerResult {
        if !focused {
            return PointerResult::Ignored;
        }
        self.toggle(None);
        PointerResult::Commit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::text::GlyphTable;
    use embedded_graphics::mono_font::ascii::FONT_6X10;

    fn gc() -> GraphicsContext {
        GraphicsContext::new(GlyphTable::from_mono_font(&FONT_6X10, 10, Rgb565::BLACK).unwrap())
    }

    #[test]
    fn test_checkbox_sizes() {
        assert_eq!(CheckBox::new(&gc(), "").size(), Size::new(20, 20));
        // 10px box plus three 11px advances
        assert_eq!(CheckBox::new(&gc(), "abc").size(), Size::new(43, 10));
    }

    #[test]
    fn test_toggle() {
        let mut checkbox = CheckBox::new(&gc(), "");
        checkbox.toggle(None);
        assert!(checkbox.value());
        checkbox.toggle(Some(true));
        assert!(checkbox.value());
        checkbox.toggle(None);
        assert!(!checkbox.value());
    }

    #[test]
    fn test_release_without_focus_does_nothing() {
        let mut checkbox = CheckBox::new(&gc(), "");
        let bounds = Rectangle::new(Point::zero(), checkbox.size());
        assert_eq!(
            checkbox.mouse_up(bounds, Point::new(1, 1), false),
            PointerResult::Ignored
        );
        assert!(!checkbox.value());
        assert_eq!(
            checkbox.mouse_up(bounds, Point::new(1, 1), true),
            PointerResult::Commit
        );
        assert!(checkbox.value());
    }
}
