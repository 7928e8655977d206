//! Two-button stepper spanning its parent panel

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::ui::core::{Interact, Orientation, Paint, PaintCx, PointerResult, fill_rect, rect};
use crate::ui::styling::GraphicsContext;

/// Thickness across the wheel's axis
pub const WHEEL_THICKNESS: u32 = 20;

/// Stepper with a decrement half and an increment half
///
/// A vertical wheel is 20px wide and takes the height of its parent panel;
/// a horizontal wheel is 20px high and takes the parent's width. A completed
/// click in the first half lowers the value by one, in the second half raises
/// it by one, always within `[0, maximum]`.
#[derive(Debug, Clone)]
pub struct ScrollWheel {
    gc: GraphicsContext,
    orientation: Orientation,
    value: u32,
    maximum: u32,
}

impl ScrollWheel {
    pub fn new(gc: &GraphicsContext, orientation: Orientation, maximum: u32) -> Self {
        Self {
            gc: gc.clone(),
            orientation,
            value: 0,
            maximum,
        }
    }

    pub fn vertical(gc: &GraphicsContext, maximum: u32) -> Self {
        Self::new(gc, Orientation::Vertical, maximum)
    }

    pub fn horizontal(gc: &GraphicsContext, maximum: u32) -> Self {
        Self::new(gc, Orientation::Horizontal, maximum)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn maximum(&self) -> u32 {
        self.maximum
    }

    pub fn set_maximum(&mut self, maximum: u32) {
        self.maximum = maximum;
        self.value = self.value.min(maximum);
    }

    pub fn decrement(&mut self) {
        self.value = self.value.saturating_sub(1);
    }

    pub fn increment(&mut self) {
        self.value = (self.value + 1).min(self.maximum);
    }

    /// Size before the parent stretches the wheel along its axis.
    pub fn size(&self) -> Size {
        match self.orientation {
            Orientation::Vertical => Size::new(WHEEL_THICKNESS, 0),
            Orientation::Horizontal => Size::new(0, WHEEL_THICKNESS),
        }
    }
}

impl Paint for ScrollWheel {
    fn paint<D: DrawTarget<Color = Rgb565>>(
        &self,
        bounds: Rectangle,
        _cx: &PaintCx,
        target: &mut D,
    ) -> Result<(), D::Error> {
        let Point { x, y } = bounds.top_left;
        let w = bounds.size.width as i32;
        let h = bounds.size.height as i32;
        let background = self.gc.background_color();
        let foreground = self.gc.foreground_color();

        fill_rect(target, self.gc.border_color(), bounds)?;
        match self.orientation {
            Orientation::Vertical => {
                fill_rect(target, background, rect(x + 2, y + 2, w - 4, h / 2 - 4))?;
                fill_rect(target, background, rect(x + 2, y + h / 2 + 2, w - 4, h / 2 - 4))?;
                fill_rect(target, foreground, rect(x + 6, y + 6, w - 12, 12))?;
                fill_rect(target, foreground, rect(x + 6, y + h - 18, w - 12, 12))
            }
            Orientation::Horizontal => {
                fill_rect(target, background, rect(x + 2, y + 2, w / 2 - 4, h - 4))?;
                fill_rect(target, background, rect(x + w / 2 + 2, y + 2, w / 2 - 4, h - 4))?;
                fill_rect(target, foreground, rect(x + 6, y + 6, 12, h - 12))?;
                fill_rect(target, foreground, rect(x + w - 18, y + 6, 12, h - 12))
            }
        }
    }
}

impl Interact for ScrollWheel {
    fn mouse_down(&mut self, _bounds: Rectangle, _point: Point) -> PointerResult {
        PointerResult::Focus
    }

    fn mouse_up(&mut self, bounds: Rectangle, point: Point, focused: bool) -> PointerResult {
        if !focused {
            return PointerResult::Ignored;
        }
        let first_half = match self.orientation {
            Orientation::Vertical => {
                (point.y - bounds.top_left.y) < bounds.size.height as i32 / 2
            }
            Orientation::Horizontal => {
                (point.x - bounds.top_left.x) < bounds.size.width as i32 / 2
            }
        };
        if first_half {
            self.decrement();
        } else {
            self.increment();
        }
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
    fn test_wheel_halves_step_value() {
        let mut wheel = ScrollWheel::vertical(&gc(), 2);
        let bounds = Rectangle::new(Point::new(0, 10), Size::new(20, 100));

        assert_eq!(wheel.mouse_up(bounds, Point::new(5, 80), true), PointerResult::Commit);
        assert_eq!(wheel.value(), 1);
        wheel.mouse_up(bounds, Point::new(5, 80), true);
        wheel.mouse_up(bounds, Point::new(5, 80), true);
        assert_eq!(wheel.value(), 2);

        wheel.mouse_up(bounds, Point::new(5, 20), true);
        wheel.mouse_up(bounds, Point::new(5, 20), true);
        wheel.mouse_up(bounds, Point::new(5, 20), true);
        assert_eq!(wheel.value(), 0);
    }

    #[test]
    fn test_wheel_needs_focus_to_commit() {
        let mut wheel = ScrollWheel::horizontal(&gc(), 5);
        let bounds = Rectangle::new(Point::zero(), Size::new(100, 20));
        assert_eq!(wheel.mouse_up(bounds, Point::new(90, 5), false), PointerResult::Ignored);
        assert_eq!(wheel.value(), 0);
        wheel.mouse_up(bounds, Point::new(90, 5), true);
        assert_eq!(wheel.value(), 1);
    }

    #[test]
    fn test_wheel_intrinsic_size() {
        assert_eq!(ScrollWheel::vertical(&gc(), 1).size(), Size::new(20, 0));
        assert_eq!(ScrollWheel::horizontal(&gc(), 1).size(), Size::new(0, 20));
    }
}
