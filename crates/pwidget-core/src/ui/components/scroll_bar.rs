//! Draggable scroll bar mapping a pointer position onto `[0, maximum]`

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use log::warn;

use crate::ui::core::{Interact, Orientation, Paint, PaintCx, PointerResult, fill_rect, rect};
use crate::ui::styling::GraphicsContext;

/// Thickness across the bar's axis
pub const BAR_THICKNESS: u32 = 15;

/// Default thumb length along the bar's axis
pub const DEFAULT_THUMB: u32 = 30;

/// Scroll bar with a committed integer value
///
/// Pressing the bar claims focus; while focused the thumb follows the live
/// pointer. Releasing commits the value under the release point:
///
/// `value = clamp((offset_along_axis - thumb / 2) * maximum / (track - thumb), 0, maximum)`
///
/// A track no longer than the thumb divides by one instead of zero, and a
/// maximum of zero always yields zero.
#[derive(Debug, Clone)]
pub struct ScrollBar {
    gc: GraphicsContext,
    orientation: Orientation,
    value: u32,
    maximum: u32,
    thumb: u32,
}

impl ScrollBar {
    pub fn new(gc: &GraphicsContext, orientation: Orientation, maximum: u32) -> Self {
        Self {
            gc: gc.clone(),
            orientation,
            value: 0,
            maximum,
            thumb: DEFAULT_THUMB,
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

    /// Change the range, pulling the value back inside it.
    pub fn set_maximum(&mut self, maximum: u32) {
        self.maximum = maximum;
        self.value = self.value.min(maximum);
    }

    /// Thumb length, at least one pixel. Painting and value mapping clip it
    /// to the length of the track.
    pub fn set_thumb(&mut self, thumb: u32) {
        self.thumb = thumb.max(1);
    }

    pub fn thumb(&self) -> u32 {
        self.thumb
    }

    /// Size before the parent stretches the bar along its axis.
    pub fn size(&self) -> Size {
        match self.orientation {
            Orientation::Vertical => Size::new(BAR_THICKNESS, 0),
            Orientation::Horizontal => Size::new(0, BAR_THICKNESS),
        }
    }

    /// Track origin and length along the bar's axis.
    fn track(&self, bounds: Rectangle) -> (i32, u32) {
        match self.orientation {
            Orientation::Vertical => (bounds.top_left.y, bounds.size.height),
            Orientation::Horizontal => (bounds.top_left.x, bounds.size.width),
        }
    }

    fn along(&self, point: Point) -> i32 {
        match self.orientation {
            Orientation::Vertical => point.y,
            Orientation::Horizontal => point.x,
        }
    }

    fn effective_thumb(&self, track: u32) -> u32 {
        self.thumb.min(track).max(1)
    }

    /// Value committed by a release at `point`.
    pub fn value_at(&self, bounds: Rectangle, point: Point) -> u32 {
        let (origin, track) = self.track(bounds);
        let thumb = self.effective_thumb(track);
        let span = if track > thumb {
            (track - thumb) as i64
        } else {
            warn!("Scroll bar track of {} is not longer than its thumb", track);
            1
        };
        let offset = (self.along(point) - origin) as i64 - (thumb / 2) as i64;
        let maximum = self.maximum as i64;
        (offset * maximum / span).clamp(0, maximum) as u32
    }

    /// Thumb rectangle for the committed value or, while dragging, the pointer.
    fn thumb_rect(&self, bounds: Rectangle, drag: Option<Point>) -> Rectangle {
        let (origin, track) = self.track(bounds);
        let thumb = self.effective_thumb(track);
        let travel = track.saturating_sub(thumb) as i64;

        let start = match drag {
            Some(pointer) => {
                let centered = (self.along(pointer) - thumb as i32 / 2) as i64;
                centered.clamp(origin as i64, origin as i64 + travel)
            }
            None if self.maximum == 0 => origin as i64,
            None => origin as i64 + (self.value as i64 * travel / self.maximum as i64).clamp(0, travel),
        } as i32;

        match self.orientation {
            Orientation::Vertical => rect(
                bounds.top_left.x,
                start,
                bounds.size.width as i32,
                thumb as i32,
            ),
            Orientation::Horizontal => rect(
                start,
                bounds.top_left.y,
                thumb as i32,
                bounds.size.height as i32,
            ),
        }
    }
}

impl Paint for ScrollBar {
    fn paint<D: DrawTarget<Color = Rgb565>>(
        &self,
        bounds: Rectangle,
        cx: &PaintCx,
        target: &mut D,
    ) -> Result<(), D::Error> {
        fill_rect(target, self.gc.border_color(), bounds)?;
        let drag = cx.focused.then_some(cx.pointer);
        fill_rect(target, self.gc.background_color(), self.thumb_rect(bounds, drag))
    }
}

impl Interact for ScrollBar {
    fn mouse_down(&mut self, _bounds: Rectangle, _point: Point) -> PointerResult {
        PointerResult::Focus
    }

    fn mouse_up(&mut self, bounds: Rectangle, point: Point, focused: bool) -> PointerResult {
        if !focused {
            return PointerResult::Ignored;
        }
        self.value = self.value_at(bounds, point);
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

    fn track() -> Rectangle {
        Rectangle::new(Point::new(40, 50), Size::new(15, 200))
    }

    #[test]
    fn test_value_mapping_hits_both_ends() {
        let bar = ScrollBar::vertical(&gc(), 100);
        assert_eq!(bar.value_at(track(), Point::new(45, 50)), 0);
        assert_eq!(bar.value_at(track(), Point::new(45, 250)), 100);
        // Centre of the travel
        assert_eq!(bar.value_at(track(), Point::new(45, 50 + 15 + 85)), 50);
    }

    #[test]
    fn test_value_mapping_stays_in_range() {
        let bar = ScrollBar::vertical(&gc(), 100);
        for y in -500..800 {
            let value = bar.value_at(track(), Point::new(45, y));
            assert!(value <= 100, "value {} out of range at y={}", value, y);
        }
    }

    #[test]
    fn test_degenerate_tracks_are_clamped() {
        let mut bar = ScrollBar::horizontal(&gc(), 10);
        let short = Rectangle::new(Point::zero(), Size::new(20, 15));
        // Thumb of 30 on a 20px track: divides by one
        assert_eq!(bar.value_at(short, Point::new(0, 5)), 0);
        assert_eq!(bar.value_at(short, Point::new(20, 5)), 10);

        bar.set_maximum(0);
        assert_eq!(bar.value_at(short, Point::new(20, 5)), 0);
        let empty = Rectangle::new(Point::zero(), Size::zero());
        assert_eq!(bar.value_at(empty, Point::new(3, 0)), 0);
    }

    #[test]
    fn test_release_commits_only_with_focus() {
        let mut bar = ScrollBar::vertical(&gc(), 100);
        assert_eq!(bar.mouse_up(track(), Point::new(45, 250), false), PointerResult::Ignored);
        assert_eq!(bar.value(), 0);
        assert_eq!(bar.mouse_up(track(), Point::new(45, 250), true), PointerResult::Commit);
        assert_eq!(bar.value(), 100);

        bar.set_maximum(40);
        assert_eq!(bar.value(), 40);
    }

    #[test]
    fn test_thumb_follows_pointer_while_dragging() {
        let mut bar = ScrollBar::vertical(&gc(), 100);
        bar.set_thumb(0);
        assert_eq!(bar.thumb(), 1);
        bar.set_thumb(30);

        let resting = bar.thumb_rect(track(), None);
        assert_eq!(resting, Rectangle::new(Point::new(40, 50), Size::new(15, 30)));

        let dragged = bar.thumb_rect(track(), Some(Point::new(45, 120)));
        assert_eq!(dragged.top_left.y, 105);

        // Pointer far below the track pins the thumb to the end
        let pinned = bar.thumb_rect(track(), Some(Point::new(45, 900)));
        assert_eq!(pinned.top_left.y, 220);
    }

    #[test]
    fn test_oversized_thumb_is_clipped_to_track() {
        let mut bar = ScrollBar::vertical(&gc(), 100);
        bar.set_thumb(500);
        assert_eq!(bar.thumb(), 500);

        let thumb = bar.thumb_rect(track(), None);
        assert_eq!(thumb, Rectangle::new(Point::new(40, 50), Size::new(15, 200)));
        let dragged = bar.thumb_rect(track(), Some(Point::new(45, 900)));
        assert_eq!(dragged, thumb);
        assert_eq!(bar.value_at(track(), Point::new(45, 250)), 100);
    }
}
