//! Core UI traits and types shared by the widget tree

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyleBuilder, Rectangle, StrokeAlignment};
use serde::Deserialize;

/// Direction a panel stacks its children along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Top to bottom
    #[default]
    Vertical,
    /// Left to right
    Horizontal,
}

/// Keys delivered to the focused widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A printable key, already translated by the host
    Char(char),
    /// Delete the character before the cursor
    Backspace,
    /// Any other key, identified by the host's key code
    Other(u32),
}

/// Discrete input events polled from the host once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The host window was closed
    Quit,
    /// Pointer button pressed at a screen position
    PointerDown(Point),
    /// Pointer button released at a screen position
    PointerUp(Point),
    /// Pointer moved without a button transition
    PointerMove(Point),
    /// Key pressed
    KeyDown(Key),
    /// Key released
    KeyUp(Key),
}

/// Outcome of delivering a pointer event to a leaf widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerResult {
    /// Nothing happened
    Ignored,
    /// The widget claims focus
    Focus,
    /// The widget committed a value change: run its callbacks, release focus
    Commit,
}

/// Per-widget state needed while painting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaintCx {
    /// Whether the widget being painted holds focus
    pub focused: bool,
    /// Last known pointer position, in the widget's coordinate space
    pub pointer: Point,
}

/// Inclusive rectangle containment: both far edges count as inside.
pub fn contains_point(bounds: Rectangle, point: Point) -> bool {
    let right = bounds.top_left.x + bounds.size.width as i32;
    let bottom = bounds.top_left.y + bounds.size.height as i32;
    point.x >= bounds.top_left.x && point.x <= right && point.y >= bounds.top_left.y && point.y <= bottom
}

/// Fill `area` with `color`.
pub fn fill_rect<D>(target: &mut D, color: Rgb565, area: Rectangle) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    target.fill_solid(&area, color)
}

/// Outline `area` with a `thickness` pixel border drawn inside the rectangle.
pub fn stroke_rect<D>(
    target: &mut D,
    color: Rgb565,
    area: Rectangle,
    thickness: u32,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let style = PrimitiveStyleBuilder::new()
        .stroke_color(color)
        .stroke_width(thickness)
        .stroke_alignment(StrokeAlignment::Inside)
        .build();
    area.into_styled(style).draw(target)
}

/// Rectangle from signed origin and size, clamping negative sizes to zero.
pub fn rect(x: i32, y: i32, width: i32, height: i32) -> Rectangle {
    Rectangle::new(
        Point::new(x, y),
        Size::new(width.max(0) as u32, height.max(0) as u32),
    )
}

/// Trait for widgets that paint themselves inside their bounds
pub trait Paint {
    /// Paint the widget occupying `bounds` onto `target`
    fn paint<D: DrawTarget<Color = Rgb565>>(
        &self,
        bounds: Rectangle,
        cx: &PaintCx,
        target: &mut D,
    ) -> Result<(), D::Error>;
}

/// Trait for widgets that react to pointer and key input
///
/// Points are given in the same coordinate space as `bounds`.
pub trait Interact {
    /// Pointer pressed inside the widget
    fn mouse_down(&mut self, _bounds: Rectangle, _point: Point) -> PointerResult {
        PointerResult::Ignored
    }

    /// Pointer released; `focused` tells whether this widget holds focus
    fn mouse_up(&mut self, _bounds: Rectangle, _point: Point, _focused: bool) -> PointerResult {
        PointerResult::Ignored
    }

    /// Key pressed while this widget holds focus
    fn key_down(&mut self, _key: Key) {}

    /// Key released while this widget holds focus
    fn key_up(&mut self, _key: Key) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_point_is_inclusive() {
        let bounds = Rectangle::new(Point::new(10, 20), Size::new(5, 5));
        assert!(contains_point(bounds, Point::new(10, 20)));
        assert!(contains_point(bounds, Point::new(15, 25)));
        assert!(!contains_point(bounds, Point::new(16, 25)));
        assert!(!contains_point(bounds, Point::new(9, 22)));
    }

    #[test]
    fn test_zero_size_contains_its_origin() {
        let bounds = Rectangle::new(Point::new(3, 3), Size::zero());
        assert!(contains_point(bounds, Point::new(3, 3)));
        assert!(!contains_point(bounds, Point::new(4, 3)));
    }

    #[test]
    fn test_rect_clamps_negative_size() {
        assert_eq!(rect(1, 2, -4, 3), Rectangle::new(Point::new(1, 2), Size::new(0, 3)));
    }
}
