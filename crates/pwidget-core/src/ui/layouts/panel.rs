// src/ui/layouts/panel.rs
//! Linear stacking container
//!
//! A [`Panel`] holds no geometry of its own beyond what the tree stores for
//! it; this module provides the stacking arithmetic the tree's layout passes
//! run for every panel node.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::ui::core::Orientation;

/// Container stacking its children along one axis
///
/// Along the main axis the panel is as long as its children put together;
/// across it, as wide as its widest child. Children are placed back to back
/// in insertion order, starting at the panel's origin and aligned to its
/// cross-axis origin. A panel never paints anything itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Panel {
    orientation: Orientation,
}

impl Panel {
    pub fn new(orientation: Orientation) -> Self {
        Self { orientation }
    }

    pub fn vertical() -> Self {
        Self::new(Orientation::Vertical)
    }

    pub fn horizontal() -> Self {
        Self::new(Orientation::Horizontal)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Length of `size` along the main axis.
    pub fn main(&self, size: Size) -> u32 {
        match self.orientation {
            Orientation::Vertical => size.height,
            Orientation::Horizontal => size.width,
        }
    }

    /// Length of `size` across the main axis.
    pub fn cross(&self, size: Size) -> u32 {
        match self.orientation {
            Orientation::Vertical => size.width,
            Orientation::Horizontal => size.height,
        }
    }

    fn compose(&self, main: u32, cross: u32) -> Size {
        match self.orientation {
            Orientation::Vertical => Size::new(cross, main),
            Orientation::Horizontal => Size::new(main, cross),
        }
    }

    /// Size of a panel holding children of the given sizes.
    pub fn measure<I>(&self, sizes: I) -> Size
    where
        I: IntoIterator<Item = Size>,
    {
        let (main, cross) = sizes.into_iter().fold((0u32, 0u32), |(main, cross), size| {
            (main.saturating_add(self.main(size)), cross.max(self.cross(size)))
        });
        self.compose(main, cross)
    }

    /// Position of the child following `last` (or the first child when
    /// `last` is `None`) in a panel whose origin is `origin`.
    pub fn next_position(&self, origin: Point, last: Option<Rectangle>) -> Point {
        match (last, self.orientation) {
            (None, _) => origin,
            (Some(last), Orientation::Vertical) => {
                Point::new(origin.x, last.top_left.y + last.size.height as i32)
            }
            (Some(last), Orientation::Horizontal) => {
                Point::new(last.top_left.x + last.size.width as i32, origin.y)
            }
        }
    }

    /// Positions of children of the given sizes stacked from `origin`.
    pub fn arrange<I>(&self, origin: Point, sizes: I) -> impl Iterator<Item = Point> + use<I>
    where
        I: IntoIterator<Item = Size>,
    {
        let orientation = self.orientation;
        sizes.into_iter().scan(origin, move |cursor, size| {
            let position = *cursor;
            match orientation {
                Orientation::Vertical => cursor.y += size.height as i32,
                Orientation::Horizontal => cursor.x += size.width as i32,
            }
            Some(position)
        })
    }

    /// Size to give a child that stretches across this panel.
    ///
    /// Only the cross-axis dimension is stretched; `stretch` names the axis
    /// the child wants to fill.
    pub fn stretch(&self, child: Size, stretch: Orientation, panel: Size) -> Size {
        match (self.orientation, stretch) {
            (Orientation::Horizontal, Orientation::Vertical) => Size::new(child.width, panel.height),
            (Orientation::Vertical, Orientation::Horizontal) => Size::new(panel.width, child.height),
            _ => child,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    extern crate alloc;
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn test_vertical_measure_sums_heights() {
        let panel = Panel::vertical();
        let sizes = [Size::new(10, 5), Size::new(30, 7), Size::new(20, 0)];
        assert_eq!(panel.measure(sizes), Size::new(30, 12));
    }

    #[test]
    fn test_horizontal_measure_sums_widths() {
        let panel = Panel::horizontal();
        let sizes = [Size::new(10, 5), Size::new(30, 7)];
        assert_eq!(panel.measure(sizes), Size::new(40, 7));
        assert_eq!(panel.measure([]), Size::zero());
    }

    #[test]
    fn test_arrange_is_contiguous() {
        let panel = Panel::vertical();
        let sizes = [Size::new(10, 5), Size::new(30, 7), Size::new(20, 3)];
        let positions: Vec<_> = panel.arrange(Point::new(4, 6), sizes).collect();
        assert_eq!(positions, vec![Point::new(4, 6), Point::new(4, 11), Point::new(4, 18)]);

        let panel = Panel::horizontal();
        let positions: Vec<_> = panel.arrange(Point::new(4, 6), sizes).collect();
        assert_eq!(positions, vec![Point::new(4, 6), Point::new(14, 6), Point::new(44, 6)]);
    }

    #[test]
    fn test_next_position_follows_last_child() {
        let panel = Panel::horizontal();
        let origin = Point::new(2, 3);
        assert_eq!(panel.next_position(origin, None), origin);
        let last = Rectangle::new(Point::new(2, 3), Size::new(10, 40));
        assert_eq!(panel.next_position(origin, Some(last)), Point::new(12, 3));
    }

    #[test]
    fn test_stretch_only_across() {
        let panel = Panel::horizontal();
        let wheel = Size::new(20, 0);
        let size = Size::new(100, 50);
        assert_eq!(panel.stretch(wheel, Orientation::Vertical, size), Size::new(20, 50));
        assert_eq!(panel.stretch(wheel, Orientation::Horizontal, size), wheel);
    }
}
