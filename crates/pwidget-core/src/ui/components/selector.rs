//! Scrollable list of string options with a single selected row

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::ui::core::{Interact, Paint, PaintCx, PointerResult, fill_rect, rect};
use crate::ui::styling::GraphicsContext;
use crate::ui::text::draw_string;

/// List showing at most `rows` options at a time
///
/// The selected row is picked by a completed click; which options are
/// visible is controlled with [`scroll_up`](Self::scroll_up),
/// [`scroll_down`](Self::scroll_down) and [`scroll_to`](Self::scroll_to),
/// typically from a scroll wheel callback. The list starts with `rows`
/// empty options so the visible window is always full.
#[derive(Debug, Clone)]
pub struct Selector {
    gc: GraphicsContext,
    width: u32,
    rows: usize,
    options: Vec<String>,
    selection: usize,
    offset: usize,
}

impl Selector {
    pub fn new(gc: &GraphicsContext, width: u32, rows: usize) -> Self {
        Self {
            gc: gc.clone(),
            width,
            rows,
            options: (0..rows).map(|_| String::new()).collect(),
            selection: 0,
            offset: 0,
        }
    }

    /// Insert an option at the top of the list.
    pub fn add_option(&mut self, value: impl ToString) {
        self.options.insert(0, value.to_string());
    }

    pub fn scroll_up(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.offset = (self.offset + 1).min(self.max_offset());
    }

    /// Make `option` the first visible row, clamped to the valid range.
    pub fn scroll_to(&mut self, option: usize) {
        self.offset = option.min(self.max_offset());
    }

    fn max_offset(&self) -> usize {
        self.options.len().saturating_sub(self.rows)
    }

    /// The option under the selected row.
    pub fn value(&self) -> &str {
        self.options
            .get(self.offset + self.selection)
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.rows as u32 * self.gc.font().fontsize() + 4)
    }
}

impl Paint for Selector {
    fn paint<D: DrawTarget<Color = Rgb565>>(
        &self,
        bounds: Rectangle,
        _cx: &PaintCx,
        target: &mut D,
    ) -> Result<(), D::Error> {
        let font = self.gc.font();
        let row_height = font.fontsize() as i32;
        let x = bounds.top_left.x;
        let y = bounds.top_left.y;
        let width = bounds.size.width as i32;

        fill_rect(target, self.gc.border_color(), bounds)?;
        let highlight = rect(x + 2, y + 2 + self.selection as i32 * row_height, width - 4, row_height);
        fill_rect(target, self.gc.background_color(), highlight)?;

        let visible = self.options.iter().skip(self.offset).take(self.rows);
        for (i, option) in visible.enumerate() {
            let origin = Point::new(x + 2, y + 2 + row_height * i as i32);
            draw_string(target, font, origin, option, Some((width - 4).max(0) as u32))?;
        }
        Ok(())
    }
}

impl Interact for Selector {
    fn mouse_down(&mut self, _bounds: Rectangle, _point: Point) -> PointerResult {
        PointerResult::Focus
    }

    fn mouse_up(&mut self, bounds: Rectangle, point: Point, focused: bool) -> PointerResult {
        if !focused {
            return PointerResult::Ignored;
        }
        let row_height = self.gc.font().fontsize().max(1) as i32;
        let row = (point.y - bounds.top_left.y - 2).div_euclid(row_height);
        let last = self.rows.saturating_sub(1) as i32;
        self.selection = row.clamp(0, last) as usize;
        PointerResult::Commit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::text::GlyphTable;
    use embedded_graphics::mono_font::ascii::FONT_6X10;

    fn selector(rows: usize) -> Selector {
        let gc =
            GraphicsContext::new(GlyphTable::from_mono_font(&FONT_6X10, 10, Rgb565::BLACK).unwrap());
        Selector::new(&gc, 80, rows)
    }

    #[test]
    fn test_selector_starts_with_blank_rows() {
        let selector = selector(3);
        assert_eq!(selector.options().len(), 3);
        assert_eq!(selector.value(), "");
        assert_eq!(selector.size(), Size::new(80, 34));
    }

    #[test]
    fn test_options_are_prepended() {
        let mut selector = selector(2);
        selector.add_option("first");
        selector.add_option("second");
        assert_eq!(selector.options()[0], "second");
        assert_eq!(selector.value(), "second");
    }

    #[test]
    fn test_scrolling_is_clamped() {
        let mut selector = selector(2);
        for i in 0..3 {
            selector.add_option(i);
        }
        // Five options, two rows visible
        selector.scroll_up();
        assert_eq!(selector.offset(), 0);
        for _ in 0..10 {
            selector.scroll_down();
        }
        assert_eq!(selector.offset(), 3);
        selector.scroll_to(1);
        assert_eq!(selector.offset(), 1);
        selector.scroll_to(99);
        assert_eq!(selector.offset(), 3);
    }

    #[test]
    fn test_pick_row_from_release_point() {
        let mut selector = selector(3);
        selector.add_option("c");
        selector.add_option("b");
        selector.add_option("a");
        let bounds = Rectangle::new(Point::new(0, 100), selector.size());

        assert_eq!(
            selector.mouse_up(bounds, Point::new(5, 100 + 2 + 15), true),
            PointerResult::Commit
        );
        assert_eq!(selector.selection(), 1);
        assert_eq!(selector.value(), "b");

        // Above the first row and below the last clamp into range
        selector.mouse_up(bounds, Point::new(5, 100), true);
        assert_eq!(selector.selection(), 0);
        selector.mouse_up(bounds, Point::new(5, 134), true);
        assert_eq!(selector.selection(), 2);
    }
}
