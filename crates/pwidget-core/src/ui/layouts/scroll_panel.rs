// src/ui/layouts/scroll_panel.rs
//! Clipped, scrollable view onto a nested panel
//!
//! The nested panel lives in its own coordinate space with its origin at
//! (0, 0). Every frame it is painted into an off-screen buffer the size of
//! the whole content, and only the viewport window
//! `[x_offset, y_offset, viewport_width, viewport_height]` of that buffer is
//! blitted to the screen. Pointer input landing inside the viewport is
//! translated into content space by subtracting the scroll panel's origin and
//! adding the scroll offset, so the nested panel never knows it is scrolled.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::surface::Surface;
use crate::ui::components::BAR_THICKNESS;
use crate::ui::core::{Orientation, contains_point, rect};
use crate::ui::styling::GraphicsContext;
use crate::ui::tree::WidgetId;

/// Nodes a scroll panel owns: the nested panel and its two bars
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollParts {
    pub content: WidgetId,
    pub vertical: WidgetId,
    pub horizontal: WidgetId,
}

/// Bars switched on by a call to [`ScrollPanel::enable_for`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Enabled {
    pub vertical: bool,
    pub horizontal: bool,
}

/// Viewport of at most `max_width` x `max_height` onto a nested panel
///
/// A scroll bar is switched on the first time the content no longer fits
/// along its axis and stays on for good, even if the content later shrinks.
/// Offsets always stay within `[0, content - viewport]`.
#[derive(Debug, Clone)]
pub struct ScrollPanel {
    gc: GraphicsContext,
    orientation: Orientation,
    max_size: Size,
    offset: Point,
    range: Size,
    scroll_vertical: bool,
    scroll_horizontal: bool,
    parts: ScrollParts,
    pub(crate) buffer: Surface,
}

impl ScrollPanel {
    /// Scroll panel whose nested panel stacks along `orientation`.
    pub fn new(gc: &GraphicsContext, max_width: u32, max_height: u32, orientation: Orientation) -> Self {
        Self {
            gc: gc.clone(),
            orientation,
            max_size: Size::new(max_width, max_height),
            offset: Point::zero(),
            range: Size::zero(),
            scroll_vertical: false,
            scroll_horizontal: false,
            parts: ScrollParts::default(),
            buffer: Surface::default(),
        }
    }

    pub fn gc(&self) -> &GraphicsContext {
        &self.gc
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn max_size(&self) -> Size {
        self.max_size
    }

    pub fn parts(&self) -> ScrollParts {
        self.parts
    }

    pub(crate) fn set_parts(&mut self, parts: ScrollParts) {
        self.parts = parts;
    }

    pub fn scrolls_vertically(&self) -> bool {
        self.scroll_vertical
    }

    pub fn scrolls_horizontally(&self) -> bool {
        self.scroll_horizontal
    }

    pub fn x_offset(&self) -> u32 {
        self.offset.x as u32
    }

    pub fn y_offset(&self) -> u32 {
        self.offset.y as u32
    }

    /// Largest offsets the current content allows.
    pub fn range(&self) -> Size {
        self.range
    }

    pub fn set_x_offset(&mut self, x: u32) {
        self.offset.x = x.min(self.range.width) as i32;
    }

    pub fn set_y_offset(&mut self, y: u32) {
        self.offset.y = y.min(self.range.height) as i32;
    }

    /// Switch bars on for `content`, returning the ones newly enabled.
    ///
    /// A bar on one axis eats into the viewport on the other, so enabling one
    /// can make the other necessary; two rounds settle both flags.
    pub(crate) fn enable_for(&mut self, content: Size) -> Enabled {
        let before = Enabled {
            vertical: self.scroll_vertical,
            horizontal: self.scroll_horizontal,
        };
        for _ in 0..2 {
            let allowance = self.bar_allowance();
            self.scroll_vertical |= content.height > self.max_size.height.saturating_sub(allowance.height);
            self.scroll_horizontal |= content.width > self.max_size.width.saturating_sub(allowance.width);
        }
        Enabled {
            vertical: self.scroll_vertical && !before.vertical,
            horizontal: self.scroll_horizontal && !before.horizontal,
        }
    }

    /// Space taken by the enabled bars: bar width, bar height.
    fn bar_allowance(&self) -> Size {
        Size::new(
            if self.scroll_vertical { BAR_THICKNESS } else { 0 },
            if self.scroll_horizontal { BAR_THICKNESS } else { 0 },
        )
    }

    /// Outer size of the scroll panel for `content`.
    pub fn size_for(&self, content: Size) -> Size {
        let allowance = self.bar_allowance();
        Size::new(
            (content.width + allowance.width).min(self.max_size.width),
            (content.height + allowance.height).min(self.max_size.height),
        )
    }

    /// Visible content area of a scroll panel of outer size `size`.
    pub fn viewport(&self, size: Size) -> Size {
        size.saturating_sub(self.bar_allowance())
    }

    /// Recompute the scroll range, pulling the offsets back inside it.
    pub(crate) fn set_range(&mut self, content: Size, viewport: Size) {
        self.range = content.saturating_sub(viewport);
        self.set_x_offset(self.x_offset());
        self.set_y_offset(self.y_offset());
    }

    pub fn vertical_bar_bounds(&self, bounds: Rectangle) -> Rectangle {
        let allowance = self.bar_allowance();
        rect(
            bounds.top_left.x + bounds.size.width as i32 - BAR_THICKNESS as i32,
            bounds.top_left.y,
            BAR_THICKNESS as i32,
            bounds.size.height as i32 - allowance.height as i32,
        )
    }

    pub fn horizontal_bar_bounds(&self, bounds: Rectangle) -> Rectangle {
        let allowance = self.bar_allowance();
        rect(
            bounds.top_left.x,
            bounds.top_left.y + bounds.size.height as i32 - BAR_THICKNESS as i32,
            bounds.size.width as i32 - allowance.width as i32,
            BAR_THICKNESS as i32,
        )
    }

    /// Screen area the content is shown in.
    pub fn viewport_bounds(&self, bounds: Rectangle) -> Rectangle {
        Rectangle::new(bounds.top_left, self.viewport(bounds.size))
    }

    /// Window of the content buffer blitted to the screen.
    pub fn source_window(&self, bounds: Rectangle) -> Rectangle {
        Rectangle::new(self.offset, self.viewport(bounds.size))
    }

    /// Translate `point` into content space, if it lies inside the viewport.
    pub fn to_content(&self, bounds: Rectangle, point: Point) -> Option<Point> {
        contains_point(self.viewport_bounds(bounds), point)
            .then(|| point - bounds.top_left + self.offset)
    }
}
