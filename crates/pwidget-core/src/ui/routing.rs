// src/ui/routing.rs
//! Focus tracking and input routing
//!
//! Pointer events travel down the tree: a panel hands the event to the first
//! child (in insertion order) whose bounds contain the point and tests no
//! further siblings. A scroll panel tests its bars first, then its viewport,
//! translating viewport hits into content space. Key events skip the tree
//! and go straight to the focused widget, or nowhere.
//!
//! A pointer release is delivered twice: once down the tree and once to the
//! focused widget, wherever the pointer ended up. Widgets only commit a
//! release while they hold focus, and committing releases it again.

use embedded_graphics::prelude::*;
use log::{debug, trace};

use super::core::{Interact, Key, PointerResult, contains_point};
use super::layouts::ScrollPanel;
use super::tree::{Ui, WidgetId};
use super::widget::Widget;

/// How an event entering a node is handled
enum Route {
    Panel,
    ScrollPanel,
    Leaf,
}

impl Ui {
    pub fn focus(&self) -> Option<WidgetId> {
        self.focus
    }

    pub fn is_focused(&self, id: WidgetId) -> bool {
        self.focus == Some(id)
    }

    /// Give focus to `id`, taking it from whichever widget held it.
    pub fn set_focus(&mut self, id: WidgetId) {
        if !self.contains(id) || self.focus == Some(id) {
            return;
        }
        debug!("Focus moves to '{}'", self.name(id).unwrap_or_default());
        self.focus = Some(id);
    }

    pub fn reset_focus(&mut self) {
        if self.focus.take().is_some() {
            debug!("Focus released");
        }
    }

    /// Last known pointer position in window coordinates.
    pub fn pointer(&self) -> Point {
        self.pointer
    }

    pub fn pointer_moved(&mut self, point: Point) {
        self.pointer = point;
    }

    /// Pointer pressed at window position `point`.
    pub fn mouse_down(&mut self, point: Point) {
        trace!("Pointer down at ({}, {})", point.x, point.y);
        self.pointer = point;
        self.route_mouse_down(self.root(), point);
    }

    /// Pointer released at window position `point`.
    pub fn mouse_up(&mut self, point: Point) {
        trace!("Pointer up at ({}, {})", point.x, point.y);
        self.pointer = point;
        self.route_mouse_up(self.root(), point);

        if let Some(focus) = self.focus {
            let local = point + self.translation(focus);
            self.route_mouse_up(focus, local);
        }
    }

    /// Key pressed; dropped unless a widget holds focus.
    pub fn key_down(&mut self, key: Key) {
        match self.focus.and_then(|id| self.nodes.get_mut(id)) {
            Some(node) => node.widget.key_down(key),
            None => trace!("Dropping {:?} without focus", key),
        }
    }

    /// Key released; dropped unless a widget holds focus.
    pub fn key_up(&mut self, key: Key) {
        match self.focus.and_then(|id| self.nodes.get_mut(id)) {
            Some(node) => node.widget.key_up(key),
            None => trace!("Dropping {:?} release without focus", key),
        }
    }

    fn route(&self, id: WidgetId) -> Option<Route> {
        self.widget(id).map(|widget| match widget {
            Widget::Panel(_) => Route::Panel,
            Widget::ScrollPanel(_) => Route::ScrollPanel,
            _ => Route::Leaf,
        })
    }

    /// First child of `id` containing `point`.
    fn hit_child(&self, id: WidgetId, point: Point) -> Option<WidgetId> {
        self.children(id)
            .iter()
            .copied()
            .find(|&child| self.bounds(child).is_some_and(|bounds| contains_point(bounds, point)))
    }

    /// Part of a scroll panel hit by `point`, with the point translated into
    /// that part's coordinate space.
    fn scroll_target(&self, id: WidgetId, point: Point) -> Option<(WidgetId, Point)> {
        let sp = self.get::<ScrollPanel>(id)?;
        let bounds = self.bounds(id)?;
        let parts = sp.parts();
        let on_bar = |bar: WidgetId| self.bounds(bar).is_some_and(|b| contains_point(b, point));

        if sp.scrolls_vertically() && on_bar(parts.vertical) {
            Some((parts.vertical, point))
        } else if sp.scrolls_horizontally() && on_bar(parts.horizontal) {
            Some((parts.horizontal, point))
        } else {
            sp.to_content(bounds, point).map(|local| (parts.content, local))
        }
    }

    fn route_mouse_down(&mut self, id: WidgetId, point: Point) {
        match self.route(id) {
            Some(Route::Panel) => {
                self.set_focus(id);
                if let Some(child) = self.hit_child(id, point) {
                    self.route_mouse_down(child, point);
                }
            }
            Some(Route::ScrollPanel) => {
                if let Some((part, local)) = self.scroll_target(id, point) {
                    self.route_mouse_down(part, local);
                }
            }
            Some(Route::Leaf) => {
                let node = &mut self.nodes[id];
                let result = node.widget.mouse_down(node.bounds, point);
                self.apply(id, result);
            }
            None => {}
        }
    }

    fn route_mouse_up(&mut self, id: WidgetId, point: Point) {
        match self.route(id) {
            Some(Route::Panel) => {
                if let Some(child) = self.hit_child(id, point) {
                    self.route_mouse_up(child, point);
                }
            }
            Some(Route::ScrollPanel) => {
                if let Some((part, local)) = self.scroll_target(id, point) {
                    self.route_mouse_up(part, local);
                }
            }
            Some(Route::Leaf) => {
                let focused = self.focus == Some(id);
                let node = &mut self.nodes[id];
                let result = node.widget.mouse_up(node.bounds, point, focused);
                self.apply(id, result);
            }
            None => {}
        }
    }

    fn apply(&mut self, id: WidgetId, result: PointerResult) {
        match result {
            PointerResult::Ignored => {}
            PointerResult::Focus => self.set_focus(id),
            PointerResult::Commit => {
                if self.focus == Some(id) {
                    self.reset_focus();
                }
                self.fire_actions(id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate alloc;

    use super::*;
    use crate::ui::components::{Button, CheckBox, Label, ScrollBar, Strut, TextBox};
    use crate::ui::core::Orientation;
    use crate::ui::layouts::Panel;
    use crate::ui::styling::GraphicsContext;
    use crate::ui::text::GlyphTable;
    use alloc::rc::Rc;
    use core::cell::Cell;
    use embedded_graphics::mono_font::ascii::FONT_6X10;
    use embedded_graphics::pixelcolor::Rgb565;
    use embedded_graphics::primitives::Rectangle;

    fn gc() -> GraphicsContext {
        GraphicsContext::new(GlyphTable::from_mono_font(&FONT_6X10, 10, Rgb565::BLACK).unwrap())
    }

    fn counter(ui: &mut Ui, id: WidgetId) -> Rc<Cell<u32>> {
        let count = Rc::new(Cell::new(0));
        let inner = count.clone();
        ui.add_action(id, move |_, _| inner.set(inner.get() + 1)).unwrap();
        count
    }

    fn click(ui: &mut Ui, point: Point) {
        ui.mouse_down(point);
        ui.mouse_up(point);
    }

    #[test]
    fn test_first_match_wins_on_shared_edge() {
        let gc = gc();
        let mut ui = Ui::new(Orientation::Vertical);
        let root = ui.root();
        let first = ui.insert(root, Button::new(&gc, "a")).unwrap();
        let second = ui.insert(root, Button::new(&gc, "b")).unwrap();
        let first_clicks = counter(&mut ui, first);
        let second_clicks = counter(&mut ui, second);

        // y = 16 is the first button's inclusive bottom edge and the second's top
        click(&mut ui, Point::new(3, 16));
        assert_eq!(first_clicks.get(), 1);
        assert_eq!(second_clicks.get(), 0);

        click(&mut ui, Point::new(3, 17));
        assert_eq!(second_clicks.get(), 1);
    }

    #[test]
    fn test_overlapping_siblings_follow_insertion_order() {
        let gc = gc();
        let mut ui = Ui::new(Orientation::Vertical);
        let root = ui.root();
        let under = ui.insert(root, Button::new(&gc, "under")).unwrap();
        let over = ui.insert(root, Button::new(&gc, "over")).unwrap();
        let bounds = ui.bounds(under).unwrap();
        ui.nodes[over].bounds = bounds;

        ui.mouse_down(bounds.center());
        assert!(ui.is_focused(under));
        assert!(!ui.is_focused(over));
    }

    #[test]
    fn test_release_elsewhere_still_commits() {
        let gc = gc();
        let mut ui = Ui::new(Orientation::Vertical);
        let root = ui.root();
        let button = ui.insert(root, Button::new(&gc, "drag")).unwrap();
        ui.insert(root, Strut::vertical(100)).unwrap();
        let clicks = counter(&mut ui, button);

        ui.mouse_down(Point::new(2, 2));
        assert_eq!(ui.focus(), Some(button));
        ui.mouse_up(Point::new(5, 90));
        assert_eq!(clicks.get(), 1);
        assert_eq!(ui.focus(), None);
    }

    #[test]
    fn test_unfocused_release_does_nothing() {
        let gc = gc();
        let mut ui = Ui::new(Orientation::Vertical);
        let root = ui.root();
        let check = ui.insert(root, CheckBox::new(&gc, "")).unwrap();
        let toggles = counter(&mut ui, check);

        ui.mouse_up(Point::new(5, 5));
        assert_eq!(toggles.get(), 0);
        assert!(!ui.get::<CheckBox>(check).unwrap().value());

        click(&mut ui, Point::new(5, 5));
        assert_eq!(toggles.get(), 1);
        assert!(ui.get::<CheckBox>(check).unwrap().value());
    }

    #[test]
    fn test_panel_claims_focus_for_passive_children() {
        let gc = gc();
        let mut ui = Ui::new(Orientation::Vertical);
        let root = ui.root();
        let row = ui.insert(root, Panel::horizontal()).unwrap();
        ui.insert(row, Label::new(&gc, "text")).unwrap();

        ui.mouse_down(Point::new(1, 1));
        assert_eq!(ui.focus(), Some(row));
        ui.mouse_up(Point::new(1, 1));
        assert_eq!(ui.focus(), Some(row));
    }

    #[test]
    fn test_keys_only_reach_focused_widget() {
        let gc = gc();
        let mut ui = Ui::new(Orientation::Vertical);
        let root = ui.root();
        let text_box = ui.insert(root, TextBox::new(&gc, 200, 50)).unwrap();

        ui.key_down(Key::Char('a'));
        assert_eq!(ui.get::<TextBox>(text_box).unwrap().value(), "");

        click(&mut ui, Point::new(5, 5));
        assert_eq!(ui.focus(), Some(text_box));
        for c in "hi 2".chars() {
            ui.key_down(Key::Char(c));
            ui.key_up(Key::Char(c));
        }
        ui.key_down(Key::Backspace);
        assert_eq!(ui.get::<TextBox>(text_box).unwrap().value(), "hi ");

        ui.reset_focus();
        ui.key_down(Key::Char('x'));
        assert_eq!(ui.get::<TextBox>(text_box).unwrap().value(), "hi ");
    }

    #[test]
    fn test_at_most_one_focus() {
        let gc = gc();
        let mut ui = Ui::new(Orientation::Horizontal);
        let root = ui.root();
        let ids = [
            ui.insert(root, Button::new(&gc, "a")).unwrap(),
            ui.insert(root, TextBox::new(&gc, 60, 10)).unwrap(),
            ui.insert(root, CheckBox::new(&gc, "c")).unwrap(),
        ];
        let points = [Point::new(2, 2), Point::new(40, 4), Point::new(100, 5), Point::new(300, 300)];
        for (i, &point) in points.iter().cycle().take(12).enumerate() {
            if i % 3 == 0 {
                ui.mouse_up(point);
            } else {
                ui.mouse_down(point);
            }
            let focused = ids.iter().filter(|&&id| ui.is_focused(id)).count();
            assert!(focused <= 1);
        }
    }

    #[test]
    fn test_scroll_bar_drag_moves_offset() {
        let gc = gc();
        let mut ui = Ui::new(Orientation::Vertical);
        let root = ui.root();
        ui.insert(root, Strut::vertical(20)).unwrap();
        let sp = ui
            .insert(root, ScrollPanel::new(&gc, 100, 100, Orientation::Vertical))
            .unwrap();
        ui.insert(sp, Strut::horizontal(50)).unwrap();
        ui.insert(sp, Strut::vertical(400)).unwrap();

        let parts = ui.get::<ScrollPanel>(sp).unwrap().parts();
        let bar = ui.bounds(parts.vertical).unwrap();
        assert_eq!(bar, Rectangle::new(Point::new(50, 20), Size::new(15, 100)));

        // Drag the thumb to the bottom, releasing outside the bar
        ui.mouse_down(Point::new(55, 30));
        assert_eq!(ui.focus(), Some(parts.vertical));
        ui.mouse_up(Point::new(5, 500));
        let scroll = ui.get::<ScrollPanel>(sp).unwrap();
        assert_eq!(scroll.y_offset(), 300);
        assert_eq!(ui.get::<ScrollBar>(parts.vertical).unwrap().value(), 300);

        for y in [-50, 20, 60, 119, 120, 121, 900] {
            ui.mouse_down(Point::new(55, 50));
            ui.mouse_up(Point::new(55, y));
            let scroll = ui.get::<ScrollPanel>(sp).unwrap();
            assert!(scroll.y_offset() <= 400 - 100);
            assert_eq!(scroll.x_offset(), 0);
        }
    }

    #[test]
    fn test_clicks_are_translated_into_scrolled_content() {
        let gc = gc();
        let mut ui = Ui::new(Orientation::Vertical);
        let root = ui.root();
        ui.insert(root, Strut::vertical(10)).unwrap();
        let sp = ui
            .insert(root, ScrollPanel::new(&gc, 100, 40, Orientation::Vertical))
            .unwrap();
        let buttons: [WidgetId; 5] =
            core::array::from_fn(|i| ui.insert(sp, Button::new(&gc, ["a", "b", "c", "d", "e"][i])).unwrap());
        let counts: [Rc<Cell<u32>>; 5] = core::array::from_fn(|i| counter(&mut ui, buttons[i]));

        // Unscrolled: the first button sits at the top of the viewport
        click(&mut ui, Point::new(3, 12));
        assert_eq!(counts[0].get(), 1);

        // Scroll by two buttons (16px each)
        ui.get_mut::<ScrollPanel>(sp).unwrap().set_y_offset(32);
        click(&mut ui, Point::new(3, 12));
        assert_eq!(counts[2].get(), 1);

        // Below the viewport nothing inside the content is hit
        click(&mut ui, Point::new(3, 60));
        assert_eq!(counts.iter().map(|c| c.get()).sum::<u32>(), 2);
    }
}
