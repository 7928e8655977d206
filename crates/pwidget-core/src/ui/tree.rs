// src/ui/tree.rs
//! Arena-backed widget tree and its layout passes
//!
//! Nodes live in a [`SlotMap`] and refer to each other through [`WidgetId`]
//! handles: a node owns the ordered list of its children's ids and keeps a
//! plain id for its parent, used only for upward walks.
//!
//! # Layout
//!
//! Inserting a child runs two passes:
//!
//! 1. **Bubble up** ([`Ui::adjust_parent`]): starting at the container that
//!    changed, every container recomputes its own size from its children and
//!    hands over to its parent.
//! 2. **Push down** ([`Ui::adjust_children`]): from the top of the tree,
//!    every container places its children back to back along its main axis
//!    and stretches the ones that fill it (scroll wheels and scroll bars).
//!
//! Both passes run to completion inside the call that changed the tree, so
//! widgets added from a callback are laid out before the next paint.

extern crate alloc;

use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use log::{debug, trace};
use slotmap::{SlotMap, new_key_type};

use super::components::ScrollBar;
use super::core::Orientation;
use super::layouts::{Panel, ScrollPanel, ScrollParts};
use super::widget::{Widget, WidgetKind};
use crate::error::UiError;

new_key_type! {
    /// Stable handle to a node of a [`Ui`] tree
    pub struct WidgetId;
}

/// Callback run, in registration order, when a widget commits an interaction
pub type Callback = Box<dyn FnMut(&mut Ui, WidgetId)>;

pub(crate) struct Node {
    pub(crate) bounds: Rectangle,
    pub(crate) parent: Option<WidgetId>,
    pub(crate) children: Vec<WidgetId>,
    pub(crate) widget: Widget,
    pub(crate) name: String,
    pub(crate) actions: Vec<Callback>,
}

impl Node {
    fn new(widget: Widget, name: String) -> Self {
        Self {
            bounds: Rectangle::new(Point::zero(), widget.intrinsic_size()),
            parent: None,
            children: Vec::new(),
            widget,
            name,
            actions: Vec::new(),
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("name", &self.name)
            .field("kind", &self.widget.kind())
            .field("bounds", &self.bounds)
            .field("children", &self.children)
            .field("actions", &self.actions.len())
            .finish()
    }
}

/// Widget tree rooted at a panel covering the window
///
/// Besides the nodes, the tree owns the single focus reference and the last
/// known pointer position, so routing and painting need nothing else.
pub struct Ui {
    pub(crate) nodes: SlotMap<WidgetId, Node>,
    root: WidgetId,
    pub(crate) focus: Option<WidgetId>,
    pub(crate) pointer: Point,
}

impl fmt::Debug for Ui {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ui")
            .field("root", &self.root)
            .field("nodes", &self.nodes.len())
            .field("focus", &self.focus)
            .field("pointer", &self.pointer)
            .finish()
    }
}

impl Ui {
    /// Empty tree whose root panel stacks along `orientation`.
    pub fn new(orientation: Orientation) -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(Node::new(
            Widget::Panel(Panel::new(orientation)),
            String::from("Main Panel"),
        ));
        Self {
            nodes,
            root,
            focus: None,
            pointer: Point::zero(),
        }
    }

    pub fn root(&self) -> WidgetId {
        self.root
    }

    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    /// Add a detached widget sized to its intrinsic size.
    pub fn create(&mut self, widget: impl Into<Widget>) -> WidgetId {
        let widget = widget.into();
        let name = String::from(widget.kind());
        self.create_named(widget, name)
    }

    /// Like [`create`](Self::create), with a name shown in logs.
    pub fn create_named(&mut self, widget: impl Into<Widget>, name: impl Into<String>) -> WidgetId {
        let name = name.into();
        let widget = widget.into();
        let scroll = match &widget {
            Widget::ScrollPanel(sp) => Some((sp.gc().clone(), sp.orientation())),
            _ => None,
        };
        debug!("Creating {} '{}'", widget.kind(), name);
        let id = self.nodes.insert(Node::new(widget, name.clone()));

        if let Some((gc, orientation)) = scroll {
            let parts = ScrollParts {
                content: self.create_named(Panel::new(orientation), format!("{}_main_panel", name)),
                vertical: self.create_named(
                    ScrollBar::vertical(&gc, 0),
                    format!("{}_vertical_scroll", name),
                ),
                horizontal: self.create_named(
                    ScrollBar::horizontal(&gc, 0),
                    format!("{}_horizontal_scroll", name),
                ),
            };
            for part in [parts.content, parts.vertical, parts.horizontal] {
                self.nodes[part].parent = Some(id);
                // Bars stay out of the way until the content overflows
                self.nodes[part].bounds = Rectangle::zero();
                self.nodes[id].children.push(part);
            }
            if let Some(sp) = self.get_mut::<ScrollPanel>(id) {
                sp.set_parts(parts);
            }
        }
        id
    }

    /// Append `child` to `parent` and re-run layout.
    ///
    /// Adding to a scroll panel adds to its nested panel. The root panel
    /// counts as attached and cannot be added anywhere.
    pub fn add_component(&mut self, parent: WidgetId, child: WidgetId) -> Result<(), UiError> {
        if parent == child {
            return Err(UiError::SelfContainment(child));
        }
        let parent_node = self.nodes.get(parent).ok_or(UiError::UnknownWidget(parent))?;
        let child_node = self.nodes.get(child).ok_or(UiError::UnknownWidget(child))?;
        if child_node.parent.is_some() || child == self.root {
            return Err(UiError::AlreadyAttached(child));
        }

        let target = match &parent_node.widget {
            Widget::Panel(_) => parent,
            Widget::ScrollPanel(sp) => sp.parts().content,
            _ => return Err(UiError::NotAContainer(parent)),
        };
        if self.ancestors(target).any(|id| id == child) {
            return Err(UiError::Cycle { parent, child });
        }

        self.attach(target, child);
        self.adjust_parent(target);
        Ok(())
    }

    /// Create `widget` and append it to `parent` in one step.
    pub fn insert(
        &mut self,
        parent: WidgetId,
        widget: impl Into<Widget>,
    ) -> Result<WidgetId, UiError> {
        let id = self.create(widget);
        if let Err(err) = self.add_component(parent, id) {
            self.discard(id);
            return Err(err);
        }
        Ok(id)
    }

    fn attach(&mut self, panel_id: WidgetId, child: WidgetId) {
        let panel_node = &self.nodes[panel_id];
        let Widget::Panel(panel) = &panel_node.widget else {
            return;
        };
        let last = panel_node.children.last().map(|&last| self.nodes[last].bounds);
        let position = panel.next_position(panel_node.bounds.top_left, last);

        debug!(
            "Adding '{}' to '{}' at ({}, {})",
            self.nodes[child].name, panel_node.name, position.x, position.y
        );
        let child_node = &mut self.nodes[child];
        child_node.bounds.top_left = position;
        child_node.parent = Some(panel_id);
        self.nodes[panel_id].children.push(child);
    }

    /// Remove a detached subtree.
    fn discard(&mut self, id: WidgetId) {
        if let Some(node) = self.nodes.remove(id) {
            for child in node.children {
                self.discard(child);
            }
        }
    }

    // -----------------------------------------------------------------------
    // Access
    // -----------------------------------------------------------------------

    pub fn contains(&self, id: WidgetId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Number of nodes, including the root and scroll panel parts.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn widget(&self, id: WidgetId) -> Option<&Widget> {
        self.nodes.get(id).map(|node| &node.widget)
    }

    /// Typed view of a node's widget, `None` for unknown ids or other kinds.
    pub fn get<T: WidgetKind>(&self, id: WidgetId) -> Option<&T> {
        self.widget(id).and_then(T::from_widget)
    }

    /// Mutable typed view of a node's widget.
    ///
    /// Changes that alter a widget's size should go through
    /// [`set_text`](Self::set_text) so layout is re-run.
    pub fn get_mut<T: WidgetKind>(&mut self, id: WidgetId) -> Option<&mut T> {
        self.nodes
            .get_mut(id)
            .and_then(|node| T::from_widget_mut(&mut node.widget))
    }

    /// Bounds in the coordinate space of the closest enclosing scroll
    /// panel's content, or the window.
    pub fn bounds(&self, id: WidgetId) -> Option<Rectangle> {
        self.nodes.get(id).map(|node| node.bounds)
    }

    pub fn parent(&self, id: WidgetId) -> Option<WidgetId> {
        self.nodes.get(id).and_then(|node| node.parent)
    }

    pub fn children(&self, id: WidgetId) -> &[WidgetId] {
        self.nodes
            .get(id)
            .map(|node| node.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn name(&self, id: WidgetId) -> Option<&str> {
        self.nodes.get(id).map(|node| node.name.as_str())
    }

    /// `id` followed by its parent, grandparent and so on.
    pub fn ancestors(&self, id: WidgetId) -> impl Iterator<Item = WidgetId> + '_ {
        core::iter::successors(self.contains(id).then_some(id), move |&id| self.parent(id))
    }

    /// Offset turning a window position into the coordinate space `id` lives
    /// in. Non-zero only inside scroll panels.
    pub fn translation(&self, id: WidgetId) -> Point {
        let mut translation = Point::zero();
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            if let Some(Widget::ScrollPanel(sp)) = self.widget(parent)
                && sp.parts().content == current
            {
                let origin = self.nodes[parent].bounds.top_left;
                translation += Point::new(sp.x_offset() as i32, sp.y_offset() as i32) - origin;
            }
            current = parent;
        }
        translation
    }

    /// Replace the text of a label or button, resizing it and re-running
    /// layout from its parent.
    pub fn set_text(&mut self, id: WidgetId, text: impl Into<String>) -> Result<(), UiError> {
        let node = self.nodes.get_mut(id).ok_or(UiError::UnknownWidget(id))?;
        match &mut node.widget {
            Widget::Label(label) => label.set_value(text.into()),
            Widget::Button(button) => button.set_value(text.into()),
            _ => return Err(UiError::NoText(id)),
        }
        node.bounds.size = node.widget.intrinsic_size();
        if let Some(parent) = node.parent {
            self.adjust_parent(parent);
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Callbacks
    // -----------------------------------------------------------------------

    /// Register a callback run each time `id` commits an interaction.
    pub fn add_action<F>(&mut self, id: WidgetId, action: F) -> Result<(), UiError>
    where
        F: FnMut(&mut Ui, WidgetId) + 'static,
    {
        let node = self.nodes.get_mut(id).ok_or(UiError::UnknownWidget(id))?;
        node.actions.push(Box::new(action));
        Ok(())
    }

    /// Run the callbacks of `id` in registration order.
    ///
    /// Callbacks may change the tree freely, including registering more
    /// callbacks on `id`; those run from the next commit on.
    pub(crate) fn fire_actions(&mut self, id: WidgetId) {
        let Some(node) = self.nodes.get_mut(id) else {
            return;
        };
        let mut actions = core::mem::take(&mut node.actions);
        debug!("Running {} callbacks of '{}'", actions.len(), node.name);

        for action in actions.iter_mut() {
            action(self, id);
        }

        if let Some(node) = self.nodes.get_mut(id) {
            let added = core::mem::replace(&mut node.actions, actions);
            node.actions.extend(added);
        }
    }

    // -----------------------------------------------------------------------
    // Layout
    // -----------------------------------------------------------------------

    /// Size `id` takes up inside a panel. Widgets that stretch across a panel
    /// report their intrinsic size so they never feed back into it.
    fn layout_size(&self, id: WidgetId) -> Size {
        let node = &self.nodes[id];
        match node.widget.stretch() {
            Some(_) => node.widget.intrinsic_size(),
            None => node.bounds.size,
        }
    }

    /// Resize `id` and every container above it from their children, then
    /// lay the whole tree out again from the top.
    pub fn adjust_parent(&mut self, id: WidgetId) {
        let mut current = id;
        loop {
            self.fit_to_children(current);
            match self.parent(current) {
                Some(parent) => current = parent,
                None => break,
            }
        }
        self.adjust_children(current);
    }

    fn fit_to_children(&mut self, id: WidgetId) {
        let Some(node) = self.nodes.get(id) else {
            return;
        };
        match &node.widget {
            Widget::Panel(panel) => {
                let size = panel.measure(node.children.iter().map(|&child| self.layout_size(child)));
                trace!("Panel '{}' fits to {}x{}", node.name, size.width, size.height);
                self.nodes[id].bounds.size = size;
            }
            Widget::ScrollPanel(_) => self.fit_scroll_panel(id),
            _ => {}
        }
    }

    fn fit_scroll_panel(&mut self, id: WidgetId) {
        let Some(parts) = self.get::<ScrollPanel>(id).map(ScrollPanel::parts) else {
            return;
        };
        let content = self.nodes[parts.content].bounds.size;
        let Some(sp) = self.get_mut::<ScrollPanel>(id) else {
            return;
        };

        let enabled = sp.enable_for(content);
        let size = sp.size_for(content);
        let viewport = sp.viewport(size);
        sp.set_range(content, viewport);
        let range = sp.range();
        self.nodes[id].bounds.size = size;

        if let Some(bar) = self.get_mut::<ScrollBar>(parts.vertical) {
            bar.set_maximum(range.height);
        }
        if let Some(bar) = self.get_mut::<ScrollBar>(parts.horizontal) {
            bar.set_maximum(range.width);
        }

        if enabled.vertical {
            debug!("Enabling vertical scrolling of '{}'", self.nodes[id].name);
            self.nodes[parts.vertical].actions.push(Box::new(move |ui: &mut Ui, bar: WidgetId| {
                if let Some(value) = ui.get::<ScrollBar>(bar).map(ScrollBar::value)
                    && let Some(sp) = ui.get_mut::<ScrollPanel>(id)
                {
                    sp.set_y_offset(value);
                }
            }));
        }
        if enabled.horizontal {
            debug!("Enabling horizontal scrolling of '{}'", self.nodes[id].name);
            self.nodes[parts.horizontal].actions.push(Box::new(move |ui: &mut Ui, bar: WidgetId| {
                if let Some(value) = ui.get::<ScrollBar>(bar).map(ScrollBar::value)
                    && let Some(sp) = ui.get_mut::<ScrollPanel>(id)
                {
                    sp.set_x_offset(value);
                }
            }));
        }
    }

    /// Place the children of `id` and, recursively, of every container
    /// below it.
    pub fn adjust_children(&mut self, id: WidgetId) {
        let Some(node) = self.nodes.get(id) else {
            return;
        };
        let bounds = node.bounds;

        match &node.widget {
            Widget::Panel(panel) => {
                let panel = *panel;
                let children = node.children.clone();
                let sizes: Vec<Size> = children.iter().map(|&child| self.layout_size(child)).collect();
                let positions = panel.arrange(bounds.top_left, sizes.iter().copied());

                for ((&child, position), size) in children.iter().zip(positions).zip(sizes.iter()) {
                    let child_node = &mut self.nodes[child];
                    let size = match child_node.widget.stretch() {
                        Some(axis) => panel.stretch(*size, axis, bounds.size),
                        None => *size,
                    };
                    child_node.bounds = Rectangle::new(position, size);
                }
                for child in children {
                    self.adjust_children(child);
                }
            }
            Widget::ScrollPanel(sp) => {
                let parts = sp.parts();
                let vertical = if sp.scrolls_vertically() {
                    sp.vertical_bar_bounds(bounds)
                } else {
                    Rectangle::new(bounds.top_left, Size::zero())
                };
                let horizontal = if sp.scrolls_horizontally() {
                    sp.horizontal_bar_bounds(bounds)
                } else {
                    Rectangle::new(bounds.top_left, Size::zero())
                };

                self.nodes[parts.vertical].bounds = vertical;
                self.nodes[parts.horizontal].bounds = horizontal;
                self.nodes[parts.content].bounds.top_left = Point::zero();
                self.adjust_children(parts.content);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::{Button, Label, ScrollWheel, Strut};
    use crate::ui::styling::GraphicsContext;
    use crate::ui::text::GlyphTable;
    use alloc::rc::Rc;
    use alloc::vec;
    use core::cell::RefCell;
    use embedded_graphics::mono_font::ascii::FONT_6X10;
    use embedded_graphics::pixelcolor::Rgb565;

    fn gc() -> GraphicsContext {
        GraphicsContext::new(GlyphTable::from_mono_font(&FONT_6X10, 10, Rgb565::BLACK).unwrap())
    }

    fn size(ui: &Ui, id: WidgetId) -> Size {
        ui.bounds(id).unwrap().size
    }

    /// Children of `id` are back to back along the main axis, in order.
    fn assert_contiguous(ui: &Ui, id: WidgetId, orientation: Orientation) {
        let origin = ui.bounds(id).unwrap().top_left;
        let mut cursor = origin;
        for &child in ui.children(id) {
            let bounds = ui.bounds(child).unwrap();
            assert_eq!(bounds.top_left, cursor, "child '{}' misplaced", ui.name(child).unwrap());
            match orientation {
                Orientation::Vertical => cursor.y += bounds.size.height as i32,
                Orientation::Horizontal => cursor.x += bounds.size.width as i32,
            }
        }
    }

    #[test]
    fn test_vertical_panel_sums_heights() {
        let gc = gc();
        let mut ui = Ui::new(Orientation::Vertical);
        let root = ui.root();
        let a = ui.insert(root, Label::new(&gc, "hello")).unwrap();
        let b = ui.insert(root, Button::new(&gc, "go")).unwrap();
        let c = ui.insert(root, Strut::vertical(7)).unwrap();

        let expected_height = size(&ui, a).height + size(&ui, b).height + 7;
        let expected_width = size(&ui, a).width.max(size(&ui, b).width);
        assert_eq!(size(&ui, root), Size::new(expected_width, expected_height));
        assert_eq!(size(&ui, c), Size::new(0, 7));
        assert_contiguous(&ui, root, Orientation::Vertical);
    }

    #[test]
    fn test_horizontal_panel_sums_widths() {
        let gc = gc();
        let mut ui = Ui::new(Orientation::Horizontal);
        let root = ui.root();
        for text in ["a", "bbb", "cc"] {
            ui.insert(root, Button::new(&gc, text)).unwrap();
        }
        let widths: u32 = ui.children(root).iter().map(|&c| size(&ui, c).width).sum();
        assert_eq!(size(&ui, root).width, widths);
        assert_eq!(size(&ui, root).height, 16);
        assert_contiguous(&ui, root, Orientation::Horizontal);
    }

    #[test]
    fn test_nested_growth_reflows_siblings() {
        let gc = gc();
        let mut ui = Ui::new(Orientation::Vertical);
        let root = ui.root();
        let row = ui.insert(root, Panel::horizontal()).unwrap();
        let below = ui.insert(root, Label::new(&gc, "below")).unwrap();
        assert_eq!(ui.bounds(below).unwrap().top_left, Point::zero());

        // Growing the nested row pushes the label down
        let button = ui.insert(row, Button::new(&gc, "ok")).unwrap();
        assert_eq!(ui.bounds(below).unwrap().top_left, Point::new(0, 16));
        assert_eq!(ui.bounds(button).unwrap().top_left, Point::zero());

        ui.insert(row, Label::new(&gc, "x")).unwrap();
        assert_contiguous(&ui, row, Orientation::Horizontal);
        assert_contiguous(&ui, root, Orientation::Vertical);
        assert_eq!(size(&ui, root).height, 16 + 10);
    }

    #[test]
    fn test_detached_subtree_is_laid_out_on_attach() {
        let gc = gc();
        let mut ui = Ui::new(Orientation::Vertical);
        let root = ui.root();
        ui.insert(root, Label::new(&gc, "top")).unwrap();

        let column = ui.create(Panel::vertical());
        let first = ui.insert(column, Label::new(&gc, "one")).unwrap();
        let second = ui.insert(column, Label::new(&gc, "two")).unwrap();
        ui.add_component(root, column).unwrap();

        assert_eq!(ui.bounds(first).unwrap().top_left, Point::new(0, 10));
        assert_eq!(ui.bounds(second).unwrap().top_left, Point::new(0, 20));
    }

    #[test]
    fn test_malformed_trees_are_rejected() {
        let gc = gc();
        let mut ui = Ui::new(Orientation::Vertical);
        let root = ui.root();
        let outer = ui.insert(root, Panel::vertical()).unwrap();
        let inner = ui.insert(outer, Panel::horizontal()).unwrap();
        let label = ui.insert(inner, Label::new(&gc, "leaf")).unwrap();

        assert_eq!(ui.add_component(outer, outer), Err(UiError::SelfContainment(outer)));
        assert_eq!(ui.add_component(root, inner), Err(UiError::AlreadyAttached(inner)));
        assert_eq!(ui.add_component(inner, root), Err(UiError::AlreadyAttached(root)));

        let loose = ui.create(Panel::vertical());
        let nested = ui.insert(loose, Panel::vertical()).unwrap();
        assert_eq!(
            ui.add_component(nested, loose),
            Err(UiError::Cycle {
                parent: nested,
                child: loose
            })
        );

        let before = ui.len();
        assert_eq!(
            ui.insert(label, Strut::vertical(1)).map(|_| ()),
            Err(UiError::NotAContainer(label))
        );
        assert_eq!(ui.len(), before);
    }

    #[test]
    fn test_set_text_resizes_and_relays_out() {
        let gc = gc();
        let mut ui = Ui::new(Orientation::Horizontal);
        let root = ui.root();
        let label = ui.insert(root, Label::new(&gc, "ab")).unwrap();
        let after = ui.insert(root, Label::new(&gc, "z")).unwrap();
        assert_eq!(ui.bounds(after).unwrap().top_left.x, 21);

        ui.set_text(label, "abcd").unwrap();
        assert_eq!(ui.get::<Label>(label).unwrap().value(), "abcd");
        assert_eq!(ui.bounds(after).unwrap().top_left.x, 43);
        assert_eq!(ui.set_text(root, "nope"), Err(UiError::NoText(root)));
    }

    #[test]
    fn test_wheels_fill_the_cross_axis() {
        let gc = gc();
        let mut ui = Ui::new(Orientation::Horizontal);
        let root = ui.root();
        let wheel = ui.insert(root, ScrollWheel::vertical(&gc, 3)).unwrap();
        let tall = ui.insert(root, Strut::vertical(80)).unwrap();

        assert_eq!(size(&ui, wheel), Size::new(20, 80));
        assert_eq!(size(&ui, root), Size::new(20, 80));
        assert_eq!(ui.bounds(tall).unwrap().top_left, Point::new(20, 0));

        // Relayout does not feed the stretched wheel back into the panel
        ui.insert(root, Strut::horizontal(5)).unwrap();
        assert_eq!(size(&ui, root), Size::new(25, 80));
    }

    #[test]
    fn test_scroll_panel_enables_bars_when_overflowing() {
        let gc = gc();
        let mut ui = Ui::new(Orientation::Vertical);
        let root = ui.root();
        let sp = ui
            .insert(root, ScrollPanel::new(&gc, 100, 50, Orientation::Vertical))
            .unwrap();
        let parts = ui.get::<ScrollPanel>(sp).unwrap().parts();

        ui.insert(sp, Strut::vertical(30)).unwrap();
        assert!(!ui.get::<ScrollPanel>(sp).unwrap().scrolls_vertically());
        assert_eq!(size(&ui, sp), Size::new(0, 30));

        ui.insert(sp, Strut::vertical(90)).unwrap();
        let scroll = ui.get::<ScrollPanel>(sp).unwrap();
        assert!(scroll.scrolls_vertically());
        assert_eq!(size(&ui, parts.content), Size::new(0, 120));
        assert_eq!(size(&ui, sp), Size::new(15, 50));
        assert_eq!(scroll.range(), Size::new(0, 70));
        assert_eq!(ui.get::<ScrollBar>(parts.vertical).unwrap().maximum(), 70);
        assert_eq!(
            ui.bounds(parts.vertical).unwrap(),
            Rectangle::new(Point::new(0, 0), Size::new(15, 50))
        );
        // Ancestors see the new size
        assert_eq!(size(&ui, root), Size::new(15, 50));
        assert_eq!(ui.parent(parts.content), Some(sp));
    }

    #[test]
    fn test_translation_through_scroll_panel() {
        let gc = gc();
        let mut ui = Ui::new(Orientation::Vertical);
        let root = ui.root();
        ui.insert(root, Strut::vertical(40)).unwrap();
        let sp = ui
            .insert(root, ScrollPanel::new(&gc, 100, 50, Orientation::Vertical))
            .unwrap();
        let button = ui.insert(sp, Button::new(&gc, "deep")).unwrap();
        ui.insert(sp, Strut::vertical(200)).unwrap();
        ui.get_mut::<ScrollPanel>(sp).unwrap().set_y_offset(12);

        assert_eq!(ui.translation(root), Point::zero());
        assert_eq!(ui.translation(sp), Point::zero());
        assert_eq!(ui.translation(button), Point::new(0, 12 - 40));
        let vertical = ui.get::<ScrollPanel>(sp).unwrap().parts().vertical;
        assert_eq!(ui.translation(vertical), Point::zero());
    }

    #[test]
    fn test_callbacks_run_in_order_and_may_add_more() {
        let mut ui = Ui::new(Orientation::Vertical);
        let root = ui.root();
        let log = Rc::new(RefCell::new(vec![]));

        let first = log.clone();
        ui.add_action(root, move |ui, id| {
            first.borrow_mut().push(1);
            let late = first.clone();
            ui.add_action(id, move |_, _| late.borrow_mut().push(3)).unwrap();
        })
        .unwrap();
        let second = log.clone();
        ui.add_action(root, move |_, _| second.borrow_mut().push(2)).unwrap();

        ui.fire_actions(root);
        assert_eq!(*log.borrow(), vec![1, 2]);

        log.borrow_mut().clear();
        ui.fire_actions(root);
        // The callback registered during the first run now runs after the
        // original two, and the first callback registers another one
        assert_eq!(*log.borrow(), vec![1, 2, 3]);
    }
}
