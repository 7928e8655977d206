// src/ui/widget.rs
//! Closed set of widget kinds stored in the tree
//!
//! Every node of the [`Ui`](super::Ui) arena holds one [`Widget`]. Using an
//! enum instead of `dyn` trait objects keeps dispatch static and lets the
//! tree treat containers specially during layout, routing and painting.
//! Typed access to a node's widget goes through [`WidgetKind`], e.g.
//! `ui.get::<Button>(id)`.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use super::components::{
    Button, CheckBox, Label, Paragraph, ScrollBar, ScrollWheel, Selector, Strut, TextBox,
};
use super::core::{Interact, Key, Orientation, Paint, PaintCx, PointerResult};
use super::layouts::{Panel, ScrollPanel};

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

/// One of the widget kinds a tree node can hold.
///
/// When adding a new widget, add a variant here and extend the delegation
/// below.
#[derive(Debug, Clone)]
pub enum Widget {
    Panel(Panel),
    ScrollPanel(ScrollPanel),
    Label(Label),
    Paragraph(Paragraph),
    Button(Button),
    CheckBox(CheckBox),
    Selector(Selector),
    ScrollWheel(ScrollWheel),
    ScrollBar(ScrollBar),
    TextBox(TextBox),
    Strut(Strut),
}

impl Widget {
    /// Short kind name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Widget::Panel(_) => "Panel",
            Widget::ScrollPanel(_) => "ScrollPanel",
            Widget::Label(_) => "Label",
            Widget::Paragraph(_) => "Paragraph",
            Widget::Button(_) => "Button",
            Widget::CheckBox(_) => "CheckBox",
            Widget::Selector(_) => "Selector",
            Widget::ScrollWheel(_) => "ScrollWheel",
            Widget::ScrollBar(_) => "ScrollBar",
            Widget::TextBox(_) => "TextBox",
            Widget::Strut(_) => "Strut",
        }
    }

    /// Size the widget asks for before any layout pass touches it.
    pub fn intrinsic_size(&self) -> Size {
        match self {
            Widget::Panel(_) | Widget::ScrollPanel(_) => Size::zero(),
            Widget::Label(w) => w.size(),
            Widget::Paragraph(w) => w.size(),
            Widget::Button(w) => w.size(),
            Widget::CheckBox(w) => w.size(),
            Widget::Selector(w) => w.size(),
            Widget::ScrollWheel(w) => w.size(),
            Widget::ScrollBar(w) => w.size(),
            Widget::TextBox(w) => w.size(),
            Widget::Strut(w) => w.size(),
        }
    }

    /// Axis along which the widget fills its parent panel, if any.
    pub fn stretch(&self) -> Option<Orientation> {
        match self {
            Widget::ScrollWheel(w) => Some(w.orientation()),
            Widget::ScrollBar(w) => Some(w.orientation()),
            _ => None,
        }
    }
}

impl Paint for Widget {
    /// Containers paint nothing here; the tree paints their children.
    fn paint<D: DrawTarget<Color = Rgb565>>(
        &self,
        bounds: Rectangle,
        cx: &PaintCx,
        target: &mut D,
    ) -> Result<(), D::Error> {
        match self {
            Widget::Panel(_) | Widget::ScrollPanel(_) | Widget::Strut(_) => Ok(()),
            Widget::Label(w) => w.paint(bounds, cx, target),
            Widget::Paragraph(w) => w.paint(bounds, cx, target),
            Widget::Button(w) => w.paint(bounds, cx, target),
            Widget::CheckBox(w) => w.paint(bounds, cx, target),
            Widget::Selector(w) => w.paint(bounds, cx, target),
            Widget::ScrollWheel(w) => w.paint(bounds, cx, target),
            Widget::ScrollBar(w) => w.paint(bounds, cx, target),
            Widget::TextBox(w) => w.paint(bounds, cx, target),
        }
    }
}

impl Interact for Widget {
    fn mouse_down(&mut self, bounds: Rectangle, point: Point) -> PointerResult {
        match self {
            Widget::Button(w) => w.mouse_down(bounds, point),
            Widget::CheckBox(w) => w.mouse_down(bounds, point),
            Widget::Selector(w) => w.mouse_down(bounds, point),
            Widget::ScrollWheel(w) => w.mouse_down(bounds, point),
            Widget::ScrollBar(w) => w.mouse_down(bounds, point),
            Widget::TextBox(w) => w.mouse_down(bounds, point),
            _ => PointerResult::Ignored,
        }
    }

    fn mouse_up(&mut self, bounds: Rectangle, point: Point, focused: bool) -> PointerResult {
        match self {
            Widget::Button(w) => w.mouse_up(bounds, point, focused),
            Widget::CheckBox(w) => w.mouse_up(bounds, point, focused),
            Widget::Selector(w) => w.mouse_up(bounds, point, focused),
            Widget::ScrollWheel(w) => w.mouse_up(bounds, point, focused),
            Widget::ScrollBar(w) => w.mouse_up(bounds, point, focused),
            _ => PointerResult::Ignored,
        }
    }

    fn key_down(&mut self, key: Key) {
        if let Widget::TextBox(w) = self {
            w.key_down(key);
        }
    }
}

// ---------------------------------------------------------------------------
// Typed access
// ---------------------------------------------------------------------------

/// Concrete widget types that can be pulled back out of a [`Widget`].
pub trait WidgetKind: Sized {
    fn from_widget(widget: &Widget) -> Option<&Self>;
    fn from_widget_mut(widget: &mut Widget) -> Option<&mut Self>;
}

macro_rules! widget_kind {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Widget {
                fn from(widget: $variant) -> Self {
                    Widget::$variant(widget)
                }
            }

            impl WidgetKind for $variant {
                fn from_widget(widget: &Widget) -> Option<&Self> {
                    match widget {
                        Widget::$variant(w) => Some(w),
                        _ => None,
                    }
                }

                fn from_widget_mut(widget: &mut Widget) -> Option<&mut Self> {
                    match widget {
                        Widget::$variant(w) => Some(w),
                        _ => None,
                    }
                }
            }
        )*
    };
}

widget_kind!(
    Panel,
    ScrollPanel,
    Label,
    Paragraph,
    Button,
    CheckBox,
    Selector,
    ScrollWheel,
    ScrollBar,
    TextBox,
    Strut,
);
