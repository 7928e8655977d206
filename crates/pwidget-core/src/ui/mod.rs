// src/ui/mod.rs
//! Widget toolkit
//!
//! This module provides:
//! - Core traits and input types shared by every widget
//! - An arena-backed widget tree with linear panel layout
//! - Focus tracking and pointer/key routing
//! - Scroll panels clipping a nested panel to a viewport
//! - Leaf widgets (labels, paragraphs, buttons, checkboxes, selectors,
//!   scroll wheels, scroll bars, text boxes, struts)
//! - Bitmap glyph text rendering

pub mod components;
pub mod core;
pub mod layouts;
mod paint;
mod routing;
pub mod styling;
pub mod text;
pub mod tree;
pub mod widget;

// Re-export commonly used items
pub use components::{
    Button, CheckBox, Label, Paragraph, ScrollBar, ScrollWheel, Selector, Strut, TextBox,
};
pub use self::core::{InputEvent, Interact, Key, Orientation, Paint, PaintCx, PointerResult};
pub use layouts::{Panel, ScrollPanel};
pub use styling::GraphicsContext;
pub use text::GlyphTable;
pub use tree::{Callback, Ui, WidgetId};
pub use widget::{Widget, WidgetKind};
