// src/ui/layouts/mod.rs
//! Container widgets arranging other widgets

pub mod panel;
pub mod scroll_panel;

pub use panel::Panel;
pub use scroll_panel::{Enabled, ScrollPanel, ScrollParts};
