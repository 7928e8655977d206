// src/ui/components/mod.rs
//! Leaf widgets

pub mod button;
pub mod checkbox;
pub mod label;
pub mod paragraph;
pub mod scroll_bar;
pub mod scroll_wheel;
pub mod selector;
pub mod strut;
pub mod text_box;

pub use button::Button;
pub use checkbox::CheckBox;
pub use label::Label;
pub use paragraph::Paragraph;
pub use scroll_bar::{BAR_THICKNESS, DEFAULT_THUMB, ScrollBar};
pub use scroll_wheel::{ScrollWheel, WHEEL_THICKNESS};
pub use selector::Selector;
pub use strut::Strut;
pub use text_box::{DEFAULT_MAX_LENGTH, TextBox};
