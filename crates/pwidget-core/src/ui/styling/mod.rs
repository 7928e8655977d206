//! Styling shared by every widget
//!
//! - [`colors`] - color constants, including the transparent key
//! - [`context`] - the [`GraphicsContext`] handed to widget constructors

pub mod colors;
pub mod context;

pub use colors::{
    BLACK, DEFAULT_BACKGROUND, DEFAULT_BORDER, DEFAULT_CURSOR, DEFAULT_FOREGROUND, TRANSPARENT,
    WHITE,
};
pub use context::GraphicsContext;
