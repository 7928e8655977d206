//! Window configuration

use serde::Deserialize;

use crate::ui::core::Orientation;

/// Size, root orientation and frame rate of a window
///
/// Deserializable so hosts can read it from their own config files; missing
/// fields fall back to the defaults (500x500, vertical, 30 fps).
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub orientation: Orientation,
    pub fps: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 500,
            height: 500,
            orientation: Orientation::Vertical,
            fps: 30,
        }
    }
}

impl WindowConfig {
    pub fn new(width: u32, height: u32, orientation: Orientation) -> Self {
        Self {
            width,
            height,
            orientation,
            ..Self::default()
        }
    }
}
