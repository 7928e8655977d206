//! Retained-mode widget toolkit over embedded-graphics
//!
//! Widgets live in an arena-backed tree ([`ui::Ui`]) laid out by linear
//! panels, receive pointer and key input through a single focus reference,
//! and paint themselves with bitmap glyph fonts onto any
//! `DrawTarget<Color = Rgb565>`. A [`window::Window`] drives the tree frame
//! by frame through a platform [`window::Host`].
//!
//! It is `#![no_std]` with `extern crate alloc` so it compiles for embedded
//! targets as well as desktop hosts (for the simulator and tests).

#![no_std]

extern crate alloc;

pub mod config;
pub mod error;
pub mod surface;
pub mod ui;
pub mod window;

pub use config::WindowConfig;
pub use error::UiError;
pub use surface::Surface;
pub use window::{Action, FrameOutcome, Host, Window, WindowState};
