//! Color constants for widget painting
//!
//! All colors are RGB565. To convert from 8-bit RGB: R>>3, G>>2, B>>3.

use embedded_graphics::pixelcolor::Rgb565;

/// Color key marking transparent pixels in off-screen surfaces (magenta)
pub const TRANSPARENT: Rgb565 = Rgb565::new(255 >> 3, 0, 255 >> 3);

/// Pure white, also the window clear color
pub const WHITE: Rgb565 = Rgb565::new(31, 63, 31);

/// Pure black
pub const BLACK: Rgb565 = Rgb565::new(0, 0, 0);

/// Default border color
pub const DEFAULT_BORDER: Rgb565 = BLACK;

/// Default widget background - medium gray
pub const DEFAULT_BACKGROUND: Rgb565 = Rgb565::new(150 >> 3, 150 >> 2, 150 >> 3);

/// Default text box cursor - light gray
pub const DEFAULT_CURSOR: Rgb565 = Rgb565::new(200 >> 3, 200 >> 2, 200 >> 3);

/// Default foreground (check marks, scroll arrows)
pub const DEFAULT_FOREGROUND: Rgb565 = WHITE;
