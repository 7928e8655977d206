//! Invisible spacers

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::ui::core::{Interact, Paint, PaintCx};

/// Fixed gap along one axis; never paints and ignores input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strut {
    size: Size,
}

impl Strut {
    /// Gap of `height` pixels in a vertical panel.
    pub fn vertical(height: u32) -> Self {
        Self {
            size: Size::new(0, height),
        }
    }

    /// Gap of `width` pixels in a horizontal panel.
    pub fn horizontal(width: u32) -> Self {
        Self {
            size: Size::new(width, 0),
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }
}

impl Paint for Strut {
    fn paint<D: DrawTarget<Color = Rgb565>>(
        &self,
        _bounds: Rectangle,
        _cx: &PaintCx,
        _target: &mut D,
    ) -> Result<(), D::Error> {
        Ok(())
    }
}

impl Interact for Strut {}
