//! Heap-backed off-screen pixel buffer with a transparent color key.
//!
//! Every frame is painted into a [`Surface`] before it is handed to the host,
//! and the same type backs glyph tiles, pre-rendered paragraphs and the
//! scroll panel's content buffer. Pixels equal to the transparent key are
//! skipped when a surface is blitted onto another target.

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;
use core::convert::Infallible;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use log::trace;

use crate::ui::styling::TRANSPARENT;

/// Off-screen RGB565 buffer implementing `DrawTarget<Color = Rgb565>`.
///
/// A new surface is filled with [`TRANSPARENT`] and uses it as its color
/// key, so untouched areas vanish when blitted.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<Rgb565>,
    transparent: Option<Rgb565>,
}

impl Default for Surface {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl Surface {
    /// Allocate a `width` x `height` surface filled with the transparent key.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![TRANSPARENT; width as usize * height as usize],
            transparent: Some(TRANSPARENT),
        }
    }

    /// Allocate a surface filled with `color`, without a transparent key.
    pub fn filled(width: u32, height: u32, color: Rgb565) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
            transparent: None,
        }
    }

    /// Set (or clear) the color skipped by [`Surface::blit`].
    pub fn set_transparent_color(&mut self, color: Option<Rgb565>) {
        self.transparent = color;
    }

    pub fn transparent_color(&self) -> Option<Rgb565> {
        self.transparent
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Reallocate to a new size. Contents are reset to the transparent key
    /// (or black for keyless surfaces).
    pub fn resize(&mut self, width: u32, height: u32) {
        if self.width == width && self.height == height {
            return;
        }
        let fill = self.transparent.unwrap_or(Rgb565::BLACK);
        self.width = width;
        self.height = height;
        self.pixels = vec![fill; width as usize * height as usize];
    }

    /// Read a single pixel, `None` outside the surface.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb565> {
        self.index(x, y).map(|idx| self.pixels[idx])
    }

    /// Fill the whole surface with its transparent key.
    pub fn clear_transparent(&mut self) {
        let fill = self.transparent.unwrap_or(Rgb565::BLACK);
        self.pixels.fill(fill);
    }

    /// Copy a rectangular region into a new surface sharing this surface's key.
    ///
    /// Parts of `area` outside this surface come out transparent.
    pub fn sub_surface(&self, area: Rectangle) -> Surface {
        let mut out = Surface::new(area.size.width, area.size.height);
        out.transparent = self.transparent;
        out.clear_transparent();
        for y in 0..area.size.height as i32 {
            for x in 0..area.size.width as i32 {
                if let Some(color) = self.pixel(area.top_left.x + x, area.top_left.y + y)
                    && let Some(idx) = out.index(x, y)
                {
                    out.pixels[idx] = color;
                }
            }
        }
        out
    }

    /// Draw this surface onto `dst` with its top-left corner at `at`.
    ///
    /// When `src` is given only that region of the surface is copied (the
    /// region is clipped to the surface). Transparent pixels are skipped.
    pub fn blit<D>(&self, dst: &mut D, at: Point, src: Option<Rectangle>) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let src = src.unwrap_or_else(|| self.bounding_box());
        let Some(region) = self.clip(src) else {
            return Ok(());
        };

        trace!(
            "Blitting {}x{} from ({}, {}) to ({}, {})",
            region.size.width, region.size.height, region.top_left.x, region.top_left.y, at.x, at.y
        );

        let shift = at - src.top_left;
        let transparent = self.transparent;
        let pixels = region.points().filter_map(move |p| {
            let color = self.pixel(p.x, p.y)?;
            if Some(color) == transparent {
                None
            } else {
                Some(Pixel(p + shift, color))
            }
        });

        dst.draw_iter(pixels)
    }

    fn clip(&self, area: Rectangle) -> Option<Rectangle> {
        let bounds = self.bounding_box();
        let region = bounds.intersection(&area);
        if region.size.width == 0 || region.size.height == 0 {
            None
        } else {
            Some(region)
        }
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }
}

impl OriginDimensions for Surface {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DrawTarget for Surface {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            if let Some(idx) = self.index(coord.x, coord.y) {
                self.pixels[idx] = color;
            }
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let Some(region) = self.clip(*area) else {
            return Ok(());
        };
        let x_start = region.top_left.x as usize;
        let x_end = x_start + region.size.width as usize;
        let stride = self.width as usize;

        for y in region.top_left.y as usize..region.top_left.y as usize + region.size.height as usize {
            self.pixels[y * stride + x_start..y * stride + x_end].fill(color);
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.pixels.fill(color);
        Ok(())
    }
}
