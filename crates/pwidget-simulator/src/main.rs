//! Desktop simulator for the pwidget toolkit.
//!
//! Opens an SDL2 window via `embedded-graphics-simulator` and runs a small
//! gallery of widgets through the toolkit's frame loop.
//!
//! # Configuration
//!
//! Read from `$PWIDGET_CONFIG`, or `pwidget.toml` in the working directory:
//!
//! ```toml
//! scale = 2
//! title = "pwidget"
//!
//! [window]
//! width = 500
//! height = 500
//! orientation = "vertical"
//! fps = 30
//!
//! [font]
//! path = "font.png"   # first row holds the glyph tiles, magenta is transparent
//! size = 10
//! ```
//!
//! # Input
//!
//! | Input          | Action                                  |
//! |----------------|-----------------------------------------|
//! | Mouse          | Pointer down/up/move                    |
//! | Letters/digits | Typed into the focused text box         |
//! | Backspace      | Delete before the cursor                |
//! | Close window   | Quit                                    |

mod config;
mod gallery;
mod host;

use std::path::Path;

use anyhow::{Context, anyhow};
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use log::info;

use pwidget_core::{Surface, Window};
use pwidget_core::ui::{GlyphTable, GraphicsContext};

use crate::config::{FontConfig, SimulatorConfig};
use crate::host::SdlHost;

// ---------------------------------------------------------------------------
// Font loading
// ---------------------------------------------------------------------------

/// Decode a PNG tile sheet into a surface keyed on magenta.
fn load_tile_sheet(path: &Path) -> anyhow::Result<Surface> {
    let image = image::open(path)
        .with_context(|| format!("Failed to open font sheet {}", path.display()))?
        .to_rgba8();

    let mut sheet = Surface::new(image.width(), image.height());
    let pixels = image.enumerate_pixels().filter(|(_, _, px)| px[3] != 0).map(|(x, y, px)| {
        let color = Rgb565::new(px[0] >> 3, px[1] >> 2, px[2] >> 3);
        Pixel(Point::new(x as i32, y as i32), color)
    });
    // Surface drawing is infallible
    let _ = sheet.draw_iter(pixels);
    Ok(sheet)
}

fn load_font(config: &FontConfig) -> anyhow::Result<GlyphTable> {
    match &config.path {
        Some(path) => {
            info!("Loading {}px glyphs from {}", config.size, path.display());
            let sheet = load_tile_sheet(path)?;
            GlyphTable::from_tile_sheet(&sheet, config.size)
                .map_err(|e| anyhow!("Invalid font sheet {}: {}", path.display(), e))
        }
        None => {
            info!("Using built-in 6x10 font at {}px", config.size);
            GlyphTable::from_mono_font(&FONT_6X10, config.size, Rgb565::BLACK)
                .map_err(|e| anyhow!("Invalid font size: {}", e))
        }
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() -> anyhow::Result<()> {
    env_logger::init();
    info!("Starting pwidget simulator");

    let config = SimulatorConfig::load()?;
    let window_config = config.window;
    info!(
        "Window: {}×{} (scale {}×) at {} fps",
        window_config.width, window_config.height, config.scale, window_config.fps
    );

    let gc = GraphicsContext::new(load_font(&config.font)?);
    let host = SdlHost::new(window_config.width, window_config.height, config.scale, &config.title);
    let mut window = Window::new(host, &window_config);

    gallery::build(&mut window, &gc).map_err(|e| anyhow!("Failed to build gallery: {}", e))?;

    if let Err(e) = window.start(window_config.fps) {
        log::error!("Frame loop failed: {:?}", e);
    }

    info!("Simulator exiting");
    Ok(())
}
