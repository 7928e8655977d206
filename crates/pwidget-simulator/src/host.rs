//! SDL2 host backed by `embedded-graphics-simulator`

use std::convert::Infallible;
use std::time::{Duration, Instant};

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{
    OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window, sdl2::Keycode,
};
use log::trace;

use pwidget_core::ui::{InputEvent, Key};
use pwidget_core::{Host, Surface};

pub struct SdlHost {
    display: SimulatorDisplay<Rgb565>,
    window: Window,
    last_frame: Instant,
}

impl SdlHost {
    pub fn new(width: u32, height: u32, scale: u32, title: &str) -> Self {
        let mut display = SimulatorDisplay::<Rgb565>::new(Size::new(width, height));
        let output_settings = OutputSettingsBuilder::new().scale(scale.max(1)).build();
        let mut window = Window::new(title, &output_settings);

        // The SDL window is lazily initialized on the first `update()` call.
        // We must call `update()` once before `events()` or it will panic.
        let _ = display.clear(Rgb565::WHITE);
        window.update(&display);

        Self {
            display,
            window,
            last_frame: Instant::now(),
        }
    }
}

impl Host for SdlHost {
    type Error = Infallible;

    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.window
            .events()
            .filter_map(|event| match event {
                SimulatorEvent::Quit => Some(InputEvent::Quit),
                SimulatorEvent::MouseButtonDown { point, .. } => Some(InputEvent::PointerDown(point)),
                SimulatorEvent::MouseButtonUp { point, .. } => Some(InputEvent::PointerUp(point)),
                SimulatorEvent::MouseMove { point } => Some(InputEvent::PointerMove(point)),
                SimulatorEvent::KeyDown { keycode, .. } => Some(InputEvent::KeyDown(key_from(keycode))),
                SimulatorEvent::KeyUp { keycode, .. } => Some(InputEvent::KeyUp(key_from(keycode))),
                _ => None,
            })
            .collect()
    }

    fn present(&mut self, frame: &Surface) -> Result<(), Infallible> {
        frame.blit(&mut self.display, Point::zero(), None)?;
        self.window.update(&self.display);
        Ok(())
    }

    fn wait_for_next_frame(&mut self, fps: u32) {
        let budget = Duration::from_secs(1) / fps.max(1);
        let elapsed = self.last_frame.elapsed();
        if elapsed < budget {
            std::thread::sleep(budget - elapsed);
        }
        self.last_frame = Instant::now();
    }
}

fn key_from(keycode: Keycode) -> Key {
    if keycode == Keycode::Backspace {
        return Key::Backspace;
    }
    let key = translate_key(&keycode.name());
    trace!("Key {} -> {:?}", keycode.name(), key);
    key
}

/// Map an SDL key name to a toolkit key.
///
/// Single printable characters come through lowercased, `Space` becomes a
/// blank. Everything else is reported as [`Key::Other`] with a code derived
/// from the key name.
pub fn translate_key(name: &str) -> Key {
    if name == "Backspace" {
        return Key::Backspace;
    }
    if name == "Space" {
        return Key::Char(' ');
    }

    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_graphic() => Key::Char(c.to_ascii_lowercase()),
        _ => Key::Other(name_code(name)),
    }
}

// FNV-1a over the key name
fn name_code(name: &str) -> u32 {
    name.bytes()
        .fold(0x811c_9dc5, |hash, b| (hash ^ u32::from(b)).wrapping_mul(0x0100_0193))
}
