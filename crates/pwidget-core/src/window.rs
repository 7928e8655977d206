//! Window and frame loop
//!
//! A [`Window`] owns the widget tree, the per-frame callbacks and the frame
//! buffer, and drives them through a [`Host`] that supplies input events and
//! shows finished frames. One frame is:
//!
//! 1. poll every pending event and route each one, in arrival order
//! 2. run the per-frame callbacks in registration order
//! 3. clear the frame to white and paint the whole tree
//! 4. present the frame
//!
//! A quit event ends the frame right away, before anything is repainted.

extern crate alloc;

use alloc::boxed::Box;
use alloc::vec::Vec;
use embedded_graphics::prelude::*;
use log::{debug, info, trace};

use crate::config::WindowConfig;
use crate::error::UiError;
use crate::surface::Surface;
use crate::ui::core::InputEvent;
use crate::ui::styling::WHITE;
use crate::ui::tree::{Ui, WidgetId};
use crate::ui::widget::Widget;

/// Platform side of a window: input source and display
pub trait Host {
    type Error;

    /// Events that arrived since the previous call, oldest first.
    fn poll_events(&mut self) -> Vec<InputEvent>;

    /// Show a finished frame.
    fn present(&mut self, frame: &Surface) -> Result<(), Self::Error>;

    /// Block until the next frame is due at `fps` frames per second.
    fn wait_for_next_frame(&mut self, fps: u32);
}

/// Callback run once per frame, after input has been routed
pub type Action = Box<dyn FnMut(&mut Ui)>;

/// Whether the frame loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Quit,
}

/// Saved widget tree and per-frame callbacks of a window
///
/// Swapping states lets an application switch between whole screens.
pub struct WindowState {
    ui: Ui,
    actions: Vec<Action>,
}

impl WindowState {
    pub fn ui(&self) -> &Ui {
        &self.ui
    }

    pub fn ui_mut(&mut self) -> &mut Ui {
        &mut self.ui
    }
}

/// Root of an application: a widget tree shown through a [`Host`]
pub struct Window<H: Host> {
    host: H,
    config: WindowConfig,
    ui: Ui,
    actions: Vec<Action>,
    frame: Surface,
}

impl<H: Host> Window<H> {
    pub fn new(host: H, config: &WindowConfig) -> Self {
        info!(
            "Creating {}x{} window ({:?})",
            config.width, config.height, config.orientation
        );
        Self {
            host,
            config: *config,
            ui: Ui::new(config.orientation),
            actions: Vec::new(),
            frame: Surface::filled(config.width, config.height, WHITE),
        }
    }

    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn ui(&self) -> &Ui {
        &self.ui
    }

    pub fn ui_mut(&mut self) -> &mut Ui {
        &mut self.ui
    }

    /// The most recently painted frame.
    pub fn frame(&self) -> &Surface {
        &self.frame
    }

    /// Append an existing widget to the root panel.
    pub fn add_component(&mut self, child: WidgetId) -> Result<(), UiError> {
        let root = self.ui.root();
        self.ui.add_component(root, child)
    }

    /// Create a widget and append it to the root panel.
    pub fn insert(&mut self, widget: impl Into<Widget>) -> Result<WidgetId, UiError> {
        let root = self.ui.root();
        self.ui.insert(root, widget)
    }

    /// Register a callback run once every frame.
    pub fn add_action<F>(&mut self, action: F)
    where
        F: FnMut(&mut Ui) + 'static,
    {
        self.actions.push(Box::new(action));
    }

    pub fn focus(&self) -> Option<WidgetId> {
        self.ui.focus()
    }

    pub fn set_focus(&mut self, id: WidgetId) {
        self.ui.set_focus(id);
    }

    pub fn reset_focus(&mut self) {
        self.ui.reset_focus();
    }

    /// Take the current tree and callbacks, leaving a fresh state behind.
    pub fn take_state(&mut self) -> WindowState {
        let fresh = Ui::new(self.config.orientation);
        WindowState {
            ui: core::mem::replace(&mut self.ui, fresh),
            actions: core::mem::take(&mut self.actions),
        }
    }

    /// Replace the current tree and callbacks with a saved state.
    pub fn set_state(&mut self, state: WindowState) {
        debug!("Restoring window state");
        self.ui = state.ui;
        self.actions = state.actions;
    }

    /// Drop the current tree and callbacks for an empty root panel.
    pub fn reset_state(&mut self) {
        debug!("Resetting window state");
        self.ui = Ui::new(self.config.orientation);
        self.actions.clear();
    }

    /// Route one input event.
    pub fn dispatch(&mut self, event: InputEvent) -> FrameOutcome {
        trace!("Dispatching {:?}", event);
        match event {
            InputEvent::Quit => return FrameOutcome::Quit,
            InputEvent::PointerDown(point) => self.ui.mouse_down(point),
            InputEvent::PointerUp(point) => self.ui.mouse_up(point),
            InputEvent::PointerMove(point) => self.ui.pointer_moved(point),
            InputEvent::KeyDown(key) => self.ui.key_down(key),
            InputEvent::KeyUp(key) => self.ui.key_up(key),
        }
        FrameOutcome::Continue
    }

    fn run_actions(&mut self) {
        let mut actions = core::mem::take(&mut self.actions);
        for action in actions.iter_mut() {
            action(&mut self.ui);
        }
        let added = core::mem::replace(&mut self.actions, actions);
        self.actions.extend(added);
    }

    /// Run a single frame.
    pub fn run_frame(&mut self) -> Result<FrameOutcome, H::Error> {
        for event in self.host.poll_events() {
            if self.dispatch(event) == FrameOutcome::Quit {
                info!("Quit requested");
                return Ok(FrameOutcome::Quit);
            }
        }

        self.run_actions();

        // Surface drawing is infallible
        let _ = self.frame.clear(WHITE);
        let _ = self.ui.paint(&mut self.frame);
        self.host.present(&self.frame)?;
        Ok(FrameOutcome::Continue)
    }

    /// Run frames at `fps` until a quit event arrives.
    pub fn start(&mut self, fps: u32) -> Result<(), H::Error> {
        info!("Starting frame loop at {} fps", fps);
        loop {
            self.host.wait_for_next_frame(fps);
            if self.run_frame()? == FrameOutcome::Quit {
                break;
            }
        }
        info!("Frame loop stopped");
        Ok(())
    }
}
