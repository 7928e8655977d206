// src/ui/paint.rs
//! Painting the tree
//!
//! Panels paint their children in insertion order. A scroll panel paints its
//! whole nested panel into an off-screen buffer, blits the viewport window of
//! that buffer and then paints its enabled bars on top.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use log::trace;

use super::core::{Paint, PaintCx};
use super::layouts::ScrollPanel;
use super::tree::{Ui, WidgetId};
use super::widget::Widget;

impl Ui {
    /// Paint the whole tree onto `target`.
    pub fn paint<D>(&mut self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        self.paint_node(self.root(), target)
    }

    fn paint_cx(&self, id: WidgetId) -> PaintCx {
        PaintCx {
            focused: self.is_focused(id),
            pointer: self.pointer() + self.translation(id),
        }
    }

    fn paint_node<D>(&mut self, id: WidgetId, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let Some(node) = self.nodes.get(id) else {
            return Ok(());
        };
        match node.widget {
            Widget::Panel(_) => {
                let children = node.children.clone();
                for child in children {
                    self.paint_node(child, target)?;
                }
                Ok(())
            }
            Widget::ScrollPanel(_) => self.paint_scroll_panel(id, target),
            _ => {
                let cx = self.paint_cx(id);
                node.widget.paint(node.bounds, &cx, target)
            }
        }
    }

    fn paint_scroll_panel<D>(&mut self, id: WidgetId, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let Some(bounds) = self.bounds(id) else {
            return Ok(());
        };
        let Some(sp) = self.get_mut::<ScrollPanel>(id) else {
            return Ok(());
        };
        let parts = sp.parts();
        let mut buffer = core::mem::take(&mut sp.buffer);

        let content = self.bounds(parts.content).map(|b| b.size).unwrap_or_default();
        trace!("Rendering {}x{} of scrolled content", content.width, content.height);
        buffer.resize(content.width, content.height);
        buffer.clear_transparent();
        // Surface drawing is infallible
        let _ = self.paint_node(parts.content, &mut buffer);

        let Some(sp) = self.get_mut::<ScrollPanel>(id) else {
            return Ok(());
        };
        let window = sp.source_window(bounds);
        let (vertical, horizontal) = (sp.scrolls_vertically(), sp.scrolls_horizontally());
        let blitted = buffer.blit(target, bounds.top_left, Some(window));
        sp.buffer = buffer;
        blitted?;

        if vertical {
            self.paint_node(parts.vertical, target)?;
        }
        if horizontal {
            self.paint_node(parts.horizontal, target)?;
        }
        Ok(())
    }
}
