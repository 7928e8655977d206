//! Widget gallery shown by the simulator

use log::{debug, warn};

use pwidget_core::ui::{
    Button, CheckBox, GraphicsContext, Label, Orientation, Panel, Paragraph, ScrollPanel,
    ScrollWheel, Selector, Strut, TextBox, Ui, WidgetId,
};
use pwidget_core::{Host, UiError, Window};

const INTRO: &str = "widgets are laid out by nested panels. click the button to add labels \
                     to the scroll panel below, or type into the text box.";

const OPTIONS: [&str; 8] = [
    "alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf", "hotel",
];

/// Handles to the gallery widgets the demo wires together
#[derive(Debug, Clone, Copy)]
pub struct Gallery {
    pub add_button: WidgetId,
    pub checkbox: WidgetId,
    pub selector: WidgetId,
    pub wheel: WidgetId,
    pub text_box: WidgetId,
    pub echo: WidgetId,
    pub status: WidgetId,
    pub log: WidgetId,
}

/// Populate the root panel of `window` with the gallery.
pub fn build<H: Host>(window: &mut Window<H>, gc: &GraphicsContext) -> Result<Gallery, UiError> {
    window.insert(Label::new(gc, "hello world!"))?;
    window.insert(Strut::vertical(4))?;
    window.insert(Paragraph::new(gc, INTRO, 300))?;
    window.insert(Strut::vertical(4))?;

    let ui = window.ui_mut();
    let root = ui.root();

    // --- Button and checkbox ----------------------------------------------
    let row = ui.insert(root, Panel::horizontal())?;
    let add_button = ui.insert(row, Button::new(gc, "add label"))?;
    ui.insert(row, Strut::horizontal(8))?;
    let checkbox = ui.insert(row, CheckBox::new(gc, "loud"))?;
    ui.insert(root, Strut::vertical(4))?;

    // --- Selector driven by a scroll wheel --------------------------------
    let row = ui.insert(root, Panel::horizontal())?;
    let mut selector = Selector::new(gc, 120, 4);
    for option in OPTIONS.iter().rev() {
        selector.add_option(*option);
    }
    let hidden = (selector.options().len() - selector.rows()) as u32;
    let selector = ui.insert(row, selector)?;
    let wheel = ui.insert(row, ScrollWheel::vertical(gc, hidden))?;
    let status = ui.insert(root, Label::new(gc, "selected: none"))?;
    ui.insert(root, Strut::vertical(4))?;

    // --- Text box with an echo label ----------------------------------------
    let text_box = ui.insert(root, TextBox::new(gc, 200, 40))?;
    let echo = ui.insert(root, Label::new(gc, "typed: "))?;
    ui.insert(root, Strut::vertical(4))?;

    // --- Scroll panel with more content than fits ---------------------------
    let log = ui.insert(root, ScrollPanel::new(gc, 220, 90, Orientation::Vertical))?;
    for line in 1..=6 {
        ui.insert(log, Label::new(gc, format!("line {line} of the log")))?;
    }
    ui.insert(log, Label::new(gc, "a very long line that needs horizontal scrolling"))?;

    let gallery = Gallery {
        add_button,
        checkbox,
        selector,
        wheel,
        text_box,
        echo,
        status,
        log,
    };
    wire(window, gc, gallery)?;
    Ok(gallery)
}

fn wire<H: Host>(window: &mut Window<H>, gc: &GraphicsContext, gallery: Gallery) -> Result<(), UiError> {
    let ui = window.ui_mut();

    let label_gc = gc.clone();
    let mut added = 0;
    ui.add_action(gallery.add_button, move |ui: &mut Ui, _button: WidgetId| {
        added += 1;
        let loud = ui
            .get::<CheckBox>(gallery.checkbox)
            .is_some_and(CheckBox::value);
        let text = if loud {
            format!("added label {added}!")
        } else {
            format!("added label {added}")
        };
        debug!("Adding '{}' to the log", text);
        if let Err(e) = ui.insert(gallery.log, Label::new(&label_gc, text)) {
            warn!("Could not add label: {}", e);
        }
    })?;

    ui.add_action(gallery.wheel, move |ui: &mut Ui, wheel: WidgetId| {
        let Some(value) = ui.get::<ScrollWheel>(wheel).map(ScrollWheel::value) else {
            return;
        };
        if let Some(selector) = ui.get_mut::<Selector>(gallery.selector) {
            selector.scroll_to(value as usize);
        }
    })?;

    ui.add_action(gallery.selector, move |ui: &mut Ui, selector: WidgetId| {
        let Some(value) = ui.get::<Selector>(selector).map(|s| s.value().to_string()) else {
            return;
        };
        if let Err(e) = ui.set_text(gallery.status, format!("selected: {value}")) {
            warn!("Could not update status: {}", e);
        }
    })?;

    // Per-frame: mirror the text box into the echo label
    let mut shown = String::new();
    window.add_action(move |ui: &mut Ui| {
        let Some(value) = ui.get::<TextBox>(gallery.text_box).map(TextBox::value) else {
            return;
        };
        if value == shown {
            return;
        }
        shown = value.to_string();
        if let Err(e) = ui.set_text(gallery.echo, format!("typed: {shown}")) {
            warn!("Could not update echo: {}", e);
        }
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mono_font::ascii::FONT_6X10;
    use embedded_graphics::pixelcolor::Rgb565;
    use embedded_graphics::prelude::*;
    use pwidget_core::ui::{GlyphTable, InputEvent, Key};
    use pwidget_core::{Surface, WindowConfig};

    struct NullHost;

    impl Host for NullHost {
        type Error = ();

        fn poll_events(&mut self) -> Vec<InputEvent> {
            Vec::new()
        }

        fn present(&mut self, _frame: &Surface) -> Result<(), ()> {
            Ok(())
        }

        fn wait_for_next_frame(&mut self, _fps: u32) {}
    }

    fn setup() -> (Window<NullHost>, Gallery) {
        let gc = GraphicsContext::new(
            GlyphTable::from_mono_font(&FONT_6X10, 10, Rgb565::BLACK).unwrap(),
        );
        let mut window = Window::new(NullHost, &WindowConfig::default());
        let gallery = build(&mut window, &gc).unwrap();
        (window, gallery)
    }

    fn click(window: &mut Window<NullHost>, id: WidgetId, offset: Point) {
        let bounds = window.ui().bounds(id).unwrap();
        let point = bounds.top_left + offset;
        window.dispatch(InputEvent::PointerDown(point));
        window.dispatch(InputEvent::PointerUp(point));
    }

    #[test]
    fn test_button_appends_to_log() {
        let (mut window, gallery) = setup();
        let content = window.ui().get::<ScrollPanel>(gallery.log).unwrap().parts().content;
        let before = window.ui().children(content).len();

        click(&mut window, gallery.add_button, Point::new(2, 2));
        click(&mut window, gallery.add_button, Point::new(2, 2));

        assert_eq!(window.ui().children(content).len(), before + 2);
    }

    #[test]
    fn test_wheel_scrolls_selector() {
        let (mut window, gallery) = setup();
        let height = window.ui().bounds(gallery.wheel).unwrap().size.height as i32;

        click(&mut window, gallery.wheel, Point::new(5, height - 2));

        assert_eq!(window.ui().get::<ScrollWheel>(gallery.wheel).unwrap().value(), 1);
        assert_eq!(window.ui().get::<Selector>(gallery.selector).unwrap().offset(), 1);
    }

    #[test]
    fn test_typing_is_echoed_next_frame() {
        let (mut window, gallery) = setup();
        click(&mut window, gallery.text_box, Point::new(3, 3));
        window.dispatch(InputEvent::KeyDown(Key::Char('h')));
        window.dispatch(InputEvent::KeyDown(Key::Char('i')));
        window.run_frame().unwrap();

        assert_eq!(window.ui().get::<Label>(gallery.echo).unwrap().value(), "typed: hi");
    }
}
