//! The demo scene.
//!
//! A handful of buttons, and a checkbox that reveals three sliders editing
//! packed channel fields of the background color. Ids are allocated once at
//! startup and reused every frame, which is what makes the widgets' identity
//! stable.

use std::time::Instant;

use quickdraw_ui::{Color, IdAllocator, Ui, WidgetId};

/// Multiplier for the background scramble button.
const SCRAMBLE: u32 = 0xc0ca_c01a;

/// Stable widget identities for the scene.
#[derive(Debug)]
struct DemoIds {
    plain_a: WidgetId,
    plain_b: WidgetId,
    scramble: WidgetId,
    quit: WidgetId,
    color_gate: WidgetId,
    slider_low: WidgetId,
    slider_mid: WidgetId,
    slider_high: WidgetId,
}

impl DemoIds {
    fn new() -> Self {
        let mut ids = IdAllocator::new();
        Self {
            plain_a: ids.alloc(),
            plain_b: ids.alloc(),
            scramble: ids.alloc(),
            quit: ids.alloc(),
            color_gate: ids.alloc(),
            slider_low: ids.alloc(),
            slider_mid: ids.alloc(),
            slider_high: ids.alloc(),
        }
    }
}

/// Mutable demo state: the background color and the widget ids.
#[derive(Debug)]
pub struct Demo {
    ids: DemoIds,
    background: u32,
    started: Instant,
}

impl Demo {
    /// Creates the scene with the given initial background.
    #[must_use]
    pub fn new(background: Color) -> Self {
        Self {
            ids: DemoIds::new(),
            background: background.to_argb(),
            started: Instant::now(),
        }
    }

    /// The current background color.
    #[must_use]
    pub fn background(&self) -> Color {
        Color::argb(self.background)
    }

    /// Runs one frame's widget pass. Returns true when the quit button
    /// fired.
    pub fn run(&mut self, ui: &mut Ui) -> bool {
        ui.button(self.ids.plain_a, 50, 50);
        ui.button(self.ids.plain_b, 150, 50);

        if ui.button(self.ids.scramble, 50, 150) {
            let ticks = self.started.elapsed().as_millis() as u32;
            self.background = ticks.wrapping_mul(SCRAMBLE) | 0xFF16_1616;
            tracing::debug!(background = %format!("{:08X}", self.background), "scrambled");
        }

        let quit = ui.button(self.ids.quit, 150, 150);

        if ui.checkbox(self.ids.color_gate, 300, 50) {
            let response = ui.slider(self.ids.slider_low, 450, 40, 255, low_byte(self.background));
            if response.changed {
                self.background = with_low_byte(self.background, response.value);
            }

            let response = ui.slider(self.ids.slider_mid, 500, 40, 63, mid_bits(self.background));
            if response.changed {
                self.background = with_mid_bits(self.background, response.value);
            }

            let response = ui.slider(self.ids.slider_high, 550, 40, 15, high_bits(self.background));
            if response.changed {
                self.background = with_high_bits(self.background, response.value);
            }
        }

        quit
    }
}

// The channel fields straddle color-component boundaries on purpose, and the
// write masks clear the alpha byte; both quirks come from the original demo
// and only affect the clear color.

fn low_byte(bg: u32) -> i32 {
    (bg & 0xFF) as i32
}

fn with_low_byte(bg: u32, value: i32) -> u32 {
    (bg & 0x00FF_FF00) | value as u32
}

fn mid_bits(bg: u32) -> i32 {
    ((bg >> 10) & 0x3F) as i32
}

fn with_mid_bits(bg: u32, value: i32) -> u32 {
    (bg & 0x00FF_00FF) | ((value as u32) << 10)
}

fn high_bits(bg: u32) -> i32 {
    ((bg >> 20) & 0xF) as i32
}

fn with_high_bits(bg: u32, value: i32) -> u32 {
    (bg & 0x0000_FFFF) | ((value as u32) << 20)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickdraw_ui::{Event, MouseButton};

    #[test]
    fn test_channel_round_trips() {
        let bg = 0xFF16_1616;
        assert_eq!(low_byte(with_low_byte(bg, 0xAB)), 0xAB);
        assert_eq!(mid_bits(with_mid_bits(bg, 0x2A)), 0x2A);
        assert_eq!(high_bits(with_high_bits(bg, 0xC)), 0xC);
    }

    #[test]
    fn test_writes_preserve_other_fields() {
        let bg = with_high_bits(with_mid_bits(with_low_byte(0, 0x11), 0x22), 0x3);
        assert_eq!(low_byte(bg), 0x11);
        assert_eq!(mid_bits(bg), 0x22);
        assert_eq!(high_bits(bg), 0x3);
    }

    #[test]
    fn test_sliders_hidden_until_gate_checked() {
        let mut demo = Demo::new(Color::argb(0xFF16_1616));
        let mut ui = Ui::new();

        // Gate unchecked: the pass draws 4 buttons (2 rects each) plus the
        // checkbox background.
        ui.begin_frame();
        demo.run(&mut ui);
        ui.end_frame();
        assert_eq!(ui.draw_list().len(), 9);

        // Click the gate.
        ui.handle_event(&Event::PointerMoved { x: 305, y: 55 });
        ui.handle_event(&Event::ButtonDown(MouseButton::Left));
        ui.begin_frame();
        demo.run(&mut ui);
        ui.end_frame();
        ui.handle_event(&Event::ButtonUp(MouseButton::Left));

        // Gate checked: add the mark and three sliders (2 rects each).
        ui.begin_frame();
        demo.run(&mut ui);
        ui.end_frame();
        assert_eq!(ui.draw_list().len(), 16);
    }

    #[test]
    fn test_quit_button() {
        let mut demo = Demo::new(Color::argb(0xFF16_1616));
        let mut ui = Ui::new();

        // Press and release on the quit button at (150, 150).
        ui.handle_event(&Event::PointerMoved { x: 160, y: 160 });
        ui.handle_event(&Event::ButtonDown(MouseButton::Left));
        ui.begin_frame();
        assert!(!demo.run(&mut ui));
        ui.end_frame();

        ui.handle_event(&Event::ButtonUp(MouseButton::Left));
        ui.begin_frame();
        assert!(demo.run(&mut ui));
        ui.end_frame();
    }
}
