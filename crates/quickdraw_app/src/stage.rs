//! The miniquad event handler.
//!
//! Thin glue: maps platform events to toolkit events, runs the frame
//! bracket around the demo's widget pass, and hands the draw list to the
//! renderer. Exactly one frame's work happens per `draw` call.

use miniquad::{Context, EventHandler, KeyCode, KeyMods};

use quickdraw_ui::{Event, Key, MouseButton, Ui};

use crate::config::AppConfig;
use crate::demo::Demo;
use crate::renderer::RectRenderer;

/// The application's event handler and frame loop.
pub struct Stage {
    ui: Ui,
    demo: Demo,
    renderer: RectRenderer,
}

impl Stage {
    /// Builds the stage from the loaded configuration.
    pub fn new(ctx: &mut Context, config: &AppConfig) -> Self {
        Self {
            ui: Ui::with_theme(config.theme.clone()),
            demo: Demo::new(config.window.background),
            renderer: RectRenderer::new(ctx),
        }
    }

    fn forward(&mut self, event: Event) {
        if self.ui.handle_event(&event) {
            shutdown();
        }
    }
}

impl EventHandler for Stage {
    fn update(&mut self, _ctx: &mut Context) {}

    fn mouse_motion_event(&mut self, _ctx: &mut Context, x: f32, y: f32) {
        self.forward(Event::PointerMoved {
            x: x as i32,
            y: y as i32,
        });
    }

    fn mouse_button_down_event(
        &mut self,
        _ctx: &mut Context,
        button: miniquad::MouseButton,
        _x: f32,
        _y: f32,
    ) {
        if let Some(button) = map_button(button) {
            self.forward(Event::ButtonDown(button));
        }
    }

    fn mouse_button_up_event(
        &mut self,
        _ctx: &mut Context,
        button: miniquad::MouseButton,
        _x: f32,
        _y: f32,
    ) {
        if let Some(button) = map_button(button) {
            self.forward(Event::ButtonUp(button));
        }
    }

    fn key_up_event(&mut self, _ctx: &mut Context, keycode: KeyCode, _keymods: KeyMods) {
        if let Some(key) = map_key(keycode) {
            self.forward(Event::KeyUp(key));
        }
    }

    fn draw(&mut self, ctx: &mut Context) {
        self.ui.begin_frame();
        let quit = self.demo.run(&mut self.ui);
        self.ui.end_frame();

        self.renderer
            .draw(ctx, self.ui.draw_list(), self.demo.background());

        if quit {
            shutdown();
        }
    }
}

fn map_button(button: miniquad::MouseButton) -> Option<MouseButton> {
    match button {
        miniquad::MouseButton::Left => Some(MouseButton::Left),
        miniquad::MouseButton::Right => Some(MouseButton::Right),
        miniquad::MouseButton::Middle => Some(MouseButton::Middle),
        miniquad::MouseButton::Unknown => None,
    }
}

fn map_key(keycode: KeyCode) -> Option<Key> {
    match keycode {
        KeyCode::Escape => Some(Key::Escape),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Space => Some(Key::Space),
        _ => None,
    }
}

fn shutdown() -> ! {
    tracing::info!("shutting down");
    std::process::exit(0)
}
