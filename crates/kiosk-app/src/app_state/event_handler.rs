//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use super::core::KioskApp;
use super::keys::{key_action, KeyAction};

impl ApplicationHandler for KioskApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.main_window.is_some() {
            return;
        }

        if let Err(e) = self.initialize_windows(event_loop) {
            tracing::error!("Startup failed: {e}");
            self.shutdown();
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let is_main = self
            .main_window
            .as_ref()
            .is_some_and(|w| w.id() == window_id);

        match event {
            WindowEvent::CloseRequested => {
                tracing::info!(main = is_main, "Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) if is_main => {
                if size.width > 0 && size.height > 0 {
                    self.sync_main_view_bounds();
                    self.reposition_overlay();
                }
            }

            WindowEvent::Moved(_) | WindowEvent::ScaleFactorChanged { .. } if is_main => {
                self.reposition_overlay();
            }

            WindowEvent::ModifiersChanged(new_modifiers) => {
                self.modifiers = new_modifiers.state();
            }

            WindowEvent::KeyboardInput { event, .. } if is_main => {
                self.handle_keyboard_input(event);
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            event_loop.exit();
            return;
        }
        self.poll_and_schedule(event_loop);
    }
}

impl KioskApp {
    fn handle_keyboard_input(&mut self, event: KeyEvent) {
        if event.state != ElementState::Pressed || event.repeat {
            return;
        }

        match key_action(&event.logical_key, self.modifiers, self.config.window.allow_escape) {
            Some(KeyAction::Reload) => self.reload("keyboard"),
            Some(KeyAction::LeaveFullscreen) => {
                if let Some(ref w) = self.main_window {
                    if w.fullscreen().is_some() {
                        tracing::info!("Leaving fullscreen");
                        w.set_fullscreen(None);
                        w.set_decorations(true);
                    }
                }
            }
            None => {}
        }
    }
}
