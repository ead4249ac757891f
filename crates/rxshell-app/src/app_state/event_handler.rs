//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{Key, ModifiersState, NamedKey};
use winit::window::WindowId;

use super::core::ShellApp;

/// `Alt+Left` navigates back, like a browser.
pub(super) fn is_back_shortcut(key: &Key, modifiers: ModifiersState) -> bool {
    matches!(key, Key::Named(NamedKey::ArrowLeft))
        && modifiers.alt_key()
        && !modifiers.control_key()
        && !modifiers.super_key()
}

impl ApplicationHandler for ShellApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    self.sync_view_bounds();
                }
            }

            WindowEvent::Focused(focused) => {
                if let Some(shell) = self.shell.as_mut() {
                    if focused {
                        shell.resume();
                    } else {
                        shell.pause();
                    }
                }
            }

            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Back,
                ..
            } => self.handle_back_request(),

            WindowEvent::ModifiersChanged(new_modifiers) => {
                self.modifiers = new_modifiers.state();
            }

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key,
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => {
                if is_back_shortcut(&logical_key, self.modifiers) {
                    self.handle_back_request();
                }
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

impl ShellApp {
    fn handle_back_request(&mut self) {
        let Some(shell) = self.shell.as_mut() else {
            return;
        };
        if !shell.on_back_requested() {
            tracing::debug!("back requested with no history, ignoring");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alt_left_is_back() {
        let key = Key::Named(NamedKey::ArrowLeft);
        assert!(is_back_shortcut(&key, ModifiersState::ALT));
    }

    #[test]
    fn plain_or_combined_left_is_not_back() {
        let key = Key::Named(NamedKey::ArrowLeft);
        assert!(!is_back_shortcut(&key, ModifiersState::empty()));
        assert!(!is_back_shortcut(&key, ModifiersState::ALT | ModifiersState::CONTROL));
        assert!(!is_back_shortcut(
            &Key::Named(NamedKey::ArrowRight),
            ModifiersState::ALT
        ));
    }
}
