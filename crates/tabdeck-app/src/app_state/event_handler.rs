//! Winit callbacks: window creation, resize, focus and key presses.

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::Key;
use winit::window::WindowId;

use tabdeck_common::WindowSize;
use tabdeck_platform::{normalize_winit_key, KeyCombo};
use tabdeck_webview::KeyPress;

use super::core::TabdeckApp;
use super::init::full_rect;

impl ApplicationHandler for TabdeckApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() && !self.initialize_window(event_loop) {
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
                tracing::info!("host window closing");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => self.handle_resize(size),
            WindowEvent::Focused(true) => self.shortcuts.on_focus_gained(),
            WindowEvent::Focused(false) => self.shortcuts.on_focus_lost(),
            WindowEvent::ModifiersChanged(held) => self.modifiers = held.state(),
            WindowEvent::KeyboardInput { event, .. } => self.handle_keyboard_input(event),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            self.shutdown();
            event_loop.exit();
            return;
        }
        self.poll_and_schedule(event_loop);
    }
}

impl TabdeckApp {
    /// Keep the chrome full-window and re-place the attached surface.
    /// Minimizing reports a zero size, which is ignored.
    fn handle_resize(&mut self, size: PhysicalSize<u32>) {
        let size = WindowSize::new(size.width, size.height);
        if size.is_empty() {
            return;
        }
        if let Some(chrome) = &self.chrome {
            if let Err(e) = chrome.set_bounds(full_rect(size)) {
                tracing::warn!("chrome bounds not updated: {e}");
            }
        }
        if let Some(orchestrator) = self.orchestrator.as_mut() {
            orchestrator.resize(size);
        }
    }

    /// Resolve a key press against the bound shortcuts.
    fn handle_keyboard_input(&mut self, event: KeyEvent) {
        let KeyEvent {
            logical_key,
            state,
            repeat,
            ..
        } = event;
        if state != ElementState::Pressed || repeat {
            return;
        }

        let key_name = match &logical_key {
            Key::Named(named) => format!("{named:?}"),
            Key::Character(c) => c.to_string(),
            _ => return,
        };

        let combo = KeyCombo::from_state(
            self.modifiers.control_key(),
            self.modifiers.alt_key(),
            self.modifiers.shift_key(),
            self.modifiers.super_key(),
            normalize_winit_key(&key_name),
        );
        self.fire_shortcut(&combo);
    }

    /// A key press typed into one of the window's webviews.
    ///
    /// Webviews only receive keys while the window is in the foreground, so
    /// the press also re-binds shortcuts that a focus hand-off to a child
    /// webview unbound.
    pub(super) fn handle_forwarded_key(&mut self, press: KeyPress) {
        self.shortcuts.on_focus_gained();
        let combo = KeyCombo::from_state(
            press.ctrl,
            press.alt,
            press.shift,
            press.meta,
            normalize_winit_key(&press.key),
        );
        self.fire_shortcut(&combo);
    }

    fn fire_shortcut(&mut self, combo: &KeyCombo) {
        if let Some(action) = self.shortcuts.lookup(combo) {
            tracing::debug!(action = action.label(), "shortcut fired");
            self.dispatch(action);
        }
    }
}
