use tabdeck_common::Action;
use tabdeck_config::schema::ShortcutConfig;
use tracing::{debug, warn};

use crate::keymap::{keybind_to_display, parse_keybind};

use super::backend::ShortcutBackend;
use super::combo::KeyCombo;

/// Whether the shortcut set is currently registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutState {
    /// Host window focused, shortcuts live.
    Bound,
    /// Host window unfocused, nothing registered.
    Unbound,
}

/// Binds the application's shortcuts while the host window has focus and
/// unbinds them when it loses focus.
pub struct ShortcutManager<B: ShortcutBackend> {
    backend: B,
    bindings: Vec<(KeyCombo, Action)>,
    state: ShortcutState,
}

impl<B: ShortcutBackend> ShortcutManager<B> {
    /// Build from the config section. Unparseable shortcuts are logged and
    /// skipped.
    pub fn from_config(config: &ShortcutConfig, backend: B) -> Self {
        let mappings = [
            (&config.find_in_page, Action::ShowFindInPage),
            (&config.open_devtools, Action::OpenDevTools),
        ];

        let mut bindings = Vec::with_capacity(mappings.len());
        for (binding, action) in mappings {
            match parse_keybind(binding) {
                Ok(kb) => bindings.push((KeyCombo::from_keybind(&kb), action)),
                Err(e) => warn!(shortcut = %binding, action = action.label(), "invalid shortcut: {e}"),
            }
        }

        Self {
            backend,
            bindings,
            state: ShortcutState::Unbound,
        }
    }

    pub fn state(&self) -> ShortcutState {
        self.state
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Register every binding. No-op while already bound.
    pub fn on_focus_gained(&mut self) {
        if self.state == ShortcutState::Bound {
            return;
        }
        for (combo, action) in &self.bindings {
            match self.backend.register(combo) {
                Ok(()) => debug!(
                    shortcut = %keybind_to_display(&combo.to_keybind()),
                    action = action.label(),
                    "shortcut registered"
                ),
                Err(e) => warn!(action = action.label(), "shortcut registration failed: {e}"),
            }
        }
        self.state = ShortcutState::Bound;
    }

    /// Unregister every binding. No-op while already unbound.
    pub fn on_focus_lost(&mut self) {
        if self.state == ShortcutState::Unbound {
            return;
        }
        for (combo, _) in &self.bindings {
            self.backend.unregister(combo);
        }
        self.state = ShortcutState::Unbound;
        debug!("shortcuts unregistered");
    }

    /// The action bound to `combo`, only while bound.
    pub fn lookup(&self, combo: &KeyCombo) -> Option<Action> {
        if self.state != ShortcutState::Bound || !self.backend.is_registered(combo) {
            return None;
        }
        self.bindings
            .iter()
            .find(|(c, _)| c == combo)
            .map(|(_, action)| *action)
    }

    /// Number of successfully parsed bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
