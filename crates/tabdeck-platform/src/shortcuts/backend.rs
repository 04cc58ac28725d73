use std::collections::HashSet;

use tabdeck_common::PlatformError;

use super::combo::KeyCombo;

/// Where shortcut registrations live.
///
/// The shortcut manager only decides *when* combos are registered; a backend
/// does the registering.
pub trait ShortcutBackend {
    fn register(&mut self, combo: &KeyCombo) -> Result<(), PlatformError>;
    fn unregister(&mut self, combo: &KeyCombo);
    fn is_registered(&self, combo: &KeyCombo) -> bool;
}

/// In-process backend: combos are matched against the window's own key
/// events, so nothing is captured outside the application.
#[derive(Debug, Default)]
pub struct LocalShortcutBackend {
    registered: HashSet<KeyCombo>,
}

impl LocalShortcutBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.registered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registered.is_empty()
    }
}

impl ShortcutBackend for LocalShortcutBackend {
    fn register(&mut self, combo: &KeyCombo) -> Result<(), PlatformError> {
        if !self.registered.insert(combo.clone()) {
            return Err(PlatformError::Shortcut(format!(
                "{} is already registered",
                combo.key
            )));
        }
        Ok(())
    }

    fn unregister(&mut self, combo: &KeyCombo) {
        self.registered.remove(combo);
    }

    fn is_registered(&self, combo: &KeyCombo) -> bool {
        self.registered.contains(combo)
    }
}
