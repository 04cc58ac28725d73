//! Focus-scoped shortcuts.
//!
//! Shortcuts exist only while the host window is focused: the manager
//! registers them on focus-gained and removes them on focus-lost.

mod backend;
mod combo;
mod manager;

pub use backend::{LocalShortcutBackend, ShortcutBackend};
pub use combo::KeyCombo;
pub use manager::{ShortcutManager, ShortcutState};
