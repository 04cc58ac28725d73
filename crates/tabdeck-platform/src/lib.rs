pub mod keymap;
pub mod paths;
pub mod shortcuts;
pub mod winit_keys;

pub use keymap::{KeyBind, Modifier};
pub use paths::{
    cache_dir, capture_dir, config_dir, data_dir, ensure_dirs, log_dir, partitions_dir,
};
pub use shortcuts::{
    KeyCombo, LocalShortcutBackend, ShortcutBackend, ShortcutManager, ShortcutState,
};
pub use winit_keys::normalize_winit_key;
