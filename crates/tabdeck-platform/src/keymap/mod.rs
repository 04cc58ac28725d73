//! Accelerator strings from `[shortcuts]` and their parsed form.

mod display;
mod parse;

use serde::{Deserialize, Serialize};

pub use display::keybind_to_display;
pub use parse::parse_keybind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modifier {
    Ctrl,
    /// Option on macOS.
    Alt,
    Shift,
    /// Cmd on macOS, the Windows key elsewhere.
    Super,
}

/// One shortcut: zero or more modifiers and a single key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBind {
    pub modifiers: Vec<Modifier>,
    pub key: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_keybind() {
        let kb = parse_keybind("Ctrl+F").unwrap();
        assert_eq!(kb.modifiers, vec![Modifier::Ctrl]);
        assert_eq!(kb.key, "F");
    }

    #[test]
    fn parse_spaced_accelerator() {
        let kb = parse_keybind("Ctrl + Shift + D").unwrap();
        assert_eq!(kb.modifiers, vec![Modifier::Ctrl, Modifier::Shift]);
        assert_eq!(kb.key, "D");
    }

    #[test]
    fn parse_lowercase_key_is_uppercased() {
        let kb = parse_keybind("ctrl+f").unwrap();
        assert_eq!(kb.key, "F");
    }

    #[test]
    fn parse_cmd_or_ctrl() {
        let kb = parse_keybind("CmdOrCtrl+F").unwrap();
        if cfg!(target_os = "macos") {
            assert_eq!(kb.modifiers, vec![Modifier::Super]);
        } else {
            assert_eq!(kb.modifiers, vec![Modifier::Ctrl]);
        }
    }

    #[test]
    fn parse_named_keys() {
        assert_eq!(parse_keybind("Ctrl+Esc").unwrap().key, "Escape");
        assert_eq!(parse_keybind("Ctrl+return").unwrap().key, "Enter");
        assert_eq!(parse_keybind("F12").unwrap().key, "F12");
    }

    #[test]
    fn chord_with_two_keys_is_rejected() {
        // "D" is not a modifier, so "Ctrl+Shift+D+P" has no single key.
        assert!(parse_keybind("Ctrl+Shift+D+P").is_err());
    }

    #[test]
    fn parse_empty_fails() {
        assert!(parse_keybind("").is_err());
        assert!(parse_keybind("Ctrl+").is_err());
    }

    #[test]
    fn duplicate_modifiers_deduplicated() {
        let kb = parse_keybind("Ctrl+Control+A").unwrap();
        assert_eq!(kb.modifiers, vec![Modifier::Ctrl]);
    }

    #[test]
    fn display_platform() {
        let kb = parse_keybind("Ctrl+Shift+D").unwrap();
        let display = keybind_to_display(&kb);
        if cfg!(target_os = "macos") {
            assert_eq!(display, "\u{2303}\u{21E7}D");
        } else {
            assert_eq!(display, "Ctrl+Shift+D");
        }
    }

    #[test]
    fn keybind_serialization_roundtrip() {
        let kb = parse_keybind("Alt+Shift+T").unwrap();
        let json = serde_json::to_string(&kb).unwrap();
        let back: KeyBind = serde_json::from_str(&json).unwrap();
        assert_eq!(kb, back);
    }
}
