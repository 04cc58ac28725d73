use crate::keymap::{KeyBind, Modifier};

/// Modifier bits in display order.
const MODIFIER_BITS: [(Modifier, u8); 4] = [
    (Modifier::Ctrl, 1),
    (Modifier::Alt, 1 << 1),
    (Modifier::Shift, 1 << 2),
    (Modifier::Super, 1 << 3),
];

fn bit_of(modifier: Modifier) -> u8 {
    MODIFIER_BITS
        .iter()
        .find(|(m, _)| *m == modifier)
        .map_or(0, |(_, bit)| *bit)
}

/// Hashable form of a shortcut, used as the lookup key.
///
/// Modifiers are packed into a bitmask, so `Shift+Ctrl+D` from config and a
/// live Ctrl+Shift+D key press produce the same combo.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub mods: u8,
    /// Key name as produced by [`crate::keymap::parse_keybind`].
    pub key: String,
}

impl KeyCombo {
    pub fn from_keybind(kb: &KeyBind) -> Self {
        Self {
            mods: kb.modifiers.iter().map(|m| bit_of(*m)).fold(0, |a, b| a | b),
            key: kb.key.clone(),
        }
    }

    /// Combo for a key press given which modifiers are held.
    pub fn from_state(ctrl: bool, alt: bool, shift: bool, super_key: bool, key: String) -> Self {
        let held = [ctrl, alt, shift, super_key];
        let mods = MODIFIER_BITS
            .iter()
            .zip(held)
            .filter(|(_, down)| *down)
            .fold(0, |acc, ((_, bit), _)| acc | bit);
        Self { mods, key }
    }

    pub(crate) fn to_keybind(&self) -> KeyBind {
        KeyBind {
            modifiers: MODIFIER_BITS
                .iter()
                .filter(|(_, bit)| self.mods & bit != 0)
                .map(|(m, _)| *m)
                .collect(),
            key: self.key.clone(),
        }
    }
}
