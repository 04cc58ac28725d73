use tabdeck_common::PlatformError;

use super::{KeyBind, Modifier};

/// Spellings accepted for each modifier, compared case-insensitively.
/// `cmd` and `cmdorctrl` are resolved per platform in [`modifier_from`].
const MODIFIER_ALIASES: &[(&str, Modifier)] = &[
    ("ctrl", Modifier::Ctrl),
    ("control", Modifier::Ctrl),
    ("alt", Modifier::Alt),
    ("opt", Modifier::Alt),
    ("option", Modifier::Alt),
    ("shift", Modifier::Shift),
    ("meta", Modifier::Super),
    ("super", Modifier::Super),
    ("win", Modifier::Super),
];

const PRIMARY_ALIASES: &[&str] = &["cmd", "command", "cmdorctrl", "commandorcontrol"];

/// Multi-letter key names and their canonical spelling.
const KEY_NAMES: &[(&str, &str)] = &[
    ("esc", "Escape"),
    ("escape", "Escape"),
    ("return", "Enter"),
    ("enter", "Enter"),
    ("del", "Delete"),
    ("delete", "Delete"),
    ("backspace", "Backspace"),
    ("space", "Space"),
    ("tab", "Tab"),
    ("comma", ","),
    ("period", "."),
    ("slash", "/"),
];

/// Parses an accelerator such as `"Ctrl+F"`, `"Ctrl + Shift + D"` or
/// `"CmdOrCtrl+F"`. The final segment is the key and everything before it
/// must be a modifier. Repeated modifiers collapse to one.
pub fn parse_keybind(s: &str) -> Result<KeyBind, PlatformError> {
    let mut segments = s.split('+').map(str::trim).collect::<Vec<_>>();
    let key = segments.pop().unwrap_or_default();
    if key.is_empty() {
        return Err(PlatformError::Shortcut(format!("no key in '{s}'")));
    }

    let mut modifiers: Vec<Modifier> = Vec::with_capacity(segments.len());
    for segment in segments {
        let Some(modifier) = modifier_from(segment) else {
            return Err(PlatformError::Shortcut(format!(
                "'{segment}' is not a modifier (in '{s}')"
            )));
        };
        if !modifiers.contains(&modifier) {
            modifiers.push(modifier);
        }
    }

    Ok(KeyBind {
        modifiers,
        key: canonical_key(key),
    })
}

fn modifier_from(segment: &str) -> Option<Modifier> {
    let lower = segment.to_ascii_lowercase();
    if PRIMARY_ALIASES.contains(&lower.as_str()) {
        return Some(if cfg!(target_os = "macos") {
            Modifier::Super
        } else {
            Modifier::Ctrl
        });
    }
    MODIFIER_ALIASES
        .iter()
        .find(|(alias, _)| *alias == lower)
        .map(|(_, modifier)| *modifier)
}

/// `f` becomes `F`, `esc` becomes `Escape`, `pageup` becomes `Pageup`.
fn canonical_key(segment: &str) -> String {
    let lower = segment.to_ascii_lowercase();
    if let Some((_, name)) = KEY_NAMES.iter().find(|(alias, _)| *alias == lower) {
        return (*name).to_string();
    }
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) if segment.chars().count() == 1 => first.to_uppercase().collect(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
