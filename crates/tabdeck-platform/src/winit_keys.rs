//! Maps winit key names onto the names produced by
//! [`parse_keybind`](crate::keymap::parse_keybind), so a live key event can be
//! turned into a [`KeyCombo`](crate::shortcuts::KeyCombo) and looked up.

/// Normalize a winit logical key name.
///
/// Named keys arrive as their `NamedKey` debug name (`"ArrowUp"`, `"F12"`),
/// character keys as the character itself.
pub fn normalize_winit_key(key: &str) -> String {
    match key {
        " " | "Space" => "Space".into(),
        "ArrowUp" => "Up".into(),
        "ArrowDown" => "Down".into(),
        "ArrowLeft" => "Left".into(),
        "ArrowRight" => "Right".into(),
        _ if key.chars().count() == 1 => key.to_uppercase(),
        _ => key.to_string(),
    }
}
