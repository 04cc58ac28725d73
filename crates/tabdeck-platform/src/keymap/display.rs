use super::{KeyBind, Modifier};

/// Renders a [`KeyBind`] for logs and menus: `Ctrl+Shift+D`, or `⌃⇧D` on macOS.
pub fn keybind_to_display(kb: &KeyBind) -> String {
    let mods = kb.modifiers.iter().map(|m| display_modifier(*m));
    if cfg!(target_os = "macos") {
        mods.chain(std::iter::once(kb.key.as_str())).collect()
    } else {
        mods.chain(std::iter::once(kb.key.as_str()))
            .collect::<Vec<_>>()
            .join("+")
    }
}

fn display_modifier(modifier: Modifier) -> &'static str {
    if cfg!(target_os = "macos") {
        match modifier {
            Modifier::Ctrl => "\u{2303}",
            Modifier::Alt => "\u{2325}",
            Modifier::Shift => "\u{21E7}",
            Modifier::Super => "\u{2318}",
        }
    } else {
        match modifier {
            Modifier::Ctrl => "Ctrl",
            Modifier::Alt => "Alt",
            Modifier::Shift => "Shift",
            Modifier::Super if cfg!(target_os = "windows") => "Win",
            Modifier::Super => "Super",
        }
    }
}
