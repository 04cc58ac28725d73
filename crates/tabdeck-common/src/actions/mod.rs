use serde::{Deserialize, Serialize};

/// Actions reachable from global shortcuts.
///
/// The shortcut manager resolves key combinations to an `Action`; the
/// orchestrator decides what each one does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Ask the front-end to reveal its find-in-page bar.
    ShowFindInPage,
    /// Open developer tools for the chrome webview.
    OpenDevTools,
}

impl Action {
    /// Human-readable label for logs and menus.
    pub fn label(&self) -> &'static str {
        match self {
            Action::ShowFindInPage => "Find in Page",
            Action::OpenDevTools => "Open Developer Tools",
        }
    }

    /// Every action that can be bound to a shortcut.
    pub fn all() -> [Action; 2] {
        [Action::ShowFindInPage, Action::OpenDevTools]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_actions_have_labels() {
        for action in Action::all() {
            assert!(!action.label().is_empty(), "action {:?} has empty label", action);
        }
    }

    #[test]
    fn action_serde_roundtrip() {
        for action in Action::all() {
            let json = serde_json::to_string(&action).unwrap();
            let back: Action = serde_json::from_str(&json).unwrap();
            assert_eq!(action, back);
        }
    }
}
