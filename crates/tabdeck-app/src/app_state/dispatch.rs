//! Routing of shortcuts, IPC and surface events.

use tabdeck_common::Action;
use tabdeck_webview::{HostEvent, IpcMessage};

use super::core::TabdeckApp;

impl TabdeckApp {
    /// Dispatch a resolved [`Action`].
    pub(super) fn dispatch(&mut self, action: Action) {
        match action {
            Action::ShowFindInPage => {
                let shown = self
                    .orchestrator
                    .as_ref()
                    .is_some_and(|o| o.show_find_in_page());
                if !shown {
                    tracing::debug!("find shortcut ignored, no tab attached");
                }
            }
            Action::OpenDevTools => {
                if let Some(chrome) = &self.chrome {
                    chrome.open_devtools();
                }
            }
        }
    }

    pub(super) fn handle_host_event(&mut self, event: HostEvent) {
        match event {
            HostEvent::Ipc(msg) => self.handle_ipc_message(msg),
            HostEvent::Key(press) => self.handle_forwarded_key(press),
            HostEvent::Surface(event) => {
                if let Some(orchestrator) = self.orchestrator.as_mut() {
                    orchestrator.handle_surface_event(event);
                }
            }
        }
    }

    /// Run a front-end command and settle its promise.
    fn handle_ipc_message(&mut self, msg: IpcMessage) {
        let Some(orchestrator) = self.orchestrator.as_mut() else {
            return;
        };
        let reply = orchestrator.handle_ipc(&msg);
        if orchestrator.exit_requested() {
            self.should_exit = true;
        }

        let (Some(id), Some(chrome)) = (msg.id, &self.chrome) else {
            return;
        };
        if let Err(e) = chrome.resolve(id, &reply.to_json()) {
            tracing::warn!(id, kind = %msg.kind, "Failed to deliver IPC reply: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tabdeck_config::TabdeckConfig;
    use tabdeck_platform::{normalize_winit_key, KeyCombo, ShortcutState};
    use tabdeck_webview::{KeyPress, SurfaceEvent};

    use super::*;

    #[test]
    fn events_before_window_are_dropped() {
        let mut app = TabdeckApp::new(TabdeckConfig::default(), None);
        app.handle_host_event(HostEvent::Ipc(IpcMessage::new("close", json!(null))));
        app.handle_host_event(HostEvent::Surface(SurfaceEvent::Navigated {
            key: "a".into(),
            url: "https://a.test".into(),
        }));
        assert!(!app.should_exit);
    }

    fn press(key: &str, ctrl: bool, shift: bool) -> KeyPress {
        KeyPress {
            key: key.into(),
            ctrl,
            alt: false,
            shift,
            meta: false,
        }
    }

    #[test]
    fn forwarded_key_rebinds_and_fires_shortcut() {
        let mut app = TabdeckApp::new(TabdeckConfig::default(), None);
        app.shortcuts.on_focus_lost();

        // Ctrl+Shift+D opens chrome devtools; without a chrome it is a no-op,
        // but the press proves the window is focused.
        app.handle_host_event(HostEvent::Key(press("D", true, true)));
        assert_eq!(app.shortcuts.state(), ShortcutState::Bound);
    }

    #[test]
    fn forwarded_page_keys_match_configured_shortcuts() {
        let mut app = TabdeckApp::new(TabdeckConfig::default(), None);
        app.handle_host_event(HostEvent::Key(press("f", true, false)));

        let combo = KeyCombo::from_state(true, false, false, false, normalize_winit_key("f"));
        assert_eq!(app.shortcuts.lookup(&combo), Some(Action::ShowFindInPage));
        let unbound = KeyCombo::from_state(true, false, false, false, normalize_winit_key("g"));
        assert_eq!(app.shortcuts.lookup(&unbound), None);
    }

    #[test]
    fn actions_without_window_are_harmless() {
        let mut app = TabdeckApp::new(TabdeckConfig::default(), None);
        app.dispatch(Action::ShowFindInPage);
        app.dispatch(Action::OpenDevTools);
        assert!(app.frontend_rx.try_recv().is_err());
    }
}
