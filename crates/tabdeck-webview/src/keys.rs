//! Key presses forwarded from webviews.
//!
//! Once a webview holds keyboard focus the host window no longer sees key
//! events, so every webview runs [`KEY_FORWARD_SCRIPT`]. It posts modified
//! key presses (and bare F1-F12) as [`KEY_MESSAGE_KIND`] messages, which the
//! IPC handlers turn into [`HostEvent::Key`](crate::HostEvent::Key).

use serde::Deserialize;

use crate::ipc::IpcMessage;

/// IPC kind of a forwarded key press.
pub const KEY_MESSAGE_KIND: &str = "__tabdeck_key";

/// A key press as seen by a page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct KeyPress {
    /// `KeyboardEvent.key`, with letters and digits taken from
    /// `KeyboardEvent.code` so Alt/Option layouts still report `D` or `1`.
    pub key: String,
    #[serde(default)]
    pub ctrl: bool,
    #[serde(default)]
    pub alt: bool,
    #[serde(default)]
    pub shift: bool,
    /// Cmd on macOS, the Windows key elsewhere.
    #[serde(default)]
    pub meta: bool,
}

impl KeyPress {
    /// Decode a forwarded key message; `None` for any other message.
    pub fn from_ipc(msg: &IpcMessage) -> Option<Self> {
        if msg.kind != KEY_MESSAGE_KIND {
            return None;
        }
        serde_json::from_value(msg.payload.clone()).ok()
    }
}

/// Installed into the chrome and every tab surface.
pub const KEY_FORWARD_SCRIPT: &str = r#"
(function() {
    if (window.__tabdeckKeyForward) { return; }
    window.__tabdeckKeyForward = true;
    window.addEventListener('keydown', function(event) {
        if (event.repeat || !window.ipc) { return; }
        var fnKey = /^F([1-9]|1[0-2])$/.test(event.key);
        if (!(event.ctrlKey || event.altKey || event.metaKey || fnKey)) { return; }
        var code = event.code || '';
        var key = event.key;
        if (/^Key[A-Z]$/.test(code)) { key = code.slice(3); }
        else if (/^Digit[0-9]$/.test(code)) { key = code.slice(5); }
        window.ipc.postMessage(JSON.stringify({
            id: null,
            kind: '__tabdeck_key',
            payload: {
                key: key,
                ctrl: event.ctrlKey,
                alt: event.altKey,
                shift: event.shiftKey,
                meta: event.metaKey
            }
        }));
    }, true);
})();
"#;

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn decodes_forwarded_press() {
        let msg = IpcMessage::from_json(
            r#"{"id":null,"kind":"__tabdeck_key","payload":{"key":"D","ctrl":true,"alt":false,"shift":true,"meta":false}}"#,
        )
        .unwrap();
        assert_eq!(
            KeyPress::from_ipc(&msg),
            Some(KeyPress {
                key: "D".into(),
                ctrl: true,
                alt: false,
                shift: true,
                meta: false,
            })
        );
    }

    #[test]
    fn missing_modifiers_default_to_released() {
        let msg = IpcMessage::new(KEY_MESSAGE_KIND, json!({ "key": "F12" }));
        let press = KeyPress::from_ipc(&msg).unwrap();
        assert!(!press.ctrl && !press.alt && !press.shift && !press.meta);
    }

    #[test]
    fn other_messages_are_not_keys() {
        let msg = IpcMessage::new("minimize", json!(null));
        assert!(KeyPress::from_ipc(&msg).is_none());
        let bad = IpcMessage::new(KEY_MESSAGE_KIND, json!({ "ctrl": true }));
        assert!(KeyPress::from_ipc(&bad).is_none());
    }

    #[test]
    fn script_posts_the_key_kind() {
        assert!(KEY_FORWARD_SCRIPT.contains(KEY_MESSAGE_KIND));
        assert!(KEY_FORWARD_SCRIPT.contains("window.ipc.postMessage"));
    }
}
