//! IPC between the chrome front-end and Rust.
//!
//! - **JS -> Rust**: `window.tabdeck.ipc.invoke(kind, payload)` posts
//!   `{id, kind, payload}` through `window.ipc.postMessage` and returns a
//!   promise settled by the matching reply.
//! - **Rust -> JS**: replies go through `_resolve(id, value)`, pushed events
//!   through `_dispatch(kind, payload)`; both are run with `evaluate_script`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A message from the front-end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpcMessage {
    /// Correlation id for the reply; absent for fire-and-forget sends.
    #[serde(default)]
    pub id: Option<u64>,
    pub kind: String,
    #[serde(default)]
    pub payload: Value,
}

impl IpcMessage {
    /// A fire-and-forget message.
    pub fn new(kind: impl Into<String>, payload: Value) -> Self {
        Self {
            id: None,
            kind: kind.into(),
            payload,
        }
    }

    /// Parse a raw `postMessage` body.
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

/// Installed into the chrome webview before any page script runs.
pub const IPC_INIT_SCRIPT: &str = r#"
(function() {
    var nextId = 1;
    var pending = {};
    window.tabdeck = window.tabdeck || {};
    window.tabdeck.ipc = {
        invoke: function(kind, payload) {
            var id = nextId++;
            return new Promise(function(resolve) {
                pending[id] = resolve;
                window.ipc.postMessage(JSON.stringify({
                    id: id,
                    kind: kind,
                    payload: payload === undefined ? null : payload
                }));
            });
        },
        send: function(kind, payload) {
            window.ipc.postMessage(JSON.stringify({
                id: null,
                kind: kind,
                payload: payload === undefined ? null : payload
            }));
        },
        _handlers: {},
        on: function(kind, callback) {
            this._handlers[kind] = callback;
        },
        _dispatch: function(kind, payload) {
            var handler = this._handlers[kind];
            if (handler) {
                handler(payload);
            }
        },
        _resolve: function(id, value) {
            var resolve = pending[id];
            if (resolve) {
                delete pending[id];
                resolve(value);
            }
        }
    };
})();
"#;

fn to_js(value: &impl Serialize) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
}

/// Script delivering an event to the front-end's `on(kind)` handler.
pub fn js_dispatch_message(kind: &str, payload: &Value) -> String {
    format!(
        "window.tabdeck.ipc._dispatch({}, {});",
        to_js(&kind),
        to_js(payload)
    )
}

/// Script settling the promise of request `id` with `value`.
pub fn js_resolve_message(id: u64, value: &Value) -> String {
    format!("window.tabdeck.ipc._resolve({id}, {});", to_js(value))
}
