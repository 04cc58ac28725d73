//! Commands issued by the chrome front-end and the replies sent back.
//!
//! The front-end addresses commands by a string `kind` with an arbitrary JSON
//! payload. [`Command::parse`] turns that pair into a typed command so the
//! orchestrator never inspects raw JSON.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::types::TabKey;

/// A request from the front-end to the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the surface for `key`, creating it with `url` on first use.
    ActivateTab { key: TabKey, url: String },
    /// Detach and drop the surface for `key`.
    ReleaseTab { key: TabKey },
    /// Detach the visible surface and clear the current tab.
    CloseTab,
    /// Load `url` in the attached surface.
    Navigate { url: String },
    /// Pop `count` history entries for `key` and load the new top.
    GoBack { key: TabKey, count: usize },
    /// Reload the attached surface's current URL.
    Refresh { key: TabKey },
    /// Search the attached surface for `text`.
    FindInPage { text: String },
    Minimize,
    Maximize,
    CloseWindow,
}

/// Why a front-end message could not become a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command kind: {0}")]
    UnknownKind(String),

    #[error("invalid payload for '{kind}': {reason}")]
    InvalidPayload { kind: String, reason: String },
}

#[derive(Deserialize)]
struct TabChangePayload {
    key: TabKey,
    url: String,
}

#[derive(Deserialize)]
struct PageBackPayload {
    key: TabKey,
    #[serde(default = "default_back_count")]
    count: usize,
}

fn default_back_count() -> usize {
    1
}

impl Command {
    /// Every kind the front-end may send.
    pub const KINDS: &'static [&'static str] = &[
        "tab-change",
        "view-release",
        "tab-close",
        "open-url",
        "page-back",
        "page-refresh",
        "find-in-page",
        "minimize",
        "maximize",
        "close",
    ];

    /// Parse a front-end message into a typed command.
    pub fn parse(kind: &str, payload: &Value) -> Result<Self, CommandError> {
        let invalid = |reason: String| CommandError::InvalidPayload {
            kind: kind.to_string(),
            reason,
        };

        match kind {
            "tab-change" => {
                let p: TabChangePayload =
                    serde_json::from_value(payload.clone()).map_err(|e| invalid(e.to_string()))?;
                Ok(Command::ActivateTab {
                    key: p.key,
                    url: p.url,
                })
            }
            "view-release" => Ok(Command::ReleaseTab {
                key: string_payload(payload).map(TabKey::from).ok_or_else(|| {
                    invalid("expected tab key string".into())
                })?,
            }),
            "tab-close" => Ok(Command::CloseTab),
            "open-url" => Ok(Command::Navigate {
                url: string_payload(payload)
                    .ok_or_else(|| invalid("expected url string".into()))?,
            }),
            "page-back" => {
                let p: PageBackPayload =
                    serde_json::from_value(payload.clone()).map_err(|e| invalid(e.to_string()))?;
                Ok(Command::GoBack {
                    key: p.key,
                    count: p.count,
                })
            }
            "page-refresh" => Ok(Command::Refresh {
                key: string_payload(payload).map(TabKey::from).ok_or_else(|| {
                    invalid("expected tab key string".into())
                })?,
            }),
            // A null or missing query is an empty search, which is a no-op.
            "find-in-page" => Ok(Command::FindInPage {
                text: string_payload(payload).unwrap_or_default(),
            }),
            "minimize" => Ok(Command::Minimize),
            "maximize" => Ok(Command::Maximize),
            "close" => Ok(Command::CloseWindow),
            other => Err(CommandError::UnknownKind(other.to_string())),
        }
    }

    /// Short name used in log fields.
    pub fn name(&self) -> &'static str {
        match self {
            Command::ActivateTab { .. } => "tab-change",
            Command::ReleaseTab { .. } => "view-release",
            Command::CloseTab => "tab-close",
            Command::Navigate { .. } => "open-url",
            Command::GoBack { .. } => "page-back",
            Command::Refresh { .. } => "page-refresh",
            Command::FindInPage { .. } => "find-in-page",
            Command::Minimize => "minimize",
            Command::Maximize => "maximize",
            Command::CloseWindow => "close",
        }
    }
}

fn string_payload(payload: &Value) -> Option<String> {
    payload.as_str().map(str::to_string)
}

/// Result of a command, returned to the front-end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Fire-and-forget commands.
    Done,
    /// Result of `tab-change`.
    Activated { success: bool },
    /// Request id of a find-in-page call, `None` when nothing was searched.
    FindRequest(Option<u32>),
    /// A command failed in a way the front-end should know about.
    Error(String),
}

impl Reply {
    pub fn to_json(&self) -> Value {
        match self {
            Reply::Done => Value::Null,
            Reply::Activated { success } => json!({ "success": success }),
            Reply::FindRequest(Some(id)) => json!(id),
            Reply::FindRequest(None) => Value::Null,
            Reply::Error(message) => json!({ "error": message }),
        }
    }
}
