use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tabdeck_common::TabKey;

use crate::error::DevToolsError;

/// An unsolicited protocol event, e.g. `Network.responseReceived`.
#[derive(Debug, Clone, PartialEq)]
pub struct DebugEvent {
    pub method: String,
    pub params: Value,
}

impl DebugEvent {
    pub fn new(method: impl Into<String>, params: Value) -> Self {
        Self {
            method: method.into(),
            params,
        }
    }
}

/// A live debugging session with one surface.
///
/// Commands may be issued concurrently with event consumption, so both
/// methods take `&self`.
#[async_trait]
pub trait DebugChannel: Send + Sync {
    /// Send a command and wait for its result object.
    async fn send_command(&self, method: &str, params: Value) -> Result<Value, DevToolsError>;

    /// Next event, or `None` once the session has ended.
    async fn next_event(&self) -> Option<DebugEvent>;
}

/// The surface a connector should attach to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachTarget {
    pub key: TabKey,
    /// URL the surface was created with, used to pick the page target.
    pub hint_url: String,
    /// Remote-debugging port of the surface's browser process, when the
    /// surface host assigned one.
    pub port: Option<u16>,
}

/// Opens debugging sessions for surfaces.
#[async_trait]
pub trait DebugConnector: Send + Sync {
    async fn attach(&self, target: &AttachTarget) -> Result<Arc<dyn DebugChannel>, DevToolsError>;
}
