use serde_json::{json, Value};
use tokio::sync::broadcast;

/// Events pushed from the core to the chrome front-end.
#[derive(Debug, Clone, PartialEq)]
pub enum FrontendEvent {
    /// The attached surface navigated to an http(s) location.
    AddressChanged(String),
    /// A find-in-page shortcut fired while a surface was attached.
    ShowFindInPage,
    /// Result of a find-in-page request.
    FoundInPage { request_id: u32, matches: bool },
}

impl FrontendEvent {
    /// The IPC kind the front-end listens for.
    pub fn kind(&self) -> &'static str {
        match self {
            FrontendEvent::AddressChanged(_) => "address-change",
            FrontendEvent::ShowFindInPage => "show-find-in-page",
            FrontendEvent::FoundInPage { .. } => "found-in-page",
        }
    }

    pub fn payload(&self) -> Value {
        match self {
            FrontendEvent::AddressChanged(url) => json!(url),
            FrontendEvent::ShowFindInPage => Value::Null,
            FrontendEvent::FoundInPage {
                request_id,
                matches,
            } => json!({ "requestId": request_id, "matches": matches }),
        }
    }
}

/// Fan-out of [`FrontendEvent`]s. Clones publish into the same channel.
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<FrontendEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<FrontendEvent> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: FrontendEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}
