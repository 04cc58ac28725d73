//! Events produced by webviews, queued for the main loop.

use tabdeck_common::TabKey;

use crate::ipc::IpcMessage;
use crate::keys::KeyPress;

/// Something a tab surface reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// A main-frame navigation finished at `url`.
    Navigated { key: TabKey, url: String },
    /// The page asked to open `url` in a new window.
    WindowOpenRequested { key: TabKey, url: String },
    /// Result of a find-in-page request.
    FoundInPage {
        key: TabKey,
        request_id: u32,
        matches: bool,
    },
}

impl SurfaceEvent {
    pub fn key(&self) -> &TabKey {
        match self {
            SurfaceEvent::Navigated { key, .. }
            | SurfaceEvent::WindowOpenRequested { key, .. }
            | SurfaceEvent::FoundInPage { key, .. } => key,
        }
    }
}

/// Everything drained from the host's queue, in arrival order.
#[derive(Debug, Clone)]
pub enum HostEvent {
    /// A command from the chrome front-end.
    Ipc(IpcMessage),
    Surface(SurfaceEvent),
    /// A key press forwarded by the chrome or a tab surface.
    Key(KeyPress),
}
