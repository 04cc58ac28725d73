//! `wry`-backed surfaces.
//!
//! `WrySurfaceHost` creates one child webview per tab, each with its own
//! `WebContext` rooted in the tab's partition directory. All webview
//! callbacks, including the chrome view's IPC, push into one shared queue
//! that the main loop drains.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tabdeck_common::TabdeckError;

use crate::events::HostEvent;

mod bounds;
mod chrome;
mod handle;
mod handlers;
mod lifecycle;

pub use bounds::rect_to_wry;
pub use chrome::{ChromeSource, ChromeView};
pub use handle::WrySurface;

pub(crate) type EventSink = Arc<Mutex<Vec<HostEvent>>>;

/// How tab surfaces are built.
#[derive(Debug, Clone)]
pub struct SurfaceSettings {
    /// Root of the per-tab partition directories.
    pub partition_root: PathBuf,
    pub user_agent: Option<String>,
    pub devtools: bool,
    /// First remote-debugging port handed to surfaces. `None` disables
    /// remote debugging.
    pub remote_debugging_port: Option<u16>,
}

/// Builds tab surfaces as children of `window`.
pub struct WrySurfaceHost<W> {
    window: Arc<W>,
    settings: SurfaceSettings,
    events: EventSink,
    next_debug_port: Option<u16>,
}

impl<W> WrySurfaceHost<W> {
    pub fn new(window: Arc<W>, settings: SurfaceSettings) -> Self {
        let next_debug_port = settings.remote_debugging_port;
        Self {
            window,
            settings,
            events: Arc::new(Mutex::new(Vec::new())),
            next_debug_port,
        }
    }

    /// The queue shared with the chrome view.
    pub fn event_sink(&self) -> Arc<Mutex<Vec<HostEvent>>> {
        Arc::clone(&self.events)
    }

    /// Take every queued event, oldest first.
    pub fn drain_events(&self) -> Vec<HostEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(_) => Vec::new(),
        }
    }

    pub fn settings(&self) -> &SurfaceSettings {
        &self.settings
    }

    /// Each WebView2 browser process needs its own debugging port.
    fn take_debug_port(&mut self) -> Option<u16> {
        if !cfg!(windows) {
            return None;
        }
        let port = self.next_debug_port?;
        self.next_debug_port = port.checked_add(1);
        Some(port)
    }
}

pub(crate) fn webview_error(e: wry::Error) -> TabdeckError {
    TabdeckError::WebView(e.to_string())
}

pub(crate) fn push_event(events: &EventSink, event: HostEvent) {
    if let Ok(mut queue) = events.lock() {
        queue.push(event);
    }
}
