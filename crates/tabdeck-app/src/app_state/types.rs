//! Internal types and constants for the app state module.

use std::sync::Arc;
use std::time::Duration;

use tabdeck_webview::WrySurfaceHost;
use winit::window::Window;

use crate::orchestrator::Orchestrator;

use super::interception::RuntimeInterceptor;

/// How often queued webview events are drained (approx 120 Hz).
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(8);

/// Longest a new tab's first load waits for its interceptor to attach.
pub(super) const INTERCEPTOR_READY_TIMEOUT: Duration = Duration::from_secs(3);

/// Grace period for in-flight captures when the runtime shuts down.
pub(super) const RUNTIME_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(2);

pub(super) type AppOrchestrator =
    Orchestrator<WrySurfaceHost<Window>, Arc<Window>, Option<RuntimeInterceptor>>;
