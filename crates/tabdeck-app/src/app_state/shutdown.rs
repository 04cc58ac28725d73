//! Teardown when the window closes or the front-end asks to exit.

use super::core::TabdeckApp;
use super::types::RUNTIME_SHUTDOWN_TIMEOUT;

impl TabdeckApp {
    /// Surfaces go first so their debuggers detach, then the runtime gets a
    /// short grace period for captures still being written.
    pub(super) fn shutdown(&mut self) {
        tracing::info!("tearing down surfaces");

        if let Some(mut orchestrator) = self.orchestrator.take() {
            orchestrator.shutdown();
        }
        self.chrome = None;
        self.shortcuts.on_focus_lost();

        if let Some(runtime) = self.tokio_runtime.take() {
            runtime.shutdown_timeout(RUNTIME_SHUTDOWN_TIMEOUT);
        }

        tracing::debug!("teardown finished");
    }
}
