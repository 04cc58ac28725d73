//! Draining of webview events and front-end notifications.

use std::time::Instant;

use tokio::sync::broadcast::error::TryRecvError;
use winit::event_loop::{ActiveEventLoop, ControlFlow};

use super::core::TabdeckApp;
use super::types::POLL_INTERVAL;

impl TabdeckApp {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        self.poll_host_events();
        if let Some(orchestrator) = self.orchestrator.as_mut() {
            orchestrator.poll_interceptors();
        }
        self.forward_frontend_events();
        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + POLL_INTERVAL));
    }

    /// Handle queued IPC and surface events in arrival order.
    fn poll_host_events(&mut self) {
        let events = match &self.orchestrator {
            Some(orchestrator) => orchestrator.host().drain_events(),
            None => return,
        };
        for event in events {
            self.handle_host_event(event);
        }
    }

    /// Push published events to the chrome front-end.
    pub(super) fn forward_frontend_events(&mut self) {
        loop {
            let event = match self.frontend_rx.try_recv() {
                Ok(event) => event,
                Err(TryRecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "front-end event queue overflowed");
                    continue;
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
            };
            let Some(chrome) = &self.chrome else {
                continue;
            };
            if let Err(e) = chrome.dispatch(event.kind(), &event.payload()) {
                tracing::warn!(kind = event.kind(), "Failed to notify front-end: {e}");
            }
        }
    }
}
