//! Runs network interceptors on the app's tokio runtime.

use std::time::{Duration, Instant};

use tokio::runtime::Handle;
use tokio::sync::oneshot::{self, error::TryRecvError};

use tabdeck_common::TabKey;
use tabdeck_devtools::{AttachTarget, Interceptor};

use crate::orchestrator::InterceptorHook;

/// A session whose first load is still held.
struct Waiting {
    key: TabKey,
    ready: oneshot::Receiver<()>,
    since: Instant,
}

pub(crate) struct RuntimeInterceptor {
    interceptor: Interceptor,
    handle: Handle,
    waiting: Vec<Waiting>,
    ready_timeout: Duration,
}

impl RuntimeInterceptor {
    pub(crate) fn new(interceptor: Interceptor, handle: Handle, ready_timeout: Duration) -> Self {
        Self {
            interceptor,
            handle,
            waiting: Vec::new(),
            ready_timeout,
        }
    }
}

impl InterceptorHook for RuntimeInterceptor {
    fn enabled(&self) -> bool {
        true
    }

    fn attach(&mut self, target: AttachTarget) -> bool {
        tracing::debug!(key = %target.key, port = ?target.port, "spawning network interceptor");
        let key = target.key.clone();
        let session = self.interceptor.spawn(&self.handle, target);
        // The session ends on its own when the surface goes away; the task
        // is detached.
        drop(session.task);
        self.waiting.push(Waiting {
            key,
            ready: session.ready,
            since: Instant::now(),
        });
        true
    }

    fn take_ready(&mut self) -> Vec<TabKey> {
        let mut done = Vec::new();
        let timeout = self.ready_timeout;
        self.waiting.retain_mut(|waiting| {
            match waiting.ready.try_recv() {
                Ok(()) => {}
                Err(TryRecvError::Closed) => {
                    tracing::debug!(key = %waiting.key, "interceptor gave up, loading anyway");
                }
                Err(TryRecvError::Empty) if waiting.since.elapsed() >= timeout => {
                    tracing::warn!(key = %waiting.key, "interceptor not ready in time, loading anyway");
                }
                Err(TryRecvError::Empty) => return true,
            }
            done.push(waiting.key.clone());
            false
        });
        done
    }
}
