//! Activation, release and the visible slot.

use tabdeck_common::{TabKey, WindowSize};
use tabdeck_devtools::AttachTarget;
use tabdeck_webview::{Surface, SurfaceHost, BLANK_URL};
use tracing::{debug, info, warn};

use super::{InterceptorHook, Orchestrator, WindowControls};

impl<H, C, A> Orchestrator<H, C, A>
where
    H: SurfaceHost,
    C: WindowControls,
    A: InterceptorHook,
{
    /// Show the surface for `key`, creating it with `url` on first use.
    ///
    /// With interception enabled the surface starts blank and `url` is
    /// loaded by [`Self::poll_interceptors`] once the interceptor listens.
    ///
    /// Returns `false` only when a new surface could not be created; the
    /// visible slot is left untouched in that case.
    pub fn activate(&mut self, key: TabKey, url: &str) -> bool {
        if self.current.as_ref() == Some(&key) {
            return true;
        }

        if !self.registry.contains(&key) && !self.create(&key, url) {
            return false;
        }

        self.detach_visible();
        if let Some(surface) = self.registry.get(&key) {
            if let Err(e) = surface.set_visible(true) {
                warn!(key = %key, error = %e, "failed to show surface");
            }
        }
        self.attached = Some(key.clone());
        self.current = Some(key);
        self.reposition();
        true
    }

    fn create(&mut self, key: &TabKey, url: &str) -> bool {
        let deferred = self.interceptor.enabled();
        let initial = if deferred { BLANK_URL } else { url };
        let bounds = self.bounds.compute(self.window_size);
        let surface = match self.host.create_surface(key, initial, bounds) {
            Ok(surface) => surface,
            Err(e) => {
                warn!(key = %key, url = %url, error = %e, "surface creation failed");
                return false;
            }
        };
        let intercepting = deferred
            && self.interceptor.attach(AttachTarget {
                key: key.clone(),
                hint_url: initial.to_string(),
                port: surface.debug_port(),
            });
        self.registry.insert(key.clone(), surface, intercepting);
        info!(key = %key, url = %url, intercepting, "surface created");

        if intercepting {
            self.pending_loads.insert(key.clone(), url.to_string());
        } else if deferred {
            self.load_initial(key, url);
        }
        true
    }

    /// Issue held first loads for surfaces whose interceptor is ready.
    pub fn poll_interceptors(&mut self) {
        for key in self.interceptor.take_ready() {
            if let Some(url) = self.pending_loads.remove(&key) {
                self.load_initial(&key, &url);
            }
        }
    }

    fn load_initial(&mut self, key: &TabKey, url: &str) {
        let Some(surface) = self.registry.get_mut(key) else {
            return;
        };
        debug!(key = %key, url = %url, "initial load");
        if let Err(e) = surface.load_url(url) {
            warn!(key = %key, url = %url, error = %e, "initial load failed");
        }
    }

    /// Detach the visible slot and destroy the surface for `key`.
    ///
    /// History for `key` is kept. A later activation of `key` builds a fresh
    /// surface in the same partition.
    pub fn release(&mut self, key: &TabKey) {
        self.detach_visible();
        self.current = None;
        self.pending_loads.remove(key);
        if self.registry.remove(key) {
            info!(key = %key, "surface released");
        } else {
            debug!(key = %key, "release of unknown tab");
        }
    }

    /// Hide the visible surface. Cached surfaces stay alive.
    pub fn close(&mut self) {
        self.detach_visible();
        self.current = None;
    }

    /// Track a new window size and re-place the attached surface.
    pub fn resize(&mut self, size: WindowSize) {
        if size.is_empty() {
            return;
        }
        self.window_size = size;
        self.reposition();
    }

    /// Destroy every surface.
    pub fn shutdown(&mut self) {
        self.attached = None;
        self.current = None;
        self.pending_loads.clear();
        self.registry.destroy_all();
    }

    fn detach_visible(&mut self) {
        let Some(previous) = self.attached.take() else {
            return;
        };
        if let Some(surface) = self.registry.get(&previous) {
            if let Err(e) = surface.set_visible(false) {
                warn!(key = %previous, error = %e, "failed to hide surface");
            }
        }
    }

    fn reposition(&self) {
        let Some(key) = &self.attached else {
            return;
        };
        let Some(surface) = self.registry.get(key) else {
            return;
        };
        let bounds = self.bounds.compute(self.window_size);
        if let Err(e) = surface.set_bounds(bounds) {
            warn!(key = %key, error = %e, "failed to set surface bounds");
        }
    }

    /// The attached surface, if any.
    pub(super) fn attached_surface(&self) -> Option<&H::Surface> {
        self.attached.as_ref().and_then(|key| self.registry.get(key))
    }

    pub(super) fn attached_surface_mut(&mut self) -> Option<&mut H::Surface> {
        let key = self.attached.as_ref()?;
        self.registry.get_mut(key)
    }
}
