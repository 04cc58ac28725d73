//! Navigation commands and surface events.

use tabdeck_common::{FrontendEvent, HistoryError, TabKey};
use tabdeck_webview::{Surface, SurfaceEvent, SurfaceHost, BLANK_URL};
use tracing::{debug, info, warn};

use super::{InterceptorHook, Orchestrator, WindowControls};

fn is_web_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

impl<H, C, A> Orchestrator<H, C, A>
where
    H: SurfaceHost,
    C: WindowControls,
    A: InterceptorHook,
{
    /// Load `url` in the attached surface. A held first load is dropped.
    pub fn navigate(&mut self, url: &str) {
        if let Some(key) = &self.attached {
            self.pending_loads.remove(key);
        }
        let Some(surface) = self.attached_surface_mut() else {
            debug!(url = %url, "navigate with no attached surface");
            return;
        };
        if let Err(e) = surface.load_url(url) {
            warn!(url = %url, error = %e, "navigation failed");
        }
    }

    /// Drop `count` entries of `key`'s history and load the new top in the
    /// attached surface.
    pub fn go_back(&mut self, key: &TabKey, count: usize) -> Result<(), HistoryError> {
        if self.attached.is_none() {
            debug!(key = %key, "go back with no attached surface");
            return Ok(());
        }
        let target = self.history.go_back(key, count).map_err(|e| {
            warn!(key = %key, count, error = %e, "go back rejected");
            e
        })?;
        if let Some(surface) = self.attached_surface_mut() {
            if let Err(e) = surface.load_url(&target) {
                warn!(url = %target, error = %e, "go back navigation failed");
            }
        }
        Ok(())
    }

    /// Reload the attached surface's current URL.
    pub fn refresh(&mut self, key: &TabKey) {
        let Some(surface) = self.attached_surface_mut() else {
            debug!(key = %key, "refresh with no attached surface");
            return;
        };
        let url = surface.current_url().to_string();
        if let Err(e) = surface.load_url(&url) {
            warn!(url = %url, error = %e, "refresh failed");
        }
    }

    pub fn handle_surface_event(&mut self, event: SurfaceEvent) {
        match event {
            SurfaceEvent::Navigated { key, url } if url == BLANK_URL => {
                debug!(key = %key, "placeholder page loaded");
            }
            SurfaceEvent::Navigated { key, url } => {
                if let Some(surface) = self.registry.get_mut(&key) {
                    surface.set_current_url(&url);
                }
                if is_web_url(&url) {
                    self.publish(FrontendEvent::AddressChanged(url.clone()));
                }
                self.history.record(&key, &url);
            }
            SurfaceEvent::WindowOpenRequested { key, url } => {
                let Some(surface) = self.registry.get_mut(&key) else {
                    return;
                };
                debug!(key = %key, url = %url, "loading window-open target in place");
                if let Err(e) = surface.load_url(&url) {
                    warn!(key = %key, url = %url, error = %e, "in-place load failed");
                }
            }
            SurfaceEvent::FoundInPage {
                key,
                request_id,
                matches,
            } => {
                info!(key = %key, request_id, matches, "found in page");
                self.publish(FrontendEvent::FoundInPage {
                    request_id,
                    matches,
                });
            }
        }
    }
}
