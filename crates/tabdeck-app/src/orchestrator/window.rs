use tabdeck_common::FrontendEvent;
use tabdeck_webview::SurfaceHost;

use super::{InterceptorHook, Orchestrator, WindowControls};

impl<H, C, A> Orchestrator<H, C, A>
where
    H: SurfaceHost,
    C: WindowControls,
    A: InterceptorHook,
{
    pub fn minimize(&mut self) {
        self.controls.minimize();
    }

    /// Flip the maximize flag. OS-driven resizes never touch it.
    pub fn toggle_maximize(&mut self) {
        self.maximized = !self.maximized;
        self.controls.set_maximized(self.maximized);
    }

    pub fn request_exit(&mut self) {
        tracing::info!("exit requested by front-end");
        self.exit_requested = true;
    }

    /// Ask the front-end to reveal its find bar, when there is something to
    /// search.
    pub fn show_find_in_page(&self) -> bool {
        if self.attached.is_none() {
            return false;
        }
        self.publish(FrontendEvent::ShowFindInPage);
        true
    }
}
