use tabdeck_webview::{Surface, SurfaceHost};

use super::{InterceptorHook, Orchestrator, WindowControls};

impl<H, C, A> Orchestrator<H, C, A>
where
    H: SurfaceHost,
    C: WindowControls,
    A: InterceptorHook,
{
    /// Search the attached surface. Repeating the previous text moves to the
    /// next match; new text starts over.
    ///
    /// Returns the request id that tags the result event, or `None` when
    /// nothing was searched.
    pub fn search(&mut self, text: &str) -> Option<u32> {
        if text.is_empty() {
            return None;
        }
        let find_next = text == self.find.last_text;
        let request_id = self.find.next_request_id;

        let surface = self.attached_surface()?;
        if let Err(e) = surface.find_in_page(text, find_next, request_id) {
            tracing::warn!(error = %e, "find in page failed");
            return None;
        }

        self.find.next_request_id = request_id.wrapping_add(1).max(1);
        self.find.last_text = text.to_string();
        Some(request_id)
    }
}
