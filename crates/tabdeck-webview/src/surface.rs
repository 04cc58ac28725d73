//! The seam between the orchestrator and concrete webviews.

use tabdeck_common::{Rect, TabKey, TabdeckError};

/// Placeholder page a surface starts on while its first load is held back.
pub const BLANK_URL: &str = "about:blank";

/// One tab's browsing surface.
pub trait Surface {
    fn load_url(&mut self, url: &str) -> Result<(), TabdeckError>;

    /// Last URL loaded or navigated to.
    fn current_url(&self) -> &str;

    /// Record a completed navigation reported by the page.
    fn set_current_url(&mut self, url: &str);

    fn set_bounds(&self, bounds: Rect) -> Result<(), TabdeckError>;

    fn set_visible(&self, visible: bool) -> Result<(), TabdeckError>;

    /// Start (or continue, when `find_next`) a text search. The result is
    /// reported asynchronously as a find-in-page event tagged `request_id`.
    fn find_in_page(&self, text: &str, find_next: bool, request_id: u32)
        -> Result<(), TabdeckError>;

    /// Remote-debugging port of the surface's browser process, if any.
    fn debug_port(&self) -> Option<u16> {
        None
    }
}

/// Creates surfaces, each in the storage partition for its key.
pub trait SurfaceHost {
    type Surface: Surface;

    fn create_surface(
        &mut self,
        key: &TabKey,
        url: &str,
        bounds: Rect,
    ) -> Result<Self::Surface, TabdeckError>;
}
