use tabdeck_common::{Rect, TabKey, TabdeckError};
use wry::{WebContext, WebView};

use crate::events::{HostEvent, SurfaceEvent};
use crate::surface::Surface;

use super::bounds::rect_to_wry;
use super::{push_event, webview_error, EventSink};

/// A tab's webview together with the context that owns its partition.
pub struct WrySurface {
    // Declared before `_context` so the webview drops first.
    pub(super) webview: WebView,
    pub(super) _context: WebContext,
    pub(super) key: TabKey,
    pub(super) current_url: String,
    pub(super) events: EventSink,
    pub(super) debug_port: Option<u16>,
}

impl WrySurface {
    pub fn key(&self) -> &TabKey {
        &self.key
    }
}

impl Surface for WrySurface {
    fn load_url(&mut self, url: &str) -> Result<(), TabdeckError> {
        self.webview.load_url(url).map_err(webview_error)?;
        self.current_url = url.to_string();
        Ok(())
    }

    fn current_url(&self) -> &str {
        &self.current_url
    }

    fn set_current_url(&mut self, url: &str) {
        self.current_url = url.to_string();
    }

    fn set_bounds(&self, bounds: Rect) -> Result<(), TabdeckError> {
        self.webview
            .set_bounds(rect_to_wry(bounds))
            .map_err(webview_error)
    }

    fn set_visible(&self, visible: bool) -> Result<(), TabdeckError> {
        self.webview.set_visible(visible).map_err(webview_error)
    }

    fn find_in_page(
        &self,
        text: &str,
        find_next: bool,
        request_id: u32,
    ) -> Result<(), TabdeckError> {
        let events = self.events.clone();
        let key = self.key.clone();
        self.webview
            .evaluate_script_with_callback(&find_script(text, find_next), move |result| {
                push_event(
                    &events,
                    HostEvent::Surface(SurfaceEvent::FoundInPage {
                        key: key.clone(),
                        request_id,
                        matches: result.trim() == "true",
                    }),
                );
            })
            .map_err(webview_error)
    }

    fn debug_port(&self) -> Option<u16> {
        self.debug_port
    }
}

/// Script searching the page for `text`; evaluates to a boolean.
///
/// A fresh search clears the selection first so it starts from the top of
/// the document; a repeated search continues after the current match.
pub(crate) fn find_script(text: &str, find_next: bool) -> String {
    let needle = serde_json::to_string(text).unwrap_or_else(|_| "\"\"".to_string());
    let reset = if find_next {
        ""
    } else {
        "var sel = window.getSelection(); if (sel) { sel.removeAllRanges(); } "
    };
    format!("(function() {{ {reset}return window.find({needle}, false, false, true); }})()")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_search_resets_selection() {
        let js = find_script("needle", false);
        assert!(js.contains("removeAllRanges"));
        assert!(js.contains(r#"window.find("needle", false, false, true)"#));
    }

    #[test]
    fn find_next_keeps_selection() {
        let js = find_script("needle", true);
        assert!(!js.contains("removeAllRanges"));
    }

    #[test]
    fn search_text_is_escaped() {
        let js = find_script("a\"); alert(1); (\"", false);
        assert!(js.contains(r#""a\"); alert(1); (\"""#));
    }
}
