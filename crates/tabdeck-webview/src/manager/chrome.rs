use std::borrow::Cow;
use std::sync::{Arc, Mutex};

use serde_json::Value;
use tabdeck_common::{Rect, TabdeckError};
use tracing::{debug, warn};
use wry::http::{header::CONTENT_TYPE, HeaderValue, Response, StatusCode};
use wry::raw_window_handle::HasWindowHandle;
use wry::{WebView, WebViewBuilder};

use crate::content::{index_url, FrontendAssets, SCHEME};
use crate::events::HostEvent;
use crate::ipc::{js_dispatch_message, js_resolve_message, IPC_INIT_SCRIPT};
use crate::keys::KEY_FORWARD_SCRIPT;

use super::bounds::rect_to_wry;
use super::handlers::attach_ipc_handler;
use super::webview_error;

/// Where the front-end is loaded from.
pub enum ChromeSource {
    /// A running dev server.
    Url(String),
    /// A built bundle, served over the custom scheme.
    Bundle {
        assets: FrontendAssets,
        index_file: String,
    },
}

/// The front-end webview: tab strip, address bar, navigation and window
/// buttons. Tab surfaces are layered above it.
pub struct ChromeView {
    webview: WebView,
}

impl ChromeView {
    pub fn create<W: HasWindowHandle>(
        window: &W,
        source: ChromeSource,
        bounds: Rect,
        devtools: bool,
        events: Arc<Mutex<Vec<HostEvent>>>,
    ) -> Result<Self, TabdeckError> {
        let mut builder = WebViewBuilder::new()
            .with_bounds(rect_to_wry(bounds))
            .with_devtools(devtools)
            .with_initialization_script(IPC_INIT_SCRIPT)
            .with_initialization_script(KEY_FORWARD_SCRIPT);
        builder = attach_ipc_handler(builder, events);

        let url = match source {
            ChromeSource::Url(url) => url,
            ChromeSource::Bundle { assets, index_file } => {
                let assets = Arc::new(assets);
                builder = builder.with_custom_protocol(SCHEME.to_string(), move |_id, request| {
                    let uri = request.uri().to_string();
                    match assets.resolve(&uri) {
                        Some((mime, data)) => respond(StatusCode::OK, mime, data),
                        None => {
                            warn!(uri = %uri, "front-end asset not found");
                            respond(StatusCode::NOT_FOUND, "text/plain", b"Not Found".to_vec())
                        }
                    }
                });
                index_url(&index_file)
            }
        };

        let webview = builder
            .with_url(&url)
            .build_as_child(window)
            .map_err(webview_error)?;
        debug!(url = %url, "chrome view created");
        Ok(Self { webview })
    }

    /// Push an event to the front-end's `on(kind)` handler.
    pub fn dispatch(&self, kind: &str, payload: &Value) -> Result<(), TabdeckError> {
        self.webview
            .evaluate_script(&js_dispatch_message(kind, payload))
            .map_err(webview_error)
    }

    /// Settle the front-end's pending request `id`.
    pub fn resolve(&self, id: u64, value: &Value) -> Result<(), TabdeckError> {
        self.webview
            .evaluate_script(&js_resolve_message(id, value))
            .map_err(webview_error)
    }

    pub fn set_bounds(&self, bounds: Rect) -> Result<(), TabdeckError> {
        self.webview
            .set_bounds(rect_to_wry(bounds))
            .map_err(webview_error)
    }

    pub fn open_devtools(&self) {
        self.webview.open_devtools();
    }
}

fn respond(status: StatusCode, mime: &'static str, data: Vec<u8>) -> Response<Cow<'static, [u8]>> {
    let mut response = Response::new(Cow::Owned(data));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(mime));
    response
}
