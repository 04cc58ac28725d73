use tabdeck_common::{Rect, TabKey, TabdeckError};
use tracing::debug;
use wry::raw_window_handle::HasWindowHandle;
use wry::{WebContext, WebViewBuilder};

use crate::keys::KEY_FORWARD_SCRIPT;
use crate::partition::partition_path;
use crate::surface::SurfaceHost;

use super::bounds::rect_to_wry;
use super::handle::WrySurface;
use super::handlers::{attach_key_handler, attach_navigation_handler, attach_new_window_handler};
use super::{webview_error, WrySurfaceHost};

impl<W: HasWindowHandle> SurfaceHost for WrySurfaceHost<W> {
    type Surface = WrySurface;

    /// Build a hidden child webview for `key` in its own partition.
    fn create_surface(
        &mut self,
        key: &TabKey,
        url: &str,
        bounds: Rect,
    ) -> Result<WrySurface, TabdeckError> {
        let data_dir = partition_path(&self.settings.partition_root, key);
        std::fs::create_dir_all(&data_dir)?;
        let mut context = WebContext::new(Some(data_dir.clone()));
        let debug_port = self.take_debug_port();

        let mut builder = WebViewBuilder::with_web_context(&mut context)
            .with_bounds(rect_to_wry(bounds))
            .with_devtools(self.settings.devtools)
            .with_visible(false)
            .with_focused(false)
            .with_initialization_script(KEY_FORWARD_SCRIPT)
            .with_url(url);

        if let Some(ua) = &self.settings.user_agent {
            builder = builder.with_user_agent(ua);
        }
        builder = attach_navigation_handler(builder, self.events.clone(), key.clone());
        builder = attach_new_window_handler(builder, self.events.clone(), key.clone());
        builder = attach_key_handler(builder, self.events.clone(), key.clone());
        builder = with_debug_port(builder, debug_port);

        let webview = builder
            .build_as_child(self.window.as_ref())
            .map_err(webview_error)?;

        debug!(key = %key, url = %url, partition = %data_dir.display(), "surface created");

        Ok(WrySurface {
            webview,
            _context: context,
            key: key.clone(),
            current_url: url.to_string(),
            events: self.events.clone(),
            debug_port,
        })
    }
}

#[cfg(windows)]
fn with_debug_port(builder: WebViewBuilder<'_>, port: Option<u16>) -> WebViewBuilder<'_> {
    use wry::WebViewBuilderExtWindows;

    match port {
        // Keep WebView2's default feature flags alongside the port.
        Some(port) => builder.with_additional_browser_args(format!(
            "--disable-features=msWebOOUI,msPdfOOUI,msSmartScreenProtection --remote-debugging-port={port}"
        )),
        None => builder,
    }
}

#[cfg(not(windows))]
fn with_debug_port(builder: WebViewBuilder<'_>, _port: Option<u16>) -> WebViewBuilder<'_> {
    builder
}
