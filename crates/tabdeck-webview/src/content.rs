//! Serving the bundled front-end over the `tabdeck://` custom protocol.
//!
//! A request for `tabdeck://localhost/assets/app.js` is answered from
//! `{root}/assets/app.js`; the bare origin serves `index.html`.

use std::path::{Path, PathBuf};

/// Scheme registered on the chrome webview.
pub const SCHEME: &str = "tabdeck";

/// URL the chrome webview loads when serving bundled assets.
pub fn index_url(index_file: &str) -> String {
    if cfg!(windows) {
        // WebView2 maps custom schemes onto http://<scheme>.localhost.
        format!("http://{SCHEME}.localhost/{index_file}")
    } else {
        format!("{SCHEME}://localhost/{index_file}")
    }
}

/// Files of the built front-end.
pub struct FrontendAssets {
    root: PathBuf,
}

impl FrontendAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve a request URI to `(mime, bytes)`. Paths escaping the root are
    /// refused.
    pub fn resolve(&self, uri: &str) -> Option<(&'static str, Vec<u8>)> {
        let path = request_path(uri);
        let path = if path.is_empty() { "index.html" } else { path };

        let base = std::fs::canonicalize(&self.root).ok()?;
        let file = std::fs::canonicalize(self.root.join(path)).ok()?;
        if !file.starts_with(&base) {
            return None;
        }
        let data = std::fs::read(&file).ok()?;
        Some((mime_for(&file), data))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Strip scheme, host, query and fragment from a request URI.
fn request_path(uri: &str) -> &str {
    let without_scheme = uri.split_once("://").map_or(uri, |(_, rest)| rest);
    let path = without_scheme.split_once('/').map_or("", |(_, path)| path);
    path.split(['?', '#'])
        .next()
        .unwrap_or("")
        .trim_start_matches('/')
}

fn mime_for(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") | Some("htm") => "text/html",
        Some("css") => "text/css",
        Some("js") | Some("mjs") => "application/javascript",
        Some("json") | Some("map") => "application/json",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("woff2") => "font/woff2",
        Some("wasm") => "application/wasm",
        _ => "application/octet-stream",
    }
}
