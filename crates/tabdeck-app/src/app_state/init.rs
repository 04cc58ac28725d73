//! Window creation, chrome webview and orchestrator setup.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use tabdeck_common::{Rect, WindowSize};
use tabdeck_config::schema::StartupMode;
use tabdeck_devtools::Interceptor;
use tabdeck_layout::BoundsCalculator;
use tabdeck_webview::{ChromeSource, ChromeView, FrontendAssets, SurfaceSettings, WrySurfaceHost};

use crate::orchestrator::Orchestrator;

use super::core::TabdeckApp;
use super::interception::RuntimeInterceptor;
use super::types::INTERCEPTOR_READY_TIMEOUT;

/// Rect covering the whole window.
pub(super) fn full_rect(size: WindowSize) -> Rect {
    Rect {
        x: 0,
        y: 0,
        width: size.width,
        height: size.height,
    }
}

impl TabdeckApp {
    /// Create the window, the chrome webview and the orchestrator.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let wc = &self.config.window;
        let maximized = wc.startup_mode == StartupMode::Maximized;
        let attrs = WindowAttributes::default()
            .with_title(wc.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(wc.width as f64, wc.height as f64))
            .with_decorations(wc.decorations)
            .with_maximized(maximized);

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };
        let inner = window.inner_size();
        let size = WindowSize::new(inner.width, inner.height);
        let focused = window.has_focus();

        let host = WrySurfaceHost::new(Arc::clone(&window), self.surface_settings());
        let chrome = match ChromeView::create(
            &*window,
            self.chrome_source(),
            full_rect(size),
            self.chrome_devtools(),
            host.event_sink(),
        ) {
            Ok(chrome) => chrome,
            Err(e) => {
                tracing::error!("Failed to create chrome webview: {e}");
                return false;
            }
        };
        if self.config.frontend.open_devtools_on_start {
            chrome.open_devtools();
        }

        let interceptor = self.start_interceptor();
        self.orchestrator = Some(Orchestrator::new(
            host,
            Arc::clone(&window),
            interceptor,
            BoundsCalculator::from_config(&self.config.layout),
            self.config.history.capacity,
            size,
            maximized,
            self.event_bus.clone(),
        ));
        self.chrome = Some(chrome);
        self.window = Some(window);

        self.sync_shortcuts_to_focus(focused);

        tracing::info!(width = size.width, height = size.height, "Window created");
        true
    }

    /// `Focused` is only delivered on change, so the state a window starts
    /// in has to be applied by hand.
    pub(super) fn sync_shortcuts_to_focus(&mut self, focused: bool) {
        if focused {
            self.shortcuts.on_focus_gained();
        } else {
            self.shortcuts.on_focus_lost();
        }
    }

    pub(super) fn chrome_devtools(&self) -> bool {
        let frontend = &self.config.frontend;
        frontend.devtools || frontend.open_devtools_on_start
    }

    pub(super) fn surface_settings(&self) -> SurfaceSettings {
        let partition_root = match &self.config.surface.partition_dir {
            Some(dir) => PathBuf::from(dir),
            None => tabdeck_platform::partitions_dir().unwrap_or_else(|e| {
                tracing::warn!("No data directory for partitions, using ./partitions: {e}");
                PathBuf::from("partitions")
            }),
        };
        SurfaceSettings {
            partition_root,
            user_agent: self.config.surface.user_agent.clone(),
            devtools: self.config.surface.devtools,
            remote_debugging_port: self
                .config
                .interceptor
                .enabled
                .then_some(self.config.interceptor.devtools_port),
        }
    }

    /// Dev-server URL when one is configured, the built bundle otherwise.
    pub(super) fn chrome_source(&self) -> ChromeSource {
        if let Some(url) = self
            .url_override
            .clone()
            .or_else(|| self.config.frontend.url.clone())
        {
            tracing::info!(url = %url, "Loading front-end from URL");
            return ChromeSource::Url(url);
        }

        let index = PathBuf::from(&self.config.frontend.index_html);
        if !index.is_file() {
            tracing::warn!(
                path = %index.display(),
                "Front-end bundle not found, the window will be blank"
            );
        }
        let root = index
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let index_file = index
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("index.html")
            .to_string();
        ChromeSource::Bundle {
            assets: FrontendAssets::new(root),
            index_file,
        }
    }

    /// Build the runtime and interceptor when interception is enabled.
    pub(super) fn start_interceptor(&mut self) -> Option<RuntimeInterceptor> {
        if !self.config.interceptor.enabled {
            return None;
        }
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("tabdeck-devtools")
            .enable_all()
            .build()
        {
            Ok(rt) => rt,
            Err(e) => {
                tracing::warn!("Failed to start tokio runtime, interception disabled: {e}");
                return None;
            }
        };

        let capture_dir = tabdeck_platform::capture_dir().unwrap_or_else(|e| {
            tracing::warn!("No data directory for captures, using ./captures: {e}");
            PathBuf::from("captures")
        });
        let interceptor = Interceptor::from_config(&self.config.interceptor, capture_dir);
        tracing::info!(
            capture_dir = %interceptor.settings().capture_dir.display(),
            extensions = ?interceptor.settings().image_extensions,
            "Network interception enabled"
        );
        let hook = RuntimeInterceptor::new(
            interceptor,
            runtime.handle().clone(),
            INTERCEPTOR_READY_TIMEOUT,
        );
        self.tokio_runtime = Some(runtime);
        Some(hook)
    }
}
