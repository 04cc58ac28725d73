//! State owned by the winit handler.

use std::sync::Arc;

use tokio::sync::broadcast;
use winit::window::Window;

use tabdeck_common::{EventBus, FrontendEvent};
use tabdeck_config::TabdeckConfig;
use tabdeck_platform::{LocalShortcutBackend, ShortcutManager};
use tabdeck_webview::ChromeView;

use super::types::AppOrchestrator;

/// Everything the event loop drives. The window, chrome and orchestrator
/// are created on the first `resumed`.
pub struct TabdeckApp {
    pub(super) config: TabdeckConfig,
    /// `--url` from the command line; wins over `frontend.url`.
    pub(super) url_override: Option<String>,
    pub(super) shortcuts: ShortcutManager<LocalShortcutBackend>,
    pub(super) event_bus: EventBus,
    pub(super) frontend_rx: broadcast::Receiver<FrontendEvent>,

    pub(super) window: Option<Arc<Window>>,
    pub(super) chrome: Option<ChromeView>,
    pub(super) orchestrator: Option<AppOrchestrator>,

    /// Held modifiers, tracked from `ModifiersChanged`.
    pub(super) modifiers: winit::keyboard::ModifiersState,

    /// Only present while the interceptor is enabled.
    pub(super) tokio_runtime: Option<tokio::runtime::Runtime>,

    pub(super) should_exit: bool,
}

impl TabdeckApp {
    pub fn new(config: TabdeckConfig, url_override: Option<String>) -> Self {
        let shortcuts = ShortcutManager::from_config(&config.shortcuts, LocalShortcutBackend::new());
        let event_bus = EventBus::new(256);
        let frontend_rx = event_bus.subscribe();
        Self {
            config,
            url_override,
            shortcuts,
            event_bus,
            frontend_rx,
            window: None,
            chrome: None,
            orchestrator: None,
            modifiers: winit::keyboard::ModifiersState::empty(),
            tokio_runtime: None,
            should_exit: false,
        }
    }
}
