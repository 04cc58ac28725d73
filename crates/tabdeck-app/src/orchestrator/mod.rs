//! The tab orchestrator.
//!
//! Owns the surface registry, navigation history, the visible slot and the
//! find session. Every mutation runs on the event-loop thread through
//! `&mut self`, fed by commands from the front-end and events from surfaces
//! in the order they were queued.

mod find;
mod lifecycle;
mod navigation;
mod window;


use std::collections::HashMap;

use tabdeck_common::{Command, EventBus, FrontendEvent, Reply, TabKey, WindowSize};
use tabdeck_devtools::AttachTarget;
use tabdeck_layout::BoundsCalculator;
use tabdeck_webview::{IpcMessage, NavigationHistory, SurfaceHost, ViewRegistry};

/// Host-window operations the front-end can trigger.
pub trait WindowControls {
    fn minimize(&mut self);
    fn set_maximized(&mut self, maximized: bool);
}

/// Starts network interception for new surfaces.
///
/// While enabled, a new surface is created on [`tabdeck_webview::BLANK_URL`]
/// and its real URL is loaded once the hook lists the key in
/// [`InterceptorHook::take_ready`].
pub trait InterceptorHook {
    fn enabled(&self) -> bool;

    /// Returns whether an interceptor was started.
    fn attach(&mut self, target: AttachTarget) -> bool;

    /// Keys whose interceptor is listening, or gave up, since the last call.
    fn take_ready(&mut self) -> Vec<TabKey>;
}

impl<T: InterceptorHook> InterceptorHook for Option<T> {
    fn enabled(&self) -> bool {
        self.as_ref().is_some_and(T::enabled)
    }

    fn attach(&mut self, target: AttachTarget) -> bool {
        match self {
            Some(hook) => hook.attach(target),
            None => false,
        }
    }

    fn take_ready(&mut self) -> Vec<TabKey> {
        self.as_mut().map(T::take_ready).unwrap_or_default()
    }
}

#[derive(Debug)]
struct FindSession {
    last_text: String,
    next_request_id: u32,
}

impl Default for FindSession {
    fn default() -> Self {
        Self {
            last_text: String::new(),
            next_request_id: 1,
        }
    }
}

pub struct Orchestrator<H: SurfaceHost, C, A> {
    host: H,
    registry: ViewRegistry<H::Surface>,
    history: NavigationHistory,
    bounds: BoundsCalculator,
    window_size: WindowSize,
    current: Option<TabKey>,
    attached: Option<TabKey>,
    /// First loads held until the surface's interceptor is listening.
    pending_loads: HashMap<TabKey, String>,
    find: FindSession,
    maximized: bool,
    exit_requested: bool,
    controls: C,
    interceptor: A,
    bus: EventBus,
}

impl<H, C, A> Orchestrator<H, C, A>
where
    H: SurfaceHost,
    C: WindowControls,
    A: InterceptorHook,
{
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        host: H,
        controls: C,
        interceptor: A,
        bounds: BoundsCalculator,
        history_capacity: usize,
        window_size: WindowSize,
        maximized: bool,
        bus: EventBus,
    ) -> Self {
        Self {
            host,
            registry: ViewRegistry::new(),
            history: NavigationHistory::new(history_capacity),
            bounds,
            window_size,
            current: None,
            attached: None,
            pending_loads: HashMap::new(),
            find: FindSession::default(),
            maximized,
            exit_requested: false,
            controls,
            interceptor,
            bus,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn current(&self) -> Option<&TabKey> {
        self.current.as_ref()
    }

    pub fn attached(&self) -> Option<&TabKey> {
        self.attached.as_ref()
    }

    pub fn history(&self) -> &NavigationHistory {
        &self.history
    }

    pub fn registry(&self) -> &ViewRegistry<H::Surface> {
        &self.registry
    }

    pub fn is_maximized(&self) -> bool {
        self.maximized
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    /// Whether `key`'s first load is still waiting on its interceptor.
    pub fn is_load_pending(&self, key: &TabKey) -> bool {
        self.pending_loads.contains_key(key)
    }

    /// Parse and run a front-end message.
    pub fn handle_ipc(&mut self, msg: &IpcMessage) -> Reply {
        match Command::parse(&msg.kind, &msg.payload) {
            Ok(command) => self.handle_command(command),
            Err(e) => {
                tracing::warn!(kind = %msg.kind, error = %e, "IPC message rejected");
                Reply::Error(e.to_string())
            }
        }
    }

    pub fn handle_command(&mut self, command: Command) -> Reply {
        tracing::debug!(command = command.name(), "dispatching command");
        match command {
            Command::ActivateTab { key, url } => Reply::Activated {
                success: self.activate(key, &url),
            },
            Command::ReleaseTab { key } => {
                self.release(&key);
                Reply::Done
            }
            Command::CloseTab => {
                self.close();
                Reply::Done
            }
            Command::Navigate { url } => {
                self.navigate(&url);
                Reply::Done
            }
            Command::GoBack { key, count } => match self.go_back(&key, count) {
                Ok(()) => Reply::Done,
                Err(e) => Reply::Error(e.to_string()),
            },
            Command::Refresh { key } => {
                self.refresh(&key);
                Reply::Done
            }
            Command::FindInPage { text } => Reply::FindRequest(self.search(&text)),
            Command::Minimize => {
                self.minimize();
                Reply::Done
            }
            Command::Maximize => {
                self.toggle_maximize();
                Reply::Done
            }
            Command::CloseWindow => {
                self.request_exit();
                Reply::Done
            }
        }
    }

    fn publish(&self, event: FrontendEvent) {
        self.bus.publish(event);
    }
}
