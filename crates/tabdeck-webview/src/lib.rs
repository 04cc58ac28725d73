//! Tab surfaces and the chrome webview.
//!
//! - [`Surface`] / [`SurfaceHost`]: what the orchestrator needs from a
//!   browsing surface, implemented over `wry` by [`WrySurfaceHost`]
//! - [`ChromeView`]: the full-window front-end webview and its IPC bridge
//! - [`ViewRegistry`] and [`NavigationHistory`]: per-tab bookkeeping
//! - storage partitions, one directory per tab key

pub mod content;
pub mod events;
pub mod history;
pub mod ipc;
pub mod keys;
pub mod manager;
pub mod partition;
pub mod registry;
pub mod surface;

pub use content::FrontendAssets;
pub use events::{HostEvent, SurfaceEvent};
pub use history::NavigationHistory;
pub use ipc::IpcMessage;
pub use keys::KeyPress;
pub use manager::{ChromeSource, ChromeView, SurfaceSettings, WrySurface, WrySurfaceHost};
pub use registry::ViewRegistry;
pub use surface::{Surface, SurfaceHost, BLANK_URL};
