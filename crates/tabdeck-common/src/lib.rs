//! Types shared by every tabdeck crate: ids, geometry, commands, events
//! and errors.

pub mod actions;
pub mod commands;
pub mod errors;
pub mod events;
pub mod types;

pub use actions::Action;
pub use commands::{Command, CommandError, Reply};
pub use errors::{ConfigError, HistoryError, PlatformError, TabdeckError};
pub use events::{EventBus, FrontendEvent};
pub use types::{Rect, TabKey, WindowSize};
