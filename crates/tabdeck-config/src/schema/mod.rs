//! Configuration schema types for Tabdeck.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults the application ships with.

mod frontend;
mod history;
mod interceptor;
mod layout;
mod shortcuts;
mod surface;
mod system;
mod window;

pub use frontend::*;
pub use history::*;
pub use interceptor::*;
pub use layout::*;
pub use shortcuts::*;
pub use surface::*;
pub use system::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Tabdeck.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TabdeckConfig {
    pub window: WindowConfig,
    pub frontend: FrontendConfig,
    pub layout: LayoutConfig,
    pub history: HistoryConfig,
    pub surface: SurfaceConfig,
    pub interceptor: InterceptorConfig,
    pub shortcuts: ShortcutConfig,
    pub logging: LoggingConfig,
}
