use std::path::PathBuf;

/// Problems reading or checking `config.toml`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no config at {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("unreadable config: {0}")]
    ParseError(String),

    #[error("invalid config value: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    /// A per-user directory is unavailable or could not be created.
    #[error("directory: {0}")]
    Dirs(String),

    #[error("shortcut: {0}")]
    Shortcut(String),
}

/// Failures of a navigation-history lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HistoryError {
    #[error("no history recorded for tab '{0}'")]
    Empty(String),

    #[error("cannot go back {count} entries in tab '{key}'")]
    Exhausted { key: String, count: usize },
}

/// Crate-spanning error for the host process.
#[derive(Debug, thiserror::Error)]
pub enum TabdeckError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    History(#[from] HistoryError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("webview: {0}")]
    WebView(String),

    #[error("devtools: {0}")]
    DevTools(String),
}
