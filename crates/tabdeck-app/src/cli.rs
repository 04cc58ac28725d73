use clap::Parser;

/// Tabdeck: a tabbed browser shell around a web front-end.
#[derive(Parser, Debug)]
#[command(name = "tabdeck", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Load the front-end from this URL instead of the bundled files.
    #[arg(long)]
    pub url: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_overrides() {
        let args = Args::parse_from([
            "tabdeck",
            "--config",
            "/tmp/tabdeck.toml",
            "--log-level",
            "debug",
            "--url",
            "http://localhost:5173",
        ]);
        assert_eq!(args.config.as_deref(), Some("/tmp/tabdeck.toml"));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert_eq!(args.url.as_deref(), Some("http://localhost:5173"));
    }

    #[test]
    fn everything_is_optional() {
        let args = Args::parse_from(["tabdeck"]);
        assert!(args.config.is_none());
        assert!(args.log_level.is_none());
        assert!(args.url.is_none());
    }
}
