mod app_state;
mod cli;
mod orchestrator;

use std::path::Path;
use std::process::ExitCode;

use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

/// A bare level like `debug` applies to the tabdeck crates only.
fn log_directive(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("tabdeck={level}")
    }
}

fn main() -> ExitCode {
    let args = cli::parse();

    // Config is read before logging so its level can apply; load errors are
    // reported once the subscriber is up.
    let loaded = tabdeck_config::load_config(args.config.as_deref().map(Path::new));
    let config = match &loaded {
        Ok(config) => config.clone(),
        Err(_) => tabdeck_config::TabdeckConfig::default(),
    };

    let directive = match args.log_level.as_deref() {
        Some(level) => log_directive(level),
        None => config.logging.level.directive().to_string(),
    };
    let mut filter = EnvFilter::from_default_env();
    match directive.parse::<Directive>() {
        Ok(directive) => filter = filter.add_directive(directive),
        Err(e) => eprintln!("ignoring invalid log level '{directive}': {e}"),
    }
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "tabdeck host starting");
    match (&loaded, args.config.as_deref()) {
        (Err(e), _) => tracing::warn!("falling back to default config: {e}"),
        (Ok(_), Some(path)) => tracing::info!(path, "config loaded"),
        (Ok(_), None) => {}
    }
    tracing::debug!("effective config:\n{}", tabdeck_config::config_to_json(&config));

    if let Err(e) = tabdeck_platform::ensure_dirs() {
        tracing::warn!("data directories unavailable: {e}");
    }

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("no event loop: {e}");
            return ExitCode::FAILURE;
        }
    };
    let mut app = app_state::TabdeckApp::new(config, args.url);

    let outcome = event_loop.run_app(&mut app);
    match outcome {
        Ok(()) => {
            tracing::info!("tabdeck host exited");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("event loop stopped: {e}");
            ExitCode::FAILURE
        }
    }
}
