//! Watchpost - alert popups and multi-channel notifications
//!
//! Main entry point for the Watchpost CLI.

mod cli;
mod cmd_notify;
mod cmd_popup;
mod console;

use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::warn;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use watchpost_config::{Config, ConfigLoader, ConfigValidator, LoggingConfig};
use watchpost_protocols::Incident;

use crate::cli::{Cli, Commands};

fn init_tracing(logging: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG wins over the configured level.
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = if logging.file_enabled {
        let log_dir = PathBuf::from(ConfigLoader::expand_path(&logging.directory));
        std::fs::create_dir_all(&log_dir)?;

        let file_appender = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix("watchpost")
            .filename_suffix("log")
            .max_log_files(30)
            .build(&log_dir)?;

        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        // The guard flushes buffered lines on drop; keep it for the whole run.
        static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
            std::sync::OnceLock::new();
        let _ = GUARD.set(guard);

        Some(fmt::layer().with_writer(non_blocking).with_ansi(false))
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(env_filter)
        // Console output goes to stderr so command output stays clean.
        .with(
            fmt::layer()
                .with_target(true)
                .with_ansi(true)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .init();

    Ok(())
}

/// Reject invalid configuration and log warnings.
fn validate(config: &Config) -> anyhow::Result<()> {
    let warnings = ConfigValidator::validate(config)?.into_result()?;
    for warning in warnings {
        warn!(path = %warning.path, "{}", warning.message);
    }
    Ok(())
}

/// Report every configuration problem, not just the first one.
fn check_config(path: &Path, config: &Config) -> anyhow::Result<()> {
    let result = ConfigValidator::validate(config)?;

    for warning in &result.warnings {
        println!("warning: {}: {}", warning.path, warning.message);
    }
    for error in &result.errors {
        println!("error: {}: {}", error.path, error.message);
    }

    if !result.is_valid() {
        anyhow::bail!(
            "{} configuration error(s) in {}",
            result.errors.len(),
            path.display()
        );
    }

    if path.exists() {
        println!("{} is valid", path.display());
    } else {
        println!("{} not found, built-in defaults are valid", path.display());
    }
    Ok(())
}

async fn run(cli: Cli, config: Config) -> anyhow::Result<()> {
    if !matches!(cli.command, Commands::CheckConfig) {
        validate(&config)?;
    }

    match cli.command {
        Commands::Send {
            message,
            kind,
            channels,
        } => cmd_notify::notify_send(&config, &message, kind, channels).await,
        Commands::Incident {
            kind,
            camera,
            severity,
            description,
            location,
        } => {
            let mut incident = Incident::new(kind, camera, severity, description);
            if let Some(location) = location {
                incident = incident.with_location(location);
            }
            cmd_notify::notify_incident(&config, incident).await
        }
        Commands::TestChannels => cmd_notify::notify_test(&config).await,
        Commands::Status { format } => cmd_notify::channel_status(&config, &format),
        Commands::Popup {
            kind,
            title,
            message,
            hover_ticks,
        } => cmd_popup::run_popup(&config.popup, &kind, title, message, hover_ticks).await,
        Commands::CheckConfig => check_config(&cli.config, &config),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = ConfigLoader::load_or_default(&cli.config)?;
    init_tracing(&config.logging)?;

    run(cli, config).await?;
    Ok(())
}
