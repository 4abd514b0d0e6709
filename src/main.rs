//! Sleepwise: Sleep health assessment in the terminal.
//!
//! Main entry point for the terminal application.

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use sleepwise::adapters::sanitize::SanitizingMakeWriter;
use sleepwise::tui::App;
use sleepwise::Settings;

#[derive(Debug, Parser)]
#[command(name = "sleepwise", version, about = "Sleep disorder risk assessment")]
struct Cli {
    /// Settings file (defaults to ./sleepwise.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Prediction service URL
    #[arg(long)]
    endpoint: Option<String>,

    /// Prediction request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logging to the terminal would corrupt the TUI (alternate screen), so
    // an interactive session logs to a file unless told otherwise.
    let log_mode = std::env::var("SLEEPWISE_LOG_MODE").unwrap_or_else(|_| "auto".to_string());
    let use_file = match log_mode.as_str() {
        "file" => true,
        "stdout" => false,
        _ => std::io::stdout().is_terminal(),
    };

    let (writer, _guard) = if use_file {
        let log_file =
            std::env::var("SLEEPWISE_LOG_FILE").unwrap_or_else(|_| "sleepwise.log".to_string());
        if let Some(parent) = std::path::Path::new(&log_file).parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .with_context(|| format!("Cannot open log file {log_file}"))?;
        tracing_appender::non_blocking(file)
    } else {
        tracing_appender::non_blocking(std::io::stdout())
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(SanitizingMakeWriter::new(writer)))
        .init();

    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(endpoint) = cli.endpoint {
        settings.endpoint = endpoint;
    }
    if let Some(timeout) = cli.timeout_secs {
        settings.timeout_secs = timeout;
    }
    settings.validate()?;

    tracing::info!(endpoint = %settings.endpoint, timeout_secs = settings.timeout_secs, "Starting Sleepwise...");

    let mut app = App::new(&settings)?;
    app.run()?;

    tracing::info!("Sleepwise shutdown complete.");
    Ok(())
}
