use almanac_app::cli::Cli;
use almanac_app::commands;
use almanac_app::config::{CalendarDefaults, DEFAULT_LOG_LEVEL, load_config};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new(DEFAULT_LOG_LEVEL));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;

    tracing::debug!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(
            level = %config.logging.level,
            "Invalid log level in config, keeping {DEFAULT_LOG_LEVEL}"
        );
    }

    let defaults = CalendarDefaults::from_settings(&config)?;

    let output = commands::run(&cli.command, &defaults)?;
    println!("{output}");

    Ok(())
}
