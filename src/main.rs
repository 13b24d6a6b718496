use color_eyre::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

mod analyzer;
mod completion;
mod config;
mod result_formatters;

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::new()?;
    let report = analyzer::run(&config)?;
    info!(took = %humantime::format_duration(report.took), "done");

    result_formatters::call(&config, &report.output)
}
