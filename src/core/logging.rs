use anyhow::Context;
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

use crate::models::args::LogLevel;

/// Diagnostics go to stderr so stdout only carries the progress lines.
pub fn start_logger(log_level: LogLevel) -> anyhow::Result<()> {
    let level_filter = LevelFilter::from(log_level);
    let simplelog_config = ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .build();

    TermLogger::init(level_filter, simplelog_config, TerminalMode::Stderr, ColorChoice::Auto)
        .context("Couldn't initialize logger")?;

    Ok(())
}
