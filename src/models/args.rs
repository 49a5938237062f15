use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use reqwest::Url;
use simplelog::LevelFilter;

/// Hammer a URL with concurrent GET requests and report the average elapsed time
#[derive(Parser, Debug)]
#[command(name = "thor", version, about, long_about = None, disable_help_flag = true)]
pub struct Args {
    /// Number of hammers to utilize
    #[arg(short = 'h', long, value_name = "HAMMERS", default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub hammers: u32,

    /// Number of throws per hammer
    #[arg(short = 't', long, value_name = "THROWS", default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub throws: u32,

    /// Display verbose output
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Per-request timeout in seconds, 0 waits forever
    #[arg(short = 'T', long, value_name = "SECS", default_value_t = 0)]
    pub timeout: u64,

    /// Write a JSON report of the run to this path
    #[arg(short, long, value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Diagnostic log level, written to stderr
    #[arg(short, long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    #[allow(dead_code)]
    help: Option<bool>,

    /// URL to request
    #[arg(value_name = "URL", value_parser = parse_target)]
    pub url: Url,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn parse_target(s: &str) -> Result<Url, String> {
    let url = Url::parse(s).map_err(|e| format!("invalid URL '{}': {}", s, e))?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(format!("unsupported scheme '{}', expected http or https", other)),
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(format!("URL '{}' has no host", s));
    }
    Ok(url)
}
