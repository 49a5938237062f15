use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use crate::models::args::Args;

#[derive(Debug)]
pub enum Invocation {
    /// Started without any argument: show usage and leave.
    Usage,
    Run(Args),
}

pub fn parse_invocation<I, T>(argv: I) -> Result<Invocation, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
    if argv.len() <= 1 {
        return Ok(Invocation::Usage);
    }
    Args::try_parse_from(argv).map(Invocation::Run)
}

pub fn usage() -> String {
    Args::command().render_help().to_string()
}

/// Exit status for a failed parse: help and version requests are not errors.
pub fn usage_exit_code(err: &clap::Error) -> u8 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}
