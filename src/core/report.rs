use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use log::info;
use serde::Serialize;
use time::format_description::well_known::Rfc3339;

use crate::models::result::{LatencySummary, RunResult};
use crate::models::run_config::RunConfig;

#[derive(Debug, Serialize)]
pub struct HammerReport {
    pub hammer_id: usize,
    pub average_secs: f64,
    pub elapsed_secs: Vec<f64>,
}

/// JSON view of a finished run.
#[derive(Debug, Serialize)]
pub struct RunReport<'a> {
    pub url: &'a str,
    pub hammers: usize,
    pub throws: usize,
    pub verbose: bool,
    pub timeout_secs: u64,
    pub started_at: String,
    pub total_average_secs: f64,
    pub hammer_results: Vec<HammerReport>,
    pub http_errors: &'a BTreeMap<u16, u32>,
    pub latency: &'a LatencySummary,
}

impl<'a> RunReport<'a> {
    pub fn new(config: &'a RunConfig, result: &'a RunResult) -> anyhow::Result<Self> {
        let hammer_results = result
            .hammer_results
            .iter()
            .map(|r| HammerReport {
                hammer_id: r.hammer_id,
                average_secs: r.average.as_secs_f64(),
                elapsed_secs: r.elapsed_samples.iter().map(|d| d.as_secs_f64()).collect(),
            })
            .collect();
        Ok(RunReport {
            url: config.url.as_str(),
            hammers: config.hammers,
            throws: config.throws,
            verbose: config.verbose,
            timeout_secs: config.timeout_secs,
            started_at: result.started_at.format(&Rfc3339).context("failed to format start time")?,
            total_average_secs: result.average.as_secs_f64(),
            hammer_results,
            http_errors: result.http_errors.errors(),
            latency: &result.latency,
        })
    }
}

pub fn write_report(path: &Path, config: &RunConfig, result: &RunResult) -> anyhow::Result<()> {
    let report = RunReport::new(config, result)?;
    let json = serde_json::to_string_pretty(&report).context("failed to serialize report")?;
    std::fs::write(path, json).with_context(|| format!("failed to write report to {}", path.display()))?;
    info!("report written to {}", path.display());
    Ok(())
}
