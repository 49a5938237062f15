use std::sync::Arc;

use anyhow::{Context, Error};
use futures::stream::{FuturesUnordered, StreamExt};
use log::{debug, error};
use time::OffsetDateTime;

use crate::core::average::mean;
use crate::core::hammer::hammer;
use crate::core::latency::summarize;
use crate::core::output::total_average_line;
use crate::core::user_agent::user_agent;
use crate::models::http_error_stats::HttpErrorStats;
use crate::models::request_option::RequestOption;
use crate::models::result::{HammerResult, RunResult};
use crate::models::run_config::RunConfig;
use crate::models::worker_spec::WorkerSpec;

/// Spawn one task per hammer, wait for all of them and reduce their averages.
///
/// The first hammer to fail aborts the others and fails the whole run.
pub async fn run(config: &RunConfig) -> anyhow::Result<RunResult> {
    let request = Arc::new(RequestOption {
        url: config.url.clone(),
        verbose: config.verbose,
        timeout_secs: config.timeout_secs,
        user_agent: user_agent(),
    });
    debug!(
        "dispatching {} hammers x {} throws against {}",
        config.hammers, config.throws, config.url
    );
    let started_at = OffsetDateTime::now_utc();
    let mut handles = FuturesUnordered::new();
    for spec in WorkerSpec::expand(config.hammers, config.throws, &request) {
        handles.push(tokio::spawn(hammer(spec)));
    }
    let mut results = Vec::with_capacity(config.hammers);
    while let Some(joined) = handles.next().await {
        let outcome = match joined {
            Ok(outcome) => outcome,
            Err(e) => Err(Error::new(e).context("hammer task panicked or was cancelled")),
        };
        match outcome {
            Ok(result) => results.push(result),
            Err(e) => {
                // 其余hammer全部取消，不做部分统计
                for handle in handles.iter() {
                    handle.abort();
                }
                error!("run aborted: {:#}", e);
                return Err(e);
            }
        }
    }
    let result = reduce(results, started_at)?;
    println!("{}", total_average_line(result.average));
    Ok(result)
}

pub(crate) fn reduce(mut results: Vec<HammerResult>, started_at: OffsetDateTime) -> anyhow::Result<RunResult> {
    results.sort_by_key(|r| r.hammer_id);
    let averages: Vec<_> = results.iter().map(|r| r.average).collect();
    let average = mean(&averages).context("no hammer results to reduce")?;
    let mut http_errors = HttpErrorStats::new();
    for result in &results {
        http_errors.merge(&result.http_errors);
    }
    let latencies: Vec<_> = results
        .iter()
        .flat_map(|r| r.latencies.iter().copied())
        .collect();
    let latency = summarize(&latencies)?;
    Ok(RunResult {
        average,
        hammer_results: results,
        http_errors,
        latency,
        started_at,
    })
}
