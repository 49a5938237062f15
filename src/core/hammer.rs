use std::time::{Duration, Instant};

use anyhow::Context;
use log::{debug, warn};
use reqwest::Client;

use crate::core::average::mean;
use crate::core::output::{hammer_average_line, throw_line};
use crate::models::http_error_stats::HttpErrorStats;
use crate::models::request_option::RequestOption;
use crate::models::result::{HammerResult, ThrowResult};
use crate::models::worker_spec::WorkerSpec;

/// Run all throws of one hammer strictly in sequence and average their elapsed times.
///
/// Elapsed time of every throw is measured from the moment the hammer started, so the
/// samples are cumulative and never decrease. The first failed request aborts the hammer.
pub async fn hammer(spec: WorkerSpec) -> anyhow::Result<HammerResult> {
    let hammer_id = spec.hammer_id;
    let client = build_client(&spec.request)?;
    let mut elapsed_samples = Vec::with_capacity(spec.throws);
    let mut latencies = Vec::with_capacity(spec.throws);
    let mut http_errors = HttpErrorStats::new();
    debug!("hammer {} starting {} throws against {}", hammer_id, spec.throws, spec.request.url);
    // 只在第一次请求前计时一次
    let start = Instant::now();
    for i in 0..spec.throws {
        let result = throw(&client, &spec.request, i, start).await.with_context(|| {
            format!("hammer {}, throw {}: GET {} failed", hammer_id, i, spec.request.url)
        })?;
        if spec.request.verbose {
            println!("{}", result.body);
        }
        println!("{}", throw_line(hammer_id, i, result.elapsed));
        if !result.succeeded {
            warn!("hammer {}, throw {}: http status {}", hammer_id, i, result.status);
            http_errors.increment(result.status);
        }
        elapsed_samples.push(result.elapsed);
        latencies.push(result.latency);
    }
    let average = mean(&elapsed_samples).context("hammer finished without any throws")?;
    println!("{}", hammer_average_line(hammer_id, average));
    debug!("hammer {} finished", hammer_id);
    Ok(HammerResult {
        hammer_id,
        average,
        elapsed_samples,
        latencies,
        http_errors,
    })
}

fn build_client(option: &RequestOption) -> anyhow::Result<Client> {
    let client_builder = Client::builder().user_agent(option.user_agent.clone());
    // 如果传入了超时时间，客户端添加超时时间
    let client = if option.timeout_secs > 0 {
        client_builder
            .timeout(Duration::from_secs(option.timeout_secs))
            .build()
            .context("failed to build http client with timeout")?
    } else {
        client_builder.build().context("failed to build http client")?
    };
    Ok(client)
}

async fn throw(
    client: &Client,
    option: &RequestOption,
    index: usize,
    start: Instant,
) -> Result<ThrowResult, reqwest::Error> {
    let sent = Instant::now();
    let response = client.get(option.url.clone()).send().await?;
    let status = response.status();
    let body = response.text().await?;
    let done = Instant::now();
    Ok(ThrowResult {
        throw: index,
        elapsed: done.duration_since(start),
        latency: done.duration_since(sent),
        status: status.as_u16(),
        body,
        succeeded: status.is_success(),
    })
}
