use std::time::Duration;

use histogram::Histogram;
use log::warn;

use crate::core::average::mean;
use crate::models::result::LatencySummary;

/// Summarize request latencies (milliseconds) of a whole run.
pub fn summarize(latencies: &[Duration]) -> anyhow::Result<LatencySummary> {
    if latencies.is_empty() {
        return Ok(LatencySummary::default());
    }
    let mut histogram = Histogram::new(7, 32)?;
    let mut min_ms = u64::MAX;
    let mut max_ms = 0u64;
    for latency in latencies {
        let ms = latency.as_millis() as u64;
        min_ms = min_ms.min(ms);
        max_ms = max_ms.max(ms);
        if let Err(e) = histogram.increment(ms) {
            warn!("histogram rejected latency {}ms: {:?}", ms, e);
        }
    }
    let mean_ms = mean(latencies)
        .map(|d| d.as_secs_f64() * 1000.0)
        .unwrap_or_default();
    Ok(LatencySummary {
        count: latencies.len() as u64,
        min_ms,
        max_ms,
        mean_ms,
        median_ms: *histogram.percentile(50.0)?.range().start(),
        p95_ms: *histogram.percentile(95.0)?.range().start(),
        p99_ms: *histogram.percentile(99.0)?.range().start(),
    })
}
