use std::time::Duration;

use serde::Serialize;
use time::OffsetDateTime;

use crate::models::http_error_stats::HttpErrorStats;

/// Outcome of one throw.
#[derive(Debug, Clone)]
pub struct ThrowResult {
    pub throw: usize,
    /// 从hammer开始计时，不是从本次请求开始
    pub elapsed: Duration,
    /// 本次请求自身耗时
    pub latency: Duration,
    pub status: u16,
    pub body: String,
    pub succeeded: bool,
}

#[derive(Debug, Clone)]
pub struct HammerResult {
    pub hammer_id: usize,
    pub average: Duration,
    /// 按throw顺序排列
    pub elapsed_samples: Vec<Duration>,
    pub latencies: Vec<Duration>,
    pub http_errors: HttpErrorStats,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LatencySummary {
    pub count: u64,
    pub min_ms: u64,
    pub max_ms: u64,
    pub mean_ms: f64,
    pub median_ms: u64,
    pub p95_ms: u64,
    pub p99_ms: u64,
}

#[derive(Debug, Clone)]
pub struct RunResult {
    /// Unweighted mean of the per-hammer averages.
    pub average: Duration,
    /// Ordered by hammer id.
    pub hammer_results: Vec<HammerResult>,
    pub http_errors: HttpErrorStats,
    pub latency: LatencySummary,
    pub started_at: OffsetDateTime,
}
