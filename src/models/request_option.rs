use reqwest::Url;

/// Request settings shared read-only by every hammer of a run.
#[derive(Debug, Clone)]
pub struct RequestOption {
    pub url: Url,
    pub verbose: bool,
    /// 0 表示不超时
    pub timeout_secs: u64,
    pub user_agent: String,
}
