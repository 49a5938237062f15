use anyhow::bail;
use reqwest::Url;

use crate::models::args::Args;

/// Validated, immutable configuration of a single run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub url: Url,
    pub hammers: usize,
    pub throws: usize,
    pub verbose: bool,
    pub timeout_secs: u64,
}

impl RunConfig {
    pub fn new(url: Url, hammers: usize, throws: usize, verbose: bool, timeout_secs: u64) -> anyhow::Result<Self> {
        // 数量为0时求平均会除以0
        if hammers == 0 {
            bail!("number of hammers must be at least 1");
        }
        if throws == 0 {
            bail!("number of throws must be at least 1");
        }
        Ok(RunConfig {
            url,
            hammers,
            throws,
            verbose,
            timeout_secs,
        })
    }
}

impl TryFrom<&Args> for RunConfig {
    type Error = anyhow::Error;

    fn try_from(args: &Args) -> anyhow::Result<Self> {
        RunConfig::new(
            args.url.clone(),
            args.hammers as usize,
            args.throws as usize,
            args.verbose,
            args.timeout,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url() -> Url {
        "http://localhost:8080/".parse().unwrap()
    }

    #[test]
    fn test_rejects_zero_counts() {
        assert!(RunConfig::new(url(), 0, 1, false, 0).is_err());
        assert!(RunConfig::new(url(), 1, 0, false, 0).is_err());
        assert!(RunConfig::new(url(), 1, 1, false, 0).is_ok());
    }
}
