pub mod average;
pub mod cli;
pub mod dispatch;
pub mod hammer;
pub mod latency;
pub mod logging;
pub mod output;
pub mod report;
pub mod user_agent;

#[cfg(test)]
pub(crate) mod test_server;
