pub mod args;
pub mod http_error_stats;
pub mod request_option;
pub mod result;
pub mod run_config;
pub mod worker_spec;
