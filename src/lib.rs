pub mod core;
pub mod models;

pub use crate::core::dispatch::run;
pub use crate::models::result::{HammerResult, RunResult};
pub use crate::models::run_config::RunConfig;
