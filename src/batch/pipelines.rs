//! Pipelines module (orchestration)

pub mod build_cmds;
pub mod execute;

pub use build_cmds::{build_cmds, print_cmds};
pub use execute::{log_summary, run_batch};
