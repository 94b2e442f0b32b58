//! Batch module - building and running merge tool invocations
//!
//! This module provides:
//! - Command construction for each burst of the parameter table
//! - Sequential execution that never stops on a failed burst
//! - A per-burst report of what happened
//!
//! ## Module Structure
//! - `types.rs`: Commands, outcomes and the batch report
//! - `pure/`: Pure functions (command building, validation)
//! - `operations/`: Atomic side effects (process invocation)
//! - `pipelines/`: High-level orchestration (build_cmds, execute)

mod operations;
mod pipelines;
mod pure;
mod types;

// Re-export public API
pub use operations::invoker_for;
pub use pipelines::{build_cmds, log_summary, print_cmds, run_batch};
pub use pure::{out_of_range_skips, validate_config};
