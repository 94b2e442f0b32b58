//! Batch execution pipeline

use crate::batch::operations::Invoker;
use crate::batch::pure::format_decimal;
use crate::batch::types::{BatchReport, BurstCommand, BurstOutcome};
use crate::config::BatchConfig;

use super::build_cmds::build_cmds;

/// Run every command in order, one at a time.
///
/// A failing command is logged and recorded; the next one always runs.
pub fn execute(cmds: &[BurstCommand], invoker: &mut dyn Invoker) -> BatchReport {
    let mut report = BatchReport {
        outcomes: Vec::with_capacity(cmds.len()),
    };

    for (i, cmd) in cmds.iter().enumerate() {
        log::info!(
            "batch - [{}/{}] burst {} (c={}, g={}, {} frames) -> {}",
            i + 1,
            cmds.len(),
            cmd.burst,
            format_decimal(cmd.params.compression),
            format_decimal(cmd.params.gain),
            cmd.raw_files().len(),
            cmd.output
        );
        log::debug!("batch - {}", cmd.to_shell_line());

        let outcome = invoker.invoke(cmd);
        if !outcome.is_success() {
            log::warn!("batch - burst {}: {}", cmd.burst, outcome.describe());
        }

        report.outcomes.push(BurstOutcome {
            burst: cmd.burst,
            output: cmd.output.clone(),
            outcome,
        });
    }

    report
}

/// Build the command list for `cfg` and execute it
pub fn run_batch(cfg: &BatchConfig, invoker: &mut dyn Invoker) -> BatchReport {
    let cmds = build_cmds(cfg);
    log::info!(
        "batch - {} of {} bursts queued ({} skipped)",
        cmds.len(),
        cfg.burst_count(),
        cfg.burst_count() - cmds.len()
    );
    execute(&cmds, invoker)
}

pub fn log_summary(report: &BatchReport) {
    if report.all_succeeded() {
        log::info!("batch - done, {} bursts succeeded", report.attempted());
        return;
    }

    log::warn!(
        "batch - done, {} of {} bursts failed",
        report.failed(),
        report.attempted()
    );
    for failure in report.failures() {
        log::warn!(
            "batch -   burst {} ({}): {}",
            failure.burst,
            failure.output,
            failure.outcome.describe()
        );
    }
}
