//! Command building pipeline

use crate::batch::pure::build_burst_command;
use crate::batch::types::BurstCommand;
use crate::config::BatchConfig;

/// Build one command per non-skipped burst, in ascending burst order
pub fn build_cmds(cfg: &BatchConfig) -> Vec<BurstCommand> {
    cfg.params
        .iter()
        .enumerate()
        .filter(|(burst, _)| !cfg.is_skipped(*burst))
        .map(|(burst, params)| build_burst_command(cfg, burst, *params))
        .collect()
}

/// Print the shell line of every command, one per line
pub fn print_cmds(cmds: &[BurstCommand]) {
    for cmd in cmds {
        println!("{}", cmd.to_shell_line());
    }
}
