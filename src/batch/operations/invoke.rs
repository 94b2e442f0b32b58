//! Child process invocation
//!
//! Every invoker blocks until the child exits and reports what happened.
//! None of them treat a failed child as an error: the outcome is returned
//! and the caller decides what to do with it.

use std::process::{Command, Stdio};

use crate::batch::types::{BurstCommand, InvocationOutcome};
use crate::config::BatchConfig;

pub trait Invoker {
    /// Run `cmd` to completion
    fn invoke(&mut self, cmd: &BurstCommand) -> InvocationOutcome;
}

fn wait_for(mut cmd: Command, quiet: bool) -> InvocationOutcome {
    if quiet {
        cmd.stdout(Stdio::null());
        cmd.stderr(Stdio::null());
    }

    match cmd.status() {
        Ok(status) => InvocationOutcome::Exited {
            code: status.code(),
            success: status.success(),
        },
        Err(e) => InvocationOutcome::SpawnFailed(e.to_string()),
    }
}

/// Runs each command line through `sh -c`
#[derive(Clone, Debug, Default)]
pub struct ShellInvoker {
    pub quiet: bool,
}

impl Invoker for ShellInvoker {
    fn invoke(&mut self, cmd: &BurstCommand) -> InvocationOutcome {
        let mut child = Command::new("sh");
        child.arg("-c").arg(cmd.to_shell_line());
        wait_for(child, self.quiet)
    }
}

/// Executes the merge tool directly with its argument vector
#[derive(Clone, Debug, Default)]
pub struct DirectInvoker {
    pub quiet: bool,
}

impl Invoker for DirectInvoker {
    fn invoke(&mut self, cmd: &BurstCommand) -> InvocationOutcome {
        let mut child = Command::new(&cmd.program);
        child.args(&cmd.args);
        wait_for(child, self.quiet)
    }
}

/// Pick the invoker the config asks for
pub fn invoker_for(cfg: &BatchConfig, quiet: bool) -> Box<dyn Invoker> {
    if cfg.use_shell {
        Box::new(ShellInvoker { quiet })
    } else {
        Box::new(DirectInvoker { quiet })
    }
}
