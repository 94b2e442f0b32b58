use crate::config::BurstParams;

use super::pure::shell_line;

/// One fully-formed invocation of the merge tool
#[derive(Clone, Debug, PartialEq)]
pub struct BurstCommand {
    pub burst: usize,
    pub params: BurstParams,
    pub program: String,
    /// `-c <c> -g <g> <input_dir> <output> <raw>...`
    pub args: Vec<String>,
    /// Output image path, also present in `args`
    pub output: String,
}

impl BurstCommand {
    /// Raw frame filenames, in slot order
    pub fn raw_files(&self) -> &[String] {
        // -c, c, -g, g, input_dir, output
        self.args.get(6..).unwrap_or(&[])
    }

    /// Render as a single `sh` command line
    pub fn to_shell_line(&self) -> String {
        shell_line(&self.program, &self.args)
    }
}

/// What happened when a command was run
#[derive(Clone, Debug, PartialEq)]
pub enum InvocationOutcome {
    /// The child ran to completion. `code` is `None` when it was killed by a signal.
    Exited { code: Option<i32>, success: bool },
    /// The child could not be started at all
    SpawnFailed(String),
}

impl InvocationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, InvocationOutcome::Exited { success: true, .. })
    }

    pub fn describe(&self) -> String {
        match self {
            InvocationOutcome::Exited { success: true, .. } => "ok".to_string(),
            InvocationOutcome::Exited {
                code: Some(code), ..
            } => format!("exit status {}", code),
            InvocationOutcome::Exited { code: None, .. } => "terminated by signal".to_string(),
            InvocationOutcome::SpawnFailed(e) => format!("failed to start: {}", e),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BurstOutcome {
    pub burst: usize,
    pub output: String,
    pub outcome: InvocationOutcome,
}

/// Per-burst results of a completed batch, in execution order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BatchReport {
    pub outcomes: Vec<BurstOutcome>,
}

impl BatchReport {
    pub fn attempted(&self) -> usize {
        self.outcomes.len()
    }

    pub fn failures(&self) -> impl Iterator<Item = &BurstOutcome> {
        self.outcomes.iter().filter(|o| !o.outcome.is_success())
    }

    pub fn failed(&self) -> usize {
        self.failures().count()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed() == 0
    }

    /// Whether the run should exit non-zero. Only `strict` runs fail, and
    /// only when some burst failed.
    pub fn fails_run(&self, strict: bool) -> bool {
        strict && !self.all_succeeded()
    }
}
