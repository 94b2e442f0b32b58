mod batch;
mod config;
mod paths;

use crate::batch::{
    build_cmds, invoker_for, log_summary, out_of_range_skips, print_cmds, run_batch,
    validate_config,
};
use crate::config::{BatchConfig, ConfigError, resolve_cfg, save_cfg};
use crate::paths::PATH_DEFAULT_CONFIG;

use clap::{Args, Parser, Subcommand};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "hdrplus-batch",
    version,
    about = "Run the hdrplus burst merge tool over a table of bursts, one after another"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the command list and execute it
    Run {
        #[command(flatten)]
        source: SourceArgs,
        /// Execute the merge tool directly instead of through `sh -c`
        #[arg(long)]
        no_shell: bool,
        /// Discard the merge tool's stdout and stderr
        #[arg(short, long)]
        quiet: bool,
        /// Exit non-zero if any burst failed (checked after the whole batch ran)
        #[arg(long)]
        strict: bool,
    },
    /// Print the command lines `run` would execute
    Print {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Write the built-in reference config to disk
    Init {
        /// Destination (.yaml, .yml or .json); defaults to the user config location
        #[arg(short, long, value_name = "PATH")]
        config: Option<PathBuf>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args, Debug)]
struct SourceArgs {
    /// Batch config file (.yaml, .yml or .json)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Additional burst indices to skip
    #[arg(long, value_name = "BURST", value_delimiter = ',')]
    skip: Vec<usize>,
}

impl SourceArgs {
    fn load(&self) -> Result<BatchConfig, ConfigError> {
        let mut cfg = resolve_cfg(self.config.as_deref())?;
        cfg.extend_skip(self.skip.iter().copied());
        validate_config(&cfg)?;

        for burst in out_of_range_skips(&cfg) {
            log::warn!(
                "config - skip index {} is outside the parameter table (0..{}), ignoring",
                burst,
                cfg.burst_count()
            );
        }
        Ok(cfg)
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, Box<dyn Error>> {
    match cli.command {
        Command::Run {
            source,
            no_shell,
            quiet,
            strict,
        } => {
            let mut cfg = source.load()?;
            if no_shell {
                cfg.use_shell = false;
            }

            let mut invoker = invoker_for(&cfg, quiet);
            let report = run_batch(&cfg, invoker.as_mut());
            log_summary(&report);

            if report.fails_run(strict) {
                return Ok(ExitCode::FAILURE);
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Print { source } => {
            let cfg = source.load()?;
            print_cmds(&build_cmds(&cfg));
            Ok(ExitCode::SUCCESS)
        }
        Command::Init { config, force } => {
            let path = config.unwrap_or_else(|| PATH_DEFAULT_CONFIG.clone());
            let written = save_cfg(&path, &BatchConfig::default(), force)?;
            println!("{}", written.display());
            Ok(ExitCode::SUCCESS)
        }
    }
}
