//! Pure functions (no I/O)

pub mod command;
pub mod validation;

pub use command::{build_burst_command, format_decimal, shell_line};
pub use validation::{out_of_range_skips, validate_config};
