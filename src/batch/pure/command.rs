// Pure command building functions (no I/O)

use std::borrow::Cow;

use crate::batch::types::BurstCommand;
use crate::config::{BatchConfig, BurstParams};

/// Format a parameter the way the merge tool has always received it.
///
/// Shortest round-trip digits. Decimal exponents in `-4..16` print
/// positionally with `.0` kept on integral values (`4.0`, `0.0001`); others
/// print in scientific form with a signed, two-digit-minimum exponent
/// (`1e-05`, `1.5e+16`). Non-finite values print as `nan`, `inf`, `-inf`.
pub fn format_decimal(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // `{:e}` yields the shortest round-trip mantissa, e.g. "1.5e16", "-4.2e0"
    let sci = format!("{:e}", value);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if value == 0.0 || (-4..16).contains(&exp) {
        let s = value.to_string();
        if s.contains('.') { s } else { format!("{}.0", s) }
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exp.abs())
    }
}

/// `<output_dir>/<output_prefix><burst>.<output_extension>`
pub fn output_path(cfg: &BatchConfig, burst: usize) -> String {
    let name = format!("{}{}.{}", cfg.output_prefix, burst, cfg.output_extension);
    let dir = cfg.output_dir.trim_end_matches('/');
    if cfg.output_dir.is_empty() {
        name
    } else if dir.is_empty() {
        // output_dir was "/" (or a run of slashes)
        format!("/{}", name)
    } else {
        format!("{}/{}", dir, name)
    }
}

/// `<raw_prefix><burst>_<slot>.<raw_extension>`
pub fn raw_filename(cfg: &BatchConfig, burst: usize, slot: usize) -> String {
    format!("{}{}_{}.{}", cfg.raw_prefix, burst, slot, cfg.raw_extension)
}

/// Build the merge tool invocation for one burst
pub fn build_burst_command(cfg: &BatchConfig, burst: usize, params: BurstParams) -> BurstCommand {
    let output = output_path(cfg, burst);

    let mut args = Vec::with_capacity(6 + cfg.frames_per_burst);
    args.push("-c".to_string());
    args.push(format_decimal(params.compression));
    args.push("-g".to_string());
    args.push(format_decimal(params.gain));
    args.push(cfg.input_dir.clone());
    args.push(output.clone());
    for slot in 0..cfg.frames_per_burst {
        args.push(raw_filename(cfg, burst, slot));
    }

    BurstCommand {
        burst,
        params,
        program: cfg.executable.clone(),
        args,
        output,
    }
}

fn is_shell_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '/' | '.' | '_' | '-' | '+' | ',' | ':' | '=' | '@' | '%')
}

/// Single-quote `token` for POSIX sh if it contains anything outside a safe set
pub fn shell_quote(token: &str) -> Cow<'_, str> {
    if !token.is_empty() && token.chars().all(is_shell_safe) {
        return Cow::Borrowed(token);
    }
    Cow::Owned(single_quote(token))
}

fn single_quote(token: &str) -> String {
    format!("'{}'", token.replace('\'', r"'\''"))
}

/// Join program and args into one `sh -c` line.
///
/// A program containing `=` is always quoted; bare, sh would take it as an
/// assignment.
pub fn shell_line(program: &str, args: &[String]) -> String {
    let mut line = if program.contains('=') {
        single_quote(program)
    } else {
        shell_quote(program).into_owned()
    };
    for arg in args {
        line.push(' ');
        line.push_str(&shell_quote(arg));
    }
    line
}
