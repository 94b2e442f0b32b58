// Batch config validation (pure, no side effects)

use crate::config::{BatchConfig, ConfigError, MIN_FRAMES_PER_BURST};

/// Reject configs the merge tool would refuse for every burst.
///
/// Parameter values are passed through untouched.
pub fn validate_config(cfg: &BatchConfig) -> Result<(), ConfigError> {
    if cfg.executable.trim().is_empty() {
        return Err(ConfigError::Invalid("'executable' is required".to_string()));
    }
    if cfg.input_dir.is_empty() {
        return Err(ConfigError::Invalid("'input_dir' is required".to_string()));
    }
    if cfg.frames_per_burst < MIN_FRAMES_PER_BURST {
        return Err(ConfigError::Invalid(format!(
            "'frames_per_burst' must be at least {} (got {})",
            MIN_FRAMES_PER_BURST, cfg.frames_per_burst
        )));
    }
    Ok(())
}

/// Skip indices that do not name a burst in the parameter table
pub fn out_of_range_skips(cfg: &BatchConfig) -> Vec<usize> {
    cfg.skip
        .iter()
        .copied()
        .filter(|&burst| burst >= cfg.burst_count())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── validate_config ──

    #[test]
    fn reference_config_is_valid() {
        assert!(validate_config(&BatchConfig::default()).is_ok());
    }

    #[test]
    fn empty_executable_is_rejected() {
        let cfg = BatchConfig {
            executable: "  ".to_string(),
            ..BatchConfig::default()
        };
        let err = validate_config(&cfg).unwrap_err();
        assert_eq!(err.to_string(), "invalid batch config: 'executable' is required");
    }

    #[test]
    fn empty_input_dir_is_rejected() {
        let cfg = BatchConfig {
            input_dir: String::new(),
            ..BatchConfig::default()
        };
        assert!(validate_config(&cfg).is_err());
    }

    #[test]
    fn single_frame_bursts_are_rejected() {
        let cfg = BatchConfig {
            frames_per_burst: 1,
            ..BatchConfig::default()
        };
        assert!(validate_config(&cfg).is_err());

        let cfg = BatchConfig {
            frames_per_burst: 2,
            ..BatchConfig::default()
        };
        assert!(validate_config(&cfg).is_ok());
    }

    #[test]
    fn empty_parameter_table_is_allowed() {
        let cfg = BatchConfig {
            params: vec![],
            ..BatchConfig::default()
        };
        assert!(validate_config(&cfg).is_ok());
    }

    // ── out_of_range_skips ──

    #[test]
    fn out_of_range_skips_are_listed() {
        let mut cfg = BatchConfig::default();
        cfg.extend_skip([0, 38, 39, 100]);
        assert_eq!(out_of_range_skips(&cfg), vec![39, 100]);
    }
}
