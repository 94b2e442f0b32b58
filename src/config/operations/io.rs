use crate::config::error::ConfigError;
use crate::config::types::BatchConfig;
use crate::paths::PATH_DEFAULT_CONFIG;

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, PartialEq)]
enum ConfigFormat {
    Yaml,
    Json,
}

fn format_for(path: &Path) -> Result<ConfigFormat, ConfigError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "yaml" | "yml" => Ok(ConfigFormat::Yaml),
        "json" => Ok(ConfigFormat::Json),
        _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
    }
}

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> ConfigError + '_ {
    move |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Load a batch config from a YAML or JSON file (chosen by extension)
pub fn load_cfg(path: &Path) -> Result<BatchConfig, ConfigError> {
    let format = format_for(path)?;
    let reader = BufReader::new(File::open(path).map_err(io_err(path))?);

    let cfg = match format {
        ConfigFormat::Yaml => {
            serde_yaml::from_reader(reader).map_err(|source| ConfigError::Yaml {
                path: path.to_path_buf(),
                source,
            })?
        }
        ConfigFormat::Json => {
            serde_json::from_reader(reader).map_err(|source| ConfigError::Json {
                path: path.to_path_buf(),
                source,
            })?
        }
    };

    log::info!("config - loaded {}", path.display());
    Ok(cfg)
}

/// Resolve the config for a run.
///
/// An explicit path must exist. Without one, the default location is used if
/// present, otherwise the built-in reference config.
pub fn resolve_cfg(explicit: Option<&Path>) -> Result<BatchConfig, ConfigError> {
    if let Some(path) = explicit {
        return load_cfg(path);
    }

    let path: &Path = &PATH_DEFAULT_CONFIG;
    if path.exists() {
        return load_cfg(path);
    }

    log::info!(
        "config - {} not found, using built-in reference config",
        path.display()
    );
    Ok(BatchConfig::default())
}

/// Write `config` to `path`, creating parent directories.
/// Returns the path written.
pub fn save_cfg(path: &Path, config: &BatchConfig, force: bool) -> Result<PathBuf, ConfigError> {
    let format = format_for(path)?;

    if path.exists() && !force {
        return Err(ConfigError::AlreadyExists(path.to_path_buf()));
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(io_err(parent))?;
    }

    let writer = BufWriter::new(File::create(path).map_err(io_err(path))?);
    match format {
        ConfigFormat::Yaml => {
            serde_yaml::to_writer(writer, config).map_err(|source| ConfigError::Yaml {
                path: path.to_path_buf(),
                source,
            })?
        }
        ConfigFormat::Json => {
            serde_json::to_writer_pretty(writer, config).map_err(|source| ConfigError::Json {
                path: path.to_path_buf(),
                source,
            })?
        }
    }

    log::info!("config - wrote {}", path.display());
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::BurstParams;

    fn scratch_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("hdrplus-batch-test-{}", fastrand::u64(..)));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    // ── format_for ──

    #[test]
    fn format_is_chosen_by_extension() {
        assert_eq!(format_for(Path::new("a.yaml")).unwrap(), ConfigFormat::Yaml);
        assert_eq!(format_for(Path::new("a.YML")).unwrap(), ConfigFormat::Yaml);
        assert_eq!(format_for(Path::new("a.json")).unwrap(), ConfigFormat::Json);
        assert!(matches!(
            format_for(Path::new("a.toml")),
            Err(ConfigError::UnsupportedFormat(_))
        ));
    }

    // ── load_cfg ──

    #[test]
    fn partial_yaml_falls_back_to_defaults() {
        let dir = scratch_dir();
        let path = dir.join("batch.yaml");
        std::fs::write(
            &path,
            r#"
input_dir: /data/raws
skip: [1]
params:
  - { compression: 4.2, gain: 1.05 }
  - { compression: 3.8 }
  - { gain: 1.5 }
"#,
        )
        .unwrap();

        let cfg = load_cfg(&path).unwrap();
        assert_eq!(cfg.input_dir, "/data/raws");
        assert_eq!(cfg.executable, "./hdrplus");
        assert_eq!(cfg.frames_per_burst, 8);
        assert!(cfg.is_skipped(1));
        assert_eq!(
            cfg.params,
            vec![
                BurstParams::new(4.2, 1.05),
                BurstParams::new(3.8, 1.1),
                BurstParams::new(3.8, 1.5),
            ]
        );

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn json_config_loads() {
        let dir = scratch_dir();
        let path = dir.join("batch.json");
        std::fs::write(
            &path,
            r#"{ "executable": "hdrplus", "use_shell": false, "params": [{ "compression": 2.0, "gain": 1.75 }] }"#,
        )
        .unwrap();

        let cfg = load_cfg(&path).unwrap();
        assert_eq!(cfg.executable, "hdrplus");
        assert!(!cfg.use_shell);
        assert_eq!(cfg.burst_count(), 1);

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = scratch_dir();
        let err = load_cfg(&dir.join("absent.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn malformed_yaml_is_yaml_error() {
        let dir = scratch_dir();
        let path = dir.join("batch.yaml");
        std::fs::write(&path, "params: [oops").unwrap();
        assert!(matches!(load_cfg(&path), Err(ConfigError::Yaml { .. })));
        std::fs::remove_dir_all(dir).unwrap();
    }

    // ── save_cfg ──

    #[test]
    fn saved_default_loads_back_unchanged() {
        let dir = scratch_dir();
        let path = dir.join("nested/batch.yaml");

        save_cfg(&path, &BatchConfig::default(), false).unwrap();
        assert_eq!(load_cfg(&path).unwrap(), BatchConfig::default());

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn save_refuses_to_overwrite_without_force() {
        let dir = scratch_dir();
        let path = dir.join("batch.json");
        std::fs::write(&path, "{}").unwrap();

        let err = save_cfg(&path, &BatchConfig::default(), false).unwrap_err();
        assert!(matches!(err, ConfigError::AlreadyExists(_)));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");

        save_cfg(&path, &BatchConfig::default(), true).unwrap();
        assert_eq!(load_cfg(&path).unwrap(), BatchConfig::default());

        std::fs::remove_dir_all(dir).unwrap();
    }

    // ── resolve_cfg ──

    #[test]
    fn explicit_missing_path_is_an_error() {
        let dir = scratch_dir();
        assert!(resolve_cfg(Some(&dir.join("nope.yaml"))).is_err());
        std::fs::remove_dir_all(dir).unwrap();
    }
}
