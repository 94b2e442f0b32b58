use std::env;
use std::path::PathBuf;
use std::sync::LazyLock;

pub static PATH_HOME: LazyLock<PathBuf> =
    LazyLock::new(|| env::var("HOME").map(PathBuf::from).unwrap_or_default());

pub static PATH_CONFIG_DIR: LazyLock<PathBuf> = LazyLock::new(|| {
    if let Ok(xdg_config_home) = env::var("XDG_CONFIG_HOME")
        && !xdg_config_home.is_empty()
    {
        return PathBuf::from(xdg_config_home).join("hdrplus-batch");
    }
    PATH_HOME.join(".config/hdrplus-batch")
});

/// Config file used when `--config` is not given.
pub static PATH_DEFAULT_CONFIG: LazyLock<PathBuf> =
    LazyLock::new(|| PATH_CONFIG_DIR.join("batch.yaml"));
