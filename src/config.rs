pub mod error;
pub mod operations;
pub mod types;

// Re-export types
pub use error::ConfigError;
pub use types::{BatchConfig, BurstParams, MIN_FRAMES_PER_BURST};

// Re-export operations
pub use operations::{resolve_cfg, save_cfg};
