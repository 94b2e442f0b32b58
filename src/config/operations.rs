pub mod io;

pub use io::{resolve_cfg, save_cfg};
