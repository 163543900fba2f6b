//! File system helpers: directory preparation and filename derivation.

pub mod naming;
pub mod paths;

pub use naming::filename_from_url;
pub use paths::{ensure_dir, prepare_backup_dirs};
