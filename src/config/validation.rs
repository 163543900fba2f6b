//! Configuration validation.

use crate::config::Config;
use crate::error::{Error, Result};

/// Upper bound on the worker count. Anything beyond this only thrashes the
/// file system and the remote host.
const MAX_CONCURRENCY: usize = 256;

/// Validate a merged configuration before any work starts.
pub fn validate_config(config: &Config) -> Result<()> {
    if config.options.concurrency == 0 {
        return Err(Error::ConfigValidation {
            field: "concurrency".to_string(),
            message: "must be at least 1".to_string(),
        });
    }

    if config.options.concurrency > MAX_CONCURRENCY {
        return Err(Error::ConfigValidation {
            field: "concurrency".to_string(),
            message: format!("must be at most {}", MAX_CONCURRENCY),
        });
    }

    if config.options.backup_directory.as_os_str().is_empty() {
        return Err(Error::ConfigValidation {
            field: "backup_directory".to_string(),
            message: "must not be empty".to_string(),
        });
    }

    Ok(())
}
