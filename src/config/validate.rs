//! Configuration validation.

use crate::config::Config;
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    if config.output.top_n == 0 {
        return Err(Error::ConfigValidation {
            message: "output.top_n must be at least 1".to_string(),
        });
    }

    if config.output.peer_limit == 0 {
        return Err(Error::ConfigValidation {
            message: "output.peer_limit must be at least 1".to_string(),
        });
    }

    for (kind, path) in [
        ("species", config.models.species.as_ref()),
        ("breed", config.models.breed.as_ref()),
    ] {
        if let Some(path) = path
            && path.as_os_str().is_empty()
        {
            return Err(Error::ConfigValidation {
                message: format!("models.{kind} must not be an empty path"),
            });
        }
    }

    Ok(())
}
