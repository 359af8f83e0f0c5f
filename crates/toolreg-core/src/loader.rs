//! Loading generator configuration from TOML files

use std::fs;
use std::path::Path;

use crate::config::GeneratorConfig;
use crate::{Error, Result};

/// Largest configuration file accepted, in bytes.
pub const MAX_CONFIG_SIZE: u64 = 1024 * 1024;

/// Load a configuration file.
///
/// The file must exist; callers that want defaults simply don't call
/// this.
pub fn load_config(path: &Path) -> Result<GeneratorConfig> {
    let metadata = match fs::metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        Err(e) => return Err(Error::Io(e)),
    };

    if metadata.len() > MAX_CONFIG_SIZE {
        return Err(Error::ConfigTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max: MAX_CONFIG_SIZE,
        });
    }

    let content = fs::read_to_string(path)?;
    let config: GeneratorConfig =
        toml::from_str(&content).map_err(|e| Error::InvalidConfig {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    tracing::debug!(
        "Loaded config from {:?}: {} extra tools, builtins {}",
        path,
        config.tools.len(),
        if config.table.include_builtins {
            "included"
        } else {
            "excluded"
        }
    );

    Ok(config)
}
