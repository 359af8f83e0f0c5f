//! Command implementations for toolreg-cli

pub mod check;
pub mod generate;
pub mod list;

pub use check::run_check;
pub use generate::run_generate;
pub use list::run_list;

use std::path::Path;

use toolreg_core::{load_config, GeneratorConfig, MappingTable, ValidationMode};

use crate::error::Result;

/// Load the configuration (or defaults) and build the mapping table.
pub(crate) fn load_table(config_path: Option<&Path>) -> Result<(GeneratorConfig, MappingTable)> {
    let config = match config_path {
        Some(path) => load_config(path)?,
        None => GeneratorConfig::default(),
    };
    let table = config.build_table()?;
    tracing::debug!("Mapping table has {} entries", table.len());
    Ok((config, table))
}

/// `--strict` on the command line overrides the configured mode.
pub(crate) fn effective_mode(config: &GeneratorConfig, strict: bool) -> ValidationMode {
    if strict {
        ValidationMode::Strict
    } else {
        config.validation.mode
    }
}
