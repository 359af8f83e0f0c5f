//! Check command

use std::path::Path;

use colored::Colorize;
use toolreg_core::validate_table;

use super::{effective_mode, load_table};
use crate::error::Result;

/// Run the check command.
///
/// Building the table already rejects duplicate tool names; strict
/// mode additionally checks names and argument expressions.
pub fn run_check(config_path: Option<&Path>, strict: bool) -> Result<()> {
    let (config, table) = load_table(config_path)?;
    let mode = effective_mode(&config, strict);
    validate_table(&table, mode)?;

    println!(
        "{} {} mappings checked (mode: {}), no problems found.",
        "OK".green().bold(),
        table.len(),
        mode
    );
    Ok(())
}
