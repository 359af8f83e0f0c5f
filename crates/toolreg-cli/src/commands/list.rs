//! List command

use std::path::Path;

use colored::Colorize;

use super::load_table;
use crate::error::Result;

/// Run the list command
pub fn run_list(config_path: Option<&Path>, json: bool) -> Result<()> {
    let (_, table) = load_table(config_path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(table.entries())?);
        return Ok(());
    }

    println!("{}", "Tool Mappings".bold());
    println!();

    for mapping in &table {
        println!(
            "  {:<26} {}",
            mapping.tool_name.green(),
            mapping.call_expression().dimmed()
        );
    }

    println!();
    println!(
        "{} {} tools mapped. Use {} to emit them.",
        "Total:".dimmed(),
        table.len(),
        "toolreg generate".cyan()
    );

    Ok(())
}
