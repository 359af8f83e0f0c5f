//! Generate command

use std::fs;
use std::path::Path;

use toolreg_core::{validate_table, Emitter};

use super::{effective_mode, load_table};
use crate::error::{CliError, Result};

/// Run the generate command.
///
/// Nothing is written when the table fails to build or validate. An
/// `--output` file is only touched once the whole document is rendered.
pub fn run_generate(config_path: Option<&Path>, output: Option<&Path>, strict: bool) -> Result<()> {
    let (config, table) = load_table(config_path)?;
    validate_table(&table, effective_mode(&config, strict))?;

    let emitter = Emitter::with_config(table, &config);

    match output {
        None => {
            emitter.run()?;
        }
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                if !parent.is_dir() {
                    return Err(CliError::user(format!(
                        "Output directory does not exist: {}",
                        parent.display()
                    )));
                }
            }
            let document = emitter.render_to_string();
            fs::write(path, &document)?;
            tracing::info!(
                "Wrote {} registrations ({} bytes) to {}",
                emitter.table().len(),
                document.len(),
                path.display()
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use toolreg_core::BUILTIN_COUNT;

    #[test]
    fn test_generate_to_file() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("tools.gen.ts");

        run_generate(None, Some(&out), false).unwrap();

        let written = fs::read_to_string(&out).unwrap();
        assert!(written.starts_with("// Generated MCP tool registrations using services\n"));
        assert!(written.ends_with(&format!("// Total tools migrated: {}\n", BUILTIN_COUNT)));
    }

    #[test]
    fn test_generate_replaces_existing_file() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("tools.gen.ts");
        fs::write(&out, "x".repeat(64 * 1024)).unwrap();

        run_generate(None, Some(&out), false).unwrap();

        let written = fs::read_to_string(&out).unwrap();
        let expected = Emitter::new(toolreg_core::MappingTable::builtin()).render_to_string();
        assert_eq!(written, expected);
    }

    #[test]
    fn test_generate_failure_keeps_existing_file() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("toolreg.toml");
        fs::write(
            &config,
            "[[tools]]\nname = \"list_zoku\"\nservice = \"zoku\"\nmethod = \"search\"\n",
        )
        .unwrap();
        let out = temp.path().join("tools.gen.ts");
        fs::write(&out, "previous output").unwrap();

        assert!(run_generate(Some(&config), Some(&out), false).is_err());
        assert_eq!(fs::read_to_string(&out).unwrap(), "previous output");
    }

    #[test]
    fn test_generate_missing_output_dir() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("missing").join("tools.gen.ts");

        let err = run_generate(None, Some(&out), false).unwrap_err();
        assert!(matches!(err, CliError::User { .. }));
    }

    #[test]
    fn test_generate_strict_failure_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("toolreg.toml");
        fs::write(
            &config,
            "[[tools]]\nname = \"bad\"\nservice = \"svc\"\nmethod = \"m\"\nargs = [\"(\"]\n",
        )
        .unwrap();
        let out = temp.path().join("tools.gen.ts");

        let result = run_generate(Some(&config), Some(&out), true);
        assert!(result.is_err());
        assert!(!out.exists());
    }
}
