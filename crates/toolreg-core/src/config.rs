//! Configuration types for the generator
//!
//! All sections are optional. A missing file and an empty file produce
//! the same configuration: the built-in table rendered with the
//! default external names.

use serde::{Deserialize, Serialize};

use crate::builtins;
use crate::error::Result;
use crate::mapping::{MappingTable, ToolMapping};
use crate::validation::ValidationMode;

/// External names referenced by the generated registration code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TemplateConfig {
    /// Server object that owns the registration entry point
    pub server: String,
    /// Registration method on the server
    pub register_fn: String,
    /// Schema lookup keyed by tool name
    pub schemas: String,
    /// Object holding the services keyed by service name
    pub services: String,
    /// Invocation wrapper taking (tool name, logger, session id, closure)
    pub wrapper: String,
    /// Logger passed to the wrapper
    pub logger: String,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            server: "server".to_string(),
            register_fn: "registerTool".to_string(),
            schemas: "schemas".to_string(),
            services: "services".to_string(),
            wrapper: "mcpToolWrapper".to_string(),
            logger: "logger".to_string(),
        }
    }
}

/// Header and trailer comment text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub header: String,
    /// Trailer label, followed by `: <count>`
    pub trailer: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            header: "Generated MCP tool registrations using services".to_string(),
            trailer: "Total tools migrated".to_string(),
        }
    }
}

/// Validation settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationConfig {
    pub mode: ValidationMode,
}

/// Table composition settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableConfig {
    /// Include the built-in mappings alongside `[[tools]]`
    pub include_builtins: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            include_builtins: true,
        }
    }
}

/// Complete generator configuration (`toolreg.toml`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    pub template: TemplateConfig,
    pub output: OutputConfig,
    pub validation: ValidationConfig,
    pub table: TableConfig,
    /// Extra mappings declared in the file
    pub tools: Vec<ToolMapping>,
}

impl GeneratorConfig {
    /// Build the mapping table this configuration describes.
    ///
    /// A name declared both in `[[tools]]` and among the built-ins is a
    /// duplicate, not an override.
    pub fn build_table(&self) -> Result<MappingTable> {
        let mut mappings = if self.table.include_builtins {
            builtins::builtin_mappings()
        } else {
            Vec::new()
        };
        mappings.extend(self.tools.iter().cloned());
        MappingTable::new(mappings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.template.wrapper, "mcpToolWrapper");
        assert_eq!(config.template.register_fn, "registerTool");
        assert_eq!(config.validation.mode, ValidationMode::Trusted);
        assert!(config.table.include_builtins);
        assert!(config.tools.is_empty());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config: GeneratorConfig = toml::from_str("").unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn test_partial_template_section() {
        let config: GeneratorConfig = toml::from_str(
            r#"
[template]
wrapper = "withTool"
"#,
        )
        .unwrap();
        assert_eq!(config.template.wrapper, "withTool");
        assert_eq!(config.template.services, "services");
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result: std::result::Result<GeneratorConfig, _> =
            toml::from_str("[template]\nwraper = \"typo\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_tools_parsed() {
        let config: GeneratorConfig = toml::from_str(
            r#"
[table]
include_builtins = false

[[tools]]
name = "ping"
service = "health"
method = "ping"

[[tools]]
name = "echo"
service = "health"
method = "echo"
args = ["args.message"]
"#,
        )
        .unwrap();

        let table = config.build_table().unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.entries()[0].tool_name, "echo");
        assert!(table.get("ping").unwrap().argument_expressions.is_empty());
    }

    #[test]
    fn test_tools_merge_with_builtins() {
        let mut config = GeneratorConfig::default();
        config
            .tools
            .push(ToolMapping::new("ping", "health", "ping", Vec::<String>::new()));

        let table = config.build_table().unwrap();
        assert_eq!(table.len(), builtins::BUILTIN_COUNT + 1);
    }

    #[test]
    fn test_tool_clashing_with_builtin_is_duplicate() {
        let mut config = GeneratorConfig::default();
        config
            .tools
            .push(ToolMapping::new("list_zoku", "zoku", "search", ["args"]));

        assert!(matches!(
            config.build_table(),
            Err(Error::DuplicateTool { name }) if name == "list_zoku"
        ));
    }
}
