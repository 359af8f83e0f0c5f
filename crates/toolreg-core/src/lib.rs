//! Source generator for MCP tool registrations.
//!
//! A [`MappingTable`] associates tool names with the service calls that
//! back them. [`RegistrationTemplate`] renders one mapping into one
//! `server.registerTool(...)` block, and [`Emitter`] writes the whole
//! table, sorted by tool name, between a header and a trailer comment.
//!
//! ```
//! use toolreg_core::{render, ToolMapping};
//!
//! let entry = ToolMapping::new("list_zoku", "zoku", "list", ["args"]);
//! assert!(render(&entry).contains("zoku.list(args)"));
//! ```

pub mod builtins;
pub mod config;
pub mod emit;
pub mod error;
pub mod loader;
pub mod mapping;
pub mod render;
pub mod validation;

pub use builtins::{builtin_mappings, BUILTIN_COUNT};
pub use config::{GeneratorConfig, OutputConfig, TableConfig, TemplateConfig, ValidationConfig};
pub use emit::{EmitSummary, Emitter};
pub use error::{Error, Result};
pub use loader::load_config;
pub use mapping::{MappingTable, ToolMapping};
pub use render::{render, RegistrationTemplate};
pub use validation::{check_expression, validate_mapping, validate_table, ValidationMode};
