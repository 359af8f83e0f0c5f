//! Tool mapping records and the mapping table

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::builtins;
use crate::error::{Error, Result};

/// One exposed tool and the service call backing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolMapping {
    /// Tool name as registered with the server (e.g., "list_zoku")
    #[serde(rename = "name")]
    pub tool_name: String,
    /// Service object the call is made on (e.g., "zoku")
    #[serde(rename = "service")]
    pub service_name: String,
    /// Method invoked on the service (e.g., "list")
    #[serde(rename = "method")]
    pub method_name: String,
    /// Positional argument expressions, emitted verbatim
    #[serde(rename = "args", default)]
    pub argument_expressions: Vec<String>,
}

impl ToolMapping {
    /// Create a new mapping.
    pub fn new<I, S>(
        tool_name: impl Into<String>,
        service_name: impl Into<String>,
        method_name: impl Into<String>,
        argument_expressions: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tool_name: tool_name.into(),
            service_name: service_name.into(),
            method_name: method_name.into(),
            argument_expressions: argument_expressions.into_iter().map(Into::into).collect(),
        }
    }

    /// Argument expressions joined with `", "` in declared order.
    pub fn joined_arguments(&self) -> String {
        self.argument_expressions.join(", ")
    }

    /// The backing call as `service.method(args)`.
    pub fn call_expression(&self) -> String {
        format!(
            "{}.{}({})",
            self.service_name,
            self.method_name,
            self.joined_arguments()
        )
    }
}

/// Immutable table of tool mappings, sorted by tool name.
///
/// Construction rejects duplicate tool names, so every entry is
/// addressable by name and the output never contains shadowed
/// registrations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingTable {
    entries: Vec<ToolMapping>,
}

impl MappingTable {
    /// Build a table from mappings in any order.
    pub fn new(mappings: Vec<ToolMapping>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(mappings.len());
        for mapping in &mappings {
            if !seen.insert(mapping.tool_name.as_str()) {
                return Err(Error::DuplicateTool {
                    name: mapping.tool_name.clone(),
                });
            }
        }

        let mut entries = mappings;
        entries.sort_by(|a, b| a.tool_name.cmp(&b.tool_name));
        Ok(Self { entries })
    }

    /// Table holding the built-in mappings.
    pub fn builtin() -> Self {
        let mut entries = builtins::builtin_mappings();
        entries.sort_by(|a, b| a.tool_name.cmp(&b.tool_name));
        Self { entries }
    }

    /// Entries sorted ascending by tool name.
    pub fn entries(&self) -> &[ToolMapping] {
        &self.entries
    }

    /// Look up a mapping by tool name.
    pub fn get(&self, tool_name: &str) -> Option<&ToolMapping> {
        self.entries
            .binary_search_by(|m| m.tool_name.as_str().cmp(tool_name))
            .ok()
            .map(|idx| &self.entries[idx])
    }

    /// Number of mappings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &ToolMapping> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a MappingTable {
    type Item = &'a ToolMapping;
    type IntoIter = std::slice::Iter<'a, ToolMapping>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
