//! Optional lexical validation of mapping entries
//!
//! By default argument expressions are trusted text and pass straight
//! through to the output. `ValidationMode::Strict` adds a cheap lexical
//! pass: tool, service and method names must be identifiers (the tool
//! name is spliced into `schemas.<tool>`) and every expression must be a
//! single line with balanced brackets and terminated string literals.
//! No parsing of the target language happens here.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::mapping::{MappingTable, ToolMapping};

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("valid identifier regex"));

/// How much checking is applied to the table before generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Argument expressions are emitted as given.
    #[default]
    Trusted,
    /// Names and expressions are lexically checked.
    Strict,
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationMode::Trusted => write!(f, "trusted"),
            ValidationMode::Strict => write!(f, "strict"),
        }
    }
}

/// Validate every entry of the table under the given mode.
///
/// Returns the first failure found, in table order.
pub fn validate_table(table: &MappingTable, mode: ValidationMode) -> Result<()> {
    if mode == ValidationMode::Trusted {
        return Ok(());
    }
    for mapping in table {
        validate_mapping(mapping)?;
    }
    tracing::debug!("Validated {} mappings (strict)", table.len());
    Ok(())
}

/// Strictly validate a single mapping.
pub fn validate_mapping(mapping: &ToolMapping) -> Result<()> {
    let invalid = |message: String| Error::InvalidMapping {
        tool: mapping.tool_name.clone(),
        message,
    };

    if !IDENTIFIER.is_match(&mapping.tool_name) {
        return Err(invalid(format!(
            "tool name '{}' is not an identifier",
            mapping.tool_name
        )));
    }
    if !IDENTIFIER.is_match(&mapping.service_name) {
        return Err(invalid(format!(
            "service '{}' is not an identifier",
            mapping.service_name
        )));
    }
    if !IDENTIFIER.is_match(&mapping.method_name) {
        return Err(invalid(format!(
            "method '{}' is not an identifier",
            mapping.method_name
        )));
    }
    for (idx, expr) in mapping.argument_expressions.iter().enumerate() {
        check_expression(expr).map_err(|reason| {
            invalid(format!("argument {} `{}`: {}", idx + 1, expr, reason))
        })?;
    }
    Ok(())
}

/// Lexically check one argument expression.
pub fn check_expression(expr: &str) -> std::result::Result<(), String> {
    if expr.trim().is_empty() {
        return Err("expression is empty".to_string());
    }

    let mut stack: Vec<char> = Vec::new();
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for c in expr.chars() {
        if c == '\n' || c == '\r' {
            return Err("expression spans multiple lines".to_string());
        }

        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }

        match c {
            '\'' | '"' | '`' => quote = Some(c),
            '(' | '[' | '{' => stack.push(c),
            ')' | ']' | '}' => {
                let open = match c {
                    ')' => '(',
                    ']' => '[',
                    _ => '{',
                };
                if stack.pop() != Some(open) {
                    return Err(format!("unbalanced '{}'", c));
                }
            }
            _ => {}
        }
    }

    if let Some(q) = quote {
        return Err(format!("unterminated string literal ({})", q));
    }
    if let Some(open) = stack.last() {
        return Err(format!("unclosed '{}'", open));
    }
    Ok(())
}
