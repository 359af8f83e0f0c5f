//! Rendering of one mapping into one registration block
//!
//! Rendering is a pure function of the mapping and the template names.
//! Argument expressions are inserted verbatim; nothing is quoted or
//! escaped.

use crate::config::TemplateConfig;
use crate::mapping::ToolMapping;

const INDENT: &str = "  ";

/// Line-oriented string builder with fixed-width indentation.
#[derive(Debug, Default)]
struct BlockBuilder {
    out: String,
}

impl BlockBuilder {
    fn line(&mut self, depth: usize, text: &str) -> &mut Self {
        for _ in 0..depth {
            self.out.push_str(INDENT);
        }
        self.out.push_str(text);
        self.out.push('\n');
        self
    }

    fn finish(self) -> String {
        self.out
    }
}

/// Renders `server.registerTool(...)` blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationTemplate {
    names: TemplateConfig,
}

impl RegistrationTemplate {
    /// Create a template using the given external names.
    pub fn new(names: TemplateConfig) -> Self {
        Self { names }
    }

    /// Render one registration block, terminated by a newline.
    pub fn render(&self, entry: &ToolMapping) -> String {
        let n = &self.names;
        let tool = entry.tool_name.as_str();
        let schema = format!("{}.{}", n.schemas, tool);

        let mut b = BlockBuilder::default();
        b.line(1, &format!("{}.{}(", n.server, n.register_fn))
            .line(2, &format!("'{}',", tool))
            .line(2, "{")
            .line(3, &format!("description: {}.description,", schema))
            .line(3, &format!("inputSchema: {}", schema))
            .line(2, "},")
            .line(2, "async (args, extra) => {")
            .line(
                3,
                &format!(
                    "return {}('{}', {}, extra.sessionId, async () => {{",
                    n.wrapper, tool, n.logger
                ),
            )
            .line(
                4,
                &format!(
                    "const result = await {}.{};",
                    n.services,
                    entry.call_expression()
                ),
            )
            .line(4, "return result;")
            .line(3, "});")
            .line(2, "}")
            .line(1, ");");
        b.finish()
    }
}

/// Render one block with the default external names.
pub fn render(entry: &ToolMapping) -> String {
    RegistrationTemplate::default().render(entry)
}
