//! Emitting the full generated document
//!
//! The document is a header comment, one block per mapping in tool-name
//! order each followed by a blank line, and a trailer comment carrying
//! the entry count. Output for an unchanged table is byte-identical
//! across runs.

use std::io::{self, Write};

use crate::config::{GeneratorConfig, OutputConfig};
use crate::error::Result;
use crate::mapping::MappingTable;
use crate::render::RegistrationTemplate;

/// What a completed emit produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmitSummary {
    /// Number of registration blocks written
    pub blocks: usize,
    /// Total bytes written
    pub bytes: usize,
}

/// Drives rendering of a mapping table into one output stream.
#[derive(Debug, Clone)]
pub struct Emitter {
    table: MappingTable,
    template: RegistrationTemplate,
    output: OutputConfig,
}

impl Emitter {
    /// Create an emitter with the default template and header/trailer.
    pub fn new(table: MappingTable) -> Self {
        Self {
            table,
            template: RegistrationTemplate::default(),
            output: OutputConfig::default(),
        }
    }

    /// Create an emitter using the names and comments of a configuration.
    pub fn with_config(table: MappingTable, config: &GeneratorConfig) -> Self {
        Self {
            table,
            template: RegistrationTemplate::new(config.template.clone()),
            output: config.output.clone(),
        }
    }

    /// The table being emitted.
    pub fn table(&self) -> &MappingTable {
        &self.table
    }

    fn header(&self) -> String {
        format!("// {}\n\n", self.output.header)
    }

    fn trailer(&self) -> String {
        format!("\n// {}: {}\n", self.output.trailer, self.table.len())
    }

    /// Render the full document into a string.
    pub fn render_to_string(&self) -> String {
        let mut doc = self.header();
        for entry in &self.table {
            tracing::debug!(
                "Rendered {} -> {}",
                entry.tool_name,
                entry.call_expression()
            );
            doc.push_str(&self.template.render(entry));
            doc.push('\n');
        }
        doc.push_str(&self.trailer());
        doc
    }

    /// Write the full document to `out` in a single write.
    pub fn emit<W: Write>(&self, out: &mut W) -> Result<EmitSummary> {
        let doc = self.render_to_string();
        out.write_all(doc.as_bytes())?;
        out.flush()?;

        let summary = EmitSummary {
            blocks: self.table.len(),
            bytes: doc.len(),
        };
        tracing::info!(
            "Emitted {} tool registrations ({} bytes)",
            summary.blocks,
            summary.bytes
        );
        Ok(summary)
    }

    /// Write the full document to standard output.
    pub fn run(&self) -> Result<EmitSummary> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.emit(&mut lock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtins::BUILTIN_COUNT;
    use crate::mapping::ToolMapping;
    use pretty_assertions::assert_eq;

    fn small_table() -> MappingTable {
        MappingTable::new(vec![
            ToolMapping::new("list_zoku", "zoku", "list", ["args"]),
            ToolMapping::new("get_jewel", "jewels", "get", ["args.id"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_full_document() {
        let output = Emitter::new(small_table()).render_to_string();
        let expected = "// Generated MCP tool registrations using services

  server.registerTool(
    'get_jewel',
    {
      description: schemas.get_jewel.description,
      inputSchema: schemas.get_jewel
    },
    async (args, extra) => {
      return mcpToolWrapper('get_jewel', logger, extra.sessionId, async () => {
        const result = await services.jewels.get(args.id);
        return result;
      });
    }
  );

  server.registerTool(
    'list_zoku',
    {
      description: schemas.list_zoku.description,
      inputSchema: schemas.list_zoku
    },
    async (args, extra) => {
      return mcpToolWrapper('list_zoku', logger, extra.sessionId, async () => {
        const result = await services.zoku.list(args);
        return result;
      });
    }
  );


// Total tools migrated: 2
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_empty_table() {
        let output = Emitter::new(MappingTable::new(vec![]).unwrap()).render_to_string();
        assert_eq!(
            output,
            "// Generated MCP tool registrations using services\n\n\n// Total tools migrated: 0\n"
        );
    }

    #[test]
    fn test_summary_counts() {
        let emitter = Emitter::new(small_table());
        let mut buf = Vec::new();
        let summary = emitter.emit(&mut buf).unwrap();
        assert_eq!(summary.blocks, 2);
        assert_eq!(summary.bytes, buf.len());
    }

    #[test]
    fn test_builtin_output() {
        let output = Emitter::new(MappingTable::builtin()).render_to_string();
        assert_eq!(output.matches("server.registerTool(").count(), BUILTIN_COUNT);
        assert!(output.ends_with(&format!("// Total tools migrated: {}\n", BUILTIN_COUNT)));
        assert!(output.contains("services.zoku.list(args)"));
        assert!(output.contains(
            "services.entanglements.get(args.id, args.include_children_qupts, args.detailed ? 50 : 20)"
        ));
    }

    #[test]
    fn test_builtin_output_order() {
        let output = Emitter::new(MappingTable::builtin()).render_to_string();
        let first = output.find("'add_jewel',").unwrap();
        let second = output.find("'add_source',").unwrap();
        let last = output.find("'update_jewel',").unwrap();
        assert!(first < second);
        assert!(second < last);
    }

    #[test]
    fn test_deterministic() {
        let a = Emitter::new(MappingTable::builtin()).render_to_string();
        let b = Emitter::new(MappingTable::builtin()).render_to_string();
        assert_eq!(a, b);
    }

    #[test]
    fn test_with_config_uses_custom_comments() {
        let mut config = GeneratorConfig::default();
        config.output.header = "Tools".to_string();
        config.output.trailer = "Count".to_string();
        config.template.services = "svc".to_string();

        let output = Emitter::with_config(small_table(), &config).render_to_string();
        assert!(output.starts_with("// Tools\n\n"));
        assert!(output.ends_with("\n// Count: 2\n"));
        assert!(output.contains("await svc.zoku.list(args);"));
    }

    #[test]
    fn test_emit_writes_rendered_document() {
        let emitter = Emitter::new(small_table());
        let mut buf = Vec::new();
        emitter.emit(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), emitter.render_to_string());
    }

    #[test]
    fn test_write_failure_propagates() {
        struct FailingWriter;

        impl Write for FailingWriter {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let result = Emitter::new(small_table()).emit(&mut FailingWriter);
        assert!(matches!(result, Err(crate::Error::Io(_))));
    }
}
