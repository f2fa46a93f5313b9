//! Diagnostic output writers

use crate::diagnostics::Diagnostic;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Text,
}

pub trait OutputWriter {
    fn write_diagnostics(&mut self, diagnostics: &[Diagnostic]) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_diagnostics(&mut self, diagnostics: &[Diagnostic]) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(diagnostics)?;
        self.writer.write_all(json.as_bytes())?;
        Ok(())
    }
}

pub struct TextWriter<W: Write> {
    writer: W,
}

impl<W: Write> TextWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TextWriter<W> {
    fn write_diagnostics(&mut self, diagnostics: &[Diagnostic]) -> anyhow::Result<()> {
        for diagnostic in diagnostics {
            writeln!(
                self.writer,
                "{}:{}:{}: {} {}: {}",
                diagnostic.location.file.display(),
                diagnostic.location.line,
                diagnostic.location.column,
                diagnostic.severity,
                diagnostic.id,
                diagnostic.message
            )?;
        }
        Ok(())
    }
}

pub fn create_writer<'a, W: Write + 'a>(writer: W, format: OutputFormat) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Text => Box::new(TextWriter::new(writer)),
    }
}
