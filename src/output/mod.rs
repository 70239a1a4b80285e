//! Export surface: the exporter facade, line producer, and sinks

mod lines;
mod sink;

pub use lines::LineProducer;
pub use sink::LINE_TERMINATOR;

use std::path::Path;

use anyhow::Result;

use crate::config::ExportConfig;
use crate::encoding;
use crate::model::{CellValue, ExportError, Record, Table};

/// Delimited-text exporter: accumulates rows of named values and
/// serializes them as spreadsheet-friendly delimited text.
///
/// Export methods take `&mut self`: serializing a row fills its missing
/// columns with nulls in place, so the first export fixes the filled
/// state later exports observe. Repeated exports of an unchanged table
/// produce identical output.
///
/// The exporter is a plain owned structure with no internal
/// synchronization; callers sharing one across threads must wrap it in
/// a lock.
#[derive(Debug, Default)]
pub struct Exporter {
    table: Table,
    config: ExportConfig,
}

impl Exporter {
    /// Create an exporter with the default configuration (`,` delimiter,
    /// preamble enabled)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an exporter with an explicit configuration
    pub fn with_config(config: ExportConfig) -> Self {
        Self {
            table: Table::new(),
            config,
        }
    }

    /// Current configuration
    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Read access to the accumulated table
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Start a new row; subsequent field assignments target it
    pub fn start_row(&mut self) {
        self.table.start_row();
    }

    /// Assign a value to `name` in the current row
    pub fn set_field(
        &mut self,
        name: impl Into<String>,
        value: impl Into<CellValue>,
    ) -> Result<(), ExportError> {
        self.table.set_field(name, value)
    }

    /// Bulk-load one row per record
    pub fn add_records<R: Record>(
        &mut self,
        records: impl IntoIterator<Item = R>,
    ) -> Result<(), ExportError> {
        self.table.add_records(records)
    }

    /// The output lines for the current table state
    pub fn lines(&mut self, include_header: bool) -> LineProducer<'_> {
        LineProducer::new(
            &mut self.table,
            &self.config.delimiter,
            self.config.include_preamble,
            include_header,
        )
    }

    /// Render the full output as a single string, with the platform
    /// line terminator after every line including the last
    pub fn export_to_text(&mut self, include_header: bool) -> String {
        let mut out = String::new();
        for line in self.lines(include_header) {
            out.push_str(&line);
            out.push_str(LINE_TERMINATOR);
        }
        out
    }

    /// Append the output lines to the file at `path`, creating it if
    /// absent, in the Latin-1 output encoding
    pub fn export_to_file(&mut self, path: impl AsRef<Path>, include_header: bool) -> Result<()> {
        sink::append_lines(path.as_ref(), self.lines(include_header))
    }

    /// Append continuation lines to a file that already carries its own
    /// preamble and header. Turns the `sep=` preamble off for this call
    /// and permanently for the instance.
    pub fn append_lines_to_file(
        &mut self,
        path: impl AsRef<Path>,
        include_header: bool,
    ) -> Result<()> {
        self.config.include_preamble = false;
        self.export_to_file(path, include_header)
    }

    /// Encode the full text output, prefixed with the encoding's
    /// preamble bytes
    pub fn export_to_bytes(&mut self, include_header: bool) -> Vec<u8> {
        let text = self.export_to_text(include_header);
        let payload = encoding::encode(&text);
        let mut buffer = Vec::with_capacity(encoding::PREAMBLE.len() + payload.len());
        buffer.extend_from_slice(encoding::PREAMBLE);
        buffer.extend_from_slice(&payload);
        buffer
    }

    /// Release the accumulated columns and rows
    pub fn clear(&mut self) {
        self.table.clear();
    }
}
