//! csvexport - Spreadsheet-friendly delimited-text exporter
//!
//! Accumulates rows of named, loosely-typed values (heterogeneous field
//! sets per row are fine) and serializes them to a delimiter-separated
//! text format with correct quoting and escaping, an optional `sep=`
//! delimiter-declaration line, and text, file-append, or byte-buffer
//! output in a Latin-1 encoding.
//!
//! ```
//! use csvexport::Exporter;
//!
//! let mut exporter = Exporter::new();
//! exporter.start_row();
//! exporter.set_field("Name", "Sydney, Australia")?;
//! exporter.set_field("Age", 5)?;
//!
//! let text = exporter.export_to_text(true);
//! assert!(text.starts_with("sep=,"));
//! # Ok::<(), csvexport::ExportError>(())
//! ```

pub mod config;
pub mod encoding;
pub mod format;
pub mod model;
pub mod output;

pub use config::ExportConfig;
pub use format::format_value;
pub use model::{CellValue, ExportError, Record, Table};
pub use output::{Exporter, LINE_TERMINATOR};
