//! Data model for the accumulated table

mod table;
mod value;

pub use table::{ExportError, Row, Table};
pub use value::{CellValue, Record};
