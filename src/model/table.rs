//! Table accumulation: ordered column set plus append-only rows

use indexmap::{IndexMap, IndexSet};
use thiserror::Error;

use super::value::{CellValue, Record};

/// Errors from table-building calls
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExportError {
    /// A field was assigned before any row was started
    #[error("no active row: call start_row before set_field")]
    NoActiveRow,
}

/// A row maps column names to values. A column absent from the map is a
/// missing value for that row.
pub type Row = IndexMap<String, CellValue>;

/// In-memory table: an ordered, deduplicated column set and an
/// insertion-ordered list of rows. Monotonic append only; no update or
/// delete API.
#[derive(Debug, Default)]
pub struct Table {
    columns: IndexSet<String>,
    rows: Vec<Row>,
}

impl Table {
    /// Create a new empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new empty row and make it the current row
    pub fn start_row(&mut self) {
        self.rows.push(Row::new());
    }

    /// Register `name` in the column set (first-seen order is kept) and
    /// store `value` under it in the current row.
    ///
    /// The column is registered even when the call fails with
    /// [`ExportError::NoActiveRow`].
    pub fn set_field(
        &mut self,
        name: impl Into<String>,
        value: impl Into<CellValue>,
    ) -> Result<(), ExportError> {
        let name = name.into();
        if !self.columns.contains(&name) {
            self.columns.insert(name.clone());
        }

        let row = self.rows.last_mut().ok_or(ExportError::NoActiveRow)?;
        row.insert(name, value.into());
        Ok(())
    }

    /// Bulk load: one row per record, fields in the record's own order.
    /// An empty input is a no-op.
    pub fn add_records<R: Record>(
        &mut self,
        records: impl IntoIterator<Item = R>,
    ) -> Result<(), ExportError> {
        for record in records {
            self.start_row();
            for (name, value) in record.fields() {
                self.set_field(name, value)?;
            }
        }
        Ok(())
    }

    /// Assign `Null` to every declared column missing from the row at
    /// `index`. The fill is retained in the stored row, so later reads
    /// see the filled state.
    pub(crate) fn fill_row(&mut self, index: usize) {
        if let Some(row) = self.rows.get_mut(index) {
            for name in &self.columns {
                if !row.contains_key(name) {
                    row.insert(name.clone(), CellValue::Null);
                }
            }
        }
    }

    /// Column names in first-seen order
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|name| name.as_str())
    }

    /// All rows in insertion order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Release the column and row storage
    pub fn clear(&mut self) {
        self.columns = IndexSet::new();
        self.rows = Vec::new();
    }
}
