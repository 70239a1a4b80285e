//! Lazy line production over the accumulated table

use crate::format::format_value;
use crate::model::{CellValue, Table};

enum State {
    Preamble,
    Header,
    Row(usize),
}

/// Lazy iterator over the output lines: an optional `sep=` preamble,
/// an optional header, then one line per row in insertion order.
///
/// Each export call builds a fresh producer, so the sequence always
/// reflects the table's current state. Walking a row fills its missing
/// columns with nulls in place, which is why the producer holds the
/// table mutably.
pub struct LineProducer<'a> {
    table: &'a mut Table,
    delimiter: &'a str,
    include_header: bool,
    state: State,
}

impl<'a> LineProducer<'a> {
    pub fn new(
        table: &'a mut Table,
        delimiter: &'a str,
        include_preamble: bool,
        include_header: bool,
    ) -> Self {
        let state = if include_preamble {
            State::Preamble
        } else if include_header {
            State::Header
        } else {
            State::Row(0)
        };
        Self {
            table,
            delimiter,
            include_header,
            state,
        }
    }

    fn header_line(&self) -> String {
        self.table
            .columns()
            .map(|name| format_value(&CellValue::from(name), self.delimiter))
            .collect::<Vec<_>>()
            .join(self.delimiter)
    }

    fn row_line(&mut self, index: usize) -> String {
        self.table.fill_row(index);
        let row = &self.table.rows()[index];
        self.table
            .columns()
            .map(|name| {
                let value = row.get(name).unwrap_or(&CellValue::Null);
                format_value(value, self.delimiter)
            })
            .collect::<Vec<_>>()
            .join(self.delimiter)
    }
}

impl Iterator for LineProducer<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        match self.state {
            State::Preamble => {
                self.state = if self.include_header {
                    State::Header
                } else {
                    State::Row(0)
                };
                Some(format!("sep={}", self.delimiter))
            }
            State::Header => {
                self.state = State::Row(0);
                Some(self.header_line())
            }
            State::Row(index) => {
                if index >= self.table.row_count() {
                    return None;
                }
                self.state = State::Row(index + 1);
                Some(self.row_line(index))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> Table {
        let mut table = Table::new();
        table.start_row();
        table.set_field("Name", "Ada").unwrap();
        table.set_field("Age", 36).unwrap();
        table.start_row();
        table.set_field("Name", "Grace").unwrap();
        table
    }

    #[test]
    fn test_preamble_is_always_the_first_line() {
        let mut table = sample_table();
        let lines: Vec<_> = LineProducer::new(&mut table, ",", true, true).collect();
        assert_eq!(lines[0], "sep=,");
        assert_eq!(lines.iter().filter(|l| l.starts_with("sep=")).count(), 1);
    }

    #[test]
    fn test_header_line_follows_column_order() {
        let mut table = sample_table();
        let lines: Vec<_> = LineProducer::new(&mut table, ",", false, true).collect();
        assert_eq!(lines[0], "Name,Age");
    }

    #[test]
    fn test_rows_without_header_or_preamble() {
        let mut table = sample_table();
        let lines: Vec<_> = LineProducer::new(&mut table, ",", false, false).collect();
        assert_eq!(lines, vec!["Ada,36", "Grace,"]);
    }

    #[test]
    fn test_missing_columns_export_empty() {
        let mut table = sample_table();
        let lines: Vec<_> = LineProducer::new(&mut table, ",", false, false).collect();
        assert_eq!(lines[1], "Grace,");
        // The fill is retained in the stored row
        assert_eq!(table.rows()[1]["Age"], CellValue::Null);
    }

    #[test]
    fn test_row_fields_follow_column_order_not_row_order() {
        let mut table = Table::new();
        table.start_row();
        table.set_field("A", 1).unwrap();
        table.set_field("B", 2).unwrap();
        table.start_row();
        table.set_field("B", 4).unwrap();
        table.set_field("A", 3).unwrap();

        let lines: Vec<_> = LineProducer::new(&mut table, ",", false, false).collect();
        assert_eq!(lines, vec!["1,2", "3,4"]);
    }

    #[test]
    fn test_empty_table_yields_only_configured_prefix_lines() {
        let mut table = Table::new();
        let lines: Vec<_> = LineProducer::new(&mut table, ",", true, false).collect();
        assert_eq!(lines, vec!["sep=,"]);

        let lines: Vec<_> = LineProducer::new(&mut table, ",", false, false).collect();
        assert!(lines.is_empty());
    }
}
