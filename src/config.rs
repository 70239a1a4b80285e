//! Configuration for the exporter

/// Export configuration, fixed for the instance lifetime except for the
/// preamble flag, which [`append_lines_to_file`] turns off permanently.
///
/// [`append_lines_to_file`]: crate::Exporter::append_lines_to_file
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Separator placed between fields
    pub delimiter: String,
    /// Whether to emit the `sep=` declaration line some spreadsheet
    /// tools use to auto-detect the separator
    pub include_preamble: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            delimiter: ",".to_string(),
            include_preamble: true,
        }
    }
}

impl ExportConfig {
    /// Create a config with the default delimiter and preamble on
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field delimiter
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Enable or disable the `sep=` preamble line
    pub fn with_preamble(mut self, include: bool) -> Self {
        self.include_preamble = include;
        self
    }
}
