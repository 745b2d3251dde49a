//! CSV options

/// Options for reading a sheet export
#[derive(Debug, Clone, Default)]
pub struct CsvReadOptions {
    /// Leading records to drop before anything else (banner rows, notes)
    pub skip_rows: usize,
    /// Which of the remaining records holds the column names (0 = first)
    pub header_row: usize,
    /// Column designated as the row index
    pub index_column: Option<String>,
}

impl CsvReadOptions {
    /// Use `column` as the row index
    pub fn with_index<S: Into<String>>(mut self, column: S) -> Self {
        self.index_column = Some(column.into());
        self
    }

    /// Drop `rows` leading records
    pub fn with_skip_rows(mut self, rows: usize) -> Self {
        self.skip_rows = rows;
        self
    }

    /// Take the header from the `row`-th record after skipping
    pub fn with_header_row(mut self, row: usize) -> Self {
        self.header_row = row;
        self
    }
}
