//! Row and table types

use indexmap::IndexMap;

use crate::value::CellValue;

/// One sheet row: column name → cell, in sheet column order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    cells: IndexMap<String, CellValue>,
}

impl Row {
    /// Create an empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a cell, keeping the position of an existing column
    pub fn insert<K: Into<String>, V: Into<CellValue>>(&mut self, column: K, value: V) {
        self.cells.insert(column.into(), value.into());
    }

    /// Builder form of [`Row::insert`]
    pub fn with<K: Into<String>, V: Into<CellValue>>(mut self, column: K, value: V) -> Self {
        self.insert(column, value);
        self
    }

    /// Get a cell by column name
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells.get(column)
    }

    /// Get a mutable cell by column name
    pub fn get_mut(&mut self, column: &str) -> Option<&mut CellValue> {
        self.cells.get_mut(column)
    }

    /// Rename a column in place; a missing source column yields an empty cell
    pub fn rename(&mut self, from: &str, to: &str) {
        match self.cells.get_index_of(from) {
            Some(idx) => {
                let value = self.cells.shift_remove_index(idx).map(|(_, v)| v).unwrap_or_default();
                self.cells.shift_insert(idx, to.to_string(), value);
            }
            None => {
                self.cells.entry(to.to_string()).or_default();
            }
        }
    }

    /// Display text of a column; missing and empty cells are both `""`
    pub fn text(&self, column: &str) -> String {
        self.cells.get(column).map(ToString::to_string).unwrap_or_default()
    }

    /// Iterate over `(column, cell)` pairs in column order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.cells.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate mutably over the cells
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut CellValue> {
        self.cells.values_mut()
    }

    /// Column names in order
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }

    /// Keep only `columns`, in the given order; absent columns become empty
    pub fn project(&self, columns: &[&str]) -> Row {
        let mut out = Row::new();
        for column in columns {
            out.insert(*column, self.get(column).cloned().unwrap_or_default());
        }
        out
    }

    /// Check whether every cell apart from `except` is empty
    pub fn is_blank_except(&self, except: Option<&str>) -> bool {
        self.cells
            .iter()
            .filter(|(k, _)| Some(k.as_str()) != except)
            .all(|(_, v)| v.is_empty())
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if row has any cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<K: Into<String>, V: Into<CellValue>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (k, v) in iter {
            row.insert(k, v);
        }
        row
    }
}

/// All rows read from one sheet
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    /// Cleaned column names in sheet order
    pub columns: Vec<String>,
    /// Designated index column, if the reader was asked for one
    pub index_column: Option<String>,
    /// Rows in sheet order
    pub rows: Vec<Row>,
}

impl Table {
    /// Create a table with the given columns and no rows
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            index_column: None,
            rows: Vec::new(),
        }
    }

    /// Check whether the sheet has a column
    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
