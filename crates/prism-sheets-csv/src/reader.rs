//! CSV reader

use std::collections::HashSet;
use std::io::Read;

use crate::error::{CsvError, CsvResult};
use crate::options::CsvReadOptions;
use prism_sheets_core::{CellValue, Row, Table};

/// Sheet export reader
pub struct CsvReader;

impl CsvReader {
    /// Read CSV text into a table
    pub fn read_str(text: &str, options: &CsvReadOptions) -> CsvResult<Table> {
        Self::read(text.as_bytes(), options)
    }

    /// Read CSV from a reader into a table
    pub fn read<R: Read>(reader: R, options: &CsvReadOptions) -> CsvResult<Table> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut records = csv_reader
            .records()
            .skip(options.skip_rows + options.header_row);

        let header = match records.next() {
            Some(record) => record?,
            None => {
                return Err(CsvError::MissingHeader {
                    row: options.skip_rows + options.header_row,
                })
            }
        };
        let columns = Self::clean_header(header.iter());

        if let Some(index) = &options.index_column {
            if !columns.iter().any(|c| c == index) {
                return Err(CsvError::MissingIndexColumn(index.clone()));
            }
        }

        let mut table = Table::new(columns);
        table.index_column = options.index_column.clone();

        for result in records {
            let record = result?;
            let row: Row = table
                .columns
                .iter()
                .enumerate()
                .map(|(col, name)| {
                    let value = record.get(col).map(CellValue::from_field).unwrap_or_default();
                    (name.clone(), value)
                })
                .collect();
            table.rows.push(row);
        }

        Ok(table)
    }

    /// Clean header cells and make the names unique
    fn clean_header<'a>(cells: impl Iterator<Item = &'a str>) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut columns = Vec::new();

        for (idx, cell) in cells.enumerate() {
            let base = match clean_column_name(cell) {
                name if name.is_empty() => format!("Unnamed: {idx}"),
                name => name,
            };
            let mut name = base.clone();
            let mut n = 1;
            while !seen.insert(name.clone()) {
                name = format!("{base}{n}");
                n += 1;
            }
            columns.push(name);
        }

        columns
    }
}

/// Strip line breaks and periods so a header can be used as a template variable
pub fn clean_column_name(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, '\n' | '\r' | '.'))
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_clean_column_name() {
        assert_eq!(clean_column_name("入手\n方法"), "入手方法");
        assert_eq!(clean_column_name("Lv.\r\n"), "Lv");
        assert_eq!(clean_column_name(" 名前 "), "名前");
    }

    #[test]
    fn test_clean_header_dedups_and_names_blanks() {
        let columns = CsvReader::clean_header(["名前", "", "名前", "名前."].into_iter());
        assert_eq!(columns, vec!["名前", "Unnamed: 1", "名前1", "名前2"]);
    }
}
