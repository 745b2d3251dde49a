//! Wiki table markup

use prism_sheets_core::Row;

use crate::error::{RenderError, RenderResult};

const TABLE_OPEN: &str = "{| class=\"wikitable sortable\"";
const TABLE_CLOSE: &str = "|}";
const ROW_SEPARATOR: &str = "|-";

/// A table read back from markup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedTable {
    /// Header cells
    pub columns: Vec<String>,
    /// Data cells, row by row
    pub rows: Vec<Vec<String>>,
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "{{!}}").replace("\r\n", "<br />").replace('\n', "<br />")
}

fn unescape_cell(text: &str) -> String {
    text.replace("{{!}}", "|")
}

/// Render `rows` projected onto `columns` as a sortable wiki table.
///
/// Rows keep their order; missing cells are empty. Values are printed as-is,
/// without truncation or padding.
pub fn render_table(columns: &[&str], rows: &[Row]) -> String {
    let mut lines = Vec::with_capacity(rows.len() * 2 + 3);
    lines.push(TABLE_OPEN.to_string());

    let header: Vec<String> = columns.iter().map(|c| escape_cell(c)).collect();
    lines.push(format!("! {}", header.join(" !! ")));

    for row in rows {
        let cells: Vec<String> = columns.iter().map(|c| escape_cell(&row.text(c))).collect();
        lines.push(ROW_SEPARATOR.to_string());
        lines.push(format!("| {}", cells.join(" || ")));
    }

    lines.push(TABLE_CLOSE.to_string());
    lines.join("\n")
}

/// Parse markup produced by [`render_table`]
pub fn parse_table(markup: &str) -> RenderResult<ParsedTable> {
    let mut lines = markup.split('\n');

    match lines.next() {
        Some(line) if line.starts_with("{|") => {}
        _ => return Err(RenderError::MalformedTable("missing table opener".into())),
    }

    let header = lines
        .next()
        .and_then(|l| l.strip_prefix("! "))
        .ok_or_else(|| RenderError::MalformedTable("missing header line".into()))?;
    let columns = header.split(" !! ").map(unescape_cell).collect();

    let mut table = ParsedTable {
        columns,
        rows: Vec::new(),
    };
    let mut closed = false;

    for line in lines {
        if line == TABLE_CLOSE {
            closed = true;
            break;
        }
        if line == ROW_SEPARATOR {
            continue;
        }
        let cells = line
            .strip_prefix("| ")
            .ok_or_else(|| RenderError::MalformedTable(format!("unexpected line: {line}")))?;
        table.rows.push(cells.split(" || ").map(unescape_cell).collect());
    }

    if !closed {
        return Err(RenderError::MalformedTable("missing table closer".into()));
    }
    Ok(table)
}
