//! PP gacha bromide page
//!
//! The sheet marks availability with `1`/`0`; the page shows `○`/`×`, and
//! `?` where nobody has checked yet.

use prism_sheets_core::{CellValue, EmptyFill, Row, RowSchema, Table};
use prism_sheets_csv::CsvReadOptions;
use prism_sheets_render::{render_table, Context};
use prism_sheets_wiki::WikiApi;

use super::PageRun;
use crate::bot::Bot;
use crate::error::BotResult;
use crate::fetch::SheetSource;

pub const SHEET: &str = "PPガチャ";
pub const TEMPLATE: &str = "ブロマイド(PPガチャ)";
pub const PAGE: &str = "ブロマイド(PPガチャ)";

/// Shown for cells nobody has filled in
pub const UNKNOWN: &str = "?";

const SCHEMA: RowSchema = RowSchema::filled(EmptyFill::Placeholder(UNKNOWN));

fn recode(cell: &mut CellValue) {
    let mark = match cell.as_str() {
        Some("1") => "○",
        Some("0") => "×",
        _ => return,
    };
    *cell = CellValue::text(mark);
}

/// Fill unknown cells and turn `1`/`0` into `○`/`×`
pub fn recode_row(row: Row) -> Row {
    let mut row = SCHEMA.apply(row);
    row.values_mut().for_each(recode);
    row
}

pub fn shape(table: Table) -> String {
    let rows: Vec<Row> = table.rows.into_iter().map(recode_row).collect();
    let columns: Vec<&str> = table.columns.iter().map(String::as_str).collect();
    render_table(&columns, &rows)
}

pub fn update<S: SheetSource, W: WikiApi>(bot: &mut Bot<S, W>) -> BotResult<Vec<PageRun>> {
    let mut sheet = bot.fetch(SHEET, &CsvReadOptions::default())?;
    let template = bot.template(TEMPLATE)?;

    let table = shape(std::mem::take(&mut sheet.table));
    let body = template.render(&Context::new().with("表", table))?;

    let result = bot.publish(PAGE, &body, &sheet, Some(TEMPLATE));
    Ok(vec![PageRun::new(PAGE, result)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use prism_sheets_render::parse_table;

    #[test]
    fn test_every_cell_recoded_independently() {
        let row = Row::new()
            .with("ブロマイド", "SRすてきな笑顔")
            .with("第1弾", "1")
            .with("第2弾", "0")
            .with("第3弾", CellValue::Empty)
            .with("第4弾", "10");
        let row = recode_row(row);

        assert_eq!(row.text("ブロマイド"), "SRすてきな笑顔");
        assert_eq!(row.text("第1弾"), "○");
        assert_eq!(row.text("第2弾"), "×");
        assert_eq!(row.text("第3弾"), UNKNOWN);
        assert_eq!(row.text("第4弾"), "10");
    }

    #[test]
    fn test_full_table_keeps_all_columns() {
        let mut table = Table::new(vec!["ブロマイド".into(), "第1弾".into()]);
        table.rows = vec![
            Row::new().with("ブロマイド", "a").with("第1弾", "1"),
            Row::new().with("ブロマイド", "b").with("第1弾", CellValue::Empty),
        ];
        let parsed = parse_table(&shape(table)).unwrap();
        assert_eq!(parsed.columns, vec!["ブロマイド", "第1弾"]);
        assert_eq!(parsed.rows, vec![vec!["a", "○"], vec!["b", "?"]]);
    }
}
