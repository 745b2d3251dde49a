//! Bromide pages, one per sheet row

use prism_sheets_core::{EmptyFill, Row, RowSchema};
use prism_sheets_csv::CsvReadOptions;
use prism_sheets_render::Context;
use prism_sheets_wiki::WikiApi;

use super::PageRun;
use crate::bot::Bot;
use crate::error::{BotError, BotResult};
use crate::fetch::SheetSource;

pub const SHEET: &str = "ブロマイド";
pub const TEMPLATE: &str = "ブロマイド";

pub const RARITY: &str = "レアリティ";
pub const NAME: &str = "名前";
pub const CHARACTER: &str = "スタァ";

/// Column names with brackets are aliased so templates can refer to them
pub const SCHEMA: RowSchema = RowSchema {
    aliases: &[
        ("ステータス(初期)", "初期ステータス"),
        ("ステータス(最大)", "最大ステータス"),
        ("スキル(効果)", "スキル効果"),
    ],
    numeric: &["ステータス(初期)", "ステータス(最大)", "レベル上限"],
    fill: EmptyFill::Blank,
};

/// Page title of a bromide: rarity, name and character run together
pub fn page_title(row: &Row) -> String {
    format!("{}{}{}", row.text(RARITY), row.text(NAME), row.text(CHARACTER))
}

/// Rows ready to render, paired with their page titles.
///
/// Rows without a name are sheet placeholders and produce no page.
pub fn shape(rows: Vec<Row>) -> Vec<(String, Row)> {
    rows.into_iter()
        .filter(|row| {
            let named = !row.text(NAME).trim().is_empty();
            if !named {
                tracing::debug!("Skipping bromide row without a name");
            }
            named
        })
        .map(|row| {
            let row = SCHEMA.apply(row);
            (page_title(&row), row)
        })
        .collect()
}

pub fn update<S: SheetSource, W: WikiApi>(bot: &mut Bot<S, W>) -> BotResult<Vec<PageRun>> {
    let mut sheet = bot.fetch(SHEET, &CsvReadOptions::default())?;
    sheet.require_columns(&[RARITY, NAME, CHARACTER])?;
    let template = bot.template(TEMPLATE)?;

    let pages = shape(std::mem::take(&mut sheet.table.rows));
    let mut runs = Vec::with_capacity(pages.len());
    for (title, row) in pages {
        let result = template
            .render(&Context::from(&row))
            .map_err(BotError::from)
            .and_then(|body| bot.publish(&title, &body, &sheet, Some(TEMPLATE)));
        runs.push(PageRun::new(title, result));
    }
    Ok(runs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use prism_sheets_core::CellValue;

    fn row() -> Row {
        Row::new()
            .with(RARITY, "SR")
            .with(NAME, "すてきな笑顔")
            .with(CHARACTER, "一条シン")
            .with("ステータス(初期)", "1200.0")
            .with("ステータス(最大)", "2400.5")
            .with("スキル(効果)", CellValue::Empty)
            .with("レベル上限", "60")
    }

    #[test]
    fn test_title_concatenates_three_columns() {
        assert_eq!(page_title(&row()), "SRすてきな笑顔一条シン");
    }

    #[test]
    fn test_aliases_and_integer_coercion() {
        let pages = shape(vec![row()]);
        let (title, row) = &pages[0];
        assert_eq!(title, "SRすてきな笑顔一条シン");

        let ctx = Context::from(row);
        assert_eq!(ctx.get("初期ステータス"), Some("1200"));
        assert_eq!(ctx.get("最大ステータス"), Some("2400.5"));
        assert_eq!(ctx.get("スキル効果"), Some(""));
        assert_eq!(ctx.get("レベル上限"), Some("60"));
        assert_eq!(ctx.get("ステータス(初期)"), None);
    }

    #[test]
    fn test_unnamed_rows_are_skipped() {
        let blank = Row::new().with(RARITY, "SR").with(NAME, CellValue::Empty);
        let pages = shape(vec![blank, row()]);
        assert_eq!(pages.len(), 1);
    }
}
