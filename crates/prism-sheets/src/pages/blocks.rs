//! Block pages: announcements and profiles
//!
//! Every row is rendered through a block template; the blocks are joined and
//! placed into the page template as `{{ ブロック }}`.

use prism_sheets_core::{EmptyFill, Row, RowSchema, Table};
use prism_sheets_csv::CsvReadOptions;
use prism_sheets_render::{Context, RenderResult, Template};
use prism_sheets_wiki::WikiApi;

use super::PageRun;
use crate::bot::Bot;
use crate::error::BotResult;
use crate::fetch::SheetSource;

/// Page-template variable that receives the joined blocks
pub const BLOCKS_KEY: &str = "ブロック";

/// Order in which rows become blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockOrder {
    /// Sheets append new entries at the bottom; pages show them on top
    NewestFirst,
    /// Same order as the sheet
    SheetOrder,
}

/// One block page
#[derive(Debug, Clone, Copy)]
pub struct BlockPage {
    pub sheet: &'static str,
    pub block_template: &'static str,
    pub page_template: &'static str,
    pub page: &'static str,
    pub order: BlockOrder,
    pub schema: RowSchema,
}

pub const IMPORTANT_NEWS: BlockPage = BlockPage {
    sheet: "お知らせ/重要",
    block_template: "お知らせ/重要なお知らせ/ブロック",
    page_template: "お知らせ/重要なお知らせ",
    page: "お知らせ/重要なお知らせ",
    order: BlockOrder::NewestFirst,
    // Entries without a version show "-"
    schema: RowSchema::filled(EmptyFill::Placeholder("-")),
};

pub const GENERAL_NEWS: BlockPage = BlockPage {
    sheet: "お知らせ/一般",
    block_template: "お知らせ/一般情報/ブロック",
    page_template: "お知らせ/一般情報",
    page: "お知らせ/一般情報",
    order: BlockOrder::NewestFirst,
    schema: RowSchema::PLAIN,
};

pub const PROFILES: BlockPage = BlockPage {
    sheet: "プロフィール",
    block_template: "プリズムスタァのプロフィール/ブロック",
    page_template: "プリズムスタァのプロフィール",
    page: "プリズムスタァのプロフィール",
    order: BlockOrder::SheetOrder,
    schema: RowSchema::PLAIN,
};

/// Apply the page's schema and block order
pub fn shape(page: &BlockPage, table: Table) -> Vec<Row> {
    let mut rows: Vec<Row> = table.rows.into_iter().map(|r| page.schema.apply(r)).collect();
    if page.order == BlockOrder::NewestFirst {
        rows.reverse();
    }
    rows
}

/// Render each row and join the blocks, each followed by a blank line
pub fn render_blocks(template: &Template, rows: &[Row]) -> RenderResult<String> {
    let mut text = String::new();
    for row in rows {
        text.push_str(&template.render(&Context::from(row))?);
        text.push_str("\n\n");
    }
    Ok(text)
}

pub fn update<S: SheetSource, W: WikiApi>(
    bot: &mut Bot<S, W>,
    page: &BlockPage,
) -> BotResult<Vec<PageRun>> {
    let mut sheet = bot.fetch(page.sheet, &CsvReadOptions::default())?;
    let block_template = bot.template(page.block_template)?;
    let page_template = bot.template(page.page_template)?;

    let rows = shape(page, std::mem::take(&mut sheet.table));
    let blocks = render_blocks(&block_template, &rows)?;
    let body = page_template.render(&Context::new().with(BLOCKS_KEY, blocks))?;

    let result = bot.publish(page.page, &body, &sheet, Some(page.page_template));
    Ok(vec![PageRun::new(page.page, result)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use prism_sheets_core::CellValue;

    fn news() -> Table {
        let mut table = Table::new(vec!["タイトル".into(), "バージョン".into()]);
        table.rows = vec![
            Row::new().with("タイトル", "r1").with("バージョン", "1.0"),
            Row::new().with("タイトル", "r2").with("バージョン", CellValue::Empty),
            Row::new().with("タイトル", "r3").with("バージョン", "1.2"),
        ];
        table
    }

    #[test]
    fn test_news_blocks_newest_first() {
        let template = Template::parse("[{{タイトル}}]").unwrap();
        let rows = shape(&GENERAL_NEWS, news());
        assert_eq!(render_blocks(&template, &rows).unwrap(), "[r3]\n\n[r2]\n\n[r1]\n\n");
    }

    #[test]
    fn test_profiles_keep_sheet_order() {
        let template = Template::parse("{{タイトル}}").unwrap();
        let rows = shape(&PROFILES, news());
        assert_eq!(render_blocks(&template, &rows).unwrap(), "r1\n\nr2\n\nr3\n\n");
    }

    #[test]
    fn test_only_important_news_fills_dashes() {
        let template = Template::parse("{{タイトル}}:{{バージョン}}").unwrap();

        let important = render_blocks(&template, &shape(&IMPORTANT_NEWS, news())).unwrap();
        assert_eq!(important, "r3:1.2\n\nr2:-\n\nr1:1.0\n\n");

        let general = render_blocks(&template, &shape(&GENERAL_NEWS, news())).unwrap();
        assert_eq!(general, "r3:1.2\n\nr2:\n\nr1:1.0\n\n");
    }
}
