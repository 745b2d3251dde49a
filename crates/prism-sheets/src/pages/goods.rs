//! Cheering goods page

use prism_sheets_core::{Row, RowSchema, Table};
use prism_sheets_csv::CsvReadOptions;
use prism_sheets_render::{render_table, Context};
use prism_sheets_wiki::WikiApi;

use super::PageRun;
use crate::bot::Bot;
use crate::error::BotResult;
use crate::fetch::SheetSource;

pub const SHEET: &str = "応援グッズ";
pub const TEMPLATE: &str = "応援グッズ";
pub const PAGE: &str = "応援グッズ";

pub const RARITY: &str = "レアリティ";
pub const NAME: &str = "名前";
pub const ICON: &str = "アイコン";

/// Columns of the listing table
pub const LISTING_COLUMNS: &[&str] = &[ICON, RARITY, NAME, "効果", "説明"];
/// Columns of the acquisition table
pub const ACQUISITION_COLUMNS: &[&str] = &[ICON, NAME, "入手方法"];

const SCHEMA: RowSchema = RowSchema::PLAIN;

/// Rendered fragments of the goods page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoodsPage {
    pub listing: String,
    pub acquisition: String,
}

impl GoodsPage {
    fn context(&self) -> Context {
        Context::new()
            .with("一覧", self.listing.as_str())
            .with("入手方法", self.acquisition.as_str())
    }
}

/// File link for an item's icon
pub fn icon_markup(rarity: &str, name: &str) -> String {
    format!("[[ファイル:{rarity}{name}_アイコン.png|50px]]")
}

/// Add the icon column to every row
pub fn with_icons(table: Table) -> Vec<Row> {
    table
        .rows
        .into_iter()
        .map(|row| {
            let mut row = SCHEMA.apply(row);
            let icon = icon_markup(&row.text(RARITY), &row.text(NAME));
            row.insert(ICON, icon);
            row
        })
        .collect()
}

pub fn shape(table: Table) -> GoodsPage {
    let rows = with_icons(table);
    GoodsPage {
        listing: render_table(LISTING_COLUMNS, &rows),
        acquisition: render_table(ACQUISITION_COLUMNS, &rows),
    }
}

pub fn update<S: SheetSource, W: WikiApi>(bot: &mut Bot<S, W>) -> BotResult<Vec<PageRun>> {
    let mut sheet = bot.fetch(SHEET, &CsvReadOptions::default())?;
    sheet.require_columns(&[RARITY, NAME])?;
    let template = bot.template(TEMPLATE)?;

    let page = shape(std::mem::take(&mut sheet.table));
    let body = template.render(&page.context())?;

    let result = bot.publish(PAGE, &body, &sheet, Some(TEMPLATE));
    Ok(vec![PageRun::new(PAGE, result)])
}
