//! Fan level page

use prism_sheets_core::{Row, RowSchema, Table};
use prism_sheets_csv::CsvReadOptions;
use prism_sheets_render::{render_table, Context};
use prism_sheets_wiki::WikiApi;

use super::PageRun;
use crate::bot::Bot;
use crate::error::BotResult;
use crate::fetch::SheetSource;

pub const SHEET: &str = "ファンレベル";
pub const TEMPLATE: &str = "ファンレベル";
pub const PAGE: &str = "ファンレベル";

pub const LEVEL: &str = "レベル";

/// Columns of the parameter progression table
pub const PARAMETER_COLUMNS: &[&str] = &[LEVEL, "必要ファン数", "最大スタミナ", "フレンド上限"];
/// Columns of the story unlock table
pub const STORY_COLUMNS: &[&str] = &[LEVEL, "解放ストーリー"];

const SCHEMA: RowSchema = RowSchema::PLAIN;

/// Rendered fragments of the fan level page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FanLevelPage {
    pub parameters: String,
    pub stories: String,
}

/// Levels that have at least one filled cell besides the level itself
pub fn known_levels(table: Table) -> Vec<Row> {
    let index = table.index_column.clone();
    table
        .rows
        .into_iter()
        .filter(|row| !row.is_blank_except(index.as_deref()))
        .map(|row| SCHEMA.apply(row))
        .collect()
}

pub fn shape(table: Table) -> FanLevelPage {
    let rows = known_levels(table);
    FanLevelPage {
        parameters: render_table(PARAMETER_COLUMNS, &rows),
        stories: render_table(STORY_COLUMNS, &rows),
    }
}

pub fn update<S: SheetSource, W: WikiApi>(bot: &mut Bot<S, W>) -> BotResult<Vec<PageRun>> {
    let mut sheet = bot.fetch(SHEET, &CsvReadOptions::default().with_index(LEVEL))?;
    let template = bot.template(TEMPLATE)?;

    let page = shape(std::mem::take(&mut sheet.table));
    let body = template.render(
        &Context::new()
            .with("パラメータ", page.parameters)
            .with("解放ストーリー", page.stories),
    )?;

    let result = bot.publish(PAGE, &body, &sheet, Some(TEMPLATE));
    Ok(vec![PageRun::new(PAGE, result)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use prism_sheets_csv::CsvReader;
    use prism_sheets_render::parse_table;

    const SHEET_CSV: &str = "\
レベル,必要ファン数,最大スタミナ,フレンド上限,解放ストーリー
1,0,50,10,第1話
2,100,,12,
3,,,,
4,400,56,,第2話
";

    fn table() -> Table {
        CsvReader::read_str(SHEET_CSV, &CsvReadOptions::default().with_index(LEVEL)).unwrap()
    }

    #[test]
    fn test_blank_levels_are_dropped() {
        let levels: Vec<String> = known_levels(table()).iter().map(|r| r.text(LEVEL)).collect();
        assert_eq!(levels, vec!["1", "2", "4"]);
    }

    #[test]
    fn test_remaining_empties_render_blank() {
        let page = shape(table());
        let parameters = parse_table(&page.parameters).unwrap();
        assert_eq!(parameters.rows[1], vec!["2", "100", "", "12"]);

        let stories = parse_table(&page.stories).unwrap();
        assert_eq!(
            stories.rows,
            vec![vec!["1", "第1話"], vec!["2", ""], vec!["4", "第2話"]]
        );
    }
}
