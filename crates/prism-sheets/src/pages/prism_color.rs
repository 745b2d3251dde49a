//! Prism color pages
//!
//! One page per prism kind and color (3 × 7). Each page lists the songs
//! whose kind column mentions the color and links the bromides whose kind
//! column is exactly that color.

use prism_sheets_core::{Row, Table};
use prism_sheets_csv::CsvReadOptions;
use prism_sheets_render::{render_table, Context};
use prism_sheets_wiki::WikiApi;

use super::{bromide, PageRun};
use crate::bot::Bot;
use crate::error::{BotError, BotResult};
use crate::fetch::SheetSource;

pub const SONG_SHEET: &str = "楽曲リスト";
pub const TEMPLATE: &str = "プリズムカラー";

pub const SONG_TITLE: &str = "曲名";
pub const ARTIST: &str = "歌唱";
pub const DIFFICULTY: &str = "難易度";

/// The seven prism colors, in rainbow order
pub const COLORS: [&str; 7] = ["赤", "橙", "黄", "緑", "青", "藍", "紫"];

/// Kinds of prism a song or bromide is colored by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrismKind {
    Jump,
    Spin,
    Step,
}

impl PrismKind {
    pub const ALL: [PrismKind; 3] = [PrismKind::Jump, PrismKind::Spin, PrismKind::Step];

    /// Name used in page titles
    pub fn name(self) -> &'static str {
        match self {
            PrismKind::Jump => "ジャンプ",
            PrismKind::Spin => "スピン",
            PrismKind::Step => "ステップ",
        }
    }

    /// Column holding this kind's color on both sheets
    pub fn column(self) -> &'static str {
        match self {
            PrismKind::Jump => "ジャンプカラー",
            PrismKind::Spin => "スピンカラー",
            PrismKind::Step => "ステップカラー",
        }
    }

    /// Song table columns for this kind
    pub fn song_columns(self) -> [&'static str; 4] {
        [SONG_TITLE, ARTIST, DIFFICULTY, self.column()]
    }
}

/// Rendered fragments of one prism color page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrismColorPage {
    pub kind: PrismKind,
    pub color: &'static str,
    pub title: String,
    pub songs: String,
    pub stars: String,
}

impl PrismColorPage {
    fn context(&self) -> Context {
        Context::new()
            .with("タイトル", self.title.as_str())
            .with("楽曲", self.songs.as_str())
            .with("スタァ", self.stars.as_str())
    }
}

/// Page title for a kind/color pair
pub fn page_title(kind: PrismKind, color: &str) -> String {
    format!("{TEMPLATE}/{}/{color}", kind.name())
}

/// Songs whose kind column mentions `color`
pub fn matching_songs(songs: &[Row], kind: PrismKind, color: &str) -> Vec<Row> {
    songs
        .iter()
        .filter(|row| row.text(kind.column()).contains(color))
        .map(|row| row.project(&kind.song_columns()))
        .collect()
}

/// Wiki list of bromides whose kind column is exactly `color`
pub fn star_list(bromides: &[Row], kind: PrismKind, color: &str) -> String {
    bromides
        .iter()
        .filter(|row| row.text(kind.column()).trim() == color)
        .filter(|row| !row.text(bromide::NAME).trim().is_empty())
        .map(|row| format!("* [[{}]]", bromide::page_title(row)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// All 21 pages from one songs table and one bromide table
pub fn shape(songs: &Table, bromides: &Table) -> Vec<PrismColorPage> {
    let mut pages = Vec::with_capacity(PrismKind::ALL.len() * COLORS.len());
    for kind in PrismKind::ALL {
        for color in COLORS {
            let rows = matching_songs(&songs.rows, kind, color);
            pages.push(PrismColorPage {
                kind,
                color,
                title: page_title(kind, color),
                songs: render_table(&kind.song_columns(), &rows),
                stars: star_list(&bromides.rows, kind, color),
            });
        }
    }
    pages
}

pub fn update<S: SheetSource, W: WikiApi>(bot: &mut Bot<S, W>) -> BotResult<Vec<PageRun>> {
    let songs = bot.fetch(SONG_SHEET, &CsvReadOptions::default())?;
    let bromides = bot.fetch(bromide::SHEET, &CsvReadOptions::default())?;

    let kind_columns: Vec<&str> = PrismKind::ALL.iter().map(|k| k.column()).collect();
    songs.require_columns(&[SONG_TITLE])?;
    songs.require_columns(&kind_columns)?;
    bromides.require_columns(&[bromide::RARITY, bromide::NAME, bromide::CHARACTER])?;
    bromides.require_columns(&kind_columns)?;

    let template = bot.template(TEMPLATE)?;

    let pages = shape(&songs.table, &bromides.table);
    let mut runs = Vec::with_capacity(pages.len());
    for page in pages {
        let result = template
            .render(&page.context())
            .map_err(BotError::from)
            .and_then(|body| bot.publish(&page.title, &body, &songs, Some(TEMPLATE)));
        runs.push(PageRun::new(page.title, result));
    }
    Ok(runs)
}
