//! Page families
//!
//! Each family turns one or two sheets into one or more wiki pages. The
//! `shape_*` functions are pure; the `update` functions fetch, render and
//! write.

pub mod blocks;
pub mod bromide;
pub mod fan_level;
pub mod goods;
pub mod pp_gacha;
pub mod prism_color;

use std::fmt;

use prism_sheets_wiki::{WikiApi, WriteOutcome};

use crate::bot::Bot;
use crate::error::BotResult;
use crate::fetch::SheetSource;

/// Result of writing one page
#[derive(Debug)]
pub struct PageRun {
    /// Page title
    pub title: String,
    /// What the writer did, or why it failed
    pub result: BotResult<WriteOutcome>,
}

impl PageRun {
    pub(crate) fn new(title: impl Into<String>, result: BotResult<WriteOutcome>) -> Self {
        Self {
            title: title.into(),
            result,
        }
    }
}

/// Every page family the bot maintains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageFamily {
    ImportantNews,
    GeneralNews,
    Profiles,
    Goods,
    FanLevel,
    PpGacha,
    Bromides,
    PrismColors,
}

impl PageFamily {
    /// All families in run order
    pub const ALL: [PageFamily; 8] = [
        PageFamily::ImportantNews,
        PageFamily::GeneralNews,
        PageFamily::Profiles,
        PageFamily::Goods,
        PageFamily::FanLevel,
        PageFamily::PpGacha,
        PageFamily::Bromides,
        PageFamily::PrismColors,
    ];

    /// Name used in logs and the run summary
    pub fn name(self) -> &'static str {
        match self {
            PageFamily::ImportantNews => blocks::IMPORTANT_NEWS.page,
            PageFamily::GeneralNews => blocks::GENERAL_NEWS.page,
            PageFamily::Profiles => blocks::PROFILES.page,
            PageFamily::Goods => goods::PAGE,
            PageFamily::FanLevel => fan_level::PAGE,
            PageFamily::PpGacha => pp_gacha::PAGE,
            PageFamily::Bromides => "ブロマイド (個別ページ)",
            PageFamily::PrismColors => "プリズムカラー (個別ページ)",
        }
    }

    /// Run the family's update.
    ///
    /// An `Err` means nothing could be written (fetch or template failure);
    /// otherwise each produced page carries its own result.
    pub fn run<S: SheetSource, W: WikiApi>(self, bot: &mut Bot<S, W>) -> BotResult<Vec<PageRun>> {
        match self {
            PageFamily::ImportantNews => blocks::update(bot, &blocks::IMPORTANT_NEWS),
            PageFamily::GeneralNews => blocks::update(bot, &blocks::GENERAL_NEWS),
            PageFamily::Profiles => blocks::update(bot, &blocks::PROFILES),
            PageFamily::Goods => goods::update(bot),
            PageFamily::FanLevel => fan_level::update(bot),
            PageFamily::PpGacha => pp_gacha::update(bot),
            PageFamily::Bromides => bromide::update(bot),
            PageFamily::PrismColors => prism_color::update(bot),
        }
    }
}

impl fmt::Display for PageFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
