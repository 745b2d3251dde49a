//! Run orchestration
//!
//! Families run one after another. A failure is recorded against the page
//! (or the whole family, when nothing could be rendered) and the run moves
//! on; the caller decides what a non-empty failure list means.

use prism_sheets_wiki::{WikiApi, WriteOutcome};

use crate::bot::Bot;
use crate::error::BotError;
use crate::fetch::SheetSource;
use crate::pages::PageFamily;

/// A page that was written, skipped or previewed
#[derive(Debug)]
pub struct PageReport {
    pub title: String,
    pub outcome: WriteOutcome,
}

/// A page or family that failed
#[derive(Debug)]
pub struct PageFailure {
    /// Page title, or family name if the family failed before producing pages
    pub name: String,
    pub error: BotError,
}

/// Summary of a run
#[derive(Debug, Default)]
pub struct RunSummary {
    pub succeeded: Vec<PageReport>,
    pub failed: Vec<PageFailure>,
}

impl RunSummary {
    /// Check whether nothing failed
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Number of pages actually saved
    pub fn written(&self) -> usize {
        self.count(|o| matches!(o, WriteOutcome::Written))
    }

    /// Number of pages left alone because they were up to date
    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, WriteOutcome::Skipped))
    }

    fn count(&self, pred: impl Fn(&WriteOutcome) -> bool) -> usize {
        self.succeeded.iter().filter(|r| pred(&r.outcome)).count()
    }

    /// Previewed page texts, in run order
    pub fn previews(&self) -> impl Iterator<Item = (&str, &str)> {
        self.succeeded.iter().filter_map(|r| match &r.outcome {
            WriteOutcome::Previewed(text) => Some((r.title.as_str(), text.as_str())),
            _ => None,
        })
    }
}

/// Run `families` in order, isolating failures
pub fn run<S: SheetSource, W: WikiApi>(bot: &mut Bot<S, W>, families: &[PageFamily]) -> RunSummary {
    let mut summary = RunSummary::default();

    for family in families {
        tracing::info!("Updating {family}");
        match family.run(bot) {
            Ok(pages) => {
                for page in pages {
                    match page.result {
                        Ok(outcome) => summary.succeeded.push(PageReport {
                            title: page.title,
                            outcome,
                        }),
                        Err(error) => {
                            tracing::error!("{}: {error}", page.title);
                            summary.failed.push(PageFailure {
                                name: page.title,
                                error,
                            });
                        }
                    }
                }
            }
            Err(error) => {
                tracing::error!("{family}: {error}");
                summary.failed.push(PageFailure {
                    name: family.name().to_string(),
                    error,
                });
            }
        }
    }

    summary
}
