//! Prism Sheets CLI - sync wiki pages from the published spreadsheet

use anyhow::{bail, Context, Result};
use clap::Parser;
use prism_sheets::prelude::*;
use prism_sheets::HttpSheetSource;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "prism-bot")]
#[command(
    author,
    version,
    about = "Update bot-maintained wiki pages from the published spreadsheet"
)]
struct Cli {
    /// Render every page but write nothing; print the page texts instead
    #[arg(short, long)]
    debug: bool,

    /// Print a spreadsheet hyperlink formula for every known sheet and exit
    #[arg(long)]
    sheet_links: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    if cli.sheet_links {
        return sheet_links();
    }

    let mode = if cli.debug {
        tracing::info!("Debug mode: pages are rendered but not written");
        WriteMode::Preview
    } else {
        WriteMode::Live
    };
    update(mode)
}

fn sheet_links() -> Result<()> {
    let mut stdout = io::stdout().lock();
    for line in SheetRegistry::default().hyperlink_rows() {
        writeln!(stdout, "{line}").context("Failed to write to stdout")?;
    }
    Ok(())
}

fn update(mode: WriteMode) -> Result<()> {
    let config = BotConfig::from_env().context("Invalid configuration")?;

    let source = HttpSheetSource::new(&config.export_url, &config.wiki.user_agent, config.timeout)
        .context("Failed to set up sheet download")?;
    let wiki = MediaWikiClient::new(config.wiki.clone()).context("Failed to set up wiki client")?;

    let mut bot = Bot::new(SheetRegistry::default(), source, wiki, mode, &config.view_url)
        .context("Failed to set up bot")?;

    let summary = run(&mut bot, &PageFamily::ALL);

    if mode == WriteMode::Preview {
        let mut stdout = io::stdout().lock();
        for (title, text) in summary.previews() {
            writeln!(stdout, "===== {title} =====\n{text}\n").context("Failed to write to stdout")?;
        }
    }

    eprintln!(
        "Done: {} written, {} unchanged, {} failed",
        summary.written(),
        summary.skipped(),
        summary.failed.len()
    );
    for failure in &summary.failed {
        eprintln!("  {}: {}", failure.name, failure.error);
    }

    if !summary.is_success() {
        bail!("{} page(s) failed to update", summary.failed.len());
    }
    Ok(())
}
