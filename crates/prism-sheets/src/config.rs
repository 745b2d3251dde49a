//! Bot configuration
//!
//! Everything is read from the environment so the same binary can run from
//! cron, CI or a shell without a config file.

use std::env;
use std::time::Duration;

use prism_sheets_wiki::{Credentials, WikiClientConfig};

use crate::error::{BotError, BotResult};

/// CSV export of one tab of the published spreadsheet
pub const DEFAULT_EXPORT_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vSWkD1CJvETQFWYfImMvpdGxJPmruNqh7HrCqc2d1FcE2m_hyBMjyOoFkbJFzxXBssgDapfng1IPUBB/pub?gid={gid}&single=true&output=csv";

/// Browser view of one tab, linked from page footers
pub const DEFAULT_VIEW_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vSWkD1CJvETQFWYfImMvpdGxJPmruNqh7HrCqc2d1FcE2m_hyBMjyOoFkbJFzxXBssgDapfng1IPUBB/pubhtml?gid={gid}&single=true";

pub const DEFAULT_USER_AGENT: &str = concat!("prism-sheets/", env!("CARGO_PKG_VERSION"));

pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Runtime settings
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Wiki connection
    pub wiki: WikiClientConfig,
    /// Sheet CSV export URL with a `{gid}` slot
    pub export_url: String,
    /// Human-facing sheet URL with a `{gid}` slot
    pub view_url: String,
    /// Timeout for sheet downloads
    pub timeout: Duration,
}

fn env_value(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_or(key: &str, default: &str) -> String {
    env_value(key).unwrap_or_else(|| default.to_string())
}

fn check_gid_slot(key: &str, url: String) -> BotResult<String> {
    if url.contains("{gid}") {
        Ok(url)
    } else {
        Err(BotError::Config(format!("{key} must contain a {{gid}} placeholder")))
    }
}

impl BotConfig {
    /// Read settings from `PRISM_*` environment variables
    pub fn from_env() -> BotResult<Self> {
        let api_url = env_value("PRISM_WIKI_API_URL")
            .ok_or_else(|| BotError::Config("PRISM_WIKI_API_URL is not set".into()))?;

        let timeout_ms = match env_value("PRISM_HTTP_TIMEOUT_MS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                BotError::Config(format!("PRISM_HTTP_TIMEOUT_MS is not a number: {raw}"))
            })?,
            None => DEFAULT_TIMEOUT_MS,
        };
        let timeout = Duration::from_millis(timeout_ms);

        let credentials = match (env_value("PRISM_WIKI_USER"), env_value("PRISM_WIKI_PASSWORD")) {
            (Some(username), Some(password)) => Some(Credentials { username, password }),
            (None, None) => None,
            _ => {
                return Err(BotError::Config(
                    "PRISM_WIKI_USER and PRISM_WIKI_PASSWORD must be set together".into(),
                ))
            }
        };

        Ok(Self {
            wiki: WikiClientConfig {
                api_url,
                user_agent: env_or("PRISM_USER_AGENT", DEFAULT_USER_AGENT),
                timeout,
                credentials,
            },
            export_url: check_gid_slot(
                "PRISM_SHEET_EXPORT_URL",
                env_or("PRISM_SHEET_EXPORT_URL", DEFAULT_EXPORT_URL),
            )?,
            view_url: check_gid_slot(
                "PRISM_SHEET_VIEW_URL",
                env_or("PRISM_SHEET_VIEW_URL", DEFAULT_VIEW_URL),
            )?,
            timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_urls_have_gid_slot() {
        assert!(check_gid_slot("x", DEFAULT_EXPORT_URL.to_string()).is_ok());
        assert!(check_gid_slot("x", DEFAULT_VIEW_URL.to_string()).is_ok());
        assert!(matches!(
            check_gid_slot("X", "https://example.org".to_string()),
            Err(BotError::Config(msg)) if msg.contains("X")
        ));
    }
}
