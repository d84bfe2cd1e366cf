use anyhow::{Context, Result};

use crate::scoring::lexicon::Lexicon;

/// Application configuration loaded from environment variables.
/// Every variable is optional; term-list overrides fall back to the built-in lexicon.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub lexicon: Lexicon,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Lexicon::default();
        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            lexicon: Lexicon {
                reference_terms: term_list_env("REFERENCE_TERMS")
                    .unwrap_or(defaults.reference_terms),
                action_verbs: term_list_env("ACTION_VERBS").unwrap_or(defaults.action_verbs),
                metric_verbs: term_list_env("METRIC_VERBS").unwrap_or(defaults.metric_verbs),
            },
        })
    }
}

/// Reads a comma-separated term list. Unset or effectively empty yields `None`.
fn term_list_env(key: &str) -> Option<Vec<String>> {
    std::env::var(key)
        .ok()
        .map(|raw| parse_term_list(&raw))
        .filter(|terms| !terms.is_empty())
}

/// Splits on commas, trims, lower-cases and drops blank entries.
pub fn parse_term_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|term| term.trim().to_lowercase())
        .filter(|term| !term.is_empty())
        .collect()
}
