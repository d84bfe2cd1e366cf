use std::sync::Arc;

use crate::config::Config;
use crate::scoring::ats::{DocumentScorer, HeuristicAtsScorer};

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no per-user data: every request carries its own form state.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable resume scorer. Default: HeuristicAtsScorer over the configured lexicon.
    pub scorer: Arc<dyn DocumentScorer>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let scorer = Arc::new(HeuristicAtsScorer::new(config.lexicon.clone()));
        Self { config, scorer }
    }
}
