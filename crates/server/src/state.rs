use std::fmt;
use std::sync::Arc;

use services::{OpenTriviaClient, QuestionSource};

use crate::config::Config;

/// Shared state handed to every handler.
pub struct AppState {
    pub config: Config,
    pub source: Arc<dyn QuestionSource>,
}

impl AppState {
    /// State wired to the live trivia provider.
    #[must_use]
    pub fn new(config: Config) -> Arc<Self> {
        let source = Arc::new(OpenTriviaClient::new(config.trivia_api_url.clone()));
        Arc::new(Self { config, source })
    }

    /// State over a caller-supplied question source.
    #[must_use]
    pub fn with_source(config: Config, source: Arc<dyn QuestionSource>) -> Arc<Self> {
        Arc::new(Self { config, source })
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
