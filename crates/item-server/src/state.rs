use item_core::{ItemNameExtractor, RepresentationMode, SelectionConfig};

use crate::config::ServerConfig;

/// Shared, read-only state handed to every worker.
#[derive(Debug, Clone)]
pub struct AppState {
    pub extractor: ItemNameExtractor,
    pub default_max_tokens: i64,
}

impl AppState {
    pub fn new(extractor: ItemNameExtractor, default_max_tokens: i64) -> Self {
        Self {
            extractor,
            default_max_tokens,
        }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        tracing::info!(
            "Building Spanish extractor (default max tokens: {}, text limit: {:?})",
            config.default_max_tokens,
            config.max_text_chars
        );
        Self::new(
            ItemNameExtractor::spanish(config.max_text_chars),
            config.default_max_tokens,
        )
    }

    /// Request options resolved against server defaults. Stemming takes
    /// priority over lemmatization.
    pub fn selection_config(
        &self,
        max_tokens: Option<i64>,
        use_lemmatization: bool,
        use_stemming: bool,
    ) -> SelectionConfig {
        SelectionConfig::new(
            max_tokens.unwrap_or(self.default_max_tokens),
            RepresentationMode::from_flags(use_lemmatization, use_stemming),
        )
    }
}
