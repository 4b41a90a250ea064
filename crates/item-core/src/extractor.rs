use std::sync::Arc;

use crate::annotator::{Annotator, RuleAnnotator};
use crate::error::Result;
use crate::selector::TokenSelector;
use crate::types::{ItemName, SelectionConfig};

/// Annotates a description and selects its item name.
#[derive(Clone)]
pub struct ItemNameExtractor {
    annotator: Arc<dyn Annotator>,
    selector: TokenSelector,
}

impl ItemNameExtractor {
    pub fn new(annotator: Arc<dyn Annotator>, selector: TokenSelector) -> Self {
        Self {
            annotator,
            selector,
        }
    }

    /// Rule-based annotator and Spanish selector. `max_text_chars` bounds the
    /// accepted input length; `None` accepts any length.
    pub fn spanish(max_text_chars: Option<usize>) -> Self {
        Self::new(
            Arc::new(RuleAnnotator::new().with_max_text_chars(max_text_chars)),
            TokenSelector::spanish(),
        )
    }

    pub fn extract(&self, text: &str, config: &SelectionConfig) -> Result<ItemName> {
        let tokens = self.annotator.annotate(text)?;
        let selection = self.selector.select(&tokens, config);
        log::debug!(
            "Selected {} of {} tokens ({:?} pass, {:?} mode)",
            selection.parts.len(),
            tokens.len(),
            selection.pass,
            config.representation_mode
        );
        Ok(selection.into_item_name())
    }
}

impl std::fmt::Debug for ItemNameExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemNameExtractor")
            .field("selector", &self.selector)
            .finish_non_exhaustive()
    }
}
