//! Token selection: choosing which annotated tokens make up an item name.

use std::sync::Arc;

use crate::stemmer::{SnowballStemmer, Stemmer};
use crate::types::{AnnotatedToken, ItemName, RepresentationMode, SelectionConfig};
use crate::vocabulary::{StopWordSet, UnitVocabulary};

/// A token that is not punctuation, not a number and not a unit of measure.
/// Units are matched against the surface text regardless of representation.
pub fn is_meaningful(token: &AnnotatedToken, units: &UnitVocabulary) -> bool {
    !token.is_punctuation && !token.is_numeric_literal && !units.contains(&token.text)
}

/// The form of `token` compared against stop words and emitted in the name.
/// In lemma mode a token without a lemma is represented by its surface text.
pub fn representation_of(
    token: &AnnotatedToken,
    mode: RepresentationMode,
    stemmer: &dyn Stemmer,
) -> String {
    match mode {
        RepresentationMode::Stem => stemmer.stem(&token.text),
        RepresentationMode::Lemma => token.lemma_or_text().to_string(),
        RepresentationMode::Raw => token.text.clone(),
    }
}

/// Which pass produced a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPass {
    Primary,
    Fallback,
}

/// Selected representations in collection order, before formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub parts: Vec<String>,
    pub pass: SelectionPass,
}

impl Selection {
    pub fn into_item_name(self) -> ItemName {
        ItemName::from_parts(self.parts)
    }
}

/// Picks the leading non stop-word tokens of a description.
///
/// The primary pass only considers meaningful tokens. When it keeps nothing,
/// a fallback pass sweeps every token again without that filter.
#[derive(Clone)]
pub struct TokenSelector {
    stemmer: Arc<dyn Stemmer>,
    stop_words: Arc<StopWordSet>,
    units: Arc<UnitVocabulary>,
}

impl TokenSelector {
    pub fn new(
        stemmer: Arc<dyn Stemmer>,
        stop_words: Arc<StopWordSet>,
        units: Arc<UnitVocabulary>,
    ) -> Self {
        Self {
            stemmer,
            stop_words,
            units,
        }
    }

    /// Snowball Spanish stemmer, Spanish stop words, standard units.
    pub fn spanish() -> Self {
        Self::new(
            Arc::new(SnowballStemmer::spanish()),
            StopWordSet::spanish(),
            UnitVocabulary::standard(),
        )
    }

    pub fn select_item_name(
        &self,
        tokens: &[AnnotatedToken],
        config: &SelectionConfig,
    ) -> ItemName {
        self.select(tokens, config).into_item_name()
    }

    pub fn select(&self, tokens: &[AnnotatedToken], config: &SelectionConfig) -> Selection {
        let primary = self.collect(
            tokens.iter().filter(|token| is_meaningful(token, &self.units)),
            config,
        );
        if !primary.is_empty() {
            return Selection {
                parts: primary,
                pass: SelectionPass::Primary,
            };
        }

        log::debug!(
            "No meaningful token among {} tokens, falling back to an unfiltered pass",
            tokens.len()
        );
        Selection {
            parts: self.collect(tokens.iter(), config),
            pass: SelectionPass::Fallback,
        }
    }

    /// Keeps representations that are not stop words, in order, until the
    /// configured limit is reached.
    fn collect<'a>(
        &self,
        candidates: impl Iterator<Item = &'a AnnotatedToken>,
        config: &SelectionConfig,
    ) -> Vec<String> {
        let limit = config.limit();
        let mut selected = Vec::new();
        if limit == 0 {
            return selected;
        }

        for token in candidates {
            let representation =
                representation_of(token, config.representation_mode, self.stemmer.as_ref());
            if self.stop_words.contains(&representation) {
                continue;
            }
            selected.push(representation);
            if selected.len() == limit {
                break;
            }
        }
        selected
    }
}

impl std::fmt::Debug for TokenSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenSelector")
            .field("stop_words", &self.stop_words.len())
            .field("units", &self.units.len())
            .finish()
    }
}
