//! Static word sets consulted during selection.

use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::sync::Arc;

use crate::stop_words::SPANISH_STOP_WORDS;

/// Units of measure that never name a product.
pub const DEFAULT_UNITS: &[&str] = &[
    "ml", "g", "kg", "l", "litros", "gramos", "cc", "cm", "un", "und",
];

static DEFAULT_UNIT_VOCABULARY: Lazy<Arc<UnitVocabulary>> =
    Lazy::new(|| Arc::new(UnitVocabulary::from_words(DEFAULT_UNITS.iter().copied())));

static SPANISH_STOP_WORD_SET: Lazy<Arc<StopWordSet>> =
    Lazy::new(|| Arc::new(StopWordSet::from_words(SPANISH_STOP_WORDS.iter().copied())));

/// Unit-of-measure strings, matched case-insensitively against surface text.
#[derive(Debug, Clone, Default)]
pub struct UnitVocabulary {
    units: HashSet<String>,
}

impl UnitVocabulary {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            units: words
                .into_iter()
                .map(|word| word.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Shared default vocabulary, built on first use.
    pub fn standard() -> Arc<Self> {
        Arc::clone(&DEFAULT_UNIT_VOCABULARY)
    }

    pub fn contains(&self, surface: &str) -> bool {
        self.units.contains(&surface.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

/// Lowercase stop words. Lookups lowercase the probe.
#[derive(Debug, Clone, Default)]
pub struct StopWordSet {
    words: HashSet<String>,
}

impl StopWordSet {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|word| word.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn spanish() -> Arc<Self> {
        Arc::clone(&SPANISH_STOP_WORD_SET)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
