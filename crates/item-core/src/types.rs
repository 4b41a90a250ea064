use serde::{Deserialize, Serialize};
use std::fmt;

/// Returned when neither selection pass keeps a token.
pub const UNKNOWN_ITEM_NAME: &str = "Desconocido";

pub const DEFAULT_MAX_TOKENS: i64 = 2;

/// One token of the input text, as produced by an [`crate::Annotator`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedToken {
    pub text: String,
    /// Base form. Annotators may leave it unset for punctuation and numbers.
    #[serde(default)]
    pub lemma: Option<String>,
    #[serde(default)]
    pub is_punctuation: bool,
    #[serde(default)]
    pub is_numeric_literal: bool,
}

impl AnnotatedToken {
    pub fn word(text: impl Into<String>, lemma: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            lemma: Some(lemma.into()),
            is_punctuation: false,
            is_numeric_literal: false,
        }
    }

    pub fn punctuation(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            lemma: None,
            is_punctuation: true,
            is_numeric_literal: false,
        }
    }

    pub fn number(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            lemma: None,
            is_punctuation: false,
            is_numeric_literal: true,
        }
    }

    /// The lemma, or the surface text when the annotator supplied none.
    pub fn lemma_or_text(&self) -> &str {
        self.lemma.as_deref().unwrap_or(&self.text)
    }
}

/// Which form of a token is compared against stop words and emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepresentationMode {
    #[default]
    Raw,
    Lemma,
    Stem,
}

impl RepresentationMode {
    /// Stemming wins when both flags are set.
    pub fn from_flags(use_lemmatization: bool, use_stemming: bool) -> Self {
        if use_stemming {
            RepresentationMode::Stem
        } else if use_lemmatization {
            RepresentationMode::Lemma
        } else {
            RepresentationMode::Raw
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// Non-positive values are accepted and select nothing.
    pub max_tokens: i64,
    pub representation_mode: RepresentationMode,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            max_tokens: DEFAULT_MAX_TOKENS,
            representation_mode: RepresentationMode::Raw,
        }
    }
}

impl SelectionConfig {
    pub fn new(max_tokens: i64, representation_mode: RepresentationMode) -> Self {
        Self {
            max_tokens,
            representation_mode,
        }
    }

    /// Upper bound on kept tokens, with non-positive limits mapped to zero.
    pub fn limit(&self) -> usize {
        usize::try_from(self.max_tokens).unwrap_or(0)
    }
}

/// Display name extracted from a description.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemName(String);

impl ItemName {
    pub fn unknown() -> Self {
        Self(UNKNOWN_ITEM_NAME.to_string())
    }

    /// Capitalizes each part and joins with single spaces. No parts yields
    /// the unknown sentinel.
    pub fn from_parts<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = parts
            .into_iter()
            .map(|part| capitalize_first(part.as_ref()))
            .collect::<Vec<_>>()
            .join(" ");

        if joined.is_empty() {
            Self::unknown()
        } else {
            Self(joined)
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.0 == UNKNOWN_ITEM_NAME
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ItemName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ItemName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Uppercases the first character only; the rest is left as-is.
pub(crate) fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stemming_takes_priority_over_lemmatization() {
        assert_eq!(
            RepresentationMode::from_flags(true, true),
            RepresentationMode::Stem
        );
        assert_eq!(
            RepresentationMode::from_flags(true, false),
            RepresentationMode::Lemma
        );
        assert_eq!(
            RepresentationMode::from_flags(false, false),
            RepresentationMode::Raw
        );
    }

    #[test]
    fn non_positive_max_tokens_limit_is_zero() {
        assert_eq!(SelectionConfig::new(0, RepresentationMode::Raw).limit(), 0);
        assert_eq!(SelectionConfig::new(-3, RepresentationMode::Raw).limit(), 0);
        assert_eq!(SelectionConfig::default().limit(), 2);
    }

    #[test]
    fn capitalize_first_leaves_tail_untouched() {
        assert_eq!(capitalize_first("leche"), "Leche");
        assert_eq!(capitalize_first("iPhone"), "IPhone");
        assert_eq!(capitalize_first("kG"), "KG");
        assert_eq!(capitalize_first("ñandú"), "Ñandú");
        assert_eq!(capitalize_first("5"), "5");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn item_name_from_no_parts_is_unknown() {
        let name = ItemName::from_parts(Vec::<String>::new());
        assert!(name.is_unknown());
        assert_eq!(name.as_str(), "Desconocido");
    }

    #[test]
    fn item_name_joins_with_single_space() {
        let name = ItemName::from_parts(["leche", "entera"]);
        assert_eq!(name.to_string(), "Leche Entera");
        assert!(!name.is_unknown());
    }

    #[test]
    fn token_fixture_without_lemma_deserializes() {
        let token: AnnotatedToken =
            serde_json::from_str(r#"{"text": "5", "is_numeric_literal": true}"#).unwrap();
        assert_eq!(token, AnnotatedToken::number("5"));
    }

    #[test]
    fn lemma_or_text_falls_back_to_surface() {
        assert_eq!(AnnotatedToken::number("5").lemma_or_text(), "5");
        assert_eq!(AnnotatedToken::word("Galletas", "galleta").lemma_or_text(), "galleta");
    }
}
