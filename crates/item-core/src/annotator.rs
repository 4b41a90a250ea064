//! Text annotation: splitting a description into [`AnnotatedToken`]s.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ExtractError, Result};
use crate::types::AnnotatedToken;

/// Turns raw text into tokens in document order.
pub trait Annotator: Send + Sync {
    fn annotate(&self, text: &str) -> Result<Vec<AnnotatedToken>>;
}

/// Signed numbers with `.` `,` `/` separators, word runs, or any other single
/// non-space character.
static TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[+\-±~]?\d+(?:[.,/]\d+)*|\w+|[^\w\s]")
        .expect("Failed to compile token regex")
});

const NUMBER_WORDS: &[&str] = &[
    "cero", "uno", "dos", "tres", "cuatro", "cinco", "seis", "siete", "ocho", "nueve", "diez",
    "once", "doce", "trece", "catorce", "quince", "dieciséis", "diecisiete", "dieciocho",
    "diecinueve", "veinte", "veintiuno", "veintidós", "veintitrés", "veinticuatro",
    "veinticinco", "veintiséis", "veintisiete", "veintiocho", "veintinueve", "treinta",
    "cuarenta", "cincuenta", "sesenta", "setenta", "ochenta", "noventa", "cien", "mil",
    "millón", "billón", "trillón",
];

const SPANISH_PUNCTUATION: &[char] = &[
    '¿', '¡', '«', '»', '…', '“', '”', '‘', '’', '–', '—',
];

/// Rule-based Spanish annotator.
///
/// Lemmas are only produced for word tokens; punctuation and numbers carry
/// none. Texts longer than `max_text_chars` characters are rejected.
#[derive(Debug, Clone, Default)]
pub struct RuleAnnotator {
    max_text_chars: Option<usize>,
}

impl RuleAnnotator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_text_chars(mut self, limit: Option<usize>) -> Self {
        self.max_text_chars = limit;
        self
    }

    fn annotate_token(raw: &str) -> AnnotatedToken {
        if like_num(raw) {
            AnnotatedToken::number(raw)
        } else if is_punct(raw) {
            AnnotatedToken::punctuation(raw)
        } else {
            AnnotatedToken::word(raw, lemmatize(raw))
        }
    }
}

impl Annotator for RuleAnnotator {
    fn annotate(&self, text: &str) -> Result<Vec<AnnotatedToken>> {
        if let Some(limit) = self.max_text_chars {
            let length = text.chars().count();
            if length > limit {
                return Err(ExtractError::TextTooLong { length, limit });
            }
        }

        Ok(TOKEN_PATTERN
            .find_iter(text)
            .map(|m| Self::annotate_token(m.as_str()))
            .collect())
    }
}

/// Digits (with separators and an optional sign), a `n/d` fraction, or a
/// spelled-out Spanish number.
pub fn like_num(text: &str) -> bool {
    let unsigned = text
        .strip_prefix(|c: char| matches!(c, '+' | '-' | '±' | '~'))
        .unwrap_or(text);
    let digits: String = unsigned.chars().filter(|c| !matches!(c, ',' | '.')).collect();

    if is_all_digits(&digits) {
        return true;
    }

    if let Some((num, denom)) = unsigned.split_once('/') {
        if !denom.contains('/') && is_all_digits(num) && is_all_digits(denom) {
            return true;
        }
    }

    NUMBER_WORDS.contains(&text.to_lowercase().as_str())
}

fn is_all_digits(text: &str) -> bool {
    !text.is_empty() && text.chars().all(char::is_numeric)
}

pub fn is_punct(text: &str) -> bool {
    !text.is_empty()
        && text
            .chars()
            .all(|c| c.is_ascii_punctuation() || SPANISH_PUNCTUATION.contains(&c))
}

/// Lowercase singular form for regular Spanish plurals. Words of three
/// characters or fewer are only lowercased.
pub fn lemmatize(word: &str) -> String {
    let lower = word.to_lowercase();
    let chars: Vec<char> = lower.chars().collect();
    let n = chars.len();
    if n <= 3 {
        return lower;
    }

    let is_vowel = |c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u');

    // luces -> luz, nueces -> nuez
    if lower.ends_with("ces") && n > 4 && is_vowel(chars[n - 4]) {
        let mut lemma: String = chars[..n - 3].iter().collect();
        lemma.push('z');
        return lemma;
    }

    // panes -> pan, flores -> flor, redes -> red
    if lower.ends_with("es")
        && n > 4
        && matches!(chars[n - 3], 'l' | 'n' | 'r' | 'd' | 'j' | 'y')
        && is_vowel(chars[n - 4])
    {
        return chars[..n - 2].iter().collect();
    }

    // galletas -> galleta, leches -> leche
    if lower.ends_with('s') && matches!(chars[n - 2], 'a' | 'e' | 'o') {
        return chars[..n - 1].iter().collect();
    }

    lower
}
