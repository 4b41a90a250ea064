use rust_stemmers::{Algorithm, Stemmer as SnowballAlgorithm};

/// Reduces a word to its stem.
pub trait Stemmer: Send + Sync {
    fn stem(&self, word: &str) -> String;
}

/// Snowball stemmer for Spanish. Input is lowercased before stemming since
/// the algorithm only recognises lowercase suffixes.
pub struct SnowballStemmer {
    inner: SnowballAlgorithm,
}

impl SnowballStemmer {
    pub fn spanish() -> Self {
        Self {
            inner: SnowballAlgorithm::create(Algorithm::Spanish),
        }
    }
}

impl Default for SnowballStemmer {
    fn default() -> Self {
        Self::spanish()
    }
}

impl std::fmt::Debug for SnowballStemmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnowballStemmer")
            .field("algorithm", &"spanish")
            .finish()
    }
}

impl Stemmer for SnowballStemmer {
    fn stem(&self, word: &str) -> String {
        self.inner.stem(&word.to_lowercase()).into_owned()
    }
}
