//! Item name extraction for Spanish product descriptions.
//!
//! Text is annotated into [`AnnotatedToken`]s by an [`Annotator`], then the
//! [`TokenSelector`] keeps the first few meaningful, non stop-word tokens and
//! formats them into an [`ItemName`].

pub mod annotator;
pub mod error;
pub mod extractor;
pub mod selector;
pub mod stemmer;
pub mod stop_words;
pub mod types;
pub mod vocabulary;

pub use annotator::{Annotator, RuleAnnotator};
pub use error::{ExtractError, Result};
pub use extractor::ItemNameExtractor;
pub use selector::{is_meaningful, representation_of, Selection, SelectionPass, TokenSelector};
pub use stemmer::{SnowballStemmer, Stemmer};
pub use types::{
    AnnotatedToken, ItemName, RepresentationMode, SelectionConfig, DEFAULT_MAX_TOKENS,
    UNKNOWN_ITEM_NAME,
};
pub use vocabulary::{StopWordSet, UnitVocabulary};
