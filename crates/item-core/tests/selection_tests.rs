use std::sync::Arc;

use item_core::{
    AnnotatedToken, ItemNameExtractor, RepresentationMode, SelectionConfig, SnowballStemmer,
    Stemmer, StopWordSet, TokenSelector, UnitVocabulary, UNKNOWN_ITEM_NAME,
};

/// Deterministic stand-in for a real stemmer: drops a trailing "s".
struct TrimPluralStemmer;

impl Stemmer for TrimPluralStemmer {
    fn stem(&self, word: &str) -> String {
        word.strip_suffix('s').unwrap_or(word).to_string()
    }
}

fn selector() -> TokenSelector {
    TokenSelector::new(
        Arc::new(TrimPluralStemmer),
        StopWordSet::spanish(),
        UnitVocabulary::standard(),
    )
}

fn raw(max_tokens: i64) -> SelectionConfig {
    SelectionConfig::new(max_tokens, RepresentationMode::Raw)
}

fn leche_entera_fixture() -> Vec<AnnotatedToken> {
    vec![
        AnnotatedToken::number("2"),
        AnnotatedToken::word("Litros", "litro"),
        AnnotatedToken::word("de", "de"),
        AnnotatedToken::word("Leche", "leche"),
        AnnotatedToken::word("Entera", "entero"),
    ]
}

#[test]
fn test_keeps_first_meaningful_tokens_in_order() {
    let name = selector().select_item_name(&leche_entera_fixture(), &raw(2));
    assert_eq!(name.as_str(), "Leche Entera");
}

#[test]
fn test_exactly_max_tokens_when_enough_candidates() {
    let tokens: Vec<AnnotatedToken> = ["Galletas", "Avena", "Miel", "Canela", "Pasas"]
        .iter()
        .map(|w| AnnotatedToken::word(*w, w.to_lowercase()))
        .collect();

    for n in 1..=5 {
        let name = selector().select_item_name(&tokens, &raw(n));
        let parts: Vec<&str> = name.as_str().split(' ').collect();
        assert_eq!(parts.len(), n as usize);
        assert_eq!(parts[0], "Galletas");
    }
}

#[test]
fn test_fewer_candidates_than_limit_keeps_all_found() {
    let name = selector().select_item_name(&leche_entera_fixture(), &raw(5));
    assert_eq!(name.as_str(), "Leche Entera");
}

#[test]
fn test_units_and_numbers_only_use_fallback() {
    let tokens = vec![AnnotatedToken::number("5"), AnnotatedToken::word("kg", "kg")];
    let name = selector().select_item_name(&tokens, &raw(2));
    assert_eq!(name.as_str(), "5 Kg");
}

#[test]
fn test_fallback_sweeps_punctuation_when_meaningful_tokens_are_stop_words() {
    let tokens = vec![
        AnnotatedToken::word("de", "de"),
        AnnotatedToken::punctuation("-"),
        AnnotatedToken::word("la", "el"),
        AnnotatedToken::number("3"),
    ];
    let name = selector().select_item_name(&tokens, &raw(2));
    assert_eq!(name.as_str(), "- 3");
}

#[test]
fn test_fallback_still_drops_stop_words() {
    let tokens = vec![
        AnnotatedToken::word("de", "de"),
        AnnotatedToken::word("la", "el"),
    ];
    let name = selector().select_item_name(&tokens, &raw(2));
    assert!(name.is_unknown());
}

#[test]
fn test_empty_sequence_is_unknown() {
    let name = selector().select_item_name(&[], &raw(2));
    assert_eq!(name.as_str(), UNKNOWN_ITEM_NAME);
}

#[test]
fn test_non_positive_max_tokens_is_unknown() {
    for max_tokens in [0, -1, i64::MIN] {
        let name = selector().select_item_name(&leche_entera_fixture(), &raw(max_tokens));
        assert_eq!(name.as_str(), "Desconocido");

        let fallback_only = vec![AnnotatedToken::number("5")];
        let name = selector().select_item_name(&fallback_only, &raw(max_tokens));
        assert!(name.is_unknown());
    }
}

#[test]
fn test_huge_max_tokens_keeps_all_candidates() {
    let name = selector().select_item_name(&leche_entera_fixture(), &raw(i64::MAX));
    assert_eq!(name.as_str(), "Leche Entera");

    let fallback_only = vec![AnnotatedToken::number("5"), AnnotatedToken::word("kg", "kg")];
    let name = selector().select_item_name(&fallback_only, &raw(100_000_000_000));
    assert_eq!(name.as_str(), "5 Kg");
}

#[test]
fn test_stop_word_match_ignores_case() {
    let tokens = vec![
        AnnotatedToken::word("DE", "de"),
        AnnotatedToken::word("Yogur", "yogur"),
    ];
    let name = selector().select_item_name(&tokens, &raw(1));
    assert_eq!(name.as_str(), "Yogur");
}

#[test]
fn test_lemma_colliding_with_stop_word_is_dropped() {
    let tokens = vec![
        AnnotatedToken::word("Estados", "estado"),
        AnnotatedToken::word("Jamón", "jamón"),
    ];
    let stop_words = Arc::new(StopWordSet::from_words(["estado"]));
    let selector = TokenSelector::new(
        Arc::new(TrimPluralStemmer),
        stop_words,
        UnitVocabulary::standard(),
    );

    let lemma_config = SelectionConfig::new(2, RepresentationMode::Lemma);
    let lemma = selector.select_item_name(&tokens, &lemma_config);
    assert_eq!(lemma.as_str(), "Jamón");

    let surface = selector.select_item_name(&tokens, &raw(2));
    assert_eq!(surface.as_str(), "Estados Jamón");
}

#[test]
fn test_lemma_mode_outputs_lemmas() {
    let tokens = vec![
        AnnotatedToken::word("Galletas", "galleta"),
        AnnotatedToken::word("de", "de"),
        AnnotatedToken::word("Chocolate", "chocolate"),
    ];
    let config = SelectionConfig::new(2, RepresentationMode::Lemma);
    assert_eq!(
        selector().select_item_name(&tokens, &config).as_str(),
        "Galleta Chocolate"
    );
}

#[test]
fn test_fallback_lemma_mode_uses_surface_for_tokens_without_lemma() {
    let tokens = vec![AnnotatedToken::number("500"), AnnotatedToken::word("ml", "mililitro")];
    let config = SelectionConfig::new(2, RepresentationMode::Lemma);
    assert_eq!(
        selector().select_item_name(&tokens, &config).as_str(),
        "500 Mililitro"
    );
}

#[test]
fn test_stemming_wins_over_lemmatization() {
    let tokens = vec![
        AnnotatedToken::word("Galletas", "galleta"),
        AnnotatedToken::word("Saladas", "salado"),
    ];
    let config = SelectionConfig::new(2, RepresentationMode::from_flags(true, true));
    assert_eq!(
        selector().select_item_name(&tokens, &config).as_str(),
        "Galleta Salada"
    );
}

#[test]
fn test_unit_check_ignores_representation() {
    // The stemmed form "Kg" of "Kgs" is not checked against units; the
    // surface "Kgs" is not a unit, so the token stays meaningful.
    let tokens = vec![AnnotatedToken::word("Kgs", "kg")];
    let config = SelectionConfig::new(2, RepresentationMode::Stem);
    assert_eq!(selector().select_item_name(&tokens, &config).as_str(), "Kg");
}

#[test]
fn test_capitalizes_first_letter_only() {
    let tokens = vec![
        AnnotatedToken::word("iPhone", "iphone"),
        AnnotatedToken::word("mini", "mini"),
    ];
    assert_eq!(selector().select_item_name(&tokens, &raw(2)).as_str(), "IPhone Mini");
}

#[test]
fn test_selection_is_repeatable() {
    let tokens = leche_entera_fixture();
    let config = SelectionConfig::new(2, RepresentationMode::Stem);
    let first = selector().select_item_name(&tokens, &config);
    let second = selector().select_item_name(&tokens, &config);
    assert_eq!(first, second);
    assert_eq!(first.as_str(), "Leche Entera");
}

#[test]
fn test_extractor_leche_entera() {
    let extractor = ItemNameExtractor::spanish(None);
    let name = extractor
        .extract("2 Litros de Leche Entera", &SelectionConfig::default())
        .unwrap();
    assert_eq!(name.as_str(), "Leche Entera");
}

#[test]
fn test_extractor_units_only() {
    let extractor = ItemNameExtractor::spanish(None);
    let name = extractor.extract("5 kg", &SelectionConfig::default()).unwrap();
    assert_eq!(name.as_str(), "5 Kg");
}

#[test]
fn test_extractor_huge_max_tokens() {
    let extractor = ItemNameExtractor::spanish(None);
    let config = SelectionConfig::new(i64::MAX, RepresentationMode::Raw);
    let name = extractor.extract("Leche Entera", &config).unwrap();
    assert_eq!(name.as_str(), "Leche Entera");
}

#[test]
fn test_extractor_empty_text() {
    let extractor = ItemNameExtractor::spanish(None);
    let name = extractor.extract("", &SelectionConfig::default()).unwrap();
    assert_eq!(name.as_str(), "Desconocido");
}

#[test]
fn test_extractor_lemma_mode() {
    let extractor = ItemNameExtractor::spanish(None);
    let config = SelectionConfig::new(2, RepresentationMode::Lemma);
    let name = extractor.extract("Galletas de Chocolate 200 g", &config).unwrap();
    assert_eq!(name.as_str(), "Galleta Chocolate");
}

#[test]
fn test_extractor_stem_mode_uses_snowball() {
    let extractor = ItemNameExtractor::spanish(None);
    let config = SelectionConfig::new(1, RepresentationMode::Stem);
    let name = extractor.extract("Galletas de Chocolate", &config).unwrap();

    let stem = SnowballStemmer::spanish().stem("Galletas");
    let mut expected = stem[..1].to_uppercase();
    expected.push_str(&stem[1..]);
    assert_eq!(name.as_str(), expected);
}

#[test]
fn test_extractor_skips_punctuation() {
    let extractor = ItemNameExtractor::spanish(None);
    let name = extractor
        .extract("¡Oferta! Pack de 6 Yogures Naturales", &SelectionConfig::default())
        .unwrap();
    assert_eq!(name.as_str(), "Oferta Pack");
}
