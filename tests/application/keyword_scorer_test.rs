use pathshala::application::services::{score_chunk, score_chunks};
use pathshala::domain::{Chunk, QueryTerms};

fn chunk(text: &str) -> Chunk {
    Chunk::new(text.to_string())
}

#[test]
fn given_terms_present_when_scoring_then_counts_each_distinct_match() {
    let terms = QueryTerms::parse("vowel strengthening grade");

    let score = score_chunk(&terms, &chunk("Guna is the first grade of vowel strengthening."));

    assert_eq!(score, 3);
}

#[test]
fn given_only_short_terms_when_scoring_then_score_is_zero() {
    let terms = QueryTerms::parse("is a of");

    assert_eq!(score_chunk(&terms, &chunk("This is a list of things.")), 0);
}

#[test]
fn given_term_inside_longer_word_when_scoring_then_matches_substring() {
    let terms = QueryTerms::parse("cat");

    assert_eq!(score_chunk(&terms, &chunk("A category of nouns.")), 1);
}

#[test]
fn given_ascii_term_and_diacritic_text_when_scoring_then_does_not_match() {
    let terms = QueryTerms::parse("guna strengthening");

    let score = score_chunk(&terms, &chunk("guṇa strengthening raises i to e"));

    assert_eq!(score, 1);
}

#[test]
fn given_uppercase_chunk_when_scoring_then_matches_case_insensitively() {
    let terms = QueryTerms::parse("sandhi");

    assert_eq!(score_chunk(&terms, &chunk("SANDHI RULES")), 1);
}

#[test]
fn given_repeated_term_when_scoring_then_counts_every_repetition() {
    let terms = QueryTerms::parse("dual dual number");

    assert_eq!(score_chunk(&terms, &chunk("The dual number.")), 3);
}

#[test]
fn given_term_repeated_in_chunk_when_scoring_then_counts_once() {
    let terms = QueryTerms::parse("root");

    assert_eq!(score_chunk(&terms, &chunk("root after root after root")), 1);
}

#[test]
fn given_chunks_when_scoring_all_then_keeps_order_and_text() {
    let terms = QueryTerms::parse("dhatu");
    let chunks = vec![chunk("no match here"), chunk("a dhatu list")];

    let scored = score_chunks(&terms, chunks);

    assert_eq!(scored.len(), 2);
    assert_eq!(scored[0].score, 0);
    assert_eq!(scored[1].score, 1);
    assert_eq!(scored[1].chunk.text, "a dhatu list");
}
