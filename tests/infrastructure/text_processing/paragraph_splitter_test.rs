use pathshala::application::ports::TextSplitter;
use pathshala::infrastructure::text_processing::{DEFAULT_CHUNK_SIZE, ParagraphSplitter};

fn split(splitter: &ParagraphSplitter, text: &str) -> Vec<String> {
    splitter
        .split(text)
        .into_iter()
        .map(|chunk| chunk.into_text())
        .collect()
}

#[test]
fn given_default_splitter_when_created_then_uses_default_size() {
    assert_eq!(ParagraphSplitter::default().chunk_size(), DEFAULT_CHUNK_SIZE);
    assert_eq!(DEFAULT_CHUNK_SIZE, 600);
}

#[test]
fn given_short_paragraphs_when_splitting_then_packs_them_together() {
    let splitter = ParagraphSplitter::new(600);

    let chunks = split(&splitter, "First.\n\nSecond.\n\n\n\nThird.");

    assert_eq!(chunks, vec!["First.\n\nSecond.\n\nThird."]);
}

#[test]
fn given_paragraphs_over_cap_when_splitting_then_starts_new_chunk() {
    let splitter = ParagraphSplitter::new(11);

    let chunks = split(&splitter, "aaaaa\n\nbbbbb\n\nccccc");

    // only the separator before the incoming paragraph is left out of the cap check
    assert_eq!(chunks, vec!["aaaaa\n\nbbbbb", "ccccc"]);
}

#[test]
fn given_oversized_paragraph_when_splitting_then_keeps_it_whole() {
    let splitter = ParagraphSplitter::new(10);
    let long = "x".repeat(50);

    let chunks = split(&splitter, &format!("short\n\n{}\n\ntail", long));

    assert_eq!(chunks, vec!["short".to_string(), long, "tail".to_string()]);
}

#[test]
fn given_chunks_when_rejoined_then_reconstruct_paragraphs() {
    let splitter = ParagraphSplitter::new(30);
    let paragraphs: Vec<String> = (0..20).map(|i| format!("Paragraph number {}.", i)).collect();
    let text = paragraphs.join("\n\n");

    let chunks = split(&splitter, &text);

    assert!(chunks.len() > 1);
    assert_eq!(chunks.join("\n\n"), text);
}

#[test]
fn given_empty_text_when_splitting_then_returns_no_chunks() {
    let splitter = ParagraphSplitter::default();

    assert!(split(&splitter, "").is_empty());
    assert!(split(&splitter, "   \n\n  \n\n").is_empty());
}

#[test]
fn given_surrounding_whitespace_when_splitting_then_chunks_are_trimmed() {
    let splitter = ParagraphSplitter::default();

    let chunks = split(&splitter, "\n  Sandhi.  \n");

    assert_eq!(chunks, vec!["Sandhi."]);
}

#[test]
fn given_multibyte_text_when_splitting_then_counts_characters() {
    // 6 characters each, 18 bytes each
    let splitter = ParagraphSplitter::new(12);

    let chunks = split(&splitter, "गच्छति\n\nगच्छति");

    assert_eq!(chunks, vec!["गच्छति\n\nगच्छति"]);
}
