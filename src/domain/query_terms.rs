/// Terms shorter than this many characters are ignored when scoring.
pub const MIN_TERM_CHARS: usize = 3;

/// Lower-cased, length-filtered tokens of a user query.
///
/// Order and repetitions are kept: a term that appears twice in the query
/// counts twice against every chunk that contains it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryTerms {
    terms: Vec<String>,
}

impl QueryTerms {
    pub fn parse(query: &str) -> Self {
        let terms = query
            .to_lowercase()
            .split_whitespace()
            .filter(|term| term.chars().count() >= MIN_TERM_CHARS)
            .map(str::to_string)
            .collect();

        Self { terms }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
