//! `tokenize_name`: splits a name into word tokens on whitespace and
//! punctuation boundaries, preserving original casing (case matters to the
//! person-name symbol heuristic in [`crate::symbols`]).

/// Split a name into tokens, dropping punctuation-only fragments.
pub fn tokenize_name(name: &str) -> Vec<String> {
    name.split(|c: char| c.is_whitespace() || (!c.is_alphanumeric() && c != '\'' && c != '-'))
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
