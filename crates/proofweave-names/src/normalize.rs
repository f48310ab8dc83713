//! `normalize_name`: locale-insensitive lowercasing plus diacritic folding
//! and whitespace collapsing (§4.C deduplication key rule).

use unicode_normalization::UnicodeNormalization;

/// Fold a name to its dedup-key form: NFKD-decompose, drop combining marks,
/// lowercase, and collapse runs of whitespace to a single space.
pub fn normalize_name(value: &str) -> String {
    let decomposed: String = value.nfkd().filter(|c| !is_combining_mark(*c)).collect();
    decomposed
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_combining_mark(c: char) -> bool {
    matches!(c as u32,
        0x0300..=0x036F  // Combining Diacritical Marks
        | 0x1AB0..=0x1AFF
        | 0x1DC0..=0x1DFF
        | 0x20D0..=0x20FF
        | 0xFE20..=0xFE2F
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_collapses_whitespace() {
        assert_eq!(normalize_name("  Angela   Merkel "), "angela merkel");
    }

    #[test]
    fn folds_diacritics() {
        assert_eq!(normalize_name("Émmanuel Macron"), "emmanuel macron");
        assert_eq!(normalize_name("Müller"), "muller");
    }

    #[test]
    fn is_idempotent() {
        let once = normalize_name("Jürgen Groß");
        let twice = normalize_name(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn equal_spellings_yield_equal_keys() {
        assert_eq!(normalize_name("José Martínez"), normalize_name("JOSE MARTINEZ"));
    }
}
