//! The closed tag vocabulary produced by extractors and carried by mentions.

use std::fmt;

/// A candidate's semantic category.
///
/// `Other` is a sentinel: extractors may compute it internally but it must
/// never reach the aggregator (§3 invariant on `ExtractionResult`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tag {
    Per,
    Org,
    Loc,
    Email,
    Phone,
    Iban,
    Country,
    Other,
}

impl Tag {
    /// The three tags a statistical/zero-shot NER recognizer can emit.
    pub const NER_TAGS: [Tag; 3] = [Tag::Per, Tag::Org, Tag::Loc];

    pub fn is_ner(self) -> bool {
        matches!(self, Tag::Per | Tag::Org | Tag::Loc)
    }

    /// Parse a label from a recognizer's output into the closed vocabulary,
    /// stripping IOB `B-`/`I-` prefixes and collapsing known synonyms.
    /// Anything unrecognized becomes `Other`.
    pub fn from_ner_label(label: &str) -> Tag {
        let stripped = label
            .strip_prefix("B-")
            .or_else(|| label.strip_prefix("I-"))
            .unwrap_or(label);
        match stripped.to_ascii_uppercase().as_str() {
            "PER" | "PERSON" => Tag::Per,
            "ORG" | "ORGANIZATION" => Tag::Org,
            "LOC" | "GPE" | "LOCATION" => Tag::Loc,
            _ => Tag::Other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Per => "PER",
            Tag::Org => "ORG",
            Tag::Loc => "LOC",
            Tag::Email => "EMAIL",
            Tag::Phone => "PHONE",
            Tag::Iban => "IBAN",
            Tag::Country => "COUNTRY",
            Tag::Other => "OTHER",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_iob_prefixes() {
        assert_eq!(Tag::from_ner_label("B-PER"), Tag::Per);
        assert_eq!(Tag::from_ner_label("I-ORG"), Tag::Org);
    }

    #[test]
    fn collapses_synonyms() {
        assert_eq!(Tag::from_ner_label("PERSON"), Tag::Per);
        assert_eq!(Tag::from_ner_label("GPE"), Tag::Loc);
        assert_eq!(Tag::from_ner_label("person"), Tag::Per);
        assert_eq!(Tag::from_ner_label("location"), Tag::Loc);
    }

    #[test]
    fn unknown_label_is_other() {
        assert_eq!(Tag::from_ner_label("MISC"), Tag::Other);
    }

    #[test]
    fn ner_tags_excludes_other() {
        assert!(!Tag::NER_TAGS.contains(&Tag::Other));
        assert_eq!(Tag::NER_TAGS.len(), 3);
    }
}
