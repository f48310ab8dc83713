//! Prefix tables used to strip honorifics, articles, and generic leading
//! words before classification and display (§4.E RigourStage, §4.F
//! `clean_name_for_tag`).

const PERSON_PREFIXES: &[&str] = &[
    "mr.", "mr", "mrs.", "mrs", "ms.", "ms", "mx.", "mx", "dr.", "dr", "prof.", "prof", "sir",
    "dame", "herr", "frau",
];

const GENERIC_PREFIXES: &[&str] = &["the", "a", "an"];

fn strip_one_prefix<'a>(name: &'a str, prefixes: &[&str]) -> &'a str {
    let trimmed = name.trim_start();
    for prefix in prefixes {
        if let Some(rest) = trimmed
            .get(..prefix.len())
            .filter(|candidate| candidate.eq_ignore_ascii_case(prefix))
        {
            let _ = rest;
            let remainder = trimmed[prefix.len()..].trim_start();
            if remainder.is_empty() {
                continue;
            }
            // require a word boundary after the prefix
            let boundary_ok = trimmed[prefix.len()..]
                .chars()
                .next()
                .map(|c| c.is_whitespace() || !c.is_alphanumeric())
                .unwrap_or(true);
            if boundary_ok {
                return remainder;
            }
        }
    }
    trimmed
}

/// Strip a leading honorific (Mr., Dr., Sir, ...) from a person name.
pub fn remove_person_prefixes(name: &str) -> String {
    strip_one_prefix(name, PERSON_PREFIXES).to_string()
}

/// Strip a leading generic article ("the", "a", "an") from an organization
/// name, e.g. `"the european union"` → `"european union"`.
pub fn remove_org_prefixes(name: &str) -> String {
    strip_one_prefix(name, GENERIC_PREFIXES).to_string()
}

/// Strip a leading generic article from a name of unknown (OTHER) type.
pub fn remove_obj_prefixes(name: &str) -> String {
    strip_one_prefix(name, GENERIC_PREFIXES).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_honorific() {
        assert_eq!(remove_person_prefixes("Mrs. Jane Doe"), "Jane Doe");
        assert_eq!(remove_person_prefixes("Dr Jane Doe"), "Jane Doe");
    }

    #[test]
    fn leaves_name_without_prefix_untouched() {
        assert_eq!(remove_person_prefixes("Jane Doe"), "Jane Doe");
    }

    #[test]
    fn strips_leading_article_for_org() {
        assert_eq!(remove_org_prefixes("the european union"), "european union");
    }

    #[test]
    fn does_not_strip_prefix_without_word_boundary() {
        // "android" starts with "an" but is not the article "an "
        assert_eq!(remove_obj_prefixes("android robotics"), "android robotics");
    }
}
