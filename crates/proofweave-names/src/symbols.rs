//! A lightweight stand-in for the external person-/org-name symbol tagger
//! (§GLOSSARY "Symbol"). The real tagger resolves tokens against a gazetteer
//! of known given/family names and corporate-form dictionaries; here each
//! token's category is inferred from its shape, which is sufficient for
//! RigourStage's heuristic role (§4.E.1) as the *first*, cheapest classifier
//! in the pipeline — later stages (JudithaClassifierStage) consult the real
//! NameDB for anything this heuristic gets wrong.

use crate::prefixes::{remove_obj_prefixes, remove_org_prefixes, remove_person_prefixes};
use crate::tokenize::tokenize_name;

/// Corporate-form words that mark a name as an organization ("ORG_CLASS").
const ORG_CLASS_WORDS: &[&str] = &[
    "ltd", "inc", "gmbh", "corp", "llc", "plc", "sa", "ag", "bv", "nv", "sarl", "srl", "kg", "oy",
    "spa", "llp", "co", "kft", "ab", "asa", "oyj",
];

/// A token "carries a NAME symbol" when it looks like a titlecased personal
/// name word: starts with an uppercase letter, the rest lowercase, and it is
/// not itself a known corporate-form word.
fn is_name_token(token: &str) -> bool {
    let mut chars = token.chars();
    let first = match chars.next() {
        Some(c) => c,
        None => return false,
    };
    if !first.is_uppercase() {
        return false;
    }
    if chars.clone().any(|c| c.is_uppercase()) {
        return false;
    }
    if ORG_CLASS_WORDS.contains(&token.to_lowercase().as_str()) {
        return false;
    }
    token.chars().any(|c| c.is_alphabetic())
}

fn is_org_class_token(token: &str) -> bool {
    ORG_CLASS_WORDS.contains(&token.trim_end_matches('.').to_lowercase().as_str())
}

/// Test if a name exclusively has person-name symbols (§4.E.1 `is_person`).
///
/// All tokens longer than 2 characters (after stripping person prefixes)
/// must carry a NAME symbol; any token of length ≤2 disqualifies the name
/// outright, matching the reference classifier's treatment of bare initials.
pub fn is_rigour_person(name: &str) -> bool {
    let stripped = remove_person_prefixes(name);
    let all_tokens = tokenize_name(&stripped);
    if all_tokens.is_empty() {
        return false;
    }
    let long_tokens: Vec<&String> = all_tokens.iter().filter(|t| t.chars().count() > 2).collect();
    if long_tokens.len() != all_tokens.len() {
        return false;
    }
    long_tokens.iter().all(|t| is_name_token(t))
}

/// Test if a name contains an org-class symbol (§4.E.1 `is_org`).
pub fn is_rigour_org(name: &str) -> bool {
    tokenize_name(name).iter().any(|t| is_org_class_token(t))
}

/// The three-way rigour classification used both by RigourStage and by the
/// JudithaClassifierStage fallback (§4.E.2).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RigourClass {
    Per,
    Org,
    Other,
}

pub fn classify_name_rigour(name: &str) -> RigourClass {
    if is_rigour_person(name) {
        RigourClass::Per
    } else if is_rigour_org(name) {
        RigourClass::Org
    } else {
        RigourClass::Other
    }
}

/// Clean a name for display given its resolved tag (§4.F `clean_name_for_tag`,
/// composed here with [`crate::normalize::normalize_name`] by the caller).
pub fn strip_prefixes_for_tag(name: &str, tag: RigourClass) -> String {
    match tag {
        RigourClass::Per => remove_person_prefixes(name),
        RigourClass::Org => remove_org_prefixes(name),
        RigourClass::Other => remove_obj_prefixes(name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_org_by_corporate_suffix() {
        assert_eq!(
            classify_name_rigour("IDIO Daten Import Export GmbH"),
            RigourClass::Org
        );
    }

    #[test]
    fn classifies_simple_person_names() {
        assert_eq!(classify_name_rigour("Jane Doe"), RigourClass::Per);
        assert_eq!(classify_name_rigour("Jane Mary Doe"), RigourClass::Per);
    }

    #[test]
    fn gibberish_is_other() {
        assert_eq!(classify_name_rigour("jhkl fsd dsf"), RigourClass::Other);
    }

    #[test]
    fn honorific_prefixed_name_is_person() {
        assert!(is_rigour_person("Mrs. Jane Doe"));
    }

    #[test]
    fn org_suffix_disqualifies_person() {
        assert!(!is_rigour_person("Jane Doe gmbh"));
    }

    #[test]
    fn bare_initial_disqualifies_person() {
        assert!(!is_rigour_person("J Doe"));
    }

    #[test]
    fn clean_name_strips_generic_article_for_org() {
        assert_eq!(
            strip_prefixes_for_tag("the european union", RigourClass::Org),
            "european union"
        );
    }
}
