//! Dedup key rule (§4.C): the `(key, tag)` pair that decides whether two
//! results are "the same" value, mirroring `Aggregator._make_key` exactly.

use proofweave_names::normalize_name;
use proofweave_types::{PropertyType, Tag};

/// Compute the dedup key for a raw value under a given tag. Returns `None`
/// when the value does not clean to a valid instance of its implied type
/// (§4.C: "keys that fail to clean are rejected, not silently dropped").
pub fn make_key(tag: Tag, raw: &str) -> Option<String> {
    match tag {
        Tag::Per | Tag::Org | Tag::Loc => {
            let cleaned = PropertyType::Name.clean(raw)?;
            Some(normalize_name(&cleaned))
        }
        Tag::Email => PropertyType::Email.clean(raw),
        Tag::Phone => PropertyType::Phone.clean(raw),
        Tag::Iban => PropertyType::Iban.clean(raw),
        Tag::Country => PropertyType::Country.clean(raw),
        Tag::Other => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_key_is_normalized() {
        assert_eq!(make_key(Tag::Per, "Jäne   Doe"), Some("jane doe".to_string()));
    }

    #[test]
    fn same_person_different_case_and_accents_share_a_key() {
        let a = make_key(Tag::Per, "JANE DOE").unwrap();
        let b = make_key(Tag::Per, "Jäne Doe").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn email_key_is_cleaned_not_normalized() {
        assert_eq!(make_key(Tag::Email, "Jane.Doe@Example.COM"), Some("jane.doe@example.com".to_string()));
    }

    #[test]
    fn iban_key_is_compacted_uppercase() {
        assert_eq!(
            make_key(Tag::Iban, "ch56 0483 5012 3456 7800 9"),
            Some("CH5604835012345678009".to_string())
        );
    }

    #[test]
    fn empty_value_yields_no_key() {
        assert_eq!(make_key(Tag::Per, "   "), None);
    }

    #[test]
    fn other_tag_never_keys() {
        assert_eq!(make_key(Tag::Other, "anything"), None);
    }
}
