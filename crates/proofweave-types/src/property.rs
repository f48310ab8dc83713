//! Stand-ins for the few `Ontology` property-type operations the pipeline
//! actually calls (`type_clean`, `country_hint`). The real type system lives
//! in the external ontology library (§1); this is the minimal slice needed
//! to drive the aggregator's key rule and the pattern extractor's country
//! side effects.

/// Calling-code → ISO country code, covering the codes this pipeline's own
/// test scenarios exercise plus the handful of other high-traffic codes.
/// A real deployment would source this from the ontology's own phone type.
const CALLING_CODES: &[(&str, &str)] = &[
    ("+91", "in"),
    ("+1", "us"),
    ("+44", "gb"),
    ("+49", "de"),
    ("+33", "fr"),
    ("+41", "ch"),
    ("+39", "it"),
    ("+34", "es"),
    ("+31", "nl"),
    ("+86", "cn"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyType {
    Text,
    Name,
    Language,
    Email,
    Phone,
    Iban,
    Country,
    Identifier,
}

impl PropertyType {
    /// Normalize a raw matched/extracted value for its type. Returns `None`
    /// when the value is not a valid instance of the type (§4.B: "on null
    /// cleanup, the match is dropped").
    pub fn clean(self, raw: &str) -> Option<String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        match self {
            PropertyType::Email => Some(trimmed.to_lowercase()),
            PropertyType::Phone => {
                let digits_and_plus: String =
                    trimmed.chars().filter(|c| c.is_ascii_digit() || *c == '+').collect();
                if digits_and_plus.chars().filter(|c| c.is_ascii_digit()).count() < 6 {
                    None
                } else {
                    Some(digits_and_plus)
                }
            }
            PropertyType::Iban => {
                let compact: String = trimmed.chars().filter(|c| !c.is_whitespace()).collect();
                let upper = compact.to_ascii_uppercase();
                if upper.len() >= 15 && upper.chars().all(|c| c.is_ascii_alphanumeric()) {
                    Some(upper)
                } else {
                    None
                }
            }
            PropertyType::Country => Some(trimmed.to_lowercase()),
            PropertyType::Name | PropertyType::Text | PropertyType::Language | PropertyType::Identifier => {
                let collapsed = trimmed.split_whitespace().collect::<Vec<_>>().join(" ");
                Some(collapsed)
            }
        }
    }

    /// Zero or more ISO country codes implied directly by a value of this
    /// type (e.g. an IBAN's leading two letters, a phone's calling code).
    /// LOC values are *not* handled here — their country evidence comes from
    /// a gazetteer lookup (§4.B "Location side effect"), not type cleaning.
    pub fn country_hint(self, cleaned: &str) -> Vec<String> {
        match self {
            PropertyType::Iban => {
                if cleaned.len() >= 2 {
                    vec![cleaned[..2].to_lowercase()]
                } else {
                    Vec::new()
                }
            }
            PropertyType::Phone => CALLING_CODES
                .iter()
                .filter(|(prefix, _)| cleaned.starts_with(prefix))
                .map(|(_, country)| country.to_string())
                .take(1)
                .collect(),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_is_lowercased() {
        assert_eq!(
            PropertyType::Email.clean("Jane.DOE@Example.COM"),
            Some("jane.doe@example.com".to_string())
        );
    }

    #[test]
    fn phone_keeps_digits_and_plus() {
        assert_eq!(
            PropertyType::Phone.clean("tel:+919988111222"),
            Some("+919988111222".to_string())
        );
    }

    #[test]
    fn short_digit_runs_are_not_phones() {
        assert_eq!(PropertyType::Phone.clean("12"), None);
    }

    #[test]
    fn iban_is_compacted_and_uppercased() {
        assert_eq!(
            PropertyType::Iban.clean("ch56 0483 5012 3456 7800 9"),
            Some("CH56048350123456780 09".replace(' ', ""))
        );
    }

    #[test]
    fn iban_country_hint_is_leading_two_letters() {
        assert_eq!(
            PropertyType::Iban.country_hint("CH5604835012345678009"),
            vec!["ch".to_string()]
        );
    }

    #[test]
    fn phone_country_hint_from_calling_code() {
        assert_eq!(
            PropertyType::Phone.country_hint("+919988111222"),
            vec!["in".to_string()]
        );
    }

    #[test]
    fn empty_value_is_dropped() {
        assert_eq!(PropertyType::Text.clean("   "), None);
    }
}
