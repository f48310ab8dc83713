//! `pick_name`: choose one deterministic representative name from a set of
//! equivalent spellings (§9.1 Open Question resolution — lexicographically
//! smallest rather than "whatever the set iterates first").

use std::collections::BTreeSet;

/// Picks the lexicographically smallest value, or `None` if the set is
/// empty. Using a `BTreeSet` upstream already gives this for free; this
/// helper also accepts any iterable of values for callers holding a `Vec`.
pub fn pick_name<'a, I: IntoIterator<Item = &'a String>>(values: I) -> Option<&'a str> {
    values.into_iter().min().map(String::as_str)
}

pub fn pick_name_set(values: &BTreeSet<String>) -> Option<&str> {
    values.iter().next().map(String::as_str)
}
