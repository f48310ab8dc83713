//! `Annotation` (§4.F): one extracted value's accumulated evidence — the
//! names it's known by, the schemata it might resolve to, and the property
//! roles that triggered it — plus the query-token construction used to
//! build its `[value](query)` substitution.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use proofweave_names::{normalize_name, tokenize_name};
use proofweave_types::{Schema, Tag};
use regex::Regex;

use crate::factory::property_for_tag;

/// The generic "name" role every PER/ORG annotation also carries, alongside
/// its specific `namesMentioned`/`companiesMentioned` role.
pub const NAME_PROP: &str = "name";

/// Property roles that mark an `Annotation` as mention-worthy (§4.F: "the
/// property roles that triggered it"). Anything tagged with a role outside
/// this set is ignored by the annotator.
pub fn mention_props() -> BTreeSet<&'static str> {
    [
        NAME_PROP,
        property_for_tag(Tag::Per),
        property_for_tag(Tag::Org),
        property_for_tag(Tag::Loc),
        property_for_tag(Tag::Email),
        property_for_tag(Tag::Phone),
        property_for_tag(Tag::Iban),
    ]
    .into_iter()
    .collect()
}

fn named_props() -> BTreeSet<&'static str> {
    [NAME_PROP, property_for_tag(Tag::Per), property_for_tag(Tag::Org)].into_iter().collect()
}

#[derive(Debug, Clone, Default)]
pub struct Annotation {
    pub value: String,
    pub names: BTreeSet<String>,
    pub schemata: BTreeSet<String>,
    pub props: BTreeSet<String>,
}

impl Annotation {
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into(), ..Default::default() }
    }

    pub fn with_prop(mut self, prop: impl Into<String>) -> Self {
        self.props.insert(prop.into());
        self
    }

    pub fn with_names(mut self, names: BTreeSet<String>) -> Self {
        self.names = names;
        self
    }

    pub fn with_schemata(mut self, schemata: BTreeSet<String>) -> Self {
        self.schemata = schemata;
        self
    }

    /// Build the `Annotation` for a resolved entity's mention text (§4.F
    /// `Annotation.from_entity`): only valid for `LegalEntity`-descended
    /// schemas.
    pub fn from_entity(value: impl Into<String>, schema: &Schema, names: BTreeSet<String>) -> Option<Self> {
        if !schema.is_a(&Schema::LegalEntity) {
            return None;
        }
        let mut props = BTreeSet::from([NAME_PROP.to_string()]);
        if schema.is_a(&Schema::Organization) {
            props.insert(property_for_tag(Tag::Org).to_string());
        }
        if schema.is_a(&Schema::Person) {
            props.insert(property_for_tag(Tag::Per).to_string());
        }
        let schemata = schema.ancestors().iter().map(|s| s.name().to_string()).collect();
        Some(Self { value: value.into(), names, schemata, props })
    }

    /// Merge another annotation's evidence into this one (§4.F
    /// `Annotation.update`). Only valid for matching values.
    pub fn merge(&mut self, other: &Annotation) {
        debug_assert_eq!(self.value, other.value, "merging annotations with different values");
        self.names.extend(other.names.iter().cloned());
        self.schemata.extend(other.schemata.iter().cloned());
        self.props.extend(other.props.iter().cloned());
    }

    /// Whether this annotation carries any of the "named" roles (person,
    /// company, or the generic name role).
    pub fn is_name(&self) -> bool {
        self.props.iter().any(|p| named_props().contains(p.as_str()))
    }

    fn schema_role(&self) -> Option<Tag> {
        let props = self.effective_props();
        if props.contains(property_for_tag(Tag::Per)) {
            Some(Tag::Per)
        } else if props.contains(property_for_tag(Tag::Org)) {
            Some(Tag::Org)
        } else {
            None
        }
    }

    /// `Annotation._names`: value plus all known aliases, but only when
    /// this is a name-worthy annotation.
    fn effective_names(&self) -> BTreeSet<String> {
        if !self.is_name() {
            return BTreeSet::new();
        }
        let mut names = self.names.clone();
        names.insert(self.value.clone());
        names
    }

    /// `Annotation._props`: adds the generic name role for name-worthy
    /// annotations.
    fn effective_props(&self) -> BTreeSet<String> {
        if self.is_name() {
            let mut props = self.props.clone();
            props.insert(NAME_PROP.to_string());
            props
        } else {
            self.props.clone()
        }
    }

    /// `Annotation._schemata`: explicit schemata if given, else the full
    /// ancestry of Person/Organization inferred from the property roles.
    fn effective_schemata(&self) -> BTreeSet<String> {
        if !self.is_name() {
            return BTreeSet::new();
        }
        if !self.schemata.is_empty() {
            return self.schemata.clone();
        }
        match self.schema_role() {
            Some(Tag::Per) => Schema::Person.ancestors().iter().map(|s| s.name().to_string()).collect(),
            Some(Tag::Org) => Schema::Organization.ancestors().iter().map(|s| s.name().to_string()).collect(),
            _ => BTreeSet::new(),
        }
    }

    /// Union of person-name and org-name symbol ids (§4.F). The real
    /// person-/org-name taggers live in an external package (§1); this
    /// stands in with normalized name tokens, which is what those taggers'
    /// symbol ids are ultimately derived from.
    fn symbols(&self) -> BTreeSet<String> {
        self.effective_names()
            .iter()
            .flat_map(|name| tokenize_name(&normalize_name(name)))
            .filter(|token| token.chars().count() > 1)
            .collect()
    }

    /// Per-name token fingerprints (§4.F: "Fingerprints are generated ...
    /// for the mention's names and schemata"), standing in for the
    /// ontology's `make_fingerprints`.
    fn fingerprints(&self) -> BTreeSet<String> {
        if !self.is_name() {
            return BTreeSet::new();
        }
        self.effective_names()
            .iter()
            .filter_map(|name| {
                let mut tokens = tokenize_name(&normalize_name(name));
                tokens.sort();
                tokens.dedup();
                let fp = tokens.join("+");
                (!fp.is_empty()).then_some(fp)
            })
            .collect()
    }

    /// The ampersand-joined, alphabetically-sorted query string (§4.F).
    pub fn query(&self) -> String {
        let mut parts: BTreeSet<String> = BTreeSet::new();
        for fp in self.fingerprints() {
            parts.insert(format!("f_{fp}"));
        }
        for prop in self.effective_props() {
            parts.insert(format!("p_{prop}"));
        }
        for schema in self.effective_schemata() {
            parts.insert(format!("s_{schema}"));
        }
        for symbol in self.symbols() {
            parts.insert(format!("q_{symbol}"));
        }
        parts.into_iter().collect::<Vec<_>>().join("&")
    }

    /// `[value](query)`, or `None` if the query is empty (nothing to
    /// substitute on).
    pub fn replacement(&self) -> Option<String> {
        let query = self.query();
        if query.is_empty() {
            None
        } else {
            Some(format!("[{}]({})", self.value, query))
        }
    }

    /// Substitute every non-nested, word-bounded occurrence of `value` in
    /// `text` with this annotation's `[value](query)` form.
    pub fn annotate(&self, text: &str) -> String {
        match self.replacement() {
            Some(repl) => substitute_word_bounded(text, &self.value, &repl),
            None => text.to_string(),
        }
    }
}

/// Previously-annotated `[...](...)` spans, so a later substitution never
/// nests inside one (§4.F: "Replacement MUST avoid nesting"). The `regex`
/// crate has no lookaround, unlike the original's `(?<!\[)...(?![^\[\]]*\])`
/// pattern, so nesting is avoided by finding matches first and then
/// filtering out any that fall inside an existing bracket span.
fn protected_spans(text: &str) -> Vec<(usize, usize)> {
    static PROTECTED: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[[^\[\]]+\]\([^\[\]]+\)").expect("valid regex"));
    PROTECTED.find_iter(text).map(|m| (m.start(), m.end())).collect()
}

fn is_protected(spans: &[(usize, usize)], start: usize, end: usize) -> bool {
    spans.iter().any(|&(s, e)| start >= s && end <= e)
}

/// Word-bounded, non-nesting substitution of every occurrence of `value`
/// in `text` with `replacement`.
pub fn substitute_word_bounded(text: &str, value: &str, replacement: &str) -> String {
    if value.is_empty() {
        return text.to_string();
    }
    let pattern = format!(r"\b{}\b", regex::escape(value));
    let Ok(re) = Regex::new(&pattern) else {
        return text.to_string();
    };
    let spans = protected_spans(text);

    let mut result = String::with_capacity(text.len());
    let mut last_end = 0;
    for m in re.find_iter(text) {
        if is_protected(&spans, m.start(), m.end()) {
            continue;
        }
        result.push_str(&text[last_end..m.start()]);
        result.push_str(replacement);
        last_end = m.end();
    }
    result.push_str(&text[last_end..]);
    result
}

/// `clean_text` (§4.F): strip `()[]` and collapse whitespace, ahead of
/// annotation.
pub fn clean_text(text: &str) -> String {
    let stripped: String = text.chars().map(|c| if "()[]".contains(c) { ' ' } else { c }).collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}
