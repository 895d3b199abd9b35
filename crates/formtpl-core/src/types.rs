//! Core types for formtpl-core.
//!
//! This module defines the data structures shared across the detector, the
//! matcher and the store: the inferred [`FieldType`], the submitted
//! [`FieldSet`], a stored [`Template`] and the [`MatchOutcome`] of a lookup.

use std::collections::BTreeMap;

/// Semantic type inferred for a submitted field value.
///
/// Declaration order is classification precedence: a value is checked as a
/// date first, then a phone, then an email, and falls back to text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldType {
    Date,
    Phone,
    Email,
    Text,
}

impl FieldType {
    /// All tags in classification order.
    pub const PRIORITY: [FieldType; 4] = [
        FieldType::Date,
        FieldType::Phone,
        FieldType::Email,
        FieldType::Text,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            FieldType::Date => "date",
            FieldType::Phone => "phone",
            FieldType::Email => "email",
            FieldType::Text => "text",
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FieldType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "date" => Ok(FieldType::Date),
            "phone" => Ok(FieldType::Phone),
            "email" => Ok(FieldType::Email),
            "text" => Ok(FieldType::Text),
            other => Err(format!("unknown field type: {other}")),
        }
    }
}

/// Submitted `name → value` pairs in order of first appearance.
///
/// Names are unique. Inserting an existing name replaces its value but keeps
/// the original position, so rendered output follows the order the caller
/// first supplied each field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSet {
    entries: Vec<(String, String)>,
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for FieldSet {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut set = FieldSet::new();
        for (name, value) in iter {
            set.insert(name, value);
        }
        set
    }
}

/// Inferred type of every submitted field, in submission order.
pub type TypeMap = Vec<(String, FieldType)>;

/// A named form template: the set of fields a submission must carry, and the
/// type each of them must be inferred as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub name: String,
    pub fields: BTreeMap<String, FieldType>,
}

impl Template {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style helper used by the seed data and tests.
    pub fn field(mut self, name: impl Into<String>, ty: FieldType) -> Self {
        self.fields.insert(name.into(), ty);
        self
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

/// Result of resolving a submission against the template store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Name of the most specific template whose fields all matched.
    Matched(String),
    /// No template matched; the inferred type of every submitted field.
    Unmatched(TypeMap),
}

impl std::fmt::Display for MatchOutcome {
    /// Renders the command-line output: the template name on a single line,
    /// or a brace block of `name: type` lines with unquoted keys.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchOutcome::Matched(name) => f.write_str(name),
            MatchOutcome::Unmatched(types) => {
                f.write_str("{\n")?;
                let lines: Vec<String> = types
                    .iter()
                    .map(|(name, ty)| format!("  {name}: {ty}"))
                    .collect();
                f.write_str(&lines.join(",\n"))?;
                f.write_str("\n}")
            }
        }
    }
}
