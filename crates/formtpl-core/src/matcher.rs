//! Matcher — picks the stored template that best fits a submission.
//!
//! A template is a candidate when every one of its fields was submitted and
//! was inferred as exactly the type the template requires. Extra submitted
//! fields are ignored. Among candidates the one with the most fields wins;
//! on equal counts the template seen first in stored order is kept.

use crate::detector::detect;
use crate::store::StoreError;
use crate::types::{FieldSet, FieldType, MatchOutcome, Template, TypeMap};

/// Anything that can hand the matcher every stored template, in stored order.
pub trait TemplateSource {
    fn list_all(&self) -> Result<Vec<Template>, StoreError>;
}

impl TemplateSource for [Template] {
    fn list_all(&self) -> Result<Vec<Template>, StoreError> {
        Ok(self.to_vec())
    }
}

impl TemplateSource for Vec<Template> {
    fn list_all(&self) -> Result<Vec<Template>, StoreError> {
        self.as_slice().list_all()
    }
}

/// Infer the type of every submitted field, keeping submission order.
pub fn infer_types(fields: &FieldSet) -> TypeMap {
    fields
        .iter()
        .map(|(name, value)| (name.to_string(), detect(value)))
        .collect()
}

/// True when every field the template requires is present in `query` with
/// the required type.
pub fn is_candidate(template: &Template, query: &TypeMap) -> bool {
    template.fields.iter().all(|(name, required)| {
        lookup(query, name).is_some_and(|inferred| inferred == *required)
    })
}

/// Name of the most specific template matching `fields`, if any.
///
/// A template needs at least one field to be selected: the running best
/// count starts at zero and only a strictly larger count replaces it.
pub fn find_matching_form<'t>(fields: &FieldSet, templates: &'t [Template]) -> Option<&'t str> {
    best_match(&infer_types(fields), templates).map(|t| t.name.as_str())
}

/// Load every template from `source` and resolve `fields` against them.
///
/// Falls back to the inferred type map when nothing matches.
pub fn resolve<S>(fields: &FieldSet, source: &S) -> Result<MatchOutcome, StoreError>
where
    S: TemplateSource + ?Sized,
{
    let templates = source.list_all()?;
    tracing::debug!(templates = templates.len(), fields = fields.len(), "resolving submission");

    let query = infer_types(fields);
    Ok(match best_match(&query, &templates) {
        Some(template) => MatchOutcome::Matched(template.name.clone()),
        None => MatchOutcome::Unmatched(query),
    })
}

fn best_match<'t>(query: &TypeMap, templates: &'t [Template]) -> Option<&'t Template> {
    let mut best: Option<&Template> = None;
    let mut best_count = 0;

    for template in templates {
        if !is_candidate(template, query) {
            tracing::debug!(template = %template.name, "template rejected");
            continue;
        }
        let count = template.field_count();
        tracing::debug!(template = %template.name, fields = count, "template is a candidate");
        if count > best_count {
            best = Some(template);
            best_count = count;
        }
    }

    best
}

fn lookup(query: &TypeMap, name: &str) -> Option<FieldType> {
    query.iter().find(|(n, _)| n == name).map(|(_, ty)| *ty)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
