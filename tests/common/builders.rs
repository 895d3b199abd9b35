//! Test builders — terse constructors for submissions, templates and stores.
//!
//! These are designed for readability in test assertions, not for production
//! use. They panic on invalid input rather than returning `Result`.

use formtpl_core::{FieldSet, FieldType, JsonStore, Template};

/// Build a submission from `(name, value)` pairs.
///
/// ```rust
/// let q = submission(&[("login", "test@example.com"), ("tel", "+7 999 888 77 66")]);
/// ```
pub fn submission(pairs: &[(&str, &str)]) -> FieldSet {
    pairs.iter().copied().collect()
}

/// Build a template from `(field, type)` pairs.
pub fn template(name: &str, fields: &[(&str, FieldType)]) -> Template {
    fields
        .iter()
        .fold(Template::new(name), |t, (field, ty)| t.field(*field, *ty))
}

/// A store file inside `dir`, using the default `forms` table.
pub fn store_in(dir: &tempfile::TempDir) -> JsonStore {
    JsonStore::open(dir.path().join("test_db.json"), "forms")
}

/// A store inside `dir` holding exactly `templates`, in order.
pub fn store_with(dir: &tempfile::TempDir, templates: &[Template]) -> JsonStore {
    let store = store_in(dir);
    store.truncate().expect("truncate test store");
    for t in templates {
        store.insert(t).expect("insert test template");
    }
    store
}

/// A store inside `dir` holding the example templates.
pub fn seeded_store(dir: &tempfile::TempDir) -> JsonStore {
    let store = store_in(dir);
    formtpl_core::seed::seed(&store).expect("seed test store");
    store
}
