//! Store — JSON document file holding the form templates.
//!
//! The on-disk layout is a TinyDB-style document: a top-level object of
//! tables, each table an object keyed by increasing integer ids stored as
//! strings, each record a flat object with a `name` plus `field: type` pairs.
//!
//! ```text
//! {"forms": {"1": {"name": "Проба", "f_name1": "email", "f_name2": "date"}}}
//! ```
//!
//! The query path only reads. Writes rewrite the whole file and assume a
//! single writer.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::matcher::TemplateSource;
use crate::types::{FieldType, Template};

/// Record key holding the template name; every other key is a field.
const NAME_KEY: &str = "name";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read template store {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write template store {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("template store {} is not valid JSON: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to encode template store {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("template store {}: {reason}", .path.display())]
    Layout { path: PathBuf, reason: String },
}

/// Handle on one table of a JSON document file. Opening is lazy; the file is
/// read on every operation and need not exist until the first write.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
    table: String,
}

impl JsonStore {
    pub fn open(path: impl Into<PathBuf>, table: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            table: table.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// Every valid template in insertion order.
    ///
    /// Records without a non-empty `name`, or with a field whose type is not
    /// one of the four known tags, are skipped with a warning.
    pub fn all(&self) -> Result<Vec<Template>, StoreError> {
        let document = self.read_document()?;
        let rows = self.rows(&document)?;

        let templates: Vec<Template> = rows
            .into_iter()
            .filter_map(|(id, record)| match parse_record(record) {
                Ok(template) => Some(template),
                Err(reason) => {
                    tracing::warn!(id, %reason, "skipping template record");
                    None
                }
            })
            .collect();

        tracing::debug!(
            path = %self.path.display(),
            table = %self.table,
            templates = templates.len(),
            "loaded templates"
        );
        Ok(templates)
    }

    /// Append a template and return its new id.
    pub fn insert(&self, template: &Template) -> Result<u64, StoreError> {
        let mut document = self.read_document()?;
        let next_id = self.rows(&document)?.last().map_or(1, |(id, _)| id + 1);

        let mut record = Map::new();
        record.insert(NAME_KEY.to_string(), Value::String(template.name.clone()));
        for (field, ty) in &template.fields {
            record.insert(field.clone(), Value::String(ty.to_string()));
        }

        self.table_mut(&mut document)?
            .insert(next_id.to_string(), Value::Object(record));
        self.write_document(&document)?;

        tracing::debug!(id = next_id, template = %template.name, "inserted template");
        Ok(next_id)
    }

    /// Remove every record from this table. Other tables are left untouched.
    pub fn truncate(&self) -> Result<(), StoreError> {
        let mut document = self.read_document()?;
        self.table_mut(&mut document)?.clear();
        self.write_document(&document)
    }

    // -----------------------------------------------------------------------
    // Document I/O
    // -----------------------------------------------------------------------

    fn read_document(&self) -> Result<Map<String, Value>, StoreError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        if raw.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str(&raw) {
            Ok(Value::Object(document)) => Ok(document),
            Ok(_) => Err(self.layout("top level is not an object")),
            Err(source) => Err(StoreError::Parse {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn write_document(&self, document: &Map<String, Value>) -> Result<(), StoreError> {
        let write_err = |source: std::io::Error| StoreError::Write {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        let json = serde_json::to_string(document).map_err(|source| StoreError::Encode {
            path: self.path.clone(),
            source,
        })?;
        std::fs::write(&self.path, json).map_err(write_err)
    }

    /// Records of this table sorted by numeric id. A missing table is empty.
    fn rows<'d>(
        &self,
        document: &'d Map<String, Value>,
    ) -> Result<Vec<(u64, &'d Value)>, StoreError> {
        let table = match document.get(&self.table) {
            None => return Ok(Vec::new()),
            Some(Value::Object(table)) => table,
            Some(_) => return Err(self.layout(format!("table {:?} is not an object", self.table))),
        };

        let mut rows = Vec::with_capacity(table.len());
        for (key, record) in table {
            match key.parse::<u64>() {
                Ok(id) => rows.push((id, record)),
                Err(_) => tracing::warn!(key = %key, "skipping record with non-numeric id"),
            }
        }
        rows.sort_by_key(|(id, _)| *id);
        Ok(rows)
    }

    fn table_mut<'d>(
        &self,
        document: &'d mut Map<String, Value>,
    ) -> Result<&'d mut Map<String, Value>, StoreError> {
        let entry = document
            .entry(self.table.clone())
            .or_insert_with(|| Value::Object(Map::new()));
        match entry {
            Value::Object(table) => Ok(table),
            _ => Err(self.layout(format!("table {:?} is not an object", self.table))),
        }
    }

    fn layout(&self, reason: impl Into<String>) -> StoreError {
        StoreError::Layout {
            path: self.path.clone(),
            reason: reason.into(),
        }
    }
}

impl TemplateSource for JsonStore {
    fn list_all(&self) -> Result<Vec<Template>, StoreError> {
        self.all()
    }
}

fn parse_record(record: &Value) -> Result<Template, String> {
    let Value::Object(record) = record else {
        return Err("record is not an object".to_string());
    };

    let name = match record.get(NAME_KEY) {
        Some(Value::String(name)) if !name.is_empty() => name,
        _ => return Err("record has no name".to_string()),
    };

    let mut template = Template::new(name.as_str());
    for (field, ty) in record.iter().filter(|(k, _)| k.as_str() != NAME_KEY) {
        let ty = ty
            .as_str()
            .ok_or_else(|| format!("field {field:?} type is not a string"))?
            .parse::<FieldType>()?;
        template.fields.insert(field.clone(), ty);
    }
    Ok(template)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
