//! Record schema: where the records live and what fields they carry.

use serde::{Deserialize, Serialize};

use crate::convert::FieldType;

/// One declared record field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    name: String,
    #[serde(default, rename = "type")]
    kind: FieldType,
}

impl Field {
    pub fn new(name: impl Into<String>, kind: FieldType) -> Self {
        Field {
            name: name.into(),
            kind,
        }
    }

    /// A field that keeps payload values as-is.
    pub fn auto(name: impl Into<String>) -> Self {
        Field::new(name, FieldType::Auto)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> FieldType {
        self.kind
    }
}

impl From<&str> for Field {
    fn from(name: &str) -> Self {
        Field::auto(name)
    }
}

impl From<String> for Field {
    fn from(name: String) -> Self {
        Field::auto(name)
    }
}

/// Shape of the JSON envelope a reader materializes records from.
///
/// `root` names the top-level field holding the record array. The field
/// list drives materialization: each record gets exactly these fields,
/// coerced to their declared types, with nulls for whatever the payload
/// left out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordSchema {
    root: String,
    #[serde(default)]
    fields: Vec<Field>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id_field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    total_field: Option<String>,
}

impl RecordSchema {
    /// Create a schema with the given root field and no declared fields.
    pub fn new(root: impl Into<String>) -> Self {
        RecordSchema {
            root: root.into(),
            fields: Vec::new(),
            id_field: None,
            total_field: None,
        }
    }

    /// Declare a field. Accepts a name (auto-typed) or a full [`Field`].
    pub fn with_field(mut self, field: impl Into<Field>) -> Self {
        self.fields.push(field.into());
        self
    }

    /// Declare several fields at once.
    pub fn with_fields<I, F>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<Field>,
    {
        self.fields.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Name the payload field holding each record's identifier.
    pub fn with_id_field(mut self, name: impl Into<String>) -> Self {
        self.id_field = Some(name.into());
        self
    }

    /// Name the envelope field holding the server-side total.
    pub fn with_total_field(mut self, name: impl Into<String>) -> Self {
        self.total_field = Some(name.into());
        self
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn id_field(&self) -> Option<&str> {
        self.id_field.as_deref()
    }

    pub fn total_field(&self) -> Option<&str> {
        self.total_field.as_deref()
    }
}
