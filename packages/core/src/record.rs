//! Materialized records.

use std::collections::BTreeMap;

use serde_json::Value;

/// A single materialized record.
///
/// Field values are keyed by field name. The identifier, when the decoder's
/// configuration names one, is kept exactly as it appeared in the payload.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    id: Option<Value>,
    values: BTreeMap<String, Value>,
}

impl Record {
    pub fn new(id: Option<Value>, values: BTreeMap<String, Value>) -> Self {
        Record { id, values }
    }

    /// The record identifier, as it appeared in the payload.
    pub fn id(&self) -> Option<&Value> {
        self.id.as_ref()
    }

    /// Value of a field, if this record carries it.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    /// All field values, keyed by field name.
    pub fn values(&self) -> &BTreeMap<String, Value> {
        &self.values
    }
}

/// One loaded block of records plus the server-reported total.
///
/// `total` can exceed `records.len()` when the server pages its results.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecordBlock {
    pub records: Vec<Record>,
    pub total: usize,
}

impl RecordBlock {
    pub fn new(records: Vec<Record>, total: usize) -> Self {
        RecordBlock { records, total }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
