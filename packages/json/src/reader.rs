//! JSON envelope reader.

use std::collections::BTreeMap;

use gridstore_core::{DecodeError, RawResponse, Record, RecordBlock, ResponseDecoder};
use serde_json::Value;

use crate::schema::RecordSchema;

/// Name of the in-band error flag the server sets when a call raises.
const EXCEPTION_FLAG: &str = "exception";

/// Name of the optional outcome flag on otherwise well-formed envelopes.
const SUCCESS_FLAG: &str = "success";

/// Reads records out of the JSON envelope a remote call completes with.
///
/// The transport has no error channel, so server failures arrive as ordinary
/// completions carrying a truthy `exception` flag. The reader checks that
/// flag before anything else and never materializes records from such a
/// payload; the flag's truthiness follows the JavaScript rules the server
/// convention assumes.
///
/// # Example
///
/// ```rust
/// use gridstore_core::{DecodeError, RawResponse, ResponseDecoder};
/// use gridstore_json::{JsonReader, RecordSchema};
///
/// let reader = JsonReader::new(RecordSchema::new("data").with_field("name"));
///
/// let failure = RawResponse::from(r#"{"exception": true}"#);
/// assert_eq!(reader.decode(&failure), Err(DecodeError::ServerException));
/// ```
pub struct JsonReader {
    schema: RecordSchema,
}

impl JsonReader {
    pub fn new(schema: RecordSchema) -> Self {
        JsonReader { schema }
    }

    pub fn schema(&self) -> &RecordSchema {
        &self.schema
    }

    fn materialize(&self, index: usize, row: &Value) -> Result<Record, DecodeError> {
        let row = row.as_object().ok_or(DecodeError::BadRecord { index })?;

        let id = self.schema.id_field().and_then(|name| row.get(name)).cloned();

        let mut values = BTreeMap::new();
        for field in self.schema.fields() {
            let raw = row.get(field.name()).cloned().unwrap_or(Value::Null);
            values.insert(field.name().to_string(), field.kind().convert(raw));
        }

        Ok(Record::new(id, values))
    }
}

impl ResponseDecoder for JsonReader {
    fn decode(&self, response: &RawResponse) -> Result<RecordBlock, DecodeError> {
        let payload: Value = serde_json::from_str(response.as_str()).map_err(|e| {
            DecodeError::Malformed {
                message: e.to_string(),
            }
        })?;

        if truthy(payload.get(EXCEPTION_FLAG)) {
            log::debug!("server flagged an exception in the response payload");
            return Err(DecodeError::ServerException);
        }

        if payload.get(SUCCESS_FLAG).and_then(Value::as_bool) == Some(false) {
            return Err(DecodeError::Unsuccessful);
        }

        let rows = payload
            .get(self.schema.root())
            .and_then(Value::as_array)
            .ok_or_else(|| DecodeError::MissingRoot {
                root: self.schema.root().to_string(),
            })?;

        let mut records = Vec::with_capacity(rows.len());
        for (index, row) in rows.iter().enumerate() {
            records.push(self.materialize(index, row)?);
        }

        let total = self
            .schema
            .total_field()
            .and_then(|name| payload.get(name))
            .and_then(Value::as_u64)
            .map(|n| n as usize)
            .unwrap_or(records.len());

        Ok(RecordBlock::new(records, total))
    }
}

/// JavaScript truthiness, which is what the server's flag convention uses.
fn truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::FieldType;
    use crate::schema::Field;
    use serde_json::json;

    fn user_schema() -> RecordSchema {
        RecordSchema::new("data")
            .with_id_field("id")
            .with_field("id")
            .with_field("name")
    }

    fn decode(schema: RecordSchema, payload: &str) -> Result<RecordBlock, DecodeError> {
        JsonReader::new(schema).decode(&RawResponse::from(payload))
    }

    #[test]
    fn reads_records_from_root() {
        let block = decode(
            user_schema(),
            r#"{"data":[{"id":"1","name":"ada"},{"id":"2","name":"bob"}]}"#,
        )
        .unwrap();

        assert_eq!(block.len(), 2);
        assert_eq!(block.total, 2);
        assert_eq!(block.records[0].id(), Some(&json!("1")));
        assert_eq!(block.records[1].get("name"), Some(&json!("bob")));
    }

    #[test]
    fn exception_flag_short_circuits() {
        let err = decode(user_schema(), r#"{"exception": true}"#).unwrap_err();
        assert_eq!(err, DecodeError::ServerException);

        // Even with a perfectly good root alongside it.
        let err = decode(
            user_schema(),
            r#"{"exception": true, "data": [{"id": "1"}]}"#,
        )
        .unwrap_err();
        assert_eq!(err, DecodeError::ServerException);
    }

    #[test]
    fn exception_flag_uses_javascript_truthiness() {
        for falsy in [
            r#"{"exception": false, "data": []}"#,
            r#"{"exception": 0, "data": []}"#,
            r#"{"exception": "", "data": []}"#,
            r#"{"exception": null, "data": []}"#,
        ] {
            assert!(decode(user_schema(), falsy).is_ok(), "payload: {}", falsy);
        }

        for truthy in [
            r#"{"exception": 1}"#,
            r#"{"exception": "oops"}"#,
            r#"{"exception": {}}"#,
            r#"{"exception": []}"#,
        ] {
            assert_eq!(
                decode(user_schema(), truthy),
                Err(DecodeError::ServerException),
                "payload: {}",
                truthy
            );
        }
    }

    #[test]
    fn success_false_is_unsuccessful() {
        let err = decode(user_schema(), r#"{"success": false, "data": []}"#).unwrap_err();
        assert_eq!(err, DecodeError::Unsuccessful);
    }

    #[test]
    fn success_true_proceeds() {
        let block = decode(user_schema(), r#"{"success": true, "data": []}"#).unwrap();
        assert!(block.is_empty());
    }

    #[test]
    fn missing_root_errors() {
        let err = decode(user_schema(), "{}").unwrap_err();
        assert_eq!(
            err,
            DecodeError::MissingRoot {
                root: "data".to_string()
            }
        );
    }

    #[test]
    fn non_array_root_errors() {
        let err = decode(user_schema(), r#"{"data": {"id": "1"}}"#).unwrap_err();
        assert!(matches!(err, DecodeError::MissingRoot { .. }));
    }

    #[test]
    fn non_object_row_errors_with_index() {
        let err = decode(user_schema(), r#"{"data": [{"id": "1"}, 42]}"#).unwrap_err();
        assert_eq!(err, DecodeError::BadRecord { index: 1 });
    }

    #[test]
    fn malformed_json_errors() {
        let err = decode(user_schema(), "not json").unwrap_err();
        assert!(matches!(err, DecodeError::Malformed { .. }));
    }

    #[test]
    fn missing_fields_become_null() {
        let block = decode(user_schema(), r#"{"data": [{"id": "1"}]}"#).unwrap();
        assert_eq!(block.records[0].get("name"), Some(&Value::Null));
    }

    #[test]
    fn typed_fields_coerce() {
        let schema = RecordSchema::new("data").with_field(Field::new("age", FieldType::Int));
        let block = decode(schema, r#"{"data": [{"age": "42"}]}"#).unwrap();
        assert_eq!(block.records[0].get("age"), Some(&json!(42)));
    }

    #[test]
    fn id_is_kept_raw_even_when_typed_fields_coerce() {
        let schema = RecordSchema::new("data")
            .with_id_field("id")
            .with_field(Field::new("id", FieldType::Int));
        let block = decode(schema, r#"{"data": [{"id": "7"}]}"#).unwrap();

        assert_eq!(block.records[0].id(), Some(&json!("7")));
        assert_eq!(block.records[0].get("id"), Some(&json!(7)));
    }

    #[test]
    fn total_comes_from_the_envelope_when_configured() {
        let schema = user_schema().with_total_field("total");
        let block = decode(schema, r#"{"data": [{"id": "1"}], "total": 99}"#).unwrap();

        assert_eq!(block.len(), 1);
        assert_eq!(block.total, 99);
    }

    #[test]
    fn total_falls_back_to_record_count() {
        // Not configured at all.
        let block = decode(user_schema(), r#"{"data": [{"id": "1"}], "total": 99}"#).unwrap();
        assert_eq!(block.total, 1);

        // Configured but absent or non-numeric.
        let schema = user_schema().with_total_field("total");
        let block = decode(schema.clone(), r#"{"data": [{"id": "1"}]}"#).unwrap();
        assert_eq!(block.total, 1);

        let block = decode(schema, r#"{"data": [{"id": "1"}], "total": "many"}"#).unwrap();
        assert_eq!(block.total, 1);
    }

    #[test]
    fn undeclared_payload_fields_are_dropped() {
        let block = decode(user_schema(), r#"{"data": [{"id": "1", "extra": 9}]}"#).unwrap();
        assert_eq!(block.records[0].get("extra"), None);
    }
}
