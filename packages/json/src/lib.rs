//! # gridstore-json
//!
//! JSON response reading for Gridstore.
//!
//! The server answers every call with a JSON envelope. This crate turns that
//! envelope into materialized records:
//! - `RecordSchema` describes where the records live and what fields they
//!   carry
//! - `JsonReader` implements `ResponseDecoder` over a schema, including the
//!   in-band `exception` flag the transport uses in place of an error channel
//!
//! # Example
//!
//! ```rust
//! use gridstore_core::{RawResponse, ResponseDecoder};
//! use gridstore_json::{JsonReader, RecordSchema};
//!
//! let schema = RecordSchema::new("data")
//!     .with_id_field("id")
//!     .with_field("id")
//!     .with_field("name");
//! let reader = JsonReader::new(schema);
//!
//! let response = RawResponse::from(r#"{"data":[{"id":1,"name":"ada"}]}"#);
//! let block = reader.decode(&response).unwrap();
//! assert_eq!(block.len(), 1);
//! ```

mod convert;
mod reader;
mod schema;

pub use convert::FieldType;
pub use reader::JsonReader;
pub use schema::{Field, RecordSchema};
