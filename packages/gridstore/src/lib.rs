//! Gridstore loads tabular records for grid-style callers through a
//! remoting transport that has no error channel of its own.
//!
//! The pieces compose explicitly: a [`RemoteMethod`] is the bound
//! server-side callable, a [`RemoteProxy`] turns loads into calls, a
//! [`JsonReader`] decodes the completion payload (including the in-band
//! `exception` flag servers use to report failures), and a [`RecordStore`]
//! holds the records. [`RemoteJsonStore`] wires up the common case.
//!
//! ```ignore
//! use std::sync::Arc;
//! use gridstore::{Params, RecordSchema, RemoteJsonStore};
//!
//! let schema = RecordSchema::new("data")
//!     .with_id_field("id")
//!     .with_fields(["id", "name"]);
//! let mut store = RemoteJsonStore::new(method, schema);
//!
//! store.load(Params::new().with("maxResults", 25)).await?;
//! ```

pub use gridstore_core::{
    Action, DecodeError, LoadError, LoadObserver, Params, RawResponse, Record, RecordBlock,
    RecordSource, RecordStore, ResponseDecoder,
};
pub use gridstore_json::{Field, FieldType, JsonReader, RecordSchema};
pub use gridstore_remote::{
    CallArg, ComponentInstance, RemoteJsonStore, RemoteMethod, RemoteProxy, RequestComponent,
    UnknownParams,
};
