//! Core Gridstore: record store vocabulary and traits.
//!
//! This layer defines the shared types and traits the rest of Gridstore
//! composes:
//! - `Params`: ordered request parameters (order is part of the call contract)
//! - `RawResponse`: the payload a remote call completes with, undecoded
//! - `Record` / `RecordBlock`: materialized tabular data
//! - `RecordSource` / `ResponseDecoder`: the load and decode boundaries
//! - `LoadObserver`: lifecycle notifications around each load
//! - `RecordStore`: a record collection over an injected source and decoder
//!
//! # Example
//!
//! ```rust
//! use gridstore_core::Params;
//!
//! let params = Params::new().with("query", "smith").with("limit", 25);
//! assert_eq!(params.names().collect::<Vec<_>>(), ["query", "limit"]);
//! ```

mod error;
mod events;
mod params;
mod record;
mod response;
mod store;
mod traits;

pub use error::{DecodeError, LoadError};
pub use events::LoadObserver;
pub use params::Params;
pub use record::{Record, RecordBlock};
pub use response::RawResponse;
pub use store::RecordStore;
pub use traits::{Action, RecordSource, ResponseDecoder};

// Test support, shared with downstream crate tests
#[cfg(any(test, feature = "test-utils"))]
pub use events::{ObservedEvent, RecordingObserver};
