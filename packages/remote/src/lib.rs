//! # gridstore-remote
//!
//! Record stores that load over a bound remote method.
//!
//! The remoting transport gives this layer exactly one thing: methods that
//! complete once per call with a JSON payload, and never signal errors out
//! of band. This crate adapts that contract to the Gridstore traits:
//! - `RemoteMethod`: the opaque bound callable the transport hands out
//! - `RequestComponent`: declared carrier for named request parameters
//! - `RemoteProxy`: a `RecordSource` that invokes the method, routes the
//!   payload through a decoder, and emits lifecycle notifications
//! - `RemoteJsonStore`: the ready-wired store over proxy + JSON reader
//!
//! ## Positional and carrier calls
//!
//! ```ignore
//! // Positional: each param value becomes one call argument, in order.
//! let mut store = RemoteJsonStore::new(method, schema);
//! store.load(Params::new().with("first", 0).with("max", 25)).await?;
//!
//! // Carrier: params ride on a fresh component instance, one argument total.
//! let mut store = RemoteJsonStore::new(method, schema)
//!     .with_request_component(
//!         RequestComponent::new("userQuery").with_fields(["pattern", "maxResults"]),
//!     );
//! store.load(Params::new().with("pattern", "smi%")).await?;
//! ```

mod carrier;
mod method;
mod proxy;
mod store;

pub use carrier::{RequestComponent, UnknownParams};
pub use method::{CallArg, ComponentInstance, RemoteMethod};
pub use proxy::RemoteProxy;
pub use store::RemoteJsonStore;
