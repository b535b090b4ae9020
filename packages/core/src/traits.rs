//! Capability traits: record sources and response decoders.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{DecodeError, LoadError};
use crate::params::Params;
use crate::record::RecordBlock;
use crate::response::RawResponse;

/// Generic data operations a source may be asked to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Read,
    Create,
    Update,
    Destroy,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Read => "read",
            Action::Create => "create",
            Action::Update => "update",
            Action::Destroy => "destroy",
        };
        f.write_str(name)
    }
}

/// Load record blocks from somewhere, through a decoder.
///
/// The decoder is passed per call: sources do the transport work and leave
/// payload interpretation to whatever decoder the owning store was built
/// with.
///
/// # Object Safety
///
/// This trait is object-safe: you can use `Box<dyn RecordSource>`.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Perform one load and decode its completion payload.
    ///
    /// # Returns
    ///
    /// * `Ok(block)` - The materialized records.
    /// * `Err(LoadError)` - The call never went out, or its response did not
    ///   decode.
    async fn load(
        &self,
        params: Params,
        decoder: &dyn ResponseDecoder,
    ) -> Result<RecordBlock, LoadError>;
}

/// Decode a raw completion payload into records.
///
/// Decoders are pure functions of the payload; all transport concerns stay
/// with the source.
///
/// # Object Safety
///
/// This trait is object-safe: you can use `Box<dyn ResponseDecoder>`.
pub trait ResponseDecoder: Send + Sync {
    fn decode(&self, response: &RawResponse) -> Result<RecordBlock, DecodeError>;
}

// Blanket implementations for references, boxes, and arcs

#[async_trait]
impl<T: RecordSource + ?Sized> RecordSource for &T {
    async fn load(
        &self,
        params: Params,
        decoder: &dyn ResponseDecoder,
    ) -> Result<RecordBlock, LoadError> {
        (**self).load(params, decoder).await
    }
}

#[async_trait]
impl<T: RecordSource + ?Sized> RecordSource for Box<T> {
    async fn load(
        &self,
        params: Params,
        decoder: &dyn ResponseDecoder,
    ) -> Result<RecordBlock, LoadError> {
        self.as_ref().load(params, decoder).await
    }
}

#[async_trait]
impl<T: RecordSource + ?Sized> RecordSource for Arc<T> {
    async fn load(
        &self,
        params: Params,
        decoder: &dyn ResponseDecoder,
    ) -> Result<RecordBlock, LoadError> {
        self.as_ref().load(params, decoder).await
    }
}

impl<T: ResponseDecoder + ?Sized> ResponseDecoder for &T {
    fn decode(&self, response: &RawResponse) -> Result<RecordBlock, DecodeError> {
        (**self).decode(response)
    }
}

impl<T: ResponseDecoder + ?Sized> ResponseDecoder for Box<T> {
    fn decode(&self, response: &RawResponse) -> Result<RecordBlock, DecodeError> {
        self.as_ref().decode(response)
    }
}

impl<T: ResponseDecoder + ?Sized> ResponseDecoder for Arc<T> {
    fn decode(&self, response: &RawResponse) -> Result<RecordBlock, DecodeError> {
        self.as_ref().decode(response)
    }
}
