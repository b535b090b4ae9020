//! Record collection over an injected source and decoder.

use serde_json::Value;

use crate::error::LoadError;
use crate::params::Params;
use crate::record::{Record, RecordBlock};
use crate::traits::{RecordSource, ResponseDecoder};

/// A loadable collection of records.
///
/// The store owns one record source and one response decoder, injected at
/// construction, plus the records of the most recent successful load. A
/// failed load leaves the cached records untouched, so a grid keeps showing
/// the last good data while the caller decides what to do about the error.
pub struct RecordStore<S, D> {
    source: S,
    decoder: D,
    block: RecordBlock,
    last_params: Option<Params>,
}

impl<S: RecordSource, D: ResponseDecoder> RecordStore<S, D> {
    /// Create a store over a source and a decoder.
    pub fn new(source: S, decoder: D) -> Self {
        RecordStore {
            source,
            decoder,
            block: RecordBlock::default(),
            last_params: None,
        }
    }

    /// Load records with these parameters, replacing the cached block.
    ///
    /// The parameters are remembered for [`reload`](Self::reload) whether or
    /// not the load succeeds, so a failed refresh can be retried verbatim.
    pub async fn load(&mut self, params: Params) -> Result<&RecordBlock, LoadError> {
        self.last_params = Some(params.clone());
        let block = self.source.load(params, &self.decoder).await?;
        self.block = block;
        Ok(&self.block)
    }

    /// Re-issue the most recently attempted load.
    ///
    /// Uses empty parameters when nothing has been loaded yet.
    pub async fn reload(&mut self) -> Result<&RecordBlock, LoadError> {
        let params = self.last_params.clone().unwrap_or_default();
        self.load(params).await
    }

    /// Records from the most recent successful load.
    pub fn records(&self) -> &[Record] {
        &self.block.records
    }

    /// Record at an index into the cached block.
    pub fn record(&self, index: usize) -> Option<&Record> {
        self.block.records.get(index)
    }

    /// First cached record whose identifier equals `id`.
    pub fn record_by_id(&self, id: &Value) -> Option<&Record> {
        self.block.records.iter().find(|r| r.id() == Some(id))
    }

    /// Number of cached records.
    pub fn len(&self) -> usize {
        self.block.len()
    }

    pub fn is_empty(&self) -> bool {
        self.block.is_empty()
    }

    /// Server-reported total, which can exceed `len` under paging.
    pub fn total(&self) -> usize {
        self.block.total
    }

    /// Drop the cached records without touching the source.
    pub fn clear(&mut self) {
        self.block = RecordBlock::default();
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn decoder(&self) -> &D {
        &self.decoder
    }
}
