//! Ready-wired store over a remote method and a JSON reader.

use std::sync::Arc;

use gridstore_core::{LoadError, LoadObserver, Params, Record, RecordBlock, RecordStore};
use gridstore_json::{JsonReader, RecordSchema};
use serde_json::Value;

use crate::carrier::RequestComponent;
use crate::method::RemoteMethod;
use crate::proxy::RemoteProxy;

/// A record store wired for the common case: one remote method, one JSON
/// envelope schema.
///
/// Construction builds the reader from the schema and the proxy from the
/// method, then injects both into a [`RecordStore`]. Record-shape
/// configuration belongs to the schema; transport configuration goes through
/// the builders here and lands on the proxy.
///
/// # Example
///
/// ```ignore
/// let mut store = RemoteJsonStore::new(method, schema)
///     .with_request_component(RequestComponent::new("userQuery").with_field("pattern"));
///
/// store.load(Params::new().with("pattern", "smi%")).await?;
/// for record in store.records() {
///     println!("{:?}", record.get("name"));
/// }
/// ```
pub struct RemoteJsonStore {
    store: RecordStore<RemoteProxy, JsonReader>,
}

impl RemoteJsonStore {
    /// Wire a store from a bound remote method and an envelope schema.
    pub fn new(method: Arc<dyn RemoteMethod>, schema: RecordSchema) -> Self {
        RemoteJsonStore {
            store: RecordStore::new(RemoteProxy::new(method), JsonReader::new(schema)),
        }
    }

    /// Carry parameters on a fresh instance of this component.
    pub fn with_request_component(mut self, component: RequestComponent) -> Self {
        self.store.source_mut().set_request_component(component);
        self
    }

    /// Attach an observer of load lifecycle notifications.
    pub fn with_observer(mut self, observer: Arc<dyn LoadObserver>) -> Self {
        self.store.source_mut().add_observer(observer);
        self
    }

    /// Load records with these parameters.
    pub async fn load(&mut self, params: Params) -> Result<&RecordBlock, LoadError> {
        self.store.load(params).await
    }

    /// Re-issue the most recently attempted load.
    pub async fn reload(&mut self) -> Result<&RecordBlock, LoadError> {
        self.store.reload().await
    }

    pub fn records(&self) -> &[Record] {
        self.store.records()
    }

    pub fn record(&self, index: usize) -> Option<&Record> {
        self.store.record(index)
    }

    pub fn record_by_id(&self, id: &Value) -> Option<&Record> {
        self.store.record_by_id(id)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn total(&self) -> usize {
        self.store.total()
    }

    pub fn clear(&mut self) {
        self.store.clear()
    }

    /// The underlying store, for direct access to the proxy and reader.
    pub fn inner(&self) -> &RecordStore<RemoteProxy, JsonReader> {
        &self.store
    }

    pub fn inner_mut(&mut self) -> &mut RecordStore<RemoteProxy, JsonReader> {
        &mut self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::method::mock::MockMethod;
    use gridstore_core::RecordingObserver;
    use serde_json::json;

    fn schema() -> RecordSchema {
        RecordSchema::new("data")
            .with_id_field("id")
            .with_field("id")
            .with_field("name")
    }

    #[tokio::test]
    async fn wires_method_schema_and_loads() {
        let method = Arc::new(
            MockMethod::new().with_default_response(r#"{"data": [{"id": 1, "name": "ada"}]}"#),
        );
        let mut store = RemoteJsonStore::new(method, schema());

        store.load(Params::new()).await.unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.total(), 1);
        assert_eq!(
            store.record_by_id(&json!(1)).and_then(|r| r.get("name")),
            Some(&json!("ada"))
        );
    }

    #[test]
    fn builder_forwards_component_to_proxy() {
        let method = Arc::new(MockMethod::new());
        let store = RemoteJsonStore::new(method, schema())
            .with_request_component(RequestComponent::new("userQuery").with_field("pattern"));

        let component = store.inner().source().request_component().unwrap();
        assert_eq!(component.name(), "userQuery");
    }

    #[tokio::test]
    async fn builder_forwards_observers_to_proxy() {
        let method = Arc::new(MockMethod::new().with_default_response(r#"{"data": []}"#));
        let observer = Arc::new(RecordingObserver::new());
        let mut store = RemoteJsonStore::new(method, schema()).with_observer(observer.clone());

        store.load(Params::new()).await.unwrap();

        assert_eq!(observer.names(), ["before_load", "load"]);
    }
}
