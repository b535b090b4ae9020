//! The remote method transport boundary.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use gridstore_core::RawResponse;
use serde_json::Value;

/// One argument of a remote call.
#[derive(Debug, Clone, PartialEq)]
pub enum CallArg {
    /// A bare positional value.
    Value(Value),
    /// A component instance carrying named fields.
    Component(ComponentInstance),
}

/// A server-side component instantiated fresh for one call.
///
/// Instances exist only for the duration of the call that carries them; the
/// proxy builds one per load and never reuses it.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentInstance {
    name: String,
    fields: BTreeMap<String, Value>,
}

impl ComponentInstance {
    pub fn new(name: impl Into<String>) -> Self {
        ComponentInstance {
            name: name.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Set a field, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.fields.insert(name.into(), value);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> &BTreeMap<String, Value> {
        &self.fields
    }
}

/// A bound server-side method exposed through the remoting transport.
///
/// The contract is deliberately narrow: exactly one completion per call,
/// carrying the response text, and no error channel. A server-side failure
/// still completes normally; it is encoded in the payload itself, which is
/// why decoding is where failures surface.
///
/// # Object Safety
///
/// This trait is object-safe: proxies hold an `Arc<dyn RemoteMethod>`.
#[async_trait]
pub trait RemoteMethod: Send + Sync {
    /// Invoke the method with these arguments and await its completion.
    async fn invoke(&self, args: Vec<CallArg>) -> RawResponse;
}

#[async_trait]
impl<T: RemoteMethod + ?Sized> RemoteMethod for &T {
    async fn invoke(&self, args: Vec<CallArg>) -> RawResponse {
        (**self).invoke(args).await
    }
}

#[async_trait]
impl<T: RemoteMethod + ?Sized> RemoteMethod for Box<T> {
    async fn invoke(&self, args: Vec<CallArg>) -> RawResponse {
        self.as_ref().invoke(args).await
    }
}

#[async_trait]
impl<T: RemoteMethod + ?Sized> RemoteMethod for Arc<T> {
    async fn invoke(&self, args: Vec<CallArg>) -> RawResponse {
        self.as_ref().invoke(args).await
    }
}
