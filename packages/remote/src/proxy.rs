//! The remote invocation adapter.

use std::sync::Arc;

use async_trait::async_trait;
use gridstore_core::{
    Action, LoadError, LoadObserver, Params, RecordBlock, RecordSource, ResponseDecoder,
};

use crate::carrier::RequestComponent;
use crate::method::{CallArg, RemoteMethod};

/// Loads record blocks by invoking one bound remote method.
///
/// The proxy owns the call pipeline: notify observers that a load is
/// starting, build the argument list, invoke the method, decode its single
/// completion, and route the outcome. It holds no record state; that belongs
/// to the store that owns the proxy.
///
/// Without a request component, each parameter value becomes one positional
/// argument, in parameter order. With one, the parameters are mapped onto a
/// fresh component instance that travels as the sole argument.
pub struct RemoteProxy {
    method: Arc<dyn RemoteMethod>,
    component: Option<RequestComponent>,
    observers: Vec<Arc<dyn LoadObserver>>,
}

impl RemoteProxy {
    /// Create a proxy over a bound remote method.
    pub fn new(method: Arc<dyn RemoteMethod>) -> Self {
        RemoteProxy {
            method,
            component: None,
            observers: Vec::new(),
        }
    }

    /// Carry parameters on a fresh instance of this component instead of
    /// positionally.
    pub fn with_request_component(mut self, component: RequestComponent) -> Self {
        self.component = Some(component);
        self
    }

    /// Attach an observer of load lifecycle notifications.
    pub fn with_observer(mut self, observer: Arc<dyn LoadObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn set_request_component(&mut self, component: RequestComponent) {
        self.component = Some(component);
    }

    pub fn add_observer(&mut self, observer: Arc<dyn LoadObserver>) {
        self.observers.push(observer);
    }

    pub fn request_component(&self) -> Option<&RequestComponent> {
        self.component.as_ref()
    }

    /// Dispatch front door for generic data operations.
    ///
    /// This adapter is read-only: `Action::Read` behaves exactly like
    /// [`load`](RecordSource::load), anything else errors without reaching
    /// the transport or the observers.
    pub async fn request(
        &self,
        action: Action,
        params: Params,
        decoder: &dyn ResponseDecoder,
    ) -> Result<RecordBlock, LoadError> {
        match action {
            Action::Read => self.load(params, decoder).await,
            other => Err(LoadError::UnsupportedAction { action: other }),
        }
    }

    fn build_args(&self, params: &Params) -> Result<Vec<CallArg>, LoadError> {
        match &self.component {
            Some(component) => Ok(vec![CallArg::Component(component.instantiate(params)?)]),
            None => Ok(params.values().cloned().map(CallArg::Value).collect()),
        }
    }
}

#[async_trait]
impl RecordSource for RemoteProxy {
    async fn load(
        &self,
        params: Params,
        decoder: &dyn ResponseDecoder,
    ) -> Result<RecordBlock, LoadError> {
        for observer in &self.observers {
            observer.before_load(&params);
        }

        // A mapping failure never reaches the transport, so no completion
        // notification follows; the error itself is the outcome.
        let args = self.build_args(&params)?;

        log::debug!("invoking remote method with {} argument(s)", args.len());
        let response = self.method.invoke(args).await;

        match decoder.decode(&response) {
            Ok(block) => {
                for observer in &self.observers {
                    observer.load(&response);
                }
                Ok(block)
            }
            Err(cause) => {
                log::debug!("remote load failed: {}", cause);
                for observer in &self.observers {
                    observer.load_exception(&response, &cause);
                }
                Err(LoadError::Read { response, cause })
            }
        }
    }
}
