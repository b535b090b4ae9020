//! Load lifecycle notifications.

use crate::error::DecodeError;
use crate::params::Params;
use crate::response::RawResponse;

/// Observer of load lifecycle notifications.
///
/// Sources emit `before_load` ahead of every call, then exactly one of
/// `load` or `load_exception` once the call's payload has been decoded or
/// rejected. The response notifications carry the raw payload: the decoded
/// records already travel on the load's return value, while on failure the
/// raw text is all there is.
///
/// All methods default to no-ops so observers implement only what they
/// watch.
pub trait LoadObserver: Send + Sync {
    /// A load is about to be issued with these parameters.
    fn before_load(&self, _params: &Params) {}

    /// A call completed and its payload decoded into records.
    fn load(&self, _response: &RawResponse) {}

    /// A call completed but its payload was rejected by the decoder.
    fn load_exception(&self, _response: &RawResponse, _cause: &DecodeError) {}
}

/// One notification captured by a [`RecordingObserver`].
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Clone, PartialEq)]
pub enum ObservedEvent {
    BeforeLoad { params: Params },
    Load { response: RawResponse },
    LoadException { response: RawResponse, cause: DecodeError },
}

#[cfg(any(test, feature = "test-utils"))]
impl ObservedEvent {
    pub fn name(&self) -> &'static str {
        match self {
            ObservedEvent::BeforeLoad { .. } => "before_load",
            ObservedEvent::Load { .. } => "load",
            ObservedEvent::LoadException { .. } => "load_exception",
        }
    }
}

/// Observer that records every notification, for assertions in tests.
#[cfg(any(test, feature = "test-utils"))]
#[derive(Default)]
pub struct RecordingObserver {
    events: std::sync::Mutex<Vec<ObservedEvent>>,
}

#[cfg(any(test, feature = "test-utils"))]
impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured notifications, in arrival order.
    pub fn events(&self) -> Vec<ObservedEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Just the notification names, in arrival order.
    pub fn names(&self) -> Vec<&'static str> {
        self.events.lock().unwrap().iter().map(ObservedEvent::name).collect()
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl LoadObserver for RecordingObserver {
    fn before_load(&self, params: &Params) {
        self.events.lock().unwrap().push(ObservedEvent::BeforeLoad {
            params: params.clone(),
        });
    }

    fn load(&self, response: &RawResponse) {
        self.events.lock().unwrap().push(ObservedEvent::Load {
            response: response.clone(),
        });
    }

    fn load_exception(&self, response: &RawResponse, cause: &DecodeError) {
        self.events.lock().unwrap().push(ObservedEvent::LoadException {
            response: response.clone(),
            cause: cause.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Silent;

    impl LoadObserver for Silent {}

    #[test]
    fn default_methods_are_noops() {
        let observer = Silent;
        observer.before_load(&Params::new());
        observer.load(&RawResponse::from("{}"));
        observer.load_exception(&RawResponse::from("{}"), &DecodeError::ServerException);
    }

    #[test]
    fn recording_observer_captures_in_order() {
        let observer = RecordingObserver::new();
        let params = Params::new().with("q", "x");
        let response = RawResponse::from(r#"{"data": []}"#);

        observer.before_load(&params);
        observer.load(&response);

        assert_eq!(observer.names(), ["before_load", "load"]);
        assert_eq!(
            observer.events()[0],
            ObservedEvent::BeforeLoad { params }
        );
    }

    #[test]
    fn recording_observer_keeps_failure_detail() {
        let observer = RecordingObserver::new();
        let response = RawResponse::from(r#"{"exception": true}"#);

        observer.load_exception(&response, &DecodeError::ServerException);

        assert_eq!(
            observer.events(),
            [ObservedEvent::LoadException {
                response,
                cause: DecodeError::ServerException,
            }]
        );
    }
}
