//! Error types shared across Gridstore.

use crate::response::RawResponse;
use crate::traits::Action;

/// Failures while decoding a raw response into records.
///
/// `ServerException` is the in-band application failure the transport cannot
/// signal any other way; every other variant is a structural problem with
/// the payload itself. Callers that care which kind they got match on the
/// variant, since the success/failure split is already the `Result`.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum DecodeError {
    /// The payload carried a truthy `exception` flag.
    #[error("exception raised on server")]
    ServerException,

    /// The payload was not valid JSON.
    #[error("malformed response: {message}")]
    Malformed { message: String },

    /// The payload carried `success: false`.
    #[error("server reported an unsuccessful call")]
    Unsuccessful,

    /// The configured root field was missing or not an array.
    #[error("response has no '{root}' array")]
    MissingRoot { root: String },

    /// A row under the root was not an object.
    #[error("record at index {index} is not an object")]
    BadRecord { index: usize },
}

/// Failures of a load issued through a record source.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum LoadError {
    /// The requested action is not supported by this source.
    #[error("unsupported action: {action}")]
    UnsupportedAction { action: Action },

    /// Request parameters could not be mapped onto the call.
    #[error("invalid parameters: {message}")]
    InvalidParams { message: String },

    /// The call completed but its response did not decode.
    #[error("load failed: {cause}")]
    Read {
        response: RawResponse,
        #[source]
        cause: DecodeError,
    },
}

impl LoadError {
    /// The raw response, when the failure happened after the call completed.
    ///
    /// `UnsupportedAction` and `InvalidParams` fail before anything reaches
    /// the transport, so there is no response to return for them.
    pub fn response(&self) -> Option<&RawResponse> {
        match self {
            LoadError::Read { response, .. } => Some(response),
            _ => None,
        }
    }
}
