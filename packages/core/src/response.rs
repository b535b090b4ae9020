//! Raw transport payloads.

use std::fmt;

/// The payload a remote call completes with.
///
/// The transport hands back a JSON-encoded string and nothing else: no status
/// code, no separate error channel. The text stays undecoded until a decoder
/// runs, and travels unmodified inside load failures so callers can inspect
/// what the server actually sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse(String);

impl RawResponse {
    pub fn new(text: impl Into<String>) -> Self {
        RawResponse(text.into())
    }

    /// The response text, exactly as received.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RawResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for RawResponse {
    fn from(text: String) -> Self {
        RawResponse(text)
    }
}

impl From<&str> for RawResponse {
    fn from(text: &str) -> Self {
        RawResponse(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_text_verbatim() {
        let response = RawResponse::from(r#"{"data": []}"#);
        assert_eq!(response.as_str(), r#"{"data": []}"#);
        assert_eq!(format!("{}", response), r#"{"data": []}"#);
    }

    #[test]
    fn converts_from_owned_and_borrowed() {
        let a = RawResponse::from("x".to_string());
        let b = RawResponse::from("x");
        assert_eq!(a, b);
        assert_eq!(a.into_string(), "x");
    }
}
