//! Ordered request parameters.

use serde_json::Value;

/// An ordered list of named request parameters.
///
/// Order is part of the call contract: without a request carrier, each value
/// becomes one positional argument of the remote call, in this order.
/// Duplicate names are allowed; `get` returns the first match.
///
/// # Examples
///
/// ```rust
/// use gridstore_core::Params;
///
/// let params = Params::new().with("firstResult", 0).with("maxResults", 25);
/// assert_eq!(params.get("maxResults"), Some(&25.into()));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    entries: Vec<(String, Value)>,
}

impl Params {
    /// Create an empty parameter list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter, returning self for chaining.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.push(name, value);
        self
    }

    /// Append a parameter in place.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.entries.push((name.into(), value.into()));
    }

    /// Value of the first parameter with this name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate name/value pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Iterate names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// Iterate values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, v)| v)
    }
}

impl FromIterator<(String, Value)> for Params {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Params {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_insertion_order() {
        let params = Params::new().with("c", 3).with("a", 1).with("b", 2);

        let names: Vec<_> = params.names().collect();
        assert_eq!(names, ["c", "a", "b"]);

        let values: Vec<_> = params.values().cloned().collect();
        assert_eq!(values, [Value::from(3), Value::from(1), Value::from(2)]);
    }

    #[test]
    fn get_returns_first_match_for_duplicates() {
        let params = Params::new().with("name", "first").with("name", "second");

        assert_eq!(params.len(), 2);
        assert_eq!(params.get("name"), Some(&Value::from("first")));
    }

    #[test]
    fn get_missing_returns_none() {
        let params = Params::new().with("present", true);
        assert_eq!(params.get("absent"), None);
    }

    #[test]
    fn default_is_empty() {
        let params = Params::default();
        assert!(params.is_empty());
        assert_eq!(params.len(), 0);
    }

    #[test]
    fn accepts_mixed_value_types() {
        let params = Params::new()
            .with("text", "abc")
            .with("count", 7)
            .with("ratio", 0.5)
            .with("flag", false);

        assert_eq!(params.get("count"), Some(&Value::from(7)));
        assert_eq!(params.get("flag"), Some(&Value::from(false)));
    }

    #[test]
    fn collects_from_iterator() {
        let params: Params = vec![
            ("x".to_string(), Value::from(1)),
            ("y".to_string(), Value::from(2)),
        ]
        .into_iter()
        .collect();

        assert_eq!(params.names().collect::<Vec<_>>(), ["x", "y"]);
    }
}
