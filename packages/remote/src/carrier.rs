//! Request component declarations.

use gridstore_core::{LoadError, Params};

use crate::method::ComponentInstance;

/// What to do with parameters that are not declared on the component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownParams {
    /// Fail the load before anything reaches the transport.
    #[default]
    Reject,
    /// Drop them silently.
    Ignore,
}

/// Declaration of the server-side component that carries request parameters.
///
/// When a proxy is configured with one of these, each load instantiates the
/// component fresh, copies every declared parameter onto it, and passes the
/// instance as the sole call argument. The declared field set is fixed up
/// front, and what happens to undeclared parameters is a policy chosen at
/// construction rather than an accident of iteration order.
///
/// # Example
///
/// ```rust
/// use gridstore_core::Params;
/// use gridstore_remote::RequestComponent;
///
/// let component = RequestComponent::new("userQuery")
///     .with_fields(["pattern", "maxResults"]);
///
/// let instance = component
///     .instantiate(&Params::new().with("pattern", "smi%"))
///     .unwrap();
/// assert_eq!(instance.get("pattern"), Some(&"smi%".into()));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RequestComponent {
    name: String,
    fields: Vec<String>,
    unknown_params: UnknownParams,
}

impl RequestComponent {
    /// Declare a component by its server-side name.
    ///
    /// # Panics
    ///
    /// Panics if the name is empty.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "component name must not be empty");
        RequestComponent {
            name,
            fields: Vec::new(),
            unknown_params: UnknownParams::default(),
        }
    }

    /// Declare a field the component accepts.
    ///
    /// # Panics
    ///
    /// Panics if the field name is not a valid Unicode identifier (UAX#31:
    /// a letter or underscore-then-letter/digit start, letters and digits
    /// after that).
    pub fn with_field(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if let Err(message) = validate_field_name(&name) {
            panic!("invalid field name '{}': {}", name, message);
        }
        self.fields.push(name);
        self
    }

    /// Declare several fields at once.
    pub fn with_fields<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self = self.with_field(name);
        }
        self
    }

    /// Silently drop undeclared parameters instead of failing the load.
    pub fn ignore_unknown_params(mut self) -> Self {
        self.unknown_params = UnknownParams::Ignore;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn unknown_params(&self) -> UnknownParams {
        self.unknown_params
    }

    /// Map parameters onto a fresh instance of this component.
    ///
    /// Declared parameters are copied over; undeclared ones follow the
    /// component's policy. When one name appears several times, the last
    /// value wins.
    pub fn instantiate(&self, params: &Params) -> Result<ComponentInstance, LoadError> {
        let mut instance = ComponentInstance::new(&self.name);

        for (name, value) in params.iter() {
            if self.fields.iter().any(|f| f == name) {
                instance.set(name, value.clone());
            } else if self.unknown_params == UnknownParams::Reject {
                return Err(LoadError::InvalidParams {
                    message: format!(
                        "parameter '{}' is not declared on component '{}'",
                        name, self.name
                    ),
                });
            }
        }

        Ok(instance)
    }
}

/// Validate a declared field name as a Unicode identifier.
fn validate_field_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("empty name".to_string());
    }

    let mut chars = name.chars();
    let first = chars.next().unwrap();

    // First char: XID_Start or underscore followed by XID_Continue
    let valid_start = unicode_ident::is_xid_start(first)
        || (first == '_'
            && chars
                .clone()
                .next()
                .is_some_and(unicode_ident::is_xid_continue));

    if !valid_start {
        return Err("must start with a letter or underscore followed by letter/digit".to_string());
    }

    // Rest: XID_Continue
    for c in chars {
        if !unicode_ident::is_xid_continue(c) {
            return Err(format!("invalid character '{}'", c));
        }
    }

    Ok(())
}
