//! A single parsed link parameter.

/// One `name[=value]` pair from a link-value.
///
/// The name keeps the case it was written in. A parameter written without
/// `=value` has an empty value.
///
/// # Examples
///
/// ```
/// use link_header::Parameter;
///
/// let param = Parameter::new("Rel", "next");
/// assert_eq!(param.name(), "Rel");
/// assert_eq!(param.value(), "next");
///
/// let flag = Parameter::flag("crossorigin");
/// assert_eq!(flag.value(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parameter {
    name: String,
    value: String,
}

impl Parameter {
    /// Creates a parameter with a value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Creates a parameter with an empty value.
    #[must_use]
    pub fn flag(name: impl Into<String>) -> Self {
        Self::new(name, String::new())
    }

    /// Returns the name as written.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the value, unquoted and unescaped.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the lowercased name used as the lookup key.
    #[must_use]
    pub fn key(&self) -> String {
        self.name.to_ascii_lowercase()
    }
}
