//! The parameter map of a parsed link-value.

use std::collections::BTreeMap;
use std::collections::btree_map;

use crate::parameter::Parameter;

/// Parameters of a link-value, keyed by lowercased name.
///
/// Parameter names are case-insensitive: lookups lowercase the requested
/// name, and each entry keeps the [`Parameter`] with its name as written.
/// When a name occurs more than once only the last occurrence is kept.
///
/// # Common Parameters
///
/// - `rel`: Relation type(s), space separated
/// - `anchor`: Context IRI override
/// - `type`: Hint for the target media type
/// - `title`: Human-readable label
/// - `hreflang`: Language of the target
///
/// # Examples
///
/// ```
/// use link_header::{Parameter, Parameters};
///
/// let mut params = Parameters::new();
/// params.insert(Parameter::new("Rel", "prev"));
/// params.insert(Parameter::new("rel", "next"));
///
/// assert_eq!(params.len(), 1);
/// assert_eq!(params.value("REL"), Some("next"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Parameters {
    params: BTreeMap<String, Parameter>,
}

impl Parameters {
    /// Creates an empty parameter map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a parameter under its lowercased name.
    ///
    /// Returns the parameter it replaced, if the name was already present.
    pub fn insert(&mut self, parameter: Parameter) -> Option<Parameter> {
        self.params.insert(parameter.key(), parameter)
    }

    /// Returns the parameter with the given name, compared case-insensitively.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.params.get(&name.to_ascii_lowercase())
    }

    /// Returns the value of the parameter with the given name, if present.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&str> {
        self.get(name).map(Parameter::value)
    }

    /// Returns true if a parameter with the given name is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns true if there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns an iterator over `(key, parameter)` pairs, sorted by key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Parameter)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the `rel` parameter, if present.
    #[must_use]
    pub fn rel(&self) -> Option<&str> {
        self.value("rel")
    }

    /// Returns the relation types listed in `rel`.
    ///
    /// Relation types are separated by whitespace; an absent `rel` yields
    /// nothing.
    pub fn relation_types(&self) -> impl Iterator<Item = &str> {
        self.rel().into_iter().flat_map(str::split_ascii_whitespace)
    }

    /// Returns true if `rel` lists `relation`, compared case-insensitively.
    #[must_use]
    pub fn has_relation(&self, relation: &str) -> bool {
        self.relation_types()
            .any(|r| r.eq_ignore_ascii_case(relation))
    }
}

impl IntoIterator for Parameters {
    type Item = (String, Parameter);
    type IntoIter = btree_map::IntoIter<String, Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.into_iter()
    }
}

impl FromIterator<Parameter> for Parameters {
    fn from_iter<I: IntoIterator<Item = Parameter>>(iter: I) -> Self {
        let mut params = Self::new();
        for parameter in iter {
            params.insert(parameter);
        }
        params
    }
}
