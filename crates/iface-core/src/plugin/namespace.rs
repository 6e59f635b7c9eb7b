//! Hierarchical metric namespaces.
//!
//! A namespace is an ordered list of elements. Static elements are fixed path
//! segments; dynamic elements carry a name and description and hold either the
//! wildcard `*` (catalog form) or a concrete value (collected metrics).
//!
//! Text form: `/intel/procfs/iface/<interface>/<counter>`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Value of a dynamic element in catalog form.
pub const WILDCARD: &str = "*";

const SEPARATOR: char = '/';

/// One segment of a [`Namespace`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceElement {
    pub value: String,
    /// Set only on dynamic elements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl NamespaceElement {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            name: None,
            description: String::new(),
        }
    }

    /// Creates a dynamic element holding the wildcard.
    pub fn dynamic(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            value: WILDCARD.to_string(),
            name: Some(name.into()),
            description: description.into(),
        }
    }

    pub fn is_dynamic(&self) -> bool {
        self.name.is_some()
    }

    pub fn is_wildcard(&self) -> bool {
        self.value == WILDCARD
    }
}

/// Ordered path identifying a metric.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Namespace {
    elements: Vec<NamespaceElement>,
}

impl Namespace {
    /// Creates a namespace of static elements.
    pub fn new<S: AsRef<str>>(values: &[S]) -> Self {
        Self {
            elements: values
                .iter()
                .map(|v| NamespaceElement::new(v.as_ref()))
                .collect(),
        }
    }

    pub fn add_static_element(mut self, value: impl Into<String>) -> Self {
        self.elements.push(NamespaceElement::new(value));
        self
    }

    pub fn add_dynamic_element(
        mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.elements.push(NamespaceElement::dynamic(name, description));
        self
    }

    /// Replaces the value at `index`, keeping its name and description.
    ///
    /// Out-of-range indices leave the namespace unchanged.
    pub fn with_value(mut self, index: usize, value: impl Into<String>) -> Self {
        if let Some(element) = self.elements.get_mut(index) {
            element.value = value.into();
        }
        self
    }

    pub fn elements(&self) -> &[NamespaceElement] {
        &self.elements
    }

    pub fn get(&self, index: usize) -> Option<&NamespaceElement> {
        self.elements.get(index)
    }

    /// Segment values in order.
    pub fn values(&self) -> Vec<&str> {
        self.elements.iter().map(|e| e.value.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for element in &self.elements {
            write!(f, "{}{}", SEPARATOR, element.value)?;
        }
        Ok(())
    }
}

/// Error returned for namespace text that cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceError {
    pub input: String,
    pub message: &'static str,
}

impl fmt::Display for NamespaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid namespace '{}': {}", self.input, self.message)
    }
}

impl std::error::Error for NamespaceError {}

impl FromStr for Namespace {
    type Err = NamespaceError;

    /// Parses the text form. All elements come back static; the parser has
    /// no way to know which segments were dynamic.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = |message| NamespaceError {
            input: s.to_string(),
            message,
        };

        let rest = s
            .strip_prefix(SEPARATOR)
            .ok_or_else(|| err("must start with '/'"))?;
        if rest.is_empty() {
            return Err(err("no elements"));
        }

        let values: Vec<&str> = rest.split(SEPARATOR).collect();
        if values.iter().any(|v| v.is_empty()) {
            return Err(err("empty element"));
        }

        Ok(Namespace::new(&values))
    }
}
