//! Group identifiers, optionally vendor-namespaced.
//!
//! A group names one logical translation file. Identifiers like
//! `acme/messages` carry a vendor namespace in front of the first `/`;
//! everything after it is the group name.

use std::fmt;

/// Separator between a vendor namespace and the group name.
pub const NAMESPACE_SEPARATOR: char = '/';

/// Sentinel group name for the per-locale flat catalog (one JSON file per
/// locale instead of one file per group).
pub const SINGLE_GROUP: &str = "single";

/// A parsed group identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Group {
    /// Vendor namespace, when the group belongs to a vendor package.
    pub namespace: Option<String>,
    pub name: String,
}

impl Group {
    /// Split an identifier on the first `/`.
    ///
    /// Identifiers are assumed well-formed as produced by group discovery;
    /// no further validation happens here.
    pub fn parse(identifier: &str) -> Self {
        match identifier.split_once(NAMESPACE_SEPARATOR) {
            Some((namespace, name)) => Self {
                namespace: Some(namespace.to_string()),
                name: name.to_string(),
            },
            None => Self {
                namespace: None,
                name: identifier.to_string(),
            },
        }
    }

    pub fn plain(name: impl Into<String>) -> Self {
        Self {
            namespace: None,
            name: name.into(),
        }
    }

    pub fn namespaced(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: Some(namespace.into()),
            name: name.into(),
        }
    }

    /// True for the non-namespaced per-locale catalog sentinel.
    pub fn is_single(&self) -> bool {
        self.namespace.is_none() && self.name == SINGLE_GROUP
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(namespace) => write!(f, "{}{}{}", namespace, NAMESPACE_SEPARATOR, self.name),
            None => write!(f, "{}", self.name),
        }
    }
}
