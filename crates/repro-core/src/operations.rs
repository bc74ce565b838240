//! Normalized, per-service operation sets

use crate::discovery::naming::normalize_operation_name;
use crate::validate::is_valid_operation_format;
use std::collections::BTreeSet;

/// Sorted, deduplicated kebab-case operation names for one service
///
/// An empty set means "unknown", not "the service has no operations".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationSet {
    names: Vec<String>,
}

impl OperationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from PascalCase or kebab-case names
    ///
    /// Every name is normalized to kebab-case; names that still are not
    /// well-formed operations are dropped.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = names
            .into_iter()
            .map(|name| normalize_operation_name(name.as_ref()))
            .filter(|name| is_valid_operation_format(name))
            .collect::<BTreeSet<_>>();
        Self::from_sorted(names)
    }

    fn from_sorted(names: BTreeSet<String>) -> Self {
        Self {
            names: names.into_iter().collect(),
        }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.names
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn contains(&self, operation: &str) -> bool {
        self.names
            .binary_search_by(|name| name.as_str().cmp(operation))
            .is_ok()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl From<BTreeSet<String>> for OperationSet {
    fn from(set: BTreeSet<String>) -> Self {
        Self::from_names(set)
    }
}

impl<S: AsRef<str>> FromIterator<S> for OperationSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_names(iter)
    }
}
