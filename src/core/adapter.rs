//! Front matter key renaming
//!
//! A [`FrontMatterAdapter`] maps source metadata keys to target keys. It is
//! built from `source:target` strings given on the command line and applied to
//! every document before its metadata is exported.

use crate::core::Metadata;
use crate::error::{ConvertError, Result};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// A single `source:target` rename rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterMapping {
    pub source: String,
    pub target: String,
}

impl AdapterMapping {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

impl FromStr for AdapterMapping {
    type Err = ConvertError;

    /// Parse `source:target`.
    ///
    /// The separator is the first `:` and may be neither the first nor the last
    /// character. Both halves are trimmed and must stay non-empty.
    fn from_str(value: &str) -> Result<Self> {
        let separator = match value.find(':') {
            Some(index) if index > 0 && index < value.len() - 1 => index,
            _ => {
                return Err(ConvertError::invalid_adapter_mapping(
                    value,
                    "Use the form \"source:target\".",
                ))
            }
        };

        let source = value[..separator].trim();
        let target = value[separator + 1..].trim();

        if source.is_empty() || target.is_empty() {
            return Err(ConvertError::invalid_adapter_mapping(
                value,
                "Source and target cannot be empty.",
            ));
        }

        Ok(Self::new(source, target))
    }
}

impl fmt::Display for AdapterMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.source, self.target)
    }
}

/// Mapping from source metadata key to target metadata key
///
/// Later rules for the same source key replace earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatterAdapter {
    renames: BTreeMap<String, String>,
}

impl FrontMatterAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, source: impl Into<String>, target: impl Into<String>) {
        self.renames.insert(source.into(), target.into());
    }

    pub fn add(&mut self, mapping: AdapterMapping) {
        self.insert(mapping.source, mapping.target);
    }

    pub fn get(&self, source: &str) -> Option<&str> {
        self.renames.get(source).map(String::as_str)
    }

    /// The key `source` is written under
    pub fn rename<'a>(&'a self, source: &'a str) -> &'a str {
        self.get(source).unwrap_or(source)
    }

    pub fn len(&self) -> usize {
        self.renames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renames.is_empty()
    }

    /// Rename the keys of `metadata`, keeping values and iteration order.
    ///
    /// When two source keys land on the same target, the one visited later
    /// overwrites the earlier value in place.
    pub fn apply(&self, metadata: Metadata) -> Metadata {
        if self.is_empty() {
            return metadata;
        }

        let mut renamed = Metadata::with_capacity(metadata.len());
        for (key, value) in metadata {
            let target = match self.get(&key) {
                Some(target) => target.to_string(),
                None => key,
            };
            renamed.insert(target, value);
        }
        renamed
    }
}

impl FromIterator<AdapterMapping> for FrontMatterAdapter {
    fn from_iter<I: IntoIterator<Item = AdapterMapping>>(iter: I) -> Self {
        let mut adapter = Self::new();
        adapter.extend(iter);
        adapter
    }
}

impl Extend<AdapterMapping> for FrontMatterAdapter {
    fn extend<I: IntoIterator<Item = AdapterMapping>>(&mut self, iter: I) {
        for mapping in iter {
            self.add(mapping);
        }
    }
}

impl<S: Into<String>, T: Into<String>> FromIterator<(S, T)> for FrontMatterAdapter {
    fn from_iter<I: IntoIterator<Item = (S, T)>>(iter: I) -> Self {
        let mut adapter = Self::new();
        for (source, target) in iter {
            adapter.insert(source, target);
        }
        adapter
    }
}
