//! File reading and front matter parsing
//!
//! Delimiter detection and body splitting are handled by `gray_matter`; the
//! raw YAML block is then decoded with `serde_yaml` so that keys keep the order
//! in which they appear in the document.

use crate::core::{Document, Metadata};
use crate::error::{ConvertError, Result};
use gray_matter::{engine::YAML, Matter};
use log::debug;
use serde_yaml::Value;
use std::fs;
use std::path::Path;

const DELIMITER: &str = "---";

/// Front matter reader
pub struct FrontMatterReader {
    matter: Matter<YAML>,
}

impl FrontMatterReader {
    pub fn new() -> Self {
        Self {
            matter: Matter::<YAML>::new(),
        }
    }

    /// Read a document from a file path
    pub fn read_file<P: AsRef<Path>>(&self, path: P) -> Result<Document> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConvertError::read(path, e))?;
        self.parse_content(&content, Some(path))
    }

    /// Parse document from string content.
    ///
    /// `path` is only used to label errors.
    pub fn parse_content(&self, content: &str, path: Option<&Path>) -> Result<Document> {
        let path = path.unwrap_or_else(|| Path::new("<input>"));

        // gray_matter treats an unclosed block as front matter running to the
        // end of the file and drops very short inputs, so only hand it
        // documents with a complete block.
        if !has_front_matter(content) {
            return Ok(Document::new(Metadata::new(), content));
        }

        let parsed = self.matter.parse(content);
        debug!(
            "Front matter block of {} bytes in {}",
            parsed.matter.len(),
            path.display()
        );

        let metadata = decode_metadata(&parsed.matter, path)?;
        Ok(Document::new(metadata, parsed.content))
    }
}

impl Default for FrontMatterReader {
    fn default() -> Self {
        Self::new()
    }
}

/// A delimiter line opens the document and a later delimiter line closes it
fn has_front_matter(content: &str) -> bool {
    match content.split_once('\n') {
        Some((first_line, rest)) if first_line.trim_end() == DELIMITER => {
            rest.lines().any(|line| line.trim_end() == DELIMITER)
        }
        _ => false,
    }
}

/// Decode a raw YAML front matter block into ordered metadata
fn decode_metadata(raw: &str, path: &Path) -> Result<Metadata> {
    if raw.trim().is_empty() {
        return Ok(Metadata::new());
    }

    let value: Value = serde_yaml::from_str(raw).map_err(|e| {
        ConvertError::invalid_front_matter(path, format!("Failed to deserialize front matter: {e}"))
    })?;

    let mapping = match value {
        Value::Mapping(mapping) => mapping,
        Value::Null => return Ok(Metadata::new()),
        other => {
            return Err(ConvertError::invalid_front_matter(
                path,
                format!("Expected mapping or null, found {}", type_name(&other)),
            ))
        }
    };

    let mut metadata = Metadata::with_capacity(mapping.len());
    for (key, value) in mapping {
        let key = key_to_string(&key).ok_or_else(|| {
            ConvertError::invalid_front_matter(path, format!("Non-scalar key found: {key:?}"))
        })?;
        let value = serde_json::to_value(&value).map_err(|e| {
            ConvertError::invalid_front_matter(path, format!("Value of \"{key}\": {e}"))
        })?;
        metadata.insert(key, value);
    }
    Ok(metadata)
}

fn key_to_string(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some("null".to_string()),
        _ => None,
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

/// Convenience functions for common operations
pub mod convenience {
    use super::*;

    /// Read a document from a file path with default settings
    pub fn read_document<P: AsRef<Path>>(path: P) -> Result<Document> {
        FrontMatterReader::new().read_file(path)
    }

    /// Parse a document from a string with default settings
    pub fn parse_document(content: &str) -> Result<Document> {
        FrontMatterReader::new().parse_content(content, None)
    }
}
