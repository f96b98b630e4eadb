//! Core domain types
//!
//! - [`Metadata`]: ordered front matter key-value record
//! - [`FrontMatterAdapter`]: key renaming table applied before export
//! - [`Document`]: a Markdown document split into metadata and body
//! - [`ConversionOptions`]: settings for one conversion run

pub mod adapter;
pub mod document;
pub mod options;

pub use adapter::{AdapterMapping, FrontMatterAdapter};
pub use document::Document;
pub use options::{ConversionOptions, SOURCE_EXTENSION, TARGET_EXTENSION};

/// Front matter metadata in document order
pub type Metadata = serde_json::Map<String, serde_json::Value>;
