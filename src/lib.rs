//! md-to-mdx: convert Markdown documents with YAML front matter into MDX
//!
//! Each converted document exports its front matter as a code-level object,
//! so documentation pipelines can `import { metadata }` instead of parsing
//! front matter themselves:
//!
//! ```text
//! ---                              export const metadata = {
//! title: Hello          ===>         "title": "Hello",
//! draft: true                        "isDraft": true
//! ---                              };
//! # Hi
//!                                  # Hi
//! ```
//!
//! # Quick Start
//!
//! ## Converting a single file
//!
//! ```rust,no_run
//! use md_to_mdx::{convert_file, FrontMatterAdapter, Result};
//! use std::path::Path;
//!
//! fn main() -> Result<()> {
//!     let adapter: FrontMatterAdapter = [("draft", "isDraft")].into_iter().collect();
//!     convert_file(Path::new("notes.md"), Path::new("notes.mdx"), &adapter)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Converting a directory tree
//!
//! ```rust,no_run
//! use md_to_mdx::{convert_path, ConversionOptions, Result};
//! use std::path::Path;
//!
//! fn main() -> Result<()> {
//!     let options = ConversionOptions::new().deep(true).with_output("build");
//!     for job in convert_path(Path::new("docs"), &options)? {
//!         println!("{} -> {}", job.input.display(), job.output.display());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`core`](crate::core): metadata, the key adapter, documents and conversion options
//! - [`io`]: front matter reading, MDX writing and input path resolution
//! - [`ops`]: file, directory and path conversion
//! - [`cli`]: argument grammar and the command-line driver
//! - [`error`]: the [`ConvertError`] type

// Public API exports
pub use crate::error::{ConvertError, ErrorKind, Result};

// Core types
pub use crate::core::{
    AdapterMapping, ConversionOptions, Document, FrontMatterAdapter, Metadata, SOURCE_EXTENSION,
    TARGET_EXTENSION,
};

// IO types
pub use crate::io::{ConversionJob, DirectoryWalker, FrontMatterReader, InputKind};

// Operations
pub use crate::ops::{
    convert_directory, convert_directory_with, convert_file, convert_path, convert_path_with,
};

pub mod cli;
pub mod core;
pub mod error;
pub mod io;
pub mod ops;
