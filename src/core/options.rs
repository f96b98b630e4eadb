use crate::core::FrontMatterAdapter;
use std::path::{Path, PathBuf};

/// Extension of the Markdown files that get converted
pub const SOURCE_EXTENSION: &str = "md";

/// Extension of the generated files
pub const TARGET_EXTENSION: &str = "mdx";

/// Settings for one conversion run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionOptions {
    /// Key renames applied to every document
    pub adapter: FrontMatterAdapter,
    /// Recurse into subdirectories
    pub deep: bool,
    /// Output root directory, or target `.mdx` file for a single input file
    pub output: Option<PathBuf>,
    /// Treat the input path as a single file whatever it is on disk
    pub force_file: bool,
}

impl ConversionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_adapter(mut self, adapter: FrontMatterAdapter) -> Self {
        self.adapter = adapter;
        self
    }

    pub fn deep(mut self, deep: bool) -> Self {
        self.deep = deep;
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn force_file(mut self, force_file: bool) -> Self {
        self.force_file = force_file;
        self
    }

    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }
}
