//! Markdown document model and MDX rendering

use crate::core::{FrontMatterAdapter, Metadata};
use crate::error::Result;

/// A Markdown document split into its front matter metadata and body
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    metadata: Metadata,
    body: String,
}

impl Document {
    pub fn new(metadata: Metadata, body: impl Into<String>) -> Self {
        Self {
            metadata,
            body: body.into(),
        }
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn has_metadata(&self) -> bool {
        !self.metadata.is_empty()
    }

    /// Rename metadata keys through `adapter`
    pub fn adapt(self, adapter: &FrontMatterAdapter) -> Self {
        Self {
            metadata: adapter.apply(self.metadata),
            body: self.body,
        }
    }

    /// Render the document as MDX.
    ///
    /// The metadata becomes a pretty-printed `export const metadata` object,
    /// followed by a blank line and the body. The result always ends with
    /// exactly one newline.
    pub fn to_mdx(&self) -> Result<String> {
        let metadata = serde_json::to_string_pretty(&self.metadata)?;
        let body = self.body.trim_start().trim_end_matches(['\n', '\r']);

        if body.is_empty() {
            Ok(format!("export const metadata = {metadata};\n"))
        } else {
            Ok(format!("export const metadata = {metadata};\n\n{body}\n"))
        }
    }
}
