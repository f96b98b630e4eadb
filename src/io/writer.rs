//! Writing converted documents to disk

use crate::core::Document;
use crate::error::{ConvertError, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// Create every missing directory on the way to `dir`
pub fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.as_os_str().is_empty() || dir.is_dir() {
        return Ok(());
    }
    debug!("Creating directory {}", dir.display());
    fs::create_dir_all(dir).map_err(|e| ConvertError::write(dir, e))
}

/// Write `content` to `path`, creating parent directories and replacing any
/// existing file
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    fs::write(path, content).map_err(|e| ConvertError::write(path, e))
}

/// Render `document` as MDX and write it to `path`
pub fn write_mdx(document: &Document, path: &Path) -> Result<()> {
    let content = document.to_mdx()?;
    write_file(path, &content)
}
