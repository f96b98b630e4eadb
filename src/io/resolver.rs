//! Input path resolution
//!
//! Decides whether an input path is converted as a single file or traversed
//! as a directory, and computes the output path of every Markdown file found.

use crate::core::{ConversionOptions, SOURCE_EXTENSION, TARGET_EXTENSION};
use crate::error::{ConvertError, Result};
use log::debug;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// How an input path is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    File,
    Directory,
}

/// One Markdown file and the MDX file it becomes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionJob {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Inspect `path` on disk.
///
/// Symlinks are followed. With `force_file` anything that exists is treated
/// as a file.
pub fn classify(path: &Path, force_file: bool) -> Result<InputKind> {
    let metadata = fs::metadata(path).map_err(|_| ConvertError::path_not_found(path))?;

    if metadata.is_file() || force_file {
        Ok(InputKind::File)
    } else if metadata.is_dir() {
        Ok(InputKind::Directory)
    } else {
        Err(ConvertError::unsupported_path_type(path))
    }
}

/// Check if a path carries the Markdown source extension
pub fn is_source_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext == SOURCE_EXTENSION)
        .unwrap_or(false)
}

fn has_target_extension(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext == TARGET_EXTENSION)
        .unwrap_or(false)
}

/// `notes.md` -> `notes.mdx`
fn target_file_name(input: &Path) -> OsString {
    let mut name = input.file_stem().map(OsString::from).unwrap_or_default();
    name.push(".");
    name.push(TARGET_EXTENSION);
    name
}

/// Resolve the job for a single input file.
///
/// Without `output` the MDX file is written next to the input. An `output`
/// ending in `.mdx` is used as is; any other `output` is a directory that
/// receives the file.
pub fn file_job(input: &Path, output: Option<&Path>) -> Result<ConversionJob> {
    if !is_source_file(input) {
        return Err(ConvertError::invalid_input(input));
    }

    let output = match output {
        Some(out) if has_target_extension(out) => out.to_path_buf(),
        Some(out) => out.join(target_file_name(input)),
        None => input.with_file_name(target_file_name(input)),
    };

    Ok(ConversionJob {
        input: input.to_path_buf(),
        output,
    })
}

/// Finds the Markdown files under a directory
#[derive(Debug, Clone)]
pub struct DirectoryWalker {
    root: PathBuf,
    output: Option<PathBuf>,
    deep: bool,
}

impl DirectoryWalker {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            output: None,
            deep: false,
        }
    }

    pub fn from_options(root: impl Into<PathBuf>, options: &ConversionOptions) -> Self {
        Self {
            root: root.into(),
            output: options.output.clone(),
            deep: options.deep,
        }
    }

    pub fn deep(mut self, deep: bool) -> Self {
        self.deep = deep;
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Output path for `file`, a Markdown file somewhere under the root.
    ///
    /// With an output root the file's directory relative to the input root is
    /// recreated below it. Otherwise the MDX file sits next to its source.
    pub fn output_for(&self, file: &Path) -> PathBuf {
        let name = target_file_name(file);

        let Some(output_root) = &self.output else {
            return file.with_file_name(name);
        };

        let relative_dir = file
            .strip_prefix(&self.root)
            .ok()
            .and_then(Path::parent)
            .filter(|dir| !dir.as_os_str().is_empty());

        match relative_dir {
            Some(dir) => output_root.join(dir).join(name),
            None => output_root.join(name),
        }
    }

    /// Lazily enumerate the conversion jobs, in filesystem listing order
    pub fn jobs(&self) -> Jobs<'_> {
        let max_depth = if self.deep { usize::MAX } else { 1 };
        let entries = WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(max_depth)
            .follow_links(false)
            .into_iter();

        Jobs {
            walker: self,
            entries,
        }
    }
}

/// Iterator over the conversion jobs of a [`DirectoryWalker`]
pub struct Jobs<'a> {
    walker: &'a DirectoryWalker,
    entries: walkdir::IntoIter,
}

impl Iterator for Jobs<'_> {
    type Item = Result<ConversionJob>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.entries.next()? {
                Ok(entry) => entry,
                Err(e) => return Some(Err(e.into())),
            };
            let path = entry.path();
            let file_type = entry.file_type();

            if file_type.is_dir() {
                if !self.walker.deep {
                    debug!("Skipping subdirectory {}", path.display());
                }
                continue;
            }

            if !file_type.is_file() || !is_source_file(path) {
                debug!("Ignoring {}", path.display());
                continue;
            }

            return Some(Ok(ConversionJob {
                input: path.to_path_buf(),
                output: self.walker.output_for(path),
            }));
        }
    }
}
