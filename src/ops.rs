//! Conversion operations
//!
//! These are the entry points used by the CLI: convert one file, a directory
//! or whatever a path points at. Work is strictly sequential and the first
//! error stops the run.

use crate::core::{ConversionOptions, FrontMatterAdapter};
use crate::error::Result;
use crate::io::{
    classify, file_job, write_mdx, ConversionJob, DirectoryWalker, FrontMatterReader, InputKind,
};
use log::{debug, info, warn};
use std::path::Path;

/// Convert one Markdown file into an MDX file at `output`.
///
/// The output file is replaced if it exists and its parent directory is
/// created if missing.
pub fn convert_file(
    input: &Path,
    output: &Path,
    adapter: &FrontMatterAdapter,
) -> Result<ConversionJob> {
    let reader = FrontMatterReader::new();
    let job = ConversionJob {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
    };
    run_job(&reader, &job, adapter)?;
    Ok(job)
}

fn run_job(
    reader: &FrontMatterReader,
    job: &ConversionJob,
    adapter: &FrontMatterAdapter,
) -> Result<()> {
    debug!("Processing file: {}", job.input.display());
    let document = reader.read_file(&job.input)?.adapt(adapter);
    write_mdx(&document, &job.output)?;
    info!("Converted {} -> {}", job.input.display(), job.output.display());
    Ok(())
}

/// Convert every Markdown file in `directory`
pub fn convert_directory(
    directory: &Path,
    options: &ConversionOptions,
) -> Result<Vec<ConversionJob>> {
    let mut converted = Vec::new();
    convert_directory_with(directory, options, |job| converted.push(job.clone()))?;
    Ok(converted)
}

/// Like [`convert_directory`], reporting each file to `on_converted` as soon
/// as it is written. Returns the number of converted files.
pub fn convert_directory_with<F>(
    directory: &Path,
    options: &ConversionOptions,
    mut on_converted: F,
) -> Result<usize>
where
    F: FnMut(&ConversionJob),
{
    let reader = FrontMatterReader::new();
    let walker = DirectoryWalker::from_options(directory, options);
    let mut count = 0;

    for job in walker.jobs() {
        let job = job?;
        run_job(&reader, &job, &options.adapter)?;
        on_converted(&job);
        count += 1;
    }

    if count == 0 {
        warn!("No markdown files found in {}", directory.display());
    }
    Ok(count)
}

/// Convert a path which can be a single Markdown file or a directory
pub fn convert_path(input: &Path, options: &ConversionOptions) -> Result<Vec<ConversionJob>> {
    let mut converted = Vec::new();
    convert_path_with(input, options, |job| converted.push(job.clone()))?;
    Ok(converted)
}

/// Like [`convert_path`], reporting each file to `on_converted` as soon as it
/// is written. Returns the number of converted files.
pub fn convert_path_with<F>(
    input: &Path,
    options: &ConversionOptions,
    mut on_converted: F,
) -> Result<usize>
where
    F: FnMut(&ConversionJob),
{
    match classify(input, options.force_file)? {
        InputKind::File => {
            let job = file_job(input, options.output())?;
            run_job(&FrontMatterReader::new(), &job, &options.adapter)?;
            on_converted(&job);
            Ok(1)
        }
        InputKind::Directory => convert_directory_with(input, options, on_converted),
    }
}
