//! CLI driver
//!
//! Bridges parsed arguments to [`crate::ops`] and prints the user-facing
//! notices. Diagnostics go through `log`; the notices below are the tool's
//! actual output.

use crate::cli::args::{help_text, parse_cli_args, CliOptions, BIN_NAME};
use crate::io::ConversionJob;
use crate::ops::convert_path_with;
use anyhow::{Context, Result};
use colored::Colorize;
use log::debug;
use std::ffi::OsString;
use std::fmt::Display;
use std::path::Path;
use std::process::ExitCode;

/// Run the tool on command-line tokens (without the program name)
pub fn run_cli<I, T>(args: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let options = match parse_cli_args(args) {
        Ok(options) => options,
        Err(err) => {
            print_error(&err);
            println!();
            print_help();
            return ExitCode::FAILURE;
        }
    };

    if options.help_requested {
        print_help();
        return ExitCode::SUCCESS;
    }

    println!("{} {}", BIN_NAME.bold().cyan(), "Converting Markdown to MDX...".dimmed());
    println!();

    match execute(&options) {
        Ok(count) => {
            debug!("Converted {} file(s)", count);
            println!();
            println!("{} {}", "✓".green().bold(), "Conversion complete!".bold());
            ExitCode::SUCCESS
        }
        Err(err) => {
            print_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn execute(options: &CliOptions) -> Result<usize> {
    let cwd = std::env::current_dir().context("Could not determine the current directory")?;
    let input = options.input_path(&cwd);
    let conversion = options.conversion_options(&cwd);
    debug!("Converting {} with {:?}", input.display(), conversion);

    let count = convert_path_with(&input, &conversion, print_converted)?;
    Ok(count)
}

fn print_converted(job: &ConversionJob) {
    println!(
        "{} {} {} {} {}",
        "✓".green(),
        "Converted:".dimmed(),
        file_label(&job.input).as_str().cyan(),
        "→".dimmed(),
        file_label(&job.output).as_str().cyan(),
    );
}

fn print_error(message: &dyn Display) {
    eprintln!("{} {} {}", "✗".red().bold(), "Error:".bold(), message);
}

fn print_help() {
    println!("{}", help_text());
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .into_owned()
}
