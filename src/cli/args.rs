//! Command-line argument definitions and parsing
//!
//! Grammar (tokens are read left to right):
//!
//! - `--deep` / `--no-deep`: toggle recursive traversal, the last one wins
//! - `--adapter SRC:DST`, `--adapter=SRC:DST`, `-a SRC:DST`: repeatable key rename
//! - `--out PATH`, `--out=PATH`, `-o PATH`: output root (or `.mdx` file), the last one wins
//! - `-h`, `--help`: request the help text
//! - anything else: positional; only the first one is used as the input path
//!
//! Tokens are sorted into flags and positionals by `normalize_args` before
//! clap sees them, so unknown dashed tokens, `--` and glued forms such as
//! `-ofoo` all end up as positionals.

use crate::core::{AdapterMapping, ConversionOptions, FrontMatterAdapter};
use crate::error::{ConvertError, Result};
use clap::builder::NonEmptyStringValueParser;
use clap::{ArgAction, CommandFactory, Parser};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Name the binary reports in usage and messages
pub const BIN_NAME: &str = "md-to-mdx";

/// Input used when no positional argument is given
pub const DEFAULT_INPUT: &str = "./";

/// Flags that stand alone
const SWITCHES: [&str; 4] = ["--deep", "--no-deep", "--help", "-h"];

/// Flags that consume the following token, with the long name clap knows
const VALUE_FLAGS: [(&str, &str); 4] = [
    ("--adapter", "--adapter"),
    ("-a", "--adapter"),
    ("--out", "--out"),
    ("-o", "--out"),
];

/// Raw clap definition of the command line
#[derive(Parser, Debug)]
#[command(
    name = BIN_NAME,
    about = "Convert Markdown files with front matter into MDX files that export their metadata",
    override_usage = "md-to-mdx [path] [options]",
    disable_help_flag = true,
    args_override_self = true
)]
pub struct Cli {
    /// File or directory to convert (default: current directory)
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,

    /// Recursively process sub-directories
    #[arg(long, overrides_with = "no_deep")]
    pub deep: bool,

    /// Disable recursive traversal (default)
    #[arg(long = "no-deep", overrides_with = "deep")]
    pub no_deep: bool,

    /// Map front-matter field "a" to "b". Repeatable
    #[arg(
        short = 'a',
        long = "adapter",
        value_name = "a:b",
        value_parser = AdapterMapping::from_str
    )]
    pub adapter: Vec<AdapterMapping>,

    /// Write output to a directory (or .mdx file when converting one file)
    #[arg(
        short = 'o',
        long = "out",
        value_name = "PATH",
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub out: Option<String>,

    /// Show this help message
    #[arg(short = 'h', long = "help", action = ArgAction::SetTrue)]
    pub help: bool,
}

impl Cli {
    pub fn into_options(self) -> CliOptions {
        CliOptions {
            input: self
                .paths
                .into_iter()
                .next()
                .unwrap_or_else(|| DEFAULT_INPUT.to_string()),
            deep: self.deep,
            adapter: self.adapter.into_iter().collect(),
            output: self.out,
            help_requested: self.help,
        }
    }
}

/// Fully parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliOptions {
    pub input: String,
    pub deep: bool,
    pub adapter: FrontMatterAdapter,
    pub output: Option<String>,
    pub help_requested: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            input: DEFAULT_INPUT.to_string(),
            deep: false,
            adapter: FrontMatterAdapter::new(),
            output: None,
            help_requested: false,
        }
    }
}

impl CliOptions {
    /// The input path made absolute against `cwd`
    pub fn input_path(&self, cwd: &Path) -> PathBuf {
        absolutize(cwd, &self.input)
    }

    /// Conversion settings with the output path made absolute against `cwd`
    pub fn conversion_options(&self, cwd: &Path) -> ConversionOptions {
        let options = ConversionOptions::new()
            .with_adapter(self.adapter.clone())
            .deep(self.deep);

        match &self.output {
            Some(output) => options.with_output(absolutize(cwd, output)),
            None => options,
        }
    }
}

/// Join `path` onto `cwd` and drop `.` components
fn absolutize(cwd: &Path, path: &str) -> PathBuf {
    cwd.join(path).components().collect()
}

/// Parse command-line tokens (without the program name) into [`CliOptions`]
pub fn parse_cli_args<I, T>(args: I) -> Result<CliOptions>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let argv = normalize_args(args)?;
    let cli = Cli::try_parse_from(argv)
        .map_err(|e| ConvertError::invalid_arguments(describe_clap_error(&e)))?;
    Ok(cli.into_options())
}

/// Rewrite raw tokens into an argv clap reads the same way, program name first.
///
/// Switches and `--adapter=`/`--out=` tokens pass through in order. A value
/// flag is joined with the token after it as `--long=value`, whatever that
/// token looks like. Every other token is a positional and goes after `--`.
fn normalize_args<I, T>(args: I) -> Result<Vec<OsString>>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut flags = vec![OsString::from(BIN_NAME)];
    let mut positionals = Vec::new();
    let mut tokens = args.into_iter().map(Into::<OsString>::into);

    while let Some(token) = tokens.next() {
        let Some(text) = token.to_str().map(str::to_owned) else {
            positionals.push(token);
            continue;
        };

        if SWITCHES.contains(&text.as_str())
            || text.starts_with("--adapter=")
            || text.starts_with("--out=")
        {
            flags.push(token);
        } else if let Some((_, long)) = VALUE_FLAGS.iter().find(|(flag, _)| *flag == text) {
            let value = tokens.next().ok_or_else(|| {
                ConvertError::invalid_arguments(format!("Missing value for {text}"))
            })?;
            let mut joined = OsString::from(format!("{long}="));
            joined.push(value);
            flags.push(joined);
        } else {
            positionals.push(token);
        }
    }

    flags.push(OsString::from("--"));
    flags.extend(positionals);
    Ok(flags)
}

/// Rendered help text
pub fn help_text() -> String {
    Cli::command().render_help().to_string()
}

/// First line of a clap error, without its `error: ` prefix
fn describe_clap_error(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let first_line = rendered.lines().next().unwrap_or_default();
    first_line
        .strip_prefix("error: ")
        .unwrap_or(first_line)
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_defaults() {
        let options = parse_cli_args(Vec::<String>::new()).unwrap();
        assert_eq!(options, CliOptions::default());
        assert_eq!(options.input, "./");
    }

    #[test]
    fn test_full_command_line() {
        let options =
            parse_cli_args(["docs", "--deep", "-a", "title:pageTitle", "--out", "build"]).unwrap();

        let expected = CliOptions {
            input: "docs".to_string(),
            deep: true,
            adapter: [("title", "pageTitle")].into_iter().collect(),
            output: Some("build".to_string()),
            help_requested: false,
        };
        assert_eq!(options, expected);
    }

    #[test]
    fn test_equals_forms() {
        let options = parse_cli_args(["--adapter=draft:isDraft", "--out=dist"]).unwrap();
        assert_eq!(options.adapter.rename("draft"), "isDraft");
        assert_eq!(options.output.as_deref(), Some("dist"));
    }

    #[test]
    fn test_repeated_adapters_accumulate() {
        let options =
            parse_cli_args(["-a", "a:x", "--adapter", "b:y", "--adapter=a:z"]).unwrap();
        assert_eq!(options.adapter.len(), 2);
        assert_eq!(options.adapter.rename("a"), "z");
        assert_eq!(options.adapter.rename("b"), "y");
    }

    #[test]
    fn test_deep_last_one_wins() {
        assert!(!parse_cli_args(["--deep", "--no-deep"]).unwrap().deep);
        assert!(parse_cli_args(["--no-deep", "--deep"]).unwrap().deep);
        assert!(parse_cli_args(["--deep", "--deep"]).unwrap().deep);
    }

    #[test]
    fn test_last_out_wins() {
        let options = parse_cli_args(["-o", "first", "--out", "second"]).unwrap();
        assert_eq!(options.output.as_deref(), Some("second"));
    }

    #[test]
    fn test_only_first_positional_is_input() {
        let options = parse_cli_args(["one", "two", "three"]).unwrap();
        assert_eq!(options.input, "one");
    }

    #[test]
    fn test_unknown_dashed_tokens_are_positional() {
        let options = parse_cli_args(["docs", "--weird", "--deep"]).unwrap();
        assert_eq!(options.input, "docs");
        assert!(options.deep);

        assert_eq!(parse_cli_args(["--weird", "docs"]).unwrap().input, "--weird");
        assert_eq!(parse_cli_args(["-", "docs"]).unwrap().input, "-");
    }

    #[test]
    fn test_double_dash_is_positional() {
        let options = parse_cli_args(["--", "x", "--deep"]).unwrap();
        assert_eq!(options.input, "--");
        assert!(options.deep);
    }

    #[test]
    fn test_glued_short_value_is_positional() {
        let options = parse_cli_args(["-ofoo"]).unwrap();
        assert_eq!(options.input, "-ofoo");
        assert_eq!(options.output, None);
    }

    #[test]
    fn test_value_flag_takes_next_token_verbatim() {
        let options = parse_cli_args(["-o", "--deep", "-a", "-x:y"]).unwrap();
        assert_eq!(options.output.as_deref(), Some("--deep"));
        assert!(!options.deep);
        assert_eq!(options.adapter.rename("-x"), "y");
    }

    #[test]
    fn test_help_flags() {
        assert!(parse_cli_args(["--help"]).unwrap().help_requested);
        assert!(parse_cli_args(["docs", "-h"]).unwrap().help_requested);
    }

    #[test]
    fn test_invalid_adapter_mapping() {
        let err = parse_cli_args(["--adapter", "badtoken"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Arguments);
        assert!(err.to_string().contains("badtoken"), "{err}");
    }

    #[test]
    fn test_invalid_adapter_mapping_even_with_help() {
        assert!(parse_cli_args(["--help", "-a", ":x"]).is_err());
    }

    #[test]
    fn test_missing_flag_values() {
        for flag in ["--adapter", "-a", "--out", "-o"] {
            let err = parse_cli_args(["docs", flag]).unwrap_err();
            assert!(matches!(err, ConvertError::InvalidArguments { .. }), "{flag}");
            assert_eq!(err.to_string(), format!("Missing value for {flag}"));
        }
    }

    #[test]
    fn test_empty_out_value() {
        assert!(parse_cli_args(["--out="]).is_err());
    }

    #[test]
    fn test_absolute_paths() {
        let options = parse_cli_args(["./docs", "--out", "build"]).unwrap();
        let cwd = Path::new("/work");
        assert_eq!(options.input_path(cwd), PathBuf::from("/work/docs"));

        let conversion = options.conversion_options(cwd);
        assert_eq!(conversion.output(), Some(Path::new("/work/build")));
        assert_eq!(
            parse_cli_args(["/abs/file.md"]).unwrap().input_path(cwd),
            PathBuf::from("/abs/file.md")
        );
        assert_eq!(CliOptions::default().input_path(cwd), PathBuf::from("/work"));
    }

    #[test]
    fn test_help_text_lists_options() {
        let help = help_text();
        for flag in ["--deep", "--no-deep", "--adapter", "--out", "--help"] {
            assert!(help.contains(flag), "missing {flag}");
        }
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }
}
