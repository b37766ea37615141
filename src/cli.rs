use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

use godi::config::ConfigFile;
use godi::prelude::{OutputFormat, Result, DEFAULT_GO_COMMAND};
use godi::shared::go_bool::parse_go_bool;

/// Go's flag package spelling of `--help`
const GO_HELP_FLAG: &str = "-help";

const NOTICE: &str = "\
Notice:
  1) The \"go\" command must be installed (or given with --go-command).
  2) The package argument must be placed at the end of the command line.
  3) The package to check must be available to the go toolchain.
  4) Without a package argument, godi lists the package in the current directory.

Configuration is read from ./godi.config.yml when present; command-line flags win.
Set GODI_LOG=debug to trace every go invocation.";

pub const EXAMPLES: &str = "\
Examples:

1) List what the builtin package \"log\" imports directly:

    godi log

2) List what \"log\" and everything it imports depend on:

    godi -a log

3) List what \"net/http\" imports directly, without its sub-packages:

    godi -s=false net/http

   \"net/http/internal\" no longer shows in the result.

4) List what \"github.com/m3ng9i/feedreader\" imports directly, without builtin packages:

    godi -b=false github.com/m3ng9i/feedreader

5) Show all dependency information of \"github.com/m3ng9i/go-utils/cmd\" as a table:

    godi -v -a github.com/m3ng9i/go-utils/cmd | column -t

6) List what \"bufio\" imports directly as JSON:

    godi -j bufio
";

/// List the packages a Go package depends on
#[derive(Parser, Debug)]
#[command(name = "godi")]
#[command(version)]
#[command(about = "Godi: go package dependency information", long_about = None)]
#[command(after_help = NOTICE)]
pub struct Args {
    /// Get information on all (recursively) imported packages instead of
    /// only the directly imported ones
    #[arg(short = 'a', long = "all")]
    pub all: bool,

    /// Include builtin packages in the result [default: true]
    #[arg(
        short = 'b',
        long = "builtin",
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = parse_bool_flag
    )]
    pub builtin: Option<bool>,

    /// Include sub-packages in the result [default: true]
    #[arg(
        short = 's',
        long = "subpkg",
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = parse_bool_flag
    )]
    pub subpkg: Option<bool>,

    /// Show a verbose, tab-separated table
    #[arg(short = 'v', long = "verbose", conflicts_with = "json")]
    pub verbose: bool,

    /// Show the result as JSON
    #[arg(short = 'j', long = "json")]
    pub json: bool,

    /// Show usage examples
    #[arg(short = 'e', long = "examples")]
    pub examples: bool,

    /// Maximum characters of package paths per metadata query (minimum 200)
    #[arg(long = "max-chars", value_name = "N")]
    pub max_chars: Option<usize>,

    /// Abort any single go invocation running longer than this many seconds
    #[arg(long = "timeout", value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Go command to run (name on PATH or path to the binary)
    #[arg(long = "go-command", value_name = "PATH")]
    pub go_command: Option<String>,

    /// Path to a config file (defaults to ./godi.config.yml when present)
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Import path of the package to inspect
    #[arg(value_name = "PACKAGE")]
    pub package: Option<String>,
}

/// Effective settings after merging flags, config file and defaults
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub package: Option<String>,
    pub include_all: bool,
    pub include_builtin: bool,
    pub include_sub_packages: bool,
    pub format: OutputFormat,
    pub max_chars: Option<usize>,
    pub timeout: Option<Duration>,
    pub go_command: String,
    pub output: Option<PathBuf>,
    pub quiet: bool,
}

impl Settings {
    /// Progress lines and the batch bar are only drawn for a terminal
    pub fn shows_progress(&self, stderr_is_terminal: bool) -> bool {
        !self.quiet && stderr_is_terminal
    }
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_help_alias(std::env::args_os()))
    }

    /// Merges the flags with an optional config file.
    ///
    /// Flags given on the command line take precedence over the file, which
    /// takes precedence over the defaults.
    pub fn into_settings(self, config: Option<ConfigFile>) -> Result<Settings> {
        let config = config.unwrap_or_default();

        let format = if self.verbose {
            OutputFormat::Verbose
        } else if self.json {
            OutputFormat::Json
        } else {
            config.output_format()?.unwrap_or_default()
        };

        Ok(Settings {
            package: self.package,
            include_all: self.all || config.all.unwrap_or(false),
            include_builtin: self.builtin.or(config.builtin).unwrap_or(true),
            include_sub_packages: self.subpkg.or(config.subpkg).unwrap_or(true),
            format,
            max_chars: self.max_chars.or(config.max_chars),
            timeout: self
                .timeout
                .or(config.timeout_secs)
                .map(Duration::from_secs),
            go_command: self
                .go_command
                .or(config.go_command)
                .unwrap_or_else(|| DEFAULT_GO_COMMAND.to_string()),
            output: self.output,
            quiet: self.quiet || config.quiet.unwrap_or(false),
        })
    }
}

/// Rewrites `-help` to `--help`, which clap would otherwise read as `-h -e -l -p`
fn normalize_help_alias<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args = args.into_iter();
    // The program name is never rewritten
    args.next()
        .into_iter()
        .chain(args.map(|arg| {
            if arg == GO_HELP_FLAG {
                OsString::from("--help")
            } else {
                arg
            }
        }))
        .collect()
}

/// Accepts the boolean spellings Go's flag package understands
fn parse_bool_flag(value: &str) -> std::result::Result<bool, String> {
    parse_go_bool(value).ok_or_else(|| {
        format!(
            "invalid boolean value '{}' (use true or false)",
            value
        )
    })
}
