/// Output format enumeration for the dependency listing
///
/// Shared by the CLI, the config file, and the formatter factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One import path per line (default)
    #[default]
    Plain,
    /// Tab-separated table with a header row
    Verbose,
    /// JSON array of package objects
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" | "text" => Ok(OutputFormat::Plain),
            "verbose" | "table" => Ok(OutputFormat::Verbose),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'plain', 'verbose' or 'json'",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Verbose => write!(f, "verbose"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
