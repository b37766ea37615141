use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Every failure is terminal, so only three codes exist: success,
/// an application error (including "no information"), and bad arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - at least one package was listed
    Success = 0,
    /// Application error (go missing, query failure, malformed output, empty result)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for dependency listing.
///
/// None of these are retried: each one ends the current invocation.
#[derive(Debug, Error)]
pub enum GodiError {
    #[error("Command \"{command}\" not found\n\n💡 Hint: Install Go or point --go-command at the go binary")]
    ToolUnavailable { command: String },

    #[error("\"{command}\" failed: {details}")]
    QueryFailed { command: String, details: String },

    #[error("Malformed output from \"{command}\": {details}")]
    MalformedResponse { command: String, details: String },

    #[error("\"{command}\" did not finish within {seconds} second(s)")]
    QueryTimeout { command: String, seconds: u64 },

    #[error("Invalid batch limit: {value} (minimum: {minimum})")]
    InvalidBatchLimit { value: usize, minimum: usize },

    #[error("Failed to load config file: {path}\nDetails: {details}\n\n💡 Hint: {hint}")]
    ConfigError {
        path: PathBuf,
        details: String,
        hint: String,
    },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (1)"
        );
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
    }

    #[test]
    fn test_tool_unavailable_display() {
        let error = GodiError::ToolUnavailable {
            command: "go".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Command \"go\" not found"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_query_failed_display() {
        let error = GodiError::QueryFailed {
            command: "go list -json foo".to_string(),
            details: "can't load package: package foo: cannot find package".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("go list -json foo"));
        assert!(display.contains("cannot find package"));
    }

    #[test]
    fn test_malformed_response_display() {
        let error = GodiError::MalformedResponse {
            command: "go list".to_string(),
            details: "line 2 is missing ':'".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Malformed output"));
        assert!(display.contains("line 2 is missing ':'"));
    }

    #[test]
    fn test_query_timeout_display() {
        let error = GodiError::QueryTimeout {
            command: "go list".to_string(),
            seconds: 30,
        };
        assert!(format!("{}", error).contains("30 second(s)"));
    }

    #[test]
    fn test_invalid_batch_limit_display() {
        let error = GodiError::InvalidBatchLimit {
            value: 199,
            minimum: 200,
        };
        let display = format!("{}", error);
        assert!(display.contains("199"));
        assert!(display.contains("minimum: 200"));
    }

    #[test]
    fn test_config_error_display() {
        let error = GodiError::ConfigError {
            path: PathBuf::from("/test/godi.config.yml"),
            details: "invalid type".to_string(),
            hint: "Ensure the file contains valid YAML syntax.".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("/test/godi.config.yml"));
        assert!(display.contains("invalid type"));
        assert!(display.contains("valid YAML"));
    }
}
