use std::fmt;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish between invalid invocations
/// and failures while talking to the remote services.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (invalid filter, remote API error, config error, etc.)
    ApplicationError = 3,
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
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for the bug portal.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum PortalError {
    #[error("Missing required parameter: {name}\n\n💡 Hint: Please specify a value for '{name}'")]
    MissingParameter { name: String },

    #[error("Invalid value '{value}' for parameter '{name}'\n\n💡 Hint: Allowed values are: {allowed}")]
    DisallowedValue {
        name: String,
        value: String,
        allowed: String,
    },

    #[error("Failed to {operation} from the bug tracker\nDetails: {details}\n\n💡 Hint: The bug tracker may be overloaded; please retry later")]
    FetchFailed { operation: String, details: String },

    /// Validation error for builder patterns and configuration values
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl PortalError {
    /// Convenience constructor for transport-level failures
    pub fn fetch_failed(operation: &str, details: impl fmt::Display) -> Self {
        PortalError::FetchFailed {
            operation: operation.to_string(),
            details: details.to_string(),
        }
    }
}
