use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Finding a flagged package is not an error: the scan itself succeeded,
/// so the exit code only reflects whether the run could be completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Scan completed (regardless of findings)
    Success = 0,
    /// Application error (missing lockfile, invalid JSON, no queries, bad config, ...)
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

/// Application-specific errors for lockfile scanning.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("package-lock.json not found at '{path}'\n\n💡 Hint: {suggestion}")]
    LockfileNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse package-lock.json: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file is a valid npm lockfile")]
    LockfileParseError { path: PathBuf, details: String },

    #[error("Failed to read packages file '{path}'\nDetails: {details}\n\n💡 Hint: The packages file must be a JSON array of \"name@version\" strings")]
    QueryListReadError { path: PathBuf, details: String },

    #[error("Invalid package '{input}': {reason}")]
    InvalidQuery { input: String, reason: String },

    #[error("No packages specified.\n\n💡 Hint: Use one of the following methods:\n  scnpm badpak.json\n  scnpm --packages-file badpak.json\n  scnpm --packages package@1.0.0,another@2.0.0\n  scnpm package@1.0.0 another@2.0.0")]
    NoQueries,

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

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
    fn test_lockfile_not_found_display() {
        let error = ScanError::LockfileNotFound {
            path: PathBuf::from("/test/path/package-lock.json"),
            suggestion: "Test suggestion".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("package-lock.json not found"));
        assert!(display.contains("/test/path/package-lock.json"));
        assert!(display.contains("💡 Hint:"));
        assert!(display.contains("Test suggestion"));
    }

    #[test]
    fn test_lockfile_parse_error_display() {
        let error = ScanError::LockfileParseError {
            path: PathBuf::from("/test/package-lock.json"),
            details: "expected value at line 1 column 1".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to parse package-lock.json"));
        assert!(display.contains("expected value at line 1 column 1"));
    }

    #[test]
    fn test_query_list_read_error_display() {
        let error = ScanError::QueryListReadError {
            path: PathBuf::from("badpak.json"),
            details: "No such file or directory".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to read packages file 'badpak.json'"));
        assert!(display.contains("JSON array"));
    }

    #[test]
    fn test_invalid_query_display() {
        let error = ScanError::InvalidQuery {
            input: "react".to_string(),
            reason: "invalid format, expected package@version".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Invalid package 'react': invalid format, expected package@version"
        );
    }

    #[test]
    fn test_no_queries_lists_usage() {
        let display = format!("{}", ScanError::NoQueries);
        assert!(display.contains("No packages specified"));
        assert!(display.contains("scnpm --packages-file badpak.json"));
    }

    #[test]
    fn test_security_error_display() {
        let error = ScanError::SecurityError {
            path: PathBuf::from("/test/symlink"),
            reason: "Symbolic links are not allowed".to_string(),
            hint: "Use a regular file instead".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Security violation"));
        assert!(display.contains("Use a regular file instead"));
    }
}
