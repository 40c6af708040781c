use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Comparison rendered (an empty result is still a success)
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (catalog, config or file I/O problem)
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

/// Errors raised by the comparison engine and its adapters.
///
/// `InvalidField` and `InvalidValue` are the edit-boundary validation
/// failures; none of them leave the state they guard modified.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ComparatorError {
    #[error("Field '{field}' cannot hold a custom benchmark\n\n💡 Hint: Only throughput metrics and Max Sessions accept custom values")]
    InvalidField { field: String },

    #[error("Invalid benchmark value: '{input}'\n\n💡 Hint: Enter a number (Mbps for throughput, a plain count for Max Sessions)")]
    InvalidValue { input: String },

    #[error("Unknown appliance: {id}")]
    UnknownAppliance { id: String },

    #[error("Unknown vendor: {key}")]
    UnknownVendor { key: String },

    #[error("Unknown tier: {key}\n\n💡 Hint: Use one of soho, smb, midmarket, enterprise, datacenter")]
    UnknownTier { key: String },

    #[error("Unknown form factor: {key}\n\n💡 Hint: Use one of desktop, 1u, 2u")]
    UnknownFormFactor { key: String },

    #[error("Unknown sort key: {key}\n\n💡 Hint: Sort keys use the column keys, e.g. fwThroughput or maxSessions")]
    UnknownSortKey { key: String },

    #[error("Duplicate appliance id in catalog: {id}")]
    DuplicateAppliance { id: String },

    #[error("Failed to parse catalog: {source_name}\nDetails: {details}\n\n💡 Hint: Please verify that the catalog is a JSON document with 'vendors' and 'appliances'")]
    CatalogParseError { source_name: String, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },
}
