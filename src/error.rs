//! Error handling for soxfx
//!
//! Every error carries a stable code and, where possible, recovery suggestions.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for soxfx operations
pub type Result<T> = std::result::Result<T, SoxError>;

/// Main error type for soxfx operations
#[derive(Error, Debug)]
pub enum SoxError {
    // Effect Errors
    #[error("Invalid parameter '{parameter}' for effect '{effect}': {reason}")]
    InvalidParameter {
        effect: &'static str,
        parameter: &'static str,
        reason: String,
    },

    #[error("Failed to render effect #{index} ('{effect}'): {source}")]
    RenderFailure {
        index: usize,
        effect: &'static str,
        #[source]
        source: Box<SoxError>,
    },

    #[error("Effect index {index} out of range (chain has {len} effects)")]
    IndexOutOfRange { index: usize, len: usize },

    // Configuration Errors
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Failed to read file: {path}: {source}")]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}: {source}")]
    FileWriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Process Errors
    #[error("SoX binary not found: {program}")]
    BinaryNotFound {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("SoX exited with {}: {stderr}", exit_description(.status))]
    ProcessFailed { status: Option<i32>, stderr: String },

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

fn exit_description(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!("status {}", code),
        None => "a signal".to_string(),
    }
}

impl SoxError {
    /// Shorthand for building an [`SoxError::InvalidParameter`]
    pub fn invalid_parameter(
        effect: &'static str,
        parameter: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        SoxError::InvalidParameter {
            effect,
            parameter,
            reason: reason.into(),
        }
    }

    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            SoxError::InvalidParameter { .. } => "INVALID_PARAMETER",
            SoxError::RenderFailure { .. } => "RENDER_FAILURE",
            SoxError::IndexOutOfRange { .. } => "INDEX_OUT_OF_RANGE",
            SoxError::InvalidConfig { .. } => "INVALID_CONFIG",
            SoxError::FileNotFound { .. } => "FILE_NOT_FOUND",
            SoxError::FileReadError { .. } => "FILE_READ_ERROR",
            SoxError::FileWriteError { .. } => "FILE_WRITE_ERROR",
            SoxError::BinaryNotFound { .. } => "BINARY_NOT_FOUND",
            SoxError::ProcessFailed { .. } => "PROCESS_FAILED",
            SoxError::Io(_) => "IO_ERROR",
            SoxError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Check if this error is recoverable by changing input rather than code
    pub fn is_recoverable(&self) -> bool {
        match self {
            SoxError::InvalidParameter { .. } => true,
            SoxError::RenderFailure { .. } => true,
            SoxError::InvalidConfig { .. } => true,
            SoxError::FileNotFound { .. } => true,
            SoxError::BinaryNotFound { .. } => true,
            _ => false,
        }
    }

    /// Get recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            SoxError::InvalidParameter { .. } => vec![
                "Check the value against the SoX manual for this effect",
                "Numbers must be finite (no NaN or infinity)",
            ],
            SoxError::RenderFailure { source, .. } => source.recovery_suggestions(),
            SoxError::InvalidConfig { .. } => vec![
                "Check the chain file against the documented JSON layout",
                "Run 'soxfx effects' to list supported effect names",
            ],
            SoxError::FileNotFound { .. } => vec![
                "Check the file path is correct",
                "Verify the file hasn't been moved or deleted",
            ],
            SoxError::BinaryNotFound { .. } => vec![
                "Install SoX and make sure it is on PATH",
                "Set \"program\" in the chain file to the full path of the sox binary",
            ],
            SoxError::ProcessFailed { .. } => vec![
                "Read the SoX error output above for the rejected argument",
                "Run 'soxfx command' to inspect the exact argument list",
            ],
            _ => vec![],
        }
    }
}
