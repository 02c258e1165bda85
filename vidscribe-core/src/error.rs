//! Error types for the vidscribe-core library.
//!
//! Only hard failures propagate out of a pipeline run: an unopenable video
//! source, a failed required stage, or an injected cancellation. Per-frame
//! problems during code extraction are absorbed by the engine and surface
//! only as log entries and counters.

use std::process::ExitStatus;
use thiserror::Error;

/// Custom error types for vidscribe
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Video source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Invalid frame: {0}")]
    InvalidFrame(String),

    #[error("Text recognition failed: {0}")]
    RecognitionFailed(String),

    #[error("Video download failed: {0}")]
    DownloadFailed(String),

    #[error("Transcription failed: {0}")]
    TranscriptionFailed(String),

    #[error("Blog generation failed: {0}")]
    GenerationFailed(String),

    #[error("Required external tool not found: {0}")]
    DependencyNotFound(String),

    #[error("Failed to start command '{0}': {1}")]
    CommandStart(String, std::io::Error),

    #[error("Command '{0}' failed with status {1}: {2}")]
    CommandFailed(String, ExitStatus, String),

    #[error("ffprobe output parsing failed: {0}")]
    FfprobeParse(String),

    #[error("JSON parsing failed: {0}")]
    JsonParse(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid path: {0}")]
    PathError(String),

    #[error("Operation cancelled")]
    Cancelled,

    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

/// Result type for vidscribe operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Creates a `CommandStart` error for a command that could not be spawned.
pub fn command_start_error(tool: impl Into<String>, err: std::io::Error) -> CoreError {
    CoreError::CommandStart(tool.into(), err)
}

/// Creates a `CommandFailed` error for a command that exited unsuccessfully.
pub fn command_failed_error(
    tool: impl Into<String>,
    status: ExitStatus,
    stderr: impl Into<String>,
) -> CoreError {
    CoreError::CommandFailed(tool.into(), status, stderr.into())
}

