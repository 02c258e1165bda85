// ============================================================================
// vidscribe-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with External CLI Tools and Services
//
// This module encapsulates interactions with the external capabilities the
// pipeline orchestrates: ffmpeg/ffprobe for decoding and analysis, yt-dlp for
// acquisition, tesseract for text recognition, whisper for transcription, and
// the chat-completions endpoint for generation. It provides abstractions
// through traits and concrete implementations to make these external
// dependencies testable and maintainable.
//
// DESIGN PHILOSOPHY:
// This module follows the dependency injection pattern, allowing consumers to
// provide their own implementations of the traits for testing or specialized
// behavior. The default implementations shell out to the real tools.

// ---- Internal crate imports ----
use crate::error::{CoreError, CoreResult};

// ---- Standard library imports ----
use std::io;
use std::process::{Command, Stdio};

// ============================================================================
// SUBMODULES
// ============================================================================

/// Video decoding traits and the ffmpeg-sidecar frame stream
pub mod decoder;

/// Chat-completions client for blog generation
pub mod llm;

/// ffprobe-based media analysis
pub mod probe;

/// OCR traits and the tesseract CLI recognizer
pub mod tesseract;

/// Transcription traits and the whisper CLI transcriber
pub mod whisper;

/// Video acquisition via yt-dlp
pub mod ytdlp;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use decoder::{Frame, FrameStream, SidecarDecoder, SourceMetadata, VideoDecoder};
pub use llm::{ChatCompletionClient, LlmClient};
pub use probe::{MediaInfo, get_frame_rate, get_media_info};
pub use tesseract::{TesseractRecognizer, TextRecognizer};
pub use whisper::{Transcriber, WhisperTranscriber};
pub use ytdlp::{YtdlpAcquirer, is_url};

// ============================================================================
// DEPENDENCY CHECKING
// ============================================================================

/// Checks if a required external command is available and executable.
///
/// Runs the command with its version argument to verify that it exists and
/// starts. Used up front so a missing tool surfaces as `DependencyNotFound`
/// before any work begins.
pub fn check_dependency(cmd_name: &str, version_arg: &str) -> CoreResult<()> {
    let result = Command::new(cmd_name)
        .arg(version_arg)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match result {
        Ok(_) => {
            log::debug!("Found dependency: {}", cmd_name);
            Ok(())
        }
        Err(e) => {
            if e.kind() == io::ErrorKind::NotFound {
                log::warn!("Dependency '{}' not found.", cmd_name);
                Err(CoreError::DependencyNotFound(cmd_name.to_string()))
            } else {
                log::error!(
                    "Failed to start dependency check command '{}': {}",
                    cmd_name,
                    e
                );
                Err(CoreError::CommandStart(cmd_name.to_string(), e))
            }
        }
    }
}
