//! Transcription abstraction and the whisper CLI transcriber.
//!
//! Speech-to-text is an external collaborator with a narrow contract: a WAV
//! file in, a transcript string out. Model internals are out of scope; only
//! the model size and an optional language hint are configurable.

use crate::config::TranscriptionConfig;
use crate::error::{CoreError, CoreResult, command_start_error};
use crate::external::check_dependency;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// A black-box speech transcriber.
pub trait Transcriber {
    /// Transcribes the given audio file and returns the full transcript text.
    fn transcribe(&self, audio_path: &Path) -> CoreResult<String>;
}

/// Concrete implementation of [`Transcriber`] using the whisper CLI.
pub struct WhisperTranscriber {
    config: TranscriptionConfig,
    work_dir: TempDir,
}

impl WhisperTranscriber {
    /// Creates a transcriber, verifying that `whisper` is on the PATH and
    /// setting up a private directory for its output files.
    pub fn new(config: TranscriptionConfig) -> CoreResult<Self> {
        check_dependency("whisper", "--help")?;
        let work_dir = tempfile::tempdir()?;
        Ok(Self { config, work_dir })
    }

    fn transcript_path_for(&self, audio_path: &Path) -> CoreResult<std::path::PathBuf> {
        let stem = audio_path
            .file_stem()
            .ok_or_else(|| {
                CoreError::PathError(format!(
                    "audio path has no file stem: {}",
                    audio_path.display()
                ))
            })?
            .to_string_lossy();
        Ok(self.work_dir.path().join(format!("{stem}.txt")))
    }
}

impl Transcriber for WhisperTranscriber {
    fn transcribe(&self, audio_path: &Path) -> CoreResult<String> {
        log::info!(
            "Transcribing {} with whisper model '{}'",
            audio_path.display(),
            self.config.model
        );

        let mut cmd = Command::new("whisper");
        cmd.arg(audio_path)
            .args(["--model", &self.config.model])
            .args(["--output_format", "txt"])
            .args(["--output_dir"])
            .arg(self.work_dir.path())
            .args(["--fp16", "False"])
            .args(["--verbose", "False"]);
        if let Some(language) = &self.config.language {
            cmd.args(["--language", language]);
        }

        let output = cmd
            .output()
            .map_err(|e| command_start_error("whisper", e))?;

        if !output.status.success() {
            return Err(CoreError::TranscriptionFailed(format!(
                "whisper exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        let transcript_path = self.transcript_path_for(audio_path)?;
        let transcript = fs::read_to_string(&transcript_path).map_err(|e| {
            CoreError::TranscriptionFailed(format!(
                "whisper produced no transcript at {}: {}",
                transcript_path.display(),
                e
            ))
        })?;

        Ok(transcript.trim().to_string())
    }
}
