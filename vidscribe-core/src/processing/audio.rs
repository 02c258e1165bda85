//! Audio extraction from the source video.
//!
//! Produces a mono 16 kHz WAV file, the input format the transcriber is
//! tuned for. One ffmpeg invocation, fatal on failure: without audio there
//! is nothing to transcribe.

use crate::error::{CoreError, CoreResult, command_failed_error};
use ffmpeg_sidecar::command::FfmpegCommand;
use std::path::{Path, PathBuf};

/// Extracts the audio track of `input` into `<work_dir>/audio.wav`.
pub fn extract_audio(input: &Path, work_dir: &Path) -> CoreResult<PathBuf> {
    let wav_path = work_dir.join("audio.wav");

    let mut cmd = FfmpegCommand::new();
    cmd.hide_banner();
    cmd.overwrite();
    cmd.input(input.to_string_lossy().as_ref());
    cmd.arg("-vn");
    cmd.arg("-ac");
    cmd.arg("1");
    cmd.arg("-ar");
    cmd.arg("16000");
    cmd.output(wav_path.to_string_lossy().as_ref());

    log::debug!("Running audio extraction command: {:?}", cmd);

    let mut child = cmd.spawn().map_err(|e| {
        CoreError::OperationFailed(format!("failed to start ffmpeg (audio extraction): {e}"))
    })?;
    let status = child.wait().map_err(|e| {
        CoreError::OperationFailed(format!("failed to wait for ffmpeg (audio extraction): {e}"))
    })?;

    if !status.success() {
        log::error!("Audio extraction failed: {}", status);
        return Err(command_failed_error(
            "ffmpeg (audio extraction)",
            status,
            "audio extraction process failed",
        ));
    }

    log::debug!("Audio extracted to {}", wav_path.display());
    Ok(wav_path)
}
