//! FFprobe integration for media analysis and information extraction
//!
//! This module provides functions for executing ffprobe to analyze media
//! files and extract the properties the sampler needs: frame rate, total
//! frame count, duration, and dimensions.

use crate::error::{CoreError, CoreResult, command_failed_error, command_start_error};
use ffprobe::{FfProbeError, ffprobe};
use std::path::Path;
use std::process::Command;

/// Struct containing media information.
#[derive(Debug, Default, Clone)]
pub struct MediaInfo {
    /// Duration of the media in seconds
    pub duration: Option<f64>,
    /// Width of the video stream
    pub width: Option<i64>,
    /// Height of the video stream
    pub height: Option<i64>,
    /// Total number of frames in the video
    pub total_frames: Option<u64>,
}

/// Gets media information for a given input file.
pub fn get_media_info(input_path: &Path) -> CoreResult<MediaInfo> {
    log::debug!(
        "Running ffprobe (via crate) for media info on: {}",
        input_path.display()
    );
    match ffprobe(input_path) {
        Ok(metadata) => {
            let duration = metadata
                .format
                .duration
                .as_deref()
                .and_then(|d| d.parse::<f64>().ok());

            let mut info = MediaInfo {
                duration,
                ..Default::default()
            };

            let video_stream = metadata
                .streams
                .iter()
                .find(|s| s.codec_type.as_deref() == Some("video"))
                .ok_or_else(|| {
                    CoreError::SourceUnavailable(format!(
                        "No video stream found in {}",
                        input_path.display()
                    ))
                })?;

            info.width = video_stream.width;
            info.height = video_stream.height;

            // Get total frames from nb_frames field if available
            info.total_frames = video_stream
                .nb_frames
                .as_deref()
                .and_then(|f| f.parse::<u64>().ok());

            Ok(info)
        }
        Err(err) => {
            log::warn!("Failed to get media info: {err:?}");
            Err(map_ffprobe_error(err, "media info"))
        }
    }
}

/// Gets the native frame rate of the first video stream in frames per second.
pub fn get_frame_rate(input_path: &Path) -> CoreResult<f64> {
    let cmd_name = "ffprobe";
    let output = Command::new(cmd_name)
        .args([
            "-v",
            "error",
            "-select_streams",
            "v:0",
            "-show_entries",
            "stream=r_frame_rate",
            "-of",
            "default=noprint_wrappers=1:nokey=1",
        ])
        .arg(input_path)
        .output()
        .map_err(|e| command_start_error(cmd_name, e))?;

    if !output.status.success() {
        return Err(command_failed_error(
            cmd_name,
            output.status,
            String::from_utf8_lossy(&output.stderr).into_owned(),
        ));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let raw = stdout.trim();
    parse_frame_rate(raw).ok_or_else(|| {
        CoreError::FfprobeParse(format!(
            "Failed to parse frame rate '{}' for {}",
            raw,
            input_path.display()
        ))
    })
}

/// Parses an ffprobe rational frame rate ("30000/1001", "25/1", "30").
/// Returns None for malformed or non-positive rates.
pub(crate) fn parse_frame_rate(raw: &str) -> Option<f64> {
    let value = match raw.split_once('/') {
        Some((num, den)) => {
            let num = num.trim().parse::<f64>().ok()?;
            let den = den.trim().parse::<f64>().ok()?;
            if den == 0.0 {
                return None;
            }
            num / den
        }
        None => raw.trim().parse::<f64>().ok()?,
    };

    (value.is_finite() && value > 0.0).then_some(value)
}

fn map_ffprobe_error(err: FfProbeError, context: &str) -> CoreError {
    match err {
        FfProbeError::Io(io_err) => command_start_error(format!("ffprobe ({context})"), io_err),
        FfProbeError::Status(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            command_failed_error(format!("ffprobe ({context})"), output.status, stderr)
        }
        FfProbeError::Deserialize(err) => CoreError::JsonParse(format!(
            "ffprobe {context} output deserialization: {err}"
        )),
        _ => CoreError::FfprobeParse(format!("Unknown ffprobe error during {context}: {err:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_frame_rate_rational() {
        assert_eq!(parse_frame_rate("25/1"), Some(25.0));
        assert_eq!(parse_frame_rate("30/1"), Some(30.0));

        let ntsc = parse_frame_rate("30000/1001").expect("ntsc rate");
        assert!((ntsc - 29.97).abs() < 0.01);
    }

    #[test]
    fn test_parse_frame_rate_plain_number() {
        assert_eq!(parse_frame_rate("24"), Some(24.0));
        assert_eq!(parse_frame_rate(" 60 "), Some(60.0));
    }

    #[test]
    fn test_parse_frame_rate_rejects_invalid() {
        assert_eq!(parse_frame_rate(""), None);
        assert_eq!(parse_frame_rate("0/0"), None);
        assert_eq!(parse_frame_rate("30/0"), None);
        assert_eq!(parse_frame_rate("0/1"), None);
        assert_eq!(parse_frame_rate("abc"), None);
        assert_eq!(parse_frame_rate("-25/1"), None);
    }
}
