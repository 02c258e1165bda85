//! Video acquisition via the yt-dlp CLI.
//!
//! Downloads a remote video into the run's working directory and hands back
//! a local file path. The rest of the pipeline only ever sees local files.

use crate::error::{CoreError, CoreResult, command_start_error};
use crate::external::check_dependency;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Format selector asking for an mp4 the video backend can decode directly.
pub const YTDLP_FORMAT: &str = "bestvideo[ext=mp4]+bestaudio[ext=m4a]/best[ext=mp4]";

/// Returns true if the input string is a URL rather than a local path.
pub fn is_url(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}

/// Downloads videos with yt-dlp into a fixed working directory.
pub struct YtdlpAcquirer {
    work_dir: PathBuf,
}

impl YtdlpAcquirer {
    /// Creates an acquirer, verifying that `yt-dlp` is on the PATH.
    pub fn new(work_dir: &Path) -> CoreResult<Self> {
        check_dependency("yt-dlp", "--version")?;
        Ok(Self {
            work_dir: work_dir.to_path_buf(),
        })
    }

    /// Downloads the video at `url` and returns the local file path.
    pub fn acquire(&self, url: &str) -> CoreResult<PathBuf> {
        let output_path = self.work_dir.join("source_video.mp4");

        log::info!("Downloading video from {}", url);
        let output = Command::new("yt-dlp")
            .args(["-f", YTDLP_FORMAT, "--quiet", "--no-progress", "-o"])
            .arg(&output_path)
            .arg(url)
            .output()
            .map_err(|e| command_start_error("yt-dlp", e))?;

        if !output.status.success() {
            return Err(CoreError::DownloadFailed(format!(
                "yt-dlp exited with {} for {}: {}",
                output.status,
                url,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        if !output_path.is_file() {
            return Err(CoreError::DownloadFailed(format!(
                "yt-dlp reported success but produced no file for {}",
                url
            )));
        }

        log::debug!("Video downloaded to {}", output_path.display());
        Ok(output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_url() {
        assert!(is_url("https://www.youtube.com/watch?v=abc123"));
        assert!(is_url("http://example.com/video.mp4"));
        assert!(!is_url("/home/user/video.mp4"));
        assert!(!is_url("video.mp4"));
        assert!(!is_url("ftp://example.com/video.mp4"));
    }
}
