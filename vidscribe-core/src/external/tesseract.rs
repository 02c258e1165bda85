//! OCR abstraction and the tesseract CLI recognizer.
//!
//! The engine treats text recognition as a black box: binary image in, raw
//! text out. The production implementation writes the preprocessed frame as
//! a PNG and shells out to `tesseract`, with the engine and page-segmentation
//! modes taken from [`OcrConfig`]. PSM 6 (a single uniform block of text)
//! matches the dense single-column layout of code listings.

use crate::config::OcrConfig;
use crate::error::{CoreError, CoreResult, command_start_error};
use crate::external::check_dependency;
use crate::extraction::preprocess::PreprocessedFrame;
use crate::temp_files;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

/// A black-box text recognizer. `Send + Sync` so the OCR worker pool can
/// share one instance across threads.
pub trait TextRecognizer: Send + Sync {
    /// Recognizes text in a preprocessed frame, returning the raw OCR output
    /// trimmed of surrounding whitespace.
    fn recognize(&self, frame: &PreprocessedFrame) -> CoreResult<String>;
}

/// Concrete implementation of [`TextRecognizer`] using the tesseract CLI.
pub struct TesseractRecognizer {
    config: OcrConfig,
    work_dir: TempDir,
}

impl TesseractRecognizer {
    /// Creates a recognizer, verifying that `tesseract` is on the PATH and
    /// setting up a private scratch directory for OCR input images.
    pub fn new(config: OcrConfig) -> CoreResult<Self> {
        check_dependency("tesseract", "--version")?;
        let work_dir = tempfile::tempdir()?;
        Ok(Self { config, work_dir })
    }
}

impl TextRecognizer for TesseractRecognizer {
    fn recognize(&self, frame: &PreprocessedFrame) -> CoreResult<String> {
        let image_path = temp_files::create_temp_file_path(self.work_dir.path(), "ocr_frame", "png");
        frame.image.save(&image_path).map_err(|e| {
            CoreError::RecognitionFailed(format!(
                "failed to write OCR input image for frame {}: {}",
                frame.index, e
            ))
        })?;

        let result = Command::new("tesseract")
            .arg(&image_path)
            .arg("stdout")
            .args(["-l", &self.config.language])
            .args(["--oem", &self.config.engine_mode.to_string()])
            .args(["--psm", &self.config.page_seg_mode.to_string()])
            .output()
            .map_err(|e| command_start_error("tesseract", e));

        // The scratch image is per-call; remove it regardless of outcome.
        let _ = fs::remove_file(&image_path);

        let output = result?;
        if !output.status.success() {
            return Err(CoreError::RecognitionFailed(format!(
                "tesseract exited with {} on frame {}: {}",
                output.status,
                frame.index,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}
