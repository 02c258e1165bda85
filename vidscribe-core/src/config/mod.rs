//! Configuration structures and constants for the vidscribe-core library.
//!
//! This module provides the configuration system for the whole pipeline:
//! frame sampling, OCR, classification, transcription, chunking, and
//! generation settings. Configuration is explicit and injectable; there is
//! no process-wide state.

mod builder;

use std::path::PathBuf;

pub use builder::CoreConfigBuilder;

use crate::error::{CoreError, CoreResult};
use crate::extraction::classifier::default_keywords;

// Default constants

/// Default gap, in seconds, between frames selected for OCR.
/// Ten seconds matches the cadence at which tutorial videos dwell on a
/// code listing; shorter intervals multiply OCR cost with little gain.
pub const DEFAULT_SAMPLE_INTERVAL_SECS: f64 = 10.0;

/// Default tesseract OCR engine mode (`--oem 3`: whatever is available).
pub const DEFAULT_OCR_ENGINE_MODE: u8 = 3;

/// Default tesseract page segmentation mode (`--psm 6`: assume a single
/// uniform block of text, which is how code listings are laid out).
pub const DEFAULT_OCR_PAGE_SEG_MODE: u8 = 6;

/// Default OCR language.
pub const DEFAULT_OCR_LANGUAGE: &str = "eng";

/// Default whisper model size.
pub const DEFAULT_WHISPER_MODEL: &str = "base";

/// Default maximum characters per transcript chunk.
pub const DEFAULT_CHUNK_SIZE: usize = 3000;

/// Default overlap between consecutive transcript chunks.
pub const DEFAULT_CHUNK_OVERLAP: usize = 200;

/// Default chat-completions endpoint.
pub const DEFAULT_LLM_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// Default model name sent to the chat-completions endpoint.
pub const DEFAULT_LLM_MODEL: &str = "gpt-4o-mini";

/// Default sampling temperature for blog generation.
pub const DEFAULT_LLM_TEMPERATURE: f32 = 0.3;

/// Default number of OCR workers (1 = fully sequential extraction).
pub const DEFAULT_OCR_WORKERS: usize = 1;

/// OCR engine settings passed through to tesseract.
#[derive(Debug, Clone)]
pub struct OcrConfig {
    /// Language passed as `-l`
    pub language: String,

    /// Engine mode passed as `--oem`
    pub engine_mode: u8,

    /// Page segmentation mode passed as `--psm`
    pub page_seg_mode: u8,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            language: DEFAULT_OCR_LANGUAGE.to_string(),
            engine_mode: DEFAULT_OCR_ENGINE_MODE,
            page_seg_mode: DEFAULT_OCR_PAGE_SEG_MODE,
        }
    }
}

/// Settings for the code-extraction subsystem.
#[derive(Debug, Clone)]
pub struct ExtractionConfig {
    /// Seconds between sampled frames
    pub sample_interval_secs: f64,

    /// OCR engine settings
    pub ocr: OcrConfig,

    /// Keyword set used by the code classifier (whole-word matches)
    pub keywords: Vec<String>,

    /// Number of parallel OCR workers; 1 keeps extraction sequential
    pub ocr_workers: usize,

    /// Optional directory receiving preprocessed frames and their verdicts.
    /// A side export for debugging; never affects extraction results.
    pub frame_dump_dir: Option<PathBuf>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            sample_interval_secs: DEFAULT_SAMPLE_INTERVAL_SECS,
            ocr: OcrConfig::default(),
            keywords: default_keywords(),
            ocr_workers: DEFAULT_OCR_WORKERS,
            frame_dump_dir: None,
        }
    }
}

/// Settings for the transcription stage.
#[derive(Debug, Clone)]
pub struct TranscriptionConfig {
    /// Whisper model size (tiny, base, small, medium, large)
    pub model: String,

    /// Optional spoken-language hint (e.g. "en")
    pub language: Option<String>,
}

impl Default for TranscriptionConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_WHISPER_MODEL.to_string(),
            language: None,
        }
    }
}

/// Settings for transcript chunking.
#[derive(Debug, Clone)]
pub struct ChunkingConfig {
    /// Maximum characters per chunk
    pub chunk_size: usize,

    /// Characters of overlap carried between consecutive chunks
    pub chunk_overlap: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_overlap: DEFAULT_CHUNK_OVERLAP,
        }
    }
}

/// Settings for the blog-generation stage.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Chat-completions endpoint URL
    pub endpoint: String,

    /// Model name sent with each request
    pub model: String,

    /// Sampling temperature
    pub temperature: f32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_LLM_ENDPOINT.to_string(),
            model: DEFAULT_LLM_MODEL.to_string(),
            temperature: DEFAULT_LLM_TEMPERATURE,
        }
    }
}

/// Main configuration structure for the vidscribe-core library.
///
/// Typically created by the consumer (e.g. vidscribe-cli) through
/// [`CoreConfigBuilder`] and passed to `run_pipeline` or handed to the
/// extraction engine at construction.
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Directory where generated artifacts are written
    pub output_dir: PathBuf,

    /// Optional directory for temporary files (defaults to `output_dir`)
    pub temp_dir: Option<PathBuf>,

    /// Code-extraction settings
    pub extraction: ExtractionConfig,

    /// Transcription settings
    pub transcription: TranscriptionConfig,

    /// Transcript chunking settings
    pub chunking: ChunkingConfig,

    /// Blog-generation settings
    pub generation: GenerationConfig,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            temp_dir: None,
            extraction: ExtractionConfig::default(),
            transcription: TranscriptionConfig::default(),
            chunking: ChunkingConfig::default(),
            generation: GenerationConfig::default(),
        }
    }
}

impl CoreConfig {
    /// Creates a configuration with defaults and the given output directory.
    pub fn new(output_dir: PathBuf) -> Self {
        Self {
            output_dir,
            ..Default::default()
        }
    }

    /// Validates the configuration, returning `InvalidConfig` on the first
    /// inconsistency found.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.extraction.sample_interval_secs.is_finite()
            || self.extraction.sample_interval_secs <= 0.0
        {
            return Err(CoreError::InvalidConfig(format!(
                "sample interval must be a positive number of seconds, got {}",
                self.extraction.sample_interval_secs
            )));
        }

        if self.extraction.ocr_workers == 0 {
            return Err(CoreError::InvalidConfig(
                "ocr_workers must be at least 1".to_string(),
            ));
        }

        if self.chunking.chunk_size == 0 {
            return Err(CoreError::InvalidConfig(
                "chunk_size must be greater than zero".to_string(),
            ));
        }

        if self.chunking.chunk_overlap >= self.chunking.chunk_size {
            return Err(CoreError::InvalidConfig(format!(
                "chunk_overlap ({}) must be smaller than chunk_size ({})",
                self.chunking.chunk_overlap, self.chunking.chunk_size
            )));
        }

        if !(0.0..=2.0).contains(&self.generation.temperature) {
            return Err(CoreError::InvalidConfig(format!(
                "temperature must be within 0.0..=2.0, got {}",
                self.generation.temperature
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(CoreConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_interval() {
        let mut config = CoreConfig::default();
        config.extraction.sample_interval_secs = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_nan_interval() {
        let mut config = CoreConfig::default();
        config.extraction.sample_interval_secs = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_workers() {
        let mut config = CoreConfig::default();
        config.extraction.ocr_workers = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_overlap_not_below_size() {
        let mut config = CoreConfig::default();
        config.chunking.chunk_size = 100;
        config.chunking.chunk_overlap = 100;
        assert!(config.validate().is_err());
    }
}
