//! Builder pattern for [`CoreConfig`].
//!
//! Provides a fluent API for assembling a configuration from scattered CLI
//! arguments without exposing every nested struct to the caller.

use std::path::PathBuf;

use super::CoreConfig;

/// Builder for creating [`CoreConfig`] instances.
///
/// # Examples
///
/// ```rust
/// use vidscribe_core::config::CoreConfigBuilder;
/// use std::path::PathBuf;
///
/// let config = CoreConfigBuilder::new()
///     .output_dir(PathBuf::from("out"))
///     .sample_interval_secs(5.0)
///     .ocr_language("eng")
///     .whisper_model("small")
///     .llm_model("gpt-4o-mini")
///     .build();
/// assert_eq!(config.extraction.sample_interval_secs, 5.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CoreConfigBuilder {
    config: CoreConfig,
}

impl CoreConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directory where generated artifacts are written.
    pub fn output_dir(mut self, output_dir: PathBuf) -> Self {
        self.config.output_dir = output_dir;
        self
    }

    /// Sets the directory for temporary files.
    pub fn temp_dir(mut self, temp_dir: PathBuf) -> Self {
        self.config.temp_dir = Some(temp_dir);
        self
    }

    /// Sets the gap in seconds between sampled frames.
    pub fn sample_interval_secs(mut self, interval: f64) -> Self {
        self.config.extraction.sample_interval_secs = interval;
        self
    }

    /// Sets the OCR language.
    pub fn ocr_language(mut self, language: &str) -> Self {
        self.config.extraction.ocr.language = language.to_string();
        self
    }

    /// Sets the tesseract engine mode (`--oem`).
    pub fn ocr_engine_mode(mut self, mode: u8) -> Self {
        self.config.extraction.ocr.engine_mode = mode;
        self
    }

    /// Sets the tesseract page segmentation mode (`--psm`).
    pub fn ocr_page_seg_mode(mut self, mode: u8) -> Self {
        self.config.extraction.ocr.page_seg_mode = mode;
        self
    }

    /// Replaces the classifier keyword set.
    pub fn keywords(mut self, keywords: Vec<String>) -> Self {
        self.config.extraction.keywords = keywords;
        self
    }

    /// Sets the number of parallel OCR workers.
    pub fn ocr_workers(mut self, workers: usize) -> Self {
        self.config.extraction.ocr_workers = workers;
        self
    }

    /// Enables the preprocessed-frame debug dump into the given directory.
    pub fn frame_dump_dir(mut self, dir: PathBuf) -> Self {
        self.config.extraction.frame_dump_dir = Some(dir);
        self
    }

    /// Sets the whisper model size.
    pub fn whisper_model(mut self, model: &str) -> Self {
        self.config.transcription.model = model.to_string();
        self
    }

    /// Sets the spoken-language hint for transcription.
    pub fn whisper_language(mut self, language: &str) -> Self {
        self.config.transcription.language = Some(language.to_string());
        self
    }

    /// Sets the maximum characters per transcript chunk.
    pub fn chunk_size(mut self, size: usize) -> Self {
        self.config.chunking.chunk_size = size;
        self
    }

    /// Sets the overlap between consecutive transcript chunks.
    pub fn chunk_overlap(mut self, overlap: usize) -> Self {
        self.config.chunking.chunk_overlap = overlap;
        self
    }

    /// Sets the chat-completions endpoint URL.
    pub fn llm_endpoint(mut self, endpoint: &str) -> Self {
        self.config.generation.endpoint = endpoint.to_string();
        self
    }

    /// Sets the model name sent to the chat-completions endpoint.
    pub fn llm_model(mut self, model: &str) -> Self {
        self.config.generation.model = model.to_string();
        self
    }

    /// Sets the sampling temperature for generation.
    pub fn llm_temperature(mut self, temperature: f32) -> Self {
        self.config.generation.temperature = temperature;
        self
    }

    /// Builds the final [`CoreConfig`].
    pub fn build(self) -> CoreConfig {
        self.config
    }
}
