//! Core library for turning tutorial videos into blog posts.
//!
//! This crate orchestrates five external capabilities — video acquisition,
//! audio extraction, speech transcription, on-screen code recognition, and
//! text generation — into one linear pipeline. The self-contained part is
//! the code-extraction subsystem in [`extraction`]: frame sampling,
//! binarization, code-likeness classification, and snippet deduplication.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use vidscribe_core::config::CoreConfigBuilder;
//! use vidscribe_core::events::EventDispatcher;
//! use vidscribe_core::external::{
//!     ChatCompletionClient, SidecarDecoder, TesseractRecognizer, WhisperTranscriber,
//! };
//! use vidscribe_core::run_pipeline;
//! use std::path::PathBuf;
//! use std::sync::Arc;
//! use std::sync::atomic::AtomicBool;
//!
//! let config = CoreConfigBuilder::new()
//!     .output_dir(PathBuf::from("out"))
//!     .sample_interval_secs(10.0)
//!     .build();
//!
//! let recognizer = TesseractRecognizer::new(config.extraction.ocr.clone()).unwrap();
//! let transcriber = WhisperTranscriber::new(config.transcription.clone()).unwrap();
//! let llm = ChatCompletionClient::new(&config.generation, "api-key").unwrap();
//!
//! let output = run_pipeline(
//!     &config,
//!     "https://www.youtube.com/watch?v=example",
//!     &SidecarDecoder,
//!     recognizer,
//!     &transcriber,
//!     Some(&llm),
//!     &EventDispatcher::new(),
//!     Arc::new(AtomicBool::new(false)),
//! )
//! .unwrap();
//! println!("{}", output.blog_markdown.unwrap_or_default());
//! ```

pub mod config;
pub mod error;
pub mod events;
pub mod external;
pub mod extraction;
pub mod processing;
pub mod temp_files;
pub mod utils;

// Re-exports for public API
pub use config::CoreConfig;
pub use error::{CoreError, CoreResult};
pub use extraction::{CodeExtractionEngine, ExtractionReport, SnippetCollection};
pub use processing::{PipelineOutput, run_pipeline};
pub use utils::{format_bytes, format_duration};
