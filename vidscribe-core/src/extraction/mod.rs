//! On-screen code extraction.
//!
//! This subsystem turns a video into a set of unique code snippets:
//! a sampler selects frames at a fixed time interval, each sampled frame is
//! binarized for OCR, the recognized text is filtered through a code-likeness
//! classifier, and accepted snippets are deduplicated by exact text. The
//! engine coordinates one run-to-completion pass over a single video.

pub mod classifier;
pub mod engine;
pub mod preprocess;
pub mod sampler;
pub mod snippets;

pub use classifier::{CodeClassifier, default_keywords};
pub use engine::{CodeExtractionEngine, ExtractionReport, RecognizedText};
pub use preprocess::{PreprocessedFrame, preprocess};
pub use sampler::{FrameSampler, expected_samples, sample_step};
pub use snippets::{SnippetCollection, SnippetStore};
