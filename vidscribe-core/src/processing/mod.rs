//! Pipeline orchestration.
//!
//! This module is the central hub of the vidscribe-core library: it wires
//! acquisition, audio extraction, transcription, chunking, code extraction,
//! and generation into one linear, run-to-completion pass, emitting progress
//! events throughout.

/// Audio track extraction
pub mod audio;

/// Transcript chunking
pub mod chunking;

/// Blog generation from transcript and snippets
pub mod generate;

pub use chunking::chunk_text;
pub use generate::{build_prompt, generate_blog};

use crate::config::CoreConfig;
use crate::error::{CoreError, CoreResult};
use crate::events::{Event, EventDispatcher};
use crate::extraction::{CodeExtractionEngine, ExtractionReport};
use crate::external::decoder::VideoDecoder;
use crate::external::llm::LlmClient;
use crate::external::tesseract::TextRecognizer;
use crate::external::whisper::Transcriber;
use crate::external::{check_dependency, ytdlp};
use crate::temp_files;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::time::{Duration, Instant};

/// Result of one full pipeline run.
#[derive(Debug)]
pub struct PipelineOutput {
    /// Generated blog post, absent when generation was skipped
    pub blog_markdown: Option<String>,
    /// Full transcript text
    pub transcript: String,
    /// Number of transcript chunks fed to generation
    pub chunk_count: usize,
    /// Code-extraction outcome, including the snippet collection
    pub extraction: ExtractionReport,
    /// Wall-clock time of the whole run
    pub elapsed: Duration,
}

/// Runs the full pipeline over one input (URL or local file path).
///
/// The function is generic over the external collaborators so tests and
/// alternative frontends can inject their own implementations:
/// - `D`: video decoder for the extraction engine
/// - `R`: text recognizer (OCR)
/// - `T`: speech transcriber
/// - `L`: text-generation backend; `None` skips the generation stage
///
/// Any stage failure aborts the run; per-frame extraction problems do not.
pub fn run_pipeline<D, R, T, L>(
    config: &CoreConfig,
    input: &str,
    decoder: &D,
    recognizer: R,
    transcriber: &T,
    llm: Option<&L>,
    events: &EventDispatcher,
    cancel: Arc<AtomicBool>,
) -> CoreResult<PipelineOutput>
where
    D: VideoDecoder,
    R: TextRecognizer,
    T: Transcriber,
    L: LlmClient,
{
    let start = Instant::now();
    config.validate()?;
    check_dependency("ffmpeg", "-version")?;
    check_dependency("ffprobe", "-version")?;

    events.emit(Event::PipelineStarted {
        input: input.to_string(),
    });

    // The working directory holds the downloaded video and extracted audio;
    // dropped (and removed) when the run ends, on success or failure.
    let work_dir = temp_files::create_temp_dir(config, "vidscribe_run")?;

    let video_path = resolve_input(input, work_dir.path(), events)?;

    events.emit(Event::AudioExtractionStarted);
    let wav_path = audio::extract_audio(&video_path, work_dir.path())?;
    events.emit(Event::AudioExtractionComplete {
        wav_path: wav_path.display().to_string(),
    });

    events.emit(Event::TranscriptionStarted {
        model: config.transcription.model.clone(),
    });
    let transcript = transcriber.transcribe(&wav_path)?;
    events.emit(Event::TranscriptionComplete {
        characters: transcript.len(),
    });

    let chunks = chunk_text(&transcript, &config.chunking);
    events.emit(Event::ChunkingComplete {
        chunk_count: chunks.len(),
    });

    let engine =
        CodeExtractionEngine::with_cancellation(config.extraction.clone(), recognizer, cancel)?;
    let extraction = engine.extract(decoder, &video_path, events)?;

    let blog_markdown = match llm {
        Some(client) => {
            events.emit(Event::GenerationStarted {
                model: config.generation.model.clone(),
            });
            let blog = generate_blog(client, &chunks, &extraction.snippets)?;
            events.emit(Event::GenerationComplete {
                characters: blog.len(),
            });
            Some(blog)
        }
        None => {
            log::info!("Generation stage skipped");
            None
        }
    };

    let elapsed = start.elapsed();
    events.emit(Event::PipelineComplete {
        total_time: elapsed,
    });

    Ok(PipelineOutput {
        blog_markdown,
        transcript,
        chunk_count: chunks.len(),
        extraction,
        elapsed,
    })
}

/// Turns the user-supplied input into a local video path: URLs are
/// downloaded, local paths are validated to exist.
fn resolve_input(
    input: &str,
    work_dir: &Path,
    events: &EventDispatcher,
) -> CoreResult<PathBuf> {
    if ytdlp::is_url(input) {
        events.emit(Event::DownloadStarted {
            url: input.to_string(),
        });
        let path = ytdlp::YtdlpAcquirer::new(work_dir)?.acquire(input)?;
        events.emit(Event::DownloadComplete {
            path: path.display().to_string(),
        });
        Ok(path)
    } else {
        let path = PathBuf::from(input);
        if !path.is_file() {
            return Err(CoreError::PathError(format!(
                "input video not found: {input}"
            )));
        }
        events.emit(Event::StatusUpdate {
            label: "Video".to_string(),
            value: path.display().to_string(),
        });
        Ok(path)
    }
}
