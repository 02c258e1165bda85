//! Code-extraction engine: one run-to-completion pass over a single video.
//!
//! The engine moves through `Opening -> Sampling -> Closed`, with `Failed`
//! reachable from either. Opening the source is the only fatal step: once
//! sampling starts, every per-frame problem (an unusable frame, an OCR
//! error) is logged, counted, and skipped, so a single corrupt frame can
//! never abort extraction of the rest of the video. The video source is
//! released on every exit path; the stream's `Drop` terminates the decoder.
//!
//! Multiple engines over different videos may run independently; nothing
//! here is shared mutable state.

use crate::config::ExtractionConfig;
use crate::error::{CoreError, CoreResult};
use crate::events::{Event, EventDispatcher};
use crate::extraction::classifier::CodeClassifier;
use crate::extraction::preprocess::{PreprocessedFrame, preprocess};
use crate::extraction::sampler::{FrameSampler, expected_samples};
use crate::extraction::snippets::{SnippetCollection, SnippetStore};
use crate::external::decoder::{Frame, FrameStream, VideoDecoder};
use crate::external::tesseract::TextRecognizer;
use rayon::iter::{ParallelBridge, ParallelIterator};
use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// Raw OCR output for one sampled frame, tagged with its origin for tracing.
#[derive(Debug, Clone)]
pub struct RecognizedText {
    pub frame_index: u64,
    pub text: String,
}

/// Outcome of one extraction pass.
#[derive(Debug, Clone)]
pub struct ExtractionReport {
    /// Unique snippets accepted over the whole pass
    pub snippets: SnippetCollection,
    /// Sampled frames that entered the preprocess/recognize/classify chain
    pub frames_sampled: u64,
    /// Sampled frames skipped because they were unusable
    pub invalid_frames: u64,
    /// Sampled frames skipped because OCR failed on them
    pub recognition_failures: u64,
    /// Recognitions discarded by the classifier
    pub rejected_texts: u64,
}

#[derive(Debug, Default)]
struct Counters {
    sampled: AtomicU64,
    invalid: AtomicU64,
    failures: AtomicU64,
    rejected: AtomicU64,
}

/// Coordinates sampler, preprocessor, recognizer, classifier, and store over
/// an entire video.
pub struct CodeExtractionEngine<R: TextRecognizer> {
    config: ExtractionConfig,
    recognizer: R,
    classifier: CodeClassifier,
    cancel: Arc<AtomicBool>,
}

impl<R: TextRecognizer> CodeExtractionEngine<R> {
    /// Creates an engine with its own cancellation flag.
    pub fn new(config: ExtractionConfig, recognizer: R) -> CoreResult<Self> {
        Self::with_cancellation(config, recognizer, Arc::new(AtomicBool::new(false)))
    }

    /// Creates an engine polling an externally owned cancellation flag.
    pub fn with_cancellation(
        config: ExtractionConfig,
        recognizer: R,
        cancel: Arc<AtomicBool>,
    ) -> CoreResult<Self> {
        let classifier = CodeClassifier::new(&config.keywords)?;
        Ok(Self {
            config,
            recognizer,
            classifier,
            cancel,
        })
    }

    /// Returns the cancellation flag. Setting it stops sampling promptly;
    /// the flag is polled once per sampled frame, not per raw frame.
    pub fn cancellation_flag(&self) -> Arc<AtomicBool> {
        self.cancel.clone()
    }

    /// Runs one extraction pass over the video at `input`.
    ///
    /// Returns `SourceUnavailable` if the video cannot be opened at all and
    /// `Cancelled` if the cancellation flag was raised mid-pass; otherwise
    /// always returns a report, possibly with an empty collection.
    pub fn extract<D: VideoDecoder>(
        &self,
        decoder: &D,
        input: &Path,
        events: &EventDispatcher,
    ) -> CoreResult<ExtractionReport> {
        let stream = decoder.open(input)?;
        let meta = stream.metadata().clone();

        let sampler = FrameSampler::new(stream, self.config.sample_interval_secs);
        let frame_step = sampler.frame_step();
        let estimated = meta.total_frames.map(|n| expected_samples(n, frame_step));

        log::info!(
            "Extracting code from {} (fps {:.2}, step {} frames, ~{} samples)",
            input.display(),
            meta.fps,
            frame_step,
            estimated.map_or_else(|| "?".to_string(), |n| n.to_string())
        );
        events.emit(Event::ExtractionStarted {
            frame_step,
            estimated_samples: estimated,
        });

        if let Some(dir) = &self.config.frame_dump_dir {
            if let Err(e) = std::fs::create_dir_all(dir) {
                log::warn!(
                    "frame dump directory {} unavailable, dump disabled: {}",
                    dir.display(),
                    e
                );
                events.emit(Event::Warning {
                    message: format!("frame dump directory {} unavailable", dir.display()),
                });
            }
        }

        let store = Mutex::new(SnippetStore::new());
        let counters = Counters::default();

        if self.config.ocr_workers > 1 {
            self.run_parallel(sampler, &store, &counters, events)?;
        } else {
            self.run_sequential(sampler, &store, &counters, events)?;
        }

        let snippets = store
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .finalize();

        let report = ExtractionReport {
            frames_sampled: counters.sampled.load(Ordering::Relaxed),
            invalid_frames: counters.invalid.load(Ordering::Relaxed),
            recognition_failures: counters.failures.load(Ordering::Relaxed),
            rejected_texts: counters.rejected.load(Ordering::Relaxed),
            snippets,
        };

        log::info!(
            "Extraction finished: {} unique snippet(s) from {} sampled frame(s) ({} OCR failure(s))",
            report.snippets.len(),
            report.frames_sampled,
            report.recognition_failures
        );
        events.emit(Event::ExtractionComplete {
            snippet_count: report.snippets.len(),
            frames_sampled: report.frames_sampled,
            recognition_failures: report.recognition_failures,
        });

        Ok(report)
    }

    fn run_sequential<S: FrameStream>(
        &self,
        sampler: FrameSampler<S>,
        store: &Mutex<SnippetStore>,
        counters: &Counters,
        events: &EventDispatcher,
    ) -> CoreResult<()> {
        for item in sampler {
            if self.cancel.load(Ordering::Relaxed) {
                log::info!("Extraction cancelled");
                return Err(CoreError::Cancelled);
            }
            match item {
                Ok(frame) => self.process_sampled(frame, store, counters, events),
                Err(e) => {
                    log::warn!("Frame decode failed, sampling stops early: {e}");
                    counters.invalid.fetch_add(1, Ordering::Relaxed);
                }
            }
        }
        Ok(())
    }

    fn run_parallel<S: FrameStream + Send>(
        &self,
        sampler: FrameSampler<S>,
        store: &Mutex<SnippetStore>,
        counters: &Counters,
        events: &EventDispatcher,
    ) -> CoreResult<()> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.ocr_workers)
            .build()
            .map_err(|e| {
                CoreError::OperationFailed(format!("failed to build OCR worker pool: {e}"))
            })?;

        pool.install(|| {
            sampler.par_bridge().try_for_each(|item| {
                if self.cancel.load(Ordering::Relaxed) {
                    return Err(CoreError::Cancelled);
                }
                match item {
                    Ok(frame) => {
                        self.process_sampled(frame, store, counters, events);
                        Ok(())
                    }
                    Err(e) => {
                        log::warn!("Frame decode failed, sampling stops early: {e}");
                        counters.invalid.fetch_add(1, Ordering::Relaxed);
                        Ok(())
                    }
                }
            })
        })
    }

    /// Preprocess -> recognize -> classify -> offer for a single sampled
    /// frame. All per-frame failures are absorbed here.
    fn process_sampled(
        &self,
        frame: Frame,
        store: &Mutex<SnippetStore>,
        counters: &Counters,
        events: &EventDispatcher,
    ) {
        let frame_index = frame.index;
        let sample_number = counters.sampled.fetch_add(1, Ordering::Relaxed) + 1;

        let pre = match preprocess(&frame) {
            Ok(pre) => pre,
            Err(e) => {
                log::warn!("Skipping unusable frame {frame_index}: {e}");
                counters.invalid.fetch_add(1, Ordering::Relaxed);
                return;
            }
        };

        let text = match self.recognizer.recognize(&pre) {
            Ok(text) => text,
            Err(e) => {
                log::warn!("Recognition failed on frame {frame_index}: {e}");
                counters.failures.fetch_add(1, Ordering::Relaxed);
                return;
            }
        };

        let recognized = RecognizedText { frame_index, text };
        let accepted = self.classifier.is_code(&recognized.text);
        if accepted {
            let newly_stored = store
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .offer(&recognized.text);
            log::debug!(
                "Frame {frame_index}: snippet accepted ({} chars, {})",
                recognized.text.len(),
                if newly_stored { "new" } else { "duplicate" }
            );
        } else {
            counters.rejected.fetch_add(1, Ordering::Relaxed);
            log::trace!("Frame {frame_index}: text rejected by classifier");
        }

        self.dump_frame(&pre, accepted);
        events.emit(Event::SampledFrameProcessed {
            frame_index,
            sample_number,
            accepted,
        });
    }

    /// Optional debug export of the preprocessed frame with its verdict.
    /// Failures here are logged and ignored; the dump never affects results.
    fn dump_frame(&self, frame: &PreprocessedFrame, accepted: bool) {
        let Some(dir) = &self.config.frame_dump_dir else {
            return;
        };
        let verdict = if accepted { "code" } else { "rejected" };
        let path = dir.join(format!("frame_{:06}_{verdict}.png", frame.index));
        if let Err(e) = frame.image.save(&path) {
            log::debug!("Frame dump failed for {}: {e}", path.display());
        }
    }
}
