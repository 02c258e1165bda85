// vidscribe-cli/src/progress.rs
//
// Renders core pipeline events as terminal output: stage lines for the
// linear steps and an indicatif progress bar while frames are sampled.

use crate::terminal;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::{Mutex, PoisonError};
use vidscribe_core::events::{Event, EventHandler};

pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn with_bar<F: FnOnce(&mut Option<ProgressBar>)>(&self, f: F) {
        let mut guard = self.bar.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard);
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for ProgressReporter {
    fn handle(&self, event: &Event) {
        match event {
            Event::PipelineStarted { input } => {
                terminal::print_processing(&format!("Processing {input}"));
            }
            Event::DownloadStarted { url } => {
                terminal::print_processing(&format!("Downloading {url}"));
            }
            Event::DownloadComplete { .. } => terminal::print_success("Video downloaded"),
            Event::AudioExtractionStarted => {
                terminal::print_processing("Extracting audio track");
            }
            Event::AudioExtractionComplete { .. } => terminal::print_success("Audio extracted"),
            Event::TranscriptionStarted { model } => {
                terminal::print_processing(&format!("Transcribing audio (whisper {model})"));
            }
            Event::TranscriptionComplete { characters } => {
                terminal::print_success(&format!(
                    "Transcription complete ({characters} characters)"
                ));
            }
            Event::ChunkingComplete { chunk_count } => {
                terminal::print_status("Chunks", &chunk_count.to_string(), false);
            }
            Event::ExtractionStarted {
                frame_step,
                estimated_samples,
            } => {
                terminal::print_processing(&format!(
                    "Extracting code (one frame every {frame_step} frames)"
                ));
                let bar = match estimated_samples {
                    Some(total) => {
                        let bar = ProgressBar::new(*total);
                        bar.set_style(
                            ProgressStyle::with_template(
                                "  {bar:30.cyan/dim} {pos}/{len} frames sampled",
                            )
                            .unwrap_or_else(|_| ProgressStyle::default_bar()),
                        );
                        bar
                    }
                    None => ProgressBar::new_spinner(),
                };
                self.with_bar(|slot| *slot = Some(bar));
            }
            Event::SampledFrameProcessed { .. } => {
                self.with_bar(|slot| {
                    if let Some(bar) = slot {
                        bar.inc(1);
                    }
                });
            }
            Event::ExtractionComplete {
                snippet_count,
                frames_sampled,
                recognition_failures,
            } => {
                self.with_bar(|slot| {
                    if let Some(bar) = slot.take() {
                        bar.finish_and_clear();
                    }
                });
                terminal::print_success(&format!(
                    "{snippet_count} unique snippet(s) from {frames_sampled} sampled frame(s)"
                ));
                if *recognition_failures > 0 {
                    terminal::print_warning(&format!(
                        "{recognition_failures} frame(s) failed OCR and were skipped"
                    ));
                }
            }
            Event::GenerationStarted { model } => {
                terminal::print_processing(&format!("Generating blog post ({model})"));
            }
            Event::GenerationComplete { characters } => {
                terminal::print_success(&format!("Blog post generated ({characters} characters)"));
            }
            Event::PipelineComplete { .. } => {}
            Event::Warning { message } => terminal::print_warning(message),
            Event::StatusUpdate { label, value } => terminal::print_status(label, value, false),
        }
    }
}
