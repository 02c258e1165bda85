//! Pipeline progress events.
//!
//! The core emits [`Event`] values through an [`EventDispatcher`] so that a
//! frontend (terminal, UI) can render progress without the core knowing how
//! it is presented. Handlers must be cheap; they run on the pipeline thread
//! (or an OCR worker thread during parallel extraction).

use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum Event {
    // Run lifecycle
    PipelineStarted {
        input: String,
    },

    // Acquisition
    DownloadStarted {
        url: String,
    },
    DownloadComplete {
        path: String,
    },

    // Audio / transcription
    AudioExtractionStarted,
    AudioExtractionComplete {
        wav_path: String,
    },
    TranscriptionStarted {
        model: String,
    },
    TranscriptionComplete {
        characters: usize,
    },
    ChunkingComplete {
        chunk_count: usize,
    },

    // Code extraction
    ExtractionStarted {
        frame_step: u64,
        estimated_samples: Option<u64>,
    },
    SampledFrameProcessed {
        frame_index: u64,
        sample_number: u64,
        accepted: bool,
    },
    ExtractionComplete {
        snippet_count: usize,
        frames_sampled: u64,
        recognition_failures: u64,
    },

    // Generation
    GenerationStarted {
        model: String,
    },
    GenerationComplete {
        characters: usize,
    },

    PipelineComplete {
        total_time: Duration,
    },

    // Generic events
    Warning {
        message: String,
    },
    StatusUpdate {
        label: String,
        value: String,
    },
}

pub trait EventHandler: Send + Sync {
    fn handle(&self, event: &Event);
}

pub struct EventDispatcher {
    handlers: Vec<Arc<dyn EventHandler>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    pub fn add_handler(&mut self, handler: Arc<dyn EventHandler>) {
        self.handlers.push(handler);
    }

    pub fn emit(&self, event: Event) {
        for handler in &self.handlers {
            handler.handle(&event);
        }
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
