//! Implementation of the 'extract-code' subcommand.
//!
//! Runs only the code-extraction subsystem over a local video file and
//! prints or writes the resulting snippets.

use crate::cli::ExtractCodeArgs;
use crate::commands::apply_extraction_opts;
use crate::progress::ProgressReporter;
use crate::terminal;

use vidscribe_core::CodeExtractionEngine;
use vidscribe_core::config::CoreConfigBuilder;
use vidscribe_core::error::{CoreError, CoreResult};
use vidscribe_core::events::EventDispatcher;
use vidscribe_core::external::{SidecarDecoder, TesseractRecognizer, check_dependency};

use std::fs;
use std::sync::Arc;
use std::sync::atomic::Ordering;

use log::{info, warn};

/// Runs code extraction and reports the snippet collection.
pub fn run_extract_code(args: ExtractCodeArgs) -> CoreResult<()> {
    if !args.input.is_file() {
        return Err(CoreError::PathError(format!(
            "input video not found: {}",
            args.input.display()
        )));
    }
    check_dependency("ffmpeg", "-version")?;
    check_dependency("ffprobe", "-version")?;

    let config = apply_extraction_opts(CoreConfigBuilder::new(), &args.extraction).build();
    config.validate()?;

    terminal::print_section("CODE EXTRACTION");
    terminal::print_status("Input", &args.input.display().to_string(), false);
    terminal::print_status(
        "Sampling",
        &format!("every {:.1} s", config.extraction.sample_interval_secs),
        false,
    );
    if config.extraction.ocr_workers > 1 {
        terminal::print_status(
            "OCR workers",
            &config.extraction.ocr_workers.to_string(),
            false,
        );
    }

    let recognizer = TesseractRecognizer::new(config.extraction.ocr.clone())?;
    let engine = CodeExtractionEngine::new(config.extraction.clone(), recognizer)?;

    {
        let flag = engine.cancellation_flag();
        ctrlc::set_handler(move || {
            warn!("Cancellation requested, finishing current frame...");
            flag.store(true, Ordering::Relaxed);
        })
        .map_err(|e| CoreError::OperationFailed(format!("failed to install Ctrl-C handler: {e}")))?;
    }

    let mut events = EventDispatcher::new();
    events.add_handler(Arc::new(ProgressReporter::new()));

    let report = engine.extract(&SidecarDecoder, &args.input, &events)?;

    let rendered = if args.json {
        serde_json::to_string_pretty(report.snippets.as_slice())
            .map_err(|e| CoreError::JsonParse(format!("snippet export: {e}")))?
    } else {
        report
            .snippets
            .as_slice()
            .iter()
            .map(|s| format!("```\n{s}\n```"))
            .collect::<Vec<_>>()
            .join("\n\n")
    };

    match &args.output {
        Some(path) => {
            fs::write(path, &rendered)?;
            info!("Snippets written to {}", path.display());
        }
        None => {
            if !rendered.is_empty() {
                println!("{rendered}");
            }
        }
    }

    terminal::print_section("SUMMARY");
    terminal::print_status("Snippets", &report.snippets.len().to_string(), true);
    terminal::print_status("Frames sampled", &report.frames_sampled.to_string(), false);
    if report.recognition_failures > 0 {
        terminal::print_status(
            "OCR failures",
            &report.recognition_failures.to_string(),
            false,
        );
    }
    if report.invalid_frames > 0 {
        terminal::print_status("Invalid frames", &report.invalid_frames.to_string(), false);
    }
    terminal::print_status("Rejected texts", &report.rejected_texts.to_string(), false);

    Ok(())
}
