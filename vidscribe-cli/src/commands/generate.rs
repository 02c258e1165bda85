//! Implementation of the 'generate' subcommand.
//!
//! Runs the full pipeline — acquisition, audio extraction, transcription,
//! code extraction, generation — and writes the resulting blog post.

use crate::cli::GenerateArgs;
use crate::commands::apply_extraction_opts;
use crate::progress::ProgressReporter;
use crate::terminal;

use vidscribe_core::config::CoreConfigBuilder;
use vidscribe_core::error::{CoreError, CoreResult};
use vidscribe_core::events::EventDispatcher;
use vidscribe_core::external::{
    ChatCompletionClient, SidecarDecoder, TesseractRecognizer, WhisperTranscriber,
};
use vidscribe_core::{format_bytes, format_duration, run_pipeline};

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, info, warn};

/// Runs the full video-to-blog pipeline with configured parameters.
pub fn run_generate(args: GenerateArgs) -> CoreResult<()> {
    let output_dir = args
        .output
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&output_dir).map_err(|e| {
        CoreError::PathError(format!(
            "Failed to create output directory '{}': {}",
            output_dir.display(),
            e
        ))
    })?;

    let mut builder = CoreConfigBuilder::new().output_dir(output_dir);
    builder = apply_extraction_opts(builder, &args.extraction);
    if let Some(model) = &args.whisper_model {
        builder = builder.whisper_model(model);
    }
    if let Some(language) = &args.language {
        builder = builder.whisper_language(language);
    }
    if let Some(size) = args.chunk_size {
        builder = builder.chunk_size(size);
    }
    if let Some(overlap) = args.chunk_overlap {
        builder = builder.chunk_overlap(overlap);
    }
    if let Some(endpoint) = &args.llm_endpoint {
        builder = builder.llm_endpoint(endpoint);
    }
    if let Some(model) = &args.llm_model {
        builder = builder.llm_model(model);
    }
    if let Some(temperature) = args.temperature {
        builder = builder.llm_temperature(temperature);
    }
    let config = builder.build();
    config.validate()?;

    terminal::print_section("INITIALIZATION");
    terminal::print_status("Input", &args.input, false);
    terminal::print_status("Blog output", &args.output.display().to_string(), false);
    terminal::print_status(
        "Sampling",
        &format!("every {:.1} s", config.extraction.sample_interval_secs),
        false,
    );
    debug!("Config: {config:?}");

    // Ctrl-C raises the engine's cancellation flag; sampling stops at the
    // next sampled frame and the video source is still released.
    let cancel = Arc::new(AtomicBool::new(false));
    {
        let flag = cancel.clone();
        ctrlc::set_handler(move || {
            warn!("Cancellation requested, finishing current frame...");
            flag.store(true, Ordering::Relaxed);
        })
        .map_err(|e| CoreError::OperationFailed(format!("failed to install Ctrl-C handler: {e}")))?;
    }

    let mut events = EventDispatcher::new();
    events.add_handler(Arc::new(ProgressReporter::new()));

    let recognizer = TesseractRecognizer::new(config.extraction.ocr.clone())?;
    let transcriber = WhisperTranscriber::new(config.transcription.clone())?;
    let llm = if args.no_generation {
        None
    } else {
        let api_key = args.api_key.as_deref().ok_or_else(|| {
            CoreError::InvalidConfig(
                "generation requires an API key; set VIDSCRIBE_API_KEY or pass --api-key \
                 (or use --no-generation)"
                    .to_string(),
            )
        })?;
        Some(ChatCompletionClient::new(&config.generation, api_key)?)
    };

    let output = run_pipeline(
        &config,
        &args.input,
        &SidecarDecoder,
        recognizer,
        &transcriber,
        llm.as_ref(),
        &events,
        cancel,
    )?;

    if let Some(blog) = &output.blog_markdown {
        fs::write(&args.output, blog)?;
        info!("Blog post written to {}", args.output.display());
    }
    if let Some(path) = &args.transcript_out {
        fs::write(path, &output.transcript)?;
        info!("Transcript written to {}", path.display());
    }
    if let Some(path) = &args.snippets_out {
        let json = serde_json::to_string_pretty(output.extraction.snippets.as_slice())
            .map_err(|e| CoreError::JsonParse(format!("snippet export: {e}")))?;
        fs::write(path, json)?;
        info!("Snippets written to {}", path.display());
    }

    terminal::print_section("SUMMARY");
    if let Some(blog) = &output.blog_markdown {
        terminal::print_status(
            "Blog post",
            &format!(
                "{} ({})",
                args.output.display(),
                format_bytes(blog.len() as u64)
            ),
            true,
        );
    }
    terminal::print_status(
        "Transcript",
        &format!(
            "{} characters in {} chunk(s)",
            output.transcript.len(),
            output.chunk_count
        ),
        false,
    );
    terminal::print_status(
        "Snippets",
        &output.extraction.snippets.len().to_string(),
        true,
    );
    terminal::print_status(
        "Total time",
        &format_duration(output.elapsed.as_secs_f64()),
        false,
    );

    Ok(())
}
