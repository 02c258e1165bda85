//! Implementation of the 'transcribe' subcommand.
//!
//! Extracts the audio track of a local video file and transcribes it.

use crate::cli::TranscribeArgs;
use crate::terminal;

use vidscribe_core::config::CoreConfigBuilder;
use vidscribe_core::error::{CoreError, CoreResult};
use vidscribe_core::external::whisper::{Transcriber, WhisperTranscriber};
use vidscribe_core::external::check_dependency;
use vidscribe_core::processing::audio;
use vidscribe_core::temp_files;

use std::fs;

use log::info;

/// Runs audio extraction and transcription only.
pub fn run_transcribe(args: TranscribeArgs) -> CoreResult<()> {
    if !args.input.is_file() {
        return Err(CoreError::PathError(format!(
            "input video not found: {}",
            args.input.display()
        )));
    }
    check_dependency("ffmpeg", "-version")?;

    let mut builder = CoreConfigBuilder::new();
    if let Some(model) = &args.whisper_model {
        builder = builder.whisper_model(model);
    }
    if let Some(language) = &args.language {
        builder = builder.whisper_language(language);
    }
    let config = builder.build();

    terminal::print_section("TRANSCRIPTION");
    terminal::print_status("Input", &args.input.display().to_string(), false);
    terminal::print_status("Model", &config.transcription.model, false);

    let work_dir = temp_files::create_temp_dir(&config, "vidscribe_transcribe")?;

    terminal::print_processing("Extracting audio track");
    let wav_path = audio::extract_audio(&args.input, work_dir.path())?;

    terminal::print_processing("Transcribing audio");
    let transcriber = WhisperTranscriber::new(config.transcription.clone())?;
    let transcript = transcriber.transcribe(&wav_path)?;
    terminal::print_success(&format!(
        "Transcription complete ({} characters)",
        transcript.len()
    ));

    match &args.output {
        Some(path) => {
            fs::write(path, &transcript)?;
            info!("Transcript written to {}", path.display());
        }
        None => println!("{transcript}"),
    }

    Ok(())
}
