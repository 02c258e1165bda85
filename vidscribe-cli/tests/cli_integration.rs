//! Argument-parsing integration tests for the vidscribe binary surface.

use clap::Parser;
use std::path::PathBuf;
use vidscribe_cli::cli::{Cli, Commands};

#[test]
fn test_generate_full_flag_set() {
    let cli = Cli::parse_from([
        "vidscribe",
        "generate",
        "https://www.youtube.com/watch?v=abc123",
        "--output",
        "post.md",
        "--transcript-out",
        "transcript.txt",
        "--snippets-out",
        "snippets.json",
        "--interval",
        "5",
        "--ocr-language",
        "eng",
        "--ocr-engine-mode",
        "1",
        "--ocr-page-seg-mode",
        "11",
        "--keywords",
        "def,fn",
        "--ocr-workers",
        "2",
        "--dump-frames",
        "frames",
        "--whisper-model",
        "small",
        "--language",
        "en",
        "--chunk-size",
        "2000",
        "--chunk-overlap",
        "100",
        "--llm-endpoint",
        "https://example.test/v1/chat/completions",
        "--llm-model",
        "test-model",
        "--temperature",
        "0.5",
        "--api-key",
        "secret",
    ]);

    match cli.command {
        Commands::Generate(args) => {
            assert_eq!(args.input, "https://www.youtube.com/watch?v=abc123");
            assert_eq!(args.output, PathBuf::from("post.md"));
            assert_eq!(args.transcript_out, Some(PathBuf::from("transcript.txt")));
            assert_eq!(args.snippets_out, Some(PathBuf::from("snippets.json")));
            assert_eq!(args.extraction.interval, Some(5.0));
            assert_eq!(args.extraction.ocr_engine_mode, Some(1));
            assert_eq!(args.extraction.ocr_page_seg_mode, Some(11));
            assert_eq!(
                args.extraction.keywords,
                Some(vec!["def".to_string(), "fn".to_string()])
            );
            assert_eq!(args.extraction.ocr_workers, Some(2));
            assert_eq!(args.extraction.dump_frames, Some(PathBuf::from("frames")));
            assert_eq!(args.whisper_model, Some("small".to_string()));
            assert_eq!(args.language, Some("en".to_string()));
            assert_eq!(args.chunk_size, Some(2000));
            assert_eq!(args.chunk_overlap, Some(100));
            assert_eq!(
                args.llm_endpoint,
                Some("https://example.test/v1/chat/completions".to_string())
            );
            assert_eq!(args.llm_model, Some("test-model".to_string()));
            assert_eq!(args.temperature, Some(0.5));
            assert_eq!(args.api_key, Some("secret".to_string()));
            assert!(!args.no_generation);
        }
        _ => panic!("expected generate command"),
    }
}

#[test]
fn test_generate_no_generation_flag() {
    let cli = Cli::parse_from(["vidscribe", "generate", "video.mp4", "--no-generation"]);
    match cli.command {
        Commands::Generate(args) => assert!(args.no_generation),
        _ => panic!("expected generate command"),
    }
}

#[test]
fn test_extract_code_defaults() {
    let cli = Cli::parse_from(["vidscribe", "extract-code", "video.mp4"]);
    match cli.command {
        Commands::ExtractCode(args) => {
            assert_eq!(args.input, PathBuf::from("video.mp4"));
            assert!(!args.json);
            assert!(args.output.is_none());
            assert!(args.extraction.interval.is_none());
            assert!(args.extraction.dump_frames.is_none());
        }
        _ => panic!("expected extract-code command"),
    }
}

#[test]
fn test_transcribe_args() {
    let cli = Cli::parse_from([
        "vidscribe",
        "transcribe",
        "video.mp4",
        "-o",
        "transcript.txt",
        "--whisper-model",
        "medium",
    ]);
    match cli.command {
        Commands::Transcribe(args) => {
            assert_eq!(args.input, PathBuf::from("video.mp4"));
            assert_eq!(args.output, Some(PathBuf::from("transcript.txt")));
            assert_eq!(args.whisper_model, Some("medium".to_string()));
            assert!(args.language.is_none());
        }
        _ => panic!("expected transcribe command"),
    }
}

#[test]
fn test_missing_input_is_an_error() {
    assert!(Cli::try_parse_from(["vidscribe", "generate"]).is_err());
    assert!(Cli::try_parse_from(["vidscribe", "extract-code"]).is_err());
    assert!(Cli::try_parse_from(["vidscribe", "transcribe"]).is_err());
}

#[test]
fn test_oem_range_is_enforced() {
    let result = Cli::try_parse_from([
        "vidscribe",
        "extract-code",
        "video.mp4",
        "--ocr-engine-mode",
        "4",
    ]);
    assert!(result.is_err());
}
