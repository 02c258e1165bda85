// vidscribe-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Vidscribe: turn tutorial videos into blog posts",
    long_about = "Converts a tutorial video (URL or local file) into a written blog post \
with embedded code snippets, using the vidscribe-core library."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Runs the full pipeline: download, transcribe, extract code, generate
    Generate(GenerateArgs),
    /// Extracts on-screen code snippets from a local video file
    ExtractCode(ExtractCodeArgs),
    /// Extracts and transcribes the audio track of a local video file
    Transcribe(TranscribeArgs),
}

/// Flags shared by every command that runs the code-extraction subsystem.
#[derive(Args, Debug, Clone)]
pub struct ExtractionOpts {
    /// Seconds between sampled frames
    #[arg(long, value_name = "SECONDS")]
    pub interval: Option<f64>,

    /// OCR language passed to tesseract (-l)
    #[arg(long, value_name = "LANG")]
    pub ocr_language: Option<String>,

    /// Tesseract OCR engine mode (--oem)
    #[arg(long, value_name = "MODE", value_parser = clap::value_parser!(u8).range(0..=3))]
    pub ocr_engine_mode: Option<u8>,

    /// Tesseract page segmentation mode (--psm)
    #[arg(long, value_name = "MODE", value_parser = clap::value_parser!(u8).range(0..=13))]
    pub ocr_page_seg_mode: Option<u8>,

    /// Comma-separated keyword set for the code classifier (e.g. def,class,fn)
    #[arg(long, value_delimiter = ',', value_name = "WORDS")]
    pub keywords: Option<Vec<String>>,

    /// Number of parallel OCR workers (1 = sequential)
    #[arg(long, value_name = "COUNT")]
    pub ocr_workers: Option<usize>,

    /// Dump preprocessed frames and their verdicts into this directory
    #[arg(long, value_name = "DIR")]
    pub dump_frames: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// YouTube URL or path to a local video file
    #[arg(required = true, value_name = "INPUT")]
    pub input: String,

    /// Path for the generated blog post (markdown)
    #[arg(short = 'o', long = "output", value_name = "BLOG_MD", default_value = "blog.md")]
    pub output: PathBuf,

    /// Optional: write the raw transcript to this path as well
    #[arg(long, value_name = "PATH")]
    pub transcript_out: Option<PathBuf>,

    /// Optional: write the extracted snippets as JSON to this path
    #[arg(long, value_name = "PATH")]
    pub snippets_out: Option<PathBuf>,

    /// Stop after transcription and code extraction (no LLM call)
    #[arg(long)]
    pub no_generation: bool,

    #[command(flatten)]
    pub extraction: ExtractionOpts,

    /// Whisper model size (tiny, base, small, medium, large)
    #[arg(long, value_name = "SIZE")]
    pub whisper_model: Option<String>,

    /// Spoken-language hint for transcription (e.g. en)
    #[arg(long, value_name = "LANG")]
    pub language: Option<String>,

    /// Maximum characters per transcript chunk
    #[arg(long, value_name = "CHARS")]
    pub chunk_size: Option<usize>,

    /// Overlap between consecutive transcript chunks
    #[arg(long, value_name = "CHARS")]
    pub chunk_overlap: Option<usize>,

    // --- Generation backend ---
    /// Chat-completions endpoint URL
    /// Can also be set via the VIDSCRIBE_LLM_ENDPOINT environment variable.
    #[arg(long, value_name = "URL", env = "VIDSCRIBE_LLM_ENDPOINT")]
    pub llm_endpoint: Option<String>,

    /// Model name sent to the endpoint
    /// Can also be set via the VIDSCRIBE_LLM_MODEL environment variable.
    #[arg(long, value_name = "MODEL", env = "VIDSCRIBE_LLM_MODEL")]
    pub llm_model: Option<String>,

    /// Sampling temperature for generation
    #[arg(long, value_name = "TEMP")]
    pub temperature: Option<f32>,

    /// API key for the generation endpoint
    /// Usually supplied via the VIDSCRIBE_API_KEY environment variable.
    #[arg(long, value_name = "KEY", env = "VIDSCRIBE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
}

#[derive(Parser, Debug)]
pub struct ExtractCodeArgs {
    /// Path to a local video file
    #[arg(required = true, value_name = "VIDEO")]
    pub input: PathBuf,

    /// Optional: write snippets to this path instead of stdout
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Emit snippets as a JSON array instead of fenced blocks
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub extraction: ExtractionOpts,
}

#[derive(Parser, Debug)]
pub struct TranscribeArgs {
    /// Path to a local video file
    #[arg(required = true, value_name = "VIDEO")]
    pub input: PathBuf,

    /// Optional: write the transcript to this path instead of stdout
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Whisper model size (tiny, base, small, medium, large)
    #[arg(long, value_name = "SIZE")]
    pub whisper_model: Option<String>,

    /// Spoken-language hint for transcription (e.g. en)
    #[arg(long, value_name = "LANG")]
    pub language: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generate_basic_args() {
        let cli = Cli::parse_from(["vidscribe", "generate", "video.mp4"]);
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.input, "video.mp4");
                assert_eq!(args.output, PathBuf::from("blog.md"));
                assert!(!args.no_generation);
                assert!(args.extraction.interval.is_none());
            }
            _ => panic!("expected generate command"),
        }
    }

    #[test]
    fn test_parse_extract_code_with_flags() {
        let cli = Cli::parse_from([
            "vidscribe",
            "extract-code",
            "video.mp4",
            "--interval",
            "5",
            "--keywords",
            "def,class,fn",
            "--ocr-workers",
            "4",
            "--json",
        ]);
        match cli.command {
            Commands::ExtractCode(args) => {
                assert_eq!(args.input, PathBuf::from("video.mp4"));
                assert!(args.json);
                assert_eq!(args.extraction.interval, Some(5.0));
                assert_eq!(
                    args.extraction.keywords,
                    Some(vec![
                        "def".to_string(),
                        "class".to_string(),
                        "fn".to_string()
                    ])
                );
                assert_eq!(args.extraction.ocr_workers, Some(4));
            }
            _ => panic!("expected extract-code command"),
        }
    }

    #[test]
    fn test_psm_range_is_enforced() {
        let result = Cli::try_parse_from([
            "vidscribe",
            "extract-code",
            "video.mp4",
            "--ocr-page-seg-mode",
            "14",
        ]);
        assert!(result.is_err());
    }
}
