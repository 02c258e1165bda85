// vidscribe-cli/src/commands/mod.rs
//
// One module per subcommand, plus shared configuration plumbing.

pub mod extract;
pub mod generate;
pub mod transcribe;

pub use extract::run_extract_code;
pub use generate::run_generate;
pub use transcribe::run_transcribe;

use crate::cli::ExtractionOpts;
use vidscribe_core::config::CoreConfigBuilder;

/// Applies the shared extraction flags onto a config builder.
pub(crate) fn apply_extraction_opts(
    mut builder: CoreConfigBuilder,
    opts: &ExtractionOpts,
) -> CoreConfigBuilder {
    if let Some(interval) = opts.interval {
        builder = builder.sample_interval_secs(interval);
    }
    if let Some(language) = &opts.ocr_language {
        builder = builder.ocr_language(language);
    }
    if let Some(mode) = opts.ocr_engine_mode {
        builder = builder.ocr_engine_mode(mode);
    }
    if let Some(mode) = opts.ocr_page_seg_mode {
        builder = builder.ocr_page_seg_mode(mode);
    }
    if let Some(keywords) = &opts.keywords {
        builder = builder.keywords(keywords.clone());
    }
    if let Some(workers) = opts.ocr_workers {
        builder = builder.ocr_workers(workers);
    }
    if let Some(dir) = &opts.dump_frames {
        builder = builder.frame_dump_dir(dir.clone());
    }
    builder
}
