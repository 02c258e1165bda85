// vidscribe-cli/src/lib.rs
//
// Library portion of the Vidscribe CLI application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod progress;
pub mod terminal;

// Re-export items needed by the binary or integration tests
pub use cli::{Cli, Commands, ExtractCodeArgs, GenerateArgs, TranscribeArgs};
pub use commands::{run_extract_code, run_generate, run_transcribe};
