// vidscribe-cli/src/main.rs
//
// Binary entry point for the Vidscribe CLI: parses arguments, initializes
// logging, dispatches to the subcommand implementations, and maps fatal
// errors to a styled message and a non-zero exit code.

use clap::Parser;
use vidscribe_cli::cli::{Cli, Commands};
use vidscribe_cli::commands::{run_extract_code, run_generate, run_transcribe};
use vidscribe_cli::{logging, terminal};
use vidscribe_core::CoreError;

fn main() {
    logging::init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Generate(args) => run_generate(args),
        Commands::ExtractCode(args) => run_extract_code(args),
        Commands::Transcribe(args) => run_transcribe(args),
    };

    if let Err(e) = result {
        let suggestion = match &e {
            CoreError::DependencyNotFound(tool) => Some(format!(
                "install '{tool}' and make sure it is on your PATH"
            )),
            CoreError::Cancelled => None,
            _ => None,
        };
        terminal::print_error("Fatal error", &e.to_string(), suggestion.as_deref());
        std::process::exit(1);
    }
}
