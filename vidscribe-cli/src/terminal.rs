// vidscribe-cli/src/terminal.rs
//
// Styled terminal output helpers used by the command implementations.

use console::style;

/// Prints a section header.
pub fn print_section(title: &str) {
    println!();
    println!("{}", style(format!("=== {title} ===")).cyan().bold());
}

/// Prints an indented subsection title.
pub fn print_subsection(title: &str) {
    println!("{}", style(title).bold());
}

/// Prints a label/value status line; `emphasize` renders the value bold.
pub fn print_status(label: &str, value: &str, emphasize: bool) {
    let rendered = if emphasize {
        style(value).bold().to_string()
    } else {
        value.to_string()
    };
    println!("  {:<14} {}", format!("{label}:"), rendered);
}

/// Prints a progress line for a stage that is starting.
pub fn print_processing(message: &str) {
    println!("{} {}", style(">").cyan().bold(), message);
}

/// Prints a success line.
pub fn print_success(message: &str) {
    println!("{} {}", style("[OK]").green(), message);
}

/// Prints a warning line.
pub fn print_warning(message: &str) {
    println!("{} {}", style("[WARN]").yellow(), message);
}

/// Prints an error with optional suggestion to stderr.
pub fn print_error(title: &str, message: &str, suggestion: Option<&str>) {
    eprintln!("{} {}: {}", style("[ERROR]").red().bold(), title, message);
    if let Some(suggestion) = suggestion {
        eprintln!("        {}", style(suggestion).dim());
    }
}
