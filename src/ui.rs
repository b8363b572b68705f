//! Terminal messages. Everything goes to stderr; the output file is the only data product.

use console::style;

use crate::cli::WorkflowResult;

/// Print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Print a success message with a green checkmark.
pub fn display_success(message: &str) {
    eprintln!("{} {}", style("✓").green(), message);
}

/// One-line summary of a finished scan
pub fn format_result(result: &WorkflowResult) -> String {
    let noun = if result.entries == 1 { "entry" } else { "entries" };
    format!(
        "Wrote {} {} to {} ({})",
        result.entries,
        noun,
        result.output.display(),
        result.summary
    )
}
