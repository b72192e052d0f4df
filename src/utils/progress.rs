//! Status lines for CLI mode
//!
//! Small helpers for styled, single-line console output.

use console::style;

/// Print a pass status
pub fn print_pass(message: &str) {
    println!("  {} {}", style("✓").green(), message);
}

/// Print a warning status
pub fn print_warning(message: &str) {
    eprintln!("  {} {}", style("⚠").yellow(), message);
}

/// Print an info status
pub fn print_info(message: &str) {
    println!("  {} {}", style("ℹ").cyan(), message);
}

/// Print a section heading followed by a rule
pub fn print_heading(title: &str) {
    println!();
    println!("{}", style(title).bold());
    println!("{}", style("=".repeat(30)).dim());
}
