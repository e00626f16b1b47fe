use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

// All helpers write to stderr: stdout carries only the report itself.

/// Print a success message.
pub fn success(msg: &str) {
    eprintln!("  {} {}", "✓".green(), msg);
}

/// Print a warning message.
pub fn warning(msg: &str) {
    eprintln!("  {} {}", "⚠".yellow(), msg);
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("  {} {}", "✗".red(), msg);
}

/// Print a header line.
pub fn header(msg: &str) {
    eprintln!("\n{}", msg.bold());
}

/// Start a spinner with the given message.
pub fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::with_template("  {spinner} {msg}").expect("template is valid"));
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Stop a spinner and replace it with a success line.
pub fn finish_spinner(pb: ProgressBar, msg: &str) {
    pb.finish_and_clear();
    success(msg);
}
