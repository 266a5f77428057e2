mod progress;
mod report;
mod styling;
mod tables;

pub use progress::FetchSpinner;
pub use report::{print_no_failures, print_run_report};

use styling::{bright, bright_red, cyan, dim};

/// Prints the one-line banner shown before any fetching starts.
pub fn print_fetch_header(repo: &str) {
    println!();
    println!(
        "{} {}{}",
        bright("Fetching failed workflow runs for"),
        cyan(repo),
        bright("...")
    );
    println!();
}

/// Dim informational note about an active filter.
pub fn print_note(message: &str) {
    println!("{}", dim(message));
}

/// Top-level error line; every failure path reports through here.
pub fn print_error(error: &anyhow::Error) {
    eprintln!("{} {error}", bright_red("Error:"));
}
