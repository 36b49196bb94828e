//! Console output for the violations reporter.

use std::path::Path;

/// Announces the start of an API-driven run.
pub fn print_run_start(watch: &str, server: &str) {
    println!("🔎 Fetching violations for watch '{}' from {}", watch, server);
}

/// Flags a mismatch between the server-reported total and what was actually
/// collected; a watch that changes mid-run can drift.
pub fn print_total_drift(reported: u64, collected: usize) {
    if reported != collected as u64 {
        println!(
            "⚠️  Server reported {} violations; collected {}",
            reported, collected
        );
    }
}

/// Prints the one-line summary of a successful run.
pub fn print_run_summary(count: usize, dest: &Path) {
    println!("✅ Wrote {} violations to report: {}", count, dest.display());
}
