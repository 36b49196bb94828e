//! Command-line interface module.
//!
//! This module handles all CLI argument parsing and related utilities for the
//! violations reporter, including credential prompting and output file
//! naming.

use clap::Parser;
use inquire::{Password, PasswordDisplayMode};
use std::path::PathBuf;
use std::{env, process};

/// CLI arguments for the watch violations reporter
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Name of the watch to report violations for
    pub watch: Option<String>,

    /// Build the report from a previously downloaded violations JSON
    /// document instead of querying the API
    #[arg(short = 'f', long = "from-json", value_name = "FILE")]
    pub from_json: Option<PathBuf>,

    /// Base URL of the scanning platform, e.g. https://xray.example.com
    #[arg(short = 's', long = "server", value_name = "URL")]
    pub server: Option<String>,

    /// Username for the API token exchange (defaults to the current user)
    #[arg(short = 'u', long = "user")]
    pub user: Option<String>,

    /// Skip TLS certificate verification when talking to the platform
    #[arg(long)]
    pub insecure: bool,

    /// Report file to write (defaults to <watch>-<date>-xray.csv)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Resolves the watch name for the API path.
///
/// # Exits
/// Exits with status 1 when no watch name was given and no export file was
/// selected either.
pub fn resolve_watch(args: &Args) -> String {
    match &args.watch {
        Some(watch) => watch.clone(),
        None => {
            eprintln!("Error: No watch name given.");
            eprintln!("Pass the name of the watch to report on,");
            eprintln!("or use -f/--from-json to build the report from a downloaded export.");
            process::exit(1);
        }
    }
}

/// Resolves the platform base URL for the API path.
///
/// # Exits
/// Exits with status 1 when -s/--server was not provided.
pub fn resolve_server(args: &Args) -> String {
    match &args.server {
        Some(server) => server.clone(),
        None => {
            eprintln!("Error: No server URL given.");
            eprintln!("Pass the platform base URL with -s/--server, e.g. -s https://xray.example.com");
            process::exit(1);
        }
    }
}

/// Resolves the username from the CLI argument or the `USER` environment
/// variable.
///
/// # Exits
/// Exits with status 1 when neither source yields a name.
pub fn resolve_user(args: &Args) -> String {
    if let Some(user) = &args.user {
        return user.clone();
    }

    match env::var("USER") {
        Ok(user) if !user.is_empty() => user,
        _ => {
            eprintln!("Error: Could not determine the current user.");
            eprintln!("Pass a username with -u/--user.");
            process::exit(1);
        }
    }
}

/// Prompts for the user's password on the terminal, never echoing it back.
///
/// # Exits
/// Exits with status 1 when the prompt is aborted or no terminal is
/// available.
pub fn prompt_password(user: &str) -> String {
    let prompt = Password::new(&format!("Password for {}:", user))
        .without_confirmation()
        .with_display_mode(PasswordDisplayMode::Masked)
        .prompt();

    match prompt {
        Ok(password) => password,
        Err(err) => {
            eprintln!("Error: Failed to read password: {}", err);
            process::exit(1);
        }
    }
}

/// Default report filename for a watch: `<watch>-<YYYY-MM-DD>-xray.csv`,
/// stamped with the local date.
pub fn default_report_name(watch: &str) -> String {
    format!("{}-{}-xray.csv", watch, chrono::Local::now().format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_name_carries_watch_and_date() {
        let name = default_report_name("prod-libraries");
        assert!(name.starts_with("prod-libraries-"));
        assert!(name.ends_with("-xray.csv"));
        // watch + dashes + ISO date + suffix
        assert_eq!(name.len(), "prod-libraries".len() + 1 + 10 + "-xray.csv".len());
    }
}
