mod collector;
mod error;
mod models;
mod network;
mod normalize;
mod parser;
mod report;
mod ui;

use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use collector::collect_watch_violations;
use error::Result;
use network::XrayClient;
use report::{ReportTable, VIOLATION_HEADERS};
use ui::cli::{self, Args};
use ui::output;

const EXPORT_REPORT_FILE: &str = "report.csv";

fn main() {
    let args = Args::parse();

    let outcome = match &args.from_json {
        Some(input) => run_export_report(input),
        None => run_watch_report(&args),
    };

    if let Err(err) = outcome {
        eprintln!("xray_report: {}", err);
        process::exit(1);
    }
}

/// API path: authenticate, walk every listing page, resolve each violation
/// and write the 9-column report.
fn run_watch_report(args: &Args) -> Result<()> {
    let watch = cli::resolve_watch(args);
    let server = cli::resolve_server(args);
    let user = cli::resolve_user(args);
    let password = cli::prompt_password(&user);

    output::print_run_start(&watch, &server);

    let client = XrayClient::connect(&server, args.insecure, &user, &password)?;
    let violations = collect_watch_violations(&client, &watch)?;
    output::print_total_drift(violations.total_violations, violations.records.len());

    let dest = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(cli::default_report_name(&watch)));

    let mut table = ReportTable::new(&VIOLATION_HEADERS);
    for record in violations.records {
        table.append(record.into_row());
    }
    let count = table.len();
    table.finalize(&dest)?;

    output::print_run_summary(count, &dest);
    Ok(())
}

/// File path: rebuild the report from a previously downloaded violations
/// export, written next to the working directory under a fixed name.
fn run_export_report(input: &Path) -> Result<()> {
    let dest = Path::new(EXPORT_REPORT_FILE);
    let count = parser::export_report(input, dest)?;
    output::print_run_summary(count, dest);
    Ok(())
}
