//! `quorum-harness` CLI: runs a directory of fixtures through `quorum-core`
//! and reports pass/fail, optionally writing a machine-readable report.

use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use quorum_harness::fixtures::FixtureCase;
use quorum_harness::runner::run_case;
use quorum_harness::structured_log::{self, LogEntry};

#[derive(Parser)]
#[command(name = "harness", about = "Conformance harness for the quorum decision engine")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run every fixture in a directory and report pass/fail.
    Run {
        /// Directory of `*.json` fixture files.
        #[arg(long, default_value = "crates/quorum-harness/fixtures")]
        fixtures: PathBuf,
        /// Optional path to write a newline-delimited JSON report to.
        #[arg(long)]
        report: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match cli.command {
        Command::Run { fixtures, report } => run(&fixtures, report.as_deref()),
    }
}

fn run(fixtures_dir: &std::path::Path, report_path: Option<&std::path::Path>) -> ExitCode {
    let cases = match FixtureCase::load_dir(fixtures_dir) {
        Ok(cases) => cases,
        Err(err) => {
            eprintln!("harness: could not load fixtures from {fixtures_dir:?}: {err}");
            return ExitCode::FAILURE;
        }
    };

    if cases.is_empty() {
        eprintln!("harness: no fixtures found in {fixtures_dir:?}");
        return ExitCode::FAILURE;
    }

    eprintln!("harness: running {} fixture(s)", cases.len());

    let mut results = Vec::with_capacity(cases.len());
    let mut failures = 0usize;
    for case in &cases {
        match run_case(case) {
            Ok(result) => {
                let marker = if result.passed { "ok" } else { "FAIL" };
                eprintln!("  [{marker}] {}: {}", result.name, result.detail);
                if !result.passed {
                    failures += 1;
                }
                results.push(result);
            }
            Err(err) => {
                eprintln!("  [FAIL] {}: could not run fixture: {err}", case.name);
                failures += 1;
                results.push(quorum_harness::CaseResult {
                    name: case.name.clone(),
                    passed: false,
                    detail: err.to_string(),
                });
            }
        }
    }

    if let Some(report_path) = report_path {
        let entries = results.iter().map(|r| LogEntry {
            name: &r.name,
            passed: r.passed,
            detail: &r.detail,
        });
        match File::create(report_path).and_then(|mut f| structured_log::write_jsonl(&mut f, entries))
        {
            Ok(()) => eprintln!("harness: wrote report to {report_path:?}"),
            Err(err) => eprintln!("harness: could not write report to {report_path:?}: {err}"),
        }
    }

    eprintln!(
        "harness: {} passed, {} failed",
        results.len() - failures,
        failures
    );

    if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
