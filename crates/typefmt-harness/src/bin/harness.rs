//! CLI entrypoint for the typefmt conformance harness.

use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};
use typefmt_core::{FormatOptions, Formatter, env_options};
use typefmt_harness::structured_log::{
    ArtifactIndex, LogEmitter, LogEntry, LogLevel, Outcome, StreamKind, now_utc, validate_log_file,
};
use typefmt_harness::{ConformanceReport, FixtureArg, TestRunner, VerificationSummary, fixtures, inspect};

/// Conformance tooling for typefmt.
#[derive(Debug, Parser)]
#[command(name = "typefmt-harness")]
#[command(about = "Conformance testing harness for typefmt")]
struct Cli {
    /// Trigger character (overrides TYPEFMT_TRIGGER).
    #[arg(long, global = true)]
    trigger: Option<char>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Format one template and print the result.
    Render {
        template: String,
        /// Argument as <kind>:<value>, kind one of int|uint|float|text|address. Repeatable.
        #[arg(long = "arg")]
        args: Vec<FixtureArg>,
    },
    /// Print the segments of a template as JSON.
    Parse { template: String },
    /// Verify the engine against fixture files.
    Verify {
        /// Directory containing fixture JSON files.
        #[arg(long, default_value = "tests/conformance/fixtures")]
        fixture: PathBuf,
        /// Output report path (markdown; JSON and artifact index are written beside it).
        #[arg(long)]
        report: Option<PathBuf>,
        /// JSONL structured log output.
        #[arg(long)]
        log: Option<PathBuf>,
        #[arg(long, default_value = "fixture-verify")]
        campaign: String,
    },
    /// Validate a JSONL log against the structured-log contract.
    ValidateLog { path: PathBuf },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let options = resolve_options(cli.trigger)?;

    match cli.command {
        Command::Render { template, args } => {
            let args: Vec<_> = args.iter().map(FixtureArg::as_arg).collect();
            let out = Formatter::new(options).format(&template, &args)?;
            println!("{out}");
        }
        Command::Parse { template } => {
            let views = inspect::describe(&template, &options);
            println!("{}", serde_json::to_string_pretty(&views)?);
        }
        Command::Verify {
            fixture,
            report,
            log,
            campaign,
        } => {
            let started = Instant::now();
            eprintln!("Verifying against fixtures in {}", fixture.display());
            let fixture_sets = fixtures::load_dir(&fixture)?;

            let run_id = format!("run-{}", std::process::id());
            let mut emitter = match &log {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    Some(LogEmitter::to_file(path, &run_id, &campaign)?)
                }
                None => None,
            };

            let runner = TestRunner::new(campaign.clone(), options);
            let mut results = Vec::new();
            for set in &fixture_sets {
                match emitter.as_mut() {
                    Some(emitter) => results.extend(runner.run_logged(set, emitter)?),
                    None => results.extend(runner.run(set)),
                }
            }

            let report_doc = ConformanceReport {
                title: String::from("typefmt Conformance Report"),
                campaign: campaign.clone(),
                trigger: options.trigger(),
                timestamp: now_utc(),
                summary: VerificationSummary::from_results(results),
            };
            eprintln!(
                "Verification complete: total={}, passed={}, failed={}",
                report_doc.summary.total, report_doc.summary.passed, report_doc.summary.failed
            );
            for failure in report_doc.summary.failures() {
                eprintln!("FAIL {}: {}", failure.case_name, failure.template);
            }

            let mut artifact_refs = Vec::new();
            if let Some(report_path) = report {
                if let Some(parent) = report_path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                eprintln!("Writing report to {}", report_path.display());
                let markdown = report_doc.to_markdown();
                std::fs::write(&report_path, &markdown)?;
                let json_path = report_path.with_extension("json");
                let json = report_doc.to_json();
                std::fs::write(&json_path, &json)?;

                let mut index = ArtifactIndex::new(&run_id);
                index
                    .add_bytes(report_path.display().to_string(), "report_markdown", markdown.as_bytes())
                    .add_bytes(json_path.display().to_string(), "report_json", json.as_bytes());
                let index_path = report_path.with_extension("artifacts.json");
                std::fs::write(&index_path, index.to_json()?)?;
                eprintln!("Wrote artifact index to {}", index_path.display());
                artifact_refs = index.artifacts.iter().map(|a| a.path.clone()).collect();
            }

            if let Some(emitter) = emitter.as_mut() {
                let outcome = if report_doc.summary.all_passed() {
                    Outcome::Pass
                } else {
                    Outcome::Fail
                };
                let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
                emitter.emit_entry(
                    LogEntry::new(String::new(), LogLevel::Info, "run_summary")
                        .with_stream(StreamKind::Conformance)
                        .with_outcome(outcome)
                        .with_duration_ms(duration_ms)
                        .with_artifacts(artifact_refs)
                        .with_details(serde_json::json!({
                            "total": report_doc.summary.total,
                            "passed": report_doc.summary.passed,
                            "failed": report_doc.summary.failed,
                        })),
                )?;
                emitter.flush()?;
            }

            if !report_doc.summary.all_passed() {
                return Err("Conformance verification failed".into());
            }
        }
        Command::ValidateLog { path } => {
            let (lines, errors) = validate_log_file(&path)?;
            for error in &errors {
                eprintln!("{error}");
            }
            eprintln!(
                "Validated {lines} line(s) in {}: {} error(s)",
                path.display(),
                errors.len()
            );
            if !errors.is_empty() {
                return Err(format!("{} invalid log field(s)", errors.len()).into());
            }
        }
    }
    Ok(())
}

fn resolve_options(trigger: Option<char>) -> Result<FormatOptions, Box<dyn std::error::Error>> {
    let options = env_options();
    Ok(match trigger {
        Some(trigger) => options.with_trigger(trigger)?,
        None => options,
    })
}
