//! Integration test: shipped conformance fixtures.
//!
//! Validates that:
//! 1. Every fixture file under tests/conformance/fixtures parses.
//! 2. Every case passes against the engine with default options.
//! 3. The fixtures cover every error code and every conversion letter.
//!
//! Run: cargo test -p typefmt-harness --test fixture_verify_test

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use typefmt_core::{Conversion, FormatOptions, Segment, segments};
use typefmt_harness::structured_log::{LogEmitter, validate_log_text};
use typefmt_harness::{ConformanceReport, FixtureSet, HarnessError, TestRunner, VerificationSummary, fixtures};

fn workspace_root() -> PathBuf {
    let manifest = env!("CARGO_MANIFEST_DIR");
    Path::new(manifest)
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .to_path_buf()
}

fn fixture_dir() -> PathBuf {
    workspace_root().join("tests/conformance/fixtures")
}

fn load_all() -> Vec<FixtureSet> {
    fixtures::load_dir(&fixture_dir()).expect("fixture dir should load")
}

#[test]
fn all_fixture_cases_pass() {
    let runner = TestRunner::new("fixture-verify", FormatOptions::default());
    let mut results = Vec::new();
    for set in load_all() {
        assert_eq!(set.version, "v1", "{}", set.family);
        results.extend(runner.run(&set));
    }
    let summary = VerificationSummary::from_results(results);
    let failures: Vec<String> = summary
        .failures()
        .map(|r| format!("{} ({}): {}", r.case_name, r.template, r.diff.clone().unwrap_or_default()))
        .collect();
    assert!(summary.total >= 40, "expected a substantial corpus, got {}", summary.total);
    assert!(failures.is_empty(), "failing cases:\n{}", failures.join("\n"));
}

#[test]
fn case_names_are_unique_per_family() {
    for set in load_all() {
        let mut seen = BTreeSet::new();
        for case in &set.cases {
            assert!(seen.insert(case.name.as_str()), "duplicate case {} in {}", case.name, set.family);
        }
    }
}

#[test]
fn fixtures_cover_every_error_code() {
    let codes: BTreeSet<String> = load_all()
        .iter()
        .flat_map(|set| set.cases.iter())
        .filter_map(|case| case.expected_output.strip_prefix("error:"))
        .map(str::to_string)
        .collect();
    let expected: BTreeSet<String> = [
        "MalformedDirective",
        "UnknownConversion",
        "TypeMismatch",
        "InvalidCodePoint",
        "MissingArgument",
        "UnusedArguments",
        "FieldTooWide",
    ]
    .into_iter()
    .map(str::to_string)
    .collect();
    assert_eq!(codes, expected);
}

#[test]
fn fixtures_cover_every_conversion() {
    let mut seen = BTreeSet::new();
    for set in load_all() {
        for case in set.cases.iter().filter(|case| !case.expects_error()) {
            let options = match case.trigger {
                Some(trigger) => FormatOptions::default().with_trigger(trigger).unwrap(),
                None => FormatOptions::default(),
            };
            for segment in segments(&case.template, &options) {
                if let Segment::Directive(directive) = segment.unwrap() {
                    seen.insert(directive.conversion.letter());
                }
            }
        }
    }
    for conversion in Conversion::ALL {
        assert!(
            seen.contains(&conversion.letter()),
            "no passing fixture exercises %{conversion}"
        );
    }
}

#[test]
fn logged_verification_produces_valid_report_and_log() {
    let (mut log, buffer) = LogEmitter::to_buffer("run-test", "fixture-verify");
    let runner = TestRunner::new("fixture-verify", FormatOptions::default());
    let mut results = Vec::new();
    for set in load_all() {
        results.extend(runner.run_logged(&set, &mut log).unwrap());
    }
    let case_count = results.len();

    let report = ConformanceReport {
        title: "typefmt Conformance Report".to_string(),
        campaign: "fixture-verify".to_string(),
        trigger: '%',
        timestamp: "2026-10-19T00:00:00.000Z".to_string(),
        summary: VerificationSummary::from_results(results),
    };
    let md = report.to_markdown();
    assert!(md.contains(&format!("- Total: {case_count}")));
    assert!(md.contains("| signed_zero_pad | format/core | numeric | `d=[%012d]` | PASS |"));

    let text = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
    let (lines, errors) = validate_log_text(&text);
    assert_eq!(lines, case_count);
    assert!(errors.is_empty(), "{errors:?}");
}

#[test]
fn missing_fixture_dir_is_an_io_error() {
    let err = fixtures::load_dir(&workspace_root().join("tests/conformance/no-such-dir")).unwrap_err();
    assert!(matches!(err, HarnessError::Io { .. }), "{err}");
}
