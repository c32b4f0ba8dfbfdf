//! Test execution engine.

use std::time::Instant;

use typefmt_core::{FormatOptions, Formatter};

use crate::diff;
use crate::fixtures::{FixtureCase, FixtureSet};
use crate::structured_log::{LogEmitter, LogEntry, LogLevel, Outcome, StreamKind};
use crate::verify::VerificationResult;

/// Runs fixture sets through the engine and collects verification results.
#[derive(Debug, Clone)]
pub struct TestRunner {
    /// Name of the test campaign.
    pub campaign: String,
    /// Options applied to every case without its own trigger.
    pub options: FormatOptions,
}

/// What one case produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseRun {
    /// Rendered text, or `error:<Code>`.
    pub actual: String,
    pub error_code: Option<&'static str>,
    pub latency_ns: u64,
}

impl TestRunner {
    #[must_use]
    pub fn new(campaign: impl Into<String>, options: FormatOptions) -> Self {
        Self {
            campaign: campaign.into(),
            options,
        }
    }

    /// Run all cases in a set and return results.
    #[must_use]
    pub fn run(&self, fixture_set: &FixtureSet) -> Vec<VerificationResult> {
        fixture_set
            .cases
            .iter()
            .map(|case| self.verify_case(fixture_set, case, &self.execute(case)))
            .collect()
    }

    /// Like [`run`](Self::run), emitting one `case_result` entry per case.
    pub fn run_logged(
        &self,
        fixture_set: &FixtureSet,
        log: &mut LogEmitter,
    ) -> std::io::Result<Vec<VerificationResult>> {
        let mut results = Vec::with_capacity(fixture_set.cases.len());
        for case in &fixture_set.cases {
            let run = self.execute(case);
            let result = self.verify_case(fixture_set, case, &run);
            log.emit_entry(self.case_entry(case, &run, &result))?;
            results.push(result);
        }
        Ok(results)
    }

    /// Execute one case without comparing it.
    #[must_use]
    pub fn execute(&self, case: &FixtureCase) -> CaseRun {
        let options = match case.trigger {
            Some(trigger) => match self.options.with_trigger(trigger) {
                Ok(options) => options,
                Err(_) => {
                    return CaseRun {
                        actual: String::from("error:InvalidTrigger"),
                        error_code: Some("InvalidTrigger"),
                        latency_ns: 0,
                    };
                }
            },
            None => self.options,
        };
        let args = case.args();
        let started = Instant::now();
        let rendered = Formatter::new(options).format(&case.template, &args);
        let latency_ns = u64::try_from(started.elapsed().as_nanos()).unwrap_or(u64::MAX);
        match rendered {
            Ok(text) => CaseRun {
                actual: text,
                error_code: None,
                latency_ns,
            },
            Err(err) => CaseRun {
                actual: format!("error:{}", err.code()),
                error_code: Some(err.code()),
                latency_ns,
            },
        }
    }

    fn case_entry(&self, case: &FixtureCase, run: &CaseRun, result: &VerificationResult) -> LogEntry {
        let (level, outcome) = if result.passed {
            (LogLevel::Info, Outcome::Pass)
        } else {
            (LogLevel::Error, Outcome::Fail)
        };
        let mut details = serde_json::json!({ "campaign": self.campaign });
        if !result.passed {
            details["expected"] = serde_json::json!(result.expected);
            details["actual"] = serde_json::json!(result.actual);
        }
        let mut entry = LogEntry::new(String::new(), level, "case_result")
            .with_stream(StreamKind::Conformance)
            .with_case(&case.name, &case.template)
            .with_outcome(outcome)
            .with_latency_ns(run.latency_ns)
            .with_details(details);
        if let Some(code) = run.error_code {
            entry = entry.with_error_code(code);
        }
        entry
    }

    fn verify_case(&self, set: &FixtureSet, case: &FixtureCase, run: &CaseRun) -> VerificationResult {
        let passed = run.actual == case.expected_output;
        VerificationResult {
            case_name: case.name.clone(),
            family: set.family.clone(),
            section: case.section.clone(),
            template: case.template.clone(),
            passed,
            expected: case.expected_output.clone(),
            actual: run.actual.clone(),
            diff: (!passed).then(|| diff::render_diff(&case.expected_output, &run.actual)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structured_log::validate_log_text;

    fn fixture() -> FixtureSet {
        FixtureSet::from_json(
            r#"{
                "version":"v1",
                "family":"format/smoke",
                "captured_at":"2026-10-19T00:00:00Z",
                "cases":[
                    {"name":"hex","section":"numeric","template":"x=[%04x]","args":[{"kind":"int","value":255}],"expected_output":"x=[00ff]"},
                    {"name":"mismatch","section":"render","template":"%d","args":[{"kind":"float","value":3.14}],"expected_output":"error:TypeMismatch"},
                    {"name":"dollar","section":"config","template":"$d%","args":[{"kind":"uint","value":5}],"expected_output":"5%","trigger":"$"},
                    {"name":"wrong","section":"driver","template":"%s","args":[{"kind":"text","value":"a"}],"expected_output":"b"}
                ]
            }"#,
        )
        .expect("valid fixture json")
    }

    #[test]
    fn runner_compares_text_and_error_codes() {
        let results = TestRunner::new("smoke", FormatOptions::default()).run(&fixture());
        assert_eq!(results.len(), 4);
        assert!(results[0].passed);
        assert!(results[1].passed, "{:?}", results[1]);
        assert!(results[2].passed, "{:?}", results[2]);
        assert!(!results[3].passed);
        assert_eq!(results[3].actual, "a");
        assert!(results[3].diff.as_deref().unwrap().contains("+a"));
        assert_eq!(results[0].family, "format/smoke");
    }

    #[test]
    fn invalid_case_trigger_is_reported() {
        let mut set = fixture();
        set.cases[0].trigger = Some('a');
        set.cases[0].expected_output = String::from("error:InvalidTrigger");
        let runner = TestRunner::new("smoke", FormatOptions::default());
        let run = runner.execute(&set.cases[0]);
        assert_eq!(run.error_code, Some("InvalidTrigger"));
        assert_eq!(run.actual, "error:InvalidTrigger");
        assert!(runner.run(&set)[0].passed);
    }

    #[test]
    fn logged_run_emits_one_valid_line_per_case() {
        let (mut log, buffer) = LogEmitter::to_buffer("run-1", "smoke");
        let results = TestRunner::new("smoke", FormatOptions::default())
            .run_logged(&fixture(), &mut log)
            .unwrap();
        assert_eq!(results.len(), 4);

        let text = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
        let (lines, errors) = validate_log_text(&text);
        assert_eq!(lines, 4);
        assert!(errors.is_empty(), "{errors:?}");
        let last: serde_json::Value = serde_json::from_str(text.lines().last().unwrap()).unwrap();
        assert_eq!(last["trace_id"], "run-1::smoke::004");
        assert_eq!(last["outcome"], "fail");
        assert_eq!(last["details"]["actual"], "a");
        assert_eq!(last["details"]["campaign"], "smoke");
        let first: serde_json::Value = serde_json::from_str(text.lines().next().unwrap()).unwrap();
        assert_eq!(first["details"]["campaign"], "smoke");
        assert!(first["details"].get("expected").is_none());
    }
}
