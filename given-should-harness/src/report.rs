use crate::runner::Summary;
use crate::runner::SuiteReport;
use crate::runner::TestOutcome;
use crate::runner::TestResult;
use crate::Result;
use std::fs;
use std::path::Path;

fn outcome_label(outcome: TestOutcome) -> &'static str {
  match outcome {
    TestOutcome::Passed => "PASS",
    TestOutcome::Failed => "FAIL",
    TestOutcome::Skipped => "SKIP",
    TestOutcome::TimedOut => "TIMEOUT",
  }
}

pub fn render_case_line(result: &TestResult) -> String {
  format!("{} {}", outcome_label(result.outcome), result.name)
}

pub fn render_summary(summary: &Summary) -> String {
  let executed = summary.outcomes.passed + summary.outcomes.failures();
  format!(
    "{} ({}%) passed, {} failed, {} timed out, {} skipped",
    summary.outcomes.passed,
    percentage(summary.outcomes.passed, executed),
    summary.outcomes.failed,
    summary.outcomes.timed_out,
    summary.outcomes.skipped
  )
}

fn percentage(part: usize, whole: usize) -> f64 {
  if whole == 0 {
    return 0.0;
  }
  part as f64 / whole as f64 * 100.0
}

/// Prints one line per case to stdout, failure diagnostics to stderr, and a
/// closing summary line.
pub fn print_report(report: &SuiteReport) {
  for result in &report.results {
    println!("{}", render_case_line(result));
    if let Some(failure) = &result.failure {
      eprintln!("Test {} failed:\n{}", result.name, failure);
    }
  }
  println!("{}", render_summary(&report.summary));
}

/// Serializes the report as pretty JSON. Output is deterministic: results
/// keep declaration order and all keys come from struct field order.
pub fn to_json_pretty(report: &SuiteReport) -> Result<String> {
  Ok(serde_json::to_string_pretty(report)?)
}

/// Writes the pretty-JSON report to `path`, creating parent directories as
/// needed.
pub fn write_json_report(path: &Path, report: &SuiteReport) -> Result<()> {
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent)?;
  }
  let mut json = to_json_pretty(report)?;
  json.push('\n');
  fs::write(path, json)?;
  Ok(())
}
