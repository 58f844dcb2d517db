use crate::suite::RegisteredCase;
use crate::suite::Registration;
use crate::suite::Suite;
use crate::Result;
use serde::Deserialize;
use serde::Serialize;
use std::time::Duration;
use std::time::Instant;
use tokio::runtime::Builder;
use tokio::runtime::Runtime;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TestOutcome {
  Passed,
  Failed,
  Skipped,
  TimedOut,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutcomeCounts {
  pub passed: usize,
  pub failed: usize,
  pub skipped: usize,
  pub timed_out: usize,
}

impl OutcomeCounts {
  fn increment(&mut self, outcome: TestOutcome) {
    match outcome {
      TestOutcome::Passed => self.passed += 1,
      TestOutcome::Failed => self.failed += 1,
      TestOutcome::Skipped => self.skipped += 1,
      TestOutcome::TimedOut => self.timed_out += 1,
    }
  }

  pub fn failures(&self) -> usize {
    self.failed + self.timed_out
  }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Summary {
  pub total: usize,
  pub outcomes: OutcomeCounts,
}

impl Summary {
  pub fn has_failures(&self) -> bool {
    self.outcomes.failures() > 0
  }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestResult {
  pub name: String,
  pub outcome: TestOutcome,
  pub duration_ms: u128,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub failure: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteReport {
  pub summary: Summary,
  pub results: Vec<TestResult>,
}

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
  /// Per-case deadline. A body that does not resolve in time is reported
  /// timed out and its pending work is dropped. Default: no deadline.
  pub timeout: Option<Duration>,
}

/// Runs every case in `suite` sequentially, in declaration order, on a
/// current-thread async runtime.
///
/// Skip-registered cases are never executed. When the suite contains at
/// least one exclusive case, normal cases are reported skipped without
/// executing; all exclusive cases still run.
pub fn run_suite(suite: Suite, opts: &RunOptions) -> Result<SuiteReport> {
  let (cases, has_exclusive) = suite.into_cases();
  let runtime = Builder::new_current_thread().enable_time().build()?;

  let mut results = Vec::with_capacity(cases.len());
  for case in cases {
    let result = match case.registration {
      Registration::Skipped => skipped(case.name),
      Registration::Normal if has_exclusive => skipped(case.name),
      Registration::Normal | Registration::Exclusive => {
        execute_case(&runtime, case, opts.timeout)
      }
    };
    results.push(result);
  }

  let summary = summarize(&results);
  Ok(SuiteReport { summary, results })
}

fn execute_case(runtime: &Runtime, case: RegisteredCase, timeout: Option<Duration>) -> TestResult {
  tracing::debug!(name = %case.name, "running case");
  let start = Instant::now();
  let outcome = runtime.block_on(async {
    match timeout {
      Some(limit) => tokio::time::timeout(limit, case.body).await.ok(),
      None => Some(case.body.await),
    }
  });
  let duration_ms = start.elapsed().as_millis();

  match outcome {
    Some(Ok(())) => TestResult {
      name: case.name,
      outcome: TestOutcome::Passed,
      duration_ms,
      failure: None,
    },
    Some(Err(failure)) => {
      tracing::debug!(name = %case.name, "case failed");
      TestResult {
        name: case.name,
        outcome: TestOutcome::Failed,
        duration_ms,
        failure: Some(failure.to_string()),
      }
    }
    None => TestResult {
      name: case.name,
      outcome: TestOutcome::TimedOut,
      duration_ms,
      failure: timeout.map(|limit| format!("did not resolve within {limit:?}")),
    },
  }
}

fn skipped(name: String) -> TestResult {
  TestResult {
    name,
    outcome: TestOutcome::Skipped,
    duration_ms: 0,
    failure: None,
  }
}

fn summarize(results: &[TestResult]) -> Summary {
  let mut outcomes = OutcomeCounts::default();
  for result in results {
    outcomes.increment(result.outcome);
  }
  Summary {
    total: results.len(),
    outcomes,
  }
}
