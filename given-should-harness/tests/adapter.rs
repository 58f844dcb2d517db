use given_should::assert;
use given_should::assert_skip;
use given_should::Assertion;
use given_should_harness::run_suite;
use given_should_harness::to_json_pretty;
use given_should_harness::write_json_report;
use given_should_harness::RunOptions;
use given_should_harness::Suite;
use given_should_harness::TestOutcome;
use std::time::Duration;

#[test]
fn plain_value_assertion_passes() {
  let mut suite = Suite::new();
  let test_fn = || "foo";
  assert(
    &mut suite,
    Assertion::new()
      .given("a pure function")
      .should("return its constant")
      .actual(test_fn())
      .expected("foo"),
  );
  let report = run_suite(suite, &RunOptions::default()).unwrap();
  assert_eq!(report.results.len(), 1);
  assert_eq!(
    report.results[0].name,
    "given a pure function: should return its constant"
  );
  assert_eq!(report.results[0].outcome, TestOutcome::Passed);
  assert_eq!(report.results[0].failure, None);
}

#[test]
fn pending_value_assertion_is_awaited() {
  let mut suite = Suite::new();
  assert(
    &mut suite,
    Assertion::new()
      .given("an async function")
      .should("resolve to its value")
      .actual_future(async { "foo" })
      .expected("foo"),
  );
  let report = run_suite(suite, &RunOptions::default()).unwrap();
  assert_eq!(report.results[0].outcome, TestOutcome::Passed);
}

#[test]
fn mismatch_fails_with_both_values_in_the_diagnostic() {
  let mut suite = Suite::new();
  assert(
    &mut suite,
    Assertion::new()
      .given("a mismatch")
      .should("fail with a diff")
      .actual(vec![1, 2])
      .expected(vec![1, 3]),
  );
  let report = run_suite(suite, &RunOptions::default()).unwrap();
  assert_eq!(report.results[0].outcome, TestOutcome::Failed);
  assert!(report.summary.has_failures());
  let failure = report.results[0].failure.as_deref().unwrap();
  assert!(failure.contains("expected:"));
  assert!(failure.contains("actual:"));
  assert!(failure.contains("-    3,"));
  assert!(failure.contains("+    2,"));
}

#[test]
fn rejected_computation_fails_with_its_reason() {
  let mut suite = Suite::new();
  assert(
    &mut suite,
    Assertion::new()
      .given("a failing computation")
      .should("surface the rejection")
      .actual_try_future(async { Err(anyhow::anyhow!("connection refused")) })
      .expected(1),
  );
  let report = run_suite(suite, &RunOptions::default()).unwrap();
  assert_eq!(report.results[0].outcome, TestOutcome::Failed);
  assert_eq!(
    report.results[0].failure.as_deref(),
    Some("actual computation failed: connection refused")
  );
}

#[test]
fn skipped_cases_never_execute() {
  let mut suite = Suite::new();
  assert_skip(
    &mut suite,
    Assertion::new()
      .given("x")
      .should("y")
      .actual(1)
      .expected(2),
  );
  let report = run_suite(suite, &RunOptions::default()).unwrap();
  // Mismatched values must not fail a skipped case.
  assert_eq!(report.results[0].outcome, TestOutcome::Skipped);
  assert_eq!(report.results[0].failure, None);
  assert!(!report.summary.has_failures());
}

#[test]
fn omitted_fields_default_and_compare_as_unset() {
  let mut suite = Suite::new();
  assert(&mut suite, Assertion::<i32>::new());
  assert(&mut suite, Assertion::new().given("only actual").actual(5));
  let report = run_suite(suite, &RunOptions::default()).unwrap();

  assert_eq!(report.results[0].name, "given : should ");
  assert_eq!(report.results[0].outcome, TestOutcome::Passed);

  assert_eq!(report.results[1].outcome, TestOutcome::Failed);
  let failure = report.results[1].failure.as_deref().unwrap();
  assert!(failure.contains("<unset>"));
}

#[test]
fn duplicate_registrations_run_independently() {
  let mut suite = Suite::new();
  for _ in 0..2 {
    assert(
      &mut suite,
      Assertion::new()
        .given("the same record")
        .should("register twice")
        .actual("foo")
        .expected("foo"),
    );
  }
  let report = run_suite(suite, &RunOptions::default()).unwrap();
  assert_eq!(report.results.len(), 2);
  assert_eq!(report.results[0].name, report.results[1].name);
  assert!(report
    .results
    .iter()
    .all(|r| r.outcome == TestOutcome::Passed));
}

#[test]
fn cases_run_in_declaration_order() {
  let mut suite = Suite::new();
  for idx in 0..4 {
    assert(
      &mut suite,
      Assertion::new()
        .given(format!("case {idx}"))
        .actual(idx)
        .expected(idx),
    );
  }
  let report = run_suite(suite, &RunOptions::default()).unwrap();
  let names: Vec<&str> = report.results.iter().map(|r| r.name.as_str()).collect();
  assert_eq!(
    names,
    vec![
      "given case 0: should ",
      "given case 1: should ",
      "given case 2: should ",
      "given case 3: should ",
    ]
  );
}

#[test]
fn unresolved_bodies_time_out() {
  let mut suite = Suite::new();
  assert(
    &mut suite,
    Assertion::new()
      .given("a never-resolving computation")
      .should("be reported as timed out")
      .actual_future(std::future::pending::<i32>())
      .expected(1),
  );
  let opts = RunOptions {
    timeout: Some(Duration::from_millis(50)),
  };
  let report = run_suite(suite, &opts).unwrap();
  assert_eq!(report.results[0].outcome, TestOutcome::TimedOut);
  assert!(report.summary.has_failures());
  assert!(report.results[0]
    .failure
    .as_deref()
    .unwrap()
    .contains("did not resolve"));
}

#[test]
fn json_report_round_trips_to_disk() {
  let mut suite = Suite::new();
  assert(
    &mut suite,
    Assertion::new().given("a").should("b").actual(1).expected(1),
  );
  let report = run_suite(suite, &RunOptions::default()).unwrap();

  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("nested").join("report.json");
  write_json_report(&path, &report).unwrap();

  let on_disk = std::fs::read_to_string(&path).unwrap();
  let mut expected = to_json_pretty(&report).unwrap();
  expected.push('\n');
  assert_eq!(on_disk, expected);
  assert!(on_disk.contains("\"name\": \"given a: should b\""));
}
