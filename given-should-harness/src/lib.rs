//! In-process test engine for `given-should` suites.
//!
//! [`Suite`] implements the adapter's `Engine` trait and records cases in
//! declaration order. [`run_suite`] executes them on a current-thread async
//! runtime with only/skip semantics: when any exclusive case exists in a
//! suite, normal cases in that suite are reported skipped rather than run.
//! One `Suite` value is one exclusivity scope; separate suites never
//! interact.

use std::io;
use thiserror::Error;

pub mod report;
pub mod runner;
pub mod suite;

pub type Result<T> = std::result::Result<T, HarnessError>;

#[derive(Debug, Error)]
pub enum HarnessError {
  #[error(transparent)]
  Io(#[from] io::Error),
  #[error("serialize report: {0}")]
  Serialize(#[from] serde_json::Error),
}

pub use report::print_report;
pub use report::render_case_line;
pub use report::render_summary;
pub use report::to_json_pretty;
pub use report::write_json_report;
pub use runner::run_suite;
pub use runner::OutcomeCounts;
pub use runner::RunOptions;
pub use runner::SuiteReport;
pub use runner::Summary;
pub use runner::TestOutcome;
pub use runner::TestResult;
pub use suite::Suite;
