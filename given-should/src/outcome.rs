use similar::ChangeTag;
use similar::TextDiff;
use std::fmt;
use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;

/// Why a registered case failed. Carried through the engine's reporting
/// channel; the adapter never catches or recovers from one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
  /// The resolved actual value differed from the expected value under
  /// structural equality. Both sides are kept as their pretty `Debug`
  /// renderings, with unset fields rendered as `<unset>`.
  Mismatch { expected: String, actual: String },
  /// The pending actual computation failed before producing a value.
  Rejected { reason: String },
}

impl Failure {
  pub(crate) fn mismatch<T: Debug>(expected: &Option<T>, actual: &Option<T>) -> Self {
    Failure::Mismatch {
      expected: render(expected),
      actual: render(actual),
    }
  }

  pub(crate) fn rejected(err: anyhow::Error) -> Self {
    Failure::Rejected {
      reason: format!("{err:#}"),
    }
  }

  /// Sign-prefixed line diff of the rendered values, expected first. `None`
  /// for rejections, which have no values to compare.
  pub fn diff(&self) -> Option<String> {
    let Failure::Mismatch { expected, actual } = self else {
      return None;
    };
    let mut out = String::new();
    let diff = TextDiff::from_lines(expected.as_str(), actual.as_str());
    for change in diff.iter_all_changes() {
      let sign = match change.tag() {
        ChangeTag::Delete => "-",
        ChangeTag::Insert => "+",
        ChangeTag::Equal => " ",
      };
      out.push_str(sign);
      out.push_str(change.as_str().unwrap_or_default());
      if !out.ends_with('\n') {
        out.push('\n');
      }
    }
    Some(out)
  }
}

impl Display for Failure {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Failure::Mismatch { expected, actual } => {
        write!(f, "expected:\n{expected}\nactual:\n{actual}")?;
        if let Some(diff) = self.diff() {
          write!(f, "\ndiff:\n{diff}")?;
        }
        Ok(())
      }
      Failure::Rejected { reason } => write!(f, "actual computation failed: {reason}"),
    }
  }
}

fn render<T: Debug>(value: &Option<T>) -> String {
  match value {
    Some(value) => format!("{value:#?}"),
    None => "<unset>".to_string(),
  }
}
