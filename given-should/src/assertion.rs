use crate::engine::TestBody;
use crate::outcome::Failure;
use std::fmt;
use std::fmt::Debug;
use std::fmt::Formatter;
use std::future::Future;
use std::pin::Pin;

/// The `actual` side of an assertion: either an already-resolved value, or a
/// pending computation the engine awaits before comparing.
pub enum Actual<T> {
  Ready(T),
  Pending(Pin<Box<dyn Future<Output = anyhow::Result<T>> + Send>>),
}

impl<T: Debug> Debug for Actual<T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Actual::Ready(value) => f.debug_tuple("Ready").field(value).finish(),
      Actual::Pending(_) => f.write_str("Pending(..)"),
    }
  }
}

/// One given/should/actual/expected record.
///
/// All fields default to unset (`should` to the empty string) and none of
/// the setters can fail; an incomplete record still registers cleanly and
/// its description degrades gracefully. The record is consumed wholesale at
/// registration time, so registering the same configuration twice yields two
/// independent cases with identical names.
#[derive(Debug)]
pub struct Assertion<T> {
  given: Option<String>,
  should: String,
  actual: Option<Actual<T>>,
  expected: Option<T>,
}

impl<T> Default for Assertion<T> {
  fn default() -> Self {
    Self {
      given: None,
      should: String::new(),
      actual: None,
      expected: None,
    }
  }
}

impl<T> Assertion<T> {
  pub fn new() -> Self {
    Self::default()
  }

  /// Scenario under test.
  pub fn given(mut self, given: impl Into<String>) -> Self {
    self.given = Some(given.into());
    self
  }

  /// Expected behavior.
  pub fn should(mut self, should: impl Into<String>) -> Self {
    self.should = should.into();
    self
  }

  /// Already-resolved actual value.
  pub fn actual(mut self, actual: T) -> Self {
    self.actual = Some(Actual::Ready(actual));
    self
  }

  /// Pending actual value; awaited by the engine before comparison.
  pub fn actual_future<F>(mut self, future: F) -> Self
  where
    F: Future<Output = T> + Send + 'static,
    T: Send + 'static,
  {
    self.actual = Some(Actual::Pending(Box::pin(async move { Ok(future.await) })));
    self
  }

  /// Pending actual value that may reject; a rejection fails the case with
  /// the error as its failure reason.
  pub fn actual_try_future<F>(mut self, future: F) -> Self
  where
    F: Future<Output = anyhow::Result<T>> + Send + 'static,
  {
    self.actual = Some(Actual::Pending(Box::pin(future)));
    self
  }

  /// Value the resolved actual must structurally equal.
  pub fn expected(mut self, expected: T) -> Self {
    self.expected = Some(expected);
    self
  }

  /// `given <given>: should <should>`, with an unset `given` rendering as
  /// the empty string.
  pub fn description(&self) -> String {
    format!(
      "given {}: should {}",
      self.given.as_deref().unwrap_or(""),
      self.should
    )
  }
}

impl<T> Assertion<T>
where
  T: PartialEq + Debug + Send + 'static,
{
  /// Consumes the record into its case name and deferred body. The body
  /// resolves `actual` (its only suspension point), then compares against
  /// `expected`; unset compares equal to unset.
  pub(crate) fn into_case(self) -> (String, TestBody) {
    let name = self.description();
    let Assertion {
      actual, expected, ..
    } = self;
    let body: TestBody = Box::pin(async move {
      let resolved = match actual {
        None => None,
        Some(Actual::Ready(value)) => Some(value),
        Some(Actual::Pending(pending)) => match pending.await {
          Ok(value) => Some(value),
          Err(err) => return Err(Failure::rejected(err)),
        },
      };
      if resolved == expected {
        Ok(())
      } else {
        Err(Failure::mismatch(&expected, &resolved))
      }
    });
    (name, body)
  }
}
