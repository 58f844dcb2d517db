use crate::assertion::Assertion;
use crate::outcome::Failure;
use std::fmt::Debug;
use std::future::Future;
use std::pin::Pin;

/// The deferred body of one registered case: resolves `actual`, compares it
/// against `expected`, and reports a [`Failure`] on mismatch or rejection.
pub type TestBody = Pin<Box<dyn Future<Output = Result<(), Failure>> + Send>>;

/// Registration seam between the adapter and a host test engine.
///
/// The adapter is a thin pass-through: execution order, timeouts, and the
/// scope over which exclusive registrations suppress normal ones are all
/// defined by the engine implementation, not here.
pub trait Engine {
  /// Registers a case executed under the engine's normal scheduling.
  fn register(&mut self, name: String, body: TestBody);

  /// Registers an exclusive case. When at least one exclusive case exists
  /// in the engine's scope, only exclusive cases run; normal cases in that
  /// scope are skipped, not failed. Multiple exclusive cases all run.
  fn register_exclusive(&mut self, name: String, body: TestBody);

  /// Registers a case that is recorded but never executed.
  fn register_skipped(&mut self, name: String, body: TestBody);
}

/// Registers `assertion` with the engine's normal primitive. Registration is
/// synchronous and never fails; the comparison is deferred to the engine's
/// execution phase.
pub fn assert<T, E>(engine: &mut E, assertion: Assertion<T>)
where
  T: PartialEq + Debug + Send + 'static,
  E: Engine + ?Sized,
{
  let (name, body) = assertion.into_case();
  engine.register(name, body);
}

/// Registers `assertion` with the engine's exclusive primitive.
pub fn assert_only<T, E>(engine: &mut E, assertion: Assertion<T>)
where
  T: PartialEq + Debug + Send + 'static,
  E: Engine + ?Sized,
{
  let (name, body) = assertion.into_case();
  engine.register_exclusive(name, body);
}

/// Registers `assertion` with the engine's skip primitive.
pub fn assert_skip<T, E>(engine: &mut E, assertion: Assertion<T>)
where
  T: PartialEq + Debug + Send + 'static,
  E: Engine + ?Sized,
{
  let (name, body) = assertion.into_case();
  engine.register_skipped(name, body);
}
