//! Given/should style assertions over a pluggable test engine.
//!
//! An [`Assertion`] describes one test case as four fields: `given` (the
//! scenario), `should` (the expected behavior), `actual` (a value, or a
//! pending computation yielding one), and `expected` (the value to compare
//! against). [`assert`], [`assert_only`], and [`assert_skip`] turn that
//! record into a named asynchronous case and hand it to an [`Engine`] for
//! later execution. The adapter itself runs nothing: scheduling, exclusivity
//! scope, and reporting belong to whichever engine is plugged in.

pub mod assertion;
pub mod engine;
pub mod outcome;

pub use assertion::Actual;
pub use assertion::Assertion;
pub use engine::assert;
pub use engine::assert_only;
pub use engine::assert_skip;
pub use engine::Engine;
pub use engine::TestBody;
pub use outcome::Failure;
