use given_should::Engine;
use given_should::TestBody;

/// Which registration primitive produced a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Registration {
  Normal,
  Exclusive,
  Skipped,
}

pub(crate) struct RegisteredCase {
  pub name: String,
  pub registration: Registration,
  pub body: TestBody,
}

/// Declaration-ordered case registry. One `Suite` value is one exclusivity
/// scope: exclusive cases suppress only the normal cases registered on the
/// same value.
#[derive(Default)]
pub struct Suite {
  cases: Vec<RegisteredCase>,
  exclusive: usize,
}

impl Suite {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn len(&self) -> usize {
    self.cases.len()
  }

  pub fn is_empty(&self) -> bool {
    self.cases.is_empty()
  }

  /// Whether any exclusive case has been registered, which switches the
  /// runner into only-mode for this suite.
  pub fn has_exclusive(&self) -> bool {
    self.exclusive > 0
  }

  pub(crate) fn into_cases(self) -> (Vec<RegisteredCase>, bool) {
    let exclusive = self.exclusive > 0;
    (self.cases, exclusive)
  }

  fn push(&mut self, name: String, registration: Registration, body: TestBody) {
    if registration == Registration::Exclusive {
      self.exclusive += 1;
    }
    self.cases.push(RegisteredCase {
      name,
      registration,
      body,
    });
  }
}

impl Engine for Suite {
  fn register(&mut self, name: String, body: TestBody) {
    self.push(name, Registration::Normal, body);
  }

  fn register_exclusive(&mut self, name: String, body: TestBody) {
    self.push(name, Registration::Exclusive, body);
  }

  fn register_skipped(&mut self, name: String, body: TestBody) {
    self.push(name, Registration::Skipped, body);
  }
}
