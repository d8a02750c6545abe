use std::fmt::Display;

use crate::InjectMethod;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
  Esm,
  Cjs,
}

impl OutputFormat {
  /// Whether a statement of the given rendering style can appear in this
  /// output format. Injected `import` syntax is compiled away by the
  /// bundler, but a raw `require(...)` call has no meaning in pure ESM
  /// output.
  #[inline]
  pub fn supports_inject_method(&self, method: InjectMethod) -> bool {
    match self {
      Self::Esm => matches!(method, InjectMethod::Import),
      Self::Cjs => true,
    }
  }
}

impl Display for OutputFormat {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Esm => write!(f, "esm"),
      Self::Cjs => write!(f, "cjs"),
    }
  }
}

#[test]
fn test() {
  assert!(OutputFormat::Esm.supports_inject_method(InjectMethod::Import));
  assert!(!OutputFormat::Esm.supports_inject_method(InjectMethod::Require));
  assert!(OutputFormat::Cjs.supports_inject_method(InjectMethod::Require));
  assert!(OutputFormat::Cjs.supports_inject_method(InjectMethod::Import));
}
