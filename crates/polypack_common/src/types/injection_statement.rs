use arcstr::ArcStr;

use crate::InjectMethod;

/// One prerequisite reference, rendered as a single statement at the top
/// of an entry module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectionStatement {
  pub reference: ArcStr,
  pub method: InjectMethod,
}

impl InjectionStatement {
  pub fn new(reference: impl Into<ArcStr>, method: InjectMethod) -> Self {
    Self { reference: reference.into(), method }
  }

  pub fn render(&self) -> String {
    match self.method {
      InjectMethod::Import => format!("import \"{}\";", self.reference),
      InjectMethod::Require => format!("require(\"{}\");", self.reference),
    }
  }
}

#[test]
fn test() {
  assert_eq!(
    InjectionStatement::new("core-js", InjectMethod::Import).render(),
    "import \"core-js\";"
  );
  assert_eq!(
    InjectionStatement::new("/src/polyfill.js", InjectMethod::Require).render(),
    "require(\"/src/polyfill.js\");"
  );
}
