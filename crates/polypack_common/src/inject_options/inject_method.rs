use std::fmt::Display;
use std::str::FromStr;

/// Build-wide rendering style for injected statements.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum InjectMethod {
  #[default]
  Import,
  Require,
}

impl Display for InjectMethod {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Import => write!(f, "import"),
      Self::Require => write!(f, "require"),
    }
  }
}

impl FromStr for InjectMethod {
  type Err = anyhow::Error;

  fn from_str(value: &str) -> Result<Self, Self::Err> {
    match value {
      "import" => Ok(Self::Import),
      "require" => Ok(Self::Require),
      _ => Err(anyhow::anyhow!(
        "Invalid value {value:?} for option \"method\" - valid values are \"import\" and \"require\"."
      )),
    }
  }
}

#[test]
fn test() {
  assert_eq!("import".parse::<InjectMethod>().unwrap(), InjectMethod::Import);
  assert_eq!("require".parse::<InjectMethod>().unwrap(), InjectMethod::Require);

  let error = "commonjs".parse::<InjectMethod>().unwrap_err().to_string();
  assert!(error.contains("\"commonjs\""));
  assert!(error.contains("\"import\"") && error.contains("\"require\""));
}
