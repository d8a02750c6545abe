use std::fmt;
use std::ops::{Deref, DerefMut};

/// Aggregated failure of a build invocation. Holds every diagnostic the
/// build collected before giving up, in the order they were produced.
#[derive(Debug)]
pub struct BuildError(pub Vec<anyhow::Error>);

impl BuildError {
  pub fn into_vec(self) -> Vec<anyhow::Error> {
    self.0
  }
}

impl fmt::Display for BuildError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (index, error) in self.0.iter().enumerate() {
      if index > 0 {
        writeln!(f)?;
      }
      write!(f, "{error}")?;
    }
    Ok(())
  }
}

impl Deref for BuildError {
  type Target = Vec<anyhow::Error>;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl DerefMut for BuildError {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.0
  }
}

impl From<anyhow::Error> for BuildError {
  fn from(error: anyhow::Error) -> Self {
    Self(vec![error])
  }
}

impl From<Vec<anyhow::Error>> for BuildError {
  fn from(errors: Vec<anyhow::Error>) -> Self {
    Self(errors)
  }
}

impl FromIterator<anyhow::Error> for BuildError {
  fn from_iter<I: IntoIterator<Item = anyhow::Error>>(iter: I) -> Self {
    Self(iter.into_iter().collect())
  }
}

pub type BuildResult<T> = anyhow::Result<T, BuildError>;
