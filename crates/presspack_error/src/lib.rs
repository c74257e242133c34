use std::{
  fmt,
  ops::{Deref, DerefMut},
  path::Path,
};

/// Aggregate build failure. A build either succeeds or reports every error it
/// collected before aborting.
#[derive(Debug)]
pub struct BuildError(pub Vec<anyhow::Error>);

impl BuildError {
  /// Fatal configuration error, raised before any build work starts.
  pub fn config(message: impl Into<String>) -> Self {
    Self(vec![anyhow::anyhow!("invalid plugin configuration: {}", message.into())])
  }

  /// The manifest was explicitly requested but is not readable.
  pub fn manifest_read(path: &Path) -> Self {
    Self(vec![anyhow::anyhow!("failed to read manifest at {}", path.display())])
  }

  /// Filesystem failure during cleanup or emission. These are fatal: a build
  /// that cannot write its outputs must fail loudly.
  pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
    Self(vec![anyhow::Error::new(source).context(context.into())])
  }
}

impl fmt::Display for BuildError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (index, error) in self.0.iter().enumerate() {
      if index > 0 {
        writeln!(f)?;
      }
      write!(f, "{error:#}")?;
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

pub type BuildResult<T> = anyhow::Result<T, BuildError>;

#[test]
fn display_joins_collected_errors() {
  let error = BuildError(vec![anyhow::anyhow!("first"), anyhow::anyhow!("second")]);
  assert_eq!(error.to_string(), "first\nsecond");
}
