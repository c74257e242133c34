#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
  #[default]
  Development,
  Production,
}

impl BuildMode {
  pub fn is_production(self) -> bool {
    matches!(self, Self::Production)
  }
}

impl From<&str> for BuildMode {
  /// Anything that is not literally `production` builds for development,
  /// matching the host bundler's mode string semantics.
  fn from(value: &str) -> Self {
    if value == "production" { Self::Production } else { Self::Development }
  }
}

#[test]
fn mode_string_semantics() {
  assert_eq!(BuildMode::from("production"), BuildMode::Production);
  assert_eq!(BuildMode::from("development"), BuildMode::Development);
  assert_eq!(BuildMode::from("staging"), BuildMode::Development);
  assert!(!BuildMode::from("").is_production());
}
