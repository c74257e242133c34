/// One entry pattern: an ordered sequence of literal or glob path segments,
/// matched relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputPattern(pub Vec<String>);

impl InputPattern {
  pub fn as_glob(&self) -> String {
    self.0.join("/")
  }
}

impl From<&str> for InputPattern {
  fn from(value: &str) -> Self {
    Self(value.split('/').map(ToString::to_string).collect())
  }
}

/// Entry files to bundle. `interactivity` entries compile as native ES
/// modules and skip the global-guard wrapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputSpec {
  pub entries: Vec<InputPattern>,
  pub interactivity: Vec<InputPattern>,
}

impl InputSpec {
  /// The conventional WordPress theme/plugin source layout.
  pub fn wordpress_defaults() -> Self {
    Self {
      entries: vec![
        "*/*.js".into(),
        "blocks/*/index.js".into(),
        "blocks/*/view.js".into(),
        "blocks/*/block.json".into(),
        "blocks/*/render.php".into(),
      ],
      interactivity: vec![],
    }
  }
}

#[test]
fn pattern_round_trip() {
  let pattern = InputPattern::from("blocks/*/index.js");
  assert_eq!(pattern.0, vec!["blocks", "*", "index.js"]);
  assert_eq!(pattern.as_glob(), "blocks/*/index.js");
}
