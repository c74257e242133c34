/// Substitution turning a namespaced package handle into the flat handle the
/// platform registers its classic scripts under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixRewrite {
  pub from: String,
  pub to: String,
}

impl PrefixRewrite {
  pub fn apply(&self, handle: &str) -> String {
    handle.replacen(&self.from, &self.to, 1)
  }
}

impl Default for PrefixRewrite {
  fn default() -> Self {
    Self { from: "@wordpress/".to_string(), to: "wp-".to_string() }
  }
}

#[test]
fn rewrites_first_occurrence_only() {
  let rewrite = PrefixRewrite::default();
  assert_eq!(rewrite.apply("@wordpress/blocks"), "wp-blocks");
  assert_eq!(rewrite.apply("jquery"), "jquery");
}
