use presspack_utils::indexmap::FxIndexMap;
use regex::Regex;

/// Asset bucket name -> matcher over file names. A file lands in a bucket
/// when one of its parent directories carries the bucket name and the
/// matcher accepts its file name.
#[derive(Debug, Clone, Default)]
pub struct AssetRules(pub FxIndexMap<String, Regex>);

impl AssetRules {
  pub fn insert(&mut self, bucket: impl Into<String>, matcher: Regex) {
    self.0.insert(bucket.into(), matcher);
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &Regex)> {
    self.0.iter().map(|(bucket, matcher)| (bucket.as_str(), matcher))
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  /// Images, svg and font buckets as the original WordPress tooling ships.
  pub fn wordpress_defaults() -> Self {
    let mut rules = Self::default();
    rules.insert("images", Regex::new(r"(?i)png|jpe?g|gif|tiff|bmp|ico").unwrap());
    rules.insert("svg", Regex::new(r"(?i)\.svg$").unwrap());
    rules.insert("fonts", Regex::new(r"(?i)ttf|woff|woff2").unwrap());
    rules
  }
}

#[test]
fn default_rules_match_expected_files() {
  let rules = AssetRules::wordpress_defaults();
  let buckets = rules.iter().map(|(bucket, _)| bucket).collect::<Vec<_>>();
  assert_eq!(buckets, vec!["images", "svg", "fonts"]);

  let images = &rules.0["images"];
  assert!(images.is_match("logo.PNG"));
  assert!(!images.is_match("readme.txt"));
  assert!(rules.0["svg"].is_match("icon.svg"));
  assert!(rules.0["fonts"].is_match("body.woff2"));
}
