use presspack_utils::{indexmap::FxIndexMap, kebab::kebab_to_camel};

/// Package handle -> runtime global name, for packages the platform hosts
/// itself instead of letting the bundler inline them. Iteration order is
/// insertion order, which fixes the order detected dependencies appear in.
#[derive(Debug, Clone, Default)]
pub struct GlobalSymbolMap(FxIndexMap<String, String>);

impl GlobalSymbolMap {
  pub fn new() -> Self {
    Self(FxIndexMap::default())
  }

  pub fn insert(&mut self, handle: impl Into<String>, global: impl Into<String>) {
    self.0.insert(handle.into(), global.into());
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
    self.0.iter().map(|(handle, global)| (handle.as_str(), global.as_str()))
  }

  /// Global variable names, the candidate references for classic chunks.
  pub fn globals(&self) -> impl Iterator<Item = &str> {
    self.0.values().map(String::as_str)
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }
}

impl<H: Into<String>, G: Into<String>> FromIterator<(H, G)> for GlobalSymbolMap {
  fn from_iter<I: IntoIterator<Item = (H, G)>>(iter: I) -> Self {
    Self(iter.into_iter().map(|(handle, global)| (handle.into(), global.into())).collect())
  }
}

/// Packages WordPress registers outside the `wp.*` namespace.
const HOSTED_MODULES: &[(&str, &str)] = &[
  ("jquery", "jQuery"),
  ("tinymce", "tinymce"),
  ("moment", "moment"),
  ("react", "React"),
  ("react-dom", "ReactDOM"),
  ("backbone", "Backbone"),
  ("lodash", "lodash"),
];

const WP_MODULES: &[&str] = &[
  "a11y",
  "annotations",
  "api-fetch",
  "autop",
  "blob",
  "block-directory",
  "block-editor",
  "block-library",
  "block-serialization-default-parser",
  "blocks",
  "components",
  "compose",
  "core-data",
  "customize-widgets",
  "data",
  "data-controls",
  "date",
  "deprecated",
  "dom",
  "dom-ready",
  "edit-post",
  "edit-site",
  "edit-widgets",
  "editor",
  "element",
  "escape-html",
  "format-library",
  "hooks",
  "html-entities",
  "i18n",
  "is-shallow-equal",
  "interactivity",
  "keyboard-shortcuts",
  "keycodes",
  "list-reusable-blocks",
  "media-utils",
  "notices",
  "nux",
  "plugins",
  "preferences",
  "preferences-persistence",
  "primitives",
  "priority-queue",
  "redux-routine",
  "reusable-blocks",
  "rich-text",
  "server-side-render",
  "shortcode",
  "style-engine",
  "token-list",
  "url",
  "viewport",
  "warning",
  "widgets",
  "wordcount",
];

/// The default symbol table for a WordPress build: the externally hosted
/// packages, then every `@wordpress/*` handle mapped to its `wp.*` member.
pub fn wordpress_globals() -> GlobalSymbolMap {
  let mut map = GlobalSymbolMap::new();
  for (handle, global) in HOSTED_MODULES {
    map.insert(*handle, *global);
  }
  for handle in WP_MODULES {
    map.insert(format!("@wordpress/{handle}"), format!("wp.{}", kebab_to_camel(handle)));
  }
  map
}
