use std::{path::Path, sync::LazyLock};

use presspack_common::{Output, OutputChunk};
use presspack_utils::{indexmap::FxIndexMap, path_ext::PathExt};
use regex::Regex;

/// Comment the bundler leaves in chunks whose only content was extracted
/// styles.
static EMPTY_CSS_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"/\*\s*empty css\s*\*/").unwrap());

pub fn strip_empty_css_placeholder(chunk: &mut OutputChunk) {
  if EMPTY_CSS_RE.is_match(&chunk.code) {
    chunk.code = EMPTY_CSS_RE.replace_all(&chunk.code, "").into_owned();
  }
}

/// Bundler-internal CSS asset path -> final relocated output path. Built up
/// chunk by chunk, applied to the assets of the graph in one pass at the
/// end. The first chunk referencing a given asset decides its path.
#[derive(Debug, Default)]
pub struct StyleRelocationTable(FxIndexMap<String, String>);

impl StyleRelocationTable {
  /// Moves every stylesheet the chunk pulled in from its managed-import set
  /// to its plain-asset set, recording where the file will land. Hashed
  /// paths under `assets/` relocate next to the chunk itself; everything
  /// else keeps its path.
  pub fn relocate_chunk_styles(&mut self, chunk: &mut OutputChunk) {
    let imported = chunk.imported_css.iter().cloned().collect::<Vec<_>>();
    for css_path in imported {
      let relocated = if css_path.contains("assets/") {
        let base = css_path.rsplit('/').next().unwrap_or(css_path.as_str());
        let stem = base.find(".hash").map_or(base, |index| &base[..index]);
        let dir = Path::new(chunk.filename.as_str())
          .parent()
          .map(|parent| parent.expect_to_slash())
          .filter(|parent| !parent.is_empty())
          .unwrap_or_else(|| ".".to_string());
        format!("{dir}/{stem}.css")
      } else {
        css_path.clone()
      };

      let final_path = self.0.entry(css_path.clone()).or_insert(relocated).clone();
      chunk.imported_css.shift_remove(&css_path);
      chunk.imported_assets.insert(final_path);
    }
  }

  /// Final pass: rewrite the output path (and display name) of every asset
  /// the table covers.
  pub fn apply(&self, bundle: &mut [Output]) {
    for output in bundle.iter_mut() {
      if let Output::Asset(asset) = output {
        if let Some(relocated) = self.0.get(&asset.filename) {
          asset.filename.clone_from(relocated);
          asset.names = vec![relocated.clone()];
        }
      }
    }
  }
}
