use arcstr::ArcStr;
use presspack_utils::indexmap::FxIndexSet;

/// One unit of compiled output, handed over by the bundler for in-place
/// rewriting. `imported_css` and `imported_assets` keep insertion order; the
/// style relocation pass moves entries from the former to the latter.
#[derive(Debug, Clone, Default)]
pub struct OutputChunk {
  /// Logical name, used for the `<name>.asset.php` sibling file.
  pub name: ArcStr,
  /// Final output path relative to the output dir.
  pub filename: ArcStr,
  pub code: String,
  pub is_entry: bool,
  /// Path of the originating source file. Virtual chunks have none and are
  /// skipped by the post-processor.
  pub facade_module_id: Option<String>,
  pub imported_css: FxIndexSet<String>,
  pub imported_assets: FxIndexSet<String>,
}
