#[derive(Debug, Clone, Default)]
pub struct OutputAsset {
  pub filename: String,
  /// Display names; rewritten together with `filename` on relocation.
  pub names: Vec<String>,
  pub source: String,
}
