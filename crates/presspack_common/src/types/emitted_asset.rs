/// A static file the plugin asks the host bundler to copy into the output
/// directory at build start (block manifests, render templates, images...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedAsset {
  /// Output path relative to the output dir.
  pub file_name: String,
  /// Source path relative to the project root.
  pub name: String,
  pub original_file_name: String,
  pub source: Vec<u8>,
}
