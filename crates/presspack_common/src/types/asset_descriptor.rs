use serde::Serialize;

/// Contents of the per-chunk `<name>.asset.php` side-channel file, consumed
/// by the host platform at script-registration time. Written once per chunk
/// at the end of a build, never mutated after.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AssetDescriptor {
  /// Static dependencies first (caller order), detected ones after, unique.
  pub dependencies: Vec<String>,
  /// 20 lowercase hex chars hashed from the originating source file.
  pub version: String,
  /// Relocated CSS paths this chunk pulled in.
  pub assets: Vec<String>,
}
