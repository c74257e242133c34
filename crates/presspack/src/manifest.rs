use std::path::Path;

use presspack_error::{BuildError, BuildResult};
use presspack_fs::FileSystem;
use presspack_utils::php_literal::php_literal;

/// Converts the bundler's JSON manifest into a `manifest.php` sibling that a
/// PHP host can `require` directly. Key order is preserved so the PHP file is
/// byte-stable across rebuilds of unchanged input.
pub fn convert_manifest<F: FileSystem>(fs: &F, manifest_path: &Path) -> BuildResult<()> {
  let raw = fs
    .read_to_string(manifest_path)
    .map_err(|_| BuildError::manifest_read(manifest_path))?;
  let value: serde_json::Value = serde_json::from_str(&raw)
    .map_err(|error| anyhow::anyhow!("invalid manifest {}: {error}", manifest_path.display()))?;

  let php_path = manifest_path.with_file_name("manifest.php");
  let content = format!("<?php\n\nreturn {};\n", php_literal(&value, true));
  fs.write(&php_path, content.as_bytes())
    .map_err(|error| BuildError::io(format!("failed to write {}", php_path.display()), error))?;

  Ok(())
}
