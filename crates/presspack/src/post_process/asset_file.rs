use std::path::Path;

use presspack_common::{AssetDescriptor, NormalizedPluginOptions, OutputChunk};
use presspack_error::{BuildError, BuildResult};
use presspack_fs::FileSystem;
use presspack_utils::{hash::version_token, php_literal::php_literal};

/// Writes the chunk's `<name>.asset.php` side-channel file next to its
/// compiled output: dependency handles, the source-content version token and
/// the relocated stylesheet paths, as a PHP array literal.
pub fn write_asset_file<F: FileSystem>(
  fs: &F,
  out_dir: &Path,
  chunk: &OutputChunk,
  dependencies: Vec<String>,
  options: &NormalizedPluginOptions,
) -> BuildResult<()> {
  let Some(facade) = chunk.facade_module_id.as_deref() else {
    return Ok(());
  };
  let Some(parent) = Path::new(chunk.filename.as_str()).parent() else {
    if options.verbose {
      log::debug!("chunk {} has no resolvable output dir, skipping asset file", chunk.filename);
    }
    return Ok(());
  };

  let assets = chunk
    .imported_assets
    .iter()
    .filter(|asset| asset.contains("css"))
    .cloned()
    .collect::<Vec<_>>();

  let source = fs
    .read(Path::new(facade))
    .map_err(|error| BuildError::io(format!("failed to read chunk source {facade}"), error))?;
  let descriptor =
    AssetDescriptor { dependencies, version: version_token(&source), assets };

  let dir = out_dir.join(parent);
  fs.create_dir_all(&dir).map_err(|error| {
    BuildError::io(format!("failed to create output dir {}", dir.display()), error)
  })?;

  let value = serde_json::to_value(&descriptor)
    .map_err(|error| anyhow::anyhow!("failed to serialize asset descriptor: {error}"))?;
  let content = format!("<?php return {};", php_literal(&value, false));
  let path = dir.join(format!("{}.asset.php", chunk.name));
  fs.write(&path, content.as_bytes())
    .map_err(|error| BuildError::io(format!("failed to write {}", path.display()), error))?;

  Ok(())
}
