use std::path::Path;

use presspack_error::{BuildError, BuildResult};
use presspack_fs::{DirEntryKind, FileSystem};

/// Clears the output directory before a build, sparing the entries named in
/// `keep`. A missing directory is fine; any removal failure aborts the build.
pub fn empty_out_dir<F: FileSystem>(fs: &F, out_dir: &Path, keep: &[String]) -> BuildResult<()> {
  if !fs.exists(out_dir) {
    return Ok(());
  }

  let entries = fs
    .read_dir(out_dir)
    .map_err(|error| BuildError::io(format!("failed to list {}", out_dir.display()), error))?;

  for (name, kind) in entries {
    if keep.iter().any(|kept| kept == &name) {
      continue;
    }
    let path = out_dir.join(&name);
    let removed = match kind {
      DirEntryKind::Dir => fs.remove_dir_all(&path),
      DirEntryKind::File => fs.remove_file(&path),
    };
    removed
      .map_err(|error| BuildError::io(format!("failed to remove {}", path.display()), error))?;
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use std::fs;

  use presspack_fs::OsFileSystem;

  use super::empty_out_dir;

  #[test]
  fn removes_everything_except_kept_entries() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("build");
    fs::create_dir_all(out.join("blocks/example")).unwrap();
    fs::write(out.join("blocks/example/index.js"), "x").unwrap();
    fs::write(out.join("stale.js"), "x").unwrap();
    fs::create_dir_all(out.join(".vite")).unwrap();
    fs::write(out.join(".vite/manifest.json"), "{}").unwrap();

    empty_out_dir(&OsFileSystem, &out, &[".vite".to_string()]).unwrap();

    assert!(!out.join("blocks").exists());
    assert!(!out.join("stale.js").exists());
    assert!(out.join(".vite/manifest.json").exists());
  }

  #[test]
  fn missing_out_dir_is_a_no_op() {
    let dir = tempfile::tempdir().unwrap();
    empty_out_dir(&OsFileSystem, &dir.path().join("build"), &[]).unwrap();
  }
}
