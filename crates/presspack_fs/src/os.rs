use std::{fs, io, path::Path};

use crate::file_system::{DirEntryKind, FileSystem};

#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
  fn exists(&self, path: &Path) -> bool {
    path.exists()
  }

  fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
    fs::read(path)
  }

  fn read_to_string(&self, path: &Path) -> io::Result<String> {
    fs::read_to_string(path)
  }

  fn write(&self, path: &Path, content: &[u8]) -> io::Result<()> {
    fs::write(path, content)
  }

  fn create_dir_all(&self, path: &Path) -> io::Result<()> {
    fs::create_dir_all(path)
  }

  fn read_dir(&self, path: &Path) -> io::Result<Vec<(String, DirEntryKind)>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(path)? {
      let entry = entry?;
      let kind = if entry.file_type()?.is_dir() { DirEntryKind::Dir } else { DirEntryKind::File };
      entries.push((entry.file_name().to_string_lossy().into_owned(), kind));
    }
    entries.sort_unstable_by(|a, b| a.0.cmp(&b.0));
    Ok(entries)
  }

  fn remove_file(&self, path: &Path) -> io::Result<()> {
    fs::remove_file(path)
  }

  fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
    fs::remove_dir_all(path)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn read_dir_is_sorted() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("b.txt"), "b").unwrap();
    fs::create_dir(dir.path().join("a")).unwrap();
    fs::write(dir.path().join("c.txt"), "c").unwrap();

    let entries = OsFileSystem.read_dir(dir.path()).unwrap();
    assert_eq!(
      entries,
      vec![
        ("a".to_string(), DirEntryKind::Dir),
        ("b.txt".to_string(), DirEntryKind::File),
        ("c.txt".to_string(), DirEntryKind::File),
      ]
    );
  }
}
