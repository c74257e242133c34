use std::{io, path::Path};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirEntryKind {
  File,
  Dir,
}

/// The filesystem surface the plugin touches. Everything goes through this
/// seam so the core stays testable against a scratch directory.
pub trait FileSystem {
  fn exists(&self, path: &Path) -> bool;

  fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

  fn read_to_string(&self, path: &Path) -> io::Result<String>;

  fn write(&self, path: &Path, content: &[u8]) -> io::Result<()>;

  fn create_dir_all(&self, path: &Path) -> io::Result<()>;

  /// Directory entries as `(name, kind)`, sorted by name. Sorting keeps
  /// collection and cleanup deterministic for a fixed filesystem snapshot.
  fn read_dir(&self, path: &Path) -> io::Result<Vec<(String, DirEntryKind)>>;

  fn remove_file(&self, path: &Path) -> io::Result<()>;

  fn remove_dir_all(&self, path: &Path) -> io::Result<()>;
}
