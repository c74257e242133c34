mod file_system;
mod os;

pub use crate::{
  file_system::{DirEntryKind, FileSystem},
  os::OsFileSystem,
};
