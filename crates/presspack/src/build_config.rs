use std::path::PathBuf;

use presspack_common::{wordpress_globals, BuildMode, GlobalSymbolMap};

/// Host-bundler facts the plugin needs, received once per build through the
/// `config_resolved` hook and owned by the plugin for that build.
pub struct ResolvedBuildConfig {
  /// Absolute project source root. Its final segment is the root marker for
  /// path parsing.
  pub root: PathBuf,
  /// Absolute output directory.
  pub out_dir: PathBuf,
  pub mode: BuildMode,
  /// External package -> runtime global table; the host's own mapping when
  /// it declares one, the platform default otherwise.
  pub globals: GlobalSymbolMap,
}

impl ResolvedBuildConfig {
  pub fn new(root: impl Into<PathBuf>, out_dir: impl Into<PathBuf>, mode: BuildMode) -> Self {
    Self { root: root.into(), out_dir: out_dir.into(), mode, globals: wordpress_globals() }
  }

  pub fn with_globals(mut self, globals: GlobalSymbolMap) -> Self {
    self.globals = globals;
    self
  }

  /// Path segment that marks the project root inside source file paths.
  pub fn root_marker(&self) -> String {
    self.root.file_name().map(|name| name.to_string_lossy().into_owned()).unwrap_or_default()
  }
}
