use std::path::Path;

use presspack_common::{EmittedAsset, NormalizedPluginOptions, Output, PluginOptions};
use presspack_error::{BuildError, BuildResult};
use presspack_fs::{FileSystem, OsFileSystem};

use crate::{
  build_config::ResolvedBuildConfig,
  collect::{self, ResolvedInput},
  manifest, out_dir,
  post_process::PostProcessStage,
  utils::normalize_plugin_options::normalize_plugin_options,
};

/// Action requested from the host's hot-update hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotUpdateAction {
  FullReload,
}

/// The plugin itself. One instance serves one build: the host calls the
/// lifecycle hooks in order and the later hooks read the state the earlier
/// ones resolved.
pub struct PresspackPlugin<F: FileSystem = OsFileSystem> {
  fs: F,
  options: NormalizedPluginOptions,
  config: Option<ResolvedBuildConfig>,
  input: Option<ResolvedInput>,
}

impl PresspackPlugin<OsFileSystem> {
  pub fn new(options: PluginOptions) -> BuildResult<Self> {
    Self::with_file_system(OsFileSystem, options)
  }
}

impl<F: FileSystem> PresspackPlugin<F> {
  pub fn with_file_system(fs: F, options: PluginOptions) -> BuildResult<Self> {
    Ok(Self { fs, options: normalize_plugin_options(options)?, config: None, input: None })
  }

  pub fn name(&self) -> &'static str {
    "presspack"
  }

  pub fn options(&self) -> &NormalizedPluginOptions {
    &self.options
  }

  /// Receives the host's final root and output directories, then expands the
  /// input patterns against the source tree.
  pub fn config_resolved(&mut self, config: ResolvedBuildConfig) {
    self.input = Some(collect::resolve_input(&self.fs, &config.root, &self.options.input));
    self.config = Some(config);
  }

  pub fn input(&self) -> Option<&ResolvedInput> {
    self.input.as_ref()
  }

  /// Clears the output directory (keep list aside) and returns the static
  /// files the host should emit alongside the compiled chunks.
  pub fn build_start(&self) -> BuildResult<Vec<EmittedAsset>> {
    let config = self.config()?;
    out_dir::empty_out_dir(&self.fs, &config.out_dir, &self.options.keep_out_dir)?;
    let input = self.input.as_ref().cloned().unwrap_or_default();
    collect::collect_emitted_assets(&self.fs, &self.options, config, &input)
  }

  /// The core pass over the produced bundle.
  pub fn generate_bundle(&self, bundle: &mut [Output]) -> BuildResult<()> {
    let config = self.config()?;
    let interactivity =
      self.input.as_ref().map(|input| input.interactivity.as_slice()).unwrap_or_default();
    PostProcessStage::new(&self.fs, &self.options, config, interactivity).run(bundle)
  }

  /// Converts the written JSON manifest to PHP when requested. A build that
  /// produced no manifest is left alone.
  pub fn close_bundle(&self) -> BuildResult<()> {
    if !self.options.php_manifest {
      return Ok(());
    }
    let config = self.config()?;
    let manifest_path = config.out_dir.join(&self.options.manifest);
    if !self.fs.exists(&manifest_path) {
      if self.options.verbose {
        log::debug!("no manifest at {}, skipping conversion", manifest_path.display());
      }
      return Ok(());
    }
    manifest::convert_manifest(&self.fs, &manifest_path)
  }

  /// PHP sources render on the server, so their changes are invisible to the
  /// client module graph and need a full page reload.
  pub fn handle_hot_update(&self, file: &str) -> Option<HotUpdateAction> {
    Path::new(file)
      .extension()
      .is_some_and(|ext| ext.eq_ignore_ascii_case("php"))
      .then_some(HotUpdateAction::FullReload)
  }

  fn config(&self) -> BuildResult<&ResolvedBuildConfig> {
    self
      .config
      .as_ref()
      .ok_or_else(|| BuildError::config("config_resolved was not called before a build hook"))
  }
}
