mod asset_file;
mod dependency;
mod styles;
mod wrapper;

use presspack_common::{ChunkMode, NormalizedPluginOptions, Output, OutputChunk};
use presspack_error::BuildResult;
use presspack_fs::FileSystem;

use crate::build_config::ResolvedBuildConfig;

pub use styles::StyleRelocationTable;

/// One pass over the bundler's produced output graph, run by the
/// generate-bundle hook. All state is scoped to the pass and dropped with it.
pub struct PostProcessStage<'a, F: FileSystem> {
  fs: &'a F,
  options: &'a NormalizedPluginOptions,
  config: &'a ResolvedBuildConfig,
  /// Facade paths of entries compiled as native ES modules.
  interactivity: &'a [String],
  styles: StyleRelocationTable,
}

impl<'a, F: FileSystem> PostProcessStage<'a, F> {
  pub fn new(
    fs: &'a F,
    options: &'a NormalizedPluginOptions,
    config: &'a ResolvedBuildConfig,
    interactivity: &'a [String],
  ) -> Self {
    Self { fs, options, config, interactivity, styles: StyleRelocationTable::default() }
  }

  pub fn run(mut self, bundle: &mut [Output]) -> BuildResult<()> {
    for output in bundle.iter_mut() {
      let Output::Chunk(chunk) = output else { continue };
      if chunk.facade_module_id.is_none() {
        // Virtual chunks carry no authored source to hash or depend on.
        if self.options.verbose {
          log::debug!("skipping virtual chunk {}", chunk.filename);
        }
        continue;
      }
      self.process_chunk(chunk)?;
    }

    self.styles.apply(bundle);
    Ok(())
  }

  fn process_chunk(&mut self, chunk: &mut OutputChunk) -> BuildResult<()> {
    let mode = self.chunk_mode(chunk);
    let is_css = !chunk.filename.ends_with(&format!(".{}", self.options.script_ext()));

    // ES-module entries keep their imports; CSS chunks have no code to guard.
    if mode == ChunkMode::Classic && !is_css {
      let globals = self.config.globals.globals().map(ToString::to_string).collect::<Vec<_>>();
      wrapper::wrap_chunk(chunk, &globals, self.options, self.config.mode);
    }

    let dependencies = dependency::detect_dependencies(chunk, mode, &self.config.globals, self.options);

    self.styles.relocate_chunk_styles(chunk);
    asset_file::write_asset_file(self.fs, &self.config.out_dir, chunk, dependencies, self.options)?;
    styles::strip_empty_css_placeholder(chunk);

    Ok(())
  }

  fn chunk_mode(&self, chunk: &OutputChunk) -> ChunkMode {
    let facade = chunk.facade_module_id.as_deref().unwrap_or_default();
    if self.interactivity.iter().any(|entry| entry == facade) {
      ChunkMode::EsModule
    } else {
      ChunkMode::Classic
    }
  }
}

#[cfg(test)]
mod tests {
  use std::fs;

  use presspack_common::{
    BuildMode, GlobalSymbolMap, Output, OutputAsset, OutputChunk, PluginOptions,
  };
  use presspack_fs::OsFileSystem;

  use super::PostProcessStage;
  use crate::{
    build_config::ResolvedBuildConfig, utils::normalize_plugin_options::normalize_plugin_options,
  };

  struct Fixture {
    _dir: tempfile::TempDir,
    config: ResolvedBuildConfig,
  }

  fn fixture(mode: BuildMode) -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("src");
    fs::create_dir_all(root.join("blocks/ExampleBlock")).unwrap();
    fs::write(root.join("blocks/ExampleBlock/index.js"), "registerBlockType();\n").unwrap();
    let config = ResolvedBuildConfig::new(root, dir.path().join("build"), mode);
    Fixture { _dir: dir, config }
  }

  fn chunk(fixture: &Fixture, code: &str) -> OutputChunk {
    OutputChunk {
      name: "index".into(),
      filename: "blocks/example-block/index.js".into(),
      code: code.to_string(),
      is_entry: true,
      facade_module_id: Some(
        fixture.config.root.join("blocks/ExampleBlock/index.js").to_string_lossy().into_owned(),
      ),
      ..OutputChunk::default()
    }
  }

  #[test]
  fn classic_chunk_detects_prefixed_dependencies() {
    // Scenario: compiled code references wp.blocks and wp.i18n.
    let fixture = fixture(BuildMode::Development);
    let options = normalize_plugin_options(PluginOptions::default()).unwrap();
    let mut bundle =
      vec![Output::Chunk(Box::new(chunk(&fixture, "wp.blocks.registerBlockType(wp.i18n.__('t'));")))];

    PostProcessStage::new(&OsFileSystem, &options, &fixture.config, &[])
      .run(&mut bundle)
      .unwrap();

    let asset_php = fixture
      .config
      .out_dir
      .join("blocks/example-block/index.asset.php");
    let content = fs::read_to_string(asset_php).unwrap();
    assert!(content.starts_with("<?php return array("));
    assert!(content.contains("'dependencies' => array('wp-blocks', 'wp-i18n' )"));

    // The version token is the 20-hex hash of the authored source.
    let source = fs::read(fixture.config.root.join("blocks/ExampleBlock/index.js")).unwrap();
    let expected = presspack_utils::hash::version_token(&source);
    assert!(content.contains(&format!("'version' => '{expected}'")));
  }

  #[test]
  fn esmodule_chunk_keeps_raw_handles_and_stays_unwrapped() {
    // Scenario: an interactivity entry imports @wordpress/interactivity.
    let fixture = fixture(BuildMode::Development);
    let options = normalize_plugin_options(PluginOptions::default()).unwrap();
    let facade =
      fixture.config.root.join("blocks/ExampleBlock/index.js").to_string_lossy().into_owned();
    let code = "import { store } from '@wordpress/interactivity';\nstore('example', {});\n";
    let mut bundle = vec![Output::Chunk(Box::new(chunk(&fixture, code)))];

    let interactivity = vec![facade];
    PostProcessStage::new(&OsFileSystem, &options, &fixture.config, &interactivity)
      .run(&mut bundle)
      .unwrap();

    let Output::Chunk(processed) = &bundle[0] else { unreachable!() };
    assert_eq!(processed.code, code, "es-module chunks must not be wrapped");

    let content = fs::read_to_string(
      fixture.config.out_dir.join("blocks/example-block/index.asset.php"),
    )
    .unwrap();
    assert!(content.contains("'dependencies' => array('@wordpress/interactivity' )"));
  }

  #[test]
  fn static_dependencies_precede_detected_ones() {
    let fixture = fixture(BuildMode::Development);
    let options = normalize_plugin_options(PluginOptions {
      dependencies: Some(vec!["wp-i18n".to_string(), "my-runtime".to_string()].into()),
      ..PluginOptions::default()
    })
    .unwrap();
    let mut bundle =
      vec![Output::Chunk(Box::new(chunk(&fixture, "wp.blocks.x(); wp.i18n.__('t');")))];

    PostProcessStage::new(&OsFileSystem, &options, &fixture.config, &[])
      .run(&mut bundle)
      .unwrap();

    let content = fs::read_to_string(
      fixture.config.out_dir.join("blocks/example-block/index.asset.php"),
    )
    .unwrap();
    // wp-i18n is not repeated even though it is detected again.
    assert!(content.contains("'dependencies' => array('wp-i18n', 'my-runtime', 'wp-blocks' )"));
  }

  #[test]
  fn classic_chunk_is_wrapped_with_guard_and_closure() {
    let fixture = fixture(BuildMode::Development);
    let options = normalize_plugin_options(PluginOptions::default()).unwrap();
    let mut bundle = vec![Output::Chunk(Box::new(chunk(&fixture, "wp.blocks.x();")))];

    PostProcessStage::new(&OsFileSystem, &options, &fixture.config, &[])
      .run(&mut bundle)
      .unwrap();

    let Output::Chunk(processed) = &bundle[0] else { unreachable!() };
    assert!(processed.code.starts_with("(() => {'use strict';"));
    assert!(processed.code.ends_with("})();"));
    assert!(processed.code.contains("if (typeof wp.blocks !== 'undefined')"));
    assert!(processed.code.contains("document.addEventListener('DOMContentLoaded'"));
  }

  #[test]
  fn wrapping_is_idempotent() {
    let fixture = fixture(BuildMode::Development);
    let options = normalize_plugin_options(PluginOptions::default()).unwrap();
    let pre_wrapped =
      "document.addEventListener('DOMContentLoaded', () => { wp.blocks.x(); });";
    let mut bundle = vec![Output::Chunk(Box::new(chunk(&fixture, pre_wrapped)))];

    PostProcessStage::new(&OsFileSystem, &options, &fixture.config, &[])
      .run(&mut bundle)
      .unwrap();

    let Output::Chunk(processed) = &bundle[0] else { unreachable!() };
    // Only the closure is added; no second guard around the first.
    assert_eq!(
      processed.code,
      format!("(() => {{'use strict';{pre_wrapped}}})();")
    );
  }

  #[test]
  fn production_wrap_minifies_the_guarded_code() {
    let fixture = fixture(BuildMode::Production);
    let options = normalize_plugin_options(PluginOptions::default()).unwrap();
    let mut bundle =
      vec![Output::Chunk(Box::new(chunk(&fixture, "const four = 2 + 2;\nwp.blocks.x(four);\n")))];

    PostProcessStage::new(&OsFileSystem, &options, &fixture.config, &[])
      .run(&mut bundle)
      .unwrap();

    let Output::Chunk(processed) = &bundle[0] else { unreachable!() };
    assert!(processed.code.starts_with("(() => {'use strict';"));
    // The multi-line guard template got collapsed by the minifier.
    assert!(!processed.code.contains("\n    if (typeof"));
  }

  #[test]
  fn css_relocation_first_wins_across_chunks() {
    // Scenario: two chunks pull in the same extracted stylesheet.
    let fixture = fixture(BuildMode::Development);
    let options = normalize_plugin_options(PluginOptions::default()).unwrap();

    let mut first = chunk(&fixture, "wp.blocks.x();");
    first.imported_css.insert("assets/style.hash1a2b.css".to_string());

    let mut second = chunk(&fixture, "wp.blocks.y();");
    second.name = "view".into();
    second.filename = "blocks/other-block/view.js".into();
    second.imported_css.insert("assets/style.hash1a2b.css".to_string());

    let mut bundle = vec![
      Output::Chunk(Box::new(first)),
      Output::Chunk(Box::new(second)),
      Output::Asset(Box::new(OutputAsset {
        filename: "assets/style.hash1a2b.css".to_string(),
        names: vec!["style.css".to_string()],
        source: "body{}".to_string(),
      })),
    ];

    PostProcessStage::new(&OsFileSystem, &options, &fixture.config, &[])
      .run(&mut bundle)
      .unwrap();

    let Output::Chunk(first) = &bundle[0] else { unreachable!() };
    let Output::Chunk(second) = &bundle[1] else { unreachable!() };
    let Output::Asset(asset) = &bundle[2] else { unreachable!() };

    assert!(first.imported_css.is_empty());
    assert!(first.imported_assets.contains("blocks/example-block/style.css"));
    // Second chunk resolves to the path the first chunk chose.
    assert!(second.imported_assets.contains("blocks/example-block/style.css"));
    assert_eq!(asset.filename, "blocks/example-block/style.css");
    assert_eq!(asset.names, vec!["blocks/example-block/style.css".to_string()]);
  }

  #[test]
  fn empty_css_placeholder_is_stripped() {
    let fixture = fixture(BuildMode::Development);
    let options = normalize_plugin_options(PluginOptions {
      external_wrapper: Some(presspack_common::ExternalWrapper {
        enable: false,
        ..presspack_common::ExternalWrapper::default()
      }),
      ..PluginOptions::default()
    })
    .unwrap();
    let mut bundle =
      vec![Output::Chunk(Box::new(chunk(&fixture, "/* empty css         */const a = 1;")))];

    PostProcessStage::new(&OsFileSystem, &options, &fixture.config, &[])
      .run(&mut bundle)
      .unwrap();

    let Output::Chunk(processed) = &bundle[0] else { unreachable!() };
    assert_eq!(processed.code, "const a = 1;");
  }

  #[test]
  fn missing_globals_mean_empty_detection_not_an_error() {
    let fixture = fixture(BuildMode::Development);
    let options = normalize_plugin_options(PluginOptions::default()).unwrap();
    let mut bundle = vec![Output::Chunk(Box::new(chunk(&fixture, "const standalone = 1;")))];

    PostProcessStage::new(&OsFileSystem, &options, &fixture.config, &[])
      .run(&mut bundle)
      .unwrap();

    let content = fs::read_to_string(
      fixture.config.out_dir.join("blocks/example-block/index.asset.php"),
    )
    .unwrap();
    assert!(content.contains("'dependencies' => array( )"));
  }

  #[test]
  fn custom_globals_override_the_default_table() {
    let fixture = fixture(BuildMode::Development);
    let config = ResolvedBuildConfig::new(
      fixture.config.root.clone(),
      fixture.config.out_dir.clone(),
      BuildMode::Development,
    )
    .with_globals(GlobalSymbolMap::from_iter([("my-lib", "MyLib")]));
    let options = normalize_plugin_options(PluginOptions::default()).unwrap();
    let mut bundle = vec![Output::Chunk(Box::new(chunk(&fixture, "MyLib.mount();")))];

    PostProcessStage::new(&OsFileSystem, &options, &config, &[]).run(&mut bundle).unwrap();

    let content =
      fs::read_to_string(config.out_dir.join("blocks/example-block/index.asset.php")).unwrap();
    assert!(content.contains("'dependencies' => array('my-lib' )"));
  }
}
