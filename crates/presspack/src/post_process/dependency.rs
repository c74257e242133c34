use presspack_common::{ChunkMode, GlobalSymbolMap, NormalizedPluginOptions, OutputChunk};
use presspack_utils::indexmap::FxIndexSet;

/// Builds the chunk's dependency-handle list: caller-declared handles first,
/// in caller order, then handles detected from the compiled code in symbol
/// table order, de-duplicated by first occurrence.
///
/// Detection is a literal substring scan: for ES-module chunks the candidate
/// is the package handle itself, for classic chunks the runtime global the
/// package is exposed under.
pub fn detect_dependencies(
  chunk: &OutputChunk,
  mode: ChunkMode,
  globals: &GlobalSymbolMap,
  options: &NormalizedPluginOptions,
) -> Vec<String> {
  let mut dependencies =
    options.dependencies.resolve(chunk).into_iter().collect::<FxIndexSet<String>>();

  if options.detect_global_dependencies {
    for (handle, global) in globals.iter() {
      let candidate = match mode {
        ChunkMode::EsModule => handle,
        ChunkMode::Classic => global,
      };
      if chunk.code.contains(candidate) {
        let dependency = match mode {
          ChunkMode::EsModule => handle.to_string(),
          ChunkMode::Classic => options.prefix_rewrite.apply(handle),
        };
        dependencies.insert(dependency);
      }
    }
  }

  dependencies.into_iter().collect()
}

#[cfg(test)]
mod tests {
  use presspack_common::{wordpress_globals, ChunkMode, OutputChunk, PluginOptions};

  use super::detect_dependencies;
  use crate::utils::normalize_plugin_options::normalize_plugin_options;

  fn chunk_with_code(code: &str) -> OutputChunk {
    OutputChunk { code: code.to_string(), ..OutputChunk::default() }
  }

  #[test]
  fn classic_mode_scans_globals_and_rewrites_handles() {
    let options = normalize_plugin_options(PluginOptions::default()).unwrap();
    let chunk = chunk_with_code("wp.blocks.registerBlockType(); wp.i18n.__('hi'); jQuery('#x');");

    let dependencies =
      detect_dependencies(&chunk, ChunkMode::Classic, &wordpress_globals(), &options);
    assert_eq!(dependencies, vec!["jquery", "wp-blocks", "wp-i18n"]);
  }

  #[test]
  fn esmodule_mode_scans_handles_verbatim() {
    let options = normalize_plugin_options(PluginOptions::default()).unwrap();
    let chunk = chunk_with_code("import { store } from '@wordpress/interactivity';");

    let dependencies =
      detect_dependencies(&chunk, ChunkMode::EsModule, &wordpress_globals(), &options);
    assert_eq!(dependencies, vec!["@wordpress/interactivity"]);
  }

  #[test]
  fn detection_can_be_disabled() {
    let options = normalize_plugin_options(PluginOptions {
      detect_global_dependencies: Some(false),
      dependencies: Some(vec!["static-handle".to_string()].into()),
      ..PluginOptions::default()
    })
    .unwrap();
    let chunk = chunk_with_code("wp.blocks.x();");

    let dependencies =
      detect_dependencies(&chunk, ChunkMode::Classic, &wordpress_globals(), &options);
    assert_eq!(dependencies, vec!["static-handle"]);
  }

  #[test]
  fn no_match_is_empty_not_an_error() {
    let options = normalize_plugin_options(PluginOptions::default()).unwrap();
    let chunk = chunk_with_code("const island = 1;");

    let dependencies =
      detect_dependencies(&chunk, ChunkMode::Classic, &wordpress_globals(), &options);
    assert!(dependencies.is_empty());
  }
}
