use std::sync::Arc;

use presspack_common::{
  AssetRules, DefaultOutputNamer, DefaultSourceParser, InputSpec, NormalizedPluginOptions,
  PluginOptions,
};
use presspack_error::{BuildError, BuildResult};

/// Fills in defaults and validates caller-supplied values. Configuration
/// errors are fatal and abort before any build work starts.
pub fn normalize_plugin_options(raw: PluginOptions) -> BuildResult<NormalizedPluginOptions> {
  let css_ext = raw.css_ext.unwrap_or_else(|| "pcss".to_string());
  if css_ext.is_empty() || css_ext.starts_with('.') || css_ext.contains('/') {
    return Err(BuildError::config(format!(
      "style extension must be a bare extension tag, got `{css_ext}`"
    )));
  }

  let manifest = raw.manifest.unwrap_or_else(|| ".vite/manifest.json".to_string());
  if manifest.starts_with('/') {
    return Err(BuildError::config(format!(
      "manifest path must be relative to the output dir, got `{manifest}`"
    )));
  }

  let keep_out_dir = raw.keep_out_dir.unwrap_or_default();
  if let Some(name) = keep_out_dir.iter().find(|name| name.contains('/') || name.contains('\\')) {
    return Err(BuildError::config(format!(
      "keep_out_dir entries must be plain names, got `{name}`"
    )));
  }

  Ok(NormalizedPluginOptions {
    css_ext,
    assets: raw.assets.unwrap_or_else(AssetRules::wordpress_defaults),
    input: raw.input.unwrap_or_else(InputSpec::wordpress_defaults),
    dependencies: raw.dependencies.unwrap_or_default(),
    detect_global_dependencies: raw.detect_global_dependencies.unwrap_or(true),
    prefix_rewrite: raw.prefix_rewrite.unwrap_or_default(),
    manifest,
    php_manifest: raw.php_manifest.unwrap_or(false),
    banner: raw.banner.unwrap_or_else(|| "(() => {'use strict';".to_string()),
    footer: raw.footer.unwrap_or_else(|| "})();".to_string()),
    external_wrapper: raw.external_wrapper.unwrap_or_default(),
    keep_out_dir,
    verbose: raw.verbose.unwrap_or(false),
    source: raw.source.unwrap_or_else(|| Arc::new(DefaultSourceParser)),
    output: raw.output.unwrap_or_else(|| Arc::new(DefaultOutputNamer)),
  })
}

#[cfg(test)]
mod tests {
  use presspack_common::PluginOptions;

  use super::normalize_plugin_options;

  #[test]
  fn defaults_are_filled_in() {
    let options = normalize_plugin_options(PluginOptions::default()).unwrap();
    assert_eq!(options.css_ext, "pcss");
    assert!(options.detect_global_dependencies);
    assert!(options.external_wrapper.enable);
    assert!(!options.php_manifest);
    assert_eq!(options.manifest, ".vite/manifest.json");
    assert_eq!(options.prefix_rewrite.from, "@wordpress/");
  }

  #[test]
  fn invalid_values_abort_at_configuration_time() {
    let dotted =
      PluginOptions { css_ext: Some(".pcss".to_string()), ..PluginOptions::default() };
    assert!(normalize_plugin_options(dotted).is_err());

    let absolute =
      PluginOptions { manifest: Some("/etc/manifest.json".to_string()), ..PluginOptions::default() };
    assert!(normalize_plugin_options(absolute).is_err());

    let nested = PluginOptions {
      keep_out_dir: Some(vec!["keep/this".to_string()]),
      ..PluginOptions::default()
    };
    assert!(normalize_plugin_options(nested).is_err());
  }
}
