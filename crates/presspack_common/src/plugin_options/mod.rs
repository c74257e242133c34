pub mod asset_rules;
pub mod build_mode;
pub mod dependency_source;
pub mod external_wrapper;
pub mod input_spec;
pub mod normalized_plugin_options;
pub mod prefix_rewrite;
pub mod strategies;

use std::sync::Arc;

use crate::{
  AssetRules, DependencySource, ExternalWrapper, InputSpec, OutputNamer, PrefixRewrite,
  SourceParser,
};

/// Caller-facing plugin configuration. Every field is optional; defaults are
/// filled in by `normalize_plugin_options`, which is also where invalid
/// values abort before any build work starts.
#[derive(Default)]
pub struct PluginOptions {
  /// Extension tag of authored style sources, without the dot.
  pub css_ext: Option<String>,
  /// Asset bucket name -> file name matcher.
  pub assets: Option<AssetRules>,
  /// Entry patterns, standard and isolated-module buckets.
  pub input: Option<InputSpec>,
  /// Static dependency handles, or a strategy computing them per chunk.
  pub dependencies: Option<DependencySource>,
  /// Detect platform globals referenced by compiled code. Default: true.
  pub detect_global_dependencies: Option<bool>,
  /// Handle rewrite applied to detected classic-chunk dependencies.
  pub prefix_rewrite: Option<PrefixRewrite>,
  /// Manifest path relative to the output dir.
  pub manifest: Option<String>,
  /// Also emit the manifest as a PHP array source file. Default: false.
  pub php_manifest: Option<bool>,
  /// Text enclosing every processed chunk.
  pub banner: Option<String>,
  pub footer: Option<String>,
  /// Runtime guard deferring execution until required globals exist.
  pub external_wrapper: Option<ExternalWrapper>,
  /// Output-dir entry names spared by the pre-build cleanup.
  pub keep_out_dir: Option<Vec<String>>,
  /// Log skips and recovered failures. Default: false.
  pub verbose: Option<bool>,
  /// Source path decomposition policy.
  pub source: Option<Arc<dyn SourceParser>>,
  /// Output naming policy for collected assets and resources.
  pub output: Option<Arc<dyn OutputNamer>>,
}
