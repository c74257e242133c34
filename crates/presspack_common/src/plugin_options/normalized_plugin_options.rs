use std::sync::Arc;

use crate::{
  AssetRules, DependencySource, ExternalWrapper, InputSpec, OutputNamer, PrefixRewrite,
  SourceParser,
};

/// Validated, fully defaulted plugin configuration. Produced once at
/// configuration time; every later stage reads from it.
pub struct NormalizedPluginOptions {
  pub css_ext: String,
  pub assets: AssetRules,
  pub input: InputSpec,
  pub dependencies: DependencySource,
  pub detect_global_dependencies: bool,
  pub prefix_rewrite: PrefixRewrite,
  pub manifest: String,
  pub php_manifest: bool,
  pub banner: String,
  pub footer: String,
  pub external_wrapper: ExternalWrapper,
  pub keep_out_dir: Vec<String>,
  pub verbose: bool,
  pub source: Arc<dyn SourceParser>,
  pub output: Arc<dyn OutputNamer>,
}

impl NormalizedPluginOptions {
  pub fn script_ext(&self) -> &'static str {
    "js"
  }
}
