mod globals;
mod plugin_options;
mod types;

pub use crate::{
  globals::{wordpress_globals, GlobalSymbolMap},
  plugin_options::{
    asset_rules::AssetRules,
    build_mode::BuildMode,
    dependency_source::{DependencySource, DependencyStrategy},
    external_wrapper::ExternalWrapper,
    input_spec::{InputPattern, InputSpec},
    normalized_plugin_options::NormalizedPluginOptions,
    prefix_rewrite::PrefixRewrite,
    strategies::{DefaultOutputNamer, DefaultSourceParser, OutputNamer, SourceParser},
    PluginOptions,
  },
  types::{
    asset_descriptor::AssetDescriptor,
    chunk_mode::ChunkMode,
    emitted_asset::EmittedAsset,
    output::Output,
    output_asset::OutputAsset,
    output_chunk::OutputChunk,
    parsed_path::ParsedPath,
  },
};
