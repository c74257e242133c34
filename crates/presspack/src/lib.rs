mod build_config;
mod collect;
mod ecmascript;
mod manifest;
mod out_dir;
mod plugin;
mod post_process;
mod utils;

pub use crate::{
  build_config::ResolvedBuildConfig,
  collect::ResolvedInput,
  plugin::{HotUpdateAction, PresspackPlugin},
  utils::normalize_plugin_options::normalize_plugin_options,
};
pub use presspack_common::*;
pub use presspack_error::{BuildError, BuildResult};
