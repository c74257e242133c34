pub mod normalize_plugin_options;
