pub mod asset_descriptor;
pub mod chunk_mode;
pub mod emitted_asset;
pub mod output;
pub mod output_asset;
pub mod output_chunk;
pub mod parsed_path;
