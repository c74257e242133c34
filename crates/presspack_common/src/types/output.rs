use crate::{OutputAsset, OutputChunk};

/// Entry in the bundler's produced output graph.
#[derive(Debug, Clone)]
pub enum Output {
  Chunk(Box<OutputChunk>),
  Asset(Box<OutputAsset>),
}
