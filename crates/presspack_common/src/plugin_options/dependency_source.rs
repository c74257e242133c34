use std::sync::Arc;

use crate::OutputChunk;

/// Computes the statically declared dependency handles for a chunk. Injected
/// so the core stays agnostic to the caller's naming policy.
pub trait DependencyStrategy: Send + Sync {
  fn dependencies(&self, chunk: &OutputChunk) -> Vec<String>;
}

/// Caller-declared dependencies: a literal list applied to every chunk, or a
/// strategy deciding per chunk.
#[derive(Clone, Default)]
pub enum DependencySource {
  #[default]
  None,
  List(Vec<String>),
  Strategy(Arc<dyn DependencyStrategy>),
}

impl DependencySource {
  pub fn resolve(&self, chunk: &OutputChunk) -> Vec<String> {
    match self {
      Self::None => Vec::new(),
      Self::List(handles) => handles.clone(),
      Self::Strategy(strategy) => strategy.dependencies(chunk),
    }
  }
}

impl From<Vec<String>> for DependencySource {
  fn from(handles: Vec<String>) -> Self {
    Self::List(handles)
  }
}
