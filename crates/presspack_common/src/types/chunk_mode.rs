/// How a chunk's compiled code addresses its external packages.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ChunkMode {
  /// Classic script: externals are reached through runtime globals and the
  /// dependency handle gets the platform prefix rewrite.
  #[default]
  Classic,
  /// Native ES module: externals stay `import`ed by package handle.
  EsModule,
}
