use crate::ParsedPath;

/// Decomposes a source file path relative to the project-root marker.
pub trait SourceParser: Send + Sync {
  fn parse(&self, root_marker: &str, file_path: &str) -> ParsedPath;
}

#[derive(Debug, Default)]
pub struct DefaultSourceParser;

impl SourceParser for DefaultSourceParser {
  fn parse(&self, root_marker: &str, file_path: &str) -> ParsedPath {
    ParsedPath::parse(root_marker, file_path)
  }
}

/// Names the output file for a collected asset or resource. The returned
/// template may keep `[name]` / `[ext]` placeholders; the collector
/// substitutes them afterwards.
pub trait OutputNamer: Send + Sync {
  fn output_path(&self, template: &str, source: &ParsedPath, ext: &str) -> String;
}

#[derive(Debug, Default)]
pub struct DefaultOutputNamer;

impl OutputNamer for DefaultOutputNamer {
  /// Mirrors the source tree: kebab-cased folder path, original base name.
  fn output_path(&self, _template: &str, source: &ParsedPath, ext: &str) -> String {
    format!("{}/[name].{ext}", source.out_path)
  }
}
