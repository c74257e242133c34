use std::path::Path;

use presspack_utils::{kebab::pascal_to_kebab, path_ext::PathExt};

/// Structural decomposition of a source file path relative to a recognized
/// project-root segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPath {
  /// The original path, untouched.
  pub path: String,
  /// Kebab-cased join of `folders`, used as the output base path.
  pub out_path: String,
  /// Path segments between the root marker and the file name.
  pub folders: Vec<String>,
  /// File name without its last extension.
  pub file_name: String,
  /// Substring after the last dot of the file name, empty when there is none.
  pub ext: String,
}

impl ParsedPath {
  /// Decomposes `file_path`, dropping everything up to and including the last
  /// segment equal to `root_marker`. A marker given as a path is reduced to
  /// its final segment first. Total: missing parts come back empty.
  pub fn parse(root_marker: &str, file_path: &str) -> Self {
    let marker = root_marker.rsplit('/').next().unwrap_or(root_marker);
    let normalized = Path::new(file_path).expect_to_slash();

    let mut segments = normalized.split('/').collect::<Vec<_>>();
    if let Some(index) = segments.iter().rposition(|segment| *segment == marker) {
      segments.drain(..=index);
    }

    let file = segments.pop().unwrap_or("");
    let folders = segments.iter().map(ToString::to_string).collect::<Vec<_>>();

    let (file_name, ext) = match file.rfind('.') {
      None => (file.to_string(), String::new()),
      // Dotfiles keep their full name as the base.
      Some(0) => (file.to_string(), file[1..].to_string()),
      Some(index) => (file[..index].to_string(), file[index + 1..].to_string()),
    };

    let out_path =
      folders.iter().map(|folder| pascal_to_kebab(folder)).collect::<Vec<_>>().join("/");

    Self { path: file_path.to_string(), out_path, folders, file_name, ext }
  }
}

#[cfg(test)]
mod tests {
  use super::ParsedPath;

  #[test]
  fn strips_up_to_last_root_marker() {
    let parsed = ParsedPath::parse("src", "/work/src/theme/src/Blocks/ExampleBlock/index.js");
    assert_eq!(parsed.folders, vec!["Blocks", "ExampleBlock"]);
    assert_eq!(parsed.out_path, "blocks/example-block");
    assert_eq!(parsed.file_name, "index");
    assert_eq!(parsed.ext, "js");
    assert_eq!(parsed.path, "/work/src/theme/src/Blocks/ExampleBlock/index.js");
  }

  #[test]
  fn marker_given_as_path_uses_its_last_segment() {
    let parsed = ParsedPath::parse("theme/src", "/work/theme/src/admin/editor.pcss");
    assert_eq!(parsed.out_path, "admin");
    assert_eq!(parsed.file_name, "editor");
    assert_eq!(parsed.ext, "pcss");
  }

  #[test]
  fn missing_marker_keeps_all_folders() {
    let parsed = ParsedPath::parse("src", "relative/Scripts/view.js");
    assert_eq!(parsed.folders, vec!["relative", "Scripts"]);
    assert_eq!(parsed.out_path, "relative/scripts");
  }

  #[test]
  fn file_name_edge_cases() {
    let plain = ParsedPath::parse("src", "src/LICENSE");
    assert_eq!(plain.file_name, "LICENSE");
    assert_eq!(plain.ext, "");

    let dotfile = ParsedPath::parse("src", "src/.env");
    assert_eq!(dotfile.file_name, ".env");
    assert_eq!(dotfile.ext, "env");

    let double = ParsedPath::parse("src", "src/block.json.bak");
    assert_eq!(double.file_name, "block.json");
    assert_eq!(double.ext, "bak");
  }

  #[test]
  fn parse_is_pure() {
    let first = ParsedPath::parse("src", "src/Blocks/view.js");
    let second = ParsedPath::parse("src", "src/Blocks/view.js");
    assert_eq!(first, second);
  }
}
