use std::path::{Path, PathBuf};

use presspack_common::{AssetRules, EmittedAsset, InputPattern, InputSpec, NormalizedPluginOptions};
use presspack_error::{BuildError, BuildResult};
use presspack_fs::{DirEntryKind, FileSystem};
use presspack_utils::{
  indexmap::{FxIndexMap, FxIndexSet},
  path_ext::PathExt,
};

use crate::build_config::ResolvedBuildConfig;

/// Entry patterns expanded to concrete on-disk files, slash-normalized
/// absolute paths. Interactivity membership decides a chunk's module mode.
#[derive(Debug, Clone, Default)]
pub struct ResolvedInput {
  pub entries: Vec<String>,
  pub interactivity: Vec<String>,
}

pub fn resolve_input<F: FileSystem>(fs: &F, root: &Path, spec: &InputSpec) -> ResolvedInput {
  let files = walk_files(fs, root);
  ResolvedInput {
    entries: expand_patterns(&files, &spec.entries),
    interactivity: expand_patterns(&files, &spec.interactivity),
  }
}

/// Resources among the entry files (PHP, JSON, ...) grouped by lowercased
/// extension. Script and style sources are someone else's job.
pub fn collect_resources(entries: &[String], css_ext: &str) -> FxIndexMap<String, Vec<String>> {
  let style_suffix = format!(".{css_ext}");
  let mut grouped: FxIndexMap<String, Vec<String>> = FxIndexMap::default();
  for entry in entries {
    if entry.ends_with(".js") || entry.ends_with(&style_suffix) {
      continue;
    }
    let ext = Path::new(entry)
      .extension()
      .map(|ext| ext.to_string_lossy().to_lowercase())
      .unwrap_or_default();
    grouped.entry(ext).or_default().push(entry.clone());
  }
  grouped
}

/// Files living under a directory named after an asset bucket, anywhere in
/// the project root, filtered by the bucket's file name matcher. A missing
/// root yields empty buckets, not an error.
pub fn collect_assets<F: FileSystem>(
  fs: &F,
  root: &Path,
  rules: &AssetRules,
) -> FxIndexMap<String, Vec<String>> {
  let files = walk_files(fs, root);
  let mut grouped = FxIndexMap::default();
  for (bucket, matcher) in rules.iter() {
    let mut bucket_files = Vec::new();
    for (rel, abs) in &files {
      let mut segments = rel.split('/').collect::<Vec<_>>();
      let Some(file_name) = segments.pop() else { continue };
      if segments.iter().any(|dir| *dir == bucket) && matcher.is_match(file_name) {
        bucket_files.push(abs.expect_to_slash());
      }
    }
    grouped.insert(bucket.to_string(), bucket_files);
  }
  grouped
}

/// Builds the emission list for the build-start hook: every collected
/// resource and asset, renamed through the output strategy.
pub fn collect_emitted_assets<F: FileSystem>(
  fs: &F,
  options: &NormalizedPluginOptions,
  config: &ResolvedBuildConfig,
  input: &ResolvedInput,
) -> BuildResult<Vec<EmittedAsset>> {
  let root_marker = config.root_marker();
  let mut groups = collect_resources(&input.entries, &options.css_ext);
  for (bucket, files) in collect_assets(fs, &config.root, &options.assets) {
    groups.entry(bucket).or_default().extend(files);
  }

  let mut emitted = Vec::new();
  for (bucket, files) in &groups {
    for file_path in files {
      let parsed = options.source.parse(&root_marker, file_path);
      let template = format!("{bucket}/[name][ext]");
      let file_name = options
        .output
        .output_path(&template, &parsed, &parsed.ext)
        .replace("[name]", &parsed.file_name)
        .replace("[ext]", &format!(".{}", parsed.ext));
      let source = fs.read(Path::new(file_path)).map_err(|error| {
        BuildError::io(format!("failed to read collected file {file_path}"), error)
      })?;
      let name = Path::new(file_path)
        .strip_prefix(&config.root)
        .map_or_else(|_| file_path.clone(), |rel| rel.expect_to_slash());
      emitted.push(EmittedAsset { file_name, name: name.clone(), original_file_name: name, source });
    }
  }
  Ok(emitted)
}

fn expand_patterns(files: &[(String, PathBuf)], patterns: &[InputPattern]) -> Vec<String> {
  let mut matched = FxIndexSet::default();
  for pattern in patterns {
    let glob = pattern.as_glob();
    for (rel, abs) in files {
      if fast_glob::glob_match(&glob, rel) {
        matched.insert(abs.expect_to_slash());
      }
    }
  }
  matched.into_iter().collect()
}

/// Recursive listing as `(root-relative slash path, absolute path)`.
/// `read_dir` returns sorted entries, so the listing is deterministic for a
/// fixed filesystem snapshot.
fn walk_files<F: FileSystem>(fs: &F, root: &Path) -> Vec<(String, PathBuf)> {
  let mut files = Vec::new();
  if !fs.exists(root) {
    return files;
  }
  visit(fs, root, "", &mut files);
  files
}

fn visit<F: FileSystem>(fs: &F, dir: &Path, rel: &str, files: &mut Vec<(String, PathBuf)>) {
  let Ok(entries) = fs.read_dir(dir) else { return };
  for (name, kind) in entries {
    let child_rel = if rel.is_empty() { name.clone() } else { format!("{rel}/{name}") };
    let child = dir.join(&name);
    match kind {
      DirEntryKind::Dir => visit(fs, &child, &child_rel, files),
      DirEntryKind::File => files.push((child_rel, child)),
    }
  }
}
