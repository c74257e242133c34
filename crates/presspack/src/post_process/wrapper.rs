use presspack_common::{BuildMode, NormalizedPluginOptions, OutputChunk};

use crate::ecmascript;

/// Wraps a classic chunk whose code references runtime globals in a guard
/// that defers execution until those globals exist, then encloses the result
/// in the configured banner/footer closure.
///
/// Already-wrapped code (identified by the wrapper marker) is left alone, so
/// the step is idempotent. In production the guarded code is minified; a
/// minification failure keeps the unminified guarded code and never fails
/// the build.
pub fn wrap_chunk(
  chunk: &mut OutputChunk,
  globals: &[String],
  options: &NormalizedPluginOptions,
  mode: BuildMode,
) {
  let wrapper = &options.external_wrapper;
  if !wrapper.enable {
    return;
  }

  let already_wrapped = chunk.code.contains(&wrapper.marker);
  let detected: Vec<&str> = if already_wrapped {
    Vec::new()
  } else {
    globals
      .iter()
      .filter(|global| chunk.code.contains(global.as_str()))
      .map(String::as_str)
      .collect()
  };

  if !detected.is_empty() {
    let globals_list = detected.join(", ");
    let wrapped = format!(
      "\n{banner}\n    if (typeof {globals_list} !== 'undefined') {{\n        {code}\n    }} else {{\n        console.error('Required global variables [{globals_list}] are not available.');\n    }}\n{footer}\n",
      banner = wrapper.banner,
      code = chunk.code,
      footer = wrapper.footer,
    );

    chunk.code = if mode.is_production() {
      match ecmascript::minify(&wrapped) {
        Ok(minified) => minified,
        Err(error) => {
          if options.verbose {
            log::warn!("minification of wrapped chunk {} failed, keeping unminified code: {error}", chunk.filename);
          }
          wrapped
        }
      }
    } else {
      wrapped
    };
  }

  chunk.code = format!("{}{}{}", options.banner, chunk.code, options.footer);
}
