use oxc::{
  allocator::Allocator,
  codegen::{Codegen, CodegenOptions},
  minifier::{CompressOptions, CompressOptionsKeepNames, MangleOptions, Minifier, MinifierOptions},
  parser::Parser,
  span::SourceType,
  transformer::ESTarget,
};
use presspack_error::BuildResult;

/// Minifies a wrapped chunk. A parse failure comes back as `Err` so the
/// caller can keep the unminified code instead of aborting the build.
pub fn minify(source_text: &str) -> BuildResult<String> {
  let allocator = Allocator::default();
  let source_type = SourceType::default();

  let ret = Parser::new(&allocator, source_text, source_type).parse();
  if !ret.errors.is_empty() {
    return Err(anyhow::anyhow!("failed to parse chunk for minification: {:?}", ret.errors).into());
  }
  let program = allocator.alloc(ret.program);

  let minified = Minifier::new(MinifierOptions {
    mangle: Some(MangleOptions::default()),
    compress: Some(CompressOptions {
      target: ESTarget::ESNext,
      drop_debugger: false,
      drop_console: false,
      keep_names: CompressOptionsKeepNames { function: true, class: true },
    }),
  })
  .build(&allocator, program);

  let ret = Codegen::new()
    .with_options(CodegenOptions { minify: true, ..CodegenOptions::default() })
    .with_scoping(minified.scoping)
    .build(program);

  Ok(ret.code)
}

#[test]
fn minifies_valid_code() {
  let code = minify("const answer = 40 + 2;\nconsole.log(answer);\n").unwrap();
  assert!(code.len() < "const answer = 40 + 2;\nconsole.log(answer);\n".len());
  assert!(code.contains("console.log"));
}

#[test]
fn parse_failure_is_an_error_not_a_panic() {
  assert!(minify("const = ;").is_err());
}
