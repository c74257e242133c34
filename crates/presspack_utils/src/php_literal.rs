use serde_json::Value;

/// Renders a JSON value as a PHP literal expression.
///
/// The formatting (including the space before closing parens and the
/// newline placement in pretty mode) is stable so that re-running a build on
/// unchanged input reproduces manifest and asset files byte-for-byte.
pub fn php_literal(value: &Value, pretty: bool) -> String {
  render(value, pretty, "")
}

fn render(value: &Value, pretty: bool, indent: &str) -> String {
  match value {
    Value::String(text) => format!("'{}'", text.replace('\'', "\\'")),
    Value::Number(number) => number.to_string(),
    Value::Bool(flag) => flag.to_string(),
    Value::Array(items) => {
      let inner_indent = format!("{indent}  ");
      let rendered =
        items.iter().map(|item| render(item, pretty, &inner_indent)).collect::<Vec<_>>();
      format!("array({} )", rendered.join(", "))
    }
    Value::Object(entries) => {
      let step = if pretty { "  " } else { "" };
      let inner_indent = format!("{indent}{step}");
      let rendered = entries
        .iter()
        .map(|(key, item)| {
          format!("{indent}{step}'{}' => {}", key.replace('\'', "\\'"), render(item, pretty, &inner_indent))
        })
        .collect::<Vec<_>>();
      let newline = if pretty { "\n" } else { "" };
      format!("array({newline}{}{newline}{indent} )", rendered.join(&format!(",{newline}")))
    }
    Value::Null => "NULL".to_string(),
  }
}
