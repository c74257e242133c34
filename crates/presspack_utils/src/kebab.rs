/// Converts a camel/Pascal-cased path segment to kebab-case.
///
/// A hyphen is inserted before every uppercase character, everything is
/// lowercased, duplicate hyphens collapse and a leading hyphen is stripped.
pub fn pascal_to_kebab(segment: &str) -> String {
  let mut out = String::with_capacity(segment.len() + 4);
  for ch in segment.chars() {
    if ch.is_uppercase() {
      out.push('-');
      out.extend(ch.to_lowercase());
    } else {
      out.push(ch);
    }
  }

  let mut collapsed = String::with_capacity(out.len());
  for ch in out.chars() {
    if ch == '-' && (collapsed.is_empty() || collapsed.ends_with('-')) {
      continue;
    }
    collapsed.push(ch);
  }
  collapsed
}

/// Converts a kebab-cased package handle to the camel-cased member name it is
/// exposed under at runtime, e.g. `api-fetch` -> `apiFetch`.
pub fn kebab_to_camel(handle: &str) -> String {
  let mut out = String::with_capacity(handle.len());
  let mut chars = handle.chars().peekable();
  while let Some(ch) = chars.next() {
    if ch == '-' {
      if let Some(next) = chars.peek().copied() {
        if next.is_ascii_lowercase() {
          chars.next();
          out.push(next.to_ascii_uppercase());
          continue;
        }
      }
    }
    out.push(ch);
  }
  out
}

#[test]
fn test_pascal_to_kebab() {
  assert_eq!(pascal_to_kebab("MyBlock"), "my-block");
  assert_eq!(pascal_to_kebab("ABCDef"), "a-b-c-def");
  assert_eq!(pascal_to_kebab("already-kebab"), "already-kebab");
  assert_eq!(pascal_to_kebab("double--dash"), "double-dash");
  assert_eq!(pascal_to_kebab(""), "");
}

#[test]
fn test_pascal_to_kebab_invariants() {
  for segment in ["EditorStyles", "view", "serverSideRender", "A", "-Lead"] {
    let kebab = pascal_to_kebab(segment);
    assert!(!kebab.contains("--"), "{kebab}");
    assert!(!kebab.starts_with('-'), "{kebab}");
    assert!(kebab.chars().all(|c| !c.is_uppercase()), "{kebab}");
    // Idempotent on its own output.
    assert_eq!(pascal_to_kebab(&kebab), kebab);
  }
}

#[test]
fn test_kebab_to_camel() {
  assert_eq!(kebab_to_camel("api-fetch"), "apiFetch");
  assert_eq!(kebab_to_camel("block-serialization-default-parser"), "blockSerializationDefaultParser");
  assert_eq!(kebab_to_camel("i18n"), "i18n");
  assert_eq!(kebab_to_camel("trailing-"), "trailing-");
}
