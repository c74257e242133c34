use sha2::{Digest, Sha256};

/// Length of the cache-busting version token embedded in `.asset.php` files.
pub const VERSION_TOKEN_LEN: usize = 20;

/// Hashes the raw bytes of a source file into a short hex version token.
///
/// The token is derived from the authored source rather than the compiled
/// output, so it only changes when the author changes the file.
pub fn version_token(bytes: &[u8]) -> String {
  let mut hasher = Sha256::new();
  hasher.update(bytes);
  let digest = format!("{:x}", hasher.finalize());
  digest[..VERSION_TOKEN_LEN].to_string()
}

#[test]
fn test_version_token() {
  let token = version_token(b"console.log('hello');\n");
  assert_eq!(token.len(), VERSION_TOKEN_LEN);
  assert!(token.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
  assert_eq!(token, version_token(b"console.log('hello');\n"));
  assert_ne!(token, version_token(b"console.log('hello!');\n"));
}
