/// Configuration for wrapping chunks whose code references runtime globals
/// in a guard that defers execution until those globals exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalWrapper {
  pub enable: bool,
  /// Text opening the guard.
  pub banner: String,
  /// Text closing the guard.
  pub footer: String,
  /// Literal whose presence in chunk code means the chunk was already
  /// wrapped; wrapping is skipped to stay idempotent.
  pub marker: String,
}

impl Default for ExternalWrapper {
  /// DOM-ready guard, so hosted globals enqueued in the page head have
  /// loaded before the chunk runs.
  fn default() -> Self {
    Self {
      enable: true,
      banner: "document.addEventListener('DOMContentLoaded', () => {".to_string(),
      footer: "});".to_string(),
      marker: "DOMContentLoaded".to_string(),
    }
  }
}
