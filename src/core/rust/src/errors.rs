/* src/core/rust/src/errors.rs */

use std::fmt;

pub const NOT_FOUND: &str = "NOT_FOUND";
pub const FETCH_FAILED: &str = "FETCH_FAILED";
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";

/// Error surfaced by content lookups and page loaders.
///
/// A missing or draft post is `NOT_FOUND` and routes to the not-found view.
/// Store failures are `FETCH_FAILED` and route to the error view with their
/// message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogError {
  code: String,
  message: String,
  status: u16,
}

fn default_status(code: &str) -> u16 {
  match code {
    VALIDATION_ERROR => 400,
    NOT_FOUND => 404,
    FETCH_FAILED => 502,
    _ => 500,
  }
}

impl BlogError {
  pub fn new(code: impl Into<String>, message: impl Into<String>, status: u16) -> Self {
    Self { code: code.into(), message: message.into(), status }
  }

  pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
    let code = code.into();
    let status = default_status(&code);
    Self { code, message: message.into(), status }
  }

  pub fn not_found(msg: impl Into<String>) -> Self {
    Self::with_code(NOT_FOUND, msg)
  }

  pub fn fetch_failed(msg: impl Into<String>) -> Self {
    Self::with_code(FETCH_FAILED, msg)
  }

  pub fn validation(msg: impl Into<String>) -> Self {
    Self::with_code(VALIDATION_ERROR, msg)
  }

  pub fn internal(msg: impl Into<String>) -> Self {
    Self::with_code(INTERNAL_ERROR, msg)
  }

  pub fn code(&self) -> &str {
    &self.code
  }

  pub fn message(&self) -> &str {
    &self.message
  }

  pub fn status(&self) -> u16 {
    self.status
  }

  pub fn is_not_found(&self) -> bool {
    self.code == NOT_FOUND
  }
}

impl fmt::Display for BlogError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {}", self.code, self.message)
  }
}

impl std::error::Error for BlogError {}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_status_known_codes() {
    assert_eq!(default_status(VALIDATION_ERROR), 400);
    assert_eq!(default_status(NOT_FOUND), 404);
    assert_eq!(default_status(FETCH_FAILED), 502);
    assert_eq!(default_status(INTERNAL_ERROR), 500);
    assert_eq!(default_status("CUSTOM"), 500);
  }

  #[test]
  fn not_found_is_distinct_from_fetch_failure() {
    assert!(BlogError::not_found("gone").is_not_found());
    assert!(!BlogError::fetch_failed("disk on fire").is_not_found());
  }

  #[test]
  fn display_format() {
    let err = BlogError::fetch_failed("store offline");
    assert_eq!(err.to_string(), "FETCH_FAILED: store offline");
    assert_eq!(err.status(), 502);
  }
}
