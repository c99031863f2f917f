/* src/core/rust/src/root.rs */

use crate::locale::{Locale, locale_from_path};
use crate::router::Route;

/// Outcome of entering the application at a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
  /// No locale segment: go to the default locale root before anything else.
  Redirect(String),
  Render { locale: Locale, route: Route },
}

pub fn default_root() -> String {
  format!("/{}/", Locale::DEFAULT)
}

/// Decide what to do with `path`. The active locale is derived from the path
/// alone; an unknown first segment silently becomes the default locale.
pub fn resolve_entry(path: &str) -> Entry {
  let first = path.split('/').nth(1).unwrap_or_default();
  if first.is_empty() {
    return Entry::Redirect(default_root());
  }
  Entry::Render { locale: locale_from_path(path), route: Route::recognize(path) }
}
