/* src/core/rust/src/locale.rs */

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A supported site locale. The set is fixed at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
  En,
  Es,
  It,
}

impl Locale {
  /// All locales in switcher display order.
  pub const ALL: [Locale; 3] = [Locale::En, Locale::Es, Locale::It];

  pub const DEFAULT: Locale = Locale::En;

  pub fn code(self) -> &'static str {
    match self {
      Locale::En => "en",
      Locale::Es => "es",
      Locale::It => "it",
    }
  }

  pub fn display_name(self) -> &'static str {
    match self {
      Locale::En => "English",
      Locale::Es => "Español",
      Locale::It => "Italiano",
    }
  }

  /// Open Graph locale (`og:locale`).
  pub fn social_locale(self) -> &'static str {
    match self {
      Locale::En => "en_US",
      Locale::Es => "es_AR",
      Locale::It => "it_IT",
    }
  }

  /// Exact membership check against the registry.
  pub fn parse(code: &str) -> Option<Locale> {
    Self::ALL.into_iter().find(|l| l.code() == code)
  }

  /// Unknown or empty values coerce to the default locale.
  pub fn coerce(code: &str) -> Locale {
    Self::parse(code).unwrap_or(Self::DEFAULT)
  }

  /// Position in [`Locale::ALL`].
  pub fn index(self) -> usize {
    Self::ALL.iter().position(|l| *l == self).unwrap_or(0)
  }
}

impl fmt::Display for Locale {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.code())
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLocale(pub String);

impl fmt::Display for UnknownLocale {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "unknown locale \"{}\"", self.0)
  }
}

impl std::error::Error for UnknownLocale {}

impl FromStr for Locale {
  type Err = UnknownLocale;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::parse(s).ok_or_else(|| UnknownLocale(s.to_string()))
  }
}

/// Non-empty path segments.
pub(crate) fn segments(path: &str) -> Vec<&str> {
  path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Active locale for a pathname: the first segment when it is a known locale,
/// the default otherwise.
pub fn locale_from_path(path: &str) -> Locale {
  path.split('/').nth(1).and_then(Locale::parse).unwrap_or(Locale::DEFAULT)
}

/// Path with a leading locale segment removed, joined without leading or
/// trailing slashes. `/es/blog/hola` -> `blog/hola`, `/en` -> ``.
pub fn strip_locale(path: &str) -> String {
  let mut parts = segments(path);
  if parts.first().is_some_and(|s| Locale::parse(s).is_some()) {
    parts.remove(0);
  }
  parts.join("/")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse_is_exact() {
    assert_eq!(Locale::parse("es"), Some(Locale::Es));
    assert_eq!(Locale::parse("ES"), None);
    assert_eq!(Locale::parse("xx"), None);
    assert_eq!(Locale::parse(""), None);
  }

  #[test]
  fn coerce_falls_back_to_default() {
    assert_eq!(Locale::coerce("it"), Locale::It);
    assert_eq!(Locale::coerce("fr"), Locale::DEFAULT);
  }

  #[test]
  fn from_str_reports_unknown() {
    let err = "pt".parse::<Locale>().unwrap_err();
    assert_eq!(err.to_string(), "unknown locale \"pt\"");
  }

  #[test]
  fn locale_from_path_reads_first_segment() {
    assert_eq!(locale_from_path("/es/blog/hola"), Locale::Es);
    assert_eq!(locale_from_path("/xx/blog"), Locale::En);
    assert_eq!(locale_from_path("/"), Locale::En);
    assert_eq!(locale_from_path(""), Locale::En);
  }

  #[test]
  fn strip_locale_keeps_rest() {
    assert_eq!(strip_locale("/es/blog/hola"), "blog/hola");
    assert_eq!(strip_locale("/en/"), "");
    assert_eq!(strip_locale("/about/"), "about");
    assert_eq!(strip_locale("/it/blog/"), "blog");
  }

  #[test]
  fn serde_uses_codes() {
    assert_eq!(serde_json::to_string(&Locale::It).unwrap(), "\"it\"");
    let parsed: Locale = serde_json::from_str("\"es\"").unwrap();
    assert_eq!(parsed, Locale::Es);
  }

  #[test]
  fn social_locale_table() {
    assert_eq!(Locale::Es.social_locale(), "es_AR");
    assert_eq!(Locale::En.display_name(), "English");
    assert_eq!(Locale::It.index(), 2);
  }
}
