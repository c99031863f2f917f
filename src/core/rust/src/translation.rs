/* src/core/rust/src/translation.rs */

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::content::ContentIndex;
use crate::errors::BlogError;
use crate::locale::Locale;

/// "This same post, as published in locale X." Keys are always registry
/// locales; a missing key means no known translation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TranslationMap(BTreeMap<Locale, String>);

impl TranslationMap {
  pub fn new() -> Self {
    Self::default()
  }

  /// Single-entry identity map `{ locale: slug }`.
  pub fn identity(locale: Locale, slug: &str) -> Self {
    let mut map = Self::new();
    map.insert(locale, slug);
    map
  }

  pub fn insert(&mut self, locale: Locale, slug: impl Into<String>) {
    self.0.insert(locale, slug.into());
  }

  pub fn get(&self, locale: Locale) -> Option<&str> {
    self.0.get(&locale).map(String::as_str)
  }

  /// `map[target] ?? fallback`
  pub fn slug_for<'a>(&'a self, target: Locale, fallback: &'a str) -> &'a str {
    self.get(target).unwrap_or(fallback)
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn iter(&self) -> impl Iterator<Item = (Locale, &str)> {
    self.0.iter().map(|(l, s)| (*l, s.as_str()))
  }

  /// Build from authored `code -> slug` pairs, dropping codes outside the
  /// registry and empty slugs.
  pub fn from_authored<I, K, V>(pairs: I) -> Self
  where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
  {
    let mut map = Self::new();
    for (code, slug) in pairs {
      let slug = slug.into();
      match Locale::parse(code.as_ref()) {
        Some(locale) if !slug.is_empty() => map.insert(locale, slug),
        Some(_) => {}
        None => {
          tracing::warn!(code = code.as_ref(), "dropping translation for unknown locale");
        }
      }
    }
    map
  }
}

impl<'de> Deserialize<'de> for TranslationMap {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let raw = BTreeMap::<String, String>::deserialize(deserializer)?;
    Ok(Self::from_authored(raw))
  }
}

/// Cross-locale mapping for the post at `(locale, slug)`.
///
/// Absent or draft posts give an empty map. An authored non-empty map is
/// authoritative and returned verbatim, even when partial. Otherwise the
/// identity map `{ locale: slug }` is returned and navigation assumes the same
/// slug exists elsewhere.
pub async fn resolve_translations(
  index: &ContentIndex,
  locale: Locale,
  slug: &str,
) -> Result<TranslationMap, BlogError> {
  let post = match index.get_post(locale, slug).await {
    Ok(post) => post,
    Err(e) if e.is_not_found() => return Ok(TranslationMap::new()),
    Err(e) => return Err(e),
  };

  match post.translations {
    Some(map) if !map.is_empty() => Ok(map),
    _ => Ok(TranslationMap::identity(locale, slug)),
  }
}
