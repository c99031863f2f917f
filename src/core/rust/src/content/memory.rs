/* src/core/rust/src/content/memory.rs */

use std::collections::BTreeMap;

use super::{BoxFuture, ContentStore, PostFrontmatter, StoredPost};
use crate::errors::BlogError;
use crate::locale::Locale;

/// Fully loaded store held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
  posts: BTreeMap<(Locale, String), StoredPost>,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// Add a post keyed by its frontmatter slug.
  pub fn insert(self, locale: Locale, frontmatter: PostFrontmatter, body: &str) -> Self {
    let slug = frontmatter.slug.clone();
    let path = format!("{locale}/{slug}.mdx");
    self.insert_at(locale, &slug, path, frontmatter, body)
  }

  /// Add a post under an explicit lookup slug and source path.
  pub fn insert_at(
    mut self,
    locale: Locale,
    slug: &str,
    path: String,
    frontmatter: PostFrontmatter,
    body: &str,
  ) -> Self {
    let post = StoredPost { path, slug: slug.to_string(), frontmatter, body: body.to_string() };
    self.put(locale, post);
    self
  }

  pub(crate) fn put(&mut self, locale: Locale, post: StoredPost) {
    self.posts.insert((locale, post.slug.clone()), post);
  }

  pub fn len(&self) -> usize {
    self.posts.len()
  }

  pub fn is_empty(&self) -> bool {
    self.posts.is_empty()
  }

  pub fn count_for(&self, locale: Locale) -> usize {
    self.posts.keys().filter(|(l, _)| *l == locale).count()
  }
}

impl ContentStore for MemoryStore {
  fn list_by_locale(&self, locale: Locale) -> BoxFuture<'_, Result<Vec<StoredPost>, BlogError>> {
    let posts =
      self.posts.iter().filter(|((l, _), _)| *l == locale).map(|(_, p)| p.clone()).collect();
    Box::pin(std::future::ready(Ok(posts)))
  }

  fn get_by_locale_and_slug<'a>(
    &'a self,
    locale: Locale,
    slug: &'a str,
  ) -> BoxFuture<'a, Result<Option<StoredPost>, BlogError>> {
    let post = self.posts.get(&(locale, slug.to_string())).cloned();
    Box::pin(std::future::ready(Ok(post)))
  }
}
