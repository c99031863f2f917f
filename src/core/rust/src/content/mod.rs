/* src/core/rust/src/content/mod.rs */

mod fs;
mod index;
mod memory;
mod types;


use std::future::Future;
use std::pin::Pin;

pub use fs::{ContentError, FsStore, parse_post};
pub use index::{ContentIndex, parse_date};
pub use memory::MemoryStore;
pub use types::{PostFrontmatter, PostPage, PostSummary, PostView, StoredPost};

use crate::errors::BlogError;
use crate::locale::Locale;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Read interface over the external content store, keyed by `(locale, slug)`.
///
/// Read failures must come back as errors other than `NOT_FOUND`; absence is
/// `Ok(None)`.
pub trait ContentStore: Send + Sync {
  fn list_by_locale(&self, locale: Locale) -> BoxFuture<'_, Result<Vec<StoredPost>, BlogError>>;

  fn get_by_locale_and_slug<'a>(
    &'a self,
    locale: Locale,
    slug: &'a str,
  ) -> BoxFuture<'a, Result<Option<StoredPost>, BlogError>>;
}
