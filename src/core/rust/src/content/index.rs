/* src/core/rust/src/content/index.rs */

use std::cmp::Ordering;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};

use super::{ContentStore, PostPage, PostSummary, PostView, StoredPost};
use crate::errors::BlogError;
use crate::locale::Locale;

/// Typed query layer over a [`ContentStore`]. Cheap to clone.
#[derive(Clone)]
pub struct ContentIndex {
  store: Arc<dyn ContentStore>,
}

impl ContentIndex {
  pub fn new(store: impl ContentStore + 'static) -> Self {
    Self { store: Arc::new(store) }
  }

  pub fn from_arc(store: Arc<dyn ContentStore>) -> Self {
    Self { store }
  }

  /// Non-draft, titled posts of `locale`, newest first.
  pub async fn list_posts(&self, locale: Locale) -> Result<Vec<PostSummary>, BlogError> {
    let stored = self.store.list_by_locale(locale).await?;

    let mut dated: Vec<(Option<DateTime<Utc>>, PostSummary)> = stored
      .iter()
      .filter(|p| p.frontmatter.is_listable())
      .map(|p| (parse_date(&p.frontmatter.date_iso), PostSummary::from_stored(p)))
      .collect();
    dated.sort_by(|(da, a), (db, b)| newest_first(da, db).then_with(|| a.slug.cmp(&b.slug)));

    tracing::debug!(%locale, total = stored.len(), listed = dated.len(), "listed posts");
    Ok(dated.into_iter().map(|(_, s)| s).collect())
  }

  /// Detail projection of a single post. Drafts and untitled posts are
  /// indistinguishable from missing ones.
  pub async fn get_post(&self, locale: Locale, slug: &str) -> Result<PostView, BlogError> {
    let post = self.find(locale, slug).await?;
    Ok(PostView::from_stored(slug, &post))
  }

  /// Detail projection plus body, for the post route.
  pub async fn load_post(&self, locale: Locale, slug: &str) -> Result<PostPage, BlogError> {
    let post = self.find(locale, slug).await?;
    Ok(PostPage { view: PostView::from_stored(slug, &post), body: post.body })
  }

  async fn find(&self, locale: Locale, slug: &str) -> Result<StoredPost, BlogError> {
    match self.store.get_by_locale_and_slug(locale, slug).await? {
      Some(post) if post.frontmatter.is_listable() => Ok(post),
      _ => Err(BlogError::not_found(format!("post \"{slug}\" not found in {locale}"))),
    }
  }
}

fn newest_first(a: &Option<DateTime<Utc>>, b: &Option<DateTime<Utc>>) -> Ordering {
  match (a, b) {
    (Some(a), Some(b)) => b.cmp(a),
    (Some(_), None) => Ordering::Less,
    (None, Some(_)) => Ordering::Greater,
    (None, None) => Ordering::Equal,
  }
}

/// Parse an ISO 8601 timestamp or bare date (taken as midnight UTC).
pub fn parse_date(iso: &str) -> Option<DateTime<Utc>> {
  let iso = iso.trim();
  if iso.is_empty() {
    return None;
  }
  if let Ok(dt) = DateTime::parse_from_rfc3339(iso) {
    return Some(dt.with_timezone(&Utc));
  }
  NaiveDate::parse_from_str(iso, "%Y-%m-%d")
    .ok()
    .and_then(|d| d.and_hms_opt(0, 0, 0))
    .map(|naive| naive.and_utc())
}
