/* src/core/rust/src/pages.rs */

use serde::Serialize;

use crate::content::{ContentIndex, PostPage, PostSummary, parse_date};
use crate::locale::Locale;
use crate::messages::{date_label, t};
use crate::router::{Route, post_path};
use crate::seo::SeoInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
  PageNotFound,
  PostNotFound,
  BlogError,
  NoPosts,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
  pub href: String,
  pub label: String,
}

/// A route-level error view. Like every page it has exactly one heading and
/// always offers a way back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorView {
  pub kind: ErrorKind,
  pub heading: String,
  pub description: String,
  pub back_link: Link,
}

impl ErrorView {
  pub fn page_not_found(locale: Locale) -> Self {
    Self {
      kind: ErrorKind::PageNotFound,
      heading: t(locale, "not.found.title").into(),
      description: t(locale, "not.found.description").into(),
      back_link: home_link(locale, "not.found.back"),
    }
  }

  pub fn post_not_found(locale: Locale) -> Self {
    Self {
      kind: ErrorKind::PostNotFound,
      heading: t(locale, "blog.notfound.title").into(),
      description: t(locale, "blog.notfound.description").into(),
      back_link: blog_link(locale, "blog.notfound.back"),
    }
  }

  /// Store failure while loading a post. Carries the underlying message.
  pub fn blog_error(locale: Locale, message: &str) -> Self {
    Self {
      kind: ErrorKind::BlogError,
      heading: t(locale, "blog.error.title").into(),
      description: non_empty_or(message, t(locale, "blog.error.description")),
      back_link: blog_link(locale, "blog.error.back"),
    }
  }

  /// Empty or failed listing.
  pub fn no_posts(locale: Locale, message: Option<&str>) -> Self {
    Self {
      kind: ErrorKind::NoPosts,
      heading: t(locale, "blog.no.posts").into(),
      description: non_empty_or(message.unwrap_or_default(), t(locale, "blog.no.posts.desc")),
      back_link: home_link(locale, "blog.return.home"),
    }
  }
}

fn non_empty_or(value: &str, fallback: &str) -> String {
  if value.is_empty() { fallback.to_string() } else { value.to_string() }
}

fn home_link(locale: Locale, key: &str) -> Link {
  Link { href: format!("/{locale}"), label: t(locale, key).into() }
}

fn blog_link(locale: Locale, key: &str) -> Link {
  Link { href: format!("/{locale}/blog"), label: t(locale, key).into() }
}

/// Listing entry with its localized publish date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListedPost {
  pub summary: PostSummary,
  pub href: String,
  pub published: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Page {
  Home { locale: Locale, heading: String, description: String },
  BlogIndex { locale: Locale, heading: String, posts: Vec<ListedPost> },
  Post { locale: Locale, post: PostPage },
  Error { locale: Locale, view: ErrorView },
}

impl Page {
  pub fn locale(&self) -> Locale {
    match self {
      Page::Home { locale, .. }
      | Page::BlogIndex { locale, .. }
      | Page::Post { locale, .. }
      | Page::Error { locale, .. } => *locale,
    }
  }

  /// The page's single top-level heading.
  pub fn heading(&self) -> &str {
    match self {
      Page::Home { heading, .. } | Page::BlogIndex { heading, .. } => heading,
      Page::Post { post, .. } => &post.view.title,
      Page::Error { view, .. } => &view.heading,
    }
  }

  pub fn error(&self) -> Option<&ErrorView> {
    match self {
      Page::Error { view, .. } => Some(view),
      _ => None,
    }
  }

  /// Head metadata for this page at `path`.
  pub fn seo_input(&self, path: &str) -> SeoInput {
    let locale = self.locale();
    match self {
      Page::Home { description, .. } => SeoInput::page(locale, path, description),
      Page::BlogIndex { heading, .. } => {
        let mut input = SeoInput::page(locale, path, t(locale, "home.source.description"));
        input.title = Some(heading.clone());
        input
      }
      Page::Post { post, .. } => {
        let view = &post.view;
        SeoInput {
          locale,
          path: path.to_string(),
          title: Some(view.head_title().to_string()),
          description: view.seo_description.clone().unwrap_or_default(),
          keywords: view.keywords.clone(),
          updated_at: view.updated_at_iso.clone(),
          is_blog_post: true,
        }
      }
      Page::Error { view, .. } => {
        let mut input = SeoInput::page(locale, path, &view.description);
        input.title = Some(view.heading.clone());
        input
      }
    }
  }
}

/// Run the loader for `route`, mapping failures to their error views.
pub async fn load_page(index: &ContentIndex, locale: Locale, route: &Route) -> Page {
  match route {
    Route::Home => Page::Home {
      locale,
      heading: t(locale, "welcome").into(),
      description: t(locale, "home.source.description").into(),
    },
    Route::BlogIndex => match index.list_posts(locale).await {
      Ok(posts) if posts.is_empty() => Page::Error { locale, view: ErrorView::no_posts(locale, None) },
      Ok(posts) => Page::BlogIndex {
        locale,
        heading: t(locale, "blog.title").into(),
        posts: posts.into_iter().map(|summary| listed(locale, summary)).collect(),
      },
      Err(e) => {
        tracing::warn!(locale = %locale, error = %e, "listing failed");
        Page::Error { locale, view: ErrorView::no_posts(locale, Some(e.message())) }
      }
    },
    Route::BlogPost { slug } => match index.load_post(locale, slug).await {
      Ok(post) => Page::Post { locale, post },
      Err(e) if e.is_not_found() => Page::Error { locale, view: ErrorView::post_not_found(locale) },
      Err(e) => {
        tracing::warn!(locale = %locale, slug = %slug, error = %e, "post failed to load");
        Page::Error { locale, view: ErrorView::blog_error(locale, e.message()) }
      }
    },
    Route::NotFound => Page::Error { locale, view: ErrorView::page_not_found(locale) },
  }
}

fn listed(locale: Locale, summary: PostSummary) -> ListedPost {
  let href = post_path(locale, &summary.slug);
  let published = parse_date(&summary.date_iso).map(|d| date_label(locale, d));
  ListedPost { summary, href, published }
}
