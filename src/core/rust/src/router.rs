/* src/core/rust/src/router.rs */

use std::collections::HashMap;

use crate::locale::{Locale, segments};

/// A declarative path template such as `/:locale/blog/:slug`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
  parts: Vec<PatternPart>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum PatternPart {
  Static(String),
  Param(String),
}

impl RoutePattern {
  pub fn parse(template: &str) -> Self {
    let parts = segments(template)
      .into_iter()
      .map(|s| match s.strip_prefix(':') {
        Some(name) => PatternPart::Param(name.to_string()),
        None => PatternPart::Static(s.to_string()),
      })
      .collect();
    Self { parts }
  }

  /// Match a concrete path, tolerating a trailing slash. Returns the named
  /// parameters on success.
  pub fn matches(&self, path: &str) -> Option<HashMap<String, String>> {
    let segs = segments(path);
    if segs.len() != self.parts.len() {
      return None;
    }
    let mut params = HashMap::new();
    for (part, seg) in self.parts.iter().zip(segs) {
      match part {
        PatternPart::Static(s) if s == seg => {}
        PatternPart::Static(_) => return None,
        PatternPart::Param(name) => {
          params.insert(name.clone(), seg.to_string());
        }
      }
    }
    Some(params)
  }

  /// Fill the template's parameters.
  pub fn build(&self, params: &HashMap<&str, &str>) -> String {
    let mut out = String::new();
    for part in &self.parts {
      out.push('/');
      match part {
        PatternPart::Static(s) => out.push_str(s),
        PatternPart::Param(name) => out.push_str(params.get(name.as_str()).copied().unwrap_or("")),
      }
    }
    if out.is_empty() {
      out.push('/');
    }
    out
  }
}

/// The application's route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
  Home,
  BlogIndex,
  BlogPost { slug: String },
  NotFound,
}

pub const HOME: &str = "/:locale";
pub const BLOG_INDEX: &str = "/:locale/blog";
pub const BLOG_POST: &str = "/:locale/blog/:slug";

/// `/{locale}/blog/{slug}`
pub fn post_path(locale: Locale, slug: &str) -> String {
  RoutePattern::parse(BLOG_POST).build(&HashMap::from([("locale", locale.code()), ("slug", slug)]))
}

impl Route {
  pub fn recognize(path: &str) -> Route {
    if RoutePattern::parse(HOME).matches(path).is_some() {
      return Route::Home;
    }
    if RoutePattern::parse(BLOG_INDEX).matches(path).is_some() {
      return Route::BlogIndex;
    }
    if let Some(mut params) = RoutePattern::parse(BLOG_POST).matches(path) {
      if let Some(slug) = params.remove("slug") {
        return Route::BlogPost { slug };
      }
    }
    Route::NotFound
  }
}

/// What the core needs from the host routing engine.
pub trait Router {
  /// Client-side navigation: updates history without reloading the document.
  fn navigate(&mut self, path: &str);

  /// Full document load of `path`. Every subsystem starts over.
  fn reload(&mut self, path: &str);

  fn current(&self) -> &str;
}

/// History-stack router used by the shell and in tests.
#[derive(Debug, Clone)]
pub struct MemoryRouter {
  history: Vec<String>,
  reloads: usize,
}

impl MemoryRouter {
  pub fn new(initial: &str) -> Self {
    Self { history: vec![initial.to_string()], reloads: 0 }
  }

  pub fn history(&self) -> &[String] {
    &self.history
  }

  /// Number of full document loads after the initial one. Only
  /// [`Router::reload`] counts.
  pub fn reloads(&self) -> usize {
    self.reloads
  }

  /// Step back one entry, if any.
  pub fn back(&mut self) -> Option<&str> {
    if self.history.len() > 1 {
      self.history.pop();
      return self.history.last().map(String::as_str);
    }
    None
  }
}

impl Router for MemoryRouter {
  fn navigate(&mut self, path: &str) {
    tracing::debug!(to = path, "navigate");
    self.history.push(path.to_string());
  }

  fn reload(&mut self, path: &str) {
    tracing::debug!(to = path, "reload");
    self.history.push(path.to_string());
    self.reloads += 1;
  }

  fn current(&self) -> &str {
    self.history.last().map_or("/", String::as_str)
  }
}
