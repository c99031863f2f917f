/* src/core/rust/src/seo/mod.rs */

mod document;


use chrono::{DateTime, SecondsFormat, Utc};

pub use document::{HeadDocument, HeadNode, Match, MemoryDocument, NodeId, Selector, Tag};

use crate::escape::script_safe_json;
use crate::locale::{Locale, strip_locale};

/// Site-wide values the synchronizer needs besides the per-page input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteMeta {
  /// Site name, used as the title suffix and `og:site_name`.
  pub name: String,
  /// Title when neither an explicit title nor a clean path exists.
  pub home_title: String,
  /// Document origin, e.g. `https://blog.example.com` (no trailing slash).
  pub origin: String,
  pub twitter_card: Option<String>,
}

impl SiteMeta {
  pub fn new(name: &str, origin: &str) -> Self {
    Self {
      name: name.to_string(),
      home_title: name.to_string(),
      origin: origin.trim_end_matches('/').to_string(),
      twitter_card: None,
    }
  }
}

/// Per-render input. Any change to any field triggers a reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeoInput {
  pub locale: Locale,
  pub path: String,
  pub title: Option<String>,
  pub description: String,
  pub keywords: Vec<String>,
  pub updated_at: Option<String>,
  pub is_blog_post: bool,
}

impl SeoInput {
  pub fn page(locale: Locale, path: &str, description: &str) -> Self {
    Self {
      locale,
      path: path.to_string(),
      title: None,
      description: description.to_string(),
      keywords: Vec::new(),
      updated_at: None,
      is_blog_post: false,
    }
  }
}

/// Every node family the synchronizer owns. Teardown removes anything
/// matching these, including orphans left by an earlier render.
pub fn owned_selectors() -> Vec<Selector> {
  vec![
    Selector::exact(Tag::Meta, "name", "description"),
    Selector::exact(Tag::Meta, "name", "keywords"),
    Selector::exact(Tag::Link, "rel", "canonical"),
    Selector::exact(Tag::Link, "rel", "alternate"),
    Selector::exact(Tag::Script, "type", "application/ld+json"),
    Selector::prefix(Tag::Meta, "property", "og:"),
    Selector::prefix(Tag::Meta, "property", "article:"),
    Selector::prefix(Tag::Meta, "name", "twitter:"),
  ]
}

/// Owns the document's out-of-band metadata and keeps it in step with the
/// current `(locale, path, page)` tuple.
#[derive(Debug, Clone)]
pub struct SeoSync {
  site: SiteMeta,
  applied: Option<SeoInput>,
  /// `(lang, title)` found on the document before the first write.
  original: Option<(Option<String>, Option<String>)>,
}

impl SeoSync {
  pub fn new(site: SiteMeta) -> Self {
    Self { site, applied: None, original: None }
  }

  pub fn site(&self) -> &SiteMeta {
    &self.site
  }

  /// Reconcile using the current time for `dateModified` fallbacks.
  pub fn apply(&mut self, doc: &mut dyn HeadDocument, input: &SeoInput) -> bool {
    self.apply_at(doc, input, Utc::now())
  }

  /// Reconcile `doc` with `input`. Returns `false` without touching the
  /// document when `input` equals the last applied input.
  pub fn apply_at(
    &mut self,
    doc: &mut dyn HeadDocument,
    input: &SeoInput,
    now: DateTime<Utc>,
  ) -> bool {
    if self.applied.as_ref() == Some(input) {
      tracing::debug!(path = %input.path, "seo input unchanged, skipping");
      return false;
    }

    if self.original.is_none() {
      self.original = Some((doc.lang().map(str::to_string), doc.title().map(str::to_string)));
    }
    teardown(doc);
    self.write(doc, input, now);
    self.applied = Some(input.clone());
    true
  }

  /// Remove every owned node and put back the `lang` and title the document
  /// had before the first apply. Called when the view goes away.
  pub fn unmount(&mut self, doc: &mut dyn HeadDocument) {
    teardown(doc);
    if let Some((lang, title)) = self.original.take() {
      doc.set_lang(lang.as_deref());
      doc.set_title(title.as_deref());
    }
    self.applied = None;
  }

  fn write(&self, doc: &mut dyn HeadDocument, input: &SeoInput, now: DateTime<Utc>) {
    let site = &self.site;
    let locale = input.locale;
    let clean = strip_locale(&input.path);
    let url = |lang: &str| url_for(&site.origin, lang, &clean);
    let current_url = url(locale.code());
    let title = input.title.as_deref().filter(|t| !t.is_empty());

    doc.set_lang(Some(locale.code()));
    doc.set_title(Some(&document_title(site, title, &clean)));

    if !input.description.is_empty() {
      upsert_meta(doc, "name", "description", &input.description);
    }
    if !input.keywords.is_empty() {
      upsert_meta(doc, "name", "keywords", &input.keywords.join(", "));
    }

    upsert(
      doc,
      &Selector::exact(Tag::Link, "rel", "canonical"),
      HeadNode::new(Tag::Link).attr("rel", "canonical").attr("href", current_url.as_str()),
    );
    for lang in Locale::ALL {
      upsert_alternate(doc, lang.code(), &url(lang.code()));
    }
    upsert_alternate(doc, "x-default", &url(Locale::DEFAULT.code()));

    let json_ld = structured_data(input, title, &current_url, now);
    upsert(
      doc,
      &Selector::exact(Tag::Script, "type", "application/ld+json"),
      HeadNode::new(Tag::Script).attr("type", "application/ld+json").text(json_ld),
    );

    let og_type = if input.is_blog_post { "article" } else { "website" };
    let og: [(&str, Option<&str>); 6] = [
      ("og:type", Some(og_type)),
      ("og:title", title),
      ("og:description", Some(input.description.as_str())),
      ("og:url", Some(current_url.as_str())),
      ("og:site_name", Some(site.name.as_str())),
      ("og:locale", Some(locale.social_locale())),
    ];
    for (property, content) in og {
      if let Some(content) = content.filter(|c| !c.is_empty()) {
        upsert_meta(doc, "property", property, content);
      }
    }
    if input.is_blog_post {
      if let Some(updated) = input.updated_at.as_deref().filter(|u| !u.is_empty()) {
        upsert_meta(doc, "property", "article:modified_time", updated);
      }
    }

    let twitter: [(&str, Option<&str>); 3] = [
      ("twitter:card", site.twitter_card.as_deref()),
      ("twitter:title", title),
      ("twitter:description", Some(input.description.as_str())),
    ];
    for (name, content) in twitter {
      if let Some(content) = content.filter(|c| !c.is_empty()) {
        upsert_meta(doc, "name", name, content);
      }
    }
  }
}

fn teardown(doc: &mut dyn HeadDocument) {
  for selector in owned_selectors() {
    for id in doc.query_all(&selector) {
      doc.remove(id);
    }
  }
}

/// Create the node if nothing matches `selector`, else update the first match
/// in place and drop any duplicates.
fn upsert(doc: &mut dyn HeadDocument, selector: &Selector, node: HeadNode) {
  let mut ids = doc.query_all(selector).into_iter();
  match ids.next() {
    Some(first) => {
      doc.update(first, node);
      for dup in ids {
        doc.remove(dup);
      }
    }
    None => {
      doc.append(node);
    }
  }
}

fn upsert_meta(doc: &mut dyn HeadDocument, key: &str, value: &str, content: &str) {
  upsert(
    doc,
    &Selector::exact(Tag::Meta, key, value),
    HeadNode::new(Tag::Meta).attr(key, value).attr("content", content),
  );
}

fn upsert_alternate(doc: &mut dyn HeadDocument, hreflang: &str, href: &str) {
  upsert(
    doc,
    &Selector::exact(Tag::Link, "hreflang", hreflang),
    HeadNode::new(Tag::Link).attr("rel", "alternate").attr("hreflang", hreflang).attr("href", href),
  );
}

/// `{origin}/{lang}/{clean}` or `{origin}/{lang}` for an empty clean path.
pub fn url_for(origin: &str, lang: &str, clean_path: &str) -> String {
  if clean_path.is_empty() {
    format!("{origin}/{lang}")
  } else {
    format!("{origin}/{lang}/{clean_path}")
  }
}

/// Explicit title, else the clean path, else the site home title.
pub fn document_title(site: &SiteMeta, title: Option<&str>, clean_path: &str) -> String {
  match title {
    Some(t) => format!("{t} | {}", site.name),
    None if !clean_path.is_empty() => format!("{clean_path} | {}", site.name),
    None => site.home_title.clone(),
  }
}

fn structured_data(
  input: &SeoInput,
  title: Option<&str>,
  url: &str,
  now: DateTime<Utc>,
) -> String {
  let mut obj = serde_json::Map::new();
  obj.insert("@context".into(), "https://schema.org".into());
  let kind = if input.is_blog_post { "BlogPosting" } else { "WebSite" };
  obj.insert("@type".into(), kind.into());
  if let Some(t) = title {
    obj.insert("headline".into(), t.into());
  }
  obj.insert("description".into(), input.description.as_str().into());
  let modified = input
    .updated_at
    .clone()
    .filter(|u| !u.is_empty())
    .unwrap_or_else(|| now.to_rfc3339_opts(SecondsFormat::Millis, true));
  obj.insert("dateModified".into(), modified.into());
  obj.insert("inLanguage".into(), input.locale.code().into());
  obj.insert("url".into(), url.into());

  let json = serde_json::Value::Object(obj).to_string();
  script_safe_json(&json)
}
