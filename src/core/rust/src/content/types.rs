/* src/core/rust/src/content/types.rs */

use serde::{Deserialize, Serialize};

use crate::translation::TranslationMap;

/// Authoring-time metadata of one post in one locale, as written in the
/// frontmatter block of an `.mdx` file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostFrontmatter {
  #[serde(default)]
  pub title: String,
  #[serde(default)]
  pub slug: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub seo_title: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub seo_description: Option<String>,
  #[serde(rename = "dateISO", default)]
  pub date_iso: String,
  #[serde(rename = "updatedAtISO", default, skip_serializing_if = "Option::is_none")]
  pub updated_at_iso: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub keywords: Option<Vec<String>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub translation_key: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub translations: Option<TranslationMap>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub image: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub image_alt: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub draft: Option<bool>,
}

impl PostFrontmatter {
  pub fn is_draft(&self) -> bool {
    self.draft.unwrap_or(false)
  }

  /// Posts without a title never reach the UI.
  pub fn is_listable(&self) -> bool {
    !self.title.trim().is_empty() && !self.is_draft()
  }
}

/// One entry of the external content store.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredPost {
  /// Store-relative source path, e.g. `en/hello.mdx`.
  pub path: String,
  /// Lookup key within its locale (file stem).
  pub slug: String,
  pub frontmatter: PostFrontmatter,
  /// Uncompiled post body.
  pub body: String,
}

/// Listing-page projection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSummary {
  pub slug: String,
  pub title: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub seo_title: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub seo_description: Option<String>,
  pub excerpt: String,
  #[serde(rename = "dateISO")]
  pub date_iso: String,
  #[serde(rename = "updatedAtISO", skip_serializing_if = "Option::is_none")]
  pub updated_at_iso: Option<String>,
  pub keywords: Vec<String>,
}

impl PostSummary {
  pub(crate) fn from_stored(post: &StoredPost) -> Self {
    let fm = &post.frontmatter;
    Self {
      slug: post.slug.clone(),
      title: fm.title.clone(),
      seo_title: fm.seo_title.clone(),
      seo_description: fm.seo_description.clone(),
      excerpt: fm.seo_description.clone().unwrap_or_default(),
      date_iso: fm.date_iso.clone(),
      updated_at_iso: fm.updated_at_iso.clone(),
      keywords: fm.keywords.clone().unwrap_or_default(),
    }
  }
}

/// Detail-page projection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostView {
  pub slug: String,
  pub title: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub seo_title: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub seo_description: Option<String>,
  #[serde(rename = "dateISO")]
  pub date_iso: String,
  #[serde(rename = "updatedAtISO", skip_serializing_if = "Option::is_none")]
  pub updated_at_iso: Option<String>,
  pub keywords: Vec<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub translations: Option<TranslationMap>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub image: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub image_alt: Option<String>,
}

impl PostView {
  pub(crate) fn from_stored(slug: &str, post: &StoredPost) -> Self {
    let fm = &post.frontmatter;
    Self {
      slug: slug.to_string(),
      title: fm.title.clone(),
      seo_title: fm.seo_title.clone(),
      seo_description: fm.seo_description.clone(),
      date_iso: fm.date_iso.clone(),
      updated_at_iso: fm.updated_at_iso.clone(),
      keywords: fm.keywords.clone().unwrap_or_default(),
      translations: fm.translations.clone(),
      image: fm.image.clone(),
      image_alt: fm.image_alt.clone(),
    }
  }

  /// Title used for the document head.
  pub fn head_title(&self) -> &str {
    self.seo_title.as_deref().filter(|t| !t.is_empty()).unwrap_or(&self.title)
  }
}

/// A post ready to render: detail projection plus its body.
#[derive(Debug, Clone, PartialEq)]
pub struct PostPage {
  pub view: PostView,
  pub body: String,
}
