/* src/cli/core/src/check.rs */

// Content audit: translation targets that would send a reader to a missing post.

use anyhow::Result;
use lingopress_core::{BlogError, ContentIndex, Locale};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
  pub locale: Locale,
  pub slug: String,
  pub target: Locale,
  pub target_slug: String,
  /// Authored translation (`true`) or the same-slug fallback (`false`).
  pub explicit: bool,
}

#[derive(Debug, Default)]
pub struct CheckReport {
  pub posts: usize,
  pub findings: Vec<Finding>,
}

impl CheckReport {
  /// Authored translations pointing nowhere. These fail the check.
  pub fn dangling(&self) -> impl Iterator<Item = &Finding> {
    self.findings.iter().filter(|f| f.explicit)
  }

  /// Untranslated posts whose slug is missing elsewhere; switching there
  /// lands on a not-found view.
  pub fn fallback_gaps(&self) -> impl Iterator<Item = &Finding> {
    self.findings.iter().filter(|f| !f.explicit)
  }
}

pub async fn check_content(index: &ContentIndex) -> Result<CheckReport> {
  let mut report = CheckReport::default();
  for locale in Locale::ALL {
    for post in index.list_posts(locale).await? {
      report.posts += 1;
      let view = index.get_post(locale, &post.slug).await?;
      let authored = view.translations.filter(|m| !m.is_empty());

      for target in Locale::ALL.into_iter().filter(|l| *l != locale) {
        let mapped = authored.as_ref().and_then(|m| m.get(target));
        let target_slug = mapped.unwrap_or(post.slug.as_str()).to_string();
        if !exists(index, target, &target_slug).await? {
          report.findings.push(Finding {
            locale,
            slug: post.slug.clone(),
            target,
            target_slug,
            explicit: mapped.is_some(),
          });
        }
      }
    }
  }
  Ok(report)
}

async fn exists(index: &ContentIndex, locale: Locale, slug: &str) -> Result<bool, BlogError> {
  match index.get_post(locale, slug).await {
    Ok(_) => Ok(true),
    Err(e) if e.is_not_found() => Ok(false),
    Err(e) => Err(e),
  }
}
