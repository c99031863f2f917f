/* src/cli/core/src/config/types.rs */

use anyhow::{Result, bail};
use lingopress_core::{SiteMeta, SwitcherStyleOverrides};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct LingopressConfig {
  pub site: SiteSection,
  #[serde(default)]
  pub content: ContentSection,
  #[serde(default)]
  pub server: ServerSection,
  #[serde(default)]
  pub theme: ThemeSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteSection {
  pub name: String,
  #[serde(default)]
  pub home_title: Option<String>,
  #[serde(default = "default_origin")]
  pub origin: String,
  #[serde(default)]
  pub twitter_card: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentSection {
  #[serde(default = "default_content_dir")]
  pub dir: String,
}

impl Default for ContentSection {
  fn default() -> Self {
    Self { dir: default_content_dir() }
  }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSection {
  #[serde(default = "default_port")]
  pub port: u16,
  #[serde(default = "default_dist_dir")]
  pub dist_dir: String,
}

impl Default for ServerSection {
  fn default() -> Self {
    Self { port: default_port(), dist_dir: default_dist_dir() }
  }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThemeSection {
  #[serde(default)]
  pub switcher: SwitcherStyleOverrides,
}

impl LingopressConfig {
  pub fn validate(&self) -> Result<()> {
    if self.site.name.trim().is_empty() {
      bail!("site.name must not be empty");
    }
    let origin = &self.site.origin;
    if !(origin.starts_with("http://") || origin.starts_with("https://")) {
      bail!("site.origin \"{origin}\" must start with http:// or https://");
    }
    if self.content.dir.trim().is_empty() {
      bail!("content.dir must not be empty");
    }
    Ok(())
  }

  pub fn site_meta(&self) -> SiteMeta {
    let mut site = SiteMeta::new(&self.site.name, &self.site.origin);
    if let Some(ref home) = self.site.home_title {
      site.home_title.clone_from(home);
    }
    site.twitter_card.clone_from(&self.site.twitter_card);
    site
  }
}

fn default_origin() -> String {
  "http://localhost:3000".to_string()
}

fn default_content_dir() -> String {
  "content/blog".to_string()
}

fn default_port() -> u16 {
  3000
}

fn default_dist_dir() -> String {
  "dist".to_string()
}
