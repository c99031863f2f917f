/* src/core/rust/src/content/fs.rs */

use std::path::{Path, PathBuf};

use thiserror::Error;

use super::{BoxFuture, ContentStore, MemoryStore, PostFrontmatter, StoredPost};
use crate::errors::BlogError;
use crate::locale::Locale;

#[derive(Debug, Error)]
pub enum ContentError {
  #[error("failed to read {}: {source}", path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
  #[error("{}: missing frontmatter block", path.display())]
  MissingFrontmatter { path: PathBuf },
  #[error("{}: invalid frontmatter: {source}", path.display())]
  Frontmatter {
    path: PathBuf,
    #[source]
    source: serde_yaml::Error,
  },
}

impl From<ContentError> for BlogError {
  fn from(err: ContentError) -> Self {
    BlogError::fetch_failed(err.to_string())
  }
}

/// Store backed by a content directory laid out as `{root}/{locale}/{slug}.mdx`.
/// Everything is read eagerly by [`FsStore::load`].
#[derive(Debug, Clone)]
pub struct FsStore {
  root: PathBuf,
  posts: MemoryStore,
}

impl FsStore {
  pub fn load(root: impl AsRef<Path>) -> Result<Self, ContentError> {
    let root = root.as_ref().to_path_buf();
    let mut posts = MemoryStore::new();

    for entry in read_dir_sorted(&root)? {
      if !entry.is_dir() {
        continue;
      }
      let dir_name = entry.file_name().and_then(|n| n.to_str()).unwrap_or_default();
      let Some(locale) = Locale::parse(dir_name) else {
        tracing::warn!(dir = %entry.display(), "skipping content directory for unknown locale");
        continue;
      };

      for file in read_dir_sorted(&entry)? {
        if file.extension().and_then(|e| e.to_str()) != Some("mdx") {
          continue;
        }
        let Some(slug) = file.file_stem().and_then(|s| s.to_str()) else {
          continue;
        };
        let source = std::fs::read_to_string(&file)
          .map_err(|source| ContentError::Io { path: file.clone(), source })?;
        let (frontmatter, body) = parse_post(&file, &source)?;
        let path = format!("{locale}/{slug}.mdx");
        posts.put(locale, StoredPost { path, slug: slug.to_string(), frontmatter, body });
      }
    }

    tracing::info!(root = %root.display(), posts = posts.len(), "content loaded");
    Ok(Self { root, posts })
  }

  pub fn root(&self) -> &Path {
    &self.root
  }

  pub fn posts(&self) -> &MemoryStore {
    &self.posts
  }
}

fn read_dir_sorted(dir: &Path) -> Result<Vec<PathBuf>, ContentError> {
  let io_err = |source| ContentError::Io { path: dir.to_path_buf(), source };
  let mut paths = Vec::new();
  for entry in std::fs::read_dir(dir).map_err(io_err)? {
    paths.push(entry.map_err(io_err)?.path());
  }
  paths.sort();
  Ok(paths)
}

/// Split an `.mdx` source into its YAML frontmatter and body.
pub fn parse_post(path: &Path, source: &str) -> Result<(PostFrontmatter, String), ContentError> {
  let missing = || ContentError::MissingFrontmatter { path: path.to_path_buf() };

  let source = source.strip_prefix('\u{feff}').unwrap_or(source);
  let rest = source
    .strip_prefix("---\r\n")
    .or_else(|| source.strip_prefix("---\n"))
    .ok_or_else(missing)?;

  let mut yaml_len = None;
  let mut offset = 0;
  for line in rest.split_inclusive('\n') {
    if line.trim_end() == "---" {
      yaml_len = Some((offset, offset + line.len()));
      break;
    }
    offset += line.len();
  }
  let (yaml_end, body_start) = yaml_len.ok_or_else(missing)?;

  let frontmatter: PostFrontmatter = serde_yaml::from_str(&rest[..yaml_end])
    .map_err(|source| ContentError::Frontmatter { path: path.to_path_buf(), source })?;
  let body = rest[body_start..].trim_start_matches(['\r', '\n']).to_string();
  Ok((frontmatter, body))
}

impl ContentStore for FsStore {
  fn list_by_locale(&self, locale: Locale) -> BoxFuture<'_, Result<Vec<StoredPost>, BlogError>> {
    self.posts.list_by_locale(locale)
  }

  fn get_by_locale_and_slug<'a>(
    &'a self,
    locale: Locale,
    slug: &'a str,
  ) -> BoxFuture<'a, Result<Option<StoredPost>, BlogError>> {
    self.posts.get_by_locale_and_slug(locale, slug)
  }
}
