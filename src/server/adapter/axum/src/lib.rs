/* src/server/adapter/axum/src/lib.rs */

mod error;
mod handler;

use std::path::{Path, PathBuf};

use lingopress_core::{ContentIndex, SiteMeta};

/// Re-export the core for convenience
pub use lingopress_core;

/// Shell used when no built client is available.
pub const DEFAULT_SHELL: &str = concat!(
  "<!doctype html><html><head><meta charset=\"utf-8\">",
  "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">",
  "</head><body><div id=\"root\"></div></body></html>"
);

/// HTTP front for one content index: JSON API plus the SPA shell.
pub struct BlogServer {
  index: ContentIndex,
  site: SiteMeta,
  shell_html: String,
  assets_dir: Option<PathBuf>,
}

impl BlogServer {
  pub fn new(index: ContentIndex, site: SiteMeta) -> Self {
    Self { index, site, shell_html: DEFAULT_SHELL.to_string(), assets_dir: None }
  }

  pub fn shell_html(mut self, html: impl Into<String>) -> Self {
    self.shell_html = html.into();
    self
  }

  /// Use `dist_dir/index.html` as the shell and serve `dist_dir/assets`.
  /// A missing `index.html` keeps the current shell.
  pub fn dist_dir(mut self, dist_dir: &Path) -> Self {
    match std::fs::read_to_string(dist_dir.join("index.html")) {
      Ok(html) => self.shell_html = html,
      Err(e) => {
        tracing::warn!(dir = %dist_dir.display(), error = %e, "no index.html, using built-in shell");
      }
    }
    self.assets_dir = Some(dist_dir.join("assets"));
    self
  }

  pub fn into_router(self) -> axum::Router {
    handler::build_router(self.index, self.site, self.shell_html, self.assets_dir)
  }

  pub async fn serve(self, addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    let router = self.into_router();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(addr = %local_addr, "lingopress server listening");
    axum::serve(listener, router).await?;
    Ok(())
  }
}
