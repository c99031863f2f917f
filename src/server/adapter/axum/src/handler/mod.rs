/* src/server/adapter/axum/src/handler/mod.rs */

mod api;
mod shell;

#[cfg(test)]
mod tests;

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, get_service};
use lingopress_core::{BlogError, ContentIndex, Locale, SiteMeta};
use tower_http::services::ServeDir;

pub(crate) struct AppState {
  pub index: ContentIndex,
  pub site: SiteMeta,
  pub shell_html: String,
}

pub(crate) fn build_router(
  index: ContentIndex,
  site: SiteMeta,
  shell_html: String,
  assets_dir: Option<PathBuf>,
) -> Router {
  let state = Arc::new(AppState { index, site, shell_html });

  let mut router = Router::new()
    .route("/api/locales", get(api::handle_locales))
    .route("/api/{locale}/posts", get(api::handle_posts))
    .route("/api/{locale}/posts/{slug}", get(api::handle_post))
    .route("/api/{locale}/posts/{slug}/translations", get(api::handle_translations))
    .route("/", get(shell::handle_root));

  // Static assets are served as-is; every other GET path is an app route.
  if let Some(dir) = assets_dir {
    router = router.nest_service("/assets", get_service(ServeDir::new(dir)));
  }

  router.fallback(get(shell::handle_shell)).with_state(state)
}

/// Locale path parameters must name a registered locale.
pub(super) fn known_locale(code: &str) -> Result<Locale, BlogError> {
  Locale::parse(code).ok_or_else(|| BlogError::not_found(format!("Unknown locale \"{code}\"")))
}
