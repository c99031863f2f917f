/* src/server/adapter/axum/src/handler/api.rs */

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use lingopress_core::{Locale, PostSummary, PostView, TranslationMap, resolve_translations};
use serde::Serialize;

use super::{AppState, known_locale};
use crate::error::AxumError;

#[derive(Serialize)]
pub(super) struct LocaleInfo {
  code: &'static str,
  name: &'static str,
}

pub(super) async fn handle_locales() -> Json<Vec<LocaleInfo>> {
  Json(
    Locale::ALL
      .into_iter()
      .map(|l| LocaleInfo { code: l.code(), name: l.display_name() })
      .collect(),
  )
}

pub(super) async fn handle_posts(
  State(state): State<Arc<AppState>>,
  Path(locale): Path<String>,
) -> Result<Json<Vec<PostSummary>>, AxumError> {
  let locale = known_locale(&locale)?;
  let posts = state.index.list_posts(locale).await?;
  Ok(Json(posts))
}

pub(super) async fn handle_post(
  State(state): State<Arc<AppState>>,
  Path((locale, slug)): Path<(String, String)>,
) -> Result<Json<PostView>, AxumError> {
  let locale = known_locale(&locale)?;
  let post = state.index.get_post(locale, &slug).await?;
  Ok(Json(post))
}

pub(super) async fn handle_translations(
  State(state): State<Arc<AppState>>,
  Path((locale, slug)): Path<(String, String)>,
) -> Result<Json<TranslationMap>, AxumError> {
  let locale = known_locale(&locale)?;
  let map = resolve_translations(&state.index, locale, &slug).await?;
  Ok(Json(map))
}
