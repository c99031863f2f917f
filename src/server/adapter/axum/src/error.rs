/* src/server/adapter/axum/src/error.rs */

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use lingopress_core::BlogError;

/// Newtype so `BlogError` can be returned straight from handlers.
pub(crate) struct AxumError(pub BlogError);

impl IntoResponse for AxumError {
  fn into_response(self) -> Response {
    let err = self.0;
    let status = StatusCode::from_u16(err.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = serde_json::json!({
      "ok": false,
      "error": {
        "code": err.code(),
        "message": err.message(),
      }
    });
    (status, axum::Json(body)).into_response()
  }
}

impl From<BlogError> for AxumError {
  fn from(err: BlogError) -> Self {
    Self(err)
  }
}
