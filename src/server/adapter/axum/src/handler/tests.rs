/* src/server/adapter/axum/src/handler/tests.rs */

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use lingopress_core::{MemoryStore, PostFrontmatter, TranslationMap};
use tower::ServiceExt;

use super::*;

const SHELL: &str = "<!doctype html><html><head><meta charset=\"utf-8\"><title>Vite</title></head>\
                     <body><div id=\"root\"></div></body></html>";

/// Shape of a stock `vite build` index.html.
const VITE_SHELL: &str = "<!DOCTYPE html>\n<html lang=\"en\">\n  <head>\n    <meta charset=\"UTF-8\" />\n    \
                          <link rel=\"icon\" type=\"image/svg+xml\" href=\"/vite.svg\" />\n    \
                          <title>Vite + React + TS</title>\n  </head>\n  <body>\n    \
                          <div id=\"root\"></div>\n  </body>\n</html>\n";

fn post(title: &str, slug: &str, translations: Option<TranslationMap>) -> PostFrontmatter {
  PostFrontmatter {
    title: title.into(),
    slug: slug.into(),
    seo_description: Some(format!("{title} description")),
    date_iso: "2025-04-01".into(),
    translations,
    ..Default::default()
  }
}

fn router() -> Router {
  router_with(SHELL)
}

fn router_with(shell: &str) -> Router {
  let mut to_es = TranslationMap::new();
  to_es.insert(Locale::Es, "hola");
  let mut draft = post("Draft", "draft", None);
  draft.draft = Some(true);
  let store = MemoryStore::new()
    .insert(Locale::En, post("Hello", "hello", Some(to_es)), "# Hello")
    .insert(Locale::En, post("Plain", "plain", None), "")
    .insert(Locale::En, draft, "")
    .insert(Locale::Es, post("Hola", "hola", None), "");
  build_router(
    ContentIndex::new(store),
    SiteMeta::new("Notes", "https://notes.example"),
    shell.to_string(),
    None,
  )
}

async fn get_path(path: &str) -> (StatusCode, header::HeaderMap, String) {
  get_from(router(), path).await
}

async fn get_from(router: Router, path: &str) -> (StatusCode, header::HeaderMap, String) {
  let req = Request::builder().uri(path).body(Body::empty()).unwrap();
  let resp = router.oneshot(req).await.unwrap();
  let status = resp.status();
  let headers = resp.headers().clone();
  let bytes = resp.into_body().collect().await.unwrap().to_bytes();
  (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn get_json(path: &str) -> (StatusCode, serde_json::Value) {
  let (status, _, body) = get_path(path).await;
  (status, serde_json::from_str(&body).unwrap())
}

#[tokio::test]
async fn lists_locales() {
  let (status, body) = get_json("/api/locales").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body[1]["code"], "es");
  assert_eq!(body[1]["name"], "Español");
}

#[tokio::test]
async fn lists_posts_without_drafts() {
  let (status, body) = get_json("/api/en/posts").await;
  assert_eq!(status, StatusCode::OK);
  let slugs: Vec<&str> = body.as_array().unwrap().iter().map(|p| p["slug"].as_str().unwrap()).collect();
  assert_eq!(slugs, ["hello", "plain"]);
  assert_eq!(body[0]["dateISO"], "2025-04-01");
}

#[tokio::test]
async fn unknown_locale_is_a_json_404() {
  let (status, body) = get_json("/api/fr/posts").await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert_eq!(body["ok"], false);
  assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn draft_post_is_not_found() {
  let (status, body) = get_json("/api/en/posts/draft").await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn post_detail_and_translations() {
  let (status, body) = get_json("/api/en/posts/hello").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["title"], "Hello");
  assert_eq!(body["translations"]["es"], "hola");

  let (_, map) = get_json("/api/en/posts/hello/translations").await;
  assert_eq!(map, serde_json::json!({ "es": "hola" }));
  let (_, map) = get_json("/api/en/posts/plain/translations").await;
  assert_eq!(map, serde_json::json!({ "en": "plain" }));
  let (_, map) = get_json("/api/en/posts/missing/translations").await;
  assert_eq!(map, serde_json::json!({}));
}

#[tokio::test]
async fn root_redirects_to_default_locale() {
  let (status, headers, _) = get_path("/").await;
  assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
  assert_eq!(headers[header::LOCATION], "/en/");
}

#[tokio::test]
async fn shell_carries_head_for_the_route() {
  let (status, _, html) = get_path("/es/blog/hola").await;
  assert_eq!(status, StatusCode::OK);
  assert!(html.starts_with("<!doctype html><html lang=\"es\">"));
  assert!(html.contains("<title>Hola | Notes</title>"));
  assert!(!html.contains("<title>Vite</title>"));
  assert!(html.contains(r#"<link href="https://notes.example/es/blog/hola" rel="canonical">"#));
  assert!(html.contains(r#"hreflang="x-default""#));
}

#[tokio::test]
async fn invalid_locale_renders_in_default() {
  let (status, _, html) = get_path("/xx/blog").await;
  assert_eq!(status, StatusCode::OK);
  assert!(html.contains("<html lang=\"en\">"));
}

#[tokio::test]
async fn missing_post_shell_is_404() {
  let (status, _, html) = get_path("/en/blog/nope").await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert!(html.contains("<title>Post not found | Notes</title>"));
}

#[tokio::test]
async fn vite_built_shell_gets_lang_and_head() {
  let (status, _, html) = get_from(router_with(VITE_SHELL), "/es/blog/hola").await;
  assert_eq!(status, StatusCode::OK);
  assert!(html.contains("<html lang=\"es\">"), "{html}");
  assert!(!html.contains("lang=\"en\">"));
  assert!(html.contains("<meta charset=\"UTF-8\" /><title>Hola | Notes</title>"));
  assert!(!html.contains("Vite + React + TS"));
  assert!(html.contains(r#"<link href="https://notes.example/es/blog/hola" rel="canonical">"#));
  assert!(html.contains(r#"property="og:locale""#));
  assert!(html.contains("application/ld+json"));
  assert_eq!(html.matches("<title>").count(), 1);
}

#[tokio::test]
async fn headless_shell_keeps_its_markup() {
  let shell = "<div id=\"root\"><title>kept</title></div>";
  let (status, _, html) = get_from(router_with(shell), "/en/").await;
  assert_eq!(status, StatusCode::OK);
  assert!(html.contains("<title>kept</title>"));
}
