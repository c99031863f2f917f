/* src/server/adapter/axum/src/handler/shell.rs */

use std::sync::Arc;

use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Redirect, Response};
use lingopress_core::pages::ErrorKind;
use lingopress_core::root::default_root;
use lingopress_core::{Entry, MemoryDocument, Page, SeoSync, load_page, resolve_entry};

use super::AppState;

pub(super) async fn handle_root() -> Redirect {
  Redirect::temporary(&default_root())
}

/// Serve the SPA shell for an app route, with `lang` and the route's head
/// metadata filled in.
pub(super) async fn handle_shell(State(state): State<Arc<AppState>>, uri: Uri) -> Response {
  let path = uri.path();
  let (locale, route) = match resolve_entry(path) {
    Entry::Redirect(to) => return Redirect::temporary(&to).into_response(),
    Entry::Render { locale, route } => (locale, route),
  };

  let page = load_page(&state.index, locale, &route).await;
  let mut doc = MemoryDocument::new();
  SeoSync::new(state.site.clone()).apply(&mut doc, &page.seo_input(path));

  let html = inject_html_lang(&state.shell_html, locale.code());
  let html = match inject_head_meta(&strip_title(&html), &doc.render_head()) {
    Some(injected) => injected,
    None => {
      tracing::warn!(path = %path, "shell has no <head>, serving it without page metadata");
      html
    }
  };
  (status_for(&page), Html(html)).into_response()
}

fn status_for(page: &Page) -> StatusCode {
  match page.error().map(|view| view.kind) {
    Some(ErrorKind::PageNotFound | ErrorKind::PostNotFound) => StatusCode::NOT_FOUND,
    Some(ErrorKind::BlogError) => StatusCode::BAD_GATEWAY,
    Some(ErrorKind::NoPosts) | None => StatusCode::OK,
  }
}

/// Set the `lang` attribute of the `<html>` tag, replacing any existing one.
pub(crate) fn inject_html_lang(html: &str, locale: &str) -> String {
  let lower = html.to_ascii_lowercase();
  let Some((start, end)) = find_tag(&lower, "html", 0) else {
    return html.to_string();
  };
  let open = &html[start..end];
  let attrs = strip_attr(&open["<html".len()..open.len() - 1], "lang");
  let attrs = attrs.trim_end();
  format!("{}<html lang=\"{locale}\"{attrs}>{}", &html[..start], &html[end..])
}

/// Inject page-level head metadata right after the charset `<meta>`, or
/// before `</head>` when the shell declares no charset. `None` when the shell
/// has no head at all.
pub(crate) fn inject_head_meta(html: &str, meta_html: &str) -> Option<String> {
  let lower = html.to_ascii_lowercase();
  let insert_at = charset_end(&lower).or_else(|| lower.find("</head"))?;
  let mut result = String::with_capacity(html.len() + meta_html.len());
  result.push_str(&html[..insert_at]);
  result.push_str(meta_html);
  result.push_str(&html[insert_at..]);
  Some(result)
}

/// Byte range of the first `<name ...>` tag at or after `from`. `lower` must be
/// ASCII-lowercased.
fn find_tag(lower: &str, name: &str, from: usize) -> Option<(usize, usize)> {
  let open = format!("<{name}");
  let mut pos = from;
  while let Some(rel) = lower[pos..].find(&open) {
    let start = pos + rel;
    let after = start + open.len();
    let boundary = lower[after..].chars().next();
    if matches!(boundary, Some(c) if c.is_ascii_whitespace() || c == '>' || c == '/') {
      let end = after + lower[after..].find('>')? + 1;
      return Some((start, end));
    }
    pos = after;
  }
  None
}

/// End offset of the first `<meta>` carrying a `charset` attribute.
fn charset_end(lower: &str) -> Option<usize> {
  let mut pos = 0;
  while let Some((start, end)) = find_tag(lower, "meta", pos) {
    if attr_span(&lower[start..end], "charset").is_some() {
      return Some(end);
    }
    pos = end;
  }
  None
}

/// Byte range of the `name=value` attribute in a tag's ASCII-lowercased text,
/// value quoted with `"`, `'` or unquoted.
fn attr_span(lower: &str, name: &str) -> Option<(usize, usize)> {
  let bytes = lower.as_bytes();
  let mut search = 0;
  while let Some(rel) = lower[search..].find(name) {
    let start = search + rel;
    search = start + name.len();
    let preceded = start > 0 && bytes[start - 1].is_ascii_whitespace();
    let mut i = search;
    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
      i += 1;
    }
    if !preceded || bytes.get(i) != Some(&b'=') {
      continue;
    }
    i += 1;
    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
      i += 1;
    }
    let end = match bytes.get(i) {
      Some(&q) if q == b'"' || q == b'\'' => {
        lower[i + 1..].find(q as char).map_or(bytes.len(), |off| i + 1 + off + 1)
      }
      _ => lower[i..]
        .find(|c: char| c.is_ascii_whitespace() || c == '/' || c == '>')
        .map_or(bytes.len(), |off| i + off),
    };
    return Some((start, end));
  }
  None
}

/// Remove the `name` attribute from a tag's attribute text.
fn strip_attr(attrs: &str, name: &str) -> String {
  match attr_span(&attrs.to_ascii_lowercase(), name) {
    Some((start, end)) => format!("{}{}", attrs[..start].trim_end(), &attrs[end..]),
    None => attrs.to_string(),
  }
}

/// Drop the template's static `<title>` so the injected one is the only one.
fn strip_title(html: &str) -> String {
  let lower = html.to_ascii_lowercase();
  let Some((start, _)) = find_tag(&lower, "title", 0) else {
    return html.to_string();
  };
  let Some(close) = lower[start..].find("</title>") else {
    return html.to_string();
  };
  let end = start + close + "</title>".len();
  format!("{}{}", &html[..start], &html[end..])
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn inject_html_lang_sets_attribute() {
    let html = "<!doctype html><html><head></head></html>";
    assert_eq!(inject_html_lang(html, "es"), r#"<!doctype html><html lang="es"><head></head></html>"#);
  }

  #[test]
  fn inject_html_lang_replaces_existing_lang() {
    assert_eq!(inject_html_lang(r#"<html lang="en">"#, "it"), r#"<html lang="it">"#);
    assert_eq!(
      inject_html_lang(r#"<HTML class="dark" LANG='en' dir="ltr"><head>"#, "es"),
      r#"<html lang="es" class="dark" dir="ltr"><head>"#
    );
    assert_eq!(inject_html_lang("<html lang=en>", "it"), r#"<html lang="it">"#);
  }

  #[test]
  fn inject_html_lang_ignores_lookalike_attributes() {
    assert_eq!(
      inject_html_lang(r#"<html xml:lang="en" data-lang="x">"#, "es"),
      r#"<html lang="es" xml:lang="en" data-lang="x">"#
    );
  }

  #[test]
  fn inject_head_meta_after_charset() {
    let html = r#"<html><head><meta charset="utf-8"><link rel="icon"></head></html>"#;
    let result = inject_head_meta(html, "<title>x</title>").unwrap();
    assert!(result.contains(r#"<meta charset="utf-8"><title>x</title><link rel="icon">"#));
  }

  #[test]
  fn inject_head_meta_accepts_uppercase_self_closing_charset() {
    let html = r#"<html><head><meta name="x" content="charsetless"><Meta Charset="UTF-8" /><link></head>"#;
    let result = inject_head_meta(html, "<title>x</title>").unwrap();
    assert!(result.contains(r#"<Meta Charset="UTF-8" /><title>x</title><link>"#));
  }

  #[test]
  fn inject_head_meta_falls_back_to_head_end() {
    let html = "<html><head><link rel=\"icon\"></HEAD><body></body></html>";
    assert_eq!(
      inject_head_meta(html, "<title>x</title>").unwrap(),
      "<html><head><link rel=\"icon\"><title>x</title></HEAD><body></body></html>"
    );
  }

  #[test]
  fn inject_head_meta_without_head_is_none() {
    assert_eq!(inject_head_meta("<div id=\"root\"></div>", "<title>x</title>"), None);
  }

  #[test]
  fn strip_title_removes_static_title() {
    let html = "<head><title>Vite App</title><meta></head>";
    assert_eq!(strip_title(html), "<head><meta></head>");
    assert_eq!(strip_title("<head><TITLE>App</TITLE></head>"), "<head></head>");
    assert_eq!(strip_title("<head></head>"), "<head></head>");
  }
}
