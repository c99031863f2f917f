/* src/core/rust/src/tests/session.rs */

use std::time::Duration;

use super::fixture;
use crate::focus::FocusTarget;
use crate::locale::Locale;
use crate::pages::{ErrorKind, Page};
use crate::router::{MemoryRouter, Router};
use crate::seo::{HeadDocument, MemoryDocument, SiteMeta, owned_selectors};
use crate::shell::Shell;

const BUDGET: Duration = Duration::from_secs(2);

fn shell(initial: &str) -> Shell<MemoryRouter> {
  Shell::new(fixture(), SiteMeta::new("Notes", "https://notes.example"), MemoryRouter::new(initial))
}

fn owned_nodes(doc: &MemoryDocument) -> usize {
  owned_selectors().iter().map(|s| doc.count(s)).sum()
}

#[tokio::test]
async fn root_redirects_to_default_locale() {
  let mut s = shell("/");
  let page = s.visit("/").await;
  assert!(matches!(page, Page::Home { locale: Locale::En, .. }));
  assert_eq!(s.router().current(), "/en/");
  assert_eq!(s.document().lang(), Some("en"));
}

#[tokio::test]
async fn unknown_locale_segment_renders_default() {
  let mut s = shell("/");
  let page = s.visit("/xx/blog").await;
  assert_eq!(page.locale(), Locale::En);
  assert!(matches!(page, Page::BlogIndex { .. }));
  assert_eq!(s.router().current(), "/xx/blog");
}

#[tokio::test]
async fn blog_index_hides_drafts() {
  let mut s = shell("/");
  let Page::BlogIndex { posts, .. } = s.visit("/en/blog").await else {
    panic!("expected blog index");
  };
  let slugs: Vec<_> = posts.iter().map(|p| p.summary.slug.as_str()).collect();
  assert_eq!(slugs, ["hello", "untranslated", "post-a", "post-b"]);
}

#[tokio::test]
async fn switch_round_trips_through_authored_translations() {
  let mut s = shell("/");
  s.visit("/es/blog/hola").await;

  let there = s.switch_locale(Locale::En, BUDGET).await.unwrap();
  assert_eq!(there.path, "/en/blog/hello");
  assert_eq!(s.page().map(Page::heading), Some("Hello"));

  let back = s.switch_locale(Locale::Es, BUDGET).await.unwrap();
  assert_eq!(back.path, "/es/blog/hola");
  assert_eq!(s.page().map(Page::heading), Some("Hola"));
  assert_eq!(s.router().reloads(), 0);
  assert_eq!(s.router().history(), ["/", "/es/blog/hola", "/en/blog/hello", "/es/blog/hola"]);
}

#[tokio::test]
async fn untranslated_post_keeps_its_slug() {
  let mut s = shell("/");
  s.visit("/en/blog/untranslated").await;

  let intent = s.switch_locale(Locale::Es, BUDGET).await.unwrap();
  assert_eq!(intent.path, "/es/blog/untranslated");
  let view = s.page().and_then(Page::error).unwrap();
  assert_eq!(view.kind, ErrorKind::PostNotFound);
}

#[tokio::test]
async fn switching_to_current_locale_stays_put() {
  let mut s = shell("/");
  s.visit("/it/blog/ciao").await;
  let before = s.router().history().len();

  assert!(s.switch_locale(Locale::It, BUDGET).await.is_none());
  assert_eq!(s.router().history().len(), before);
}

#[tokio::test]
async fn non_post_pages_swap_only_the_locale() {
  let mut s = shell("/");
  s.visit("/en/blog").await;
  let intent = s.switch_locale(Locale::It, BUDGET).await.unwrap();
  assert_eq!(intent.path, "/it/blog");
  assert!(matches!(s.page(), Some(Page::BlogIndex { locale: Locale::It, .. })));
}

#[tokio::test]
async fn previous_post_metadata_is_torn_down() {
  let mut s = shell("/");
  s.visit("/en/blog/post-a").await;
  assert!(s.document().render_head().contains("post-a"));

  s.visit("/en/blog/post-b").await;
  let head = s.document().render_head();
  assert!(!head.contains("post-a"), "stale nodes left behind:\n{head}");
  assert!(head.contains(r#"<link href="https://notes.example/en/blog/post-b" rel="canonical">"#));
  assert_eq!(s.document().title(), Some("Post B | Notes"));
}

#[tokio::test]
async fn unmount_removes_owned_nodes() {
  let mut s = shell("/");
  s.visit("/es/blog/hola").await;
  assert!(owned_nodes(s.document()) > 0);

  s.unmount();
  assert_eq!(owned_nodes(s.document()), 0);
  assert_eq!(s.document().lang(), None);
  assert_eq!(s.document().title(), None);
  assert!(s.page().is_none());
}

#[tokio::test]
async fn focus_plans_follow_path_changes() {
  let mut s = shell("/");
  s.visit("/").await;
  let first = s.take_focus_plan().unwrap();
  assert_eq!(first.target, FocusTarget::FirstInteractive);

  s.visit("/en/blog").await;
  let second = s.take_focus_plan().unwrap();
  assert_eq!(second.target, FocusTarget::PageHeading);
  assert!(second.generation > first.generation);

  s.visit("/en/blog").await;
  assert!(s.take_focus_plan().is_none());
}

#[tokio::test]
async fn switcher_tracks_rendered_location() {
  let mut s = shell("/");
  s.visit("/es/blog/hola").await;
  assert_eq!(s.switcher().locale(), Locale::Es);
  let map = s.switcher().translations().unwrap();
  assert_eq!(map.get(Locale::En), Some("hello"));

  s.visit("/es/").await;
  assert!(s.switcher().translations().is_none());
}

#[tokio::test]
async fn cross_locale_render_leaves_no_previous_nodes() {
  let mut s = shell("/");
  s.visit("/en/blog/post-a").await;
  s.visit("/es/blog/post-b").await;

  let leftovers: Vec<_> = s.document().nodes().filter(|n| n.to_html().contains("post-a")).collect();
  assert!(leftovers.is_empty(), "{leftovers:?}");
  assert_eq!(s.document().lang(), Some("es"));
}

#[tokio::test]
async fn reload_starts_the_session_over() {
  let mut s = shell("/");
  s.visit("/en/blog/hello").await;
  s.take_focus_plan();
  s.switch_locale(Locale::Es, BUDGET).await.unwrap();
  assert_eq!(s.router().reloads(), 0);
  s.take_focus_plan();

  let page = s.reload("/es/blog/hola").await;
  assert_eq!(page.heading(), "Hola");
  assert_eq!(s.router().reloads(), 1);
  assert_eq!(s.take_focus_plan().map(|p| p.target), Some(FocusTarget::FirstInteractive));
  assert!(s.switcher().announcement().is_none());
  assert_eq!(s.switcher().translations().and_then(|m| m.get(Locale::En)), Some("hello"));
  assert!(s.document().render_head().contains("https://notes.example/es/blog/hola"));
}
