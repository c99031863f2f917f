/* src/core/rust/src/tests/mod.rs */

mod session;

use crate::content::{ContentIndex, MemoryStore, PostFrontmatter};
use crate::locale::Locale;
use crate::translation::TranslationMap;

fn post(title: &str, slug: &str, date: &str) -> PostFrontmatter {
  PostFrontmatter {
    title: title.into(),
    slug: slug.into(),
    date_iso: date.into(),
    seo_description: Some(format!("About {title}")),
    ..Default::default()
  }
}

fn translated(mut fm: PostFrontmatter, pairs: &[(Locale, &str)]) -> PostFrontmatter {
  let mut map = TranslationMap::new();
  for (locale, slug) in pairs {
    map.insert(*locale, *slug);
  }
  fm.translations = Some(map);
  fm
}

/// Small three-locale site used by the session tests.
fn fixture() -> ContentIndex {
  let hello = translated(
    post("Hello", "hello", "2025-01-03"),
    &[(Locale::Es, "hola"), (Locale::It, "ciao")],
  );
  let hola = translated(post("Hola", "hola", "2025-01-03"), &[(Locale::En, "hello")]);
  let ciao = translated(post("Ciao", "ciao", "2025-01-03"), &[(Locale::En, "hello")]);
  let draft = PostFrontmatter { draft: Some(true), ..post("Draft", "draft", "2025-02-01") };

  let store = MemoryStore::new()
    .insert(Locale::En, hello, "Hello body")
    .insert(Locale::En, post("Untranslated", "untranslated", "2025-01-02"), "")
    .insert(Locale::En, post("Post A", "post-a", "2024-12-01"), "")
    .insert(Locale::En, post("Post B", "post-b", "2024-11-01"), "")
    .insert(Locale::En, draft, "")
    .insert(Locale::Es, hola, "Cuerpo")
    .insert(Locale::It, ciao, "Corpo");
  ContentIndex::new(store)
}
