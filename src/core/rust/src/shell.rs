/* src/core/rust/src/shell.rs */

use std::time::Duration;

use crate::content::ContentIndex;
use crate::focus::{FocusCoordinator, FocusPlan};
use crate::locale::Locale;
use crate::navigator::{LocaleSwitcher, NavigationIntent};
use crate::pages::{Page, load_page};
use crate::root::{Entry, resolve_entry};
use crate::router::Router;
use crate::seo::{MemoryDocument, SeoSync, SiteMeta};
use crate::translation::resolve_translations;

/// One browser session: the router plus every observer of the current
/// `(path, locale)`. The observers never talk to each other.
pub struct Shell<R: Router> {
  index: ContentIndex,
  router: R,
  switcher: LocaleSwitcher,
  seo: SeoSync,
  document: MemoryDocument,
  focus: FocusCoordinator,
  focus_plan: Option<FocusPlan>,
  page: Option<Page>,
}

impl<R: Router> Shell<R> {
  pub fn new(index: ContentIndex, site: SiteMeta, router: R) -> Self {
    let switcher = LocaleSwitcher::new(router.current());
    Self {
      index,
      router,
      switcher,
      seo: SeoSync::new(site),
      document: MemoryDocument::new(),
      focus: FocusCoordinator::new(),
      focus_plan: None,
      page: None,
    }
  }

  pub fn router(&self) -> &R {
    &self.router
  }

  pub fn switcher(&self) -> &LocaleSwitcher {
    &self.switcher
  }

  pub fn switcher_mut(&mut self) -> &mut LocaleSwitcher {
    &mut self.switcher
  }

  pub fn document(&self) -> &MemoryDocument {
    &self.document
  }

  pub fn focus(&self) -> &FocusCoordinator {
    &self.focus
  }

  pub fn page(&self) -> Option<&Page> {
    self.page.as_ref()
  }

  /// Plan produced by the latest navigation, if it has not been taken yet.
  pub fn take_focus_plan(&mut self) -> Option<FocusPlan> {
    self.focus_plan.take()
  }

  /// Navigate to `path` and render it.
  pub async fn visit(&mut self, path: &str) -> &Page {
    if self.router.current() != path {
      self.router.navigate(path);
    }
    self.render().await
  }

  /// Full document load of `path`. Head, switcher and focus state start over,
  /// so focus goes to the first interactive element again.
  pub async fn reload(&mut self, path: &str) -> &Page {
    self.router.reload(path);
    self.switcher = LocaleSwitcher::new(path);
    self.seo = SeoSync::new(self.seo.site().clone());
    self.document = MemoryDocument::new();
    self.focus = FocusCoordinator::new();
    self.focus_plan = None;
    self.render().await
  }

  /// Switch language from the current location and render the result.
  pub async fn switch_locale(&mut self, target: Locale, budget: Duration) -> Option<NavigationIntent> {
    let intent = self
      .switcher
      .switch_with_lookup(target, &self.index, &mut self.router, budget)
      .await?;
    self.render().await;
    Some(intent)
  }

  /// Remove everything this session wrote to the document head.
  pub fn unmount(&mut self) {
    self.seo.unmount(&mut self.document);
    self.page = None;
  }

  async fn render(&mut self) -> &Page {
    let mut path = self.router.current().to_string();
    let (locale, route) = loop {
      match resolve_entry(&path) {
        Entry::Redirect(to) => {
          tracing::debug!(from = %path, to = %to, "redirecting to default locale");
          self.router.navigate(&to);
          path = to;
        }
        Entry::Render { locale, route } => break (locale, route),
      }
    };

    let page = load_page(&self.index, locale, &route).await;

    if let Some(ticket) = self.switcher.observe_location(&path) {
      let result = resolve_translations(&self.index, ticket.locale, &ticket.slug).await;
      self.switcher.complete_lookup(ticket, result);
    }
    self.seo.apply(&mut self.document, &page.seo_input(&path));
    if let Some(plan) = self.focus.on_path_change(&path) {
      self.focus_plan = Some(plan);
    }

    self.page.insert(page)
  }
}
