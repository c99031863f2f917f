/* src/core/rust/src/navigator/mod.rs */

mod menu;


use std::time::Duration;

pub use menu::{Alignment, Key, MenuEffect, MenuState, SwitcherMenu};

use crate::content::ContentIndex;
use crate::errors::BlogError;
use crate::locale::{Locale, locale_from_path, segments};
use crate::messages;
use crate::router::{Router, post_path};
use crate::translation::{TranslationMap, resolve_translations};

/// Where the reader currently is, as far as locale switching cares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathContext {
  Post { locale: Locale, slug: String },
  Other,
}

impl PathContext {
  /// `/{locale}/blog/{slug}` with a registered locale is a post; anything else
  /// is treated as a plain page.
  pub fn classify(path: &str) -> Self {
    let segs = segments(path);
    if segs.len() < 3 || segs[1] != "blog" {
      return PathContext::Other;
    }
    match Locale::parse(segs[0]) {
      Some(locale) => PathContext::Post { locale, slug: segs[2].to_string() },
      None => PathContext::Other,
    }
  }
}

/// Destination for switching `current_path` to `target`.
///
/// Posts go to the translated slug when `translations` knows one and keep the
/// slug otherwise. Other pages swap the first segment and keep the rest.
pub fn target_path(current_path: &str, target: Locale, translations: Option<&TranslationMap>) -> String {
  if let PathContext::Post { slug, .. } = PathContext::classify(current_path) {
    let resolved = translations.map_or(slug.as_str(), |map| map.slug_for(target, &slug));
    return post_path(target, resolved);
  }

  let mut segs = segments(current_path);
  match segs.first_mut() {
    Some(first) => *first = target.code(),
    None => segs.push(target.code()),
  }
  format!("/{}", segs.join("/"))
}

/// Correlates a translation lookup with the location that triggered it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTicket {
  pub locale: Locale,
  pub slug: String,
  pub generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupOutcome {
  Applied,
  Discarded,
}

/// A client-side navigation issued by the switcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationIntent {
  pub from: Locale,
  pub to: Locale,
  pub path: String,
}

#[derive(Debug, Clone)]
struct Loaded {
  ticket: LookupTicket,
  map: TranslationMap,
}

/// Language switcher: navigation decisions plus listbox state.
///
/// Every observed location bumps the generation. Lookup results carry the
/// generation they were requested under and are dropped unless it is still
/// current.
#[derive(Debug, Clone)]
pub struct LocaleSwitcher {
  locale: Locale,
  path: String,
  generation: u64,
  loaded: Option<Loaded>,
  menu: SwitcherMenu,
  effects: Vec<MenuEffect>,
  announcement: Option<String>,
}

impl LocaleSwitcher {
  pub fn new(path: &str) -> Self {
    Self {
      locale: locale_from_path(path),
      path: path.to_string(),
      generation: 0,
      loaded: None,
      menu: SwitcherMenu::new(),
      effects: Vec::new(),
      announcement: None,
    }
  }

  pub fn locale(&self) -> Locale {
    self.locale
  }

  pub fn path(&self) -> &str {
    &self.path
  }

  pub fn generation(&self) -> u64 {
    self.generation
  }

  pub fn announcement(&self) -> Option<&str> {
    self.announcement.as_deref()
  }

  pub fn menu(&self) -> &SwitcherMenu {
    &self.menu
  }

  /// Accessible name of the trigger button.
  pub fn trigger_label(&self) -> String {
    messages::switcher_label(self.locale, self.locale)
  }

  /// Translations loaded for the current location, if any.
  pub fn translations(&self) -> Option<&TranslationMap> {
    self
      .loaded
      .as_ref()
      .filter(|l| l.ticket.generation == self.generation)
      .map(|l| &l.map)
  }

  /// Record a location change. Returns the lookup to run when the new
  /// location is a post.
  pub fn observe_location(&mut self, path: &str) -> Option<LookupTicket> {
    self.generation += 1;
    self.path = path.to_string();
    self.locale = locale_from_path(path);
    self.loaded = None;
    self.pending_ticket()
  }

  /// Ticket for the current post when its translations are not loaded yet.
  pub fn pending_ticket(&self) -> Option<LookupTicket> {
    if self.translations().is_some() {
      return None;
    }
    match PathContext::classify(&self.path) {
      PathContext::Post { locale, slug } => {
        Some(LookupTicket { locale, slug, generation: self.generation })
      }
      PathContext::Other => None,
    }
  }

  /// Deliver a lookup result. Results for superseded locations are dropped
  /// without touching any state.
  pub fn complete_lookup(
    &mut self,
    ticket: LookupTicket,
    result: Result<TranslationMap, BlogError>,
  ) -> LookupOutcome {
    if ticket.generation != self.generation {
      tracing::debug!(
        slug = %ticket.slug,
        locale = %ticket.locale,
        generation = ticket.generation,
        current = self.generation,
        "discarding stale translation lookup"
      );
      return LookupOutcome::Discarded;
    }

    let map = match result {
      Ok(map) => map,
      Err(e) => {
        tracing::warn!(
          slug = %ticket.slug,
          locale = %ticket.locale,
          error = %e,
          "translation lookup failed, keeping slug"
        );
        TranslationMap::new()
      }
    };
    self.loaded = Some(Loaded { ticket, map });
    LookupOutcome::Applied
  }

  /// Switch to `target` using whatever translations are already loaded.
  /// The announcement is spoken in `target`, the language the page is switching to.
  pub fn switch_to(&mut self, target: Locale, router: &mut dyn Router) -> Option<NavigationIntent> {
    let closing = self.menu.close();
    self.effects.extend(closing);
    if target == self.locale {
      return None;
    }

    let path = target_path(&self.path, target, self.translations());
    let announcement = messages::changed_to(target, target);
    self.effects.push(MenuEffect::Announce(announcement.clone()));
    self.announcement = Some(announcement);

    tracing::debug!(from = %self.locale, to = %target, path = %path, "switching locale");
    router.navigate(&path);
    Some(NavigationIntent { from: self.locale, to: target, path })
  }

  /// Switch to `target`, first fetching the current post's translations if
  /// they are not loaded. The fetch is bounded by `budget`; on timeout or
  /// failure the slug is kept as is.
  pub async fn switch_with_lookup(
    &mut self,
    target: Locale,
    index: &ContentIndex,
    router: &mut dyn Router,
    budget: Duration,
  ) -> Option<NavigationIntent> {
    if target != self.locale {
      if let Some(ticket) = self.pending_ticket() {
        let lookup = resolve_translations(index, ticket.locale, &ticket.slug);
        let result = match tokio::time::timeout(budget, lookup).await {
          Ok(result) => result,
          Err(_) => Err(BlogError::fetch_failed(format!(
            "translation lookup exceeded {}ms",
            budget.as_millis()
          ))),
        };
        self.complete_lookup(ticket, result);
      }
    }
    self.switch_to(target, router)
  }

  pub fn activate_trigger(&mut self) -> Vec<MenuEffect> {
    let effects = self.menu.activate_trigger(self.locale, self.locale);
    self.with_pending(effects)
  }

  pub fn trigger_key(&mut self, key: Key) -> Vec<MenuEffect> {
    let effects = self.menu.trigger_key(key, self.locale, self.locale);
    self.with_pending(effects)
  }

  pub fn option_key(&mut self, index: usize, key: Key) -> Vec<MenuEffect> {
    let effects = self.menu.option_key(index, key);
    self.with_pending(effects)
  }

  pub fn pointer_enter(&mut self, index: usize) {
    self.menu.pointer_enter(index);
  }

  pub fn option_focus(&mut self, index: usize) {
    self.menu.option_focus(index);
  }

  pub fn outside_click(&mut self) -> Vec<MenuEffect> {
    let effects = self.menu.outside_click();
    self.with_pending(effects)
  }

  pub fn measure(&mut self, space_left: f64, space_right: f64) {
    self.menu.set_alignment(Alignment::for_space(space_left, space_right));
  }

  /// Drain effects queued by [`LocaleSwitcher::switch_to`].
  pub fn take_effects(&mut self) -> Vec<MenuEffect> {
    std::mem::take(&mut self.effects)
  }

  fn with_pending(&mut self, effects: Vec<MenuEffect>) -> Vec<MenuEffect> {
    let mut all = self.take_effects();
    all.extend(effects);
    all
  }
}
