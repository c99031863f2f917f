/* src/core/rust/src/lib.rs */

pub mod content;
pub mod errors;
pub mod escape;
pub mod focus;
pub mod locale;
pub mod messages;
pub mod navigator;
pub mod pages;
pub mod root;
pub mod router;
pub mod seo;
pub mod share;
pub mod shell;
pub mod theme;
pub mod translation;

#[cfg(test)]
mod tests;

// Re-exports for ergonomic use
pub use content::{
  BoxFuture, ContentError, ContentIndex, ContentStore, FsStore, MemoryStore, PostFrontmatter,
  PostPage, PostSummary, PostView, StoredPost,
};
pub use errors::BlogError;
pub use focus::{FocusCoordinator, FocusHost, FocusOutcome, FocusPlan, FocusTarget};
pub use locale::{Locale, locale_from_path, strip_locale};
pub use navigator::{
  Alignment, LocaleSwitcher, LookupOutcome, LookupTicket, MenuEffect, NavigationIntent,
  PathContext, SwitcherMenu, target_path,
};
pub use pages::{ErrorKind, ErrorView, Page, load_page};
pub use root::{Entry, resolve_entry};
pub use router::{MemoryRouter, Route, RoutePattern, Router};
pub use seo::{HeadDocument, MemoryDocument, SeoInput, SeoSync, SiteMeta};
pub use share::{Clipboard, ShareButton, ShareState};
pub use shell::Shell;
pub use theme::{SwitcherStyleOverrides, SwitcherStyles};
pub use translation::{TranslationMap, resolve_translations};
