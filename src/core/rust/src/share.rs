/* src/core/rust/src/share.rs */

use std::time::Duration;

use crate::locale::Locale;
use crate::messages::t;

/// How long the copied/not-copied state stays visible.
pub const FEEDBACK_WINDOW: Duration = Duration::from_secs(2);

pub trait Clipboard {
  fn write_text(&mut self, text: &str) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShareState {
  #[default]
  Idle,
  Copied,
  NotCopied,
}

/// Copy-link action on a post page.
#[derive(Debug, Clone, Default)]
pub struct ShareButton {
  state: ShareState,
}

impl ShareButton {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn state(&self) -> ShareState {
    self.state
  }

  /// Copy `url`. A clipboard failure is shown to the user, never raised.
  pub fn share(&mut self, url: &str, clipboard: &mut dyn Clipboard) -> ShareState {
    self.state = match clipboard.write_text(url) {
      Ok(()) => ShareState::Copied,
      Err(reason) => {
        tracing::warn!(%url, %reason, "link not copied");
        ShareState::NotCopied
      }
    };
    self.state
  }

  /// Back to idle once the feedback window has passed.
  pub fn reset(&mut self) {
    self.state = ShareState::Idle;
  }

  /// Visible label for the current state.
  pub fn label(&self, locale: Locale) -> &'static str {
    match self.state {
      ShareState::Idle => t(locale, "blog.share"),
      ShareState::Copied => t(locale, "blog.share.copied"),
      ShareState::NotCopied => t(locale, "blog.share.not.copied"),
    }
  }

  /// Accessible name for the current state.
  pub fn aria_label(&self, locale: Locale) -> &'static str {
    match self.state {
      ShareState::Idle => t(locale, "blog.shareLabel"),
      _ => self.label(locale),
    }
  }
}
