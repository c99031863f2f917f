/* src/core/rust/src/navigator/menu.rs */

use crate::locale::Locale;
use crate::messages;

/// Remaining width below which the menu opens towards the left edge.
const MIN_RIGHT_SPACE: f64 = 200.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
  #[default]
  Closed,
  Open {
    focused: Option<usize>,
  },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
  Enter,
  Space,
  ArrowDown,
  ArrowUp,
  Home,
  End,
  Escape,
  Tab { shift: bool },
  Other,
}

/// Side effects the host must perform after a menu transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEffect {
  FocusTrigger,
  FocusOption(usize),
  Select(Locale),
  AttachOutsideListener,
  DetachOutsideListener,
  Announce(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
  #[default]
  Left,
  Right,
}

impl Alignment {
  /// Pick the edge the dropdown anchors to, given the free space on each side
  /// of the trigger.
  pub fn for_space(left: f64, right: f64) -> Self {
    if right < MIN_RIGHT_SPACE && left > right { Alignment::Right } else { Alignment::Left }
  }
}

/// Listbox state for the language menu. Options are [`Locale::ALL`] in order.
#[derive(Debug, Clone, Default)]
pub struct SwitcherMenu {
  state: MenuState,
  alignment: Alignment,
}

impl SwitcherMenu {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn state(&self) -> MenuState {
    self.state
  }

  pub fn is_open(&self) -> bool {
    matches!(self.state, MenuState::Open { .. })
  }

  pub fn focused(&self) -> Option<usize> {
    match self.state {
      MenuState::Open { focused } => focused,
      MenuState::Closed => None,
    }
  }

  /// The outside-click listener lives exactly as long as the open menu.
  pub fn listener_attached(&self) -> bool {
    self.is_open()
  }

  pub fn alignment(&self) -> Alignment {
    self.alignment
  }

  pub fn set_alignment(&mut self, alignment: Alignment) {
    self.alignment = alignment;
  }

  /// Roving tabindex: the focused or selected option is tabbable.
  pub fn tab_index(&self, index: usize, current: Locale) -> i32 {
    if self.focused() == Some(index) || current.index() == index { 0 } else { -1 }
  }

  /// Click on the trigger toggles the menu.
  pub fn activate_trigger(&mut self, current: Locale, ui: Locale) -> Vec<MenuEffect> {
    if self.is_open() { self.close() } else { self.open(current, ui) }
  }

  pub fn trigger_key(&mut self, key: Key, current: Locale, ui: Locale) -> Vec<MenuEffect> {
    match (self.is_open(), key) {
      (false, Key::Enter | Key::Space | Key::ArrowDown) => self.open(current, ui),
      (true, Key::Escape) => self.close(),
      _ => Vec::new(),
    }
  }

  pub fn option_key(&mut self, index: usize, key: Key) -> Vec<MenuEffect> {
    if !self.is_open() {
      return Vec::new();
    }
    let last = Locale::ALL.len() - 1;
    match key {
      Key::Escape => self.close(),
      Key::ArrowDown => self.focus(if index < last { index + 1 } else { 0 }),
      Key::ArrowUp => self.focus(if index > 0 { index - 1 } else { last }),
      Key::Home => self.focus(0),
      Key::End => self.focus(last),
      Key::Enter | Key::Space => match Locale::ALL.get(index) {
        Some(locale) => vec![MenuEffect::Select(*locale)],
        None => Vec::new(),
      },
      Key::Tab { shift: true } if index == 0 => self.close(),
      Key::Tab { shift: false } if index == last => {
        // Focus moves on to the next page element by itself.
        self.state = MenuState::Closed;
        vec![MenuEffect::DetachOutsideListener]
      }
      _ => Vec::new(),
    }
  }

  pub fn pointer_enter(&mut self, index: usize) {
    self.set_focused(index);
  }

  pub fn option_focus(&mut self, index: usize) {
    self.set_focused(index);
  }

  pub fn outside_click(&mut self) -> Vec<MenuEffect> {
    self.close()
  }

  /// Close the menu and hand focus back to the trigger. No-op when closed.
  pub fn close(&mut self) -> Vec<MenuEffect> {
    if !self.is_open() {
      return Vec::new();
    }
    self.state = MenuState::Closed;
    vec![MenuEffect::DetachOutsideListener, MenuEffect::FocusTrigger]
  }

  fn open(&mut self, current: Locale, ui: Locale) -> Vec<MenuEffect> {
    let index = current.index();
    self.state = MenuState::Open { focused: Some(index) };
    vec![
      MenuEffect::AttachOutsideListener,
      MenuEffect::FocusOption(index),
      MenuEffect::Announce(messages::menu_opened(ui, Locale::ALL.len())),
    ]
  }

  fn focus(&mut self, index: usize) -> Vec<MenuEffect> {
    self.set_focused(index);
    vec![MenuEffect::FocusOption(index)]
  }

  fn set_focused(&mut self, index: usize) {
    if self.is_open() && index < Locale::ALL.len() {
      self.state = MenuState::Open { focused: Some(index) };
    }
  }
}
