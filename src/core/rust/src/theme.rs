/* src/core/rust/src/theme.rs */

use serde::{Deserialize, Serialize};

/// Class lists for each override point of the language switcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitcherStyles {
  pub button: String,
  pub button_text_lg: String,
  pub button_text_sm: String,
  pub dropdown: String,
  pub header: String,
  pub option_base: String,
  pub option_selected: String,
  pub option_hover: String,
  pub option_focused: String,
  pub option_lang_tag: String,
  pub footer: String,
}

impl Default for SwitcherStyles {
  fn default() -> Self {
    Self {
      button: "flex items-center gap-2 px-3 py-2 rounded-lg bg-white border border-gray-300 shadow-md \
               hover:shadow-lg transition-all nav-focus min-w-11 min-h-11"
        .into(),
      button_text_lg: "hidden sm:inline font-medium".into(),
      button_text_sm: "sm:hidden font-medium text-xs code-style".into(),
      dropdown: "absolute w-min bg-white rounded-2xl shadow-soft-lg border-2 py-2 min-w-45 z-50 top-full mt-2"
        .into(),
      header: "px-3 py-2 text-xs font-medium border-b".into(),
      option_base: "w-full px-4 py-3 text-left transition-colors flex items-center gap-3 rounded-lg".into(),
      option_selected: "bg-violet-100 text-black".into(),
      option_hover: "text-black hover:bg-violet-50".into(),
      option_focused: "bg-violet-50 ring-2 ring-violet-400 nav-focus".into(),
      option_lang_tag: "text-xs text-violet-600 code-style".into(),
      footer: "px-3 py-2 text-xs text-black border-t border-violet-400 mt-1".into(),
    }
  }
}

/// Partial styles, as read from `[theme.switcher]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SwitcherStyleOverrides {
  pub button: Option<String>,
  pub button_text_lg: Option<String>,
  pub button_text_sm: Option<String>,
  pub dropdown: Option<String>,
  pub header: Option<String>,
  pub option_base: Option<String>,
  pub option_selected: Option<String>,
  pub option_hover: Option<String>,
  pub option_focused: Option<String>,
  pub option_lang_tag: Option<String>,
  pub footer: Option<String>,
}

impl SwitcherStyles {
  /// New styles with every set override replacing its default.
  pub fn merge(&self, overrides: &SwitcherStyleOverrides) -> SwitcherStyles {
    let pick = |over: &Option<String>, base: &String| over.clone().unwrap_or_else(|| base.clone());
    SwitcherStyles {
      button: pick(&overrides.button, &self.button),
      button_text_lg: pick(&overrides.button_text_lg, &self.button_text_lg),
      button_text_sm: pick(&overrides.button_text_sm, &self.button_text_sm),
      dropdown: pick(&overrides.dropdown, &self.dropdown),
      header: pick(&overrides.header, &self.header),
      option_base: pick(&overrides.option_base, &self.option_base),
      option_selected: pick(&overrides.option_selected, &self.option_selected),
      option_hover: pick(&overrides.option_hover, &self.option_hover),
      option_focused: pick(&overrides.option_focused, &self.option_focused),
      option_lang_tag: pick(&overrides.option_lang_tag, &self.option_lang_tag),
      footer: pick(&overrides.footer, &self.footer),
    }
  }

  /// Class list for one option given its selection and focus.
  pub fn option_class(&self, selected: bool, focused: bool) -> String {
    let state = if selected { &self.option_selected } else { &self.option_hover };
    let mut class = format!("{} {state}", self.option_base);
    if focused {
      class.push(' ');
      class.push_str(&self.option_focused);
    }
    class
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn merge_replaces_only_set_fields() {
    let base = SwitcherStyles::default();
    let overrides = SwitcherStyleOverrides { button: Some("btn".into()), ..Default::default() };
    let merged = base.merge(&overrides);
    assert_eq!(merged.button, "btn");
    assert_eq!(merged.dropdown, base.dropdown);
    assert_eq!(base, SwitcherStyles::default());
  }

  #[test]
  fn empty_overrides_are_identity() {
    let base = SwitcherStyles::default();
    assert_eq!(base.merge(&SwitcherStyleOverrides::default()), base);
  }

  #[test]
  fn overrides_deserialize_from_toml() {
    let overrides: SwitcherStyleOverrides =
      toml::from_str("option_selected = \"bg-emerald-100\"\nfooter = \"hidden\"\n").unwrap();
    assert_eq!(overrides.option_selected.as_deref(), Some("bg-emerald-100"));
    assert_eq!(overrides.footer.as_deref(), Some("hidden"));
    assert!(toml::from_str::<SwitcherStyleOverrides>("colour = \"red\"").is_err());
  }

  #[test]
  fn option_class_composes_state() {
    let styles = SwitcherStyles::default().merge(&SwitcherStyleOverrides {
      option_base: Some("opt".into()),
      option_selected: Some("sel".into()),
      option_hover: Some("hov".into()),
      option_focused: Some("foc".into()),
      ..Default::default()
    });
    assert_eq!(styles.option_class(true, false), "opt sel");
    assert_eq!(styles.option_class(false, true), "opt hov foc");
  }
}
