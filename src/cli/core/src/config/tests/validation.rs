/* src/cli/core/src/config/tests/validation.rs */

use std::io::Write;

use super::*;

#[test]
fn empty_site_name_is_invalid() {
  let config: LingopressConfig = toml::from_str("[site]\nname = \"  \"\n").unwrap();
  let err = config.validate().unwrap_err();
  assert!(err.to_string().contains("site.name"));
}

#[test]
fn origin_needs_a_scheme() {
  let config: LingopressConfig =
    toml::from_str("[site]\nname = \"Notes\"\norigin = \"notes.example\"\n").unwrap();
  let err = config.validate().unwrap_err();
  assert!(err.to_string().contains("site.origin"));
}

#[test]
fn find_config_walks_upward() {
  let tmp = tempfile::tempdir().unwrap();
  let nested = tmp.path().join("content/blog/en");
  std::fs::create_dir_all(&nested).unwrap();
  let mut f = std::fs::File::create(tmp.path().join(CONFIG_FILE)).unwrap();
  writeln!(f, "[site]\nname = \"Notes\"").unwrap();

  let found = find_config(&nested).unwrap();
  assert_eq!(found, tmp.path().canonicalize().unwrap().join(CONFIG_FILE));
  let config = load_config(&found).unwrap();
  assert_eq!(config.site.name, "Notes");
  assert_eq!(resolve_path(&found, "content/blog"), found.parent().unwrap().join("content/blog"));
}

#[test]
fn missing_config_is_reported() {
  let tmp = tempfile::tempdir().unwrap();
  let err = find_config(tmp.path()).unwrap_err();
  assert!(err.to_string().contains(CONFIG_FILE));
}

#[test]
fn invalid_config_fails_to_load() {
  let tmp = tempfile::tempdir().unwrap();
  let path = tmp.path().join(CONFIG_FILE);
  std::fs::write(&path, "[site]\nname = \"\"\n").unwrap();
  let err = load_config(&path).unwrap_err();
  assert!(format!("{err:#}").contains("site.name must not be empty"));
}
