/* src/core/rust/src/seo/document.rs */

use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::escape::{escape_attr, escape_text};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
  Meta,
  Link,
  Script,
}

impl Tag {
  pub fn name(self) -> &'static str {
    match self {
      Tag::Meta => "meta",
      Tag::Link => "link",
      Tag::Script => "script",
    }
  }
}

/// A document-level node living in `<head>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadNode {
  pub tag: Tag,
  pub attrs: BTreeMap<String, String>,
  pub text: Option<String>,
}

impl HeadNode {
  pub fn new(tag: Tag) -> Self {
    Self { tag, attrs: BTreeMap::new(), text: None }
  }

  pub fn attr(mut self, key: &str, value: impl Into<String>) -> Self {
    self.attrs.insert(key.to_string(), value.into());
    self
  }

  pub fn text(mut self, text: impl Into<String>) -> Self {
    self.text = Some(text.into());
    self
  }

  pub fn get(&self, key: &str) -> Option<&str> {
    self.attrs.get(key).map(String::as_str)
  }

  pub fn to_html(&self) -> String {
    let mut html = format!("<{}", self.tag.name());
    for (k, v) in &self.attrs {
      let _ = write!(html, " {k}=\"{}\"", escape_attr(v));
    }
    html.push('>');
    match self.tag {
      Tag::Script => {
        // Script bodies are already escaped by the writer.
        html.push_str(self.text.as_deref().unwrap_or_default());
        html.push_str("</script>");
      }
      _ => {
        if let Some(ref text) = self.text {
          html.push_str(&escape_text(text));
        }
      }
    }
    html
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Match {
  Exact(String),
  Prefix(String),
}

/// Tag + attribute signature used to locate nodes, e.g. `link[rel="canonical"]`
/// or `meta[property^="og:"]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
  pub tag: Tag,
  pub attr: String,
  pub value: Match,
}

impl Selector {
  pub fn exact(tag: Tag, attr: &str, value: &str) -> Self {
    Self { tag, attr: attr.to_string(), value: Match::Exact(value.to_string()) }
  }

  pub fn prefix(tag: Tag, attr: &str, prefix: &str) -> Self {
    Self { tag, attr: attr.to_string(), value: Match::Prefix(prefix.to_string()) }
  }

  pub fn matches(&self, node: &HeadNode) -> bool {
    if node.tag != self.tag {
      return false;
    }
    match (node.get(&self.attr), &self.value) {
      (Some(v), Match::Exact(want)) => v == want,
      (Some(v), Match::Prefix(p)) => v.starts_with(p.as_str()),
      (None, _) => false,
    }
  }
}

impl std::fmt::Display for Selector {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match &self.value {
      Match::Exact(v) => write!(f, "{}[{}=\"{v}\"]", self.tag.name(), self.attr),
      Match::Prefix(p) => write!(f, "{}[{}^=\"{p}\"]", self.tag.name(), self.attr),
    }
  }
}

pub type NodeId = u64;

/// The page-level document the synchronizer writes into.
pub trait HeadDocument {
  fn lang(&self) -> Option<&str>;
  fn title(&self) -> Option<&str>;
  /// `None` removes the attribute.
  fn set_lang(&mut self, lang: Option<&str>);
  /// `None` removes the `<title>` element.
  fn set_title(&mut self, title: Option<&str>);
  fn query_all(&self, selector: &Selector) -> Vec<NodeId>;
  fn append(&mut self, node: HeadNode) -> NodeId;
  fn update(&mut self, id: NodeId, node: HeadNode);
  fn remove(&mut self, id: NodeId);
}

/// In-memory head model. Counts every mutation so callers can assert that a
/// reconciliation wrote nothing.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
  lang: Option<String>,
  title: Option<String>,
  nodes: Vec<(NodeId, HeadNode)>,
  next_id: NodeId,
  mutations: usize,
}

impl MemoryDocument {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn nodes(&self) -> impl Iterator<Item = &HeadNode> {
    self.nodes.iter().map(|(_, n)| n)
  }

  pub fn count(&self, selector: &Selector) -> usize {
    self.nodes().filter(|n| selector.matches(n)).count()
  }

  pub fn find(&self, selector: &Selector) -> Option<&HeadNode> {
    self.nodes().find(|n| selector.matches(n))
  }

  pub fn mutations(&self) -> usize {
    self.mutations
  }

  /// `<title>` followed by every node, in insertion order.
  pub fn render_head(&self) -> String {
    let mut html = String::new();
    if let Some(ref title) = self.title {
      let _ = write!(html, "<title>{}</title>", escape_text(title));
    }
    for node in self.nodes() {
      html.push_str(&node.to_html());
    }
    html
  }
}

impl HeadDocument for MemoryDocument {
  fn lang(&self) -> Option<&str> {
    self.lang.as_deref()
  }

  fn title(&self) -> Option<&str> {
    self.title.as_deref()
  }

  fn set_lang(&mut self, lang: Option<&str>) {
    if self.lang.as_deref() != lang {
      self.lang = lang.map(str::to_string);
      self.mutations += 1;
    }
  }

  fn set_title(&mut self, title: Option<&str>) {
    if self.title.as_deref() != title {
      self.title = title.map(str::to_string);
      self.mutations += 1;
    }
  }

  fn query_all(&self, selector: &Selector) -> Vec<NodeId> {
    self.nodes.iter().filter(|(_, n)| selector.matches(n)).map(|(id, _)| *id).collect()
  }

  fn append(&mut self, node: HeadNode) -> NodeId {
    self.next_id += 1;
    self.nodes.push((self.next_id, node));
    self.mutations += 1;
    self.next_id
  }

  fn update(&mut self, id: NodeId, node: HeadNode) {
    if let Some(slot) = self.nodes.iter_mut().find(|(nid, _)| *nid == id) {
      slot.1 = node;
      self.mutations += 1;
    }
  }

  fn remove(&mut self, id: NodeId) {
    let before = self.nodes.len();
    self.nodes.retain(|(nid, _)| *nid != id);
    if self.nodes.len() != before {
      self.mutations += 1;
    }
  }
}
