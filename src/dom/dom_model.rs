use std::collections::BTreeMap;

// ============================================================================
// Markup tree model
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Document,
    Element,
    Text,
}

/// One node of the parsed markup tree.
///
/// Attributes are kept in a `BTreeMap` so serialization and any iteration
/// over them is deterministic across runs.
#[derive(Debug, Clone)]
pub struct DomNode {
    pub kind: NodeKind,
    pub tag: String,
    pub attrs: BTreeMap<String, String>,
    pub text: String,
    pub children: Vec<DomNode>,
}

impl DomNode {
    pub fn new_document() -> Self {
        Self {
            kind: NodeKind::Document,
            tag: String::new(),
            attrs: BTreeMap::new(),
            text: String::new(),
            children: Vec::new(),
        }
    }

    pub fn new_element(tag: &str) -> Self {
        Self {
            kind: NodeKind::Element,
            tag: tag.to_string(),
            attrs: BTreeMap::new(),
            text: String::new(),
            children: Vec::new(),
        }
    }

    pub fn new_text(text: &str) -> Self {
        Self {
            kind: NodeKind::Text,
            tag: String::new(),
            attrs: BTreeMap::new(),
            text: text.to_string(),
            children: Vec::new(),
        }
    }

    /// Attribute value, or `""` when the attribute is absent.
    pub fn attr(&self, name: &str) -> &str {
        self.attrs.get(name).map(|v| v.as_str()).unwrap_or("")
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    /// Whether any whitespace-separated `class` token satisfies `pred`.
    pub fn class_matches(&self, pred: impl Fn(&str) -> bool) -> bool {
        self.attr("class").split_whitespace().any(|t| pred(t))
    }

    pub fn is_element(&self, tag: &str) -> bool {
        self.kind == NodeKind::Element && self.tag == tag
    }

    /// Visible text of this node and all descendants, whitespace-collapsed.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out.trim().to_string()
    }

    fn collect_text(&self, out: &mut String) {
        match self.kind {
            NodeKind::Text => {
                let trimmed = self.text.trim();
                if !trimmed.is_empty() {
                    if !out.is_empty() && !out.ends_with(' ') {
                        out.push(' ');
                    }
                    out.push_str(trimmed);
                }
            }
            _ => {
                for child in &self.children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Visit every descendant in document order (pre-order).
    pub fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a DomNode)) {
        for child in &self.children {
            visit(child);
            child.walk(visit);
        }
    }

    /// All descendant elements with the given tag, in document order.
    pub fn find_all<'a>(&'a self, tag: &str) -> Vec<&'a DomNode> {
        self.find_where(|n| n.is_element(tag))
    }

    /// All descendant elements satisfying `pred`, in document order.
    pub fn find_where<'a>(&'a self, pred: impl Fn(&DomNode) -> bool) -> Vec<&'a DomNode> {
        let mut out = Vec::new();
        self.walk(&mut |n| {
            if n.kind == NodeKind::Element && pred(n) {
                out.push(n);
            }
        });
        out
    }

    /// Whether any descendant element satisfies `pred`.
    pub fn contains_element(&self, pred: impl Fn(&DomNode) -> bool) -> bool {
        let mut found = false;
        self.walk(&mut |n| {
            if !found && n.kind == NodeKind::Element && pred(n) {
                found = true;
            }
        });
        found
    }

    /// Re-serialize this subtree as markup.
    ///
    /// Lossy (original whitespace and entity forms are gone) but stable:
    /// attributes come out in `BTreeMap` order, so repeated runs over the
    /// same tree produce identical strings. Used as classifier input, not
    /// for round-tripping documents.
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        self.serialize_into(&mut out);
        out
    }

    fn serialize_into(&self, out: &mut String) {
        match self.kind {
            NodeKind::Text => out.push_str(&self.text),
            NodeKind::Element => {
                out.push('<');
                out.push_str(&self.tag);
                for (name, value) in &self.attrs {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    out.push_str(value);
                    out.push('"');
                }
                out.push('>');
                for child in &self.children {
                    child.serialize_into(out);
                }
                out.push_str("</");
                out.push_str(&self.tag);
                out.push('>');
            }
            NodeKind::Document => {
                for child in &self.children {
                    child.serialize_into(out);
                }
            }
        }
    }
}
