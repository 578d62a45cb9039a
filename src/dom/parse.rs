use html5ever::ParseOpts;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use crate::dom::dom_model::{DomNode, NodeKind};

// ============================================================================
// HTML parsing — html5ever into DomNode
// ============================================================================

/// Parse an HTML string into a `DomNode` tree.
///
/// Script, style, and svg elements keep their tag and attributes but their
/// contents are dropped: analysis is a markup-tree traversal, not script
/// execution. Parsing never fails — html5ever recovers from any input, so
/// even garbage bytes yield a (possibly empty) document node.
pub fn parse_html(html: &str) -> DomNode {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            drop_doctype: true,
            ..Default::default()
        },
        ..Default::default()
    };

    let dom = parse_document(RcDom::default(), opts)
        .from_utf8()
        .read_from(&mut html.as_bytes());

    match dom {
        Ok(dom) => convert_node(&dom.document),
        // read_from on a byte slice cannot actually fail, but degrade to an
        // empty document rather than propagate
        Err(_) => DomNode::new_document(),
    }
}

/// Hex SHA-1 of the raw HTML, identifying the analyzed snapshot.
pub fn page_fingerprint(html: &str) -> String {
    use sha1::{Digest, Sha1};

    let mut hasher = Sha1::new();
    hasher.update(html.as_bytes());
    format!("{:x}", hasher.finalize())
}

fn convert_node(handle: &Handle) -> DomNode {
    match &handle.data {
        NodeData::Document => {
            let mut doc = DomNode::new_document();
            for child in handle.children.borrow().iter() {
                push_child(&mut doc, convert_node(child));
            }
            doc
        }
        NodeData::Element { name, attrs, .. } => {
            let tag = name.local.to_string();
            let mut node = DomNode::new_element(&tag);
            for attr in attrs.borrow().iter() {
                node.attrs
                    .insert(attr.name.local.to_string(), attr.value.to_string());
            }

            // Keep the element but drop its contents
            if matches!(tag.as_str(), "script" | "style" | "svg") {
                return node;
            }

            for child in handle.children.borrow().iter() {
                push_child(&mut node, convert_node(child));
            }
            node
        }
        NodeData::Text { contents } => {
            let text = contents.borrow().to_string();
            DomNode::new_text(&text)
        }
        // Comments, processing instructions, doctypes
        _ => DomNode::new_document(),
    }
}

fn push_child(parent: &mut DomNode, child: DomNode) {
    // Skip whitespace-only text nodes and the placeholder nodes produced
    // for comments
    match child.kind {
        NodeKind::Text if child.text.trim().is_empty() => {}
        NodeKind::Document => {}
        _ => parent.children.push(child),
    }
}
