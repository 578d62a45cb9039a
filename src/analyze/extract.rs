use crate::analyze::page_model::{
    ButtonDescriptor, ButtonPurpose, ButtonStyle, CardDescriptor, CardType, ContentAreaDescriptor,
    FieldDescriptor, FieldValidation, FormComplexity, FormDescriptor, LinkDescriptor, LinkPurpose,
    ListDescriptor, ModalDescriptor, ModalPurpose, NavLink, NavStructure, NavType,
    NavigationDescriptor, TableDescriptor,
};
use crate::analyze::taxonomy::GENERAL;
use crate::dom::dom_model::{DomNode, NodeKind};

// ============================================================================
// Element extractors
//
// Each extractor walks the document tree in document order and pulls raw
// attributes verbatim. Missing attributes default to empty string / false.
// Purposes and complexity are left at their defaults here; the analyzer
// assigns them. Extractors are total: degenerate markup yields empty
// vectors, never an error.
// ============================================================================

// ----------------------------------------------------------------------------
// Node finders
// ----------------------------------------------------------------------------

pub fn form_nodes(doc: &DomNode) -> Vec<&DomNode> {
    doc.find_all("form")
}

/// Navigation groups: `nav` elements and `role="navigation"` containers.
/// Groups nested inside another group are not reported separately.
pub fn nav_nodes(doc: &DomNode) -> Vec<&DomNode> {
    let mut out = Vec::new();
    collect_outermost(doc, &is_nav_node, false, &mut out);
    out
}

pub fn button_nodes(doc: &DomNode) -> Vec<&DomNode> {
    doc.find_where(|n| {
        n.tag == "button"
            || (n.tag == "input" && matches!(n.attr("type"), "submit" | "button" | "reset"))
            || n.attr("role") == "button"
    })
}

pub fn link_nodes(doc: &DomNode) -> Vec<&DomNode> {
    doc.find_all("a")
}

/// Modal containers: `role="dialog"` or a modal-ish class token. Nested
/// modal chrome (headers, bodies) is folded into its outermost container.
pub fn modal_nodes(doc: &DomNode) -> Vec<&DomNode> {
    let mut out = Vec::new();
    collect_outermost(doc, &is_modal_node, false, &mut out);
    out
}

pub fn table_nodes(doc: &DomNode) -> Vec<&DomNode> {
    doc.find_all("table")
}

/// Outermost `ul`/`ol` elements; lists nested inside another list are
/// reported through their root's `nested` flag instead.
pub fn list_nodes(doc: &DomNode) -> Vec<&DomNode> {
    let mut out = Vec::new();
    collect_outermost(doc, &is_list_node, false, &mut out);
    out
}

/// Outermost elements carrying a card-ish class token.
pub fn card_nodes(doc: &DomNode) -> Vec<&DomNode> {
    let mut out = Vec::new();
    collect_outermost(doc, &is_card_node, false, &mut out);
    out
}

pub fn content_area_nodes(doc: &DomNode) -> Vec<&DomNode> {
    doc.find_where(|n| {
        matches!(
            n.tag.as_str(),
            "main" | "header" | "footer" | "article" | "section" | "aside"
        )
    })
}

fn is_nav_node(n: &DomNode) -> bool {
    n.tag == "nav" || n.attr("role") == "navigation"
}

fn is_modal_node(n: &DomNode) -> bool {
    n.attr("role") == "dialog"
        || n.class_matches(|t| t == "modal" || t == "dialog" || t == "popup")
}

fn is_list_node(n: &DomNode) -> bool {
    n.tag == "ul" || n.tag == "ol"
}

fn is_card_node(n: &DomNode) -> bool {
    n.class_matches(|t| t == "card" || t == "tile" || t.ends_with("-card"))
}

/// Document-order collection of nodes matching `pred`, skipping matches
/// nested inside an already-matched ancestor.
fn collect_outermost<'a>(
    node: &'a DomNode,
    pred: &dyn Fn(&DomNode) -> bool,
    inside: bool,
    out: &mut Vec<&'a DomNode>,
) {
    for child in &node.children {
        let matched = !inside && pred(child);
        if matched {
            out.push(child);
        }
        collect_outermost(child, pred, inside || matched, out);
    }
}

// ----------------------------------------------------------------------------
// Forms and fields
// ----------------------------------------------------------------------------

/// Build a raw form descriptor from a `form` node.
pub fn form(node: &DomNode) -> FormDescriptor {
    FormDescriptor {
        id: node.attr("id").to_string(),
        name: node.attr("name").to_string(),
        action: node.attr("action").to_string(),
        method: {
            let m = node.attr("method").to_uppercase();
            if m.is_empty() { "GET".to_string() } else { m }
        },
        fields: fields(node),
        purpose: GENERAL.to_string(),
        complexity: FormComplexity::Simple,
    }
}

/// Data-entry fields inside a form: `input`/`textarea`/`select`, minus
/// control types (submit, button, reset, image) and non-visible ones
/// (hidden).
pub fn fields(form_node: &DomNode) -> Vec<FieldDescriptor> {
    form_node
        .find_where(|n| matches!(n.tag.as_str(), "input" | "textarea" | "select"))
        .into_iter()
        .filter(|n| {
            n.tag != "input"
                || !matches!(
                    n.attr("type"),
                    "submit" | "button" | "reset" | "image" | "hidden"
                )
        })
        .map(field)
        .collect()
}

/// Build a raw field descriptor from an `input`/`textarea`/`select` node.
pub fn field(node: &DomNode) -> FieldDescriptor {
    let field_type = match node.tag.as_str() {
        "textarea" => "textarea".to_string(),
        "select" => "select".to_string(),
        _ => {
            let t = node.attr("type");
            if t.is_empty() { "text".to_string() } else { t.to_string() }
        }
    };

    FieldDescriptor {
        field_type,
        name: node.attr("name").to_string(),
        id: node.attr("id").to_string(),
        placeholder: node.attr("placeholder").to_string(),
        required: node.has_attr("required"),
        validation: FieldValidation {
            pattern: node.attr("pattern").to_string(),
            min_length: node.attr("minlength").to_string(),
            max_length: node.attr("maxlength").to_string(),
            min: node.attr("min").to_string(),
            max: node.attr("max").to_string(),
        },
        purpose: GENERAL.to_string(),
    }
}

// ----------------------------------------------------------------------------
// Navigation
// ----------------------------------------------------------------------------

/// Build a raw navigation descriptor from a group node. The nav type is
/// assigned by the analyzer.
pub fn navigation(node: &DomNode) -> NavigationDescriptor {
    let links: Vec<NavLink> = node
        .find_all("a")
        .into_iter()
        .map(|a| NavLink {
            text: a.text_content(),
            href: a.attr("href").to_string(),
        })
        .collect();

    let depth = list_depth(node);
    NavigationDescriptor {
        id: node.attr("id").to_string(),
        nav_type: NavType::General,
        structure: NavStructure {
            depth,
            breadth: links.len(),
            hierarchical: depth >= 2,
        },
        links,
    }
}

/// Maximum nesting depth of list elements under `node`.
fn list_depth(node: &DomNode) -> usize {
    node.children
        .iter()
        .map(|child| {
            let below = list_depth(child);
            if is_list_node(child) { below + 1 } else { below }
        })
        .max()
        .unwrap_or(0)
}

// ----------------------------------------------------------------------------
// Buttons and links
// ----------------------------------------------------------------------------

pub fn button(node: &DomNode) -> ButtonDescriptor {
    // input-style buttons carry their caption in `value`
    let text = if node.tag == "input" {
        node.attr("value").to_string()
    } else {
        node.text_content()
    };

    ButtonDescriptor {
        id: node.attr("id").to_string(),
        name: node.attr("name").to_string(),
        text,
        html_type: {
            let t = node.attr("type");
            if t.is_empty() { "button".to_string() } else { t.to_string() }
        },
        purpose: ButtonPurpose::General,
        style: ButtonStyle::Plain,
    }
}

pub fn link(node: &DomNode) -> LinkDescriptor {
    LinkDescriptor {
        text: node.text_content(),
        href: node.attr("href").to_string(),
        purpose: LinkPurpose::General,
        external: false,
    }
}

// ----------------------------------------------------------------------------
// Modals
// ----------------------------------------------------------------------------

pub fn modal(node: &DomNode) -> ModalDescriptor {
    let has_close = node.contains_element(|n| {
        n.class_matches(|t| t == "close" || t == "btn-close")
            || (n.tag == "button" && n.attr("aria-label").to_lowercase() == "close")
    });

    ModalDescriptor {
        id: node.attr("id").to_string(),
        purpose: ModalPurpose::General,
        has_close,
    }
}

// ----------------------------------------------------------------------------
// Tables, lists, cards, content areas
// ----------------------------------------------------------------------------

pub fn table(node: &DomNode) -> TableDescriptor {
    let rows = node.find_all("tr");
    let column_count = rows
        .first()
        .map(|row| {
            row.children
                .iter()
                .filter(|c| c.is_element("td") || c.is_element("th"))
                .count()
        })
        .unwrap_or(0);

    TableDescriptor {
        row_count: rows.len(),
        column_count,
        has_headers: node.contains_element(|n| n.tag == "th" || n.tag == "thead"),
        interactive: is_interactive(node),
    }
}

pub fn list(node: &DomNode) -> ListDescriptor {
    ListDescriptor {
        ordered: node.tag == "ol",
        item_count: node.children.iter().filter(|c| c.is_element("li")).count(),
        nested: node.contains_element(is_list_node),
        interactive: is_interactive(node),
    }
}

pub fn card(node: &DomNode) -> CardDescriptor {
    let mut element_count = 0;
    node.walk(&mut |n| {
        if n.kind == NodeKind::Element {
            element_count += 1;
        }
    });

    CardDescriptor {
        id: node.attr("id").to_string(),
        card_type: CardType::GeneralCard,
        element_count,
        interactive: is_interactive(node),
        has_image: node.contains_element(|n| n.tag == "img"),
    }
}

pub fn content_area(node: &DomNode) -> ContentAreaDescriptor {
    let heading = node
        .find_where(|n| matches!(n.tag.as_str(), "h1" | "h2" | "h3" | "h4" | "h5" | "h6"))
        .first()
        .map(|h| h.text_content())
        .unwrap_or_default();

    ContentAreaDescriptor {
        area: node.tag.clone(),
        heading,
        word_count: node.text_content().split_whitespace().count(),
    }
}

/// Contains a button, link, or input control somewhere inside.
fn is_interactive(node: &DomNode) -> bool {
    node.contains_element(|n| matches!(n.tag.as_str(), "button" | "a" | "input" | "select"))
}
