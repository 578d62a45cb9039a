use crate::analyze::page_model::{
    ButtonDescriptor, CardDescriptor, FormDescriptor, LinkDescriptor, NavigationDescriptor,
};

// ============================================================================
// Identity deriver — canonical, stable element identifiers
// ============================================================================

/// The closed set of element kinds that participate in deduplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Form,
    Navigation,
    Button,
    Link,
    Card,
}

impl ElementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Form => "form",
            ElementKind::Navigation => "navigation",
            ElementKind::Button => "button",
            ElementKind::Link => "link",
            ElementKind::Card => "card",
        }
    }
}

/// A borrowed view of any dedup-relevant descriptor, tagged by kind so
/// the synthesizer can match exhaustively.
#[derive(Debug, Clone, Copy)]
pub enum ElementRef<'a> {
    Form(&'a FormDescriptor),
    Navigation(&'a NavigationDescriptor),
    Button(&'a ButtonDescriptor),
    Link(&'a LinkDescriptor),
    Card(&'a CardDescriptor),
}

impl ElementRef<'_> {
    pub fn kind(&self) -> ElementKind {
        match self {
            ElementRef::Form(_) => ElementKind::Form,
            ElementRef::Navigation(_) => ElementKind::Navigation,
            ElementRef::Button(_) => ElementKind::Button,
            ElementRef::Link(_) => ElementKind::Link,
            ElementRef::Card(_) => ElementKind::Card,
        }
    }
}

/// Derive the canonical identifier for an element instance.
///
/// Each kind has a fixed priority chain of attributes; the first
/// non-empty one wins, `"unnamed"` otherwise. The result is prefixed
/// with the kind name so identical values cannot collide across kinds
/// (`"button:Submit"` vs `"link:Submit"`). Used for deduplication only,
/// never for classification.
pub fn identify(element: &ElementRef) -> String {
    let body = match element {
        ElementRef::Form(f) => first_non_empty(&[&f.id, &f.name, &f.action]),
        ElementRef::Navigation(n) => first_non_empty(&[&n.id, n.nav_type.as_str()]),
        ElementRef::Button(b) => first_non_empty(&[&b.id, &b.name, &b.text]),
        ElementRef::Link(l) => first_non_empty(&[&l.href, &l.text]),
        ElementRef::Card(c) => first_non_empty(&[&c.id, c.card_type.as_str()]),
    };
    format!("{}:{}", element.kind().as_str(), body)
}

fn first_non_empty<'a>(candidates: &[&'a str]) -> &'a str {
    candidates
        .iter()
        .find(|c| !c.is_empty())
        .copied()
        .unwrap_or("unnamed")
}
