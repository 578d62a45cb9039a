use url::Url;

use crate::analyze::classifier::classify;
use crate::analyze::extract;
use crate::analyze::page_model::{
    AnalysisResult, ButtonPurpose, ButtonStyle, CardType, DataStructures, FieldDescriptor,
    FormComplexity, InteractiveInventory, LinkPurpose, ModalPurpose, NavType,
};
use crate::analyze::taxonomy::{field_purposes, form_purposes, website_types};
use crate::dom::dom_model::DomNode;

// ============================================================================
// Structural analyzer — one read-and-classify pass per page
// ============================================================================

/// Analyze a parsed document tree into a classified structural profile.
///
/// `page_identifier` (URL or file path) feeds the website-type classifier
/// and substitutes for a form's missing `action`. Pure: nothing in the
/// tree is mutated, and the result depends only on the tree, the
/// identifier, and the static taxonomy.
pub fn analyze(doc: &DomNode, page_identifier: &str) -> AnalysisResult {
    let page_blob = format!("{} {}", doc.text_content(), page_identifier);
    let website_type = classify(&page_blob, website_types()).to_string();

    // Forms: purpose from text + serialized markup, field purposes from
    // concatenated attribute values, complexity from the field roster
    let forms = extract::form_nodes(doc)
        .into_iter()
        .map(|node| {
            let mut form = extract::form(node);
            let blob = format!("{} {}", node.text_content(), node.serialize());
            form.purpose = classify(&blob, form_purposes()).to_string();
            for field in &mut form.fields {
                field.purpose = classify(&field_blob(field), field_purposes()).to_string();
            }
            form.complexity = form_complexity(&form.fields);
            if form.action.is_empty() {
                form.action = page_identifier.to_string();
            }
            form
        })
        .collect();

    let navigation = extract::nav_nodes(doc)
        .into_iter()
        .map(|node| {
            let mut nav = extract::navigation(node);
            nav.nav_type = navigation_type(&node.serialize());
            nav
        })
        .collect();

    let content_areas = extract::content_area_nodes(doc)
        .into_iter()
        .map(extract::content_area)
        .collect();

    let buttons = extract::button_nodes(doc)
        .into_iter()
        .map(|node| {
            let mut button = extract::button(node);
            button.purpose = button_purpose(&button.text, &button.html_type);
            button.style = button_style(node.attr("class"));
            button
        })
        .collect();

    let links = extract::link_nodes(doc)
        .into_iter()
        .map(|node| {
            let mut link = extract::link(node);
            link.purpose = link_purpose(&link.text, &link.href);
            link.external = is_external(&link.href, page_identifier);
            link
        })
        .collect();

    // Standalone inputs (outside any form) round out the inventory
    let inputs = orphan_fields(doc);

    let modals = extract::modal_nodes(doc)
        .into_iter()
        .map(|node| {
            let mut modal = extract::modal(node);
            modal.purpose = modal_purpose(node);
            modal
        })
        .collect();

    let tables = extract::table_nodes(doc)
        .into_iter()
        .map(extract::table)
        .collect();

    let lists = extract::list_nodes(doc)
        .into_iter()
        .map(extract::list)
        .collect();

    let cards = extract::card_nodes(doc)
        .into_iter()
        .map(|node| {
            let mut card = extract::card(node);
            card.card_type = card_type(node);
            card
        })
        .collect();

    AnalysisResult {
        website_type,
        forms,
        navigation,
        content_areas,
        interactive: InteractiveInventory {
            buttons,
            links,
            inputs,
            modals,
        },
        data_structures: DataStructures {
            tables,
            lists,
            cards,
        },
    }
}

// ----------------------------------------------------------------------------
// Derived form properties
// ----------------------------------------------------------------------------

/// Concatenated attribute values fed to the field-purpose classifier.
fn field_blob(field: &FieldDescriptor) -> String {
    format!(
        "{} {} {} {}",
        field.field_type, field.name, field.id, field.placeholder
    )
}

/// `fields + 2×required + 3×validated`, bucketed at fixed thresholds.
pub fn form_complexity(fields: &[FieldDescriptor]) -> FormComplexity {
    let required = fields.iter().filter(|f| f.required).count();
    let validated = fields.iter().filter(|f| !f.validation.is_empty()).count();
    let score = fields.len() + 2 * required + 3 * validated;

    if score < 5 {
        FormComplexity::Simple
    } else if score < 15 {
        FormComplexity::Medium
    } else {
        FormComplexity::Complex
    }
}

// ----------------------------------------------------------------------------
// Priority cascades
//
// Unlike the scoring classifier, these check keyword sets in a fixed
// order and stop at the first match. The two strategies are kept
// distinct on purpose: unifying them would change output on ambiguous
// markup.
// ----------------------------------------------------------------------------

/// Navigation type from a group's serialized markup, first match wins.
pub fn navigation_type(markup: &str) -> NavType {
    let markup = markup.to_lowercase();

    if contains_any(&markup, &["main", "primary", "navbar"]) {
        NavType::MainNavigation
    } else if markup.contains("breadcrumb") {
        NavType::Breadcrumb
    } else if contains_any(&markup, &["sidebar", "side-nav"]) {
        NavType::Sidebar
    } else if markup.contains("footer") {
        NavType::Footer
    } else {
        NavType::General
    }
}

/// Button purpose from caption text, falling back to the html type.
pub fn button_purpose(text: &str, html_type: &str) -> ButtonPurpose {
    let text = text.to_lowercase();

    if contains_any(&text, &["submit", "save", "send", "confirm", "apply"]) {
        ButtonPurpose::Submit
    } else if contains_any(&text, &["cancel", "close", "dismiss", "back"]) {
        ButtonPurpose::Cancel
    } else if contains_any(&text, &["delete", "remove", "trash", "clear"]) {
        ButtonPurpose::Delete
    } else if contains_any(&text, &["edit", "update", "modify", "change"]) {
        ButtonPurpose::Edit
    } else if html_type == "submit" {
        ButtonPurpose::Submit
    } else {
        ButtonPurpose::General
    }
}

/// Button style from its class attribute.
pub fn button_style(class: &str) -> ButtonStyle {
    let class = class.to_lowercase();

    if class.contains("primary") {
        ButtonStyle::Primary
    } else if class.contains("secondary") {
        ButtonStyle::Secondary
    } else if contains_any(&class, &["danger", "destructive", "warning"]) {
        ButtonStyle::Danger
    } else {
        ButtonStyle::Plain
    }
}

/// Link purpose from its text and href.
pub fn link_purpose(text: &str, href: &str) -> LinkPurpose {
    let blob = format!("{} {}", text, href).to_lowercase();

    if blob.contains("home") || href == "/" || href == "index.html" {
        LinkPurpose::Home
    } else if blob.contains("about") {
        LinkPurpose::About
    } else if blob.contains("contact") {
        LinkPurpose::Contact
    } else if contains_any(&blob, &["login", "log in", "sign in", "signin"]) {
        LinkPurpose::Login
    } else if contains_any(&blob, &["register", "sign up", "signup", "join"]) {
        LinkPurpose::Register
    } else {
        LinkPurpose::General
    }
}

/// Card type from a card node's class attribute and text.
pub fn card_type(node: &DomNode) -> CardType {
    let blob = format!("{} {}", node.attr("class"), node.text_content()).to_lowercase();

    if contains_any(&blob, &["product", "price", "cart", "buy", "$"]) {
        CardType::ProductCard
    } else if contains_any(&blob, &["user", "profile", "avatar", "member"]) {
        CardType::UserCard
    } else if contains_any(&blob, &["article", "post", "blog", "read more"]) {
        CardType::ContentCard
    } else {
        CardType::GeneralCard
    }
}

/// Modal purpose from its text and contents.
pub fn modal_purpose(node: &DomNode) -> ModalPurpose {
    let text = node.text_content().to_lowercase();

    if contains_any(&text, &["confirm", "are you sure"]) {
        ModalPurpose::Confirmation
    } else if contains_any(&text, &["alert", "error", "warning"]) {
        ModalPurpose::Alert
    } else if node.contains_element(|n| matches!(n.tag.as_str(), "input" | "textarea" | "select")) {
        ModalPurpose::FormDialog
    } else {
        ModalPurpose::General
    }
}

fn contains_any(blob: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| blob.contains(k))
}

// ----------------------------------------------------------------------------
// Helpers
// ----------------------------------------------------------------------------

/// A link is external when it resolves to a different host than the page
/// identifier. Relative hrefs and unparseable identifiers are internal.
fn is_external(href: &str, page_identifier: &str) -> bool {
    let Ok(target) = Url::parse(href) else {
        return false;
    };
    match Url::parse(page_identifier) {
        Ok(page) => target.host_str() != page.host_str(),
        // Local file paths have no host to compare against
        Err(_) => target.host_str().is_some(),
    }
}

/// Data-entry fields that sit outside every form.
fn orphan_fields(doc: &DomNode) -> Vec<FieldDescriptor> {
    let mut out = Vec::new();
    collect_orphan_fields(doc, false, &mut out);
    out
}

fn collect_orphan_fields(node: &DomNode, inside_form: bool, out: &mut Vec<FieldDescriptor>) {
    for child in &node.children {
        let is_field = matches!(child.tag.as_str(), "input" | "textarea" | "select");
        if !inside_form && is_field {
            let control = child.tag == "input"
                && matches!(
                    child.attr("type"),
                    "submit" | "button" | "reset" | "image" | "hidden"
                );
            if !control {
                let mut field = extract::field(child);
                field.purpose = classify(&field_blob(&field), field_purposes()).to_string();
                out.push(field);
            }
        }
        collect_orphan_fields(child, inside_form || child.tag == "form", out);
    }
}
