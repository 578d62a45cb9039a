use site_testgen::analyze::extract;
use site_testgen::analyze::page_model::{ButtonPurpose, LinkPurpose, NavType};
use site_testgen::dom::parse::parse_html;

// ============================================================================
// 1. Forms and fields
// ============================================================================

#[test]
fn form_pulls_attributes_verbatim() {
    let doc = parse_html(
        "<form id=\"signup\" name=\"signup-form\" action=\"/register\" method=\"post\">\
         <input type=\"email\" name=\"email\" required>\
         </form>",
    );
    let form = extract::form(extract::form_nodes(&doc)[0]);

    assert_eq!(form.id, "signup");
    assert_eq!(form.name, "signup-form");
    assert_eq!(form.action, "/register");
    assert_eq!(form.method, "POST");
    assert_eq!(form.fields.len(), 1);
}

#[test]
fn form_method_defaults_to_get() {
    let doc = parse_html("<form action=\"/go\"></form>");
    let form = extract::form(extract::form_nodes(&doc)[0]);
    assert_eq!(form.method, "GET");
    assert!(form.fields.is_empty());
}

#[test]
fn fields_skip_controls_and_hidden_inputs() {
    let doc = parse_html(
        "<form>\
         <input type=\"text\" name=\"q\">\
         <input type=\"hidden\" name=\"csrf\">\
         <input type=\"submit\" value=\"Go\">\
         <textarea name=\"body\"></textarea>\
         <select name=\"topic\"></select>\
         </form>",
    );
    let fields = extract::fields(extract::form_nodes(&doc)[0]);
    let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["q", "body", "topic"]);
    assert_eq!(fields[1].field_type, "textarea");
    assert_eq!(fields[2].field_type, "select");
}

#[test]
fn field_type_defaults_to_text() {
    let doc = parse_html("<form><input name=\"anything\"></form>");
    let fields = extract::fields(extract::form_nodes(&doc)[0]);
    assert_eq!(fields[0].field_type, "text");
    assert!(!fields[0].required);
}

#[test]
fn field_validation_attributes_are_captured() {
    let doc = parse_html(
        "<form><input name=\"code\" pattern=\"[0-9]+\" minlength=\"4\" maxlength=\"8\" required></form>",
    );
    let field = &extract::fields(extract::form_nodes(&doc)[0])[0];
    assert!(field.required);
    assert_eq!(field.validation.pattern, "[0-9]+");
    assert_eq!(field.validation.min_length, "4");
    assert_eq!(field.validation.max_length, "8");
    assert!(!field.validation.is_empty());
}

#[test]
fn unvalidated_field_has_empty_validation() {
    let doc = parse_html("<form><input name=\"plain\"></form>");
    let field = &extract::fields(extract::form_nodes(&doc)[0])[0];
    assert!(field.validation.is_empty());
}

// ============================================================================
// 2. Navigation
// ============================================================================

#[test]
fn navigation_collects_link_pairs_in_document_order() {
    let doc = parse_html(
        "<nav id=\"top\"><ul>\
         <li><a href=\"/\">Home</a></li>\
         <li><a href=\"/about\">About</a></li>\
         </ul></nav>",
    );
    let nav = extract::navigation(extract::nav_nodes(&doc)[0]);

    assert_eq!(nav.id, "top");
    assert_eq!(nav.nav_type, NavType::General); // analyzer assigns the type
    assert_eq!(nav.links.len(), 2);
    assert_eq!(nav.links[0].text, "Home");
    assert_eq!(nav.links[1].href, "/about");
    assert_eq!(nav.structure.breadth, 2);
    assert_eq!(nav.structure.depth, 1);
    assert!(!nav.structure.hierarchical);
}

#[test]
fn nested_lists_make_navigation_hierarchical() {
    let doc = parse_html(
        "<nav><ul><li><a href=\"/a\">A</a><ul><li><a href=\"/a/b\">B</a></li></ul></li></ul></nav>",
    );
    let nav = extract::navigation(extract::nav_nodes(&doc)[0]);
    assert_eq!(nav.structure.depth, 2);
    assert!(nav.structure.hierarchical);
}

#[test]
fn role_navigation_counts_as_group_but_nested_groups_fold() {
    let doc = parse_html(
        "<div role=\"navigation\"><nav><a href=\"/x\">X</a></nav></div>\
         <nav><a href=\"/y\">Y</a></nav>",
    );
    // The inner <nav> is part of the outer role=navigation group
    assert_eq!(extract::nav_nodes(&doc).len(), 2);
}

// ============================================================================
// 3. Buttons and links
// ============================================================================

#[test]
fn button_nodes_cover_tags_inputs_and_roles() {
    let doc = parse_html(
        "<button id=\"b1\">Save</button>\
         <input type=\"submit\" value=\"Send\">\
         <input type=\"text\" name=\"not-a-button\">\
         <div role=\"button\">Fake</div>",
    );
    let buttons: Vec<_> = extract::button_nodes(&doc)
        .into_iter()
        .map(extract::button)
        .collect();

    assert_eq!(buttons.len(), 3);
    assert_eq!(buttons[0].text, "Save");
    // input buttons carry their caption in `value`
    assert_eq!(buttons[1].text, "Send");
    assert_eq!(buttons[1].html_type, "submit");
    assert_eq!(buttons[2].text, "Fake");
    // purpose is left for the analyzer cascade
    assert_eq!(buttons[0].purpose, ButtonPurpose::General);
}

#[test]
fn button_type_defaults_to_button() {
    let doc = parse_html("<button>Plain</button>");
    let button = extract::button(extract::button_nodes(&doc)[0]);
    assert_eq!(button.html_type, "button");
}

#[test]
fn links_keep_text_and_href() {
    let doc = parse_html("<a href=\"/about\">About us</a><a>anchor</a>");
    let links: Vec<_> = extract::link_nodes(&doc)
        .into_iter()
        .map(extract::link)
        .collect();

    assert_eq!(links.len(), 2);
    assert_eq!(links[0].href, "/about");
    assert_eq!(links[0].text, "About us");
    assert_eq!(links[1].href, "");
    assert_eq!(links[0].purpose, LinkPurpose::General);
}

// ============================================================================
// 4. Tables
// ============================================================================

#[test]
fn table_shape_and_headers() {
    let doc = parse_html(
        "<table><thead><tr><th>A</th><th>B</th></tr></thead>\
         <tbody><tr><td>1</td><td>2</td></tr></tbody></table>",
    );
    let table = extract::table(extract::table_nodes(&doc)[0]);
    assert_eq!(table.row_count, 2);
    assert_eq!(table.column_count, 2);
    assert!(table.has_headers);
    assert!(!table.interactive);
}

#[test]
fn empty_table_records_zero_rows_and_columns() {
    let doc = parse_html("<table></table>");
    let table = extract::table(extract::table_nodes(&doc)[0]);
    assert_eq!(table.row_count, 0);
    assert_eq!(table.column_count, 0);
    assert!(!table.has_headers);
    assert!(!table.interactive);
}

#[test]
fn table_with_controls_is_interactive() {
    let doc = parse_html("<table><tr><td><a href=\"/edit\">edit</a></td></tr></table>");
    let table = extract::table(extract::table_nodes(&doc)[0]);
    assert!(table.interactive);
}

// ============================================================================
// 5. Lists
// ============================================================================

#[test]
fn outermost_lists_only_with_nested_flag() {
    let doc = parse_html(
        "<ul><li>a</li><li>b<ol><li>b1</li></ol></li></ul>\
         <ol><li>1</li><li>2</li><li>3</li></ol>",
    );
    let lists: Vec<_> = extract::list_nodes(&doc)
        .into_iter()
        .map(extract::list)
        .collect();

    assert_eq!(lists.len(), 2);
    assert!(!lists[0].ordered);
    assert_eq!(lists[0].item_count, 2);
    assert!(lists[0].nested);
    assert!(lists[1].ordered);
    assert_eq!(lists[1].item_count, 3);
    assert!(!lists[1].nested);
}

#[test]
fn list_with_links_is_interactive() {
    let doc = parse_html("<ul><li><a href=\"/x\">x</a></li></ul>");
    let list = extract::list(extract::list_nodes(&doc)[0]);
    assert!(list.interactive);
}

// ============================================================================
// 6. Cards and modals
// ============================================================================

#[test]
fn card_nodes_match_class_tokens_not_substrings() {
    let doc = parse_html(
        "<div class=\"card\"><div class=\"card-body\"><img src=\"x.png\"><p>text</p></div></div>\
         <div class=\"discard\">not a card</div>",
    );
    let cards: Vec<_> = extract::card_nodes(&doc)
        .into_iter()
        .map(extract::card)
        .collect();

    assert_eq!(cards.len(), 1);
    assert!(cards[0].has_image);
    assert!(!cards[0].interactive);
    assert!(cards[0].element_count >= 3);
}

#[test]
fn modal_detection_and_close_control() {
    let doc = parse_html(
        "<div class=\"modal\" id=\"m1\"><button class=\"close\">x</button></div>\
         <div role=\"dialog\"></div>",
    );
    let modals: Vec<_> = extract::modal_nodes(&doc)
        .into_iter()
        .map(extract::modal)
        .collect();

    assert_eq!(modals.len(), 2);
    assert_eq!(modals[0].id, "m1");
    assert!(modals[0].has_close);
    assert!(!modals[1].has_close);
}

// ============================================================================
// 7. Content areas
// ============================================================================

#[test]
fn content_areas_capture_landmark_heading_and_size() {
    let doc = parse_html(
        "<main><h1>Welcome</h1><p>one two three</p></main><footer>contact us soon</footer>",
    );
    let areas: Vec<_> = extract::content_area_nodes(&doc)
        .into_iter()
        .map(extract::content_area)
        .collect();

    assert_eq!(areas.len(), 2);
    assert_eq!(areas[0].area, "main");
    assert_eq!(areas[0].heading, "Welcome");
    assert_eq!(areas[0].word_count, 4);
    assert_eq!(areas[1].area, "footer");
    assert_eq!(areas[1].heading, "");
}

// ============================================================================
// 8. Degenerate input
// ============================================================================

#[test]
fn empty_document_yields_no_descriptors() {
    let doc = parse_html("");
    assert!(extract::form_nodes(&doc).is_empty());
    assert!(extract::nav_nodes(&doc).is_empty());
    assert!(extract::button_nodes(&doc).is_empty());
    assert!(extract::link_nodes(&doc).is_empty());
    assert!(extract::table_nodes(&doc).is_empty());
    assert!(extract::list_nodes(&doc).is_empty());
    assert!(extract::card_nodes(&doc).is_empty());
    assert!(extract::modal_nodes(&doc).is_empty());
    assert!(extract::content_area_nodes(&doc).is_empty());
}
