use site_testgen::analyze::classifier::classify;
use site_testgen::analyze::taxonomy::{
    GENERAL, TaxonomyCategory, field_purposes, form_purposes, website_types,
};

// ============================================================================
// Helper taxonomy
// ============================================================================

const COLORS: &[TaxonomyCategory] = &[
    TaxonomyCategory {
        name: "warm",
        keywords: &["red", "orange", "yellow"],
    },
    TaxonomyCategory {
        name: "cool",
        keywords: &["blue", "green", "violet"],
    },
];

// ============================================================================
// 1. Scoring
// ============================================================================

#[test]
fn highest_distinct_keyword_count_wins() {
    assert_eq!(classify("red orange sky with some blue", COLORS), "warm");
    assert_eq!(classify("blue green violet and one red", COLORS), "cool");
}

#[test]
fn repeated_keyword_counts_once() {
    // "red" three times is still one distinct hit; "blue green" wins with two
    assert_eq!(classify("red red red blue green", COLORS), "cool");
}

#[test]
fn matching_is_case_insensitive() {
    assert_eq!(classify("RED and Orange", COLORS), "warm");
}

#[test]
fn substring_matches_count() {
    // No stemming, raw substring: "reddish" contains "red"
    assert_eq!(classify("reddish tint", COLORS), "warm");
}

// ============================================================================
// 2. Tie-break and sentinel
// ============================================================================

#[test]
fn tie_goes_to_earlier_declared_category() {
    // One hit each: "warm" is declared first and must win
    assert_eq!(classify("red and blue", COLORS), "warm");
}

#[test]
fn zero_score_yields_general_sentinel() {
    assert_eq!(classify("nothing matches here", COLORS), GENERAL);
    assert_eq!(classify("", COLORS), GENERAL);
}

#[test]
fn empty_category_list_yields_general_sentinel() {
    assert_eq!(classify("anything", &[]), GENERAL);
}

// ============================================================================
// 3. Built-in taxonomies
// ============================================================================

#[test]
fn login_blob_classifies_to_login_forms() {
    let blob = "username password <input name=\"username\"> <input type=\"password\">";
    assert_eq!(classify(blob, form_purposes()), "login_forms");
}

#[test]
fn registration_blob_beats_login_on_score() {
    let blob = "sign up create account confirm password";
    assert_eq!(classify(blob, form_purposes()), "registration_forms");
}

#[test]
fn shop_text_classifies_to_e_commerce() {
    let blob = "add to cart checkout now product price";
    assert_eq!(classify(blob, website_types()), "e_commerce");
}

#[test]
fn username_field_beats_name_by_declaration_order() {
    // "username" also contains "name"; the earlier category must win the tie
    assert_eq!(classify("text username", field_purposes()), "username");
}

#[test]
fn unmatched_page_text_is_general() {
    assert_eq!(classify("lorem ipsum dolor", website_types()), GENERAL);
}
