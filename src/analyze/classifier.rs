use crate::analyze::taxonomy::{GENERAL, TaxonomyCategory};

// ============================================================================
// Scoring classifier — highest distinct-keyword count wins
// ============================================================================

/// Classify a text/attribute blob against an ordered category set.
///
/// Score is the count of distinct keywords present in the blob
/// (case-insensitive substring match, no stemming, no weighting). The
/// strictly highest score wins; on a tie the category declared earlier
/// wins. A zero score everywhere yields the `general` sentinel. Never
/// fails.
pub fn classify(blob: &str, categories: &[TaxonomyCategory]) -> &'static str {
    let blob = blob.to_lowercase();

    let mut best_name = GENERAL;
    let mut best_score = 0usize;

    for category in categories {
        let score = category
            .keywords
            .iter()
            .filter(|keyword| blob.contains(*keyword))
            .count();

        // Strictly greater keeps the earlier-declared category on ties
        if score > best_score {
            best_name = category.name;
            best_score = score;
        }
    }

    best_name
}
