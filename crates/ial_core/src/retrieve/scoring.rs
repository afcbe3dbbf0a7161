use crate::domain::CardField;

/// Per-field weights. Intervention and outcome dominate; study ids barely count.
pub(super) const FIELD_WEIGHTS: [(CardField, f64); 7] = [
    (CardField::Intervention, 2.5),
    (CardField::Outcome, 2.5),
    (CardField::FindingSummary, 2.0),
    (CardField::Domain, 1.3),
    (CardField::Geography, 1.2),
    (CardField::Citation, 1.0),
    (CardField::StudyId, 0.8),
];

pub(super) const IMPACT_TERMS: [&str; 2] = ["impact", "effect"];
pub(super) const IMPACT_BOOST: f64 = 1.05;

pub(super) const COMPARISON_TERMS: [&str; 2] = ["compare", "versus"];
pub(super) const COMPARISON_BOOST: f64 = 1.03;

/// 3 for an exact field match, 2 for a space-delimited occurrence, 1 for any
/// substring occurrence, 0 otherwise.
pub fn match_score(field_text: &str, token: &str) -> u32 {
    let text = field_text.to_lowercase();
    if text == token {
        3
    } else if text.contains(&format!(" {token} ")) {
        2
    } else if text.contains(token) {
        1
    } else {
        0
    }
}
