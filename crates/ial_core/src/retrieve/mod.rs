//! Keyword-weighted retrieval over the evidence store.
//!
//! Deterministic and transparent: every card is scored against every query
//! token, scores are sorted stably, and the top `k` cards come back without
//! their scores.

use serde::Serialize;

use crate::domain::EvidenceCard;
use crate::store::EvidenceStore;

mod scoring;

pub use scoring::match_score;
use scoring::{COMPARISON_BOOST, COMPARISON_TERMS, FIELD_WEIGHTS, IMPACT_BOOST, IMPACT_TERMS};

/// Number of cards the demo surfaces per query.
pub const DEFAULT_TOP_K: usize = 6;

const MIN_TOKEN_LEN: usize = 3;

#[derive(Debug, Clone, Serialize)]
pub struct ScoredCard<'a> {
    pub card: &'a EvidenceCard,
    pub score: f64,
}

/// Lowercase, split on anything outside `[a-z0-9]`, drop tokens shorter than 3.
pub fn tokenize(query: &str) -> Vec<String> {
    query
        .trim()
        .to_lowercase()
        .split(|c: char| !(c.is_ascii_lowercase() || c.is_ascii_digit()))
        .map(str::trim)
        .filter(|t| t.len() >= MIN_TOKEN_LEN)
        .map(str::to_string)
        .collect()
}

fn mentions_any(tokens: &[String], terms: &[&str]) -> bool {
    tokens.iter().any(|t| terms.contains(&t.as_str()))
}

fn score_card(card: &EvidenceCard, tokens: &[String]) -> f64 {
    let mut score = 0.0f64;
    for token in tokens {
        for (field, weight) in FIELD_WEIGHTS {
            let text = card.field_text(field);
            if !text.is_empty() {
                score += weight * f64::from(match_score(text, token));
            }
        }
    }

    if mentions_any(tokens, &IMPACT_TERMS) {
        score *= IMPACT_BOOST;
    }
    if mentions_any(tokens, &COMPARISON_TERMS) {
        score *= COMPARISON_BOOST;
    }
    score
}

/// Every card with its score, best first; equal scores keep store order.
///
/// Queries without usable tokens score every card zero, which leaves the
/// store order untouched.
pub fn score_cards<'a>(store: &'a EvidenceStore, query: &str) -> Vec<ScoredCard<'a>> {
    let tokens = tokenize(query);
    let mut scored: Vec<ScoredCard<'a>> = store
        .cards()
        .iter()
        .map(|card| ScoredCard {
            card,
            score: if tokens.is_empty() {
                0.0
            } else {
                score_card(card, &tokens)
            },
        })
        .collect();

    // sort_by is stable: ties stay in store order.
    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored
}

pub fn retrieve_top_k<'a>(store: &'a EvidenceStore, query: &str, k: usize) -> Vec<&'a EvidenceCard> {
    if k == 0 {
        return Vec::new();
    }

    if tokenize(query).is_empty() {
        return store.cards().iter().take(k).collect();
    }

    score_cards(store, query)
        .into_iter()
        .take(k)
        .map(|s| s.card)
        .collect()
}
