use ial_core::domain::EvidenceCard;
use ial_core::retrieve::retrieve_top_k;
use ial_core::stats::DbStats;
use ial_core::store::EvidenceStore;

use crate::answers::{AnswerMode, AnswerPayload, AnswerSource};

/// Shown when a query has no answer in offline mode.
pub const OFFLINE_NOTICE: &str = "This is a static demo with no external API connection. \
The query you entered has not been precomputed; try one of the suggested questions to see the output format.";

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedEvidence<'a> {
    pub card: &'a EvidenceCard,
    pub claim_supported: String,
    pub source_url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedAnswer<'a> {
    pub answer_summary: Vec<String>,
    pub evidence: Vec<ResolvedEvidence<'a>>,
    pub limitations: String,
    pub follow_up_prompts: Vec<String>,
    /// Evidence entries dropped because their card is not in the store.
    pub skipped_card_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AnswerOutcome<'a> {
    Answered(ResolvedAnswer<'a>),
    NotPrecomputed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DemoRun<'a> {
    pub query: String,
    pub mode: AnswerMode,
    /// What retrieval surfaced for the query. Display only; the answer does
    /// not depend on it.
    pub retrieved: Vec<&'a EvidenceCard>,
    pub outcome: AnswerOutcome<'a>,
    pub stats: DbStats,
}

impl DemoRun<'_> {
    pub fn notice(&self) -> Option<&'static str> {
        match self.outcome {
            AnswerOutcome::Answered(_) => None,
            AnswerOutcome::NotPrecomputed => Some(OFFLINE_NOTICE),
        }
    }
}

/// Attach store cards to an answer's evidence list, skipping unknown card ids.
pub fn resolve_answer(store: &EvidenceStore, payload: AnswerPayload) -> ResolvedAnswer<'_> {
    let mut evidence = Vec::with_capacity(payload.evidence_used.len());
    let mut skipped_card_ids = Vec::new();

    for usage in payload.evidence_used {
        let Some(card) = store.get_card_by_id(&usage.card_id) else {
            tracing::debug!(card_id = %usage.card_id, "answer cites unknown card; skipping");
            skipped_card_ids.push(usage.card_id);
            continue;
        };
        let source_url = usage
            .source_url
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| card.source_url.clone());
        evidence.push(ResolvedEvidence {
            card,
            claim_supported: usage.claim_supported,
            source_url,
        });
    }

    ResolvedAnswer {
        answer_summary: payload.answer_summary,
        evidence,
        limitations: payload.limitations,
        follow_up_prompts: payload.follow_up_prompts,
        skipped_card_ids,
    }
}

/// One demo round: retrieve for display, then look up the answer.
pub fn ask<'a>(
    store: &'a EvidenceStore,
    source: &dyn AnswerSource,
    query: &str,
    top_k: usize,
) -> DemoRun<'a> {
    let retrieved = retrieve_top_k(store, query, top_k);
    let outcome = match source.answer(query) {
        Some(payload) => AnswerOutcome::Answered(resolve_answer(store, payload)),
        None => AnswerOutcome::NotPrecomputed,
    };

    DemoRun {
        query: query.to_string(),
        mode: source.mode(),
        retrieved,
        outcome,
        stats: store.db_stats(),
    }
}
