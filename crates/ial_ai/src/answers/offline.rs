use std::collections::BTreeMap;
use std::sync::OnceLock;
use std::time::Duration;

use ial_core::error::{codes, AppError};

use super::model::{AnswerMode, AnswerPayload};
use super::AnswerSource;

const BUNDLED_ANSWERS_JSON: &str = include_str!("../../data/demo_outputs.json");

static BUNDLED: OnceLock<PrecomputedAnswers> = OnceLock::new();

/// Answers keyed by the exact (trimmed) question text.
#[derive(Debug, Clone, Default)]
pub struct PrecomputedAnswers {
    entries: BTreeMap<String, AnswerPayload>,
}

impl PrecomputedAnswers {
    pub fn bundled() -> &'static PrecomputedAnswers {
        BUNDLED.get_or_init(|| match Self::from_json(BUNDLED_ANSWERS_JSON) {
            Ok(table) => table,
            Err(e) => {
                tracing::error!(error = %e, "bundled answer table failed to load; every lookup will miss");
                PrecomputedAnswers::default()
            }
        })
    }

    pub fn from_json(raw: &str) -> Result<Self, AppError> {
        let entries: BTreeMap<String, AnswerPayload> = serde_json::from_str(raw).map_err(|e| {
            AppError::new(codes::ANSWERS_INVALID, "Failed to parse precomputed answers")
                .with_details(e.to_string())
        })?;
        Ok(Self { entries })
    }

    /// Byte-exact match on the trimmed query. No case folding, no fuzzy matching.
    pub fn lookup(&self, query: &str) -> Option<&AnswerPayload> {
        self.entries.get(query.trim())
    }

    pub fn questions(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Static-table answer source with a simulated processing delay.
#[derive(Debug, Clone)]
pub struct OfflineAnswers<'a> {
    table: &'a PrecomputedAnswers,
    latency: Duration,
}

impl<'a> OfflineAnswers<'a> {
    pub fn new(table: &'a PrecomputedAnswers, latency: Duration) -> Self {
        Self { table, latency }
    }
}

impl AnswerSource for OfflineAnswers<'_> {
    fn mode(&self) -> AnswerMode {
        AnswerMode::Offline
    }

    fn answer(&self, query: &str) -> Option<AnswerPayload> {
        if !self.latency.is_zero() {
            std::thread::sleep(self.latency);
        }
        self.table.lookup(query).cloned()
    }
}
