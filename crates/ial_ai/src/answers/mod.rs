mod model;
mod offline;

pub use model::{AnswerMode, AnswerPayload, AnswerRequest, EvidenceUsage};
pub use offline::{OfflineAnswers, PrecomputedAnswers};

/// Sample questions offered by the demo; each has a precomputed answer.
pub const SUGGESTED_QUESTIONS: [&str; 4] = [
    "What interventions are most effective for improving student learning?",
    "Do cash transfers actually reduce poverty?",
    "What is the impact of school construction on wages?",
    "Compare conditional vs unconditional cash transfers for girls.",
];

/// Where answers come from. `None` means no answer is available for the
/// query, which is an expected outcome rather than an error.
pub trait AnswerSource {
    fn mode(&self) -> AnswerMode;

    fn answer(&self, query: &str) -> Option<AnswerPayload>;
}
