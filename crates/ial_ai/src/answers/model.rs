use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AnswerMode {
    Offline,
    Online,
}

/// Body posted to the optional answer server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnswerRequest {
    pub query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<AnswerMode>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EvidenceUsage {
    pub card_id: String,
    pub claim_supported: String,
    // Only the server variant fills this in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

/// Structured answer: ordered claims, the cards backing them, caveats and
/// suggested next questions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AnswerPayload {
    pub answer_summary: Vec<String>,
    pub evidence_used: Vec<EvidenceUsage>,
    pub limitations: String,
    pub follow_up_prompts: Vec<String>,
}
