use std::time::Duration;

use crate::answers::{AnswerSource, OfflineAnswers, PrecomputedAnswers};
use crate::server::{AnswerServerClient, ServerAnswers};

/// Environment flag that opts into the server answer path.
pub const ONLINE_FLAG_ENV: &str = "IAL_USE_ONLINE_API";

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8787/api/answer";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerConfig {
    pub use_online_api: bool,
    pub endpoint: String,
    pub timeout: Duration,
    /// Simulated processing time before an offline answer is returned.
    pub offline_latency: Duration,
}

impl Default for AnswerConfig {
    fn default() -> Self {
        Self {
            use_online_api: false,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(10),
            offline_latency: Duration::from_millis(800),
        }
    }
}

impl AnswerConfig {
    /// Defaults, with the online flag taken from the environment.
    pub fn from_env() -> Self {
        let raw = std::env::var(ONLINE_FLAG_ENV).ok();
        Self {
            use_online_api: online_flag_enabled(raw.as_deref()),
            ..Self::default()
        }
    }
}

/// Only the literal string `true` enables the server path.
pub(crate) fn online_flag_enabled(raw: Option<&str>) -> bool {
    raw == Some("true")
}

/// Picks the answer source for `config`. Online mode with a bad endpoint
/// degrades to the offline table.
pub fn build_answer_source(config: &AnswerConfig) -> Box<dyn AnswerSource> {
    let offline = OfflineAnswers::new(PrecomputedAnswers::bundled(), config.offline_latency);
    if !config.use_online_api {
        return Box::new(offline);
    }

    match AnswerServerClient::new(&config.endpoint, config.timeout) {
        Ok(client) => Box::new(ServerAnswers::new(client, offline)),
        Err(e) => {
            tracing::warn!(error = %e, "online answers requested but endpoint is invalid; using offline answers");
            Box::new(offline)
        }
    }
}
