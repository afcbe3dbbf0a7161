use std::time::Duration;

use ial_core::error::{codes, AppError};
use ial_core::retrieve::DEFAULT_TOP_K;

use crate::answers::{AnswerMode, AnswerPayload, AnswerRequest, AnswerSource, OfflineAnswers};

/// Client for an optional server-side answer endpoint.
#[derive(Debug, Clone)]
pub struct AnswerServerClient {
    endpoint: String,
    timeout: Duration,
}

impl AnswerServerClient {
    /// Accepts plain `http://` or `https://` URLs with a host and no userinfo.
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, AppError> {
        let endpoint = endpoint.trim().to_string();
        let invalid = || {
            AppError::new(
                codes::ANSWER_ENDPOINT_INVALID,
                "Answer endpoint must be an http(s) URL",
            )
            .with_details(format!("endpoint={endpoint}"))
        };

        let rest = endpoint
            .strip_prefix("http://")
            .or_else(|| endpoint.strip_prefix("https://"))
            .ok_or_else(invalid)?;
        let authority = rest
            .split(|c: char| c == '/' || c == '?' || c == '#')
            .next()
            .unwrap_or("");
        if authority.is_empty()
            || authority.starts_with(':')
            || authority.ends_with(':')
            || authority.contains('@')
        {
            return Err(invalid());
        }

        Ok(Self { endpoint, timeout })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn fetch(&self, req: &AnswerRequest) -> Result<AnswerPayload, AppError> {
        let body = serde_json::to_value(req).map_err(|e| {
            AppError::new(codes::ANSWER_SERVER_FAILED, "Failed to encode answer request")
                .with_details(e.to_string())
        })?;

        let resp = ureq::post(&self.endpoint).timeout(self.timeout).send_json(body);

        match resp {
            Ok(r) if r.status() == 200 => r.into_json::<AnswerPayload>().map_err(|e| {
                AppError::new(codes::ANSWER_SERVER_FAILED, "Failed to decode answer response")
                    .with_details(e.to_string())
            }),
            Ok(r) => Err(
                AppError::new(codes::ANSWER_SERVER_FAILED, "Answer server returned a non-200 status")
                    .with_details(format!("status={}", r.status())),
            ),
            Err(ureq::Error::Status(status, _)) => Err(
                AppError::new(codes::ANSWER_SERVER_FAILED, "Answer server returned an error status")
                    .with_details(format!("status={status}")),
            ),
            Err(e) => Err(AppError::new(
                codes::ANSWER_SERVER_UNREACHABLE,
                "Failed to reach answer server",
            )
            .with_details(e.to_string())
            .with_retryable(true)),
        }
    }
}

/// Server-first answer source. Any server failure falls back to the offline
/// table; errors never reach the caller.
#[derive(Debug, Clone)]
pub struct ServerAnswers<'a> {
    client: AnswerServerClient,
    fallback: OfflineAnswers<'a>,
}

impl<'a> ServerAnswers<'a> {
    pub fn new(client: AnswerServerClient, fallback: OfflineAnswers<'a>) -> Self {
        Self { client, fallback }
    }
}

impl AnswerSource for ServerAnswers<'_> {
    fn mode(&self) -> AnswerMode {
        AnswerMode::Online
    }

    fn answer(&self, query: &str) -> Option<AnswerPayload> {
        let req = AnswerRequest {
            query: query.to_string(),
            top_k: Some(DEFAULT_TOP_K as u32),
            mode: Some(AnswerMode::Online),
        };

        match self.client.fetch(&req) {
            Ok(payload) => Some(payload),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    endpoint = %self.client.endpoint(),
                    "answer server unavailable; falling back to offline answers"
                );
                self.fallback.answer(query)
            }
        }
    }
}
