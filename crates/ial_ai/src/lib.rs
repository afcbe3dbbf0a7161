pub mod answers;
pub mod config;
pub mod pipeline;
pub mod server;

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::answers::{AnswerMode, AnswerRequest, AnswerSource};
    use super::config::{build_answer_source, online_flag_enabled, AnswerConfig};
    use super::server::AnswerServerClient;

    fn client(endpoint: &str) -> Result<AnswerServerClient, ial_core::error::AppError> {
        AnswerServerClient::new(endpoint, Duration::from_secs(1))
    }

    #[test]
    fn endpoint_must_be_http_url_with_host() {
        assert!(client("http://127.0.0.1:8787/api/answer").is_ok());
        assert!(client("https://answers.example.org/api/answer").is_ok());
        assert!(client("  http://localhost:3000  ").is_ok());

        assert!(client("/api/answer").is_err());
        assert!(client("ftp://example.org/api").is_err());
        assert!(client("http://").is_err());
        assert!(client("http:///api/answer").is_err());
        assert!(client("http://:8787/api").is_err());
        assert!(client("http://127.0.0.1:/api").is_err());
        assert!(client("http://user@evil.example/api").is_err());
    }

    #[test]
    fn online_flag_requires_literal_true() {
        assert!(online_flag_enabled(Some("true")));
        assert!(!online_flag_enabled(Some("TRUE")));
        assert!(!online_flag_enabled(Some("1")));
        assert!(!online_flag_enabled(Some("")));
        assert!(!online_flag_enabled(None));
    }

    #[test]
    fn config_selects_answer_source_variant() {
        let offline = AnswerConfig {
            offline_latency: Duration::ZERO,
            ..AnswerConfig::default()
        };
        assert_eq!(build_answer_source(&offline).mode(), AnswerMode::Offline);

        let online = AnswerConfig {
            use_online_api: true,
            ..offline.clone()
        };
        assert_eq!(build_answer_source(&online).mode(), AnswerMode::Online);

        let bad_endpoint = AnswerConfig {
            endpoint: "not a url".to_string(),
            ..online
        };
        assert_eq!(build_answer_source(&bad_endpoint).mode(), AnswerMode::Offline);
    }

    #[test]
    fn request_omits_unset_optional_fields() {
        let bare = AnswerRequest {
            query: "q".to_string(),
            top_k: None,
            mode: None,
        };
        assert_eq!(
            serde_json::to_value(&bare).unwrap(),
            serde_json::json!({"query": "q"})
        );

        let full = AnswerRequest {
            query: "q".to_string(),
            top_k: Some(6),
            mode: Some(AnswerMode::Online),
        };
        assert_eq!(
            serde_json::to_value(&full).unwrap(),
            serde_json::json!({"query": "q", "top_k": 6, "mode": "online"})
        );
    }
}
