use crate::env_variable_utils::BACKEND_URL;
use crate::models::{AnalysisResult, AnalyzePayload, ErrorResponse};
use gloo_net::http::Request;
use thiserror::Error;

pub const ANALYZE_PATH: &str = "/api/analyze";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("Failed to connect to backend: {0}")]
    Transport(String),
    #[error("Failed to analyze video (HTTP {status}){}", detail_suffix(.detail))]
    HttpStatus { status: u16, detail: Option<String> },
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail
        .as_ref()
        .map(|detail| format!(": {detail}"))
        .unwrap_or_default()
}

/// Something that can run one analysis. The browser build talks HTTP;
/// tests plug in fakes.
#[allow(async_fn_in_trait)]
pub trait AnalysisBackend {
    async fn analyze(&self, payload: &AnalyzePayload) -> Result<AnalysisResult, AnalysisError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpAnalysisClient {
    endpoint: String,
}

impl HttpAnalysisClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(analyze_endpoint(&BACKEND_URL))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl AnalysisBackend for HttpAnalysisClient {
    async fn analyze(&self, payload: &AnalyzePayload) -> Result<AnalysisResult, AnalysisError> {
        // `json` sets Content-Type: application/json
        let response = Request::post(&self.endpoint)
            .json(payload)
            .map_err(|e| AnalysisError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| AnalysisError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AnalysisError::Transport(e.to_string()))?;

        decode_response(status, &body)
    }
}

pub fn analyze_endpoint(backend_url: &str) -> String {
    format!("{}{}", backend_url.trim_end_matches('/'), ANALYZE_PATH)
}

/// Classifies a settled response: non-2xx first, then the body schema.
pub fn decode_response(status: u16, body: &str) -> Result<AnalysisResult, AnalysisError> {
    if !(200..300).contains(&status) {
        let detail = serde_json::from_str::<ErrorResponse>(body)
            .ok()
            .and_then(|error_response| error_response.message());
        return Err(AnalysisError::HttpStatus { status, detail });
    }

    serde_json::from_str::<AnalysisResult>(body).map_err(|e| AnalysisError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_BODY: &str =
        r#"{"video_title":"T","transcript":"abc","comments":["a","b"],"analysis":"X"}"#;

    #[test]
    fn ok_response_decodes_into_result() {
        let result = decode_response(200, SAMPLE_BODY).unwrap();
        assert_eq!(
            result,
            AnalysisResult {
                video_title: "T".to_string(),
                transcript: Some("abc".to_string()),
                comments: vec!["a".to_string(), "b".to_string()],
                analysis: "X".to_string(),
            }
        );
    }

    #[test]
    fn any_2xx_status_is_success() {
        assert!(decode_response(201, SAMPLE_BODY).is_ok());
        assert!(decode_response(299, SAMPLE_BODY).is_ok());
    }

    #[test]
    fn server_error_is_http_status_error() {
        let err = decode_response(500, "Internal Server Error").unwrap_err();
        assert_eq!(
            err,
            AnalysisError::HttpStatus {
                status: 500,
                detail: None
            }
        );
        assert_eq!(err.to_string(), "Failed to analyze video (HTTP 500)");
    }

    #[test]
    fn error_detail_is_appended_to_message() {
        let err = decode_response(400, r#"{"detail":"Invalid YouTube URL"}"#).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to analyze video (HTTP 400): Invalid YouTube URL"
        );
    }

    #[test]
    fn status_is_checked_before_body() {
        // A valid result body does not rescue a failing status.
        let err = decode_response(503, SAMPLE_BODY).unwrap_err();
        assert!(matches!(err, AnalysisError::HttpStatus { status: 503, .. }));
    }

    #[test]
    fn malformed_json_is_decode_error() {
        let err = decode_response(200, "<html>oops</html>").unwrap_err();
        assert!(matches!(err, AnalysisError::Decode(_)));
        assert!(err.to_string().starts_with("Failed to parse response: "));
    }

    #[test]
    fn missing_required_field_is_decode_error() {
        let err = decode_response(200, r#"{"video_title":"T","comments":[]}"#).unwrap_err();
        assert!(matches!(err, AnalysisError::Decode(ref msg) if msg.contains("analysis")));
    }

    #[test]
    fn endpoint_joins_without_double_slash() {
        assert_eq!(
            analyze_endpoint("http://localhost:8000/"),
            "http://localhost:8000/api/analyze"
        );
        assert_eq!(
            analyze_endpoint("https://api.example.com"),
            "https://api.example.com/api/analyze"
        );
    }

    #[test]
    fn client_keeps_configured_endpoint() {
        let client = HttpAnalysisClient::new("http://backend:9000/api/analyze");
        assert_eq!(client.endpoint(), "http://backend:9000/api/analyze");
    }
}
