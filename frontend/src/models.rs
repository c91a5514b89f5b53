use crate::analysis::analysis_options::{AiModel, AnalysisMode};
use serde::{Deserialize, Serialize};

/// Inputs collected by the analysis form.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRequest {
    pub video_url: String,
    pub include_transcript: bool,
    pub include_comments: bool,
    pub model: AiModel,
}

impl Default for AnalysisRequest {
    fn default() -> Self {
        Self {
            video_url: String::new(),
            include_transcript: false,
            include_comments: true,
            model: AiModel::default(),
        }
    }
}

impl AnalysisRequest {
    pub fn is_submittable(&self) -> bool {
        !self.video_url.trim().is_empty()
    }

    pub fn mode(&self) -> AnalysisMode {
        AnalysisMode::from_options(self.include_comments, self.include_transcript)
    }

    pub fn to_payload(&self) -> AnalyzePayload {
        AnalyzePayload {
            video_url: self.video_url.trim().to_string(),
            model_name: self.model.display_name().to_string(),
            mode: self.mode().label().to_string(),
        }
    }
}

/// Body of `POST /api/analyze`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzePayload {
    pub video_url: String,
    pub model_name: String,
    pub mode: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub video_title: String,
    #[serde(default)]
    pub transcript: Option<String>,
    pub comments: Vec<String>,
    pub analysis: String,
}

// FastAPI-style error body; `detail` is a string for handled errors and a
// list for validation errors.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub detail: serde_json::Value,
}

impl ErrorResponse {
    pub fn message(&self) -> Option<String> {
        self.detail
            .as_str()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_request_matches_form_defaults() {
        let request = AnalysisRequest::default();
        assert!(request.include_comments);
        assert!(!request.include_transcript);
        assert_eq!(request.model, AiModel::Nvidia);
        assert!(!request.is_submittable());
    }

    #[test]
    fn whitespace_only_url_is_not_submittable() {
        let request = AnalysisRequest {
            video_url: "   ".to_string(),
            ..Default::default()
        };
        assert!(!request.is_submittable());
    }

    #[test]
    fn payload_serializes_exactly_three_fields() {
        let request = AnalysisRequest {
            video_url: " https://youtu.be/abc ".to_string(),
            include_transcript: true,
            include_comments: true,
            model: AiModel::Gemini,
        };
        let json = serde_json::to_value(request.to_payload()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "video_url": "https://youtu.be/abc",
                "model_name": "Google Gemini",
                "mode": "Both",
            })
        );
    }

    #[test]
    fn result_accepts_null_or_missing_transcript() {
        let with_null: AnalysisResult = serde_json::from_str(
            r#"{"video_title":"T","transcript":null,"comments":[],"analysis":"X"}"#,
        )
        .unwrap();
        assert_eq!(with_null.transcript, None);

        let missing: AnalysisResult =
            serde_json::from_str(r#"{"video_title":"T","comments":["a"],"analysis":"X"}"#)
                .unwrap();
        assert_eq!(missing.transcript, None);
        assert_eq!(missing.comments, vec!["a".to_string()]);
    }

    #[test]
    fn result_requires_comments_and_analysis() {
        assert!(serde_json::from_str::<AnalysisResult>(r#"{"video_title":"T","analysis":"X"}"#)
            .is_err());
        assert!(
            serde_json::from_str::<AnalysisResult>(r#"{"video_title":"T","comments":[]}"#)
                .is_err()
        );
    }

    #[test]
    fn error_response_only_uses_string_detail() {
        let handled: ErrorResponse =
            serde_json::from_str(r#"{"detail":"Invalid YouTube URL"}"#).unwrap();
        assert_eq!(handled.message().as_deref(), Some("Invalid YouTube URL"));

        let validation: ErrorResponse =
            serde_json::from_str(r#"{"detail":[{"loc":["body","mode"],"msg":"field required"}]}"#)
                .unwrap();
        assert_eq!(validation.message(), None);
    }
}
