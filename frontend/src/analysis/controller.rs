use crate::analysis::analysis_options::AiModel;
use crate::analysis::api::{AnalysisBackend, AnalysisError};
use crate::models::{AnalysisRequest, AnalysisResult, AnalyzePayload};
use std::cell::RefCell;

pub const UNKNOWN_ERROR: &str = "Unknown error";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    InFlight,
    Succeeded(AnalysisResult),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate {
    VideoUrl(String),
    IncludeTranscript(bool),
    IncludeComments(bool),
    Model(AiModel),
}

/// Owns the form inputs and the lifecycle of the current submission.
/// State only changes through these methods.
#[derive(Debug, Default, PartialEq)]
pub struct SubmissionController {
    request: AnalysisRequest,
    state: SubmissionState,
}

impl SubmissionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self) -> &AnalysisRequest {
        &self.request
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self.state, SubmissionState::InFlight)
    }

    pub fn can_submit(&self) -> bool {
        self.request.is_submittable() && !self.is_in_flight()
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match &self.state {
            SubmissionState::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            SubmissionState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn update_field(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::VideoUrl(url) => self.request.video_url = url,
            FieldUpdate::IncludeTranscript(value) => self.request.include_transcript = value,
            FieldUpdate::IncludeComments(value) => self.request.include_comments = value,
            FieldUpdate::Model(model) => self.request.model = model,
        }
    }

    /// Moves to `InFlight` and returns the payload to dispatch, or `None`
    /// when there is no URL or a submission is already running.
    pub fn begin_submission(&mut self) -> Option<AnalyzePayload> {
        if self.is_in_flight() {
            log::debug!("Submission ignored: a request is already in flight");
            return None;
        }
        if !self.request.is_submittable() {
            log::debug!("Submission ignored: no video URL");
            return None;
        }
        if !self.request.include_comments && !self.request.include_transcript {
            log::warn!("No content source selected, sending as transcript-only");
        }

        self.state = SubmissionState::InFlight;
        let payload = self.request.to_payload();
        log::info!(
            "Analyzing {} with {} ({})",
            payload.video_url,
            payload.model_name,
            payload.mode
        );
        Some(payload)
    }

    /// Applies the outcome of the dispatched call. Returns true on success.
    pub fn settle(&mut self, outcome: Result<AnalysisResult, AnalysisError>) -> bool {
        if !self.is_in_flight() {
            log::warn!("Dropping outcome for a submission that is no longer in flight");
            return false;
        }

        match outcome {
            Ok(result) => {
                self.state = SubmissionState::Succeeded(result);
                true
            }
            Err(error) => {
                log::error!("Analysis failed: {error}");
                let message = error.to_string();
                self.state = SubmissionState::Failed(if message.trim().is_empty() {
                    UNKNOWN_ERROR.to_string()
                } else {
                    message
                });
                false
            }
        }
    }
}

/// Drives one submission end to end. The borrow is released while the
/// backend call is pending so inputs stay editable; the call itself uses
/// the snapshot taken at dispatch.
pub async fn run_submission<B, F>(
    controller: &RefCell<SubmissionController>,
    backend: &B,
    on_change: F,
) -> bool
where
    B: AnalysisBackend,
    F: Fn(),
{
    let Some(payload) = controller.borrow_mut().begin_submission() else {
        return false;
    };
    on_change();

    let outcome = backend.analyze(&payload).await;

    let succeeded = controller.borrow_mut().settle(outcome);
    on_change();
    succeeded
}
