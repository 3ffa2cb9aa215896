// SPDX-License-Identifier: MPL-2.0
//! Submission workflow state machine.
//!
//! Owns the selected candidate and the single phase value that drives the
//! whole screen: which outcome view shows, whether the submit control is
//! live, and whether selection is locked. Network work is only requested
//! from here as an effect; the orchestrator in `app::update` turns effects
//! into tasks, so every transition stays synchronously testable.

use crate::extraction::{ExtractError, UploadRequest};
use crate::geo::Coordinates;
use crate::media::CandidateFile;

/// Guidance shown when submit is pressed with nothing selected.
pub const NO_FILE_MESSAGE: &str = "Please select an image file first.";

/// The mutually exclusive phases of one selection and submission round.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Phase {
    /// Nothing selected yet.
    #[default]
    Idle,
    /// A candidate is selected and can be submitted.
    Selected,
    /// An upload is in flight; selection and submit are locked.
    Submitting,
    /// The service returned coordinates for the submitted image.
    Succeeded(Coordinates),
    /// Submission failed; the payload is the user-facing message.
    Failed(String),
}

/// Workflow state: the candidate file plus the current phase.
///
/// The candidate is owned here exclusively. Its preview handle lives inside
/// [`CandidateFile`], so replacing or dropping the candidate releases the
/// preview in the same transition that removes the file.
#[derive(Debug, Clone, Default)]
pub struct State {
    candidate: Option<CandidateFile>,
    phase: Phase,
}

/// Messages for the submission workflow.
#[derive(Debug, Clone)]
pub enum Message {
    /// A validated candidate was chosen on the selection surface.
    FileSelected(CandidateFile),
    /// The current selection was cleared.
    Cleared,
    /// The submit control was pressed.
    SubmitRequested,
    /// The upload task completed, one way or the other.
    SubmissionFinished(Result<Coordinates, ExtractError>),
}

/// Effects produced by workflow transitions.
#[derive(Debug, Clone)]
pub enum Effect {
    /// No effect.
    None,
    /// Start the upload task for the packaged request.
    StartUpload(UploadRequest),
}

impl State {
    /// Handle a workflow message.
    ///
    /// While an upload is in flight every message except its own completion
    /// is ignored, so the in-flight round always resolves before the state
    /// can change under it.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            // ═══════════════════════════════════════════════════════════
            // SELECTION HANDLERS
            // ═══════════════════════════════════════════════════════════
            Message::FileSelected(candidate) => {
                if self.is_submitting() {
                    return Effect::None;
                }
                // Replacing the candidate drops the previous preview here.
                self.candidate = Some(candidate);
                self.phase = Phase::Selected;
                Effect::None
            }
            Message::Cleared => {
                if self.is_submitting() {
                    return Effect::None;
                }
                self.candidate = None;
                self.phase = Phase::Idle;
                Effect::None
            }

            // ═══════════════════════════════════════════════════════════
            // SUBMISSION HANDLERS
            // ═══════════════════════════════════════════════════════════
            Message::SubmitRequested => {
                if self.is_submitting() {
                    return Effect::None;
                }
                match &self.candidate {
                    Some(candidate) => {
                        let request = UploadRequest::from_candidate(candidate);
                        self.phase = Phase::Submitting;
                        Effect::StartUpload(request)
                    }
                    None => {
                        // Guard failure: no request leaves the machine.
                        self.phase = Phase::Failed(NO_FILE_MESSAGE.to_string());
                        Effect::None
                    }
                }
            }
            Message::SubmissionFinished(result) => {
                if !self.is_submitting() {
                    // Stale completion; the round it belonged to is gone.
                    return Effect::None;
                }
                self.phase = match result {
                    Ok(coordinates) => Phase::Succeeded(coordinates),
                    Err(error) => Phase::Failed(error.user_message()),
                };
                Effect::None
            }
        }
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Returns the selected candidate, if any.
    #[must_use]
    pub fn candidate(&self) -> Option<&CandidateFile> {
        self.candidate.as_ref()
    }

    /// Returns whether a candidate is selected.
    #[must_use]
    pub fn has_candidate(&self) -> bool {
        self.candidate.is_some()
    }

    /// Returns whether an upload is in flight.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, Phase::Submitting)
    }

    /// Returns whether the submit control should be pressable.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.has_candidate() && !self.is_submitting()
    }

    /// Returns the coordinates when the last round succeeded.
    #[must_use]
    pub fn coordinates(&self) -> Option<Coordinates> {
        match &self.phase {
            Phase::Succeeded(coordinates) => Some(*coordinates),
            _ => None,
        }
    }

    /// Returns the failure message when the last round failed.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            Phase::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_candidate() -> CandidateFile {
        CandidateFile::new(
            "photo.jpg",
            "/pictures/photo.jpg",
            vec![0xFF, 0xD8, 0xFF, 0xE0],
        )
    }

    fn submitting_state() -> State {
        let mut state = State::default();
        let _ = state.handle(Message::FileSelected(sample_candidate()));
        let effect = state.handle(Message::SubmitRequested);
        assert!(matches!(effect, Effect::StartUpload(_)));
        state
    }

    #[test]
    fn select_moves_to_selected_and_stores_candidate() {
        let mut state = State::default();
        assert!(matches!(state.phase(), Phase::Idle));

        let effect = state.handle(Message::FileSelected(sample_candidate()));
        assert!(matches!(effect, Effect::None));
        assert!(matches!(state.phase(), Phase::Selected));
        assert_eq!(state.candidate().map(CandidateFile::name), Some("photo.jpg"));
        assert!(state.can_submit());
    }

    #[test]
    fn select_replaces_previous_candidate() {
        let mut state = State::default();
        let _ = state.handle(Message::FileSelected(sample_candidate()));

        let replacement = CandidateFile::new("other.jpg", "/pictures/other.jpg", vec![1, 2]);
        let _ = state.handle(Message::FileSelected(replacement));
        assert_eq!(state.candidate().map(CandidateFile::name), Some("other.jpg"));
        assert!(matches!(state.phase(), Phase::Selected));
    }

    #[test]
    fn submit_without_candidate_fails_without_upload() {
        let mut state = State::default();
        let effect = state.handle(Message::SubmitRequested);

        assert!(matches!(effect, Effect::None));
        assert_eq!(state.error_message(), Some(NO_FILE_MESSAGE));
        assert!(!state.is_submitting());
    }

    #[test]
    fn submit_with_candidate_starts_upload() {
        let mut state = State::default();
        let _ = state.handle(Message::FileSelected(sample_candidate()));

        let effect = state.handle(Message::SubmitRequested);
        let Effect::StartUpload(request) = effect else {
            panic!("expected an upload effect");
        };
        assert_eq!(request.file_name(), "photo.jpg");
        assert!(state.is_submitting());
        assert!(!state.can_submit());
    }

    #[test]
    fn completion_with_coordinates_moves_to_succeeded() {
        let mut state = submitting_state();
        let _ = state.handle(Message::SubmissionFinished(Ok(Coordinates::new(
            48.8584, 2.2945,
        ))));

        assert_eq!(state.coordinates(), Some(Coordinates::new(48.8584, 2.2945)));
        assert!(state.can_submit(), "submit is live again after completion");
    }

    #[test]
    fn completion_with_service_detail_surfaces_the_detail() {
        let mut state = submitting_state();
        let error = ExtractError::Service {
            status: 400,
            detail: Some("corrupt image".to_string()),
        };
        let _ = state.handle(Message::SubmissionFinished(Err(error)));
        assert_eq!(state.error_message(), Some("corrupt image"));
    }

    #[test]
    fn completion_without_detail_uses_fallback_message() {
        let mut state = submitting_state();
        let error = ExtractError::Service {
            status: 500,
            detail: None,
        };
        let _ = state.handle(Message::SubmissionFinished(Err(error)));
        assert_eq!(state.error_message(), Some("Upload failed."));
    }

    #[test]
    fn transport_failure_uses_unknown_error_message() {
        let mut state = submitting_state();
        let error = ExtractError::Transport("connection refused".to_string());
        let _ = state.handle(Message::SubmissionFinished(Err(error)));
        assert_eq!(
            state.error_message(),
            Some("An unknown error occurred. Please try again.")
        );
    }

    #[test]
    fn candidate_survives_a_successful_round() {
        let mut state = submitting_state();
        let _ = state.handle(Message::SubmissionFinished(Ok(Coordinates::new(1.0, 2.0))));
        assert!(state.has_candidate(), "the same file can be resubmitted");
    }

    #[test]
    fn clear_from_succeeded_returns_to_idle() {
        let mut state = submitting_state();
        let _ = state.handle(Message::SubmissionFinished(Ok(Coordinates::new(1.0, 2.0))));

        let _ = state.handle(Message::Cleared);
        assert!(matches!(state.phase(), Phase::Idle));
        assert!(!state.has_candidate());
    }

    #[test]
    fn clear_from_failed_returns_to_idle() {
        let mut state = State::default();
        let _ = state.handle(Message::SubmitRequested);
        assert!(state.error_message().is_some());

        let _ = state.handle(Message::Cleared);
        assert!(matches!(state.phase(), Phase::Idle));
    }

    #[test]
    fn reselect_after_failure_discards_the_error() {
        let mut state = submitting_state();
        let error = ExtractError::Service {
            status: 400,
            detail: Some("corrupt image".to_string()),
        };
        let _ = state.handle(Message::SubmissionFinished(Err(error)));

        let _ = state.handle(Message::FileSelected(sample_candidate()));
        assert!(matches!(state.phase(), Phase::Selected));
        assert_eq!(state.error_message(), None);
    }

    #[test]
    fn reselect_after_success_discards_the_result() {
        let mut state = submitting_state();
        let _ = state.handle(Message::SubmissionFinished(Ok(Coordinates::new(1.0, 2.0))));

        let _ = state.handle(Message::FileSelected(sample_candidate()));
        assert!(matches!(state.phase(), Phase::Selected));
        assert_eq!(state.coordinates(), None);
    }

    #[test]
    fn resubmit_after_failure_is_allowed() {
        let mut state = submitting_state();
        let error = ExtractError::Transport("reset".to_string());
        let _ = state.handle(Message::SubmissionFinished(Err(error)));

        let effect = state.handle(Message::SubmitRequested);
        assert!(matches!(effect, Effect::StartUpload(_)));
        assert!(state.is_submitting());
    }

    #[test]
    fn selection_messages_are_ignored_while_submitting() {
        let mut state = submitting_state();

        let replacement = CandidateFile::new("other.jpg", "/pictures/other.jpg", vec![1]);
        let _ = state.handle(Message::FileSelected(replacement));
        assert_eq!(state.candidate().map(CandidateFile::name), Some("photo.jpg"));

        let _ = state.handle(Message::Cleared);
        assert!(state.has_candidate());
        assert!(state.is_submitting());
    }

    #[test]
    fn second_submit_while_submitting_is_ignored() {
        let mut state = submitting_state();
        let effect = state.handle(Message::SubmitRequested);
        assert!(matches!(effect, Effect::None));
        assert!(state.is_submitting());
    }

    #[test]
    fn stale_completion_is_ignored_when_not_submitting() {
        let mut state = State::default();
        let _ = state.handle(Message::SubmissionFinished(Ok(Coordinates::new(1.0, 2.0))));
        assert!(matches!(state.phase(), Phase::Idle));
        assert_eq!(state.coordinates(), None);
    }
}
