//! View state for the primary record fetch.
//!
//! `Loading` is the unconditional initial state on every identifier change;
//! `Ready` and `Error` are terminal for that identifier. The view hands out
//! a generation token per load so a result arriving after a newer load
//! started is ignored instead of applied.

use crate::api::{ApiError, ResponseApi};
use crate::locale::{self, MessageKey};
use crate::models::{Language, ResponseData};
use tracing::{debug, warn};

/// State of the primary record view.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    /// A fetch is outstanding.
    Loading,
    /// The record arrived in full.
    Ready(ResponseData),
    /// The fetch failed; holds a generic user-facing message. The only
    /// recovery is navigating away.
    Error(String),
}

/// Owns the view state and the generation counter for the record fetch.
#[derive(Debug)]
pub struct ResponseView {
    state: ViewState,
    generation: u64,
}

impl Default for ResponseView {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseView {
    pub fn new() -> Self {
        Self {
            state: ViewState::Loading,
            generation: 0,
        }
    }

    /// Start a new load. Resets to `Loading` and returns the generation
    /// token the eventual result must present.
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.state = ViewState::Loading;
        debug!("view load started (generation {})", self.generation);
        self.generation
    }

    /// Install a fetch result. Returns false when the token is stale, in
    /// which case the result is dropped and the state is untouched.
    pub fn apply(&mut self, generation: u64, result: Result<ResponseData, ApiError>) -> bool {
        if generation != self.generation {
            debug!(
                "ignoring stale load result (generation {} != {})",
                generation, self.generation
            );
            return false;
        }

        self.state = match result {
            Ok(data) => ViewState::Ready(data),
            Err(err) => {
                warn!("response load failed: {}", err);
                // Language is unknown until a record arrives, so the error
                // message falls back to English.
                ViewState::Error(locale::text(MessageKey::LoadFailed, Language::En).to_string())
            }
        };
        true
    }

    /// Fetch the record for `id` and install the outcome.
    pub async fn load(&mut self, api: &dyn ResponseApi, id: &str) {
        let generation = self.begin_load();
        let result = api.fetch_response(id).await;
        self.apply(generation, result);
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// The loaded record, when the view is Ready.
    #[allow(dead_code)] // Utility accessor
    pub fn data(&self) -> Option<&ResponseData> {
        match &self.state {
            ViewState::Ready(data) => Some(data),
            _ => None,
        }
    }

    /// The user-facing message, when the view is in the error state.
    #[allow(dead_code)] // Utility accessor
    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            ViewState::Error(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AssessmentResponse, Language};
    use chrono::Utc;

    fn sample_data(id: &str) -> ResponseData {
        ResponseData {
            response: AssessmentResponse {
                id: id.to_string(),
                email: "user@example.com".to_string(),
                language: Language::En,
                timestamp: Utc::now(),
            },
            answers: vec![],
        }
    }

    #[test]
    fn test_initial_state_is_loading() {
        let view = ResponseView::new();
        assert_eq!(*view.state(), ViewState::Loading);
    }

    #[test]
    fn test_success_transitions_to_ready() {
        let mut view = ResponseView::new();
        let generation = view.begin_load();
        assert!(view.apply(generation, Ok(sample_data("r1"))));
        assert_eq!(view.data().unwrap().response.id, "r1");
    }

    #[test]
    fn test_failure_transitions_to_error_with_generic_message() {
        let mut view = ResponseView::new();
        let generation = view.begin_load();
        assert!(view.apply(generation, Err(ApiError::NotFound("r1".to_string()))));
        assert_eq!(
            view.error_message(),
            Some("Failed to load response data. Please try again.")
        );
        assert!(view.data().is_none());
    }

    #[test]
    fn test_stale_result_is_ignored() {
        let mut view = ResponseView::new();
        let first = view.begin_load();
        // A new identifier supersedes the first load before it settles.
        let second = view.begin_load();

        assert!(!view.apply(first, Ok(sample_data("old"))));
        assert_eq!(*view.state(), ViewState::Loading);

        assert!(view.apply(second, Ok(sample_data("new"))));
        assert_eq!(view.data().unwrap().response.id, "new");
    }

    #[test]
    fn test_stale_error_does_not_clobber_ready() {
        let mut view = ResponseView::new();
        let first = view.begin_load();
        let second = view.begin_load();

        assert!(view.apply(second, Ok(sample_data("current"))));
        assert!(!view.apply(first, Err(ApiError::Rejected)));
        assert_eq!(view.data().unwrap().response.id, "current");
    }

    #[test]
    fn test_new_identifier_resets_to_loading() {
        let mut view = ResponseView::new();
        let generation = view.begin_load();
        view.apply(generation, Ok(sample_data("r1")));

        view.begin_load();
        assert_eq!(*view.state(), ViewState::Loading);
    }
}
