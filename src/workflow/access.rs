//! Access-code request workflow.
//!
//! The draft lives for exactly one open/close cycle: opening seeds the
//! email from the session store, cancelling discards unconditionally, and
//! a successful submission clears the fields and closes. Failure keeps the
//! draft intact for immediate resubmission.

use crate::api::{ApiError, ResponseApi};
use crate::models::AccessRequest;
use tracing::{debug, info, warn};

/// Session-scoped key the default email is read from.
pub const USER_EMAIL_KEY: &str = "userEmail";

/// Narrow read-only capability for session-scoped values.
pub trait SessionStore {
    fn read(&self, key: &str) -> Option<String>;
}

/// Reads session values from the process environment.
pub struct EnvSessionStore;

impl SessionStore for EnvSessionStore {
    fn read(&self, key: &str) -> Option<String> {
        let var = match key {
            USER_EMAIL_KEY => "CHECKVIEW_EMAIL",
            _ => return None,
        };
        std::env::var(var).ok().filter(|v| !v.is_empty())
    }
}

/// Workflow states for the access-code request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowState {
    Closed,
    Open,
    Submitting,
}

/// Outcome of a submit trigger.
#[derive(Debug)]
pub enum SubmitResult {
    /// The request was accepted; the workflow closed and cleared the draft.
    Accepted,
    /// Transport failure or a well-formed unsuccessful reply; the workflow
    /// stays open with the draft intact.
    Failed(ApiError),
    /// Submission was gated (empty email or workflow not open); no request
    /// was issued.
    Gated,
}

/// Owns the draft fields and the open/submit state machine.
#[derive(Debug)]
pub struct AccessRequestWorkflow {
    state: WorkflowState,
    email: String,
    message: String,
}

impl Default for AccessRequestWorkflow {
    fn default() -> Self {
        Self::new()
    }
}

impl AccessRequestWorkflow {
    pub fn new() -> Self {
        Self {
            state: WorkflowState::Closed,
            email: String::new(),
            message: String::new(),
        }
    }

    /// Open the workflow, seeding the email field from the session store.
    /// The message field always starts empty.
    pub fn open(&mut self, session: &dyn SessionStore) {
        self.email = session.read(USER_EMAIL_KEY).unwrap_or_default();
        self.message.clear();
        self.state = WorkflowState::Open;
        debug!("access request opened (seeded email: {})", !self.email.is_empty());
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    #[allow(dead_code)] // Utility accessor
    pub fn email(&self) -> &str {
        &self.email
    }

    #[allow(dead_code)] // Utility accessor
    pub fn message(&self) -> &str {
        &self.message
    }

    #[allow(dead_code)] // Utility accessor
    pub fn state(&self) -> WorkflowState {
        self.state
    }

    /// Submission requires a non-empty email and no submission in flight.
    pub fn can_submit(&self) -> bool {
        self.state == WorkflowState::Open && !self.email.is_empty()
    }

    /// Discard the draft and close.
    pub fn cancel(&mut self) {
        self.email.clear();
        self.message.clear();
        self.state = WorkflowState::Closed;
        debug!("access request cancelled, draft discarded");
    }

    /// Submit the draft. Gating is checked before any network call.
    pub async fn submit(&mut self, api: &dyn ResponseApi) -> SubmitResult {
        if !self.can_submit() {
            debug!("access request submit gated");
            return SubmitResult::Gated;
        }

        self.state = WorkflowState::Submitting;
        let request = AccessRequest {
            email: self.email.clone(),
            message: self.message.clone(),
        };

        match api.request_access(&request).await {
            Ok(()) => {
                info!("access request accepted for {}", request.email);
                self.email.clear();
                self.message.clear();
                self.state = WorkflowState::Closed;
                SubmitResult::Accepted
            }
            Err(err) => {
                warn!("access request failed: {}", err);
                self.state = WorkflowState::Open;
                SubmitResult::Failed(err)
            }
        }
    }
}
