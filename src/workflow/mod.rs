//! Secondary workflows around the rendered view.
//!
//! Export, access-code request, and the engagement reminder each own their
//! state and failure channel; none of them touches the primary view state.

pub mod access;
pub mod export;
pub mod reminder;

pub use access::{AccessRequestWorkflow, EnvSessionStore, SessionStore, SubmitResult, WorkflowState};
pub use export::{DirectorySink, DownloadSink, ExportCoordinator, ExportOutcome};
pub use reminder::ReminderScheduler;
