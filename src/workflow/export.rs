//! PDF report export.
//!
//! At most one export may be in flight per coordinator; re-entrant triggers
//! are no-ops until the current one settles (single-flight, not a queue).
//! The payload is staged in a transient temp file and persisted under the
//! deterministic report filename; the staging handle never outlives the
//! call. Export failure leaves the primary view state untouched.

use crate::api::{ApiError, ResponseApi};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, info};

/// Deterministic filename for an exported report.
pub fn report_filename(id: &str) -> String {
    format!("checklist-report-{}.pdf", id)
}

/// Where exported bytes end up. Injected so tests can capture saves.
pub trait DownloadSink: Send + Sync {
    /// Save the payload under `filename` and return the final location.
    fn save(&self, bytes: &[u8], filename: &str) -> io::Result<PathBuf>;
}

/// Saves reports into a directory, staging through a temp file so a partial
/// write never lands under the final name.
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl DownloadSink for DirectorySink {
    fn save(&self, bytes: &[u8], filename: &str) -> io::Result<PathBuf> {
        std::fs::create_dir_all(&self.dir)?;
        let mut staging = NamedTempFile::new_in(&self.dir)?;
        staging.write_all(bytes)?;

        let target = self.dir.join(filename);
        // persist consumes the staging handle; nothing transient survives.
        staging.persist(&target).map_err(|e| e.error)?;

        debug!("report persisted to {}", target.display());
        Ok(target)
    }
}

/// Result of an export trigger.
#[derive(Debug, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The report was downloaded and saved at this path.
    Saved(PathBuf),
    /// Another export was already outstanding; no request was issued.
    AlreadyInFlight,
}

/// Failures of a settled export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("failed to save report: {0}")]
    Save(#[from] io::Error),
}

/// Drives the report download and save flow for one record view.
pub struct ExportCoordinator {
    api: Arc<dyn ResponseApi>,
    sink: Arc<dyn DownloadSink>,
    in_flight: AtomicBool,
}

/// Releases the in-flight flag on every settle path.
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl ExportCoordinator {
    pub fn new(api: Arc<dyn ResponseApi>, sink: Arc<dyn DownloadSink>) -> Self {
        Self {
            api,
            sink,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Whether an export is currently outstanding.
    #[allow(dead_code)] // Utility accessor
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Trigger an export for the given record identifier.
    pub async fn export(&self, id: &str) -> Result<ExportOutcome, ExportError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            debug!("export already in flight for this view; ignoring trigger");
            return Ok(ExportOutcome::AlreadyInFlight);
        }
        let _guard = InFlightGuard(&self.in_flight);

        let bytes = self.api.export_pdf(id).await?;
        let path = self.sink.save(&bytes, &report_filename(id))?;

        info!("exported report for {} to {}", id, path.display());
        Ok(ExportOutcome::Saved(path))
    }
}
