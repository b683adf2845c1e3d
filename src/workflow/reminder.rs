//! One-shot engagement reminder.
//!
//! A single delayed disclosure, not a recurring timer. The countdown is a
//! scoped resource: the spawned task is aborted on disarm and on drop, so
//! it can never fire after teardown and never fires twice.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

/// Default delay before the reminder is disclosed.
pub const DEFAULT_REMINDER_DELAY_MS: u64 = 5000;

#[derive(Debug, Default)]
struct ReminderFlags {
    interacted: AtomicBool,
    shown: AtomicBool,
    dismissed: AtomicBool,
}

/// Schedules the one-shot reminder disclosure, gated on the interaction
/// flag at expiry.
pub struct ReminderScheduler {
    delay: Duration,
    flags: Arc<ReminderFlags>,
    shown_tx: watch::Sender<bool>,
    shown_rx: watch::Receiver<bool>,
    task: Option<JoinHandle<()>>,
}

impl ReminderScheduler {
    pub fn new(delay: Duration) -> Self {
        let (shown_tx, shown_rx) = watch::channel(false);
        Self {
            delay,
            flags: Arc::new(ReminderFlags::default()),
            shown_tx,
            shown_rx,
            task: None,
        }
    }

    /// Start the countdown. Arming is one-shot: a second call while a
    /// countdown is pending or after the banner was shown does nothing.
    pub fn arm(&mut self) {
        if self.task.is_some() || self.flags.shown.load(Ordering::SeqCst) {
            return;
        }

        let flags = Arc::clone(&self.flags);
        let tx = self.shown_tx.clone();
        let delay = self.delay;

        self.task = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if flags.interacted.load(Ordering::SeqCst) {
                debug!("reminder expiry reached after interaction; staying hidden");
                return;
            }
            if flags
                .shown
                .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
                .is_ok()
            {
                debug!("reminder disclosed");
                let _ = tx.send(true);
            }
        }));
    }

    /// Cancel the countdown so it can never fire.
    pub fn disarm(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            debug!("reminder countdown disarmed");
        }
    }

    /// Record a designated interaction. Has no effect once the banner is
    /// already visible.
    pub fn mark_interacted(&self) {
        self.flags.interacted.store(true, Ordering::SeqCst);
    }

    pub fn has_interacted(&self) -> bool {
        self.flags.interacted.load(Ordering::SeqCst)
    }

    /// Explicitly dismiss a visible banner.
    #[allow(dead_code)] // Utility for interactive frontends
    pub fn dismiss(&self) {
        self.flags.dismissed.store(true, Ordering::SeqCst);
    }

    /// Whether the banner is currently visible: disclosed and not yet
    /// dismissed.
    pub fn is_visible(&self) -> bool {
        self.flags.shown.load(Ordering::SeqCst) && !self.flags.dismissed.load(Ordering::SeqCst)
    }

    /// A receiver that observes the hidden -> shown transition.
    #[allow(dead_code)] // Utility for interactive frontends
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.shown_rx.clone()
    }

    /// Wait for the countdown to settle and report banner visibility.
    pub async fn wait(&mut self) -> bool {
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
        self.is_visible()
    }
}

impl Drop for ReminderScheduler {
    fn drop(&mut self) {
        self.disarm();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(DEFAULT_REMINDER_DELAY_MS);

    /// Let expired timers fire and spawned tasks run.
    async fn settle() {
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_hidden_before_expiry_shown_after() {
        let mut scheduler = ReminderScheduler::new(DELAY);
        scheduler.arm();
        // The countdown registers its timer on first poll.
        settle().await;

        tokio::time::advance(Duration::from_millis(4999)).await;
        settle().await;
        assert!(!scheduler.is_visible());

        tokio::time::advance(Duration::from_millis(1)).await;
        settle().await;
        assert!(scheduler.is_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn test_interaction_before_expiry_keeps_banner_hidden() {
        let mut scheduler = ReminderScheduler::new(DELAY);
        scheduler.arm();
        settle().await;

        tokio::time::advance(Duration::from_millis(2000)).await;
        scheduler.mark_interacted();

        tokio::time::advance(Duration::from_millis(3000)).await;
        settle().await;
        assert!(!scheduler.is_visible());

        // And beyond the deadline.
        tokio::time::advance(Duration::from_millis(60_000)).await;
        settle().await;
        assert!(!scheduler.is_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn test_disarm_prevents_disclosure() {
        let mut scheduler = ReminderScheduler::new(DELAY);
        scheduler.arm();
        scheduler.disarm();

        tokio::time::advance(Duration::from_millis(10_000)).await;
        settle().await;
        assert!(!scheduler.is_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn test_arm_is_one_shot() {
        let mut scheduler = ReminderScheduler::new(DELAY);
        let mut rx = scheduler.subscribe();
        scheduler.arm();
        settle().await;

        tokio::time::advance(DELAY).await;
        settle().await;
        assert!(scheduler.is_visible());
        assert!(rx.has_changed().unwrap());
        let _ = rx.borrow_and_update();

        // Re-arming after disclosure must not schedule a second countdown.
        scheduler.arm();
        tokio::time::advance(DELAY).await;
        settle().await;
        assert!(!rx.has_changed().unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn test_late_interaction_does_not_hide_banner() {
        let mut scheduler = ReminderScheduler::new(DELAY);
        scheduler.arm();
        settle().await;

        tokio::time::advance(DELAY).await;
        settle().await;
        assert!(scheduler.is_visible());

        scheduler.mark_interacted();
        assert!(scheduler.is_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismiss_hides_banner() {
        let mut scheduler = ReminderScheduler::new(DELAY);
        scheduler.arm();
        settle().await;

        tokio::time::advance(DELAY).await;
        settle().await;
        assert!(scheduler.is_visible());

        scheduler.dismiss();
        assert!(!scheduler.is_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn test_export_alone_does_not_suppress_disclosure() {
        use crate::api::{ApiError, ResponseApi};
        use crate::models::{AccessRequest, ResponseData};
        use crate::workflow::export::{DownloadSink, ExportCoordinator};
        use async_trait::async_trait;
        use std::path::PathBuf;

        struct StubApi;

        #[async_trait]
        impl ResponseApi for StubApi {
            async fn fetch_response(&self, id: &str) -> Result<ResponseData, ApiError> {
                Err(ApiError::NotFound(id.to_string()))
            }

            async fn export_pdf(&self, _id: &str) -> Result<Vec<u8>, ApiError> {
                Ok(b"%PDF-1.4".to_vec())
            }

            async fn request_access(&self, _request: &AccessRequest) -> Result<(), ApiError> {
                Ok(())
            }
        }

        struct NullSink;

        impl DownloadSink for NullSink {
            fn save(&self, _bytes: &[u8], filename: &str) -> std::io::Result<PathBuf> {
                Ok(PathBuf::from(filename))
            }
        }

        let mut scheduler = ReminderScheduler::new(DELAY);
        scheduler.arm();
        settle().await;

        // Downloading the report is not a designated interaction.
        let coordinator = ExportCoordinator::new(Arc::new(StubApi), Arc::new(NullSink));
        coordinator.export("r1").await.unwrap();
        assert!(!scheduler.has_interacted());

        tokio::time::advance(DELAY).await;
        settle().await;
        assert!(scheduler.is_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_reports_outcome() {
        let mut scheduler = ReminderScheduler::new(DELAY);
        scheduler.arm();

        // No interaction: the wait resolves into a visible banner.
        assert!(scheduler.wait().await);
    }
}
