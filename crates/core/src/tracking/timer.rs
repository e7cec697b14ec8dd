//! Tracking timer with an elapsed-seconds ticker
//!
//! At most one session is active. While it runs, a background task publishes
//! whole elapsed seconds once per tick on a watch channel. Stopping cancels the
//! ticker and converts the elapsed time into a [`NewTimeEntry`] of whole
//! minutes; sessions shorter than a minute produce nothing.

use std::time::Duration;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument};
use workboard_domain::constants::{DEFAULT_TIMER_DESCRIPTION, TIMER_TICK_MS};
use workboard_domain::{NewTimeEntry, Result, WorkboardError};

/// A running tracking session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveTimer {
    pub task_id: String,
    pub project_id: String,
    pub description: String,
    pub started_at: DateTime<Utc>,
}

impl ActiveTimer {
    /// Whole seconds since start; 0 if `now` precedes the start.
    pub fn elapsed_seconds(&self, now: DateTime<Utc>) -> u64 {
        u64::try_from((now - self.started_at).num_seconds()).unwrap_or(0)
    }

    pub fn elapsed_minutes(&self, now: DateTime<Utc>) -> i64 {
        (now - self.started_at).num_minutes().max(0)
    }

    /// Entry for the session, or `None` below one minute.
    pub fn into_entry(self, user_id: &str, now: DateTime<Utc>) -> Option<NewTimeEntry> {
        let duration = self.elapsed_minutes(now);
        if duration < 1 {
            return None;
        }
        let description = if self.description.trim().is_empty() {
            DEFAULT_TIMER_DESCRIPTION.to_string()
        } else {
            self.description
        };
        Some(NewTimeEntry {
            task_id: self.task_id,
            project_id: self.project_id,
            user_id: user_id.to_string(),
            date: now.date_naive(),
            duration,
            description,
        })
    }
}

#[derive(Default)]
struct Inner {
    active: Option<ActiveTimer>,
    /// Stops the elapsed-seconds task of the active session
    ticker: Option<CancellationToken>,
}

/// Single-session tracking timer
#[derive(Default)]
pub struct TrackingTimer {
    inner: Mutex<Inner>,
}

impl TrackingTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session now. Must be called from within a Tokio runtime.
    pub fn start(
        &self,
        task_id: &str,
        project_id: &str,
        description: &str,
    ) -> Result<watch::Receiver<u64>> {
        self.start_at(task_id, project_id, description, Utc::now())
    }

    /// Start a session that began at `started_at`.
    #[instrument(skip(self, description))]
    pub fn start_at(
        &self,
        task_id: &str,
        project_id: &str,
        description: &str,
        started_at: DateTime<Utc>,
    ) -> Result<watch::Receiver<u64>> {
        if task_id.trim().is_empty() || project_id.trim().is_empty() {
            return Err(WorkboardError::InvalidInput(
                "timer requires a task and a project".to_string(),
            ));
        }
        let runtime = Handle::try_current()
            .map_err(|err| WorkboardError::Internal(format!("timer needs a tokio runtime: {err}")))?;

        let mut inner = self.inner.lock();
        if inner.active.is_some() {
            return Err(WorkboardError::InvalidInput("a timer is already running".to_string()));
        }

        let session = ActiveTimer {
            task_id: task_id.to_string(),
            project_id: project_id.to_string(),
            description: description.to_string(),
            started_at,
        };
        let (sender, receiver) = watch::channel(session.elapsed_seconds(Utc::now()));
        let cancel = CancellationToken::new();
        runtime.spawn(tick_loop(started_at, sender, cancel.clone()));

        info!(task_id, project_id, "timer started");
        inner.active = Some(session);
        inner.ticker = Some(cancel);
        Ok(receiver)
    }

    /// Stop the session now and return the entry to record, if any.
    pub fn stop(&self, user_id: &str) -> Option<NewTimeEntry> {
        self.stop_at(user_id, Utc::now())
    }

    #[instrument(skip(self))]
    pub fn stop_at(&self, user_id: &str, now: DateTime<Utc>) -> Option<NewTimeEntry> {
        let (session, ticker) = {
            let mut inner = self.inner.lock();
            (inner.active.take(), inner.ticker.take())
        };
        if let Some(ticker) = ticker {
            ticker.cancel();
        }

        let session = session?;
        let entry = session.into_entry(user_id, now);
        match &entry {
            Some(entry) => info!(minutes = entry.duration, "timer stopped"),
            None => debug!("timer stopped under one minute; nothing to record"),
        }
        entry
    }

    /// Drop the running session without producing an entry.
    pub fn cancel(&self) {
        let ticker = {
            let mut inner = self.inner.lock();
            inner.active = None;
            inner.ticker.take()
        };
        if let Some(ticker) = ticker {
            ticker.cancel();
        }
    }

    pub fn is_running(&self) -> bool {
        self.inner.lock().active.is_some()
    }

    pub fn active(&self) -> Option<ActiveTimer> {
        self.inner.lock().active.clone()
    }
}

impl Drop for TrackingTimer {
    fn drop(&mut self) {
        if let Some(ticker) = self.inner.get_mut().ticker.take() {
            ticker.cancel();
        }
    }
}

async fn tick_loop(started_at: DateTime<Utc>, sender: watch::Sender<u64>, cancel: CancellationToken) {
    let mut interval = tokio::time::interval(Duration::from_millis(TIMER_TICK_MS));
    loop {
        tokio::select! {
            () = cancel.cancelled() => {
                debug!("timer ticker cancelled");
                break;
            }
            _ = interval.tick() => {
                let elapsed = u64::try_from((Utc::now() - started_at).num_seconds()).unwrap_or(0);
                if sender.send(elapsed).is_err() {
                    debug!("no elapsed-time listeners left");
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration as ChronoDuration;

    use super::*;

    #[test]
    fn entry_uses_whole_minutes() {
        let start = Utc::now();
        let session = ActiveTimer {
            task_id: "t1".into(),
            project_id: "p1".into(),
            description: String::new(),
            started_at: start,
        };

        assert!(session.clone().into_entry("u1", start + ChronoDuration::seconds(59)).is_none());

        let entry = session.into_entry("u1", start + ChronoDuration::seconds(150)).unwrap();
        assert_eq!(entry.duration, 2);
        assert_eq!(entry.description, "Timer session");
        assert_eq!(entry.user_id, "u1");
    }

    #[tokio::test]
    async fn stop_produces_entry_and_cancels_ticker() {
        let timer = TrackingTimer::new();
        let started = Utc::now() - ChronoDuration::seconds(125);
        let _elapsed = timer.start_at("t1", "p1", "Pairing", started).unwrap();
        assert!(timer.is_running());

        let entry = timer.stop_at("u1", started + ChronoDuration::seconds(125)).unwrap();

        assert_eq!(entry.duration, 2);
        assert_eq!(entry.description, "Pairing");
        assert!(!timer.is_running());
        assert!(timer.stop("u1").is_none());
    }

    #[tokio::test]
    async fn only_one_session_at_a_time() {
        let timer = TrackingTimer::new();
        timer.start("t1", "p1", "").unwrap();
        assert!(matches!(timer.start("t2", "p1", ""), Err(WorkboardError::InvalidInput(_))));
        timer.cancel();
        assert!(timer.start("t2", "p1", "").is_ok());
    }

    #[tokio::test]
    async fn start_requires_task_and_project() {
        let timer = TrackingTimer::new();
        assert!(timer.start("", "p1", "").is_err());
        assert!(timer.start("t1", " ", "").is_err());
        assert!(!timer.is_running());
    }

    #[test]
    fn start_outside_runtime_is_an_error() {
        let timer = TrackingTimer::new();
        assert!(matches!(timer.start("t1", "p1", ""), Err(WorkboardError::Internal(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn ticker_publishes_and_ends_after_stop() {
        let timer = TrackingTimer::new();
        let started = Utc::now() - ChronoDuration::seconds(3);
        let mut elapsed = timer.start_at("t1", "p1", "", started).unwrap();

        elapsed.changed().await.unwrap();
        assert!(*elapsed.borrow_and_update() >= 3);

        timer.cancel();
        // Ticker exits and drops its sender
        tokio::time::timeout(Duration::from_secs(2), async {
            while elapsed.changed().await.is_ok() {}
        })
        .await
        .expect("ticker should close the elapsed channel");
        assert!(elapsed.has_changed().is_err());
    }
}
