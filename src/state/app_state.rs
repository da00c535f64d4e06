//! Shared application state for the console session

use std::{
    sync::Mutex,
    time::Instant,
};

use chrono::{DateTime, Utc};

use super::SessionState;

/// State shared between the console loop and anything rendering status
///
/// The practice timer itself is not in here: each timer instance is owned
/// exclusively by its task and replaced wholesale when the exercise changes.
#[derive(Debug)]
pub struct AppState {
    /// Progress through the practice plan
    session: Mutex<SessionState>,
    /// When this practice session started
    start_time: Instant,
    /// Last console action, for the status view
    last_action: Mutex<Option<(String, DateTime<Utc>)>>,
}

impl AppState {
    /// Wrap a fresh session
    pub fn new(session: SessionState) -> Self {
        Self {
            session: Mutex::new(session),
            start_time: Instant::now(),
            last_action: Mutex::new(None),
        }
    }

    /// Run a closure against the locked session state
    pub fn with_session<T, F>(&self, f: F) -> Result<T, String>
    where
        F: FnOnce(&mut SessionState) -> T,
    {
        let mut session = self
            .session
            .lock()
            .map_err(|e| format!("failed to lock session state: {}", e))?;
        Ok(f(&mut session))
    }

    /// Remember the most recent console action
    pub fn record_action(&self, action: &str) {
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some((action.to_string(), Utc::now()));
        }
    }

    /// Last console action and when it happened
    pub fn last_action(&self) -> Option<(String, DateTime<Utc>)> {
        self.last_action.lock().ok().and_then(|a| a.clone())
    }

    /// Time practiced so far, as a short human-readable string
    pub fn practice_elapsed(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }
}
