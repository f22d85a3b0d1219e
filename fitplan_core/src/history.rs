//! Completed session history for statistics.

use crate::store::SessionStore;
use crate::{Result, Session};

/// Load every completed session from the store, newest first
pub fn load_completed_history(store: &impl SessionStore) -> Result<Vec<Session>> {
    let mut sessions: Vec<Session> = store
        .read_all()?
        .into_iter()
        .filter(|s| s.completed)
        .collect();

    // Stable sort keeps append order for sessions sharing a date
    sessions.sort_by(|a, b| b.date.cmp(&a.date));

    tracing::info!("Loaded {} completed sessions", sessions.len());
    Ok(sessions)
}
