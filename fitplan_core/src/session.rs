//! Session creation and one-time volume derivation.
//!
//! When a session is recorded without an explicit total volume, the volume is
//! derived from its logs exactly once, here. Everything downstream treats the
//! stored value as fact.

use crate::rounding::round_to_places;
use crate::{Error, ExerciseLog, NewSession, Result, Session};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Sum of `sets * reps * weight` over all logs, rounded to 2 decimals.
/// A log without a weight contributes zero.
pub fn derive_total_volume(logs: &[ExerciseLog]) -> f64 {
    let raw: f64 = logs
        .iter()
        .map(|log| f64::from(log.sets) * f64::from(log.reps) * log.weight.unwrap_or(0.0))
        .sum();
    round_to_places(raw, 2)
}

fn check_rpe(rpe: Option<u8>, what: &str) -> Result<()> {
    match rpe {
        Some(value) if !(1..=10).contains(&value) => Err(Error::InvalidSession(format!(
            "{} RPE {} outside 1-10",
            what, value
        ))),
        _ => Ok(()),
    }
}

impl NewSession {
    /// Reject inputs the store should never hold
    pub fn validate(&self) -> Result<()> {
        check_rpe(self.rpe, "session")?;
        if let Some(volume) = self.total_volume {
            if volume < 0.0 || !volume.is_finite() {
                return Err(Error::InvalidSession(format!(
                    "total volume {} must be a non-negative number",
                    volume
                )));
            }
        }
        for log in &self.logs {
            if log.sets == 0 || log.reps == 0 {
                return Err(Error::InvalidSession(format!(
                    "{}: sets and reps must be at least 1",
                    log.exercise.id
                )));
            }
            if matches!(log.weight, Some(w) if w < 0.0 || !w.is_finite()) {
                return Err(Error::InvalidSession(format!(
                    "{}: weight must be a non-negative number",
                    log.exercise.id
                )));
            }
            check_rpe(log.rpe, &log.exercise.id)?;
        }
        Ok(())
    }
}

impl Session {
    /// Build a session record from its input
    ///
    /// Date defaults to `now`, `completed` defaults to true, and a missing
    /// total volume is derived from the logs when there are any.
    pub fn create(input: NewSession, now: DateTime<Utc>) -> Result<Session> {
        input.validate()?;

        let total_volume = match input.total_volume {
            Some(volume) => Some(volume),
            None if !input.logs.is_empty() => Some(derive_total_volume(&input.logs)),
            None => None,
        };
        if let Some(volume) = total_volume.filter(|v| !v.is_finite()) {
            return Err(Error::InvalidSession(format!(
                "derived total volume {} is out of range",
                volume
            )));
        }

        let session = Session {
            id: Uuid::new_v4(),
            date: input.date.unwrap_or(now),
            workout_id: input.workout_id,
            duration: input.duration,
            total_volume,
            rpe: input.rpe,
            notes: input.notes,
            completed: input.completed.unwrap_or(true),
            logs: input.logs,
        };

        tracing::debug!(
            "Created session {} with {} logs, volume {:?}",
            session.id,
            session.logs.len(),
            session.total_volume
        );
        Ok(session)
    }
}
