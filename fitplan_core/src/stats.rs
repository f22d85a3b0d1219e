//! Training statistics over a user's completed session history.
//!
//! `aggregate` is a pure reduction: the caller supplies the sessions and the
//! current instant, nothing is cached or persisted. Weeks start on Monday at
//! midnight UTC.

use crate::config::StatsConfig;
use crate::rounding::round_to_places;
use crate::{MuscleGroup, Session, TrainingStats};
use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};
use std::collections::BTreeMap;

/// Length of the trailing window used for `sessions_per_week`
pub const TRAILING_WINDOW_DAYS: i64 = 28;

/// Start of the Monday-based week containing `date`, truncated to midnight
pub fn week_start(date: DateTime<Utc>) -> DateTime<Utc> {
    week_start_date(date).and_time(NaiveTime::MIN).and_utc()
}

/// Calendar date of the Monday starting the week containing `date`
pub fn week_start_date(date: DateTime<Utc>) -> NaiveDate {
    let day = date.date_naive();
    day - Duration::days(i64::from(day.weekday().num_days_from_monday()))
}

/// Aggregate statistics over the full supplied history
pub fn aggregate(sessions: &[Session], now: DateTime<Utc>) -> TrainingStats {
    aggregate_with(sessions, now, &StatsConfig::default())
}

/// Aggregate statistics, applying the optional weekly volume window
///
/// `sessions` are expected to be completed sessions, newest first. Order only
/// matters for the muscle group tie-break.
pub fn aggregate_with(
    sessions: &[Session],
    now: DateTime<Utc>,
    config: &StatsConfig,
) -> TrainingStats {
    let total_volume: f64 = sessions.iter().map(|s| s.total_volume.unwrap_or(0.0)).sum();
    let total_duration: u64 = sessions
        .iter()
        .map(|s| u64::from(s.duration.unwrap_or(0)))
        .sum();

    let this_week = week_start(now);
    let next_week = this_week + Duration::days(7);
    let sessions_this_week = sessions
        .iter()
        .filter(|s| s.date >= this_week && s.date < next_week)
        .count();

    let trailing_cutoff = now - Duration::days(TRAILING_WINDOW_DAYS);
    let recent = sessions.iter().filter(|s| s.date >= trailing_cutoff).count();
    let weeks_in_window = (TRAILING_WINDOW_DAYS / 7) as f64;

    let mut weekly_volume = weekly_volume(sessions);
    if let Some(weeks) = config.weekly_volume_weeks {
        let oldest = week_start_date(now) - Duration::weeks(i64::from(weeks.saturating_sub(1)));
        weekly_volume.retain(|week, _| *week >= oldest);
    }

    let stats = TrainingStats {
        total_sessions: sessions.len(),
        sessions_this_week,
        total_volume: round_to_places(total_volume, 2),
        total_duration,
        avg_rpe: average_rpe(sessions),
        sessions_per_week: round_to_places(recent as f64 / weeks_in_window, 1),
        most_worked_muscle: most_worked_muscle(sessions),
        weekly_volume,
    };

    tracing::debug!(
        "Aggregated {} sessions: volume {}, {} this week",
        stats.total_sessions,
        stats.total_volume,
        stats.sessions_this_week
    );
    stats
}

/// Mean RPE over sessions that recorded one, rounded to 1 decimal
fn average_rpe(sessions: &[Session]) -> Option<f64> {
    let rated: Vec<f64> = sessions
        .iter()
        .filter_map(|s| s.rpe)
        .map(f64::from)
        .collect();

    if rated.is_empty() {
        return None;
    }
    let mean = rated.iter().sum::<f64>() / rated.len() as f64;
    Some(round_to_places(mean, 1))
}

/// Muscle group with the most exercise logs
///
/// Counts are kept in first-seen order and a later group only wins with a
/// strictly higher count, so ties go to the group encountered first.
pub fn most_worked_muscle(sessions: &[Session]) -> Option<MuscleGroup> {
    let mut tally: Vec<(MuscleGroup, usize)> = Vec::new();

    for group in sessions
        .iter()
        .flat_map(|s| &s.logs)
        .map(|log| log.exercise.muscle_group)
    {
        match tally.iter_mut().find(|(seen, _)| *seen == group) {
            Some((_, count)) => *count += 1,
            None => tally.push((group, 1)),
        }
    }

    let mut best: Option<(MuscleGroup, usize)> = None;
    for (group, count) in tally {
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((group, count));
        }
    }
    best.map(|(group, _)| group)
}

/// Summed volume per week start over the whole history
fn weekly_volume(sessions: &[Session]) -> BTreeMap<NaiveDate, f64> {
    let mut weeks: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for session in sessions {
        *weeks.entry(week_start_date(session.date)).or_insert(0.0) +=
            session.total_volume.unwrap_or(0.0);
    }
    weeks
}
