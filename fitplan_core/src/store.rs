//! Session store backed by a JSON Lines file.
//!
//! Each session, derived volume included, is appended as a single line while
//! holding an exclusive file lock, so a record is either fully stored or not
//! at all.

use crate::{Result, Session};
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

/// Session store trait for persisting sessions
pub trait SessionStore {
    fn append(&mut self, session: &Session) -> Result<()>;
    fn read_all(&self) -> Result<Vec<Session>>;
}

/// JSONL-based session store with file locking
pub struct JsonlSessionStore {
    path: PathBuf,
}

impl JsonlSessionStore {
    /// Create a new JSONL store for the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}

impl SessionStore for JsonlSessionStore {
    fn append(&mut self, session: &Session) -> Result<()> {
        self.ensure_parent_dir()?;

        // Serialize before touching the file so a failure writes nothing
        let mut line = serde_json::to_string(session)?;
        line.push('\n');

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.lock_exclusive()?;

        let mut writer = std::io::BufWriter::new(&file);
        writer.write_all(line.as_bytes())?;
        writer.flush()?;
        drop(writer);
        file.sync_data()?;

        file.unlock()?;

        tracing::debug!("Appended session {} to {:?}", session.id, self.path);
        Ok(())
    }

    fn read_all(&self) -> Result<Vec<Session>> {
        read_sessions(&self.path)
    }
}

/// Read all sessions from a JSONL file
///
/// Lines that fail to parse are skipped with a warning.
pub fn read_sessions(path: &Path) -> Result<Vec<Session>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path)?;
    file.lock_shared()?;

    let reader = BufReader::new(&file);
    let mut sessions = Vec::new();

    for (line_num, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<Session>(&line) {
            Ok(session) => sessions.push(session),
            Err(e) => {
                tracing::warn!("Failed to parse session at line {}: {}", line_num + 1, e);
            }
        }
    }

    file.unlock()?;
    tracing::debug!("Read {} sessions from {:?}", sessions.len(), path);
    Ok(sessions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ExerciseLog, ExerciseRef, MuscleGroup, NewSession};
    use chrono::Utc;

    fn create_test_session() -> Session {
        let input = NewSession {
            duration: Some(50),
            rpe: Some(7),
            logs: vec![ExerciseLog {
                exercise: ExerciseRef {
                    id: "bench_press".into(),
                    name: "Bench Press".into(),
                    muscle_group: MuscleGroup::Chest,
                },
                sets: 3,
                reps: 10,
                weight: Some(20.0),
                rpe: None,
                notes: None,
            }],
            ..NewSession::default()
        };
        Session::create(input, Utc::now()).unwrap()
    }

    #[test]
    fn test_append_and_read_single_session() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("sessions.jsonl");

        let session = create_test_session();
        let mut store = JsonlSessionStore::new(&path);
        store.append(&session).unwrap();

        let sessions = store.read_all().unwrap();
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0], session);
        assert_eq!(sessions[0].total_volume, Some(600.0));
    }

    #[test]
    fn test_append_multiple_sessions() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nested/dir/sessions.jsonl");

        let mut store = JsonlSessionStore::new(&path);
        for _ in 0..5 {
            store.append(&create_test_session()).unwrap();
        }

        assert_eq!(read_sessions(&path).unwrap().len(), 5);
    }

    #[test]
    fn test_read_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let sessions = read_sessions(&temp_dir.path().join("nonexistent.jsonl")).unwrap();
        assert!(sessions.is_empty());
    }

    #[test]
    fn test_corrupt_lines_skipped() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("sessions.jsonl");

        let mut store = JsonlSessionStore::new(&path);
        store.append(&create_test_session()).unwrap();
        let mut file = OpenOptions::new().append(true).open(&path).unwrap();
        writeln!(file, "{{ invalid json }}").unwrap();
        writeln!(file, r#"{{"id":"00000000-0000-0000-0000-000000000000","date":"2024"#).unwrap();
        drop(file);
        store.append(&create_test_session()).unwrap();

        assert_eq!(read_sessions(&path).unwrap().len(), 2);
    }

    #[test]
    fn test_parallel_appends_keep_whole_lines() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("sessions.jsonl");

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let path = path.clone();
                std::thread::spawn(move || {
                    let mut store = JsonlSessionStore::new(path);
                    for _ in 0..10 {
                        store.append(&create_test_session()).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let raw = std::fs::read_to_string(&path).unwrap();
        assert_eq!(raw.lines().count(), 80);
        for line in raw.lines() {
            let session: Session = serde_json::from_str(line).unwrap();
            assert_eq!(session.total_volume, Some(600.0));
        }
    }
}
