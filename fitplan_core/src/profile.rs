//! Profile defaults, range checks and persistence with file locking.
//!
//! The profile is the only per-user state the engine reads. It is saved
//! atomically (temp file + rename) so readers never observe a partial write.

use crate::{Error, Goal, Level, Profile, ResolvedProfile, Result};
use fs2::FileExt;
use std::fs::File;
use std::io::{Read, Write};
use std::ops::RangeInclusive;
use std::path::Path;
use tempfile::NamedTempFile;

pub const DEFAULT_WEIGHT_KG: f64 = 75.0;
pub const DEFAULT_HEIGHT_CM: f64 = 175.0;
pub const DEFAULT_AGE_YEARS: u32 = 25;

pub const WEIGHT_RANGE_KG: RangeInclusive<f64> = 20.0..=500.0;
pub const HEIGHT_RANGE_CM: RangeInclusive<f64> = 50.0..=300.0;
pub const AGE_RANGE_YEARS: RangeInclusive<u32> = 10..=120;

impl Profile {
    /// Apply defaults to every absent field
    pub fn resolve(&self) -> ResolvedProfile {
        ResolvedProfile {
            weight: self.weight.unwrap_or(DEFAULT_WEIGHT_KG),
            height: self.height.unwrap_or(DEFAULT_HEIGHT_CM),
            age: self.age.unwrap_or(DEFAULT_AGE_YEARS),
            goal: self.goal.unwrap_or(Goal::Maintenance),
            level: self.level.unwrap_or(Level::Beginner),
        }
    }

    /// Check numeric fields against their accepted ranges
    ///
    /// Only used where a profile enters the system; the calculators trust
    /// whatever they are given.
    pub fn validate(&self) -> Result<()> {
        if let Some(weight) = self.weight {
            if !WEIGHT_RANGE_KG.contains(&weight) {
                return Err(Error::InvalidProfile(format!(
                    "weight {} kg outside {:?}",
                    weight, WEIGHT_RANGE_KG
                )));
            }
        }
        if let Some(height) = self.height {
            if !HEIGHT_RANGE_CM.contains(&height) {
                return Err(Error::InvalidProfile(format!(
                    "height {} cm outside {:?}",
                    height, HEIGHT_RANGE_CM
                )));
            }
        }
        if let Some(age) = self.age {
            if !AGE_RANGE_YEARS.contains(&age) {
                return Err(Error::InvalidProfile(format!(
                    "age {} outside {:?}",
                    age, AGE_RANGE_YEARS
                )));
            }
        }
        Ok(())
    }

    /// Load a profile from a file with shared locking
    ///
    /// Returns an empty profile (all defaults) if the file doesn't exist or
    /// cannot be parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!("No profile file found, using defaults");
            return Ok(Self::default());
        }

        let file = File::open(path)?;
        file.lock_shared()?;

        let mut contents = String::new();
        let read = std::io::BufReader::new(&file).read_to_string(&mut contents);
        file.unlock()?;

        if let Err(e) = read {
            tracing::warn!("Failed to read profile {:?}: {}. Using defaults.", path, e);
            return Ok(Self::default());
        }

        match serde_json::from_str::<Profile>(&contents) {
            Ok(profile) => {
                tracing::debug!("Loaded profile from {:?}", path);
                Ok(profile)
            }
            Err(e) => {
                tracing::warn!("Failed to parse profile {:?}: {}. Using defaults.", path, e);
                Ok(Self::default())
            }
        }
    }

    /// Save the profile atomically with exclusive locking
    pub fn save(&self, path: &Path) -> Result<()> {
        let parent = path.parent().ok_or_else(|| {
            Error::Other(format!("profile path {:?} has no parent directory", path))
        })?;
        std::fs::create_dir_all(parent)?;

        let temp = NamedTempFile::new_in(parent)?;
        temp.as_file().lock_exclusive()?;

        {
            let mut writer = std::io::BufWriter::new(temp.as_file());
            serde_json::to_writer_pretty(&mut writer, self)?;
            writer.flush()?;
        }

        temp.as_file().sync_all()?;
        temp.as_file().unlock()?;
        temp.persist(path).map_err(|e| Error::Io(e.error))?;

        tracing::debug!("Saved profile to {:?}", path);
        Ok(())
    }

    /// Load, modify and save the profile
    pub fn update<F>(path: &Path, f: F) -> Result<Self>
    where
        F: FnOnce(&mut Profile) -> Result<()>,
    {
        let mut profile = Self::load(path)?;
        f(&mut profile)?;
        profile.save(path)?;
        Ok(profile)
    }
}
