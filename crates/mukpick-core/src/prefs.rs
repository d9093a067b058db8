//! Durable user preferences: the tutorial-completed flag and the last
//! attendance visit, stored as a small JSON file.
//!
//! Attendance is compared by `YYYY-MM-DD` date string: a visit recorded today
//! suppresses the attendance greeting until tomorrow.

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("preference file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("preference file is not valid JSON: {0}")]
    Serde(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prefs {
    #[serde(default)]
    pub tutorial_completed: bool,

    /// Date of the last attendance visit in `YYYY-MM-DD` form.
    #[serde(default)]
    pub attendance_last_visit: Option<String>,
}

impl Prefs {
    /// Loads preferences from `path`. A missing file yields defaults rather
    /// than an error so a fresh install starts clean.
    ///
    /// # Errors
    ///
    /// Returns [`PrefsError`] if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, PrefsError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Writes preferences to `path`, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns [`PrefsError`] on I/O or serialization failure.
    pub fn save(&self, path: &Path) -> Result<(), PrefsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(self)?;
        std::fs::write(path, raw)?;
        Ok(())
    }

    /// Whether the attendance greeting should be shown for `today`.
    ///
    /// True when no visit has been recorded for today's date string.
    #[must_use]
    pub fn should_show_attendance(&self, today: NaiveDate) -> bool {
        self.attendance_last_visit.as_deref() != Some(iso_date(today).as_str())
    }

    /// Records an attendance visit for `today`.
    pub fn record_visit(&mut self, today: NaiveDate) {
        self.attendance_last_visit = Some(iso_date(today));
    }
}

/// Formats a date as `YYYY-MM-DD`.
#[must_use]
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
