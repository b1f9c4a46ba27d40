use crate::error::StoreError;
use chrono::NaiveDate;
use core_types::{CoreError, DailyObservation, FarmProfile, Shed};
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

/// A JSON export of one owner's tables from the hosted backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub profile: FarmProfile,
    pub sheds: Vec<Shed>,
    pub logs: Vec<RawDailyLog>,
}

impl Snapshot {
    /// Reads and parses a snapshot file.
    pub fn from_file(path: &Path) -> Result<Self, StoreError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

/// A daily-log row exactly as exported, before validation.
///
/// Unlike `DailyObservation`, the date is optional here: the export can
/// contain rows that never got a log date, and those are validated out
/// rather than failing the whole snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawDailyLog {
    pub user_id: Uuid,
    pub shed_id: Uuid,
    pub log_date: Option<NaiveDate>,
    pub alive_count: Option<u32>,
    pub dead_count: Option<u32>,
    pub eggs_count: Option<u32>,
    pub offspring_count: Option<u32>,
    pub death_reason: Option<String>,
}

impl RawDailyLog {
    /// Converts a raw row into a domain observation.
    ///
    /// A row with no log date has no grouping key and cannot be bucketed.
    pub fn into_observation(self) -> Result<DailyObservation, CoreError> {
        let log_date = self
            .log_date
            .ok_or_else(|| CoreError::MissingField("log_date".to_string()))?;

        Ok(DailyObservation {
            user_id: self.user_id,
            shed_id: self.shed_id,
            log_date,
            alive_count: self.alive_count,
            dead_count: self.dead_count,
            eggs_count: self.eggs_count,
            offspring_count: self.offspring_count,
            death_reason: self.death_reason,
        })
    }
}
