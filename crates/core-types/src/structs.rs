use crate::enums::AnimalType;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One day's recorded counts for one shed.
///
/// The backing store keeps at most one row per `(user_id, shed_id, log_date)`;
/// a second write for the same key replaces the first (upsert semantics).
///
/// Counts are unsigned on purpose: negative values are rejected at the
/// deserialization boundary rather than clamped, uniformly for all four
/// count fields. A missing count means "not recorded that day" and is
/// summed as zero, never propagated as null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyObservation {
    pub user_id: Uuid,
    pub shed_id: Uuid,
    pub log_date: NaiveDate,
    pub alive_count: Option<u32>,
    pub dead_count: Option<u32>,
    pub eggs_count: Option<u32>,
    pub offspring_count: Option<u32>,
    pub death_reason: Option<String>,
}

/// A shed: one physical enclosure housing a group of animals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shed {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub location: Option<String>,
    /// Maximum occupancy, if the owner recorded one.
    pub capacity: Option<u32>,
    /// Animals currently housed. Defaults to 0 for a freshly created shed.
    #[serde(default)]
    pub current_occupancy: u32,
    /// Explicitly recorded age of the flock/litter, in days. When absent and
    /// `start_date` is set, age is derived from the start date instead.
    pub age_days: Option<u32>,
    pub vaccinated: bool,
    pub last_vaccination_date: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,
    pub status: Option<String>,
}

/// The descriptive profile an owner fills in at registration.
///
/// Only `animal_type` feeds the metrics engine; the rest is display data
/// carried along for the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FarmProfile {
    pub user_id: Uuid,
    pub full_name: Option<String>,
    pub farm_area: Option<String>,
    pub farm_location: Option<String>,
    pub budget: Option<String>,
    pub animal_type: Option<AnimalType>,
}
