use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// The per-day sums across all of an owner's sheds.
///
/// Missing counts on individual observations are summed as zero, so these
/// fields are plain integers even though the inputs are optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTotals {
    pub alive: u64,
    pub dead: u64,
    pub eggs: u64,
    pub offspring: u64,
}

impl DailyTotals {
    /// Folds another day's totals into this one.
    pub fn merge(&mut self, other: &DailyTotals) {
        self.alive += other.alive;
        self.dead += other.dead;
        self.eggs += other.eggs;
        self.offspring += other.offspring;
    }
}

/// One point of the bucketed series: a calendar date and that day's totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyBucket {
    pub date: NaiveDate,
    pub totals: DailyTotals,
}

/// One point of the mortality trend chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MortalityPoint {
    pub date: NaiveDate,
    pub rate_pct: Decimal,
}

/// One point of the production chart: raw egg and offspring totals, which
/// the chart plots as separate datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionPoint {
    pub date: NaiveDate,
    pub eggs: u64,
    pub offspring: u64,
}

/// The aggregate numbers behind the dashboard overview cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FarmSummary {
    pub total_sheds: usize,
    /// Sum of `current_occupancy` across all sheds.
    pub total_animals: u64,
    /// The window the totals were accumulated over, in days.
    pub window_days: u32,
    pub totals: DailyTotals,
    pub mortality_rate_pct: Decimal,
    pub production_rate_pct: Decimal,
}

/// Where a shed stands in its vaccination cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VaccinationStatus {
    /// The next vaccination is within seven days (or already overdue).
    DueSoon,
    Scheduled,
}

impl fmt::Display for VaccinationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VaccinationStatus::DueSoon => write!(f, "due-soon"),
            VaccinationStatus::Scheduled => write!(f, "scheduled"),
        }
    }
}

/// The projected next vaccination for one shed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaccinationProjection {
    pub shed_id: Uuid,
    pub shed_name: String,
    pub next_date: NaiveDate,
    /// Signed days from today to `next_date`. Negative means overdue;
    /// callers that care about the overdue distinction must not clamp this
    /// before display.
    pub days_until: i64,
    pub status: VaccinationStatus,
}
