use crate::dates;
use crate::report::{
    DailyBucket, DailyTotals, FarmSummary, MortalityPoint, ProductionPoint, VaccinationProjection,
    VaccinationStatus,
};
use chrono::{Duration, NaiveDate};
use core_types::{AnimalType, DailyObservation, Shed};
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::BTreeMap;

/// Deaths in a single day above this count trigger the high-mortality alert.
pub const DEFAULT_HIGH_MORTALITY_THRESHOLD: u32 = 15;

/// A vaccination whose next date is within this many days counts as due-soon.
pub const DUE_SOON_WITHIN_DAYS: i64 = 7;

/// A stateless calculator for deriving farm metrics from daily observations.
#[derive(Debug, Default)]
pub struct MetricsEngine {}

impl MetricsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Groups observations into per-date totals over an inclusive window.
    ///
    /// Observations outside `[today - window_days, today]` are filtered out.
    /// Within the window, counts are summed across sheds per calendar date,
    /// with missing counts treated as zero. The output is ordered ascending
    /// by date, and dates with no observations are omitted, never
    /// zero-filled: a chart consuming this series sees no point for a day
    /// with no logged data.
    pub fn bucket_by_date(
        &self,
        observations: &[DailyObservation],
        window_days: u32,
        today: NaiveDate,
    ) -> Vec<DailyBucket> {
        let (start, end) = dates::date_range_ending(today, window_days);
        let mut by_date: BTreeMap<NaiveDate, DailyTotals> = BTreeMap::new();

        for obs in observations {
            if obs.log_date < start || obs.log_date > end {
                continue;
            }
            let totals = by_date.entry(obs.log_date).or_default();
            totals.alive += u64::from(obs.alive_count.unwrap_or(0));
            totals.dead += u64::from(obs.dead_count.unwrap_or(0));
            totals.eggs += u64::from(obs.eggs_count.unwrap_or(0));
            totals.offspring += u64::from(obs.offspring_count.unwrap_or(0));
        }

        by_date
            .into_iter()
            .map(|(date, totals)| DailyBucket { date, totals })
            .collect()
    }

    /// Deaths as a percentage of (alive + dead), to one decimal place.
    ///
    /// A zero denominator yields `0`, both for single-day points and for the
    /// aggregate summary rate.
    pub fn mortality_rate(&self, alive: u64, dead: u64) -> Decimal {
        let denom = alive + dead;
        if denom == 0 {
            return Decimal::ZERO;
        }
        round_pct(Decimal::from(dead) / Decimal::from(denom) * Decimal::from(100))
    }

    /// Production as a percentage, to one decimal place.
    ///
    /// Poultry farms count eggs per animal per day over the window; every
    /// other animal type counts offspring per animal. `window_days` is the
    /// span the `totals` were accumulated over; the caller supplies it
    /// explicitly rather than having it recomputed from the bucketed series.
    /// Any zero denominator (including zero occupancy) yields `0`.
    pub fn production_rate(
        &self,
        animal_type: Option<AnimalType>,
        totals: &DailyTotals,
        total_occupancy: u64,
        window_days: u32,
    ) -> Decimal {
        match animal_type {
            Some(AnimalType::Poultry) => {
                let denom = Decimal::from(total_occupancy) * Decimal::from(window_days);
                if denom.is_zero() {
                    return Decimal::ZERO;
                }
                round_pct(Decimal::from(totals.eggs) / denom * Decimal::from(100))
            }
            _ => {
                if total_occupancy == 0 {
                    return Decimal::ZERO;
                }
                round_pct(
                    Decimal::from(totals.offspring) / Decimal::from(total_occupancy)
                        * Decimal::from(100),
                )
            }
        }
    }

    /// Projects the next vaccination date for one shed.
    ///
    /// The interval comes from the farm's animal type (30 days for poultry,
    /// 90 otherwise). A shed with no vaccination history is anchored to
    /// `today`, not to its start date, so it is never immediately overdue;
    /// `days_until` stays signed so already-overdue sheds are visible to
    /// callers that want the distinction.
    pub fn next_vaccination(
        &self,
        shed: &Shed,
        animal_type: Option<AnimalType>,
        today: NaiveDate,
    ) -> VaccinationProjection {
        let interval = animal_type.map_or(90, AnimalType::vaccination_interval_days);
        let anchor = shed.last_vaccination_date.unwrap_or(today);
        let next_date = anchor + Duration::days(interval);
        let days_until = dates::days_between(today, next_date);
        let status = if days_until <= DUE_SOON_WITHIN_DAYS {
            VaccinationStatus::DueSoon
        } else {
            VaccinationStatus::Scheduled
        };

        VaccinationProjection {
            shed_id: shed.id,
            shed_name: shed.name.clone(),
            next_date,
            days_until,
            status,
        }
    }

    /// Projects the vaccination schedule for every shed.
    pub fn vaccination_schedule(
        &self,
        sheds: &[Shed],
        animal_type: Option<AnimalType>,
        today: NaiveDate,
    ) -> Vec<VaccinationProjection> {
        sheds
            .iter()
            .map(|shed| self.next_vaccination(shed, animal_type, today))
            .collect()
    }

    /// Age of a shed's animals in whole days, if it can be known.
    ///
    /// An explicitly recorded `age_days` always wins. Otherwise the age is
    /// derived from `start_date` (floored, clamped to zero). A shed with
    /// neither has an unknown age, which callers must treat as distinct
    /// from an age of zero.
    pub fn derive_age_days(&self, shed: &Shed, as_of: NaiveDate) -> Option<u32> {
        if let Some(age) = shed.age_days {
            return Some(age);
        }
        let start = shed.start_date?;
        Some(dates::days_between(start, as_of).max(0) as u32)
    }

    /// Whether a single day's death count warrants an alert.
    ///
    /// Pure predicate; routing and message formatting belong to the caller.
    pub fn high_mortality_alert(&self, dead_today: u64, threshold: u32) -> bool {
        dead_today > u64::from(threshold)
    }

    /// The per-date mortality rate series for the trend chart.
    pub fn mortality_series(
        &self,
        observations: &[DailyObservation],
        window_days: u32,
        today: NaiveDate,
    ) -> Vec<MortalityPoint> {
        self.bucket_by_date(observations, window_days, today)
            .into_iter()
            .map(|bucket| MortalityPoint {
                date: bucket.date,
                rate_pct: self.mortality_rate(bucket.totals.alive, bucket.totals.dead),
            })
            .collect()
    }

    /// The per-date egg/offspring series for the production chart.
    pub fn production_series(
        &self,
        observations: &[DailyObservation],
        window_days: u32,
        today: NaiveDate,
    ) -> Vec<ProductionPoint> {
        self.bucket_by_date(observations, window_days, today)
            .into_iter()
            .map(|bucket| ProductionPoint {
                date: bucket.date,
                eggs: bucket.totals.eggs,
                offspring: bucket.totals.offspring,
            })
            .collect()
    }

    /// Computes the aggregate numbers behind the dashboard overview cards.
    ///
    /// This is the single code path shared by the dashboard summary and the
    /// analytics summary cards; both rates route through the same bucketing
    /// and rate functions as the charts.
    pub fn summarize(
        &self,
        sheds: &[Shed],
        observations: &[DailyObservation],
        animal_type: Option<AnimalType>,
        window_days: u32,
        today: NaiveDate,
    ) -> FarmSummary {
        let total_animals: u64 = sheds.iter().map(|s| u64::from(s.current_occupancy)).sum();

        let buckets = self.bucket_by_date(observations, window_days, today);
        let mut totals = DailyTotals::default();
        for bucket in &buckets {
            totals.merge(&bucket.totals);
        }

        let summary = FarmSummary {
            total_sheds: sheds.len(),
            total_animals,
            window_days,
            totals,
            mortality_rate_pct: self.mortality_rate(totals.alive, totals.dead),
            production_rate_pct: self.production_rate(
                animal_type,
                &totals,
                total_animals,
                window_days,
            ),
        };

        tracing::debug!(
            sheds = summary.total_sheds,
            animals = summary.total_animals,
            days_with_data = buckets.len(),
            "computed farm summary"
        );

        summary
    }
}

/// Rounds a percentage to one decimal place, half away from zero.
///
/// Rates in this domain are never negative, so this is plain half-up and
/// matches how the dashboard always rounded its percentages.
fn round_pct(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}
