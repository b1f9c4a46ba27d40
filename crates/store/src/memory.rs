use crate::snapshot::Snapshot;
use chrono::NaiveDate;
use core_types::{DailyObservation, FarmProfile, Shed};
use std::collections::BTreeMap;
use uuid::Uuid;

/// In-memory tables mirroring the hosted backend's schema.
///
/// Observations are keyed on `(owner, shed, date)` and sheds on
/// `(owner, shed)`, so the upsert-never-duplicate invariant is enforced by
/// the map itself rather than by checks at every call site.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    observations: BTreeMap<(Uuid, Uuid, NaiveDate), DailyObservation>,
    sheds: BTreeMap<(Uuid, Uuid), Shed>,
    profiles: BTreeMap<Uuid, FarmProfile>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from a snapshot export, applying upsert semantics to
    /// every row.
    ///
    /// Log rows without a date are malformed input, not an error: they are
    /// dropped with a warning and counted, and the count is returned so the
    /// caller can surface it.
    pub fn from_snapshot(snapshot: Snapshot) -> (Self, usize) {
        let mut store = Self::new();
        store.put_profile(snapshot.profile);
        for shed in snapshot.sheds {
            store.upsert_shed(shed);
        }

        let mut dropped = 0;
        for raw in snapshot.logs {
            match raw.into_observation() {
                Ok(obs) => store.upsert_observation(obs),
                Err(err) => {
                    tracing::warn!(error = %err, "dropping malformed daily log row");
                    dropped += 1;
                }
            }
        }

        (store, dropped)
    }

    /// Inserts or replaces the observation for its `(owner, shed, date)` key.
    /// Later writes for the same key overwrite the earlier one.
    pub fn upsert_observation(&mut self, obs: DailyObservation) {
        self.observations
            .insert((obs.user_id, obs.shed_id, obs.log_date), obs);
    }

    /// Inserts or replaces a shed record.
    pub fn upsert_shed(&mut self, shed: Shed) {
        self.sheds.insert((shed.user_id, shed.id), shed);
    }

    /// Inserts or replaces an owner's profile.
    pub fn put_profile(&mut self, profile: FarmProfile) {
        self.profiles.insert(profile.user_id, profile);
    }

    pub fn profile_for(&self, owner: Uuid) -> Option<&FarmProfile> {
        self.profiles.get(&owner)
    }

    /// All of an owner's sheds, in stable key order.
    pub fn sheds_for(&self, owner: Uuid) -> Vec<Shed> {
        self.sheds
            .range((owner, Uuid::nil())..=(owner, Uuid::max()))
            .map(|(_, shed)| shed.clone())
            .collect()
    }

    /// An owner's observations with `start <= log_date <= end`, inclusive on
    /// both ends, matching the window queries the dashboard issues.
    pub fn observations_in_window(
        &self,
        owner: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<DailyObservation> {
        self.observations
            .values()
            .filter(|obs| obs.user_id == owner && obs.log_date >= start && obs.log_date <= end)
            .cloned()
            .collect()
    }

    /// Every observation recorded for an owner, across all dates.
    pub fn observations_for(&self, owner: Uuid) -> Vec<DailyObservation> {
        self.observations
            .values()
            .filter(|obs| obs.user_id == owner)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use metrics::MetricsEngine;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn owner() -> Uuid {
        Uuid::from_u128(1)
    }

    fn observation(shed: u128, date: &str, dead: u32) -> DailyObservation {
        DailyObservation {
            user_id: owner(),
            shed_id: Uuid::from_u128(shed),
            log_date: d(date),
            alive_count: Some(100),
            dead_count: Some(dead),
            eggs_count: None,
            offspring_count: None,
            death_reason: None,
        }
    }

    #[test]
    fn upsert_replaces_rather_than_duplicates() {
        let mut store = MemoryStore::new();
        store.upsert_observation(observation(1, "2024-01-01", 5));
        store.upsert_observation(observation(1, "2024-01-01", 9));

        let rows = store.observations_for(owner());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].dead_count, Some(9));
    }

    #[test]
    fn engine_totals_are_stable_under_repeated_upserts() {
        let engine = MetricsEngine::new();
        let today = d("2024-01-20");

        let mut once = MemoryStore::new();
        once.upsert_observation(observation(1, "2024-01-01", 5));

        let mut twice = MemoryStore::new();
        twice.upsert_observation(observation(1, "2024-01-01", 5));
        twice.upsert_observation(observation(1, "2024-01-01", 5));

        let buckets_once = engine.bucket_by_date(&once.observations_for(owner()), 30, today);
        let buckets_twice = engine.bucket_by_date(&twice.observations_for(owner()), 30, today);
        assert_eq!(buckets_once, buckets_twice);
        assert_eq!(buckets_once[0].totals.dead, 5);
    }

    #[test]
    fn same_date_in_different_sheds_stays_distinct() {
        let mut store = MemoryStore::new();
        store.upsert_observation(observation(1, "2024-01-01", 5));
        store.upsert_observation(observation(2, "2024-01-01", 3));

        assert_eq!(store.observations_for(owner()).len(), 2);
    }

    #[test]
    fn window_query_is_inclusive_and_owner_scoped() {
        let mut store = MemoryStore::new();
        store.upsert_observation(observation(1, "2024-01-01", 1));
        store.upsert_observation(observation(1, "2024-01-10", 2));
        store.upsert_observation(observation(1, "2024-01-20", 3));

        let mut foreign = observation(1, "2024-01-10", 4);
        foreign.user_id = Uuid::from_u128(99);
        store.upsert_observation(foreign);

        let rows = store.observations_in_window(owner(), d("2024-01-01"), d("2024-01-10"));
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.user_id == owner()));
    }
}
