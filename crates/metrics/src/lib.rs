//! # FarmPulse Metrics Engine
//!
//! This crate turns a raw stream of per-shed daily observations into the
//! numbers the dashboard shows: time-bucketed mortality and production
//! series, aggregate summary rates, and vaccination schedule projections.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   the backing store or the rendering layer. It depends only on
//!   `core-types` (Layer 0).
//! - **Stateless Calculation:** The `MetricsEngine` is a stateless
//!   calculator. Every method is a total function of its arguments; "today"
//!   is always passed in explicitly so callers (and tests) control the
//!   clock. All zero-denominator cases return `0` by documented policy
//!   rather than erroring.
//!
//! ## Public API
//!
//! - `MetricsEngine`: The main struct that contains the calculation logic.
//! - `FarmSummary`, `DailyBucket`, `MortalityPoint`, `ProductionPoint`,
//!   `VaccinationProjection`: the standardized output structs.
//! - `dates`: the two date helpers all today-relative math routes through.

// Declare the modules that constitute this crate.
pub mod dates;
pub mod engine;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::{DEFAULT_HIGH_MORTALITY_THRESHOLD, DUE_SOON_WITHIN_DAYS, MetricsEngine};
pub use report::{
    DailyBucket, DailyTotals, FarmSummary, MortalityPoint, ProductionPoint, VaccinationProjection,
    VaccinationStatus,
};
