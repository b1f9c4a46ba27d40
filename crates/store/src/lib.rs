//! # FarmPulse Store Crate
//!
//! This crate is the stand-in for the hosted backend the dashboard delegates
//! all persistence to. It offers the same query surface the metrics engine's
//! callers need (observations by owner and date range, sheds by owner) with
//! the same upsert semantics, but keeps everything in memory.
//!
//! ## Architectural Principles
//!
//! - **Layer 3 Adapter:** This crate encapsulates all data-access logic and
//!   provides a clean API to the rest of the application. The engine never
//!   touches it; callers query here first and hand the results to the engine.
//! - **Last-Write-Wins Upsert:** At most one observation exists per
//!   `(owner, shed, date)` key. Writing the same key again replaces the row,
//!   mirroring the hosted backend's documented conflict resolution.
//!
//! ## Public API
//!
//! - `MemoryStore`: the in-memory tables and their access methods.
//! - `Snapshot`: the serde shape of a JSON export of the backend's tables.
//! - `StoreError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod error;
pub mod memory;
pub mod snapshot;

// Re-export the key components to create a clean, public-facing API.
pub use error::StoreError;
pub use memory::MemoryStore;
pub use snapshot::{RawDailyLog, Snapshot};
