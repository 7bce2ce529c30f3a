//! Alliance membership registry for the Entente game model.
//!
//! Alliances here are bookkeeping labels: they group players for
//! statistics and for alliance-based victory conditions. They do not
//! control who may attack whom.
//!
//! # Modules
//!
//! - [`tracker`] -- The registry ([`AllianceTracker`]) and its setup-only
//!   [`AllianceTrackerBuilder`]
//! - [`stats`] -- Per-alliance totals of a per-player statistic
//! - [`victory`] -- Victory-city requirements evaluated per alliance
//! - [`error`] -- Error types ([`AllianceError`])

pub mod error;
pub mod stats;
pub mod tracker;
pub mod victory;

pub use error::AllianceError;
pub use stats::{AllianceTotals, alliance_total};
pub use tracker::{AllianceTracker, AllianceTrackerBuilder};
pub use victory::{AllianceVictory, VictoryConditions, alliance_city_count, allied_city_count};
