//! Game-state container and setup configuration for Entente.
//!
//! This crate owns the lifecycle of the alliance registry: it reads a game
//! setup file, creates the players, records their alliance memberships,
//! and then hands out read-only access to consumers.
//!
//! # Modules
//!
//! - [`config`] -- Setup file loading into strongly-typed structs
//! - [`error`] -- Error types ([`CoreError`])
//! - [`game`] -- The [`GameData`] container and its JSON report
//! - [`players`] -- The [`PlayerRegistry`]

pub mod config;
pub mod error;
pub mod game;
pub mod players;

pub use config::{ConfigError, GameConfig};
pub use error::CoreError;
pub use game::{AllianceReport, AllianceSummary, GameData, PlayerSummary};
pub use players::PlayerRegistry;
