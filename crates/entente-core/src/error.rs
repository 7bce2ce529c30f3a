//! Error types for the entente-core crate.
//!
//! Setup input is validated here, at the boundary, so that the alliance
//! registry itself never sees a reference to a player that does not exist.

use entente_alliances::AllianceError;

use crate::config::ConfigError;

/// Errors that can occur while assembling or querying game state.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Two players were declared with the same display name.
    #[error("duplicate player name: {0}")]
    DuplicatePlayer(String),

    /// An alliance entry or query referenced a player that was never declared.
    #[error("unknown player: {0}")]
    UnknownPlayer(String),

    /// Loading the setup configuration failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: ConfigError,
    },

    /// An alliance aggregation failed.
    #[error("alliance error: {source}")]
    Alliance {
        /// The underlying alliance error.
        #[from]
        source: AllianceError,
    },
}
