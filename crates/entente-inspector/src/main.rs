//! Alliance inspector for Entente game setups.
//!
//! Reads a game setup file, assembles the game, and writes a JSON report
//! of every alliance and every player's allies to stdout.
//!
//! ```text
//! entente-inspector [path/to/setup.yaml]
//! ```
//!
//! The path defaults to `entente-game.yaml` in the working directory. A
//! missing default file is not an error: an empty game is reported. Log
//! verbosity comes from `RUST_LOG`, falling back to `logging.level` in the
//! setup file.

mod error;

use std::path::{Path, PathBuf};

use entente_core::{GameConfig, GameData};
use entente_core::config::LoggingConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::InspectorError;

/// Default setup file name.
const DEFAULT_SETUP: &str = "entente-game.yaml";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let explicit = std::env::args().nth(1).map(PathBuf::from);
    let config = load_config(explicit.as_deref())?;

    init_logging(&config.logging);
    info!(game = %config.game.name, "entente-inspector starting");

    let game = GameData::from_config(&config).map_err(InspectorError::from)?;
    let report = serde_json::to_string_pretty(&game.report()).map_err(InspectorError::from)?;
    println!("{report}");

    info!(
        players = game.players().len(),
        alliances = game.alliances().alliances().len(),
        "report written"
    );
    Ok(())
}

/// Initialize structured logging from `RUST_LOG` or the setup file.
fn init_logging(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);
    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Load the setup file, or defaults when the default file is absent.
///
/// Runs before logging is initialized, so nothing is logged here.
fn load_config(explicit: Option<&Path>) -> Result<GameConfig, InspectorError> {
    if let Some(path) = explicit {
        return Ok(GameConfig::from_file(path)?);
    }
    let default_path = Path::new(DEFAULT_SETUP);
    if default_path.exists() {
        Ok(GameConfig::from_file(default_path)?)
    } else {
        Ok(GameConfig::default())
    }
}
