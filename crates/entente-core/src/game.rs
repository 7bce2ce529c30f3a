//! The game-state container.
//!
//! [`GameData`] owns the players and the alliance registry for one game.
//! Collaborators that need alliance queries borrow the registry through
//! [`GameData::alliances`]; there is no global instance.
//!
//! Memberships can only be recorded while the game is assembled in
//! [`GameData::from_config`]. After that the registry is frozen.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use tracing::{debug, info};

use entente_alliances::{
    AllianceTotals, AllianceTracker, AllianceVictory, VictoryConditions, allied_city_count,
};
use entente_types::{Player, PlayerId};

use crate::config::GameConfig;
use crate::error::CoreError;
use crate::players::PlayerRegistry;

/// All state of one game relevant to alliance bookkeeping.
#[derive(Debug, Clone)]
pub struct GameData {
    name: String,
    players: PlayerRegistry,
    alliances: AllianceTracker,
    victory: VictoryConditions,
}

impl GameData {
    /// Assemble a game from its setup configuration.
    ///
    /// Players are created in the order listed, then every alliance entry
    /// is applied. Repeated entries are harmless.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::DuplicatePlayer`] if two players share a name,
    /// or [`CoreError::UnknownPlayer`] if an alliance entry names a player
    /// that is not listed under `players`.
    pub fn from_config(config: &GameConfig) -> Result<Self, CoreError> {
        let mut players = PlayerRegistry::new();
        for name in &config.players {
            players.create_player(name)?;
        }

        let mut builder = AllianceTracker::builder();
        for entry in &config.alliances {
            let id = players.require_id(&entry.player)?;
            builder.add_to_alliance(id, entry.alliance.as_str());
        }
        let alliances = builder.build();

        let victory = VictoryConditions::new(config.victory.cities.clone());

        info!(
            game = %config.game.name,
            players = players.len(),
            alliances = alliances.alliances().len(),
            "game assembled"
        );

        Ok(Self {
            name: config.game.name.clone(),
            players,
            alliances,
            victory,
        })
    }

    /// Game name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The players of this game.
    pub const fn players(&self) -> &PlayerRegistry {
        &self.players
    }

    /// The alliance registry, for statistics and victory consumers.
    pub const fn alliances(&self) -> &AllianceTracker {
        &self.alliances
    }

    /// Alliance victory-city requirements.
    pub const fn victory_conditions(&self) -> &VictoryConditions {
        &self.victory
    }

    /// Display names of every member of `alliance`, sorted.
    pub fn member_names(&self, alliance: &str) -> Vec<String> {
        self.names_of(&self.alliances.players_in_alliance(alliance))
    }

    /// Display names of every ally of the named player, sorted.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownPlayer`] if no player has that name.
    pub fn ally_names(&self, player: &str) -> Result<Vec<String>, CoreError> {
        let id = self.players.require_id(player)?;
        Ok(self.names_of(&self.alliances.allies(id)))
    }

    /// Aggregate a per-player statistic over every alliance.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Alliance`] if a total overflows.
    pub fn alliance_totals(
        &self,
        values: &BTreeMap<PlayerId, u64>,
    ) -> Result<AllianceTotals, CoreError> {
        Ok(AllianceTotals::compute(&self.alliances, values)?)
    }

    /// Alliances that have met their victory-city requirement.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Alliance`] if a city count overflows.
    pub fn alliance_victors(
        &self,
        owned: &BTreeMap<PlayerId, u32>,
    ) -> Result<Vec<AllianceVictory>, CoreError> {
        Ok(self.victory.evaluate(&self.alliances, owned)?)
    }

    /// Victory cities held by the named player together with its allies.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownPlayer`] if no player has that name, or
    /// [`CoreError::Alliance`] if the count overflows.
    pub fn allied_victory_cities(
        &self,
        player: &str,
        owned: &BTreeMap<PlayerId, u32>,
    ) -> Result<u64, CoreError> {
        let id = self.players.require_id(player)?;
        Ok(allied_city_count(&self.alliances, id, owned)?)
    }

    /// Build a serializable summary of every alliance and every player.
    pub fn report(&self) -> AllianceReport {
        let alliances = self
            .alliances
            .alliances()
            .into_iter()
            .map(|name| {
                let members = self.member_names(&name);
                let required_cities = self.victory.required(&name);
                (name, AllianceSummary {
                    members,
                    required_cities,
                })
            })
            .collect();

        let players = self
            .players
            .iter()
            .map(|player| {
                debug!(player = %player.name, "summarizing player");
                PlayerSummary {
                    name: player.name.clone(),
                    alliances: self.alliances.alliances_player_is_in(player),
                    allies: self.names_of(&self.alliances.allies(player.id)),
                }
            })
            .collect();

        AllianceReport {
            game: self.name.clone(),
            alliances,
            players,
        }
    }

    fn names_of(&self, ids: &BTreeSet<PlayerId>) -> Vec<String> {
        let mut names: Vec<String> = ids
            .iter()
            .filter_map(|id| self.players.get(*id))
            .map(|player: &Player| player.name.clone())
            .collect();
        names.sort();
        names
    }
}

/// Serializable view of a game's alliances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllianceReport {
    /// Game name.
    pub game: String,
    /// Every alliance keyed by name.
    pub alliances: BTreeMap<String, AllianceSummary>,
    /// Every player in declaration order.
    pub players: Vec<PlayerSummary>,
}

/// One alliance in an [`AllianceReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllianceSummary {
    /// Member display names, sorted.
    pub members: Vec<String>,
    /// Victory cities required, if the alliance has a victory condition.
    pub required_cities: Option<u32>,
}

/// One player in an [`AllianceReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerSummary {
    /// Display name.
    pub name: String,
    /// Alliances the player is in. A player in no alliance shows its own
    /// name here.
    pub alliances: BTreeSet<String>,
    /// Display names of allies, sorted. Includes the player itself when it
    /// is in any alliance.
    pub allies: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AllianceEntry;

    fn entry(player: &str, alliance: &str) -> AllianceEntry {
        AllianceEntry {
            player: player.to_owned(),
            alliance: alliance.to_owned(),
        }
    }

    #[allow(clippy::panic)]
    fn assemble(cfg: &GameConfig) -> GameData {
        match GameData::from_config(cfg) {
            Ok(game) => game,
            Err(e) => panic!("game setup failed: {e}"),
        }
    }

    fn config(players: &[&str], alliances: Vec<AllianceEntry>) -> GameConfig {
        GameConfig {
            players: players.iter().map(|p| (*p).to_owned()).collect(),
            alliances,
            ..GameConfig::default()
        }
    }

    #[test]
    fn assembles_memberships_from_config() {
        let cfg = config(
            &["Alice", "Bob", "Carol"],
            vec![entry("Alice", "Axis"), entry("Bob", "Axis"), entry("Carol", "Allies")],
        );
        let game = assemble(&cfg);

        assert_eq!(game.member_names("Axis"), vec!["Alice", "Bob"]);
        assert_eq!(game.member_names("Allies"), vec!["Carol"]);
        assert_eq!(
            game.ally_names("Alice").ok(),
            Some(vec!["Alice".to_owned(), "Bob".to_owned()])
        );
        assert_eq!(game.ally_names("Carol").ok(), Some(vec!["Carol".to_owned()]));
    }

    #[test]
    fn unknown_player_in_alliance_entry_is_rejected() {
        let cfg = config(&["Alice"], vec![entry("Mallory", "Axis")]);
        let result = GameData::from_config(&cfg);
        assert!(matches!(result, Err(CoreError::UnknownPlayer(ref n)) if n == "Mallory"));
    }

    #[test]
    fn duplicate_player_is_rejected() {
        let cfg = config(&["Alice", "Alice"], Vec::new());
        assert!(matches!(
            GameData::from_config(&cfg),
            Err(CoreError::DuplicatePlayer(_))
        ));
    }

    #[test]
    fn repeated_entries_are_harmless() {
        let cfg = config(&["Alice"], vec![entry("Alice", "Axis"), entry("Alice", "Axis")]);
        let game = assemble(&cfg);
        assert_eq!(game.member_names("Axis"), vec!["Alice"]);
        assert_eq!(game.alliances().player_count(), 1);
    }

    #[test]
    fn report_shows_placeholder_for_unaligned_player() {
        let cfg = config(&["Alice", "Zed"], vec![entry("Alice", "Axis")]);
        let game = assemble(&cfg);
        let report = game.report();

        let zed = report.players.iter().find(|p| p.name == "Zed");
        assert_eq!(
            zed.map(|p| p.alliances.clone()),
            Some(BTreeSet::from(["Zed".to_owned()]))
        );
        assert_eq!(zed.map(|p| p.allies.len()), Some(0));
        // The placeholder never becomes a real alliance.
        assert!(!report.alliances.contains_key("Zed"));
    }

    #[test]
    fn ally_lookup_of_unknown_name_fails() {
        let game = assemble(&GameConfig::default());
        assert!(matches!(
            game.ally_names("Nobody"),
            Err(CoreError::UnknownPlayer(_))
        ));
    }
}
