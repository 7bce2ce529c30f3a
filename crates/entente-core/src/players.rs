//! Player registry.
//!
//! Owns every [`Player`] in a game. Display names must be unique so that
//! setup files can refer to players by name; identity is still the
//! [`PlayerId`].

use std::collections::BTreeMap;

use entente_types::{Player, PlayerId};

use crate::error::CoreError;

/// The players of one game, in declaration (turn) order.
#[derive(Debug, Clone, Default)]
pub struct PlayerRegistry {
    players: Vec<Player>,
    /// Position in `players`, keyed by identity.
    by_id: BTreeMap<PlayerId, usize>,
    /// Position in `players`, keyed by display name.
    by_name: BTreeMap<String, usize>,
}

impl PlayerRegistry {
    /// Create an empty registry.
    pub const fn new() -> Self {
        Self {
            players: Vec::new(),
            by_id: BTreeMap::new(),
            by_name: BTreeMap::new(),
        }
    }

    /// Create and register a new player.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::DuplicatePlayer`] if the name is already taken.
    pub fn create_player(&mut self, name: &str) -> Result<PlayerId, CoreError> {
        if self.by_name.contains_key(name) {
            return Err(CoreError::DuplicatePlayer(name.to_owned()));
        }
        let player = Player::new(name);
        let id = player.id;
        let position = self.players.len();
        self.by_id.insert(id, position);
        self.by_name.insert(player.name.clone(), position);
        self.players.push(player);
        Ok(id)
    }

    /// Look up a player by identity.
    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.by_id
            .get(&id)
            .and_then(|position| self.players.get(*position))
    }

    /// Look up a player by display name.
    pub fn by_name(&self, name: &str) -> Option<&Player> {
        self.by_name
            .get(name)
            .and_then(|position| self.players.get(*position))
    }

    /// Resolve a display name to an identity.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownPlayer`] if no player has that name.
    pub fn require_id(&self, name: &str) -> Result<PlayerId, CoreError> {
        self.by_name(name)
            .map(|player| player.id)
            .ok_or_else(|| CoreError::UnknownPlayer(name.to_owned()))
    }

    /// All players in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Number of players.
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Whether no players are registered.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
