//! Player entity shared between the registry, the game container, and
//! reporting consumers.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::PlayerId;

/// A participant in the game.
///
/// Equality is structural, but every consumer keys on [`Player::id`]. The
/// display name is only used for reporting and for the placeholder grouping
/// returned when a player belongs to no alliance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Player {
    /// Identity of the player.
    pub id: PlayerId,
    /// Human-readable display name (e.g. "Germans").
    pub name: String,
}

impl Player {
    /// Create a player with a freshly generated identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: PlayerId::new(),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_name_is_not_same_player() {
        let a = Player::new("Germans");
        let b = Player::new("Germans");
        assert_eq!(a.name, b.name);
        assert_ne!(a.id, b.id);
        assert_ne!(a, b);
    }

    #[test]
    fn player_json_shape() {
        let player = Player::new("Russians");
        let value = serde_json::to_value(&player).ok();
        let name = value
            .as_ref()
            .and_then(|v| v.get("name"))
            .and_then(serde_json::Value::as_str);
        assert_eq!(name, Some("Russians"));
    }
}
