//! The alliance registry.
//!
//! An alliance is a named grouping; players are added to alliances during
//! game setup. The registry is used for derived bookkeeping only
//! (statistics and alliance victory conditions). It does not decide who is
//! at war with whom -- in-game diplomacy belongs to the relationship
//! tracker.
//!
//! # Invariants
//!
//! - A pair (player, alliance) is present iff it was added through
//!   [`AllianceTrackerBuilder::add_to_alliance`].
//! - A player with no alliances has no entry at all (never an empty set).
//! - Alliance names are compared byte-for-byte: `"Axis"` and `"axis"` are
//!   two different alliances.
//! - Once built, an [`AllianceTracker`] is read-only.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use entente_types::{Player, PlayerId};

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Setup-time interface for populating an [`AllianceTracker`].
///
/// The owning game container creates a builder, records every membership
/// while loading the game, and then freezes it with [`build`]. Nothing else
/// can mutate the relation.
///
/// [`build`]: AllianceTrackerBuilder::build
#[derive(Debug, Clone, Default)]
pub struct AllianceTrackerBuilder {
    alliances: BTreeMap<PlayerId, BTreeSet<String>>,
}

impl AllianceTrackerBuilder {
    /// Create a builder with no memberships.
    pub const fn new() -> Self {
        Self {
            alliances: BTreeMap::new(),
        }
    }

    /// Add `player` to the alliance named `alliance_name`.
    ///
    /// Adding the same pair twice has no further effect. The name is stored
    /// exactly as given, including empty strings.
    pub fn add_to_alliance(
        &mut self,
        player: PlayerId,
        alliance_name: impl Into<String>,
    ) -> &mut Self {
        let alliance_name = alliance_name.into();
        let inserted = self
            .alliances
            .entry(player)
            .or_default()
            .insert(alliance_name.clone());
        if inserted {
            debug!(%player, alliance = %alliance_name, "player added to alliance");
        }
        self
    }

    /// Freeze the recorded memberships into a read-only tracker.
    pub fn build(self) -> AllianceTracker {
        AllianceTracker {
            alliances: self.alliances,
        }
    }
}

// ---------------------------------------------------------------------------
// AllianceTracker
// ---------------------------------------------------------------------------

/// Read-only many-to-many relation between players and alliance names.
///
/// Deserialized snapshots are replayed through [`AllianceTrackerBuilder`],
/// so a snapshot entry with no alliance names is dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TrackerSnapshot")]
pub struct AllianceTracker {
    /// Alliance names keyed by member.
    alliances: BTreeMap<PlayerId, BTreeSet<String>>,
}

/// Wire shape of a serialized [`AllianceTracker`].
#[derive(Deserialize)]
struct TrackerSnapshot {
    #[serde(default)]
    alliances: BTreeMap<PlayerId, BTreeSet<String>>,
}

impl From<TrackerSnapshot> for AllianceTracker {
    fn from(snapshot: TrackerSnapshot) -> Self {
        let mut builder = AllianceTrackerBuilder::new();
        for (player, names) in snapshot.alliances {
            for name in names {
                builder.add_to_alliance(player, name);
            }
        }
        builder.build()
    }
}

impl AllianceTracker {
    /// An empty tracker, for games that do not use alliances.
    pub const fn empty() -> Self {
        Self {
            alliances: BTreeMap::new(),
        }
    }

    /// Start building a tracker.
    pub const fn builder() -> AllianceTrackerBuilder {
        AllianceTrackerBuilder::new()
    }

    /// Every alliance name with at least one member.
    ///
    /// Empty when the game does not use alliances.
    pub fn alliances(&self) -> BTreeSet<String> {
        self.alliances
            .values()
            .flat_map(|names| names.iter().cloned())
            .collect()
    }

    /// Players that were added to `alliance_name`.
    ///
    /// Unknown alliances yield an empty set.
    pub fn players_in_alliance(&self, alliance_name: &str) -> BTreeSet<PlayerId> {
        self.alliances
            .iter()
            .filter(|(_, names)| names.contains(alliance_name))
            .map(|(player, _)| *player)
            .collect()
    }

    /// Alliances `player` belongs to.
    ///
    /// A player in no alliance gets a one-element set holding its own
    /// display name, and a warning is logged. Callers that need to tell the
    /// two cases apart should use [`memberships_of`] instead.
    ///
    /// [`memberships_of`]: AllianceTracker::memberships_of
    pub fn alliances_player_is_in(&self, player: &Player) -> BTreeSet<String> {
        if let Some(names) = self.alliances.get(&player.id) {
            return names.clone();
        }
        warn!(
            player = %player.id,
            name = %player.name,
            "Player, {}, is not a member of any alliance!",
            player.name
        );
        BTreeSet::from([player.name.clone()])
    }

    /// Alliances `player` belongs to, or `None` if it belongs to none.
    pub fn memberships_of(&self, player: PlayerId) -> Option<&BTreeSet<String>> {
        self.alliances.get(&player)
    }

    /// Every player sharing at least one alliance with `player`.
    ///
    /// The player itself is included whenever it is in any alliance. Only
    /// direct co-membership counts: if A and B share one alliance and B and
    /// C share another, A and C are not allies. Empty for a player in no
    /// alliance.
    pub fn allies(&self, player: PlayerId) -> BTreeSet<PlayerId> {
        let Some(own) = self.alliances.get(&player) else {
            return BTreeSet::new();
        };
        self.alliances
            .iter()
            .filter(|(_, names)| !names.is_disjoint(own))
            .map(|(member, _)| *member)
            .collect()
    }

    /// Whether `a` and `b` share at least one alliance.
    pub fn are_allied(&self, a: PlayerId, b: PlayerId) -> bool {
        match (self.alliances.get(&a), self.alliances.get(&b)) {
            (Some(left), Some(right)) => !left.is_disjoint(right),
            _ => false,
        }
    }

    /// Iterate over every member and its alliance names.
    pub fn memberships(&self) -> impl Iterator<Item = (PlayerId, &BTreeSet<String>)> {
        self.alliances.iter().map(|(player, names)| (*player, names))
    }

    /// Number of players in at least one alliance.
    pub fn player_count(&self) -> usize {
        self.alliances.len()
    }

    /// Whether no memberships were recorded.
    pub fn is_empty(&self) -> bool {
        self.alliances.is_empty()
    }
}
