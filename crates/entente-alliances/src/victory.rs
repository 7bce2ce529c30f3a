//! Alliance victory-city conditions.
//!
//! Each alliance may be given a number of victory cities it must hold to
//! win. Cities owned by any member count for the whole alliance.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use entente_types::PlayerId;

use crate::error::AllianceError;
use crate::stats::checked_sum;
use crate::tracker::AllianceTracker;

/// An alliance that has met its victory-city requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllianceVictory {
    /// Name of the winning alliance.
    pub alliance: String,
    /// Victory cities held by its members.
    pub cities_held: u64,
    /// Victory cities it needed.
    pub cities_required: u32,
}

/// Victory-city requirements keyed by alliance name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VictoryConditions {
    required: BTreeMap<String, u32>,
}

impl VictoryConditions {
    /// Build conditions from alliance name to required city count.
    ///
    /// A requirement of zero would be met by every alliance on turn one, so
    /// such entries are dropped with a warning.
    pub fn new(required: BTreeMap<String, u32>) -> Self {
        let required = required
            .into_iter()
            .filter(|(alliance, count)| {
                if *count == 0 {
                    warn!(alliance = %alliance, "ignoring zero victory-city requirement");
                    false
                } else {
                    true
                }
            })
            .collect();
        Self { required }
    }

    /// Required city count for `alliance`, if it has a condition.
    pub fn required(&self, alliance: &str) -> Option<u32> {
        self.required.get(alliance).copied()
    }

    /// Every alliance that currently holds enough victory cities, in name
    /// order.
    ///
    /// `owned` maps each player to the number of victory cities it holds.
    pub fn evaluate(
        &self,
        tracker: &AllianceTracker,
        owned: &BTreeMap<PlayerId, u32>,
    ) -> Result<Vec<AllianceVictory>, AllianceError> {
        let mut winners = Vec::new();
        for (alliance, &cities_required) in &self.required {
            let cities_held = alliance_city_count(tracker, alliance, owned)?;
            if cities_held >= u64::from(cities_required) {
                info!(
                    alliance = %alliance,
                    cities_held,
                    cities_required,
                    "alliance victory condition met"
                );
                winners.push(AllianceVictory {
                    alliance: alliance.clone(),
                    cities_held,
                    cities_required,
                });
            }
        }
        Ok(winners)
    }
}

/// Victory cities held by the members of `alliance`.
pub fn alliance_city_count(
    tracker: &AllianceTracker,
    alliance: &str,
    owned: &BTreeMap<PlayerId, u32>,
) -> Result<u64, AllianceError> {
    let members = tracker.players_in_alliance(alliance);
    checked_sum(
        members
            .iter()
            .map(|member| owned.get(member).copied().map_or(0, u64::from)),
        alliance,
    )
}

/// Victory cities held by `player` and everyone allied with it.
///
/// Zero for a player in no alliance, even if it owns cities itself.
pub fn allied_city_count(
    tracker: &AllianceTracker,
    player: PlayerId,
    owned: &BTreeMap<PlayerId, u32>,
) -> Result<u64, AllianceError> {
    checked_sum(
        tracker
            .allies(player)
            .iter()
            .map(|ally| owned.get(ally).copied().map_or(0, u64::from)),
        "allied victory cities",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conditions(entries: &[(&str, u32)]) -> VictoryConditions {
        VictoryConditions::new(
            entries
                .iter()
                .map(|(name, count)| ((*name).to_owned(), *count))
                .collect(),
        )
    }

    #[test]
    fn alliance_wins_when_members_hold_enough_cities() {
        let germans = PlayerId::new();
        let japanese = PlayerId::new();
        let russians = PlayerId::new();
        let mut builder = AllianceTracker::builder();
        builder
            .add_to_alliance(germans, "Axis")
            .add_to_alliance(japanese, "Axis")
            .add_to_alliance(russians, "Allies");
        let tracker = builder.build();

        let owned = BTreeMap::from([(germans, 8), (japanese, 5), (russians, 4)]);
        let winners = conditions(&[("Axis", 13), ("Allies", 10)]).evaluate(&tracker, &owned);

        assert_eq!(
            winners.ok(),
            Some(vec![AllianceVictory {
                alliance: "Axis".to_owned(),
                cities_held: 13,
                cities_required: 13,
            }])
        );
    }

    #[test]
    fn memberless_alliance_never_wins() {
        let tracker = AllianceTracker::empty();
        let winners = conditions(&[("Axis", 1)]).evaluate(&tracker, &BTreeMap::new());
        assert_eq!(winners.ok(), Some(Vec::new()));
    }

    #[test]
    fn zero_requirement_is_dropped() {
        let c = conditions(&[("Axis", 0), ("Allies", 3)]);
        assert_eq!(c.required("Axis"), None);
        assert_eq!(c.required("Allies"), Some(3));
    }

    #[test]
    fn allied_count_follows_allies() {
        let a = PlayerId::new();
        let b = PlayerId::new();
        let c = PlayerId::new();
        let loner = PlayerId::new();
        let mut builder = AllianceTracker::builder();
        builder
            .add_to_alliance(a, "Axis")
            .add_to_alliance(b, "Axis")
            .add_to_alliance(c, "Allies");
        let tracker = builder.build();
        let owned = BTreeMap::from([(a, 2), (b, 3), (c, 7), (loner, 4)]);

        assert_eq!(allied_city_count(&tracker, a, &owned).ok(), Some(5));
        assert_eq!(allied_city_count(&tracker, c, &owned).ok(), Some(7));
        assert_eq!(allied_city_count(&tracker, loner, &owned).ok(), Some(0));
    }
}
