//! Alliance-wide statistics.
//!
//! Sums a per-player figure (total unit value, production, income, ...)
//! over the members of every alliance. A player in two alliances counts
//! toward both; the grand total counts every player once.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use entente_types::PlayerId;

use crate::error::AllianceError;
use crate::tracker::AllianceTracker;

/// Decimal places kept in [`AllianceTotals::share`].
const SHARE_DP: u32 = 4;

/// Per-alliance totals for one statistic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllianceTotals {
    per_alliance: BTreeMap<String, u64>,
    grand_total: u64,
}

impl AllianceTotals {
    /// Aggregate `values` over every alliance in `tracker`.
    ///
    /// Members missing from `values` contribute zero. Entries in `values`
    /// for players outside any alliance still count toward the grand total.
    pub fn compute(
        tracker: &AllianceTracker,
        values: &BTreeMap<PlayerId, u64>,
    ) -> Result<Self, AllianceError> {
        let mut per_alliance = BTreeMap::new();
        for alliance in tracker.alliances() {
            let total = alliance_total(tracker, &alliance, values)?;
            per_alliance.insert(alliance, total);
        }

        let grand_total = checked_sum(values.values().copied(), "grand total")?;

        Ok(Self {
            per_alliance,
            grand_total,
        })
    }

    /// Total for `alliance`, or `None` if it is not a known alliance.
    pub fn total(&self, alliance: &str) -> Option<u64> {
        self.per_alliance.get(alliance).copied()
    }

    /// Sum over every player, each counted once.
    pub const fn grand_total(&self) -> u64 {
        self.grand_total
    }

    /// Fraction of the grand total held by `alliance`, rounded to four
    /// decimal places.
    ///
    /// `None` for unknown alliances and when the grand total is zero.
    pub fn share(&self, alliance: &str) -> Option<Decimal> {
        let total = self.total(alliance)?;
        if self.grand_total == 0 {
            return None;
        }
        Decimal::from(total)
            .checked_div(Decimal::from(self.grand_total))
            .map(|share| share.round_dp(SHARE_DP))
    }

    /// Iterate alliance totals in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.per_alliance
            .iter()
            .map(|(name, total)| (name.as_str(), *total))
    }
}

/// Sum `values` over the members of one alliance.
pub fn alliance_total(
    tracker: &AllianceTracker,
    alliance: &str,
    values: &BTreeMap<PlayerId, u64>,
) -> Result<u64, AllianceError> {
    let members = tracker.players_in_alliance(alliance);
    checked_sum(
        members
            .iter()
            .map(|member| values.get(member).copied().unwrap_or(0)),
        alliance,
    )
}

pub(crate) fn checked_sum(
    values: impl IntoIterator<Item = u64>,
    context: &str,
) -> Result<u64, AllianceError> {
    values.into_iter().try_fold(0_u64, |acc, value| {
        acc.checked_add(value)
            .ok_or_else(|| AllianceError::ArithmeticOverflow {
                context: format!("summing {context}"),
            })
    })
}
