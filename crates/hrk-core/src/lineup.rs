// Lineup selection and team aggregation.
//
// Walks a team's ranked pitchers, counting up to `starters` SP and
// `relievers` RP toward the strikeout total, then sums every batter's home
// runs unconditionally.

use serde::{Deserialize, Serialize};

use crate::roster::{PitcherRole, Player, Team};

/// Maximum pitchers of each role whose strikeouts count toward a team total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineupCaps {
    pub starters: usize,
    pub relievers: usize,
}

impl LineupCaps {
    pub const DEFAULT_STARTERS: usize = 5;
    pub const DEFAULT_RELIEVERS: usize = 4;

    fn cap_for(&self, role: PitcherRole) -> usize {
        match role {
            PitcherRole::Starter => self.starters,
            PitcherRole::Reliever => self.relievers,
        }
    }
}

impl Default for LineupCaps {
    fn default() -> Self {
        LineupCaps {
            starters: Self::DEFAULT_STARTERS,
            relievers: Self::DEFAULT_RELIEVERS,
        }
    }
}

/// A team's final category totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TeamTotals {
    pub strikeouts: u32,
    pub home_runs: u32,
}

/// Mark the pitchers that count under `caps`, compute both totals, and record
/// them on the team.
///
/// Expects the pitcher list to be ranked already; selection takes the first
/// eligible pitchers of each role in list order. A team short of a role
/// contributes every pitcher of that role. Empty lists total zero. Totals
/// saturate at `u32::MAX`.
pub fn select_lineup(team: &mut Team, caps: &LineupCaps) -> TeamTotals {
    let mut used_starters = 0;
    let mut used_relievers = 0;
    let mut strikeouts: u32 = 0;

    for pitcher in team.pitchers.iter_mut() {
        let used = match pitcher.role {
            PitcherRole::Starter => &mut used_starters,
            PitcherRole::Reliever => &mut used_relievers,
        };
        if *used < caps.cap_for(pitcher.role) {
            strikeouts = strikeouts.saturating_add(pitcher.stat_or_zero());
            pitcher.used = true;
            *used += 1;
        } else {
            pitcher.used = false;
        }
    }

    let home_runs = team
        .batters
        .iter()
        .map(Player::stat_or_zero)
        .fold(0u32, u32::saturating_add);

    let totals = TeamTotals {
        strikeouts,
        home_runs,
    };
    team.totals = Some(totals);
    totals
}
