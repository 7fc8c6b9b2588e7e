// Stat attachment: join StatIndex values onto roster players by exact name.

use tracing::warn;

use crate::error::ScoringWarning;
use crate::roster::{Player, Team};
use crate::stats::StatIndex;

/// Attach values from `index` to each player in `players`.
///
/// A hit sets the player's stat. A miss leaves it unset and records a
/// `MissingStat` warning; the remaining players are still processed.
pub fn attach_players<P: Player>(
    team_name: &str,
    players: &mut [P],
    index: &StatIndex,
    warnings: &mut Vec<ScoringWarning>,
) {
    debug_assert_eq!(index.kind(), P::STAT, "stat index does not match player kind");
    for player in players.iter_mut() {
        match index.get(player.name()) {
            Some(value) => player.set_stat(value),
            None => {
                warn!(team = team_name, "could not find {} for '{}'", P::STAT, player.name());
                warnings.push(ScoringWarning::MissingStat {
                    team: team_name.to_string(),
                    player: player.name().to_string(),
                    stat: P::STAT,
                });
            }
        }
    }
}

/// Attach strikeouts to a team's pitchers and home runs to its batters.
/// Returns the warnings for players with no matching record.
pub fn attach_team(
    team: &mut Team,
    pitching: &StatIndex,
    batting: &StatIndex,
) -> Vec<ScoringWarning> {
    let mut warnings = Vec::new();
    attach_players(&team.name, &mut team.pitchers, pitching, &mut warnings);
    attach_players(&team.name, &mut team.batters, batting, &mut warnings);
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::{Batter, Pitcher, PitcherRole};
    use crate::stats::StatKind;

    fn team() -> Team {
        Team::new(
            "Aaron",
            vec![
                Pitcher::new("Paul Skenes", PitcherRole::Starter),
                Pitcher::new("Unknown Arm", PitcherRole::Reliever),
            ],
            vec![
                Batter::new("Juan Soto"),
                Batter::new("Jose Ramirez"),
                Batter::new("Kyle Tucker"),
            ],
        )
    }

    #[test]
    fn hits_set_stat_and_misses_stay_unset() {
        let pitching = StatIndex::build(StatKind::Strikeouts, vec![("Paul Skenes", 170)]);
        let batting = StatIndex::build(
            StatKind::HomeRuns,
            vec![("Juan Soto", 41), ("Kyle Tucker", 0)],
        );
        let mut team = team();
        let warnings = attach_team(&mut team, &pitching, &batting);

        assert_eq!(team.pitchers[0].strikeouts, Some(170));
        assert_eq!(team.pitchers[1].strikeouts, None);
        assert_eq!(team.batters[0].home_runs, Some(41));
        assert_eq!(team.batters[1].home_runs, None);
        // An attached zero is distinct from a missing stat.
        assert_eq!(team.batters[2].home_runs, Some(0));

        assert_eq!(
            warnings,
            vec![
                ScoringWarning::MissingStat {
                    team: "Aaron".into(),
                    player: "Unknown Arm".into(),
                    stat: StatKind::Strikeouts,
                },
                ScoringWarning::MissingStat {
                    team: "Aaron".into(),
                    player: "Jose Ramirez".into(),
                    stat: StatKind::HomeRuns,
                },
            ]
        );
    }

    #[test]
    fn attachment_never_drops_players() {
        let empty_k = StatIndex::build(StatKind::Strikeouts, Vec::<(String, u32)>::new());
        let empty_hr = StatIndex::build(StatKind::HomeRuns, Vec::<(String, u32)>::new());
        let mut team = team();
        let warnings = attach_team(&mut team, &empty_k, &empty_hr);

        assert_eq!(team.pitchers.len(), 2);
        assert_eq!(team.batters.len(), 3);
        assert_eq!(warnings.len(), 5);
        assert_eq!(team.pitchers[1].name, "Unknown Arm");
    }

    #[test]
    fn attachment_does_not_touch_used_or_totals() {
        let pitching = StatIndex::build(StatKind::Strikeouts, vec![("Paul Skenes", 170)]);
        let batting = StatIndex::build(StatKind::HomeRuns, vec![("Juan Soto", 41)]);
        let mut team = team();
        attach_team(&mut team, &pitching, &batting);
        assert!(team.pitchers.iter().all(|p| !p.used));
        assert!(team.totals.is_none());
    }
}
