// Ranking: descending stat order, stable on ties.

use std::cmp::Reverse;

use crate::roster::{Player, Team};

/// Sort `players` descending by `stat`, where `None` sorts as zero.
///
/// The sort is stable, so players with equal (or both missing) values keep
/// their configured relative order. Lineup selection relies on this for a
/// reproducible "first N".
pub fn rank_by<P, F>(players: &mut [P], stat: F)
where
    F: Fn(&P) -> Option<u32>,
{
    players.sort_by_key(|p| Reverse(stat(p).unwrap_or(0)));
}

/// Rank players by their own attached stat.
pub fn rank_players<P: Player>(players: &mut [P]) {
    rank_by(players, P::stat);
}

/// Rank a team's pitchers and batters independently.
pub fn rank_team(team: &mut Team) {
    rank_players(&mut team.pitchers);
    rank_players(&mut team.batters);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::{Batter, Pitcher, PitcherRole};

    fn batter(name: &str, hr: Option<u32>) -> Batter {
        Batter {
            name: name.into(),
            home_runs: hr,
        }
    }

    fn names(batters: &[Batter]) -> Vec<&str> {
        batters.iter().map(|b| b.name.as_str()).collect()
    }

    #[test]
    fn ranks_descending() {
        let mut batters = vec![
            batter("A", Some(10)),
            batter("B", Some(30)),
            batter("C", Some(20)),
        ];
        rank_players(&mut batters);
        assert_eq!(names(&batters), vec!["B", "C", "A"]);
    }

    #[test]
    fn ties_keep_original_order() {
        let mut batters = vec![
            batter("First", Some(25)),
            batter("Top", Some(40)),
            batter("Second", Some(25)),
            batter("Third", Some(25)),
        ];
        rank_players(&mut batters);
        assert_eq!(names(&batters), vec!["Top", "First", "Second", "Third"]);
    }

    #[test]
    fn missing_sorts_as_zero_and_ties_with_zero() {
        let mut batters = vec![
            batter("Missing", None),
            batter("Zero", Some(0)),
            batter("Some", Some(3)),
            batter("AlsoMissing", None),
        ];
        rank_players(&mut batters);
        assert_eq!(names(&batters), vec!["Some", "Missing", "Zero", "AlsoMissing"]);
        // Ranking does not fill in missing values.
        assert_eq!(batters[1].home_runs, None);
    }

    #[test]
    fn custom_selector() {
        let mut pitchers = vec![
            Pitcher::new("Starter", PitcherRole::Starter),
            Pitcher::new("Reliever", PitcherRole::Reliever),
        ];
        rank_by(&mut pitchers, |p| match p.role {
            PitcherRole::Reliever => Some(1),
            PitcherRole::Starter => None,
        });
        assert_eq!(pitchers[0].name, "Reliever");
    }

    #[test]
    fn team_lists_ranked_independently() {
        let mut team = Team::new(
            "T",
            vec![
                Pitcher {
                    strikeouts: Some(50),
                    ..Pitcher::new("Low", PitcherRole::Starter)
                },
                Pitcher {
                    strikeouts: Some(150),
                    ..Pitcher::new("High", PitcherRole::Reliever)
                },
            ],
            vec![batter("X", Some(1)), batter("Y", Some(2))],
        );
        rank_team(&mut team);
        assert_eq!(team.pitchers[0].name, "High");
        assert_eq!(names(&team.batters), vec!["Y", "X"]);
    }
}
