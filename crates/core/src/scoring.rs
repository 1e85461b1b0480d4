//! Scoring module - team-based aggregation of removed lines
//!
//! Score grows quadratically with the number of lines a player clears at
//! once: the table holds the triangular numbers, so four lines in one tick
//! are worth far more than four singles. Players map onto teams, which is
//! how 2v2 games share one score.

use blockfall_types::MAX_PLAYERS;

use crate::logic::{PlayerLines, Scorer};

/// Points for clearing N lines at once, indexed by N.
const LINE_SCORES: [u32; 17] = [
    0, 1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 66, 78, 91, 105, 120, 136,
];

/// Accumulates per-team scores from the engine's lines-removed reports.
#[derive(Debug, Default)]
pub struct TeamScorer {
    player_to_team: [usize; MAX_PLAYERS],
    team_scores: [u32; MAX_PLAYERS],
}

impl TeamScorer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every player starts on team 0; call this per player for team play.
    pub fn assign_player_to_team(&mut self, player: usize, team: usize) {
        self.player_to_team[player] = team;
    }

    pub fn score_for_team(&self, team: usize) -> u32 {
        self.team_scores[team]
    }
}

impl Scorer for TeamScorer {
    fn lines_removed(&mut self, lines: &PlayerLines) {
        for player in 0..lines.player_count() {
            let cleared = lines.for_player(player).len();
            self.team_scores[self.player_to_team[player]] += LINE_SCORES[cleared];
        }
    }
}
