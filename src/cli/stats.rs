use std::collections::HashMap;
use std::time::Duration;

use serde::Serialize;

use crate::game::game::Game;

#[derive(Debug, Default, Clone)]
pub struct GameStats {
    pub wins: HashMap<usize, u32>,
    pub scores_by_seat: HashMap<usize, Vec<i32>>,
    pub games: u32,
    pub total_turns: u64,
    pub total_rounds: u64,
    pub total_duration: Duration,
}

impl GameStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_game(&mut self, game: &Game, turns: u64, duration: Duration) {
        self.games += 1;
        self.total_duration += duration;
        self.total_turns += turns;
        self.total_rounds += (game.state.round - 1) as u64;

        *self.wins.entry(game.winner()).or_insert(0) += 1;

        for (seat, score) in game.scores().iter().enumerate() {
            self.scores_by_seat.entry(seat).or_default().push(*score);
        }
    }

    pub fn merge(&mut self, other: GameStats) {
        for (seat, wins) in other.wins {
            *self.wins.entry(seat).or_insert(0) += wins;
        }
        for (seat, scores) in other.scores_by_seat {
            self.scores_by_seat.entry(seat).or_default().extend(scores);
        }
        self.games += other.games;
        self.total_turns += other.total_turns;
        self.total_rounds += other.total_rounds;
        self.total_duration += other.total_duration;
    }

    pub fn get_avg_turns(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_turns as f64 / self.games as f64
    }

    pub fn get_avg_rounds(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_rounds as f64 / self.games as f64
    }

    pub fn get_avg_duration(&self) -> Duration {
        if self.games == 0 {
            return Duration::ZERO;
        }
        self.total_duration / self.games
    }

    pub fn win_rate(&self, seat: usize) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        let wins = self.wins.get(&seat).copied().unwrap_or(0);
        wins as f64 / self.games as f64 * 100.0
    }

    pub fn avg_score(&self, seat: usize) -> f64 {
        self.scores_by_seat
            .get(&seat)
            .filter(|scores| !scores.is_empty())
            .map(|scores| scores.iter().sum::<i32>() as f64 / scores.len() as f64)
            .unwrap_or(0.0)
    }

    pub fn report(&self, num_players: usize) -> SummaryReport {
        SummaryReport {
            games: self.games,
            avg_turns: self.get_avg_turns(),
            avg_rounds: self.get_avg_rounds(),
            seats: (0..num_players)
                .map(|seat| SeatReport {
                    seat,
                    wins: self.wins.get(&seat).copied().unwrap_or(0),
                    win_rate: self.win_rate(seat),
                    avg_score: self.avg_score(seat),
                })
                .collect(),
        }
    }
}

/// Machine-readable summary for `--json` output.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryReport {
    pub games: u32,
    pub avg_turns: f64,
    pub avg_rounds: f64,
    pub seats: Vec<SeatReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeatReport {
    pub seat: usize,
    pub wins: u32,
    pub win_rate: f64,
    pub avg_score: f64,
}

pub struct StatisticsAccumulator {
    pub stats: GameStats,
}

impl StatisticsAccumulator {
    pub fn new() -> Self {
        Self {
            stats: GameStats::new(),
        }
    }

    pub fn after(&mut self, game: &Game, turns: u64, duration: Duration) {
        self.stats.record_game(game, turns, duration);
    }
}

impl Default for StatisticsAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;

    #[test]
    fn records_wins_and_scores() {
        let mut stats = GameStats::new();
        let mut game = Game::new(GameConfig {
            num_players: 3,
            seed: 9,
        })
        .unwrap();
        game.play(2);

        stats.record_game(&game, 40, Duration::from_millis(2));

        assert_eq!(stats.games, 1);
        assert_eq!(stats.total_rounds, 2);
        assert_eq!(stats.wins.values().sum::<u32>(), 1);
        assert_eq!(stats.scores_by_seat.len(), 3);
    }

    #[test]
    fn merge_accumulates() {
        let mut a = GameStats::new();
        let mut b = GameStats::new();
        a.games = 2;
        a.total_turns = 80;
        *a.wins.entry(0).or_insert(0) += 2;
        b.games = 1;
        b.total_turns = 40;
        *b.wins.entry(1).or_insert(0) += 1;

        a.merge(b);

        assert_eq!(a.games, 3);
        assert_eq!(a.total_turns, 120);
        assert_eq!(a.wins[&0], 2);
        assert_eq!(a.wins[&1], 1);
        assert!((a.get_avg_turns() - 40.0).abs() < f64::EPSILON);
    }
}
