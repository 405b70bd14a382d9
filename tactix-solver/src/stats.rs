//! Engine construction statistics.

use std::time::Duration;

use log::info;

/// Sizes of one backward round of the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoundStats {
    /// Unclassified boards two moves before the previous round's frontier.
    pub candidates: usize,
    /// Candidates with no move into an already classified board.
    pub stage1: usize,
    /// Boards added to the classification this round.
    pub committed: usize,
    /// Classification size after the round.
    pub known_won: usize,
}

/// Statistics collected while building and solving the move graph.
#[derive(Debug, Default, Clone)]
pub struct SolveStats {
    /// Canonical boards in the graph
    pub nodes: usize,

    /// Distinct edges in the graph
    pub edges: usize,

    /// Seed boards (one occupied cell)
    pub seeds: usize,

    /// One entry per backward round, including the final empty one
    pub rounds: Vec<RoundStats>,

    pub build_time: Duration,
    pub solve_time: Duration,
}

impl SolveStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished round.
    pub fn record_round(&mut self, candidates: usize, stage1: usize, committed: usize, known_won: usize) {
        self.rounds.push(RoundStats {
            candidates,
            stage1,
            committed,
            known_won,
        });
    }

    /// Final classification size.
    pub fn classified(&self) -> usize {
        self.rounds.last().map_or(self.seeds, |round| round.known_won)
    }

    /// Log one line per round.
    pub fn log_rounds(&self) {
        for (i, round) in self.rounds.iter().enumerate() {
            info!(
                "round {:>2}: {:>7} candidates | {:>7} stage1 | {:>6} committed | {:>7} known",
                i + 1,
                format_count(round.candidates as u64),
                format_count(round.stage1 as u64),
                format_count(round.committed as u64),
                format_count(round.known_won as u64),
            );
        }
    }

    /// Log a summary.
    pub fn log_summary(&self) {
        info!(
            "graph: {} boards, {} edges in {:.3}s",
            format_count(self.nodes as u64),
            format_count(self.edges as u64),
            self.build_time.as_secs_f64()
        );
        info!(
            "solve: {} seeds -> {} classified in {} rounds, {:.3}s",
            self.seeds,
            format_count(self.classified() as u64),
            self.rounds.len(),
            self.solve_time.as_secs_f64()
        );
    }
}

/// Format large numbers with K/M suffixes.
pub fn format_count(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.2}M", n as f64 / 1_000_000.0)
    } else if n >= 10_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(9_999), "9999");
        assert_eq!(format_count(135_804), "135.8K");
        assert_eq!(format_count(2_500_000), "2.50M");
    }

    #[test]
    fn test_classified_without_rounds_is_seed_count() {
        let mut stats = SolveStats::new();
        stats.seeds = 3;
        assert_eq!(stats.classified(), 3);
        stats.record_round(10, 5, 2, 5);
        assert_eq!(stats.classified(), 5);
    }
}
