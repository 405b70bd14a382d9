//! Retrograde classification of the move graph.
//!
//! Starts from the boards with a single occupied cell, whose only move takes
//! the last piece, and walks the graph backwards two plies at a time. A board
//! enters the classification when none of its moves reach a board that is
//! already classified, nor another board admitted in the same round.

use std::collections::HashSet;
use std::time::Instant;

use log::debug;
use tactix_core::{Board, Pos};

use crate::graph::MoveGraph;
use crate::stats::SolveStats;

/// Canonical boards that are good to leave to the opponent: whoever moves
/// into one of them wins against any reply.
#[derive(Debug, Clone, Default)]
pub struct Classification {
    boards: HashSet<Board>,
}

impl Classification {
    /// Whether a board (in any orientation) is classified.
    pub fn contains(&self, board: &Board) -> bool {
        self.boards.contains(&board.canonical())
    }

    pub fn len(&self) -> usize {
        self.boards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Board> {
        self.boards.iter()
    }
}

/// Canonical boards of the given size with exactly one occupied cell.
pub fn single_cell_boards(size: u8) -> HashSet<Board> {
    Pos::all(size)
        .map(|pos| Board::from_cells(size, [pos]).canonical())
        .collect()
}

/// Backward fixpoint solver.
pub struct Solver {
    pub stats: SolveStats,
}

impl Solver {
    pub fn new() -> Self {
        Self {
            stats: SolveStats::new(),
        }
    }

    /// Classify every board of the graph.
    ///
    /// The classification only grows; each board is added at most once and
    /// the loop ends when a round admits nothing.
    pub fn solve(&mut self, graph: &MoveGraph) -> Classification {
        let start = Instant::now();

        let mut known = single_cell_boards(graph.size());
        let mut frontier = known.clone();
        self.stats.seeds = known.len();

        while !frontier.is_empty() {
            let candidates: HashSet<Board> = frontier
                .iter()
                .flat_map(|board| graph.backward(board))
                .flat_map(|board| graph.backward(board))
                .filter(|board| !known.contains(*board))
                .copied()
                .collect();

            let stage1: HashSet<Board> = candidates
                .iter()
                .filter(|board| graph.forward(board).all(|next| !known.contains(next)))
                .copied()
                .collect();

            frontier = stage1
                .iter()
                .filter(|board| graph.forward(board).all(|next| !stage1.contains(next)))
                .copied()
                .collect();

            known.extend(frontier.iter().copied());

            debug!(
                "round {}: {} candidates, {} stage1, {} committed",
                self.stats.rounds.len() + 1,
                candidates.len(),
                stage1.len(),
                frontier.len()
            );
            self.stats
                .record_round(candidates.len(), stage1.len(), frontier.len(), known.len());
        }

        self.stats.solve_time = start.elapsed();
        Classification { boards: known }
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}
