//! Solved game for one grid size.

use std::time::Instant;

use log::info;
use tactix_core::Board;

use crate::error::{EngineError, EngineResult};
use crate::graph::MoveGraph;
use crate::solver::{Classification, Solver};
use crate::stats::SolveStats;

/// Move graph and classification for one grid size, built once and
/// read-only afterwards. Share it behind an `Arc` to serve queries
/// concurrently.
#[derive(Debug, Clone)]
pub struct Engine {
    size: u8,
    graph: MoveGraph,
    classification: Classification,
    stats: SolveStats,
}

impl Engine {
    /// Build the graph from the full board of the given size and solve it.
    pub fn new(size: u8) -> EngineResult<Engine> {
        if !(1..=Board::MAX_SIZE).contains(&size) {
            return Err(EngineError::InvalidSize { size });
        }

        info!("Enumerating {}x{} boards...", size, size);
        let start = Instant::now();
        let graph = MoveGraph::build(Board::full(size));
        let build_time = start.elapsed();

        info!("Solving {} boards...", graph.node_count());
        let mut solver = Solver::new();
        let classification = solver.solve(&graph);

        let mut stats = solver.stats;
        stats.nodes = graph.node_count();
        stats.edges = graph.edge_count();
        stats.build_time = build_time;
        stats.log_summary();

        Ok(Engine {
            size,
            graph,
            classification,
            stats,
        })
    }

    #[inline]
    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn graph(&self) -> &MoveGraph {
        &self.graph
    }

    pub fn classification(&self) -> &Classification {
        &self.classification
    }

    pub fn stats(&self) -> &SolveStats {
        &self.stats
    }

    /// Whether the player about to move from `board` loses against best play.
    pub fn is_losing(&self, board: &Board) -> bool {
        self.classification.contains(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_sizes() {
        assert!(matches!(Engine::new(0), Err(EngineError::InvalidSize { size: 0 })));
        assert!(matches!(Engine::new(9), Err(EngineError::InvalidSize { size: 9 })));
        let err = Engine::new(0).unwrap_err();
        assert_eq!(err.to_string(), "grid size must be between 1 and 8, got 0");
    }

    #[test]
    fn test_engine_3x3() {
        let engine = Engine::new(3).unwrap();
        assert_eq!(engine.size(), 3);
        assert_eq!(engine.graph().node_count(), 102);
        assert_eq!(engine.classification().len(), 24);
        assert_eq!(engine.stats().nodes, 102);
        assert_eq!(engine.stats().edges, 599);
        assert_eq!(engine.stats().classified(), 24);
        assert!(!engine.is_losing(&Board::full(3)));
    }

    #[test]
    fn test_is_losing_ignores_orientation() {
        let engine = Engine::new(3).unwrap();
        let corner = Board::from_rows(&["#..", "...", "..."]).unwrap();
        assert!(engine.is_losing(&corner));
        for t in 0..8 {
            assert!(engine.is_losing(&corner.transform(t)));
        }
    }
}
