//! Tac Tix solver.
//!
//! Builds the graph of every canonical board reachable from the full board,
//! classifies it by retrograde analysis and answers "best move" queries.
//! Taking the last piece loses.

pub mod bot;
pub mod engine;
pub mod error;
pub mod graph;
pub mod solver;
pub mod stats;

pub use bot::{Outcome, Selection};
pub use engine::Engine;
pub use error::{EngineError, EngineResult};
pub use graph::{MoveGraph, Node};
pub use solver::{single_cell_boards, Classification, Solver};
pub use stats::{RoundStats, SolveStats};
