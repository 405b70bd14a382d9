//! Move selection from a game history.

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tactix_core::{replay, Board, Move};

use crate::engine::Engine;
use crate::error::EngineResult;

/// State of the game after the engine's reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// No legal move was left for the engine.
    Loss,
    /// The engine's move cleared the board.
    Win,
    /// The game goes on.
    Continue,
}

/// The engine's reply to a history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    #[serde(rename = "move")]
    pub mov: Option<String>,
    pub outcome: Outcome,
}

impl Engine {
    /// Choose a reply to `history` using the thread-local random source.
    pub fn select<S: AsRef<str>>(&self, history: &[S]) -> EngineResult<Selection> {
        self.select_with(history, &mut rand::rng())
    }

    /// Choose a reply to `history`.
    ///
    /// Picks uniformly among the moves that leave a classified board, or among
    /// all legal moves when none does.
    pub fn select_with<S, R>(&self, history: &[S], rng: &mut R) -> EngineResult<Selection>
    where
        S: AsRef<str>,
        R: Rng,
    {
        let board = replay(history, self.size())?;
        let moves = board.legal_moves();

        if moves.is_empty() {
            return Ok(Selection {
                mov: None,
                outcome: Outcome::Loss,
            });
        }

        let favourable: Vec<(Move, Board)> = moves
            .iter()
            .filter(|(_, result)| self.classification().contains(result))
            .copied()
            .collect();
        debug!(
            "{} legal moves, {} favourable, from\n{}",
            moves.len(),
            favourable.len(),
            board
        );
        let candidates = if favourable.is_empty() { &moves } else { &favourable };

        let (mov, result) = candidates[rng.random_range(0..candidates.len())];
        let outcome = if result.is_empty() {
            Outcome::Win
        } else {
            Outcome::Continue
        };

        Ok(Selection {
            mov: Some(mov.notation()),
            outcome,
        })
    }
}
