//! Tac Tix game logic with bit-based board representation.
//!
//! # Board Encoding (64-bit)
//!
//! ```text
//! A board of size N uses the low N*N bits of a u64.
//! Cell (r, c) has index i = r * N + c and lives at bit (N*N - 1 - i),
//! so cell (0, 0) is the most significant used bit.
//!
//! Cell indices for N = 4 (row-major order):
//!   (0,0)=0   (0,1)=1   (0,2)=2   (0,3)=3
//!   (1,0)=4   (1,1)=5   (1,2)=6   (1,3)=7
//!   (2,0)=8   (2,1)=9   (2,2)=10  (2,3)=11
//!   (3,0)=12  (3,1)=13  (3,2)=14  (3,3)=15
//! ```
//!
//! With this layout, comparing two masks of the same size as integers is the
//! same as comparing the row-major cell sequences lexicographically
//! (empty < occupied). The canonical form of a board is the minimum mask
//! across the 8 symmetries of the square.
//!
//! # Moves
//!
//! A move clears a contiguous run of occupied cells starting at one cell and
//! extending to the right along its row or downwards along its column.

use std::collections::HashSet;
use std::fmt;

pub mod notation;

pub use notation::{decode, decode_cells, replay, NotationError, COLUMN_NAMES, ROW_NAMES};

/// Position on the board, zero-based.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Pos {
        Pos { row, col }
    }

    /// Row-major index of this position on a board of the given size.
    #[inline]
    pub fn index(self, size: u8) -> u32 {
        debug_assert!(self.row < size && self.col < size);
        self.row as u32 * size as u32 + self.col as u32
    }

    /// Iterate over all positions of a board of the given size, row-major.
    pub fn all(size: u8) -> impl Iterator<Item = Pos> {
        (0..size).flat_map(move |row| (0..size).map(move |col| Pos::new(row, col)))
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            ROW_NAMES[self.row as usize] as char,
            COLUMN_NAMES[self.col as usize] as char
        )
    }
}

/// Axis a run extends along.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Direction {
    /// Within one row, increasing column.
    Row,
    /// Within one column, increasing row.
    Column,
}

/// A move: clear `len` cells starting at `start`, extending along `direction`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Move {
    pub start: Pos,
    pub len: u8,
    pub direction: Direction,
}

impl Move {
    #[inline]
    pub const fn new(start: Pos, len: u8, direction: Direction) -> Move {
        Move { start, len, direction }
    }

    /// Single-cell move.
    #[inline]
    pub const fn single(pos: Pos) -> Move {
        Move::new(pos, 1, Direction::Row)
    }

    /// The cells cleared by this move, in ascending order.
    pub fn cells(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.len).map(move |k| match self.direction {
            Direction::Row => Pos::new(self.start.row, self.start.col + k),
            Direction::Column => Pos::new(self.start.row + k, self.start.col),
        })
    }

    /// Last cell of the run.
    #[inline]
    pub fn end(&self) -> Pos {
        let k = self.len.saturating_sub(1);
        match self.direction {
            Direction::Row => Pos::new(self.start.row, self.start.col + k),
            Direction::Column => Pos::new(self.start.row + k, self.start.col),
        }
    }

    /// Text notation, e.g. `B2`, `A13` (row run) or `AC2` (column run).
    pub fn notation(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row = |r: u8| ROW_NAMES[r as usize] as char;
        let col = |c: u8| COLUMN_NAMES[c as usize] as char;
        let end = self.end();
        if self.len <= 1 {
            write!(f, "{}", self.start)
        } else {
            match self.direction {
                Direction::Row => write!(f, "{}{}{}", row(self.start.row), col(self.start.col), col(end.col)),
                Direction::Column => write!(f, "{}{}{}", row(self.start.row), row(end.row), col(self.start.col)),
            }
        }
    }
}

/// Compact board state - an occupancy mask plus the grid size.
///
/// See module documentation for encoding details.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct Board {
    size: u8,
    bits: u64,
}

impl Board {
    /// Largest grid whose cells fit in a u64.
    pub const MAX_SIZE: u8 = 8;

    /// Mask with the low `size * size` bits set.
    #[inline]
    fn full_mask(size: u8) -> u64 {
        let cells = size as u32 * size as u32;
        if cells >= 64 {
            u64::MAX
        } else {
            (1u64 << cells) - 1
        }
    }

    /// Bit for a position.
    #[inline]
    fn bit(size: u8, pos: Pos) -> u64 {
        let cells = size as u32 * size as u32;
        1u64 << (cells - 1 - pos.index(size))
    }

    /// The starting position: every cell occupied.
    #[inline]
    pub fn new(size: u8) -> Board {
        Board::full(size)
    }

    /// Every cell occupied.
    #[inline]
    pub fn full(size: u8) -> Board {
        debug_assert!((1..=Self::MAX_SIZE).contains(&size));
        Board { size, bits: Self::full_mask(size) }
    }

    /// Every cell empty.
    #[inline]
    pub fn empty(size: u8) -> Board {
        debug_assert!((1..=Self::MAX_SIZE).contains(&size));
        Board { size, bits: 0 }
    }

    /// Create a board from a raw mask. Bits beyond `size * size` are dropped.
    #[inline]
    pub fn from_bits(size: u8, bits: u64) -> Board {
        debug_assert!((1..=Self::MAX_SIZE).contains(&size));
        Board { size, bits: bits & Self::full_mask(size) }
    }

    /// Board with exactly the given cells occupied.
    pub fn from_cells(size: u8, cells: impl IntoIterator<Item = Pos>) -> Board {
        let mut board = Board::empty(size);
        for pos in cells {
            board.set(pos);
        }
        board
    }

    /// Parse rows of `#` (occupied) and `.` (empty).
    ///
    /// Returns None unless the rows form a square of a supported size.
    pub fn from_rows(rows: &[&str]) -> Option<Board> {
        let size = u8::try_from(rows.len()).ok()?;
        if !(1..=Self::MAX_SIZE).contains(&size) {
            return None;
        }
        let mut board = Board::empty(size);
        for (r, line) in rows.iter().enumerate() {
            if line.chars().count() != size as usize {
                return None;
            }
            for (c, ch) in line.chars().enumerate() {
                match ch {
                    '#' => board.set(Pos::new(r as u8, c as u8)),
                    '.' => {}
                    _ => return None,
                }
            }
        }
        Some(board)
    }

    /// Grid size N.
    #[inline]
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Raw mask.
    #[inline]
    pub fn bits(&self) -> u64 {
        self.bits
    }

    #[inline]
    pub fn is_occupied(&self, pos: Pos) -> bool {
        self.bits & Self::bit(self.size, pos) != 0
    }

    #[inline]
    pub fn set(&mut self, pos: Pos) {
        self.bits |= Self::bit(self.size, pos);
    }

    /// Clear a cell. Clearing an empty cell is a no-op.
    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        self.bits &= !Self::bit(self.size, pos);
    }

    #[inline]
    pub fn occupied_count(&self) -> u32 {
        self.bits.count_ones()
    }

    /// True when no cell is occupied.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Occupied positions, row-major.
    pub fn occupied(&self) -> impl Iterator<Item = Pos> + '_ {
        Pos::all(self.size).filter(move |&pos| self.is_occupied(pos))
    }

    /// Occupancy as row-major rows.
    pub fn rows(&self) -> Vec<Vec<bool>> {
        (0..self.size)
            .map(|r| (0..self.size).map(|c| self.is_occupied(Pos::new(r, c))).collect())
            .collect()
    }

    /// Clear every cell of a move, without canonicalizing and without
    /// checking that the cells were occupied.
    pub fn apply(&self, mov: &Move) -> Board {
        let mut next = *self;
        for pos in mov.cells() {
            next.clear(pos);
        }
        next
    }

    // ========== Move Generation ==========

    /// Cells from `start` (inclusive) to the edge of the board along `direction`.
    fn ray(&self, start: Pos, direction: Direction) -> impl Iterator<Item = Pos> {
        let size = self.size;
        let remaining = match direction {
            Direction::Row => size - start.col,
            Direction::Column => size - start.row,
        };
        (0..remaining).map(move |k| match direction {
            Direction::Row => Pos::new(start.row, start.col + k),
            Direction::Column => Pos::new(start.row + k, start.col),
        })
    }

    /// All legal moves with their canonical resulting boards.
    ///
    /// Moves are scanned row-major by start cell, row runs before column
    /// runs, shortest run first. Only the first move reaching each distinct
    /// canonical board is kept.
    pub fn legal_moves(&self) -> Vec<(Move, Board)> {
        let mut seen = HashSet::new();
        let mut moves = Vec::new();

        for start in self.occupied() {
            for direction in [Direction::Row, Direction::Column] {
                let mut next = *self;
                for (k, pos) in self.ray(start, direction).enumerate() {
                    if !self.is_occupied(pos) {
                        break;
                    }
                    next.clear(pos);
                    let result = next.canonical();
                    if seen.insert(result) {
                        moves.push((Move::new(start, k as u8 + 1, direction), result));
                    }
                }
            }
        }
        moves
    }

    /// Distinct canonical boards reachable in one move.
    pub fn successors(&self) -> HashSet<Board> {
        self.legal_moves().into_iter().map(|(_, result)| result).collect()
    }

    // ========== Symmetry & Canonicalization ==========

    /// Move every occupied cell through `f`.
    fn map_cells(&self, f: impl Fn(Pos) -> Pos) -> Board {
        Board::from_cells(self.size, self.occupied().map(f))
    }

    /// Rotate 90° clockwise: (r, c) -> (c, N-1-r).
    pub fn rotate(&self) -> Board {
        let last = self.size - 1;
        self.map_cells(|p| Pos::new(p.col, last - p.row))
    }

    /// Reflect each row left-to-right: (r, c) -> (r, N-1-c).
    pub fn mirror(&self) -> Board {
        let last = self.size - 1;
        self.map_cells(|p| Pos::new(p.row, last - p.col))
    }

    /// Apply one of the 8 symmetries of the square.
    ///
    /// ```text
    /// 0: identity     4: mirror
    /// 1: rotate       5: mirror ∘ rotate
    /// 2: rotate²      6: mirror ∘ rotate²
    /// 3: rotate³      7: mirror ∘ rotate³
    /// ```
    pub fn transform(&self, t: usize) -> Board {
        debug_assert!(t < 8);
        let mut board = *self;
        for _ in 0..(t % 4) {
            board = board.rotate();
        }
        if t >= 4 {
            board = board.mirror();
        }
        board
    }

    /// Get all 8 symmetry transformations of this board.
    pub fn all_symmetries(&self) -> [Board; 8] {
        let mut result = [*self; 8];
        for (t, slot) in result.iter_mut().enumerate() {
            *slot = self.transform(t);
        }
        result
    }

    /// Get the canonical form of this board.
    ///
    /// The canonical form is the minimum encoding across all 8 transformations,
    /// so symmetric boards map to the same value.
    pub fn canonical(&self) -> Board {
        let mut min = *self;
        for t in 1..8 {
            let transformed = self.transform(t);
            if transformed.bits < min.bits {
                min = transformed;
            }
        }
        min
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.size {
            if r > 0 {
                writeln!(f)?;
            }
            for c in 0..self.size {
                let ch = if self.is_occupied(Pos::new(r, c)) { '#' } else { '.' };
                write!(f, "{}", ch)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: &[&str]) -> Board {
        Board::from_rows(rows).unwrap()
    }

    #[test]
    fn test_full_and_empty() {
        let full = Board::full(4);
        assert_eq!(full.occupied_count(), 16);
        assert_eq!(full.bits(), 0xFFFF);
        assert!(Board::empty(4).is_empty());
        assert_eq!(Board::full(8).bits(), u64::MAX);
        assert_eq!(Board::new(3), Board::full(3));
    }

    #[test]
    fn test_cell_zero_is_most_significant() {
        let b = Board::from_cells(4, [Pos::new(0, 0)]);
        assert_eq!(b.bits(), 1 << 15);
        let b = Board::from_cells(4, [Pos::new(3, 3)]);
        assert_eq!(b.bits(), 1);
    }

    #[test]
    fn test_from_rows() {
        let b = board(&["#.", ".#"]);
        assert!(b.is_occupied(Pos::new(0, 0)));
        assert!(!b.is_occupied(Pos::new(0, 1)));
        assert!(b.is_occupied(Pos::new(1, 1)));
        assert_eq!(b.to_string(), "#.\n.#");

        assert!(Board::from_rows(&["#.", "#"]).is_none());
        assert!(Board::from_rows(&["#x", "##"]).is_none());
        assert!(Board::from_rows(&[]).is_none());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut b = Board::full(3);
        b.clear(Pos::new(1, 1));
        let once = b;
        b.clear(Pos::new(1, 1));
        assert_eq!(b, once);
        assert_eq!(b.occupied_count(), 8);
    }

    #[test]
    fn test_move_cells() {
        let row = Move::new(Pos::new(1, 0), 3, Direction::Row);
        let cells: Vec<Pos> = row.cells().collect();
        assert_eq!(cells, vec![Pos::new(1, 0), Pos::new(1, 1), Pos::new(1, 2)]);

        let col = Move::new(Pos::new(0, 2), 2, Direction::Column);
        let cells: Vec<Pos> = col.cells().collect();
        assert_eq!(cells, vec![Pos::new(0, 2), Pos::new(1, 2)]);
    }

    #[test]
    fn test_move_notation() {
        assert_eq!(Move::single(Pos::new(1, 1)).notation(), "B2");
        assert_eq!(Move::new(Pos::new(1, 1), 1, Direction::Column).notation(), "B2");
        assert_eq!(Move::new(Pos::new(0, 0), 3, Direction::Row).notation(), "A13");
        assert_eq!(Move::new(Pos::new(0, 1), 3, Direction::Column).notation(), "AC2");
    }

    // ========== Symmetry Tests ==========

    #[test]
    fn test_identity_transform() {
        let b = board(&["##..", "#...", "....", "...#"]);
        assert_eq!(b.transform(0), b);
    }

    #[test]
    fn test_rotate_90() {
        // (0,0) -> (0,3)
        let b = Board::from_cells(4, [Pos::new(0, 0)]);
        let rotated = b.rotate();
        assert!(rotated.is_occupied(Pos::new(0, 3)));
        assert_eq!(rotated.occupied_count(), 1);

        // (1,0) -> (0,2)
        let b = Board::from_cells(4, [Pos::new(1, 0)]);
        assert!(b.rotate().is_occupied(Pos::new(0, 2)));
    }

    #[test]
    fn test_rotate_360_identity() {
        let b = board(&["##..", "#...", "..#.", "...#"]);
        let mut current = b;
        for _ in 0..4 {
            current = current.rotate();
        }
        assert_eq!(current, b);
    }

    #[test]
    fn test_mirror() {
        let b = Board::from_cells(4, [Pos::new(2, 0)]);
        let mirrored = b.mirror();
        assert!(mirrored.is_occupied(Pos::new(2, 3)));
        assert_eq!(mirrored.mirror(), b);
    }

    #[test]
    fn test_reflections_are_involutions() {
        let b = board(&["##..", "#...", "..#.", "...."]);
        for t in 4..8 {
            let once = b.transform(t);
            assert_eq!(once.transform(t), b, "Transform {} applied twice should be identity", t);
        }
    }

    #[test]
    fn test_center_invariant_odd_size() {
        let b = Board::from_cells(3, [Pos::new(1, 1)]);
        for t in 0..8 {
            assert_eq!(b.transform(t), b, "Transform {} should preserve center cell", t);
        }
    }

    #[test]
    fn test_all_corners_same_canonical() {
        let corners = [Pos::new(0, 0), Pos::new(0, 3), Pos::new(3, 0), Pos::new(3, 3)];
        let canonicals: Vec<Board> = corners
            .iter()
            .map(|&p| Board::from_cells(4, [p]).canonical())
            .collect();
        for c in &canonicals[1..] {
            assert_eq!(*c, canonicals[0], "All corner positions should have same canonical");
        }
        // The minimum puts the single cell as far right/down as possible.
        assert_eq!(canonicals[0], Board::from_cells(4, [Pos::new(3, 3)]));
    }

    #[test]
    fn test_single_cells_have_three_classes_on_4x4() {
        let classes: HashSet<Board> = Pos::all(4)
            .map(|p| Board::from_cells(4, [p]).canonical())
            .collect();
        // corner, edge, center
        assert_eq!(classes.len(), 3);
    }

    #[test]
    fn test_canonical_is_minimum() {
        let b = board(&["##..", "#...", "....", "...."]);
        let min = b.all_symmetries().iter().map(|s| s.bits()).min().unwrap();
        assert_eq!(b.canonical().bits(), min);
    }

    #[test]
    fn test_canonical_idempotent() {
        let b = board(&["#.#.", "##..", "....", ".#.#"]);
        assert_eq!(b.canonical().canonical(), b.canonical());
    }

    #[test]
    fn test_canonical_preserves_count() {
        let b = board(&["#.#.", "##..", "....", ".#.#"]);
        assert_eq!(b.canonical().occupied_count(), b.occupied_count());
    }

    // ========== Move Generation Tests ==========

    #[test]
    fn test_empty_board_has_no_moves() {
        assert!(Board::empty(4).legal_moves().is_empty());
        assert!(Board::empty(1).legal_moves().is_empty());
    }

    #[test]
    fn test_single_cell_has_one_move_to_empty() {
        let b = Board::from_cells(4, [Pos::new(2, 1)]);
        let moves = b.legal_moves();
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].0.notation(), "C2");
        assert!(moves[0].1.is_empty());
    }

    #[test]
    fn test_full_board_move_counts() {
        let names = |size: u8| -> Vec<String> {
            Board::full(size)
                .legal_moves()
                .iter()
                .map(|(m, _)| m.notation())
                .collect()
        };
        assert_eq!(names(1), vec!["A1"]);
        assert_eq!(names(2), vec!["A1", "A12"]);
        assert_eq!(names(3), vec!["A1", "A12", "A13", "A2", "AB2", "AC2", "B2"]);
        assert_eq!(
            names(4),
            vec!["A1", "A12", "A13", "A14", "A2", "A23", "AB2", "AC2", "AD2", "B2", "B23"]
        );
    }

    #[test]
    fn test_runs_stop_at_gaps() {
        let b = board(&["##.#", "....", "....", "...."]);
        let notations: Vec<String> = b.legal_moves().iter().map(|(m, _)| m.notation()).collect();
        // A12 clears both cells left of the gap; nothing can jump it.
        assert!(notations.contains(&"A12".to_string()));
        assert!(!notations.iter().any(|n| n == "A13" || n == "A14" || n == "A24"));
    }

    #[test]
    fn test_legal_moves_results_are_distinct_and_canonical() {
        let b = board(&["###.", "#.##", ".###", "##.#"]);
        let moves = b.legal_moves();
        let results: HashSet<Board> = moves.iter().map(|&(_, r)| r).collect();
        assert_eq!(results.len(), moves.len());
        for (mov, result) in &moves {
            assert_eq!(result.canonical(), *result);
            assert_eq!(b.apply(mov).canonical(), *result);
            assert_eq!(result.occupied_count() + mov.len as u32, b.occupied_count());
        }
        assert_eq!(b.successors(), results);
    }

    #[test]
    fn test_legal_moves_invariant_under_symmetry() {
        let b = board(&["###.", "#.##", ".#..", "##.#"]);
        let expected = b.successors();
        for t in 0..8 {
            assert_eq!(b.transform(t).successors(), expected, "Transform {}", t);
        }
    }
}
