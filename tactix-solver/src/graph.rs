//! Forward/backward move graph over canonical boards.

use std::collections::{HashMap, HashSet, VecDeque};

use tactix_core::Board;

/// Edges of one canonical board.
#[derive(Debug, Default, Clone)]
pub struct Node {
    /// Canonical boards reachable in one move.
    pub forward: HashSet<Board>,
    /// Canonical boards that reach this one in one move.
    pub backward: HashSet<Board>,
}

/// Every canonical board reachable from a root, with edges in both directions.
///
/// Built once by breadth-first expansion and read-only afterwards.
#[derive(Debug, Clone)]
pub struct MoveGraph {
    root: Board,
    nodes: HashMap<Board, Node>,
    edges: usize,
}

impl MoveGraph {
    /// Explore everything reachable from `initial`.
    ///
    /// Uses an explicit queue plus a discovered set, so depth is bounded by
    /// memory rather than the call stack.
    pub fn build(initial: Board) -> MoveGraph {
        let root = initial.canonical();
        let mut nodes: HashMap<Board, Node> = HashMap::new();
        let mut edges = 0;

        nodes.insert(root, Node::default());
        let mut queue = VecDeque::from([root]);

        while let Some(board) = queue.pop_front() {
            for (_, child) in board.legal_moves() {
                if !nodes.contains_key(&child) {
                    nodes.insert(child, Node::default());
                    queue.push_back(child);
                }
                if let Some(node) = nodes.get_mut(&board) {
                    if node.forward.insert(child) {
                        edges += 1;
                    }
                }
                if let Some(node) = nodes.get_mut(&child) {
                    node.backward.insert(board);
                }
            }
        }

        MoveGraph { root, nodes, edges }
    }

    /// Canonical form of the board the graph was built from.
    #[inline]
    pub fn root(&self) -> Board {
        self.root
    }

    #[inline]
    pub fn size(&self) -> u8 {
        self.root.size()
    }

    /// Number of canonical boards, including the empty board.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct (board, result) edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges
    }

    #[inline]
    pub fn contains(&self, board: &Board) -> bool {
        self.nodes.contains_key(board)
    }

    pub fn node(&self, board: &Board) -> Option<&Node> {
        self.nodes.get(board)
    }

    /// All canonical boards in the graph, in no particular order.
    pub fn boards(&self) -> impl Iterator<Item = &Board> {
        self.nodes.keys()
    }

    /// Successors of a board. Empty for boards outside the graph.
    pub fn forward<'a>(&'a self, board: &Board) -> impl Iterator<Item = &'a Board> + 'a {
        self.nodes
            .get(board)
            .into_iter()
            .flat_map(|node| node.forward.iter())
    }

    /// Predecessors of a board. Empty for boards outside the graph.
    pub fn backward<'a>(&'a self, board: &Board) -> impl Iterator<Item = &'a Board> + 'a {
        self.nodes
            .get(board)
            .into_iter()
            .flat_map(|node| node.backward.iter())
    }
}
