//! Edge-reachability search and win detection.
//!
//! The core question after every placed stone is: does that stone belong to
//! a chain of same-mark cells spanning its player's two opposite board
//! edges? Each half of that question is answered by a depth-first,
//! stack-driven traversal over the hex adjacency defined in
//! [`crate::engine::Grid::hex_neighbors`].
use crate::engine::{Grid, Mark};
use std::collections::HashSet;

/// One border of the grid, used as the target predicate of a reachability
/// search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    /// Row 0.
    Top,
    /// Row `height - 1`.
    Bottom,
    /// Column 0.
    Left,
    /// Column `width - 1`.
    Right,
}

impl Edge {
    /// Returns true iff `(row, col)` lies on this edge of `grid`.
    pub fn contains(&self, grid: &Grid, row: usize, col: usize) -> bool {
        match self {
            Edge::Top => row == 0,
            Edge::Bottom => row == grid.height() - 1,
            Edge::Left => col == 0,
            Edge::Right => col == grid.width() - 1,
        }
    }

    /// Returns the pair of opposite edges `mark` must connect to win:
    /// top/bottom for X, left/right for O.
    pub fn pair_for(mark: Mark) -> (Edge, Edge) {
        match mark {
            Mark::X => (Edge::Top, Edge::Bottom),
            Mark::O => (Edge::Left, Edge::Right),
        }
    }
}

/// The ephemeral state of one reachability search: a work stack of pending
/// coordinates and a set of coordinates ever pushed.
///
/// A coordinate enters the stack at most once over the frontier's lifetime;
/// [`SearchFrontier::push`] is gated on first insertion into the visited
/// set, regardless of whether the coordinate was popped yet. This bounds
/// the traversal to one visit per cell and guarantees termination.
///
/// A frontier is built fresh for every search and never shared between the
/// two searches of one win check.
#[derive(Debug, Default)]
pub struct SearchFrontier {
    stack: Vec<(usize, usize)>,
    visited: HashSet<(usize, usize)>,
}

impl SearchFrontier {
    /// Creates a frontier holding only the seed cell.
    pub fn seeded(row: usize, col: usize) -> Self {
        let mut frontier = SearchFrontier::default();
        frontier.push(row, col);
        frontier
    }

    /// Schedules `(row, col)` for visiting unless it was already pushed at
    /// some point.
    pub fn push(&mut self, row: usize, col: usize) {
        if self.visited.insert((row, col)) {
            self.stack.push((row, col));
        }
    }

    /// Removes and returns the most recently pushed pending coordinate.
    pub fn pop(&mut self) -> Option<(usize, usize)> {
        self.stack.pop()
    }
}

/// Reports whether some cell satisfying `edge` is reachable from `seed`
/// through a chain of cells all holding `mark`.
///
/// The seed must already hold `mark` (it is the freshly placed stone).
/// The traversal is depth first: pop a cell, succeed if it lies on the
/// target edge, otherwise push its unvisited same-mark neighbors.
pub fn edge_reachable(grid: &Grid, seed: (usize, usize), mark: Mark, edge: Edge) -> bool {
    let mut frontier = SearchFrontier::seeded(seed.0, seed.1);
    while let Some((row, col)) = frontier.pop() {
        if edge.contains(grid, row, col) && grid.get(row, col) == Some(mark) {
            return true;
        }
        for (nr, nc) in grid.hex_neighbors(row, col) {
            if grid.get(nr, nc) == Some(mark) {
                frontier.push(nr, nc);
            }
        }
    }
    false
}

/// Decides whether the stone just placed at `(row, col)` wins the game for
/// `mark`: both of the player's edges must be reachable from it.
///
/// The two queries run on independently constructed frontiers seeded from
/// the same cell. Reusing the first search's visited state would
/// incorrectly prune the second, since the chains to the two edges need
/// not pass through the same intermediate cells.
pub fn is_winning_placement(grid: &Grid, row: usize, col: usize, mark: Mark) -> bool {
    let (near, far) = Edge::pair_for(mark);
    edge_reachable(grid, (row, col), mark, near) && edge_reachable(grid, (row, col), mark, far)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::grid_from_rows;

    #[test]
    fn test_frontier_dedup_before_pop() {
        let mut frontier = SearchFrontier::seeded(1, 1);
        frontier.push(2, 2);
        frontier.push(2, 2); // second push ignored, cell was never popped
        assert_eq!(frontier.pop(), Some((2, 2)));
        assert_eq!(frontier.pop(), Some((1, 1)));
        assert_eq!(frontier.pop(), None);
    }

    #[test]
    fn test_frontier_dedup_after_pop() {
        let mut frontier = SearchFrontier::seeded(0, 0);
        assert_eq!(frontier.pop(), Some((0, 0)));
        frontier.push(0, 0); // already visited, never re-enters the stack
        assert_eq!(frontier.pop(), None);
    }

    #[test]
    fn test_edge_contains() {
        let grid = grid_from_rows(&["...", "...", "..."]).unwrap();
        assert!(Edge::Top.contains(&grid, 0, 1));
        assert!(!Edge::Top.contains(&grid, 1, 1));
        assert!(Edge::Bottom.contains(&grid, 2, 0));
        assert!(Edge::Left.contains(&grid, 1, 0));
        assert!(Edge::Right.contains(&grid, 1, 2));
        assert!(!Edge::Right.contains(&grid, 1, 1));
    }

    #[test]
    fn test_single_stone_reaches_only_its_own_edges() {
        let grid = grid_from_rows(&["X..", "...", "..."]).unwrap();
        assert!(edge_reachable(&grid, (0, 0), Mark::X, Edge::Top));
        assert!(edge_reachable(&grid, (0, 0), Mark::X, Edge::Left));
        assert!(!edge_reachable(&grid, (0, 0), Mark::X, Edge::Bottom));
        assert!(!edge_reachable(&grid, (0, 0), Mark::X, Edge::Right));
    }

    #[test]
    fn test_straight_column_spans_top_to_bottom() {
        let grid = grid_from_rows(&["X..", "X..", "X.."]).unwrap();
        assert!(is_winning_placement(&grid, 2, 0, Mark::X));
        assert!(is_winning_placement(&grid, 0, 0, Mark::X)); // seed anywhere on the chain
        assert!(is_winning_placement(&grid, 1, 0, Mark::X));
    }

    #[test]
    fn test_diagonal_chain_uses_hex_adjacency() {
        // (0,0)-(1,1)-(2,2) is connected: (r+1,c+1) is a hex neighbor.
        let grid = grid_from_rows(&["X..", ".X.", "..X"]).unwrap();
        assert!(is_winning_placement(&grid, 1, 1, Mark::X));
        // The anti-diagonal is NOT connected: (r+1,c-1) is not a neighbor.
        let anti = grid_from_rows(&["..X", ".X.", "X.."]).unwrap();
        assert!(!is_winning_placement(&anti, 1, 1, Mark::X));
    }

    #[test]
    fn test_broken_chain_is_not_a_win() {
        let grid = grid_from_rows(&["X..", "...", "X.."]).unwrap();
        assert!(!is_winning_placement(&grid, 0, 0, Mark::X));
        assert!(!is_winning_placement(&grid, 2, 0, Mark::X));
    }

    #[test]
    fn test_opponent_stones_block_the_chain() {
        let grid = grid_from_rows(&["X..", "O..", "X.."]).unwrap();
        assert!(!edge_reachable(&grid, (0, 0), Mark::X, Edge::Bottom));
    }

    #[test]
    fn test_horizontal_chain_wins_for_o_only() {
        let grid = grid_from_rows(&["...", "OOO", "..."]).unwrap();
        assert!(is_winning_placement(&grid, 1, 1, Mark::O));
        // The same shape is never a top-bottom span.
        assert!(!edge_reachable(&grid, (1, 1), Mark::O, Edge::Top));
        assert!(!edge_reachable(&grid, (1, 1), Mark::O, Edge::Bottom));
    }

    #[test]
    fn test_near_edge_alone_is_not_a_win() {
        // Chain touches the top but not the bottom.
        let grid = grid_from_rows(&["X..", "X..", "..."]).unwrap();
        assert!(edge_reachable(&grid, (1, 0), Mark::X, Edge::Top));
        assert!(!is_winning_placement(&grid, 1, 0, Mark::X));
    }

    #[test]
    fn test_second_search_starts_from_fresh_state() {
        // A forked chain: the branch reaching the top and the branch
        // reaching the bottom share only the seed's column cells. If the
        // second search inherited the first one's visited set, the shared
        // cells would be pruned and the win missed.
        let grid = grid_from_rows(&[
            "X....", //
            "X....",
            "XX...",
            ".XX..",
            "..X..",
        ])
        .unwrap();
        assert!(is_winning_placement(&grid, 2, 1, Mark::X));
    }

    #[test]
    fn test_winding_chain_left_to_right() {
        let grid = grid_from_rows(&[
            "O....", //
            "OO...",
            ".OO..",
            "..OOO",
            ".....",
        ])
        .unwrap();
        assert!(is_winning_placement(&grid, 3, 4, Mark::O));
        assert!(!is_winning_placement(&grid, 3, 4, Mark::X));
    }

    #[test]
    fn test_almost_complete_chain_missing_one_cell() {
        let grid = grid_from_rows(&[
            "O....", //
            "OO...",
            "...O.",
            "...OO",
            ".....",
        ])
        .unwrap();
        // (1,1) and (2,3) are not adjacent; the left half is unreachable.
        assert!(!is_winning_placement(&grid, 3, 4, Mark::O));
    }
}
