//! Core game engine for the hex connection game.
//!
//! This module defines the game's fundamental components:
//! - `Mark`: The two stone identities placed on the grid.
//! - `Grid`: The rhombic board and its bounds/occupancy queries, plus the
//!   hex adjacency rule and the staggered text rendering.
//! - `Player`: A mark together with its control mode and move counter.
//! - `Game`: The turn-based move engine that validates candidates, applies
//!   them, runs win detection, and alternates turns.
use crate::automove;
use crate::search;
use std::fmt;

/// Largest board dimension accepted anywhere in the game (height or width).
pub const MAX_DIMENSION: usize = 1000;

/// One of the two stone identities that can occupy a cell.
///
/// `O` is the first player and wins by connecting the left and right edges
/// of the board; `X` is the second player and wins by connecting the top
/// and bottom edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    /// First player's stone, connects horizontally.
    O,
    /// Second player's stone, connects vertically.
    X,
}

impl Mark {
    /// Converts the mark to its character representation, as used in the
    /// save-file format and the board display.
    ///
    /// # Examples
    ///
    /// ```
    /// use hex_game::engine::Mark;
    /// assert_eq!(Mark::O.to_char(), 'O');
    /// assert_eq!(Mark::X.to_char(), 'X');
    /// ```
    pub fn to_char(&self) -> char {
        match self {
            Mark::O => 'O',
            Mark::X => 'X',
        }
    }

    /// Parses a save-file character into a mark. `'.'` and anything else
    /// map to `None`.
    pub fn from_char(c: char) -> Option<Mark> {
        match c {
            'O' => Some(Mark::O),
            'X' => Some(Mark::X),
            _ => None,
        }
    }

}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

// Full six-neighbor hex adjacency for row-major offset coordinates.
// Row r is shifted half a cell left of row r-1, so the up-neighbors are
// (r-1,c-1),(r-1,c) and the down-neighbors are (r+1,c),(r+1,c+1).
const HEX_OFFSETS: [(isize, isize); 6] = [(0, -1), (0, 1), (-1, -1), (-1, 0), (1, 0), (1, 1)];

/// The rhombic game board: a fixed `height` x `width` grid of cells, each
/// empty or holding one [`Mark`].
///
/// Cells are stored contiguously in row-major order. Dimensions are fixed
/// at creation; the grid is mutated only through [`Grid::place`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<Option<Mark>>,
}

impl Grid {
    /// Creates an empty grid with the given dimensions.
    ///
    /// Dimensions must already be validated to `1..=MAX_DIMENSION`; this is
    /// a precondition, not a recoverable error.
    ///
    /// # Examples
    /// ```
    /// use hex_game::engine::Grid;
    /// let grid = Grid::new(3, 4);
    /// assert!(grid.is_empty(2, 3));
    /// assert!(!grid.is_within_bounds(3, 0));
    /// ```
    pub fn new(height: usize, width: usize) -> Self {
        debug_assert!((1..=MAX_DIMENSION).contains(&height));
        debug_assert!((1..=MAX_DIMENSION).contains(&width));
        Grid {
            height,
            width,
            cells: vec![None; height * width],
        }
    }

    /// Returns the number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Returns true iff `(row, col)` lies on the board.
    pub fn is_within_bounds(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width
    }

    /// Returns the cell contents at `(row, col)`.
    ///
    /// # Panics
    /// Panics if `(row, col)` is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Mark> {
        assert!(self.is_within_bounds(row, col));
        self.cells[self.index(row, col)]
    }

    /// Returns true iff the in-bounds cell `(row, col)` is unoccupied.
    ///
    /// # Panics
    /// Panics if `(row, col)` is out of bounds; callers check
    /// [`Grid::is_within_bounds`] first.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_none()
    }

    /// Places `mark` at `(row, col)`.
    ///
    /// The cell must be in bounds and empty; this is a precondition checked
    /// by the turn engine before every placement, not a recoverable error.
    pub fn place(&mut self, row: usize, col: usize, mark: Mark) {
        debug_assert!(self.is_within_bounds(row, col));
        debug_assert!(self.is_empty(row, col));
        let index = self.index(row, col);
        self.cells[index] = Some(mark);
    }

    /// Iterates over the in-bounds hex neighbors of `(row, col)`.
    ///
    /// The neighbor set of a cell is {left, right, up-left, up, down,
    /// down-right} in offset coordinates: `(r,c-1)`, `(r,c+1)`, `(r-1,c-1)`,
    /// `(r-1,c)`, `(r+1,c)`, `(r+1,c+1)`, clipped to the grid.
    pub fn hex_neighbors(
        &self,
        row: usize,
        col: usize,
    ) -> impl Iterator<Item = (usize, usize)> + '_ {
        HEX_OFFSETS.iter().filter_map(move |&(dr, dc)| {
            let nr = row.checked_add_signed(dr)?;
            let nc = col.checked_add_signed(dc)?;
            self.is_within_bounds(nr, nc).then_some((nr, nc))
        })
    }
}

impl fmt::Display for Grid {
    /// Formats the board in the staggered hex layout: row `i` is indented
    /// by `height - 1 - i` spaces and cells are separated by single spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for _ in 0..self.height - 1 - row {
                write!(f, " ")?;
            }
            for col in 0..self.width {
                let c = match self.cells[self.index(row, col)] {
                    Some(mark) => mark.to_char(),
                    None => '.',
                };
                write!(f, "{}", c)?;
                if col < self.width - 1 {
                    write!(f, " ")?;
                }
            }
            if row < self.height - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// How a player's candidate moves are produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerMode {
    /// Moves are read from an external input source (stdin).
    Manual,
    /// Moves come from the deterministic auto-move formula.
    Automatic,
}

/// One of the two players in a session: a fixed mark, a control mode, and
/// the move counter seeding the deterministic auto-move formula.
#[derive(Clone, Debug)]
pub struct Player {
    mark: Mark,
    mode: PlayerMode,
    move_counter: u32,
}

impl Player {
    fn new(mark: Mark, mode: PlayerMode, move_counter: u32) -> Self {
        Player {
            mark,
            mode,
            move_counter,
        }
    }

    /// Returns this player's control mode.
    pub fn mode(&self) -> PlayerMode {
        self.mode
    }

    /// Returns the number of auto-move generations performed so far.
    pub fn move_counter(&self) -> u32 {
        self.move_counter
    }

    /// Produces the next candidate position from the auto-move formula and
    /// advances the move counter.
    ///
    /// The counter is incremented exactly once per call, whether or not the
    /// candidate is later accepted by the turn engine.
    fn next_candidate(&mut self, height: usize, width: usize) -> (usize, usize) {
        let candidate = automove::candidate(self.mark, self.move_counter, height, width);
        self.move_counter += 1;
        candidate
    }
}

/// Manages one game session: the grid, the two players, whose turn it is,
/// and the winner once the game ends.
///
/// The session alternates turns between O (first) and X until a placed
/// stone completes a chain between its player's pair of opposite edges.
/// The winner field is set at most once; no further moves are accepted
/// after that.
///
/// # Examples
/// ```
/// use hex_game::engine::{Game, Mark, PlayerMode};
/// let mut game = Game::new(3, 3, [PlayerMode::Manual, PlayerMode::Manual]);
/// assert_eq!(game.turn_mark(), Mark::O);
/// assert!(game.play_at(1, 1));
/// assert_eq!(game.turn_mark(), Mark::X);
/// assert!(!game.play_at(1, 1)); // occupied, turn does not change
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    grid: Grid,
    players: [Player; 2],
    x_turn: bool,
    winner: Option<Mark>,
}

impl Game {
    /// Creates a fresh session on an empty `height` x `width` grid with O
    /// to move first.
    ///
    /// `modes` holds the control modes for O and X, in that order.
    /// Dimensions must already be validated to `1..=MAX_DIMENSION`.
    pub fn new(height: usize, width: usize, modes: [PlayerMode; 2]) -> Self {
        Game::from_parts(Grid::new(height, width), false, [0, 0], modes)
    }

    /// Reassembles a session from its persisted parts: the board, the turn
    /// flag (`true` iff X moves next), and the two move counters, in O, X
    /// order. Used when restoring a saved game.
    pub fn from_parts(
        grid: Grid,
        x_turn: bool,
        move_counters: [u32; 2],
        modes: [PlayerMode; 2],
    ) -> Self {
        Game {
            grid,
            players: [
                Player::new(Mark::O, modes[0], move_counters[0]),
                Player::new(Mark::X, modes[1], move_counters[1]),
            ],
            x_turn,
            winner: None,
        }
    }

    /// Returns an immutable reference to the board.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the winning mark, or `None` while the game is in progress.
    pub fn winner(&self) -> Option<Mark> {
        self.winner
    }

    /// Returns true once a winner has been decided.
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Returns true iff X moves next.
    pub fn x_turn(&self) -> bool {
        self.x_turn
    }

    /// Returns the mark of the player whose move is next.
    pub fn turn_mark(&self) -> Mark {
        if self.x_turn {
            Mark::X
        } else {
            Mark::O
        }
    }

    /// Returns the player owning `mark`.
    pub fn player(&self, mark: Mark) -> &Player {
        match mark {
            Mark::O => &self.players[0],
            Mark::X => &self.players[1],
        }
    }

    fn current_player_mut(&mut self) -> &mut Player {
        let index = usize::from(self.x_turn);
        &mut self.players[index]
    }

    /// Places the current player's stone and resolves the move: win
    /// detection from the placed cell, then either game over or the turn
    /// passing to the opponent.
    fn commit(&mut self, row: usize, col: usize) {
        let mark = self.turn_mark();
        self.grid.place(row, col, mark);
        if search::is_winning_placement(&self.grid, row, col, mark) {
            self.winner = Some(mark);
        } else {
            self.x_turn = !self.x_turn;
        }
    }

    /// Attempts the current player's move at `(row, col)`.
    ///
    /// Returns `true` and commits the move iff the cell is in bounds and
    /// empty; otherwise returns `false` with no state change, and the
    /// caller re-prompts. Not called once the game is over.
    pub fn play_at(&mut self, row: usize, col: usize) -> bool {
        debug_assert!(self.winner.is_none());
        if !self.grid.is_within_bounds(row, col) || !self.grid.is_empty(row, col) {
            return false;
        }
        self.commit(row, col);
        true
    }

    /// Plays one automatic move for the current player, regenerating
    /// candidates until one lands on an empty cell, and returns the
    /// position played.
    ///
    /// Each rejected candidate still advances the move counter. On a fully
    /// occupied grid this loop never terminates; the turn engine only runs
    /// while at least one cell is empty and no winner exists.
    pub fn play_auto(&mut self) -> (usize, usize) {
        debug_assert!(self.winner.is_none());
        let (height, width) = (self.grid.height, self.grid.width);
        loop {
            let (row, col) = self.current_player_mut().next_candidate(height, width);
            if self.grid.is_within_bounds(row, col) && self.grid.is_empty(row, col) {
                self.commit(row, col);
                return (row, col);
            }
        }
    }
}
