//! The textual save-file format: parsing and serialization.
//!
//! Line 1 holds five comma-separated integers
//! `turn,height,width,movesO,movesX`, where `turn` is 1 iff X moves next.
//! Each of the following `height` lines holds exactly `width` characters
//! from `{'.', 'O', 'X'}`, one board row per line.
//!
//! Parsing is all-or-nothing: any deviation from the format invalidates the
//! whole file and no session is constructed. Reading and writing the actual
//! files is left to the binary; this module only deals in text.
use crate::engine::{Game, Grid, Mark, PlayerMode, MAX_DIMENSION};
use crate::errors::GameError;

/// Largest move-counter value accepted from a savefile.
pub const MAX_MOVE_COUNT: u32 = 1000;

fn header_field(token: &str) -> Result<u32, GameError> {
    token.parse().map_err(|_| GameError::InvalidSaveFile)
}

/// Parses the text of a savefile into a restored session.
///
/// `modes` holds the control modes for O and X, in that order; modes are
/// never persisted, they always come from the command line. The saved move
/// counters are restored so automatic players resume their candidate
/// sequence where the saved game left off.
///
/// Returns [`GameError::InvalidSaveFile`] on any format violation: wrong
/// header token count, non-numeric or out-of-range header values, missing
/// or surplus rows, wrong row length, or an illegal board character.
pub fn parse(text: &str, modes: [PlayerMode; 2]) -> Result<Game, GameError> {
    let mut lines = text.lines();
    let header = lines.next().ok_or(GameError::InvalidSaveFile)?;

    let fields: Vec<&str> = header.split(',').collect();
    if fields.len() != 5 {
        return Err(GameError::InvalidSaveFile);
    }
    let turn = header_field(fields[0])?;
    if turn > 1 {
        return Err(GameError::InvalidSaveFile);
    }
    let height = header_field(fields[1])? as usize;
    let width = header_field(fields[2])? as usize;
    if !(1..=MAX_DIMENSION).contains(&height) || !(1..=MAX_DIMENSION).contains(&width) {
        return Err(GameError::InvalidSaveFile);
    }
    let moves_o = header_field(fields[3])?;
    let moves_x = header_field(fields[4])?;
    if moves_o > MAX_MOVE_COUNT || moves_x > MAX_MOVE_COUNT {
        return Err(GameError::InvalidSaveFile);
    }

    let mut grid = Grid::new(height, width);
    for row in 0..height {
        let line = lines.next().ok_or(GameError::InvalidSaveFile)?;
        let mut cols = 0;
        for (col, c) in line.chars().enumerate() {
            if col >= width {
                return Err(GameError::InvalidSaveFile);
            }
            match c {
                '.' => {}
                _ => {
                    let mark = Mark::from_char(c).ok_or(GameError::InvalidSaveFile)?;
                    grid.place(row, col, mark);
                }
            }
            cols += 1;
        }
        if cols != width {
            return Err(GameError::InvalidSaveFile);
        }
    }
    if lines.next().is_some() {
        return Err(GameError::InvalidSaveFile);
    }

    Ok(Game::from_parts(grid, turn == 1, [moves_o, moves_x], modes))
}

/// Serializes a session into savefile text, the exact inverse of [`parse`].
pub fn render(game: &Game) -> String {
    let grid = game.grid();
    let mut out = format!(
        "{},{},{},{},{}\n",
        u8::from(game.x_turn()),
        grid.height(),
        grid.width(),
        game.player(Mark::O).move_counter(),
        game.player(Mark::X).move_counter(),
    );
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            out.push(match grid.get(row, col) {
                Some(mark) => mark.to_char(),
                None => '.',
            });
        }
        out.push('\n');
    }
    out
}
