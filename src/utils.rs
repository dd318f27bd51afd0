use crate::engine::{Grid, Mark};

/// Builds a [`Grid`] from an array of string slices, one row per slice.
///
/// The grid's dimensions are taken from the input: `s.len()` rows, with the
/// width of the first row. Valid characters are `'O'`, `'X'`, and `'.'`
/// for an empty cell. Mostly a convenience for writing board fixtures in
/// tests.
///
/// # Returns
/// * `Ok(Grid)` on success.
/// * `Err(String)` if the input is empty, the rows have differing lengths,
///   or an unrecognized character is encountered.
///
/// # Examples
/// ```
/// use hex_game::utils::grid_from_rows;
/// use hex_game::engine::Mark;
///
/// let grid = grid_from_rows(&["OX.", "..X"]).unwrap();
/// assert_eq!(grid.height(), 2);
/// assert_eq!(grid.width(), 3);
/// assert_eq!(grid.get(0, 0), Some(Mark::O));
/// assert!(grid.is_empty(1, 1));
///
/// assert!(grid_from_rows(&["O?."]).is_err());
/// ```
pub fn grid_from_rows(s: &[&str]) -> Result<Grid, String> {
    let height = s.len();
    if height == 0 {
        return Err("At least one row is required".to_string());
    }
    let width = s[0].chars().count();
    if width == 0 {
        return Err("Rows must not be empty".to_string());
    }

    let mut grid = Grid::new(height, width);
    for (row, row_str) in s.iter().enumerate() {
        if row_str.chars().count() != width {
            return Err(format!(
                "Row {} has {} characters, expected {}",
                row,
                row_str.chars().count(),
                width
            ));
        }
        for (col, c) in row_str.chars().enumerate() {
            match c {
                '.' => {}
                _ => match Mark::from_char(c) {
                    Some(mark) => grid.place(row, col, mark),
                    None => {
                        return Err(format!(
                            "Unrecognized character '{}' in row {} col {}",
                            c, row, col
                        ))
                    }
                },
            }
        }
    }
    Ok(grid)
}
