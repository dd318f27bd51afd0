//! Deterministic candidate generation for automatic players.
//!
//! The formula is fixed by the game's rules and must stay bit-exact: it is
//! not a real PRNG, just an arbitrary arithmetic scramble of the player's
//! move counter, so replayed sessions produce identical move sequences.
use crate::engine::Mark;

/// Computes the candidate position for a player's `counter`-th generation
/// on a `height` x `width` board.
///
/// With `m = max(height, width)`:
/// - O: `t = (counter * 9 mod 1000037) + 17`
/// - X: `t = (counter * 7 mod 1000213) + 81`
///
/// and the candidate is `((t / m) mod height, t mod width)`, which is
/// always in bounds. The function is pure; advancing the counter is the
/// caller's job.
///
/// # Examples
/// ```
/// use hex_game::automove::candidate;
/// use hex_game::engine::Mark;
/// assert_eq!(candidate(Mark::O, 0, 3, 3), (2, 2)); // t = 17
/// assert_eq!(candidate(Mark::X, 0, 3, 3), (0, 0)); // t = 81
/// ```
pub fn candidate(mark: Mark, counter: u32, height: usize, width: usize) -> (usize, usize) {
    let m = height.max(width) as u64;
    let k = u64::from(counter);
    let t = match mark {
        Mark::O => (k * 9) % 1_000_037 + 17,
        Mark::X => (k * 7) % 1_000_213 + 81,
    };
    let row = (t / m) % height as u64;
    let col = t % width as u64;
    (row as usize, col as usize)
}
