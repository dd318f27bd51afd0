//! # Hex Game Library
//!
//! This library implements a two-player connection game played on a rhombic
//! hex grid. Player O connects the left and right board edges, player X the
//! top and bottom; the first player whose freshly placed stone completes a
//! chain between their two edges wins.
//!
//! It is used by one binary:
//! - `hex`: Plays a session between any combination of manual (stdin) and
//!   automatic (deterministic formula) players, with save/load support for
//!   in-progress games.
//!
//! ## Modules
//! - `engine`: Board representation (`Grid`), stone identities (`Mark`),
//!   players, and the turn-based move engine (`Game`).
//! - `search`: The stack-driven edge-reachability search and win detection.
//! - `automove`: The deterministic candidate formula for automatic players.
//! - `savefile`: The textual save format, parsing and serialization.
//! - `errors`: The fatal error taxonomy and its exit-code mapping.
//! - `utils`: Board-from-strings helper used by tests and fixtures.

pub mod automove;
pub mod engine;
pub mod errors;
pub mod savefile;
pub mod search;
pub mod utils;
