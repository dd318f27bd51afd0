//! Fatal error taxonomy for the game binary.
//!
//! Every condition that aborts the program is a variant here, carried up
//! the call chain as an ordinary `Result` and mapped to a process exit
//! code only at the outermost boundary (`main`). The display strings are
//! the exact user-facing messages printed to stderr.

/// A fatal condition detected while setting up or running a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// The command line did not have the required shape.
    #[error("Usage: hex p1type p2type [height width | filename]")]
    Usage,

    /// A player-type argument was not exactly `m` or `a`.
    #[error("Invalid type")]
    InvalidPlayerType,

    /// A board dimension was non-numeric or outside `1..=1000`.
    #[error("Sensible board dimensions please!")]
    InvalidDimensions,

    /// The savefile named on the command line could not be opened or read.
    #[error("Could not start reading from savefile")]
    SaveFileOpen,

    /// The savefile opened but its contents violate the save format.
    #[error("Incorrect file contents")]
    InvalidSaveFile,

    /// Input ended while a manual player's move was being awaited.
    #[error("EOF from user")]
    UnexpectedEof,
}

impl GameError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            GameError::Usage => 1,
            GameError::InvalidPlayerType => 2,
            GameError::InvalidDimensions => 3,
            GameError::SaveFileOpen => 4,
            GameError::InvalidSaveFile => 5,
            GameError::UnexpectedEof => 6,
        }
    }
}
