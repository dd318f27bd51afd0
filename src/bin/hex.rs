use clap::error::ErrorKind;
use clap::Parser;
use hex_game::engine::{Game, PlayerMode, MAX_DIMENSION};
use hex_game::errors::GameError;
use hex_game::savefile;
use std::fs;
use std::io::{self, BufRead, Write};
use std::process;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// First player type: 'm' (manual) or 'a' (automatic)
    player1: String,

    /// Second player type: 'm' (manual) or 'a' (automatic)
    player2: String,

    /// Either `<height> <width>` for a fresh board, or a savefile path
    #[clap(num_args = 1..=2, required = true, allow_hyphen_values = true)]
    board: Vec<String>,
}

fn parse_player_type(token: &str) -> Result<PlayerMode, GameError> {
    match token {
        "m" => Ok(PlayerMode::Manual),
        "a" => Ok(PlayerMode::Automatic),
        _ => Err(GameError::InvalidPlayerType),
    }
}

fn parse_dimension(token: &str) -> Result<usize, GameError> {
    token
        .parse::<usize>()
        .ok()
        .filter(|d| (1..=MAX_DIMENSION).contains(d))
        .ok_or(GameError::InvalidDimensions)
}

/// Parses a manual move line: exactly two whitespace-separated
/// non-negative integers. Anything else means re-prompt.
fn parse_move_line(line: &str) -> Option<(usize, usize)> {
    let mut tokens = line.split_whitespace();
    let row = tokens.next()?.parse::<usize>().ok()?;
    let col = tokens.next()?.parse::<usize>().ok()?;
    if tokens.next().is_some() {
        return None;
    }
    Some((row, col))
}

/// Writes the session to `path`. A failed save is reported but never ends
/// the game; the player is simply re-prompted.
fn save_current(game: &Game, path: &str) {
    if fs::write(path, savefile::render(game)).is_err() {
        println!("Unable to save game");
    }
}

/// Prompts the manual player until a line commits a move.
///
/// A line of the form `s<filename>` saves the session and re-prompts the
/// same player without consuming the turn. Malformed or invalid move lines
/// are silently re-prompted. End-of-input is fatal.
fn manual_turn(game: &mut Game, input: &mut impl BufRead) -> Result<(), GameError> {
    loop {
        print!("Player {}] ", game.turn_mark());
        let _ = io::stdout().flush();

        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) | Err(_) => return Err(GameError::UnexpectedEof),
            Ok(_) => {}
        }
        let line = line.trim_end_matches('\n');

        if let Some(path) = line.strip_prefix('s') {
            save_current(game, path);
            continue;
        }
        if let Some((row, col)) = parse_move_line(line) {
            if game.play_at(row, col) {
                return Ok(());
            }
        }
    }
}

fn build_session(args: &Args) -> Result<Game, GameError> {
    let modes = [
        parse_player_type(&args.player1)?,
        parse_player_type(&args.player2)?,
    ];
    match args.board.as_slice() {
        [height, width] => {
            let height = parse_dimension(height)?;
            let width = parse_dimension(width)?;
            Ok(Game::new(height, width, modes))
        }
        [path] => {
            let text = fs::read_to_string(path).map_err(|_| GameError::SaveFileOpen)?;
            savefile::parse(&text, modes)
        }
        _ => Err(GameError::Usage),
    }
}

fn run(args: Args) -> Result<(), GameError> {
    let mut game = build_session(&args)?;
    println!("{}", game.grid());

    let stdin = io::stdin();
    let mut input = stdin.lock();
    loop {
        match game.player(game.turn_mark()).mode() {
            PlayerMode::Automatic => {
                let mark = game.turn_mark();
                let (row, col) = game.play_auto();
                println!("Player {} => {} {}", mark, row, col);
            }
            PlayerMode::Manual => manual_turn(&mut game, &mut input)?,
        }
        println!("{}", game.grid());
        if let Some(winner) = game.winner() {
            println!("Player {} wins", winner);
            return Ok(());
        }
    }
}

fn fatal(err: GameError) -> ! {
    eprintln!("{}", err);
    process::exit(err.exit_code());
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if e.kind() == ErrorKind::DisplayHelp || e.kind() == ErrorKind::DisplayVersion => {
            e.exit()
        }
        Err(_) => fatal(GameError::Usage),
    };
    if let Err(err) = run(args) {
        fatal(err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_player_type() {
        assert_eq!(parse_player_type("m").unwrap(), PlayerMode::Manual);
        assert_eq!(parse_player_type("a").unwrap(), PlayerMode::Automatic);
        assert_eq!(
            parse_player_type("x").unwrap_err(),
            GameError::InvalidPlayerType
        );
        assert_eq!(
            parse_player_type("ma").unwrap_err(),
            GameError::InvalidPlayerType
        );
        assert_eq!(
            parse_player_type("").unwrap_err(),
            GameError::InvalidPlayerType
        );
    }

    #[test]
    fn test_parse_dimension() {
        assert_eq!(parse_dimension("1").unwrap(), 1);
        assert_eq!(parse_dimension("1000").unwrap(), 1000);
        assert!(parse_dimension("0").is_err());
        assert!(parse_dimension("1001").is_err());
        assert!(parse_dimension("-3").is_err());
        assert!(parse_dimension("12abc").is_err());
        assert!(parse_dimension("").is_err());
    }

    #[test]
    fn test_parse_move_line() {
        assert_eq!(parse_move_line("3 4"), Some((3, 4)));
        assert_eq!(parse_move_line("  0   0  "), Some((0, 0)));
        assert_eq!(parse_move_line("3"), None);
        assert_eq!(parse_move_line("3 4 5"), None);
        assert_eq!(parse_move_line("-1 4"), None);
        assert_eq!(parse_move_line("a b"), None);
        assert_eq!(parse_move_line(""), None);
    }

    #[test]
    fn test_hyphen_arguments_reach_dimension_validation() {
        // A leading hyphen must not be eaten by the argument parser as an
        // unknown flag; `-3` is a dimension error, not a usage error.
        let args = Args::try_parse_from(["hex", "m", "m", "-3", "5"]).unwrap();
        assert_eq!(args.board, vec!["-3", "5"]);
        assert_eq!(
            build_session(&args).unwrap_err(),
            GameError::InvalidDimensions
        );
        // A savefile path starting with '-' likewise reaches the open step.
        let args = Args::try_parse_from(["hex", "a", "a", "-no-such-file"]).unwrap();
        assert_eq!(
            build_session(&args).unwrap_err(),
            GameError::SaveFileOpen
        );
    }

    #[test]
    fn test_manual_turn_eof_is_fatal() {
        let mut game = Game::new(3, 3, [PlayerMode::Manual, PlayerMode::Manual]);
        let mut input = io::Cursor::new(Vec::<u8>::new());
        assert_eq!(
            manual_turn(&mut game, &mut input).unwrap_err(),
            GameError::UnexpectedEof
        );
    }

    #[test]
    fn test_manual_turn_skips_bad_lines_until_a_valid_move() {
        let mut game = Game::new(3, 3, [PlayerMode::Manual, PlayerMode::Manual]);
        let mut input = io::Cursor::new(b"nonsense\n9 9\n1 1\n".to_vec());
        manual_turn(&mut game, &mut input).unwrap();
        assert_eq!(game.grid().get(1, 1), Some(hex_game::engine::Mark::O));
    }
}
