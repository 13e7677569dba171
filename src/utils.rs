use crate::config::QUIT_SYMBOL;
use crate::types::{Action, Bounds, Direction, Position};
use rand::Rng;

/// Maps a direction symbol (`u`, `d`, `l`, `r`) to a direction
pub fn decode_direction(symbol: char) -> Option<Direction> {
    match symbol {
        'u' => Some(Direction::Up),
        'd' => Some(Direction::Down),
        'l' => Some(Direction::Left),
        'r' => Some(Direction::Right),
        _ => None,
    }
}

/// Picks one of the four directions uniformly at random
pub fn random_direction<R: Rng + ?Sized>(rng: &mut R) -> Direction {
    Direction::ALL[rng.gen_range(0..Direction::ALL.len())]
}

/// Picks a uniformly random cell inside `bounds`
pub fn random_position<R: Rng + ?Sized>(bounds: &Bounds, rng: &mut R) -> Position {
    Position::new(rng.gen_range(1..=bounds.rows), rng.gen_range(1..=bounds.cols))
}

/// Interprets one line of user input.
/// Empty means stand; otherwise only the first character counts.
/// Returns `None` for anything that isn't a valid action.
pub fn parse_action(line: &str) -> Option<Action> {
    let line = line.trim_end_matches(['\n', '\r']);
    let Some(first) = line.chars().next() else {
        return Some(Action::Stand);
    };
    if first == QUIT_SYMBOL {
        return Some(Action::Quit);
    }
    decode_direction(first).map(Action::Move)
}
