//! Configuration constants for the robots game.

// Arena limits
pub const MAX_ROWS: usize = 20; // Max number of rows in the arena
pub const MAX_COLS: usize = 30; // Max number of columns in the arena
pub const MAX_ROBOTS: usize = 100; // Max number of robots an arena can hold

// Default session (7x8 arena with 25 robots)
pub const DEFAULT_ROWS: i32 = 7;
pub const DEFAULT_COLS: i32 = 8;
pub const DEFAULT_ROBOTS: i32 = 25;

// Game rules
pub const INITIAL_ROBOT_HEALTH: u32 = 2;

// Terminal
pub const MOVE_PROMPT: &str = "Move (u/d/l/r//q): ";
pub const QUIT_SYMBOL: char = 'q';

/// Raw session configuration, validated by `Game::new`.
///
/// Values are signed so that a negative robot count or arena size reaches
/// validation instead of being rejected by the type system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: i32,
    pub cols: i32,
    pub robots: i32,
}

impl GameConfig {
    pub fn new(rows: i32, cols: i32, robots: i32) -> Self {
        GameConfig { rows, cols, robots }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            robots: DEFAULT_ROBOTS,
        }
    }
}
