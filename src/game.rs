use crate::arena::{Arena, PlayerAction};
use crate::config::{GameConfig, MAX_ROBOTS};
use crate::error::{ConfigError, GameError};
use crate::render::Renderer;
use crate::types::{Action, Position};
use crate::utils;
use log::info;
use rand::rngs::StdRng;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Setup,
    Playing,
    Ended,
}

/// How a session finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    NoPlayer, // Static display, nothing to play
    Quit,
    PlayerDied,
    RobotsCleared,
}

/// Result of one full turn: the player's action followed by the robots' moves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub turn: u32,
    pub action: PlayerAction,
    pub player_alive: bool,
    pub robots_remaining: usize,
}

/// One play session. Owns the arena and the session's random stream.
#[derive(Debug)]
pub struct Game {
    arena: Arena,
    rng: StdRng,
    phase: GamePhase,
    turn: u32,
}

impl Game {
    /// Validates `config`, then places the player and the robots at random.
    /// Robots never start on the player's cell but may share cells with each other.
    pub fn new(config: &GameConfig, rng: StdRng) -> Result<Self, ConfigError> {
        if config.robots < 0 {
            return Err(ConfigError::NegativeRobotCount);
        }
        if config.robots as usize > MAX_ROBOTS {
            return Err(ConfigError::TooManyRobots {
                requested: config.robots,
                max: MAX_ROBOTS,
            });
        }
        if config.rows == 1 && config.cols == 1 && config.robots > 0 {
            return Err(ConfigError::NowhereToPlaceRobots);
        }

        let arena = Arena::new(config.rows, config.cols)?;
        let mut game = Game {
            arena,
            rng,
            phase: GamePhase::Setup,
            turn: 0,
        };
        game.populate(config.robots as usize)?;
        game.phase = GamePhase::Playing;
        info!(
            "Game ready: {}x{} arena, {} robots.",
            game.arena.rows(),
            game.arena.cols(),
            game.arena.robot_count()
        );
        Ok(game)
    }

    /// Wraps an already populated arena. An arena without a player gives a
    /// static display.
    pub fn from_arena(arena: Arena, rng: StdRng) -> Self {
        Game {
            arena,
            rng,
            phase: GamePhase::Playing,
            turn: 0,
        }
    }

    fn populate(&mut self, mut robots: usize) -> Result<(), ConfigError> {
        let bounds = *self.arena.bounds();
        let player_pos: Position = utils::random_position(&bounds, &mut self.rng);
        self.arena.add_player(player_pos)?;

        while robots > 0 {
            let pos = utils::random_position(&bounds, &mut self.rng);
            if pos == player_pos {
                continue;
            }
            self.arena.add_robot(pos)?;
            robots -= 1;
        }
        Ok(())
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// The outcome if the game can't continue: the player is dead or no robots remain
    pub fn finished_outcome(&self) -> Option<GameOutcome> {
        let player = self.arena.player()?;
        if player.is_dead() {
            Some(GameOutcome::PlayerDied)
        } else if self.arena.robot_count() == 0 {
            Some(GameOutcome::RobotsCleared)
        } else {
            None
        }
    }

    /// Applies one player action, then moves every robot.
    /// Returns `None` when no turn is taken (no player, or a quit action).
    pub fn take_turn(&mut self, action: Action) -> Option<TurnReport> {
        let player_action = match action {
            Action::Stand => self.arena.player_stand()?,
            Action::Move(dir) => self.arena.player_move_or_attack(dir)?,
            Action::Quit => return None,
        };
        self.turn += 1;
        crate::debug_player!(self.turn; "{:?} -> {:?}", action, player_action);

        let player_alive = self.arena.move_robots(&mut self.rng);
        let report = TurnReport {
            turn: self.turn,
            action: player_action,
            player_alive,
            robots_remaining: self.arena.robot_count(),
        };
        crate::debug_game!(
            self.turn;
            "Player alive: {}, robots remaining: {}",
            report.player_alive,
            report.robots_remaining
        );
        Some(report)
    }

    /// Runs the interactive turn loop until the player quits, dies, or
    /// destroys every robot.
    pub fn play<I, W>(
        &mut self,
        input: &mut I,
        output: &mut W,
        renderer: &Renderer,
    ) -> Result<GameOutcome, GameError>
    where
        I: BufRead,
        W: Write,
    {
        if self.arena.player().is_none() {
            renderer.draw_frame(output, &self.arena)?;
            self.phase = GamePhase::Ended;
            info!("No player in the arena, showing a single frame.");
            return Ok(GameOutcome::NoPlayer);
        }

        info!("Starting turn loop...");
        let outcome = loop {
            renderer.draw_frame(output, &self.arena)?;
            renderer.prompt(output)?;

            // Raw bytes: a line that isn't UTF-8 is a bad keystroke, not an I/O failure
            let mut buf = Vec::new();
            if input.read_until(b'\n', &mut buf)? == 0 {
                info!("End of input, leaving the game.");
                self.phase = GamePhase::Ended;
                return Ok(GameOutcome::Quit);
            }

            let line = String::from_utf8_lossy(&buf);
            match utils::parse_action(&line) {
                None => {
                    crate::debug_game!(self.turn; "Ignoring invalid input {:?}", line.trim_end());
                    renderer.beep(output)?;
                }
                Some(Action::Quit) => {
                    info!("Player quit after {} turns.", self.turn);
                    self.phase = GamePhase::Ended;
                    return Ok(GameOutcome::Quit);
                }
                Some(action) => {
                    self.take_turn(action);
                }
            }

            if let Some(outcome) = self.finished_outcome() {
                break outcome;
            }
        };

        renderer.draw_frame(output, &self.arena)?;
        self.phase = GamePhase::Ended;
        info!("Game over after {} turns: {:?}", self.turn, outcome);
        Ok(outcome)
    }
}
