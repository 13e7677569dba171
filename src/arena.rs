use crate::config::{MAX_COLS, MAX_ROBOTS, MAX_ROWS};
use crate::error::ConfigError;
use crate::player::{Player, Step};
use crate::robot::Robot;
use crate::types::*;
use rand::Rng;

/// What the player's action amounted to on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    Stood,
    Moved(Position),
    Attacked { target: Position, destroyed: bool },
    Blocked,
}

// Counts robots standing on `pos`
fn count_robots_at(robots: &[Robot], pos: Position) -> usize {
    robots.iter().filter(|robot| robot.position() == pos).count()
}

// Display symbol for a cell holding `count` robots
fn robot_symbol(count: usize) -> char {
    match count {
        0 => '.',
        1 => 'R',
        2..=8 => char::from(b'0' + count as u8),
        _ => '9',
    }
}

/// The bounded grid. Sole owner of the player and every robot.
#[derive(Debug)]
pub struct Arena {
    bounds: Bounds,
    player: Option<Player>,
    robots: Vec<Robot>,
    max_robots: usize,
    next_robot_id: u32,
}

impl Arena {
    pub fn new(rows: i32, cols: i32) -> Result<Self, ConfigError> {
        let invalid = ConfigError::InvalidArenaSize { rows, cols };
        let rows = usize::try_from(rows).map_err(|_| invalid)?;
        let cols = usize::try_from(cols).map_err(|_| invalid)?;
        if rows == 0 || cols == 0 || rows > MAX_ROWS || cols > MAX_COLS {
            return Err(invalid);
        }

        log::info!("Arena created with {}x{} grid.", rows, cols);
        Ok(Arena {
            bounds: Bounds::new(rows, cols),
            player: None,
            robots: Vec::new(),
            max_robots: MAX_ROBOTS,
            next_robot_id: 1,
        })
    }

    pub fn rows(&self) -> usize {
        self.bounds.rows
    }

    pub fn cols(&self) -> usize {
        self.bounds.cols
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    pub fn robot_count(&self) -> usize {
        self.robots.len()
    }

    /// Robots in scan order. Order only changes when a robot is removed.
    pub fn robots(&self) -> &[Robot] {
        &self.robots
    }

    pub fn n_robots_at(&self, pos: Position) -> usize {
        count_robots_at(&self.robots, pos)
    }

    /// The cell one step from `pos` in `dir`, or `None` at the arena edge
    pub fn determine_new_position(&self, pos: Position, dir: Direction) -> Option<Position> {
        self.bounds.step(pos, dir)
    }

    /// Adds a robot at `pos`. Returns `Ok(false)` once the arena is full.
    pub fn add_robot(&mut self, pos: Position) -> Result<bool, ConfigError> {
        if self.robots.len() >= self.max_robots {
            log::warn!("Arena is full, robot at {} not added", pos);
            return Ok(false);
        }
        let robot = Robot::new(self.next_robot_id, &self.bounds, pos)?;
        crate::debug_arena!("Robot {} placed at {}", robot.id, pos);
        self.next_robot_id += 1;
        self.robots.push(robot);
        Ok(true)
    }

    /// Adds the player at `pos`. Returns `Ok(false)` if there already is one.
    pub fn add_player(&mut self, pos: Position) -> Result<bool, ConfigError> {
        if self.player.is_some() {
            return Ok(false);
        }
        self.player = Some(Player::new(&self.bounds, pos)?);
        crate::debug_arena!("Player placed at {}", pos);
        Ok(true)
    }

    /// Attacks the first robot (in scan order) standing on `pos`.
    /// At most one robot is hit. Returns true if it was destroyed, in which
    /// case it is removed and the remaining robots keep their order.
    pub fn attack_robot_at(&mut self, pos: Position, dir: Direction) -> bool {
        let Some(index) = self.robots.iter().position(|robot| robot.position() == pos) else {
            return false;
        };

        let destroyed = self.robots[index].get_attacked(dir, &self.bounds);
        if destroyed {
            let robot = self.robots.remove(index);
            log::info!(
                "Robot {} destroyed, {} robots remaining",
                robot.id,
                self.robots.len()
            );
        }
        destroyed
    }

    /// Ages the player without moving
    pub fn player_stand(&mut self) -> Option<PlayerAction> {
        let player = self.player.as_mut()?;
        player.stand();
        Some(PlayerAction::Stood)
    }

    /// Moves the player one cell in `dir`, or attacks the robot standing there
    pub fn player_move_or_attack(&mut self, dir: Direction) -> Option<PlayerAction> {
        let robots = &self.robots;
        let player = self.player.as_mut()?;
        let step = player.move_or_attack(dir, &self.bounds, |pos| count_robots_at(robots, pos));

        let action = match step {
            Step::Moved(pos) => PlayerAction::Moved(pos),
            Step::Blocked => PlayerAction::Blocked,
            Step::Attack(target) => PlayerAction::Attacked {
                target,
                destroyed: self.attack_robot_at(target, dir),
            },
        };
        Some(action)
    }

    /// Moves every robot one random step. A robot landing on the player kills
    /// it. Returns whether the player is still alive afterwards.
    pub fn move_robots<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        for robot in self.robots.iter_mut() {
            robot.move_randomly(&self.bounds, rng);
            if let Some(player) = self.player.as_mut() {
                if robot.position() == player.position() && !player.is_dead() {
                    log::info!("Robot {} caught the player at {}", robot.id, player.position());
                    player.set_dead();
                }
            }
        }
        self.player.as_ref().is_some_and(|player| !player.is_dead())
    }

    /// Text snapshot of the board followed by the status lines
    pub fn display(&self) -> String {
        let mut grid: Vec<Vec<char>> = (1..=self.rows())
            .map(|row| {
                (1..=self.cols())
                    .map(|col| robot_symbol(self.n_robots_at(Position::new(row, col))))
                    .collect()
            })
            .collect();

        if let Some(player) = &self.player {
            let cell = &mut grid[player.row() - 1][player.col() - 1];
            *cell = if *cell == '.' { '@' } else { '*' };
        }

        let mut out = String::new();
        for row in &grid {
            out.extend(row.iter());
            out.push('\n');
        }
        out.push('\n');
        out.push('\n');

        out.push_str(&format!("There are {} robots remaining.\n", self.robot_count()));
        match &self.player {
            None => out.push_str("There is no player.\n"),
            Some(player) => {
                if player.age() > 0 {
                    out.push_str(&format!("The player has lasted {} steps.\n", player.age()));
                }
                if player.is_dead() {
                    out.push_str("The player is dead.\n");
                }
            }
        }
        out
    }

    #[cfg(test)]
    fn with_capacity(rows: i32, cols: i32, max_robots: usize) -> Self {
        let mut arena = Arena::new(rows, cols).unwrap();
        arena.max_robots = max_robots;
        arena
    }
}
