use crate::error::ConfigError;
use crate::types::*;

/// Where a move-or-attack command ended up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Moved(Position),
    // Destination holds robots; the player stays and the arena resolves the hit
    Attack(Position),
    Blocked,
}

// The user-controlled entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    position: Position,
    age: u32,
    dead: bool,
}

impl Player {
    pub fn new(bounds: &Bounds, position: Position) -> Result<Self, ConfigError> {
        if !bounds.contains(position) {
            return Err(ConfigError::InvalidPlayerCoordinates {
                row: position.row,
                col: position.col,
            });
        }
        Ok(Player {
            position,
            age: 0,
            dead: false,
        })
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn row(&self) -> usize {
        self.position.row
    }

    pub fn col(&self) -> usize {
        self.position.col
    }

    /// Number of turns survived, whatever the action was
    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    pub fn set_dead(&mut self) {
        self.dead = true;
    }

    pub fn stand(&mut self) {
        self.age += 1;
    }

    /// Ages the player one turn and resolves a step in `dir`.
    ///
    /// `robots_at` reports how many robots occupy a cell. An occupied
    /// destination is returned as `Step::Attack` without moving; a free one is
    /// entered; a step off the arena does nothing.
    pub fn move_or_attack<F>(&mut self, dir: Direction, bounds: &Bounds, robots_at: F) -> Step
    where
        F: Fn(Position) -> usize,
    {
        self.age += 1;

        let Some(target) = bounds.step(self.position, dir) else {
            return Step::Blocked;
        };
        if robots_at(target) > 0 {
            return Step::Attack(target);
        }
        self.position = target;
        Step::Moved(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_robots(_: Position) -> usize {
        0
    }

    #[test]
    fn test_new_player() {
        let bounds = Bounds::new(4, 4);
        let player = Player::new(&bounds, Position::new(4, 1)).unwrap();
        assert_eq!(player.age(), 0);
        assert!(!player.is_dead());
        assert_eq!(
            Player::new(&bounds, Position::new(5, 1)),
            Err(ConfigError::InvalidPlayerCoordinates { row: 5, col: 1 })
        );
    }

    #[test]
    fn test_stand_ages_without_moving() {
        let bounds = Bounds::new(4, 4);
        let mut player = Player::new(&bounds, Position::new(2, 2)).unwrap();
        player.stand();
        player.stand();
        assert_eq!(player.age(), 2);
        assert_eq!(player.position(), Position::new(2, 2));
    }

    #[test]
    fn test_move_into_empty_cell() {
        let bounds = Bounds::new(4, 4);
        let mut player = Player::new(&bounds, Position::new(2, 2)).unwrap();
        let step = player.move_or_attack(Direction::Down, &bounds, no_robots);
        assert_eq!(step, Step::Moved(Position::new(3, 2)));
        assert_eq!(player.position(), Position::new(3, 2));
        assert_eq!(player.age(), 1);
    }

    #[test]
    fn test_move_off_edge_only_ages() {
        let bounds = Bounds::new(4, 4);
        let mut player = Player::new(&bounds, Position::new(1, 4)).unwrap();
        assert_eq!(player.move_or_attack(Direction::Up, &bounds, no_robots), Step::Blocked);
        assert_eq!(player.move_or_attack(Direction::Right, &bounds, no_robots), Step::Blocked);
        assert_eq!(player.position(), Position::new(1, 4));
        assert_eq!(player.age(), 2);
    }

    #[test]
    fn test_occupied_cell_becomes_attack() {
        let bounds = Bounds::new(4, 4);
        let mut player = Player::new(&bounds, Position::new(2, 2)).unwrap();
        let robot_cell = Position::new(2, 1);
        let step = player.move_or_attack(Direction::Left, &bounds, |pos| {
            usize::from(pos == robot_cell)
        });
        assert_eq!(step, Step::Attack(robot_cell));
        assert_eq!(player.position(), Position::new(2, 2), "Attacker must not move");
        assert_eq!(player.age(), 1);
    }

    #[test]
    fn test_death_is_permanent() {
        let bounds = Bounds::new(2, 2);
        let mut player = Player::new(&bounds, Position::new(1, 1)).unwrap();
        player.set_dead();
        player.stand();
        player.set_dead();
        assert!(player.is_dead());
    }
}
