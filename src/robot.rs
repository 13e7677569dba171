use crate::config;
use crate::error::ConfigError;
use crate::types::*;
use crate::utils;
use rand::Rng;

// Represents a hostile robot in the arena
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Robot {
    pub id: u32, // Assigned by the arena, only used for logging
    position: Position,
    health: u32,
}

impl Robot {
    /// Creates a robot at full health. Fails if `position` lies outside `bounds`.
    pub fn new(id: u32, bounds: &Bounds, position: Position) -> Result<Self, ConfigError> {
        if !bounds.contains(position) {
            return Err(ConfigError::InvalidRobotCoordinates {
                row: position.row,
                col: position.col,
            });
        }
        Ok(Robot {
            id,
            position,
            health: config::INITIAL_ROBOT_HEALTH,
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

    pub fn health(&self) -> u32 {
        self.health
    }

    /// Steps one cell in a uniformly random direction.
    /// A step that would leave the arena leaves the robot where it is.
    pub fn move_randomly<R: Rng + ?Sized>(&mut self, bounds: &Bounds, rng: &mut R) {
        let dir = utils::random_direction(rng);
        match bounds.step(self.position, dir) {
            Some(next) => {
                crate::debug_robot!(self.id; "Moved {:?} from {} to {}", dir, self.position, next);
                self.position = next;
            }
            None => {
                crate::debug_robot!(self.id; "Blocked moving {:?} at {}", dir, self.position);
            }
        }
    }

    /// Takes one hit from the player attacking in `dir`.
    /// Returns true if the robot is destroyed, either because its health ran
    /// out or because the knockback would push it off the arena.
    pub fn get_attacked(&mut self, dir: Direction, bounds: &Bounds) -> bool {
        self.health = self.health.saturating_sub(1);
        if self.health == 0 {
            crate::debug_robot!(self.id; "Destroyed at {}", self.position);
            return true;
        }

        match bounds.step(self.position, dir) {
            Some(next) => {
                crate::debug_robot!(
                    self.id;
                    "Knocked back {:?} from {} to {}, health {}",
                    dir,
                    self.position,
                    next,
                    self.health
                );
                self.position = next;
                false
            }
            None => {
                crate::debug_robot!(self.id; "Knocked off the arena edge at {}", self.position);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_new_robot_has_full_health() {
        let bounds = Bounds::new(3, 3);
        let robot = Robot::new(1, &bounds, Position::new(2, 3)).unwrap();
        assert_eq!(robot.health(), config::INITIAL_ROBOT_HEALTH);
        assert_eq!(robot.position(), Position::new(2, 3));
    }

    #[test]
    fn test_new_robot_rejects_invalid_coordinates() {
        let bounds = Bounds::new(3, 3);
        assert_eq!(
            Robot::new(1, &bounds, Position::new(0, 1)),
            Err(ConfigError::InvalidRobotCoordinates { row: 0, col: 1 })
        );
        assert_eq!(
            Robot::new(1, &bounds, Position::new(2, 4)),
            Err(ConfigError::InvalidRobotCoordinates { row: 2, col: 4 })
        );
    }

    #[test]
    fn test_move_from_center_reaches_a_neighbor() {
        let bounds = Bounds::new(3, 3);
        let mut rng = StdRng::seed_from_u64(42);
        let center = Position::new(2, 2);
        for _ in 0..50 {
            let mut robot = Robot::new(1, &bounds, center).unwrap();
            robot.move_randomly(&bounds, &mut rng);
            let pos = robot.position();
            let distance = pos.row.abs_diff(center.row) + pos.col.abs_diff(center.col);
            assert_eq!(distance, 1, "Robot should move exactly one cell, ended at {}", pos);
        }
    }

    #[test]
    fn test_move_in_single_cell_stays_put() {
        let bounds = Bounds::new(1, 1);
        let mut rng = StdRng::seed_from_u64(3);
        let mut robot = Robot::new(1, &bounds, Position::new(1, 1)).unwrap();
        for _ in 0..20 {
            robot.move_randomly(&bounds, &mut rng);
            assert_eq!(robot.position(), Position::new(1, 1));
        }
    }

    #[test]
    fn test_first_hit_knocks_back() {
        let bounds = Bounds::new(3, 3);
        let mut robot = Robot::new(1, &bounds, Position::new(2, 2)).unwrap();
        assert!(!robot.get_attacked(Direction::Right, &bounds));
        assert_eq!(robot.health(), 1);
        assert_eq!(robot.position(), Position::new(2, 3));
    }

    #[test]
    fn test_knockback_off_edge_destroys() {
        let bounds = Bounds::new(3, 3);
        let mut robot = Robot::new(1, &bounds, Position::new(1, 2)).unwrap();
        assert!(
            robot.get_attacked(Direction::Up, &bounds),
            "Robot pushed off the top row should be destroyed"
        );
        assert_eq!(robot.position(), Position::new(1, 2));
    }

    #[test]
    fn test_second_hit_destroys_regardless_of_room() {
        let bounds = Bounds::new(5, 5);
        let mut robot = Robot::new(1, &bounds, Position::new(3, 3)).unwrap();
        assert!(!robot.get_attacked(Direction::Left, &bounds));
        assert_eq!(robot.position(), Position::new(3, 2));
        assert!(robot.get_attacked(Direction::Left, &bounds));
        assert_eq!(robot.health(), 0);
    }
}
