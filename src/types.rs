use std::fmt;

/// A cell in the arena. Rows and columns are 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

// One of the four cardinal directions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

/// Extent of an arena: rows x cols cells, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub rows: usize,
    pub cols: usize,
}

impl Bounds {
    pub fn new(rows: usize, cols: usize) -> Self {
        Bounds { rows, cols }
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row >= 1 && pos.row <= self.rows && pos.col >= 1 && pos.col <= self.cols
    }

    /// Returns the cell one step from `pos` in `dir`, or `None` if that step
    /// would leave the arena.
    pub fn step(&self, pos: Position, dir: Direction) -> Option<Position> {
        match dir {
            Direction::Up if pos.row > 1 => Some(Position::new(pos.row - 1, pos.col)),
            Direction::Down if pos.row < self.rows => Some(Position::new(pos.row + 1, pos.col)),
            Direction::Left if pos.col > 1 => Some(Position::new(pos.row, pos.col - 1)),
            Direction::Right if pos.col < self.cols => Some(Position::new(pos.row, pos.col + 1)),
            _ => None,
        }
    }
}

/// A player command read from the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Stand,
    Move(Direction),
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_inside_bounds() {
        let bounds = Bounds::new(3, 4);
        let center = Position::new(2, 2);
        assert_eq!(bounds.step(center, Direction::Up), Some(Position::new(1, 2)));
        assert_eq!(bounds.step(center, Direction::Down), Some(Position::new(3, 2)));
        assert_eq!(bounds.step(center, Direction::Left), Some(Position::new(2, 1)));
        assert_eq!(bounds.step(center, Direction::Right), Some(Position::new(2, 3)));
    }

    #[test]
    fn test_step_at_edges_fails() {
        let bounds = Bounds::new(3, 4);
        assert_eq!(bounds.step(Position::new(1, 2), Direction::Up), None);
        assert_eq!(bounds.step(Position::new(3, 2), Direction::Down), None);
        assert_eq!(bounds.step(Position::new(2, 1), Direction::Left), None);
        assert_eq!(bounds.step(Position::new(2, 4), Direction::Right), None);
    }

    #[test]
    fn test_step_never_leaves_bounds() {
        let bounds = Bounds::new(2, 3);
        for row in 1..=bounds.rows {
            for col in 1..=bounds.cols {
                for dir in Direction::ALL {
                    if let Some(next) = bounds.step(Position::new(row, col), dir) {
                        assert!(
                            bounds.contains(next),
                            "Step from ({},{}) {:?} produced {}",
                            row,
                            col,
                            dir,
                            next
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_single_cell_has_no_moves() {
        let bounds = Bounds::new(1, 1);
        for dir in Direction::ALL {
            assert_eq!(bounds.step(Position::new(1, 1), dir), None);
        }
    }

    #[test]
    fn test_contains() {
        let bounds = Bounds::new(7, 8);
        assert!(bounds.contains(Position::new(1, 1)));
        assert!(bounds.contains(Position::new(7, 8)));
        assert!(!bounds.contains(Position::new(0, 1)));
        assert!(!bounds.contains(Position::new(8, 1)));
        assert!(!bounds.contains(Position::new(1, 9)));
    }
}
