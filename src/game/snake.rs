//! Snake on a fixed 15x15 grid.

use std::collections::VecDeque;

use super::rng::FoodSource;

pub const GRID_SIZE: i16 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i16,
    pub y: i16,
}

impl Cell {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    fn in_bounds(self) -> bool {
        (0..GRID_SIZE).contains(&self.x) && (0..GRID_SIZE).contains(&self.y)
    }

    fn step(self, direction: Direction) -> Cell {
        let (dx, dy) = direction.delta();
        Cell::new(self.x + dx, self.y + dy)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    fn delta(self) -> (i16, i16) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Moved,
    Grew,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct SnakeGame {
    /// Head first.
    body: VecDeque<Cell>,
    direction: Direction,
    food: Cell,
    over: bool,
}

impl SnakeGame {
    /// A one-cell snake in the middle of the grid, heading right.
    pub fn new(food: &mut impl FoodSource) -> Self {
        let food = food.next_cell(GRID_SIZE);
        Self::from_parts([Cell::new(7, 7)], Direction::Right, food)
    }

    /// Build a game in an arbitrary position. `body` is head first.
    pub fn from_parts(
        body: impl IntoIterator<Item = Cell>,
        direction: Direction,
        food: Cell,
    ) -> Self {
        Self {
            body: body.into_iter().collect(),
            direction,
            food,
            over: false,
        }
    }

    pub fn body(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }

    pub fn head(&self) -> Option<Cell> {
        self.body.front().copied()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Change heading. Reversing straight into the current heading is
    /// rejected, and so is any turn once the game is over.
    pub fn turn(&mut self, direction: Direction) -> bool {
        if self.over || direction == self.direction.opposite() {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Advance one tick.
    pub fn step(&mut self, food: &mut impl FoodSource) -> StepOutcome {
        if self.over {
            return StepOutcome::GameOver;
        }
        let Some(head) = self.head() else {
            self.over = true;
            return StepOutcome::GameOver;
        };

        let next = head.step(self.direction);
        if !next.in_bounds() || self.contains(next) {
            self.over = true;
            return StepOutcome::GameOver;
        }

        self.body.push_front(next);
        if next == self.food {
            self.food = food.next_cell(GRID_SIZE);
            StepOutcome::Grew
        } else {
            self.body.pop_back();
            StepOutcome::Moved
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::rng::FixedCells;

    fn far_food() -> FixedCells {
        FixedCells::new([Cell::new(0, 0)])
    }

    #[test]
    fn test_new_game_layout() {
        let mut food = FixedCells::new([Cell::new(3, 4)]);
        let game = SnakeGame::new(&mut food);

        assert_eq!(game.head(), Some(Cell::new(7, 7)));
        assert_eq!(game.len(), 1);
        assert_eq!(game.direction(), Direction::Right);
        assert_eq!(game.food(), Cell::new(3, 4));
        assert!(!game.is_over());
    }

    #[test]
    fn test_wall_collision_on_exact_tick() {
        let mut food = far_food();
        let mut game = SnakeGame::from_parts([Cell::new(12, 7)], Direction::Right, Cell::new(0, 0));

        assert_eq!(game.step(&mut food), StepOutcome::Moved);
        assert_eq!(game.head(), Some(Cell::new(13, 7)));
        assert_eq!(game.step(&mut food), StepOutcome::Moved);
        assert_eq!(game.head(), Some(Cell::new(14, 7)));
        assert!(!game.is_over());

        assert_eq!(game.step(&mut food), StepOutcome::GameOver);
        assert!(game.is_over());
        assert_eq!(game.head(), Some(Cell::new(14, 7)));
    }

    #[test]
    fn test_wall_collision_low_edges() {
        let mut food = far_food();

        let mut up = SnakeGame::from_parts([Cell::new(5, 0)], Direction::Up, Cell::new(9, 9));
        assert_eq!(up.step(&mut food), StepOutcome::GameOver);

        let mut left = SnakeGame::from_parts([Cell::new(0, 5)], Direction::Left, Cell::new(9, 9));
        assert_eq!(left.step(&mut food), StepOutcome::GameOver);

        let mut down = SnakeGame::from_parts([Cell::new(5, 14)], Direction::Down, Cell::new(9, 9));
        assert_eq!(down.step(&mut food), StepOutcome::GameOver);
    }

    #[test]
    fn test_growth_on_food() {
        let mut food = FixedCells::new([Cell::new(1, 1)]);
        let mut game = SnakeGame::from_parts(
            [Cell::new(5, 5), Cell::new(4, 5)],
            Direction::Right,
            Cell::new(6, 5),
        );

        assert_eq!(game.step(&mut food), StepOutcome::Grew);
        assert_eq!(game.len(), 3);
        assert_eq!(game.food(), Cell::new(1, 1));
        let body: Vec<Cell> = game.body().copied().collect();
        assert_eq!(body, vec![Cell::new(6, 5), Cell::new(5, 5), Cell::new(4, 5)]);
    }

    #[test]
    fn test_move_keeps_length() {
        let mut food = far_food();
        let mut game = SnakeGame::from_parts(
            [Cell::new(5, 5), Cell::new(4, 5)],
            Direction::Right,
            Cell::new(0, 9),
        );

        assert_eq!(game.step(&mut food), StepOutcome::Moved);
        assert_eq!(game.len(), 2);
        assert_eq!(game.food(), Cell::new(0, 9));
        let body: Vec<Cell> = game.body().copied().collect();
        assert_eq!(body, vec![Cell::new(6, 5), Cell::new(5, 5)]);
    }

    #[test]
    fn test_self_collision() {
        let mut food = far_food();
        // A hook shape: head at (5,5) heading down into its own body at (5,6).
        let mut game = SnakeGame::from_parts(
            [
                Cell::new(5, 5),
                Cell::new(6, 5),
                Cell::new(6, 6),
                Cell::new(5, 6),
                Cell::new(4, 6),
            ],
            Direction::Down,
            Cell::new(0, 9),
        );

        assert_eq!(game.step(&mut food), StepOutcome::GameOver);
        assert_eq!(game.len(), 5);
    }

    #[test]
    fn test_reverse_turn_is_rejected() {
        let mut game = SnakeGame::from_parts([Cell::new(5, 5)], Direction::Right, Cell::new(0, 0));

        assert!(!game.turn(Direction::Left));
        assert_eq!(game.direction(), Direction::Right);
        assert!(game.turn(Direction::Up));
        assert!(!game.turn(Direction::Down));
        assert!(game.turn(Direction::Left));
        assert_eq!(game.direction(), Direction::Left);
    }

    #[test]
    fn test_no_turns_or_steps_after_game_over() {
        let mut food = far_food();
        let mut game = SnakeGame::from_parts([Cell::new(14, 0)], Direction::Right, Cell::new(0, 9));
        assert_eq!(game.step(&mut food), StepOutcome::GameOver);

        assert!(!game.turn(Direction::Down));
        assert_eq!(game.step(&mut food), StepOutcome::GameOver);
        assert_eq!(game.head(), Some(Cell::new(14, 0)));
    }
}
