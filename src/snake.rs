use crate::grid::{Cell, Grid};
use std::collections::VecDeque;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    fn offset(self, unit: i32) -> (i32, i32) {
        match self {
            Direction::Up => (0, -unit),
            Direction::Down => (0, unit),
            Direction::Left => (-unit, 0),
            Direction::Right => (unit, 0),
        }
    }
}

/// How much the snake grows on this tick.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Growth {
    None,
    /// Normal apple: tail retained, +1 segment.
    Single,
    /// Golden apple: tail retained plus one extra tail duplicate, +2 segments.
    Double,
}

/// Snake body (head first) plus the current and buffered direction.
/// Key presses only touch the buffered direction; it is applied at the
/// start of the next tick.
pub struct Snake {
    body: VecDeque<Cell>,
    dir: Direction,
    pending: Direction,
}

impl Snake {
    pub fn new(start: Cell) -> Self {
        let mut body = VecDeque::new();
        body.push_back(start);
        Self {
            body,
            dir: Direction::Right,
            pending: Direction::Right,
        }
    }

    pub fn head(&self) -> Cell {
        *self.body.front().expect("snake body is never empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn direction(&self) -> Direction {
        self.dir
    }

    pub fn segments(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.body.iter().any(|&s| s == cell)
    }

    /// Buffer a direction change. A 180-degree turn is silently ignored
    /// and the last accepted direction persists.
    pub fn steer(&mut self, dir: Direction) {
        if dir != self.dir.opposite() {
            self.pending = dir;
        }
    }

    /// Apply the buffered direction at the start of a tick.
    pub fn apply_steering(&mut self) {
        self.dir = self.pending;
    }

    pub fn next_head(&self, grid: &Grid) -> Cell {
        let (dx, dy) = self.dir.offset(grid.unit);
        let head = self.head();
        Cell::new(head.x + dx, head.y + dy)
    }

    /// True if `cell` is out of bounds or on the body. Checked against the
    /// body as it stands before the tail is popped, so stepping onto the
    /// cell the tail is about to vacate still counts as a collision.
    pub fn will_collide(&self, cell: Cell, grid: &Grid) -> bool {
        !grid.contains(cell) || self.contains(cell)
    }

    /// Push the new head and trim or duplicate the tail per `growth`.
    pub fn advance(&mut self, head: Cell, growth: Growth) {
        self.body.push_front(head);
        match growth {
            Growth::None => {
                self.body.pop_back();
            }
            Growth::Single => {}
            Growth::Double => {
                let tail = *self.body.back().expect("snake body is never empty");
                self.body.push_back(tail);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::new(600, 600, 25)
    }

    #[test]
    fn single_cell_snake_moves_right() {
        let g = grid();
        let mut snake = Snake::new(Cell::new(100, 100));
        let next = snake.next_head(&g);
        assert_eq!(next, Cell::new(125, 100));
        assert!(!snake.will_collide(next, &g));
        snake.advance(next, Growth::None);
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Cell::new(125, 100));
    }

    #[test]
    fn reversal_is_ignored() {
        let mut snake = Snake::new(Cell::new(100, 100));
        snake.steer(Direction::Left);
        snake.apply_steering();
        assert_eq!(snake.direction(), Direction::Right);

        snake.steer(Direction::Up);
        snake.apply_steering();
        assert_eq!(snake.direction(), Direction::Up);
        snake.steer(Direction::Down);
        snake.apply_steering();
        assert_eq!(snake.direction(), Direction::Up);
    }

    #[test]
    fn left_wall_is_a_collision() {
        let g = grid();
        let mut snake = Snake::new(Cell::new(25, 100));
        snake.steer(Direction::Up);
        snake.apply_steering();
        snake.steer(Direction::Left);
        snake.apply_steering();
        snake.advance(Cell::new(0, 100), Growth::Single);
        let next = snake.next_head(&g);
        assert_eq!(next, Cell::new(-25, 100));
        assert!(snake.will_collide(next, &g));
    }

    #[test]
    fn body_cells_collide() {
        let g = grid();
        let mut snake = Snake::new(Cell::new(100, 100));
        snake.advance(Cell::new(125, 100), Growth::Single);
        snake.advance(Cell::new(150, 100), Growth::Single);
        assert!(snake.will_collide(Cell::new(100, 100), &g));
        assert!(snake.will_collide(Cell::new(125, 100), &g));
        assert!(!snake.will_collide(Cell::new(150, 125), &g));
    }

    #[test]
    fn vacating_tail_cell_still_collides() {
        let g = grid();
        // 2x2 loop: head would re-enter the tail cell on the same tick
        // the tail leaves it. The check runs before the pop, so it dies.
        let mut snake = Snake::new(Cell::new(100, 100));
        snake.advance(Cell::new(125, 100), Growth::Single);
        snake.advance(Cell::new(125, 125), Growth::Single);
        snake.advance(Cell::new(100, 125), Growth::Single);
        assert!(snake.will_collide(Cell::new(100, 100), &g));
    }

    #[test]
    fn growth_adds_expected_segments() {
        let mut snake = Snake::new(Cell::new(100, 100));
        snake.advance(Cell::new(125, 100), Growth::None);
        assert_eq!(snake.len(), 1);
        snake.advance(Cell::new(150, 100), Growth::Single);
        assert_eq!(snake.len(), 2);
        snake.advance(Cell::new(175, 100), Growth::Double);
        assert_eq!(snake.len(), 4);
        let tail: Vec<Cell> = snake.segments().copied().collect();
        // Extra golden segment duplicates the tail cell.
        assert_eq!(tail[2], tail[3]);
    }
}
