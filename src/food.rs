use crate::grid::{Cell, Grid};
use crate::snake::Snake;
use rand::Rng;

/// Ticks a vacant golden window must last before a new golden apple may spawn.
pub const GOLDEN_MIN_IDLE_TICKS: u32 = 100;
/// Ticks an uneaten golden apple stays on the board.
pub const GOLDEN_LIFETIME_TICKS: u32 = 250;
/// Per-tick spawn probability once the idle window has passed.
pub const GOLDEN_SPAWN_CHANCE: f64 = 0.005;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FoodKind {
    Normal,
    Golden,
}

/// The one normal apple that is always present, plus an occasional golden
/// apple. A single timer serves both the idle window (while no golden is
/// active) and the remaining lifetime (while one is).
pub struct FoodField {
    pub apple: Cell,
    pub golden: Option<Cell>,
    timer: u32,
}

impl FoodField {
    pub fn new(rng: &mut impl Rng, grid: &Grid, snake: &Snake) -> Self {
        let apple = spawn_cell(rng, grid, snake, None);
        Self {
            apple,
            golden: None,
            timer: 0,
        }
    }

    /// Replace the eaten normal apple, avoiding the body and the golden
    /// apple if one is on the board.
    pub fn respawn_apple(&mut self, rng: &mut impl Rng, grid: &Grid, snake: &Snake) {
        self.apple = spawn_cell(rng, grid, snake, self.golden);
    }

    /// Clear an eaten golden apple and restart the idle window.
    pub fn consume_golden(&mut self) {
        self.golden = None;
        self.timer = 0;
    }

    /// Golden spawn/expiry gating, run once per tick after movement.
    pub fn step_golden(&mut self, rng: &mut impl Rng, grid: &Grid, snake: &Snake) {
        self.timer += 1;
        match self.golden {
            None => {
                if self.timer > GOLDEN_MIN_IDLE_TICKS && rng.r#gen::<f64>() < GOLDEN_SPAWN_CHANCE {
                    self.golden = Some(spawn_cell(rng, grid, snake, Some(self.apple)));
                    self.timer = 0;
                }
            }
            Some(_) => {
                if self.timer > GOLDEN_LIFETIME_TICKS {
                    self.golden = None;
                    self.timer = 0;
                }
            }
        }
    }

    /// What the snake ate by landing on `head`, if anything.
    pub fn eaten_at(&self, head: Cell) -> Option<FoodKind> {
        if head == self.apple {
            Some(FoodKind::Normal)
        } else if self.golden == Some(head) {
            Some(FoodKind::Golden)
        } else {
            None
        }
    }
}

/// Rejection-sample a free grid-aligned cell. Expected iterations stay low
/// as long as the board dwarfs the snake, which it does in practice.
fn spawn_cell(rng: &mut impl Rng, grid: &Grid, snake: &Snake, excluded: Option<Cell>) -> Cell {
    loop {
        let cell = grid.random_cell(rng);
        if !snake.contains(cell) && Some(cell) != excluded {
            return cell;
        }
    }
}
