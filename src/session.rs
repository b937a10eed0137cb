use crate::food::{FoodField, FoodKind};
use crate::grid::{Cell, Grid};
use crate::particles::{GOLD, GOLDEN_BURST_COLORS, Particles};
use crate::score::{GOLDEN_POINTS, NORMAL_POINTS, Rainbow, ScoreBoard};
use crate::snake::{Direction, Growth, Snake};
use rand::Rng;

pub const BOARD_WIDTH: i32 = 600;
pub const BOARD_HEIGHT: i32 = 600;
pub const UNIT_SIZE: i32 = 25;

const START_CELL: Cell = Cell { x: 100, y: 100 };

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Running,
    GameOver,
}

/// What a single tick did, for the caller to log or react to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TickOutcome {
    Moved,
    Ate(FoodKind),
    Died,
    /// Tick on an already-finished session; nothing happened.
    Idle,
}

/// All mutable state of one game, reset atomically on restart. The event
/// loop owns rendering and input; this struct owns the rules.
pub struct Session {
    pub grid: Grid,
    pub snake: Snake,
    pub food: FoodField,
    pub score: ScoreBoard,
    pub rainbow: Rainbow,
    pub particles: Particles,
    pub phase: Phase,
}

impl Session {
    pub fn new(rng: &mut impl Rng) -> Self {
        let grid = Grid::new(BOARD_WIDTH, BOARD_HEIGHT, UNIT_SIZE);
        let snake = Snake::new(START_CELL);
        let food = FoodField::new(rng, &grid, &snake);
        Self {
            grid,
            snake,
            food,
            score: ScoreBoard::new(),
            rainbow: Rainbow::new(),
            particles: Particles::new(),
            phase: Phase::Running,
        }
    }

    /// Fresh Running state; equivalent to `new` but keeps the allocation
    /// pattern obvious at the call site.
    pub fn restart(&mut self, rng: &mut impl Rng) {
        *self = Session::new(rng);
    }

    pub fn steer(&mut self, dir: Direction) {
        if self.phase == Phase::Running {
            self.snake.steer(dir);
        }
    }

    /// Milliseconds until the next tick should run.
    pub fn tick_interval_ms(&self) -> u64 {
        self.score.speed_ms()
    }

    /// One fixed-timestep simulation step.
    pub fn tick(&mut self, rng: &mut impl Rng) -> TickOutcome {
        if self.phase != Phase::Running {
            return TickOutcome::Idle;
        }

        self.snake.apply_steering();
        let head = self.snake.next_head(&self.grid);

        if self.snake.will_collide(head, &self.grid) {
            self.phase = Phase::GameOver;
            return TickOutcome::Died;
        }

        let eaten = self.food.eaten_at(head);
        match eaten {
            Some(FoodKind::Normal) => {
                self.snake.advance(head, Growth::Single);
                self.score.award(NORMAL_POINTS);
                self.particles
                    .burst(rng, head.center(self.grid.unit), 8, 3, 15, &[GOLD]);
                self.food.respawn_apple(rng, &self.grid, &self.snake);
            }
            Some(FoodKind::Golden) => {
                self.snake.advance(head, Growth::Double);
                self.score.award(GOLDEN_POINTS);
                self.particles.burst(
                    rng,
                    head.center(self.grid.unit),
                    16,
                    5,
                    25,
                    &GOLDEN_BURST_COLORS,
                );
                self.rainbow.arm();
                self.food.consume_golden();
            }
            None => {
                self.snake.advance(head, Growth::None);
            }
        }

        self.food.step_golden(rng, &self.grid, &self.snake);
        self.rainbow.step();
        self.particles.tick();

        match eaten {
            Some(kind) => TickOutcome::Ate(kind),
            None => TickOutcome::Moved,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(1234)
    }

    /// Park the apple and golden apple where the test wants them.
    fn place_food(session: &mut Session, apple: Cell, golden: Option<Cell>) {
        session.food.apple = apple;
        session.food.golden = golden;
    }

    #[test]
    fn plain_move_keeps_length_and_stays_running() {
        let mut rng = rng();
        let mut session = Session::new(&mut rng);
        place_food(&mut session, Cell::new(500, 500), None);

        let outcome = session.tick(&mut rng);
        assert_eq!(outcome, TickOutcome::Moved);
        assert_eq!(session.snake.head(), Cell::new(125, 100));
        assert_eq!(session.snake.len(), 1);
        assert_eq!(session.phase, Phase::Running);
    }

    #[test]
    fn wall_hit_transitions_to_game_over() {
        let mut rng = rng();
        let mut session = Session::new(&mut rng);
        place_food(&mut session, Cell::new(500, 500), None);

        // Head starts at x=100 moving right; 20 more cells reach the wall.
        let mut outcome = TickOutcome::Moved;
        for _ in 0..25 {
            outcome = session.tick(&mut rng);
            if outcome == TickOutcome::Died {
                break;
            }
        }
        assert_eq!(outcome, TickOutcome::Died);
        assert_eq!(session.phase, Phase::GameOver);
        // Terminal: further ticks are no-ops.
        assert_eq!(session.tick(&mut rng), TickOutcome::Idle);
    }

    #[test]
    fn normal_apple_grows_scores_and_sparks() {
        let mut rng = rng();
        let mut session = Session::new(&mut rng);
        place_food(&mut session, Cell::new(125, 100), None);

        let outcome = session.tick(&mut rng);
        assert_eq!(outcome, TickOutcome::Ate(FoodKind::Normal));
        assert_eq!(session.snake.len(), 2);
        assert_eq!(session.score.score(), 10);
        // 8 particles spawned, then aged one tick.
        assert_eq!(session.particles.len(), 8);
        assert!(!session.snake.contains(session.food.apple));
    }

    #[test]
    fn golden_apple_grows_by_two_and_arms_rainbow() {
        let mut rng = rng();
        let mut session = Session::new(&mut rng);
        // Body length 3 heading right.
        place_food(&mut session, Cell::new(125, 100), None);
        session.tick(&mut rng);
        place_food(&mut session, Cell::new(150, 100), None);
        session.tick(&mut rng);
        assert_eq!(session.snake.len(), 3);

        place_food(&mut session, Cell::new(500, 500), Some(Cell::new(175, 100)));
        let outcome = session.tick(&mut rng);
        assert_eq!(outcome, TickOutcome::Ate(FoodKind::Golden));
        assert_eq!(session.snake.len(), 5);
        assert_eq!(session.score.score(), 70);
        assert!(session.rainbow.is_active());
        assert_eq!(session.food.golden, None);
    }

    #[test]
    fn score_matches_food_totals() {
        let mut rng = rng();
        let mut session = Session::new(&mut rng);
        // Feed 4 normal apples along the row, then one golden.
        for i in 0..4 {
            place_food(&mut session, Cell::new(125 + i * 25, 100), None);
            assert_eq!(session.tick(&mut rng), TickOutcome::Ate(FoodKind::Normal));
        }
        place_food(&mut session, Cell::new(500, 500), Some(Cell::new(225, 100)));
        assert_eq!(session.tick(&mut rng), TickOutcome::Ate(FoodKind::Golden));

        assert_eq!(session.score.score(), 4 * 10 + 50);
        assert_eq!(session.score.level(), 90 / 50 + 1);
    }

    #[test]
    fn restart_resets_everything() {
        let mut rng = rng();
        let mut session = Session::new(&mut rng);
        place_food(&mut session, Cell::new(125, 100), None);
        session.tick(&mut rng);
        session.phase = Phase::GameOver;

        session.restart(&mut rng);
        assert_eq!(session.phase, Phase::Running);
        assert_eq!(session.snake.len(), 1);
        assert_eq!(session.snake.head(), START_CELL);
        assert_eq!(session.score.score(), 0);
        assert_eq!(session.score.level(), 1);
        assert_eq!(session.tick_interval_ms(), 120);
        assert_eq!(session.particles.len(), 0);
        assert_eq!(session.food.golden, None);
        assert!(!session.rainbow.is_active());
    }

    #[test]
    fn speed_follows_level_for_scheduling() {
        let mut rng = rng();
        let mut session = Session::new(&mut rng);
        assert_eq!(session.tick_interval_ms(), 120);
        for i in 0..5 {
            place_food(&mut session, Cell::new(125 + i * 25, 100), None);
            session.tick(&mut rng);
        }
        // 50 points -> level 2 -> 110 ms.
        assert_eq!(session.score.level(), 2);
        assert_eq!(session.tick_interval_ms(), 110);
    }
}
