pub const NORMAL_POINTS: u32 = 10;
pub const GOLDEN_POINTS: u32 = 50;
/// Base tick interval in ms; shrinks with level down to the floor.
pub const BASE_SPEED_MS: u64 = 120;
pub const MIN_SPEED_MS: u64 = 80;
/// Ticks the rainbow effect stays active after a golden apple.
pub const RAINBOW_DURATION_TICKS: u32 = 300;

/// Body color per level; levels beyond the palette keep the last entry.
pub const LEVEL_PALETTE: [[u8; 3]; 7] = [
    [0x00, 0xff, 0x00],
    [0xff, 0xd7, 0x00],
    [0xff, 0x6b, 0x6b],
    [0x4e, 0xcd, 0xc4],
    [0x45, 0xb7, 0xd1],
    [0x96, 0xce, 0xb4],
    [0xff, 0xea, 0xa7],
];

/// Score, derived level, and the per-level movement speed and snake color.
pub struct ScoreBoard {
    score: u32,
    level: u32,
    speed_ms: u64,
    color: [u8; 3],
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self {
            score: 0,
            level: 1,
            speed_ms: BASE_SPEED_MS,
            color: LEVEL_PALETTE[0],
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn speed_ms(&self) -> u64 {
        self.speed_ms
    }

    pub fn color(&self) -> [u8; 3] {
        self.color
    }

    /// Add points and recompute level, speed and color on a level-up.
    pub fn award(&mut self, points: u32) {
        self.score += points;
        let new_level = self.score / 50 + 1;
        if new_level > self.level {
            self.level = new_level;
            self.speed_ms = (BASE_SPEED_MS.saturating_sub(self.level as u64 * 5)).max(MIN_SPEED_MS);
            let idx = (self.level as usize - 1).min(LEVEL_PALETTE.len() - 1);
            self.color = LEVEL_PALETTE[idx];
        }
    }
}

/// Timed cosmetic state cycling the snake's colors after a golden apple.
pub struct Rainbow {
    active: bool,
    timer: u32,
}

impl Rainbow {
    pub fn new() -> Self {
        Self {
            active: false,
            timer: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn arm(&mut self) {
        self.active = true;
        self.timer = 0;
    }

    pub fn step(&mut self) {
        if self.active {
            self.timer += 1;
            if self.timer > RAINBOW_DURATION_TICKS {
                self.active = false;
                self.timer = 0;
            }
        }
    }

    /// Phase-shifted sine wave per channel; `offset` staggers body segments.
    pub fn color(&self, offset: u32) -> [u8; 3] {
        let hue = (self.timer + offset) as f32 * 0.1;
        let channel = |phase: f32| ((hue + phase).sin() + 1.0) * 127.5;
        [
            channel(0.0) as u8,
            channel(2.094) as u8,
            channel(4.189) as u8,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_accumulates_per_food_kind() {
        let mut board = ScoreBoard::new();
        for _ in 0..3 {
            board.award(NORMAL_POINTS);
        }
        for _ in 0..2 {
            board.award(GOLDEN_POINTS);
        }
        assert_eq!(board.score(), 130);
        assert_eq!(board.level(), 130 / 50 + 1);
    }

    #[test]
    fn level_progression_adjusts_speed_and_color() {
        let mut board = ScoreBoard::new();
        assert_eq!(board.level(), 1);
        assert_eq!(board.speed_ms(), 120);

        board.award(GOLDEN_POINTS);
        assert_eq!(board.level(), 2);
        assert_eq!(board.speed_ms(), 110);
        assert_eq!(board.color(), LEVEL_PALETTE[1]);
    }

    #[test]
    fn speed_floors_at_minimum() {
        let mut board = ScoreBoard::new();
        for _ in 0..30 {
            board.award(GOLDEN_POINTS);
        }
        assert_eq!(board.speed_ms(), MIN_SPEED_MS);
        assert_eq!(board.color(), LEVEL_PALETTE[6]);
    }

    #[test]
    fn rainbow_expires_after_fixed_duration() {
        let mut rainbow = Rainbow::new();
        rainbow.arm();
        for _ in 0..RAINBOW_DURATION_TICKS {
            rainbow.step();
            assert!(rainbow.is_active());
        }
        rainbow.step();
        assert!(!rainbow.is_active());
    }

    #[test]
    fn rearming_resets_the_timer() {
        let mut rainbow = Rainbow::new();
        rainbow.arm();
        for _ in 0..200 {
            rainbow.step();
        }
        rainbow.arm();
        for _ in 0..RAINBOW_DURATION_TICKS {
            rainbow.step();
        }
        assert!(rainbow.is_active());
    }
}
