use rand::Rng;

pub const GOLD: [u8; 3] = [0xff, 0xd7, 0x00];

/// Colors sampled per-particle for a golden-apple burst.
pub const GOLDEN_BURST_COLORS: [[u8; 3]; 5] = [
    [0xff, 0xd7, 0x00],
    [0xff, 0x6b, 0x00],
    [0xff, 0x14, 0x93],
    [0x00, 0xce, 0xd1],
    [0xad, 0xff, 0x2f],
];

#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub dx: f32,
    pub dy: f32,
    pub life: i32,
    pub color: [u8; 3],
}

impl Particle {
    /// Rendered radius shrinks as the particle dies.
    pub fn radius(&self) -> i32 {
        (self.life / 3).max(1)
    }
}

/// Short-lived eat-effect particles. Positions are in pixels, velocities in
/// pixels per tick.
pub struct Particles {
    items: Vec<Particle>,
}

impl Particles {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Spawn `count` particles at `origin` with velocity components drawn
    /// uniformly from `-velocity_range..=velocity_range` and a color picked
    /// per particle from `colors`.
    pub fn burst(
        &mut self,
        rng: &mut impl Rng,
        origin: (f32, f32),
        count: usize,
        velocity_range: i32,
        life: i32,
        colors: &[[u8; 3]],
    ) {
        for _ in 0..count {
            let color = colors[rng.gen_range(0..colors.len())];
            self.items.push(Particle {
                x: origin.0,
                y: origin.1,
                dx: rng.gen_range(-velocity_range..=velocity_range) as f32,
                dy: rng.gen_range(-velocity_range..=velocity_range) as f32,
                life,
                color,
            });
        }
    }

    /// Advance every particle one tick and drop the dead ones.
    pub fn tick(&mut self) {
        for p in &mut self.items {
            p.x += p.dx;
            p.y += p.dy;
            p.life -= 1;
        }
        self.items.retain(|p| p.life > 0);
    }
}
