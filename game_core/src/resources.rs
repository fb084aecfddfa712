use rand::Rng;

/// Seconds elapsed since the match started
///
/// Only moves forward; a stale reading is ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MatchClock {
    pub elapsed: f32,
}

impl MatchClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance_to(&mut self, elapsed: f32) {
        if elapsed > self.elapsed {
            self.elapsed = elapsed;
        }
    }

    /// Whole seconds for display
    pub fn whole_seconds(&self) -> u32 {
        self.elapsed.floor() as u32
    }
}

/// Source of uniform floats in [0, 1)
pub trait RandomSource {
    fn next_float(&mut self) -> f32;
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

impl RandomSource for GameRng {
    fn next_float(&mut self) -> f32 {
        self.0.gen::<f32>()
    }
}

/// Replays a fixed list of values, wrapping around at the end
#[derive(Debug, Clone)]
pub struct SequenceRng {
    values: Vec<f32>,
    index: usize,
}

impl SequenceRng {
    pub fn new(values: Vec<f32>) -> Self {
        Self { values, index: 0 }
    }
}

impl RandomSource for SequenceRng {
    fn next_float(&mut self) -> f32 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.index % self.values.len()];
        self.index += 1;
        value
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub player_scored: bool,
    pub ai_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.player_scored = false;
        self.ai_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }
}
