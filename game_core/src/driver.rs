//! Per-frame driver for a local match against the AI

use crate::{build_frame, step, Config, ConfigError, GameRng, GameState, RandomSource, Side};
use proto::Frame;

/// Milliseconds from an arbitrary fixed origin
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Monotonic clock backed by `std::time::Instant`
pub struct SystemClock {
    origin: std::time::Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// A single-player match: one `step` and one frame per call to `frame`
///
/// Pointer events only overwrite the latched position; the next tick reads
/// whatever was written last.
pub struct LocalGame {
    pub state: GameState,
    clock: Box<dyn Clock>,
    rng: Box<dyn RandomSource>,
    start_ms: f64,
    pointer_y: f32,
    tick: u64,
}

impl LocalGame {
    pub fn new(
        config: Config,
        clock: Box<dyn Clock>,
        mut rng: Box<dyn RandomSource>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let state = GameState::new(config, rng.as_mut());
        let pointer_y = state
            .paddle(Side::Player)
            .map(|p| p.center_y())
            .unwrap_or(state.config.field_height / 2.0);
        let start_ms = clock.now_ms();

        log::info!(
            "Match started on {}x{} field",
            state.config.field_width,
            state.config.field_height
        );

        Ok(Self {
            state,
            clock,
            rng,
            start_ms,
            pointer_y,
            tick: 0,
        })
    }

    /// Wall clock and seeded `GameRng`
    pub fn with_seed(config: Config, seed: u64) -> Result<Self, ConfigError> {
        Self::new(config, Box::new(SystemClock::new()), Box::new(GameRng::new(seed)))
    }

    /// Latch the latest pointer position, in field coordinates
    pub fn set_pointer_y(&mut self, y: f32) {
        self.pointer_y = y;
    }

    pub fn pointer_y(&self) -> f32 {
        self.pointer_y
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Run one tick and build the frame to draw
    pub fn frame(&mut self) -> Frame {
        let elapsed = ((self.clock.now_ms() - self.start_ms) / 1000.0) as f32;
        step(&mut self.state, self.pointer_y, elapsed, self.rng.as_mut());
        self.tick += 1;
        build_frame(&self.state)
    }
}
