use crate::RandomSource;
use glam::Vec2;

/// Which end of the field a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    Player, // left, pointer controlled
    Ai,     // right, tracks the ball
}

/// Paddle component
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2,  // top-left corner
    pub size: Vec2, // width, height
    pub score: u32,
}

impl Paddle {
    pub fn new(side: Side, pos: Vec2, size: Vec2) -> Self {
        Self {
            side,
            pos,
            size,
            score: 0,
        }
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    /// Bounding-box test of the ball's square hull against this paddle
    pub fn overlaps(&self, ball: &Ball) -> bool {
        let r = ball.radius;
        ball.pos.x - r < self.pos.x + self.size.x
            && ball.pos.x + r > self.pos.x
            && ball.pos.y + r > self.pos.y
            && ball.pos.y - r < self.pos.y + self.size.y
    }

    /// Normalized contact offset from the paddle's center
    ///
    /// -1 at the top edge, 1 at the bottom edge. Not clamped: a corner hit
    /// can land outside that range.
    pub fn collide_point(&self, ball_y: f32) -> f32 {
        let half = self.size.y / 2.0;
        (ball_y - (self.pos.y + half)) / half
    }
}

/// Ball component
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2, // center
    pub vel: Vec2,
    pub radius: f32,
    /// Target speed used for paddle deflections, separate from |vel|
    pub speed: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, speed: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            speed,
        }
    }

    /// Re-center the ball with base speed and a random serve
    ///
    /// Horizontal velocity is always full base speed toward one side; vertical
    /// velocity is uniform in [-base, base).
    pub fn reset(&mut self, center: Vec2, base_speed: f32, rng: &mut dyn RandomSource) {
        self.pos = center;
        self.speed = base_speed;

        let dir = if rng.next_float() > 0.5 { 1.0 } else { -1.0 };
        let vy = base_speed * (rng.next_float() * 2.0 - 1.0);
        self.vel = Vec2::new(base_speed * dir, vy);
    }
}
