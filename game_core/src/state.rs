use crate::{
    create_ball, create_paddle, Ball, Config, Events, MatchClock, Paddle, RandomSource, Side,
};
use glam::Vec2;
use hecs::World;

/// Everything one match needs: paddles and ball in a hecs world, plus the
/// field configuration and match clock
///
/// Only `step` mutates it once the match is running.
pub struct GameState {
    pub world: World,
    pub config: Config,
    pub clock: MatchClock,
    pub events: Events,
}

impl GameState {
    /// Lay out a fresh match: paddles centered at the field edges, ball
    /// served from the center
    pub fn new(config: Config, rng: &mut dyn RandomSource) -> Self {
        let mut world = World::new();
        create_paddle(&mut world, Side::Player, &config);
        create_paddle(&mut world, Side::Ai, &config);

        let mut ball = Ball::new(
            Vec2::ZERO,
            Vec2::ZERO,
            config.ball_radius,
            config.ball_speed_base,
        );
        ball.reset(config.ball_spawn(), config.ball_speed_base, rng);
        world.spawn((ball,));

        Self {
            world,
            config,
            clock: MatchClock::new(),
            events: Events::new(),
        }
    }

    /// Build a state from explicit pieces, for replays and tests
    pub fn from_parts(config: Config, ball_pos: Vec2, ball_vel: Vec2) -> Self {
        let mut world = World::new();
        create_paddle(&mut world, Side::Player, &config);
        create_paddle(&mut world, Side::Ai, &config);
        create_ball(&mut world, ball_pos, ball_vel, &config);

        Self {
            world,
            config,
            clock: MatchClock::new(),
            events: Events::new(),
        }
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| *p)
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, b)| *b)
    }

    pub fn score(&self, side: Side) -> u32 {
        self.paddle(side).map(|p| p.score).unwrap_or(0)
    }
}
