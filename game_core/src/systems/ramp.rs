use crate::{Ball, Config, MatchClock};
use hecs::World;

/// Raise ball speed once the match has run past the ramp delay
///
/// The step is applied per tick, so the ramp rate scales with the tick rate.
pub fn ramp_ball_speed(world: &mut World, clock: &MatchClock, config: &Config) {
    if clock.elapsed <= config.speed_ramp_delay {
        return;
    }

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.speed < config.ball_speed_max {
            ball.speed = (ball.speed + config.speed_ramp_step).min(config.ball_speed_max);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn setup(speed: f32) -> (World, hecs::Entity, Config) {
        let mut world = World::new();
        let ball = world.spawn((Ball::new(Vec2::new(400.0, 300.0), Vec2::ZERO, 10.0, speed),));
        (world, ball, Config::new())
    }

    fn speed(world: &World, ball: hecs::Entity) -> f32 {
        world.get::<&Ball>(ball).expect("ball exists").speed
    }

    #[test]
    fn test_no_ramp_before_delay() {
        let (mut world, ball, config) = setup(6.0);
        let clock = MatchClock { elapsed: 30.0 };

        ramp_ball_speed(&mut world, &clock, &config);

        assert_eq!(speed(&world, ball), 6.0, "Ramp starts strictly after 30s");
    }

    #[test]
    fn test_ramp_adds_step_per_tick() {
        let (mut world, ball, config) = setup(6.0);
        let clock = MatchClock { elapsed: 30.5 };

        ramp_ball_speed(&mut world, &clock, &config);
        assert!((speed(&world, ball) - 6.02).abs() < 1e-5);

        ramp_ball_speed(&mut world, &clock, &config);
        assert!((speed(&world, ball) - 6.04).abs() < 1e-5);
    }

    #[test]
    fn test_ramp_never_exceeds_cap() {
        let (mut world, ball, config) = setup(11.99);
        let clock = MatchClock { elapsed: 90.0 };

        let mut last = speed(&world, ball);
        for _ in 0..10 {
            ramp_ball_speed(&mut world, &clock, &config);
            let now = speed(&world, ball);
            assert!(now >= last, "Speed must not decrease");
            last = now;
        }
        assert_eq!(speed(&world, ball), config.ball_speed_max);
    }

    #[test]
    fn test_ramp_leaves_speed_above_cap_untouched() {
        let (mut world, ball, config) = setup(15.0);
        let clock = MatchClock { elapsed: 90.0 };

        ramp_ball_speed(&mut world, &clock, &config);

        assert_eq!(speed(&world, ball), 15.0);
    }
}
