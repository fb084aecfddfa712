use crate::{Ball, Config, Events, Paddle, Side};
use glam::Vec2;
use hecs::World;
use log::{debug, warn};

/// Reflect the ball off the top and bottom walls
///
/// Only velocity flips. The ball is not pushed back inside, so it can sit
/// past the wall by up to one tick of travel.
pub fn check_wall_bounce(world: &mut World, config: &Config, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.y - ball.radius < 0.0 || ball.pos.y + ball.radius > config.field_height {
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }
    }
}

/// Check ball against both paddles
///
/// The player paddle is tested first, then the AI paddle against the
/// already-updated ball. The two tests are independent: a single tick can
/// deflect off both.
pub fn check_paddle_collisions(world: &mut World, config: &Config, events: &mut Events) {
    // Collect paddle data without holding borrows
    let mut paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| *p)
        .collect();
    paddles.sort_by_key(|p| p.side);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for paddle in &paddles {
            if paddle.overlaps(ball) {
                deflect(ball, paddle, config);
                events.ball_hit_paddle = true;
            }
        }
    }
}

/// Push the ball out of the paddle face and send it back at an angle
/// proportional to how far from center it struck
fn deflect(ball: &mut Ball, paddle: &Paddle, config: &Config) {
    let (face_x, dir) = match paddle.side {
        Side::Player => (paddle.pos.x + paddle.size.x + ball.radius, 1.0),
        Side::Ai => (paddle.pos.x - ball.radius, -1.0),
    };
    ball.pos.x = face_x;

    let angle = paddle.collide_point(ball.pos.y) * config.max_deflection;
    let vel = Vec2::new(dir * ball.speed * angle.cos(), ball.speed * angle.sin());

    if !vel.is_finite() {
        warn!(
            "Skipping {:?} paddle deflection: non-finite velocity {:?} (paddle height {})",
            paddle.side, vel, paddle.size.y
        );
        return;
    }

    debug!(
        "Ball hit {:?} paddle at y={:.1}, angle {:.3} rad",
        paddle.side, ball.pos.y, angle
    );
    ball.vel = vel;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};

    fn setup_world() -> (World, Config, Events) {
        let mut world = World::new();
        let config = Config::new();
        create_paddle(&mut world, Side::Player, &config);
        create_paddle(&mut world, Side::Ai, &config);
        (world, config, Events::new())
    }

    fn ball(world: &World) -> Ball {
        world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, b)| *b)
            .expect("ball exists")
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let (mut world, config, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(400.0, 8.0), Vec2::new(6.0, -4.0), &config);

        check_wall_bounce(&mut world, &config, &mut events);

        let b = ball(&world);
        assert_eq!(b.vel, Vec2::new(6.0, 4.0), "Only vy flips, exactly");
        assert_eq!(b.pos, Vec2::new(400.0, 8.0), "No position correction");
        assert!(events.ball_hit_wall, "Should trigger ball_hit_wall event");
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let (mut world, config, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(400.0, 595.0), Vec2::new(-6.0, 2.5), &config);

        check_wall_bounce(&mut world, &config, &mut events);

        let b = ball(&world);
        assert_eq!(b.vel, Vec2::new(-6.0, -2.5));
        assert_eq!(b.pos.y, 595.0);
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_wall_bounce_flips_even_when_moving_away() {
        // Ball still overlapping the wall after a bounce flips again
        let (mut world, config, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(400.0, 5.0), Vec2::new(6.0, 3.0), &config);

        check_wall_bounce(&mut world, &config, &mut events);

        assert_eq!(ball(&world).vel.y, -3.0);
    }

    #[test]
    fn test_no_wall_bounce_in_open_field() {
        let (mut world, config, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(400.0, 10.0), Vec2::new(6.0, -3.0), &config);

        check_wall_bounce(&mut world, &config, &mut events);

        assert_eq!(ball(&world).vel.y, -3.0, "Touching the wall is not crossing it");
        assert!(!events.ball_hit_wall);
    }

    #[test]
    fn test_center_hit_on_player_paddle() {
        let (mut world, config, mut events) = setup_world();
        // Player paddle spans y 250..350, face at x = 15
        create_ball(&mut world, Vec2::new(20.0, 300.0), Vec2::new(-6.0, 1.0), &config);

        check_paddle_collisions(&mut world, &config, &mut events);

        let b = ball(&world);
        assert_eq!(b.pos.x, 25.0, "Ball placed against the paddle face");
        assert_eq!(b.vel.x, 6.0);
        assert_eq!(b.vel.y, 0.0);
        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_center_hit_on_ai_paddle() {
        let (mut world, config, mut events) = setup_world();
        // AI paddle spans x 785..800, y 250..350
        create_ball(&mut world, Vec2::new(780.0, 300.0), Vec2::new(6.0, -2.0), &config);

        check_paddle_collisions(&mut world, &config, &mut events);

        let b = ball(&world);
        assert_eq!(b.pos.x, 775.0);
        assert_eq!(b.vel.x, -6.0);
        assert_eq!(b.vel.y, 0.0);
    }

    #[test]
    fn test_edge_hits_deflect_at_45_degrees() {
        let (mut world, config, mut events) = setup_world();
        // Bottom edge of player paddle: collidePoint = 1
        create_ball(&mut world, Vec2::new(20.0, 350.0), Vec2::new(-6.0, 0.0), &config);

        check_paddle_collisions(&mut world, &config, &mut events);

        let b = ball(&world);
        let expected = 6.0 * std::f32::consts::FRAC_PI_4.cos();
        assert!((b.vel.x - expected).abs() < 1e-5);
        assert!((b.vel.y - expected).abs() < 1e-5, "Bottom edge sends ball down");
    }

    #[test]
    fn test_top_half_hit_deflects_upward() {
        let (mut world, config, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(780.0, 260.0), Vec2::new(6.0, 0.0), &config);

        check_paddle_collisions(&mut world, &config, &mut events);

        let b = ball(&world);
        assert!(b.vel.x < 0.0, "Ball should bounce left off AI paddle");
        assert!(b.vel.y < 0.0, "Ball should deflect upward");
    }

    #[test]
    fn test_corner_hit_exceeds_45_degrees() {
        let (mut world, config, mut events) = setup_world();
        // Ball center 5 units above the paddle top: collidePoint = -1.1
        create_ball(&mut world, Vec2::new(20.0, 245.0), Vec2::new(-6.0, 0.0), &config);

        check_paddle_collisions(&mut world, &config, &mut events);

        let b = ball(&world);
        let angle = (b.vel.y / b.vel.x).atan().abs();
        assert!(angle > std::f32::consts::FRAC_PI_4);
    }

    #[test]
    fn test_deflection_uses_ramped_speed() {
        let (mut world, config, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(20.0, 300.0), Vec2::new(-6.0, 0.0), &config);
        for (_e, b) in world.query_mut::<&mut Ball>() {
            b.speed = 9.5;
        }

        check_paddle_collisions(&mut world, &config, &mut events);

        assert_eq!(ball(&world).vel.x, 9.5);
    }

    #[test]
    fn test_collision_ignores_ball_direction() {
        let (mut world, config, mut events) = setup_world();
        // Already moving away: still overlapping, still deflected
        create_ball(&mut world, Vec2::new(20.0, 300.0), Vec2::new(6.0, 0.0), &config);

        check_paddle_collisions(&mut world, &config, &mut events);

        assert_eq!(ball(&world).pos.x, 25.0);
        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_no_collision_in_open_field() {
        let (mut world, config, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(400.0, 300.0), Vec2::new(6.0, 3.0), &config);

        check_paddle_collisions(&mut world, &config, &mut events);

        assert_eq!(ball(&world).vel, Vec2::new(6.0, 3.0));
        assert!(!events.ball_hit_paddle);
    }

    #[test]
    fn test_both_paddles_checked_in_one_tick() {
        // Degenerate narrow field where both paddles overlap the ball
        let mut world = World::new();
        let config = Config::with_field(40.0, 600.0);
        create_paddle(&mut world, Side::Player, &config);
        create_paddle(&mut world, Side::Ai, &config);
        let mut events = Events::new();
        create_ball(&mut world, Vec2::new(20.0, 300.0), Vec2::new(6.0, 0.0), &config);

        check_paddle_collisions(&mut world, &config, &mut events);

        // Player hit puts ball at 25, which still overlaps the AI paddle (25..40)
        let b = ball(&world);
        assert_eq!(b.pos.x, 15.0, "AI paddle resolves last");
        assert_eq!(b.vel.x, -6.0);
    }

    #[test]
    fn test_zero_height_paddle_keeps_velocity_finite() {
        let mut world = World::new();
        let config = Config::new();
        let mut events = Events::new();
        world.spawn((Paddle::new(
            Side::Player,
            Vec2::new(0.0, 300.0),
            Vec2::new(15.0, 0.0),
        ),));
        create_ball(&mut world, Vec2::new(20.0, 300.0), Vec2::new(-6.0, 2.0), &config);

        check_paddle_collisions(&mut world, &config, &mut events);

        let b = ball(&world);
        assert_eq!(b.vel, Vec2::new(-6.0, 2.0), "Velocity update skipped");
        assert_eq!(b.pos.x, 25.0, "Ball still pushed out of the paddle");
    }
}
