use crate::{Ball, Config, Paddle, Side};
use hecs::World;

/// Move the AI paddle a fixed step toward the ball
///
/// No prediction: the paddle chases the ball's current y and holds still while
/// the ball is within the dead zone around its center.
pub fn track_ball(world: &mut World, config: &Config) {
    let ball_y = match world.query::<&Ball>().iter().next().map(|(_e, b)| b.pos.y) {
        Some(y) => y,
        None => return, // No ball in world
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Ai {
            continue;
        }

        let center = paddle.center_y();
        if ball_y < center - config.ai_dead_zone {
            paddle.pos.y -= config.ai_step;
        } else if ball_y > center + config.ai_dead_zone {
            paddle.pos.y += config.ai_step;
        }

        paddle.pos.y = config.clamp_paddle_y(paddle.pos.y);
    }
}
