use crate::{Ball, Config, Events, Paddle, RandomSource, Side};
use hecs::World;
use log::info;

/// Check if ball left the field (scoring)
///
/// A ball past the left edge scores for the AI, past the right edge for the
/// player. Either way the ball is served again from the center.
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    events: &mut Events,
    rng: &mut dyn RandomSource,
) {
    let mut scorer = None;
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let side = if ball.pos.x - ball.radius < 0.0 {
            Side::Ai
        } else if ball.pos.x + ball.radius > config.field_width {
            Side::Player
        } else {
            continue;
        };

        ball.reset(config.ball_spawn(), config.ball_speed_base, rng);
        scorer = Some(side);
    }

    let Some(side) = scorer else {
        return;
    };

    match side {
        Side::Player => events.player_scored = true,
        Side::Ai => events.ai_scored = true,
    }

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == side {
            paddle.score += 1;
            info!("{:?} scores, now {}", side, paddle.score);
        }
    }
}
