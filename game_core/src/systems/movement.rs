use crate::Ball;
use hecs::World;

/// Move ball by one tick of velocity
///
/// Velocity is in units per tick, so simulation speed follows the tick rate.
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}
