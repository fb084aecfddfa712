pub mod components;
pub mod config;
pub mod driver;
pub mod error;
pub mod params;
pub mod render;
pub mod resources;
pub mod state;
pub mod systems;

pub use components::*;
pub use config::*;
pub use driver::*;
pub use error::*;
pub use params::*;
pub use render::*;
pub use resources::*;
pub use state::*;

use hecs::World;
use systems::*;

/// Advance the match by one tick
///
/// `pointer_y` is the latest pointer position in field coordinates and
/// `elapsed` the seconds since match start. Every quantity moves by a fixed
/// amount per call, so game speed follows the caller's tick rate.
pub fn step(state: &mut GameState, pointer_y: f32, elapsed: f32, rng: &mut dyn RandomSource) {
    let GameState {
        world,
        config,
        clock,
        events,
    } = state;

    // Clear events at start of tick
    events.clear();
    clock.advance_to(elapsed);

    // 1. Snap player paddle to pointer
    apply_pointer(world, pointer_y, config);

    // 2. Move ball
    move_ball(world);

    // 3. Difficulty ramp
    ramp_ball_speed(world, clock, config);

    // 4. Top/bottom walls
    check_wall_bounce(world, config, events);

    // 5-6. Player then AI paddle
    check_paddle_collisions(world, config, events);

    // 7. Ball exited the field
    check_scoring(world, config, events, rng);

    // 8. AI follows the ball
    track_ball(world, config);
}

/// Helper to create a paddle entity at its starting position
pub fn create_paddle(world: &mut World, side: Side, config: &Config) -> hecs::Entity {
    let pos = glam::Vec2::new(config.paddle_x(side), config.paddle_spawn_y());
    let size = glam::Vec2::new(config.paddle_width, config.paddle_height);
    world.spawn((Paddle::new(side, pos, size),))
}

/// Helper to create the ball entity at base speed
pub fn create_ball(
    world: &mut World,
    pos: glam::Vec2,
    vel: glam::Vec2,
    config: &Config,
) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel, config.ball_radius, config.ball_speed_base),))
}
