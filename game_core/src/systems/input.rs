use crate::{Config, Paddle, Side};
use hecs::World;
use log::warn;

/// Snap the player paddle so its center sits on the pointer
///
/// Direct assignment every tick, no smoothing.
pub fn apply_pointer(world: &mut World, pointer_y: f32, config: &Config) {
    if !pointer_y.is_finite() {
        warn!("Ignoring non-finite pointer position {}", pointer_y);
        return;
    }

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Player {
            paddle.pos.y = config.clamp_paddle_y(pointer_y - paddle.size.y / 2.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_paddle;

    fn setup_world() -> (World, Config) {
        let mut world = World::new();
        let config = Config::new();
        create_paddle(&mut world, Side::Player, &config);
        create_paddle(&mut world, Side::Ai, &config);
        (world, config)
    }

    fn paddle_y(world: &World, side: Side) -> f32 {
        world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| p.pos.y)
            .expect("paddle exists")
    }

    #[test]
    fn test_pointer_centers_player_paddle() {
        let (mut world, config) = setup_world();
        apply_pointer(&mut world, 200.0, &config);
        assert_eq!(paddle_y(&world, Side::Player), 150.0);
    }

    #[test]
    fn test_pointer_clamped_to_field() {
        let (mut world, config) = setup_world();

        apply_pointer(&mut world, 10.0, &config);
        assert_eq!(paddle_y(&world, Side::Player), 0.0);

        apply_pointer(&mut world, 599.0, &config);
        assert_eq!(paddle_y(&world, Side::Player), 500.0);

        apply_pointer(&mut world, -3000.0, &config);
        assert_eq!(paddle_y(&world, Side::Player), 0.0);
    }

    #[test]
    fn test_pointer_leaves_ai_alone() {
        let (mut world, config) = setup_world();
        apply_pointer(&mut world, 50.0, &config);
        assert_eq!(paddle_y(&world, Side::Ai), config.paddle_spawn_y());
    }

    #[test]
    fn test_non_finite_pointer_ignored() {
        let (mut world, config) = setup_world();
        apply_pointer(&mut world, 200.0, &config);
        apply_pointer(&mut world, f32::NAN, &config);
        assert_eq!(paddle_y(&world, Side::Player), 150.0);
    }
}
