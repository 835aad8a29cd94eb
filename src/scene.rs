//! Collidable scenery for the headless walk
//!
//! Boxes are scattered on a 20-unit grid around the spawn point, stacked at
//! multiples of 20 in height. Placement is seeded so runs are reproducible.

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use stride_physics::CollisionWorld;
use tracing::info;

/// Edge length of every box
pub const BOX_SIZE: f32 = 20.0;

/// Box centers for a seeded scatter
pub fn box_positions(seed: u64, count: usize) -> Vec<Vec3> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let x = (rng.gen_range(0.0..20.0f32) - 10.0).floor() * BOX_SIZE;
            let y = rng.gen_range(0.0..20.0f32).floor() * BOX_SIZE + BOX_SIZE / 2.0;
            let z = (rng.gen_range(0.0..20.0f32) - 10.0).floor() * BOX_SIZE;
            Vec3::new(x, y, z)
        })
        .collect()
}

/// Build the collision world the ground probe is cast against
pub fn build(seed: u64, count: usize) -> CollisionWorld {
    let mut world = CollisionWorld::new();
    let half_extents = Vec3::splat(BOX_SIZE / 2.0);
    for position in box_positions(seed, count) {
        world.create_static_box(half_extents, position);
    }
    info!(boxes = world.len(), seed, "scene built");
    world
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scatter_is_seeded() {
        assert_eq!(box_positions(9, 50), box_positions(9, 50));
        assert_ne!(box_positions(9, 50), box_positions(10, 50));
    }

    #[test]
    fn boxes_sit_on_the_grid() {
        for position in box_positions(3, 100) {
            assert_eq!(position.x % BOX_SIZE, 0.0);
            assert_eq!(position.z % BOX_SIZE, 0.0);
            assert_eq!((position.y - BOX_SIZE / 2.0) % BOX_SIZE, 0.0);
            assert!(position.y >= BOX_SIZE / 2.0);
        }
    }

    #[test]
    fn build_inserts_every_box() {
        let world = build(5, 25);
        assert_eq!(world.len(), 25);
    }
}
