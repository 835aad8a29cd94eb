//! Stride Physics - Static collision geometry using rapier3d
//!
//! Provides the [`CollidableSet`] seam consumed by the locomotion integrator's
//! ground probe, and a rapier3d-backed [`CollisionWorld`] implementing it.
//! Nothing here simulates bodies: the set is static, queried only by rays.

mod probe;

pub use probe::{CollidableSet, ConstantProbe, EmptyCollidables};

use glam::Vec3;
use nalgebra::Unit;
use rapier3d::prelude::*;
use tracing::debug;

/// Static collidable geometry with a ray query pipeline
pub struct CollisionWorld {
    /// Rigid body storage (empty; required by rapier's query API)
    rigid_body_set: RigidBodySet,
    /// Collider storage
    collider_set: ColliderSet,
    /// Island manager (required by collider removal)
    island_manager: IslandManager,
    /// Query pipeline for raycasts
    query_pipeline: QueryPipeline,
}

impl CollisionWorld {
    /// Create an empty collision world
    pub fn new() -> Self {
        Self {
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
            island_manager: IslandManager::new(),
            query_pipeline: QueryPipeline::new(),
        }
    }

    /// Number of colliders in the world
    pub fn len(&self) -> usize {
        self.collider_set.len()
    }

    /// Whether the world has no colliders
    pub fn is_empty(&self) -> bool {
        self.collider_set.is_empty()
    }

    /// Add a static collider (ground, boxes, etc.)
    pub fn add_static_collider(&mut self, collider: Collider) -> ColliderHandle {
        let handle = self.collider_set.insert(collider);
        self.query_pipeline.update(&self.collider_set);
        debug!(?handle, total = self.collider_set.len(), "added static collider");
        handle
    }

    /// Remove a collider
    pub fn remove_collider(&mut self, handle: ColliderHandle) -> Option<Collider> {
        let removed = self.collider_set.remove(
            handle,
            &mut self.island_manager,
            &mut self.rigid_body_set,
            false,
        );
        if removed.is_some() {
            self.query_pipeline.update(&self.collider_set);
            debug!(?handle, "removed static collider");
        }
        removed
    }

    /// Get a collider by handle
    pub fn get_collider(&self, handle: ColliderHandle) -> Option<&Collider> {
        self.collider_set.get(handle)
    }

    /// Create a ground half-space whose surface sits at height `y`
    pub fn create_ground(&mut self, y: f32) -> ColliderHandle {
        let normal = Unit::new_normalize(vector![0.0, 1.0, 0.0]);
        let ground = ColliderBuilder::halfspace(normal)
            .translation(vector![0.0, y, 0.0])
            .build();
        self.add_static_collider(ground)
    }

    /// Create a static box collider
    pub fn create_static_box(&mut self, half_extents: Vec3, position: Vec3) -> ColliderHandle {
        let collider = ColliderBuilder::cuboid(half_extents.x, half_extents.y, half_extents.z)
            .translation(vector![position.x, position.y, position.z])
            .build();
        self.add_static_collider(collider)
    }

    /// Count every collider a ray crosses between `near` and `far`.
    ///
    /// `direction` is normalized so distances are in world units. A zero
    /// direction or an empty/inverted range yields no hits.
    pub fn count_ray_hits(&self, origin: Vec3, direction: Vec3, near: f32, far: f32) -> usize {
        let direction = direction.normalize_or_zero();
        if direction == Vec3::ZERO || near.is_nan() || far.is_nan() || far < near.max(0.0) {
            return 0;
        }

        let ray = Ray::new(
            point![origin.x, origin.y, origin.z],
            vector![direction.x, direction.y, direction.z],
        );

        let mut hits = 0;
        self.query_pipeline.intersections_with_ray(
            &self.rigid_body_set,
            &self.collider_set,
            &ray,
            far,
            true,
            QueryFilter::default(),
            |_handle, intersection| {
                if intersection.time_of_impact >= near {
                    hits += 1;
                }
                true
            },
        );
        hits
    }
}

impl Default for CollisionWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl CollidableSet for CollisionWorld {
    fn cast_downward(&self, origin: Vec3, near: f32, far: f32) -> usize {
        self.count_ray_hits(origin, Vec3::NEG_Y, near, far)
    }
}
