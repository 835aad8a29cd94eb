//! Ground probe seam between the locomotion integrator and scene geometry

use glam::Vec3;

/// Read-only static geometry that a downward ground probe can be cast against.
///
/// The scene owns the geometry; the integrator only borrows it for the
/// duration of a tick, so mutation has to happen between ticks.
pub trait CollidableSet {
    /// Count the objects hit by a ray cast straight down (-Y) from `origin`.
    ///
    /// Only hits whose distance along the ray lies in `[near, far]` count.
    fn cast_downward(&self, origin: Vec3, near: f32, far: f32) -> usize;
}

/// A scene with no collidable geometry. Every probe misses.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyCollidables;

impl CollidableSet for EmptyCollidables {
    fn cast_downward(&self, _origin: Vec3, _near: f32, _far: f32) -> usize {
        0
    }
}

/// A probe that reports the same hit count for every query
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstantProbe(pub usize);

impl CollidableSet for ConstantProbe {
    fn cast_downward(&self, _origin: Vec3, _near: f32, _far: f32) -> usize {
        self.0
    }
}

impl<T: CollidableSet + ?Sized> CollidableSet for &T {
    fn cast_downward(&self, origin: Vec3, near: f32, far: f32) -> usize {
        (**self).cast_downward(origin, near, far)
    }
}

impl<T: CollidableSet + ?Sized> CollidableSet for Box<T> {
    fn cast_downward(&self, origin: Vec3, near: f32, far: f32) -> usize {
        (**self).cast_downward(origin, near, far)
    }
}

/// An absent collidable set behaves like an empty one
impl<T: CollidableSet> CollidableSet for Option<T> {
    fn cast_downward(&self, origin: Vec3, near: f32, far: f32) -> usize {
        match self {
            Some(set) => set.cast_downward(origin, near, far),
            None => 0,
        }
    }
}
