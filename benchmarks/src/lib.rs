//! Shared setup helpers for the impulse2d benchmarks.

use glam::Vec2;
use impulse2d::{Collider, MassDistribution, PhysicsConfig, PhysicsWorld, RigidBody, Segment};

/// A world with `n` circles stacked loosely above a ground segment.
pub fn setup_dropping_circles(n: usize) -> PhysicsWorld {
    let mut world = PhysicsWorld::new(PhysicsConfig::default());
    world.add_static_segment(Segment {
        p0: Vec2::new(-20.0, 0.0),
        p1: Vec2::new(20.0, 0.0),
    });
    for i in 0..n {
        let x = (i % 10) as f32 * 0.35 - 1.75;
        let y = 0.5 + (i / 10) as f32 * 0.4;
        world.spawn(
            RigidBody::new(Vec2::new(x, y), MassDistribution::circle(1.0, 0.15), 0.4),
            Collider::Circle { radius: 0.15 },
        );
    }
    world
}
