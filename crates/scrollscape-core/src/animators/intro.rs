use super::{camera_between, AnimContext};
use crate::registry::SceneRegistry;
use crate::state::CameraTarget;
use glam::Vec3;

pub fn camera(t: f32) -> CameraTarget {
    camera_between(Vec3::new(0.0, 0.0, 5.4), Vec3::new(0.2, 0.25, 4.7), Vec3::ZERO, t)
}

/// Core grows and lifts with the scroll fraction.
pub fn update(registry: &mut SceneRegistry, scroll: f32) {
    let Some(core) = registry.core else {
        return;
    };
    if let Some(node) = registry.node_mut(core) {
        node.scale = Vec3::splat(1.0 + scroll * 0.4);
        node.position.y = scroll * 0.8;
    }
}

/// Idle rotation of the core and the particle cloud. Runs every frame
/// whatever scene is active.
pub fn update_idle(registry: &mut SceneRegistry, ctx: &AnimContext<'_>) {
    let t = ctx.elapsed;
    let (mx, my) = (ctx.pointer.x, ctx.pointer.y);
    if let Some(core) = registry.core {
        if let Some(node) = registry.node_mut(core) {
            node.rotation.y = t * 0.1 + mx * 0.5;
            node.rotation.x = (t * 0.5).sin() * 0.1 + my * 0.5;
        }
    }
    if let Some(particles) = registry.particles {
        if let Some(node) = registry.node_mut(particles) {
            node.rotation.y = -t * 0.05;
            node.rotation.z = mx * 0.1;
        }
    }
}
