use super::{camera_between, pose_group, AnimContext};
use crate::math::{lerp, ramp};
use crate::registry::{RagRig, SceneRegistry};
use crate::scene::SceneId;
use crate::state::CameraTarget;
use glam::Vec3;

pub fn camera(t: f32) -> CameraTarget {
    camera_between(
        Vec3::new(0.2, 0.35, 6.2),
        Vec3::new(0.6, 0.65, 5.3),
        Vec3::new(0.0, 0.2, 0.0),
        t,
    )
}

pub fn update(registry: &mut SceneRegistry, ctx: &AnimContext<'_>, t: f32) {
    let Some(rig) = registry.rag.take() else {
        return;
    };
    apply(registry, &rig, ctx, t);
    registry.rag = Some(rig);
}

fn apply(registry: &mut SceneRegistry, rig: &RagRig, ctx: &AnimContext<'_>, t: f32) {
    let elapsed = ctx.elapsed;
    pose_group(
        registry,
        SceneId::Rag,
        ctx.profile,
        Vec3::new(0.1 + ctx.pointer.y * 0.08, elapsed * 0.12 + ctx.pointer.x * 0.2, 0.0),
    );

    let emphasis = ramp(t, 0.1, 0.8);
    for n in &rig.nodes {
        let s = n.seed;
        let wobble = (elapsed * 0.7 + s).sin() * 0.04 + (elapsed * 0.9 + s).cos() * 0.03;
        if let Some(node) = registry.node_mut(n.node) {
            node.position = Vec3::new(
                n.base.x * (1.0 + wobble),
                n.base.y + (elapsed * 0.8 + s).sin() * 0.03,
                n.base.z * (1.0 + wobble),
            );
        }
        registry.set_opacity(n.node, 0.45 + emphasis * 0.55);
    }

    let edge_pulse = 0.8 + (elapsed * 1.8).sin() * 0.1;
    for (i, edge) in rig.edges.iter().enumerate() {
        let boost = if i % 7 == 0 { 0.22 } else { 0.0 };
        registry.set_opacity(*edge, (0.08 + emphasis * 0.22 + boost) * edge_pulse);
    }

    let tube_alpha = (0.18 + emphasis * 0.55) * (0.75 + (elapsed * 2.1).sin() * 0.08);
    for tube in &rig.tubes {
        registry.set_opacity(*tube, tube_alpha);
    }

    if let Some(query) = registry.node_mut(rig.query) {
        query.rotation.x = elapsed * 0.4;
        query.rotation.y = elapsed * 0.6;
        query.position.x = lerp(-2.6, -1.6, t);
        query.position.y = lerp(0.2, 0.9, t);
    }
}
