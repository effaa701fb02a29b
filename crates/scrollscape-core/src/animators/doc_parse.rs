use super::{camera_between, pose_group, AnimContext};
use crate::math::{clamp01, ramp};
use crate::registry::{DocRig, SceneRegistry};
use crate::scene::SceneId;
use crate::state::CameraTarget;
use glam::Vec3;

pub fn camera(t: f32) -> CameraTarget {
    camera_between(Vec3::new(0.1, 0.2, 5.6), Vec3::new(0.25, 0.15, 4.2), Vec3::ZERO, t)
}

/// Split the page into regions, wire them together and keep the tag leader
/// lines attached.
pub fn update(registry: &mut SceneRegistry, ctx: &AnimContext<'_>, t: f32) {
    let Some(rig) = registry.doc.take() else {
        return;
    };
    apply(registry, &rig, ctx, t);
    registry.doc = Some(rig);
}

fn apply(registry: &mut SceneRegistry, rig: &DocRig, ctx: &AnimContext<'_>, t: f32) {
    let elapsed = ctx.elapsed;
    pose_group(
        registry,
        SceneId::DocParse,
        ctx.profile,
        Vec3::new(0.12 + ctx.pointer.y * 0.15, elapsed * 0.08 + ctx.pointer.x * 0.25, 0.0),
    );

    let split = ramp(t, 0.15, 0.7);
    let pulse = 0.65 + (elapsed * 2.2).sin() * 0.12;

    let mut region_positions = Vec::with_capacity(rig.regions.len());
    for (i, region) in rig.regions.iter().enumerate() {
        let position = region.home.lerp(region.scatter, split);
        region_positions.push(position);
        if let Some(node) = registry.node_mut(region.node) {
            let s = 0.98 + split * 0.06;
            node.position = position;
            node.scale = Vec3::new(s, s, 1.0);
        }
        let Some(&dot) = rig.nodes.get(i) else {
            continue;
        };
        if let Some(node) = registry.node_mut(dot) {
            node.position = position + Vec3::new(0.0, 0.0, 0.25);
        }
        registry.set_opacity(dot, 0.25 + split * 0.75);
    }

    for tag in &rig.tags {
        let Some(anchor) = region_positions.get(tag.anchor_index) else {
            continue;
        };
        if let Some(group) = registry.node_mut(tag.group) {
            group.position = *anchor;
        }
        if let Some(line) = registry.node_mut(tag.line) {
            line.vertices = vec![tag.anchor_offset, tag.mid_offset, tag.label_offset];
        }
    }

    registry.set_opacity(rig.links, clamp01((t - 0.35) / 0.55) * 0.65 * pulse);
    let dots: Vec<Vec3> = rig
        .nodes
        .iter()
        .take(3)
        .filter_map(|id| registry.node(*id).map(|n| n.position))
        .collect();
    if let [n0, n1, n2] = dots[..] {
        if let Some(links) = registry.node_mut(rig.links) {
            links.vertices = vec![n0, n1, n1, n2, n0, n2];
        }
    }

    registry.set_opacity(rig.paper, 0.75 + (1.0 - split) * 0.2);
}
