//! Document conveyor: a page travels along the belt past a row of stations.
//!
//! The station nearest the document (by x) is the "stage". The stage drives
//! station emphasis, the scanner beam near the first two stations, the
//! handwriting strokes around two thirds of the way along and the spark
//! shower.

use super::{camera_between, pose_group, AnimContext};
use crate::constants::{
    PIPELINE_DOC_END_X, PIPELINE_DOC_START_X, PIPELINE_STATION_EASE, SPARK_EMIT_SPREAD_X,
    SPARK_EMIT_SPREAD_Z, SPARK_EMIT_Y, SPARK_MAX_ABS_X, SPARK_MAX_ABS_Z, SPARK_MAX_Y,
};
use crate::math::{clamp01, lerp, nearest_index, ramp};
use crate::registry::{PipelineRig, SceneRegistry};
use crate::scene::SceneId;
use crate::state::CameraTarget;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::Rng;

pub fn camera(t: f32) -> CameraTarget {
    camera_between(
        Vec3::new(0.2, 0.55, 7.2),
        Vec3::new(0.3, 0.8, 6.0),
        Vec3::new(0.0, -0.2, 0.0),
        t,
    )
}

pub fn update(registry: &mut SceneRegistry, ctx: &AnimContext<'_>, t: f32, rng: &mut StdRng) {
    let Some(rig) = registry.pipeline.take() else {
        return;
    };
    apply(registry, &rig, ctx, t, rng);
    registry.pipeline = Some(rig);
}

/// Stage index and distance for a document at `doc_x`.
pub fn stage_for(station_xs: &[f32], doc_x: f32) -> Option<(usize, f32)> {
    nearest_index(station_xs, doc_x)
}

fn apply(registry: &mut SceneRegistry, rig: &PipelineRig, ctx: &AnimContext<'_>, t: f32, rng: &mut StdRng) {
    let elapsed = ctx.elapsed;
    pose_group(
        registry,
        SceneId::Pipeline,
        ctx.profile,
        Vec3::new(0.05 + ctx.pointer.y * 0.1, ctx.pointer.x * 0.15, 0.0),
    );

    if let Some(lights) = registry.lights.as_mut() {
        let lift = lerp(0.4, 1.1, t);
        lights.dir.position.y += lift;
        lights.fill.position.y += lift * 0.8;
        lights.point1.position.y += lift * 0.75;
        lights.point2.position.y += lift * 0.75;
    }

    let doc_t = ramp(t, 0.05, 0.9);
    let doc_x = lerp(PIPELINE_DOC_START_X, PIPELINE_DOC_END_X, doc_t);
    if let Some(doc) = registry.node_mut(rig.doc) {
        doc.position.x = doc_x;
        doc.position.y = -0.48 + (elapsed * 2.2 + doc_t * 8.0).sin() * 0.03;
        doc.rotation.z = (elapsed * 1.2).sin() * 0.03;
    }
    if let Some(m) = registry.node_material_mut(rig.doc) {
        if m.emissive_intensity.is_some() {
            m.emissive_intensity = Some(0.25 + ramp(t, 0.15, 0.7) * 0.55);
        }
    }

    let belt_offset = (elapsed * 0.25).rem_euclid(1.0);
    for tex in &rig.belt_textures {
        if let Some(tex) = registry.texture_mut(*tex) {
            tex.offset.x = belt_offset;
        }
    }
    for roller in &rig.rollers {
        if let Some(node) = registry.node_mut(*roller) {
            node.rotation.x = elapsed * 3.2;
        }
    }

    let station_xs: Vec<f32> = rig
        .stations
        .iter()
        .map(|id| registry.node(*id).map(|n| n.position.x).unwrap_or(0.0))
        .collect();
    let Some((stage, best)) = stage_for(&station_xs, doc_x) else {
        return;
    };

    for (i, station) in rig.stations.iter().enumerate() {
        let focused = i == stage;
        let d = i.abs_diff(stage) as f32;
        if let Some(node) = registry.node_mut(*station) {
            node.scale = Vec3::splat(1.0 + (0.06 - d * 0.02).max(0.0));
        }
        let Some(parts) = rig.station_parts.get(i) else {
            continue;
        };
        let fi = i as f32;

        if let Some(m) = parts.light.and_then(|id| registry.node_material_mut(id)) {
            let target = if focused { 0.85 } else { 0.25 };
            m.opacity = lerp(m.opacity, target, PIPELINE_STATION_EASE);
        }
        if let Some(m) = parts.housing.and_then(|id| registry.node_material_mut(id)) {
            if let Some(current) = m.emissive_intensity {
                let target = if focused { 0.55 } else { 0.2 };
                m.emissive_intensity = Some(lerp(current, target, PIPELINE_STATION_EASE));
            }
        }
        if let Some(core) = parts.core {
            if let Some(node) = registry.node_mut(core) {
                node.rotation.x = elapsed * 0.8 + fi * 0.6;
                node.rotation.y = elapsed * 1.1 + fi * 0.4;
            }
            if let Some(m) = registry.node_material_mut(core) {
                if m.emissive_intensity.is_some() {
                    let pulse = 0.75 + (elapsed * 3.0 + fi).sin() * 0.25;
                    let focus = if focused { 1.0 } else { 0.55 };
                    m.emissive_intensity = Some(0.55 + pulse * 0.75 * focus);
                }
            }
        }
        if let Some(m) = parts.window.and_then(|id| registry.node_material_mut(id)) {
            if m.emissive_intensity.is_some() {
                let pulse = 0.75 + (elapsed * 2.4 + fi * 0.9).sin() * 0.25;
                let focus = if focused { 1.0 } else { 0.45 };
                m.emissive_intensity = Some(0.25 + pulse * 0.55 * focus);
            }
        }
    }

    let stage_norm = stage as f32 / (station_xs.len().max(2) - 1) as f32;
    let scan = if stage <= 1 { clamp01(1.0 - best / 0.55) } else { 0.0 };
    if let Some(beam) = rig.scan_beam {
        registry.set_opacity(beam, scan * (0.15 + (elapsed * 9.0).sin() * 0.05));
        let sweep = (elapsed * 6.5).sin() * 0.5 + 0.5;
        if let Some(node) = registry.node_mut(beam) {
            node.position.x = lerp(-2.7, -0.9, ramp(doc_t, 0.12, 0.22)) + (sweep - 0.5) * 0.12;
        }
    }

    let handwriting = clamp01(1.0 - (stage_norm - 0.66).abs() / 0.18) * clamp01(1.0 - best / 0.9);
    let stroke_alpha = handwriting * (0.55 + (elapsed * 2.6).sin() * 0.12);
    for stroke in &rig.strokes {
        registry.set_opacity(*stroke, stroke_alpha);
    }

    if let Some(sparks) = rig.sparks {
        let strength = ramp(t, 0.18, 0.25) * (0.35 + scan * 0.65);
        registry.set_opacity(sparks, strength * (0.55 + (elapsed * 3.0).sin() * 0.1));
        if let Some(node) = registry.node_mut(sparks) {
            step_sparks(&mut node.vertices, &rig.spark_velocities, rng);
        }
    }
}

/// Integrate spark positions one step and respawn any that leave the
/// bounding box at the emitter.
pub fn step_sparks(positions: &mut [Vec3], velocities: &[Vec3], rng: &mut StdRng) {
    for (p, v) in positions.iter_mut().zip(velocities) {
        *p += *v;
        if p.y > SPARK_MAX_Y || p.x.abs() > SPARK_MAX_ABS_X || p.z.abs() > SPARK_MAX_ABS_Z {
            *p = Vec3::new(
                (rng.gen::<f32>() - 0.5) * SPARK_EMIT_SPREAD_X,
                SPARK_EMIT_Y,
                (rng.gen::<f32>() - 0.5) * SPARK_EMIT_SPREAD_Z,
            );
        }
    }
}
