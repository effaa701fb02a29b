//! Per-scene procedural animation.
//!
//! Each animator is a pair of free functions: `camera(t)` returns the desired
//! camera pose for progress `t`, and `update(..)` recomputes the scene's
//! object transforms and opacities from elapsed time and `t`. Nothing is
//! carried between frames except what lives in the registry itself.

use crate::constants::{SERVICES_CAMERA_PROGRESS, SERVICES_PIPELINE_PROGRESS};
use crate::lock::SceneProgress;
use crate::math::clamp01;
use crate::profile::ViewportProfile;
use crate::registry::SceneRegistry;
use crate::scene::SceneId;
use crate::state::CameraTarget;
use crate::tracker::ActiveSceneState;
use glam::{Vec2, Vec3};
use rand::rngs::StdRng;

pub mod doc_parse;
pub mod intro;
pub mod pipeline;
pub mod rag;

/// Inputs shared by every animator for one frame.
#[derive(Clone, Copy, Debug)]
pub struct AnimContext<'a> {
    /// Seconds since the loop started.
    pub elapsed: f32,
    /// Pointer position normalised to [-0.5, 0.5] on both axes.
    pub pointer: Vec2,
    pub profile: &'a ViewportProfile,
}

/// Progress values fed to the animator of a target scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimProgress {
    pub scene: f32,
    pub camera: f32,
}

/// Resolve which progress drives the target scene of `active`.
///
/// Intro motion follows the raw scroll fraction while its camera follows the
/// active section's own progress, so each section aliased onto intro starts
/// its camera pull-in afresh. Lockable scenes use their clamped scene
/// progress, and the services overlay fixed pipeline values.
pub fn progress_for(active: ActiveSceneState, scroll_percent: f32, progress: &SceneProgress) -> AnimProgress {
    let scene = active.scene;
    match scene.target() {
        SceneId::Intro => AnimProgress {
            scene: clamp01(scroll_percent),
            camera: clamp01(active.progress),
        },
        SceneId::Pipeline if scene == SceneId::Services => AnimProgress {
            scene: SERVICES_PIPELINE_PROGRESS,
            camera: SERVICES_CAMERA_PROGRESS,
        },
        target => {
            let t = clamp01(progress.get(target));
            AnimProgress { scene: t, camera: t }
        }
    }
}

/// Run the animator for `active`'s target scene and return its camera pose.
pub fn animate(
    active: ActiveSceneState,
    scroll_percent: f32,
    progress: &SceneProgress,
    registry: &mut SceneRegistry,
    ctx: &AnimContext<'_>,
    rng: &mut StdRng,
) -> CameraTarget {
    let p = progress_for(active, scroll_percent, progress);
    match active.scene.target() {
        SceneId::DocParse => {
            doc_parse::update(registry, ctx, p.scene);
            doc_parse::camera(p.camera)
        }
        SceneId::Rag => {
            rag::update(registry, ctx, p.scene);
            rag::camera(p.camera)
        }
        SceneId::Pipeline => {
            pipeline::update(registry, ctx, p.scene, rng);
            pipeline::camera(p.camera)
        }
        _ => {
            intro::update(registry, p.scene);
            intro::camera(p.camera)
        }
    }
}

/// Position a primary group at the origin with pointer-driven tilt and the
/// viewport's group scale.
pub(crate) fn pose_group(registry: &mut SceneRegistry, scene: SceneId, profile: &ViewportProfile, rotation: Vec3) {
    let Some(Some(group)) = registry.groups.get(scene) else {
        return;
    };
    if let Some(node) = registry.node_mut(group) {
        node.position = Vec3::ZERO;
        node.rotation = rotation;
        node.scale = Vec3::splat(profile.group_scale(scene));
    }
}

pub(crate) fn camera_between(from: Vec3, to: Vec3, look_at: Vec3, t: f32) -> CameraTarget {
    CameraTarget {
        position: from.lerp(to, t),
        look_at,
    }
}
