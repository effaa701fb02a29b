//! Per-frame blending of scene visibility and the light/dark theme.
//!
//! Both weights are eased toward targets derived from the active scene, so
//! they never jump. The blender runs before the active animator each frame;
//! animators may then override individual opacities on top of the fade.

use crate::registry::{MaterialId, NodeId, SceneRegistry};
use crate::scene::{PerPrimary, SceneId};
use fnv::FnvHashMap;

mod environment;
mod groups;

pub use environment::EnvironmentFrame;

/// Snapshot of a material's fade-relevant state taken the first time its
/// group is faded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaterialRecord {
    pub material: MaterialId,
    pub base_opacity: f32,
    pub base_transparent: bool,
    pub base_depth_write: bool,
}

#[derive(Clone, Debug)]
pub struct SceneBlender {
    group_alpha: PerPrimary<f32>,
    env_mix: f32,
    records: FnvHashMap<NodeId, Vec<MaterialRecord>>,
}

impl Default for SceneBlender {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneBlender {
    /// Intro starts fully visible, every other group hidden, dark theme.
    pub fn new() -> Self {
        let mut group_alpha = PerPrimary([0.0; 4]);
        group_alpha.set(SceneId::Intro, 1.0);
        Self {
            group_alpha,
            env_mix: 0.0,
            records: FnvHashMap::default(),
        }
    }

    pub fn group_alpha(&self, scene: SceneId) -> f32 {
        self.group_alpha.get(scene).unwrap_or(0.0)
    }

    pub fn group_alphas(&self) -> &PerPrimary<f32> {
        &self.group_alpha
    }

    pub fn env_mix(&self) -> f32 {
        self.env_mix
    }

    /// Run both blend passes for one frame: environment first, then fades.
    pub fn update(&mut self, active: SceneId, registry: &mut SceneRegistry) -> EnvironmentFrame {
        let env = self.update_environment(active, registry);
        self.update_group_fades(active, registry);
        env
    }
}
