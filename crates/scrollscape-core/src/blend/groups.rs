use super::{MaterialRecord, SceneBlender};
use crate::constants::{DEPTH_WRITE_MIN_ALPHA, GROUP_FADE_SPEED, OPAQUE_MIN_ALPHA, VISIBLE_MIN_ALPHA};
use crate::math::lerp;
use crate::registry::{NodeId, SceneRegistry};
use crate::scene::SceneId;
use fnv::FnvHashSet;

impl SceneBlender {
    /// Ease every primary group's alpha toward 1 for the active scene's
    /// target and 0 elsewhere, then push the result into the registry.
    pub fn update_group_fades(&mut self, active: SceneId, registry: &mut SceneRegistry) {
        let target_scene = active.target();
        for (i, scene) in SceneId::PRIMARY.iter().enumerate() {
            let target = if *scene == target_scene { 1.0 } else { 0.0 };
            self.group_alpha.0[i] = lerp(self.group_alpha.0[i], target, GROUP_FADE_SPEED);
        }
        let alphas = self.group_alpha;
        for (scene, alpha) in alphas.iter() {
            if let Some(Some(group)) = registry.groups.get(scene) {
                self.apply_group_opacity(registry, group, alpha);
            }
        }
    }

    /// Unique materials under `group`, collected once and cached by group id.
    pub fn material_records(&mut self, registry: &SceneRegistry, group: NodeId) -> &[MaterialRecord] {
        self.records.entry(group).or_insert_with(|| {
            let mut seen = FnvHashSet::default();
            let mut records = Vec::new();
            registry.traverse(group, &mut |_, node| {
                for id in &node.materials {
                    if !seen.insert(*id) {
                        continue;
                    }
                    if let Some(m) = registry.material(*id) {
                        records.push(MaterialRecord {
                            material: *id,
                            base_opacity: m.opacity,
                            base_transparent: m.transparent,
                            base_depth_write: m.depth_write,
                        });
                    }
                }
            });
            records
        })
    }

    /// Fade every material under `group` to `alpha` of its base opacity.
    /// Materials are flagged dirty only when transparency or depth writes
    /// flip; the group is hidden outright once nearly transparent.
    pub fn apply_group_opacity(&mut self, registry: &mut SceneRegistry, group: NodeId, alpha: f32) {
        if registry.node(group).is_none() {
            return;
        }
        let records = self.material_records(registry, group);
        for r in records {
            let Some(m) = registry.material_mut(r.material) else {
                continue;
            };
            let prev = (m.transparent, m.depth_write);
            m.transparent = r.base_transparent || alpha < OPAQUE_MIN_ALPHA;
            m.depth_write = r.base_depth_write && alpha > DEPTH_WRITE_MIN_ALPHA;
            m.opacity = r.base_opacity * alpha;
            if prev != (m.transparent, m.depth_write) {
                m.needs_update = true;
            }
        }
        if let Some(node) = registry.node_mut(group) {
            node.visible = alpha > VISIBLE_MIN_ALPHA;
        }
    }
}
